//! # Storage
//!
//! ## Instance storage
//!
//! | Key           | Type                | Description                       |
//! |---------------|---------------------|-----------------------------------|
//! | `Owner`       | `Address`           | Caller allowed to move principal  |
//! | `Config`      | `YieldSourceConfig` | Immutable asset/market wiring     |
//! | `TotalSupply` | `i128`              | Outstanding shares (= principal)  |
//!
//! ## Persistent storage
//!
//! | Key              | Type   | Description          |
//! |------------------|--------|----------------------|
//! | `Shares(holder)` | `i128` | Share balance        |

use soroban_sdk::{contracttype, Address, Env, String};

use lottery_shared::ttl::{bump_instance, bump_persistent};
use lottery_shared::Error;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Owner,
    Config,
    TotalSupply,
    Shares(Address),
}

/// Wiring fixed at initialisation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct YieldSourceConfig {
    /// Deposit token supplied to the market.
    pub asset: Address,
    /// Money market holding the position.
    pub market: Address,
    pub decimals: u32,
    pub name: String,
    pub symbol: String,
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn init(env: &Env, owner: &Address, config: &YieldSourceConfig) {
    env.storage().instance().set(&DataKey::Owner, owner);
    env.storage().instance().set(&DataKey::Config, config);
    env.storage().instance().set(&DataKey::TotalSupply, &0i128);
    bump_instance(env);
}

pub fn load_owner(env: &Env) -> Result<Address, Error> {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(Error::NotInitialized)
}

pub fn save_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
    bump_instance(env);
}

pub fn load_config(env: &Env) -> Result<YieldSourceConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn load_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn load_shares(env: &Env, holder: &Address) -> i128 {
    let key = DataKey::Shares(holder.clone());
    match env.storage().persistent().get::<DataKey, i128>(&key) {
        Some(shares) => {
            bump_persistent(env, &key);
            shares
        }
        None => 0,
    }
}

fn save_shares(env: &Env, holder: &Address, shares: i128) {
    let key = DataKey::Shares(holder.clone());
    if shares == 0 {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, &shares);
    bump_persistent(env, &key);
}

/// Credit `amount` shares to `holder` and grow the total supply.
pub fn mint_shares(env: &Env, holder: &Address, amount: i128) -> Result<(), Error> {
    let balance = load_shares(env, holder)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    let total = load_total_supply(env)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    save_shares(env, holder, balance);
    env.storage().instance().set(&DataKey::TotalSupply, &total);
    Ok(())
}

/// Debit `amount` shares from `holder` and shrink the total supply.
pub fn burn_shares(env: &Env, holder: &Address, amount: i128) -> Result<(), Error> {
    let balance = load_shares(env, holder);
    if balance < amount {
        return Err(Error::InsufficientBalance);
    }
    let total = load_total_supply(env)
        .checked_sub(amount)
        .ok_or(Error::Overflow)?;
    save_shares(env, holder, balance - amount);
    env.storage().instance().set(&DataKey::TotalSupply, &total);
    Ok(())
}
