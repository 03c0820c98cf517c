//! # Storage
//!
//! ## Instance storage
//!
//! | Key              | Type         | Description                          |
//! |------------------|--------------|--------------------------------------|
//! | `Owner`          | `Address`    | Administers the wiring               |
//! | `Config`         | `PoolConfig` | Yield source and its deposit token   |
//! | `PrizeStrategy`  | `Address`    | May claim interest                   |
//! | `Lottery`        | `Address`    | May deposit and withdraw principal   |
//! | `TotalPrincipal` | `i128`       | Sum of all depositor principal       |
//!
//! ## Persistent storage
//!
//! | Key               | Type   | Description                   |
//! |-------------------|--------|-------------------------------|
//! | `Principal(user)` | `i128` | Principal owned by `user`     |
//!
//! Zero balances are removed rather than stored.

use soroban_sdk::{contracttype, Address, Env};

use lottery_shared::ttl::{bump_instance, bump_persistent};
use lottery_shared::Error;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Owner,
    Config,
    PrizeStrategy,
    Lottery,
    TotalPrincipal,
    Principal(Address),
}

/// Immutable pool wiring.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolConfig {
    pub yield_source: Address,
    /// Deposit token of the yield source, cached at initialisation.
    pub token: Address,
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn init(
    env: &Env,
    owner: &Address,
    config: &PoolConfig,
    prize_strategy: &Address,
    lottery: &Address,
) {
    let instance = env.storage().instance();
    instance.set(&DataKey::Owner, owner);
    instance.set(&DataKey::Config, config);
    instance.set(&DataKey::PrizeStrategy, prize_strategy);
    instance.set(&DataKey::Lottery, lottery);
    instance.set(&DataKey::TotalPrincipal, &0i128);
    bump_instance(env);
}

fn load_address(env: &Env, key: &DataKey) -> Result<Address, Error> {
    bump_instance(env);
    env.storage()
        .instance()
        .get(key)
        .ok_or(Error::NotInitialized)
}

pub fn load_owner(env: &Env) -> Result<Address, Error> {
    load_address(env, &DataKey::Owner)
}

pub fn save_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn load_prize_strategy(env: &Env) -> Result<Address, Error> {
    load_address(env, &DataKey::PrizeStrategy)
}

pub fn save_prize_strategy(env: &Env, prize_strategy: &Address) {
    env.storage()
        .instance()
        .set(&DataKey::PrizeStrategy, prize_strategy);
}

pub fn load_lottery(env: &Env) -> Result<Address, Error> {
    load_address(env, &DataKey::Lottery)
}

pub fn save_lottery(env: &Env, lottery: &Address) {
    env.storage().instance().set(&DataKey::Lottery, lottery);
}

pub fn load_config(env: &Env) -> Result<PoolConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn load_total_principal(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalPrincipal)
        .unwrap_or(0)
}

pub fn load_principal(env: &Env, user: &Address) -> i128 {
    let key = DataKey::Principal(user.clone());
    match env.storage().persistent().get::<DataKey, i128>(&key) {
        Some(principal) => {
            bump_persistent(env, &key);
            principal
        }
        None => 0,
    }
}

fn save_principal(env: &Env, user: &Address, principal: i128) {
    let key = DataKey::Principal(user.clone());
    if principal == 0 {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, &principal);
    bump_persistent(env, &key);
}

pub fn credit_principal(env: &Env, user: &Address, amount: i128) -> Result<(), Error> {
    let principal = load_principal(env, user)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    let total = load_total_principal(env)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    save_principal(env, user, principal);
    env.storage()
        .instance()
        .set(&DataKey::TotalPrincipal, &total);
    Ok(())
}

pub fn debit_principal(env: &Env, user: &Address, amount: i128) -> Result<(), Error> {
    let principal = load_principal(env, user);
    if principal < amount {
        return Err(Error::InsufficientBalance);
    }
    let total = load_total_principal(env)
        .checked_sub(amount)
        .ok_or(Error::Overflow)?;
    save_principal(env, user, principal - amount);
    env.storage()
        .instance()
        .set(&DataKey::TotalPrincipal, &total);
    Ok(())
}
