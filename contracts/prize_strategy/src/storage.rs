//! # Storage
//!
//! | Key         | Type      | Description                         |
//! |-------------|-----------|-------------------------------------|
//! | `Owner`     | `Address` | Administers the wiring              |
//! | `PrizePool` | `Address` | Pool whose interest is awarded      |
//! | `Lottery`   | `Address` | Only caller allowed to `distribute` |
//!
//! All keys live in instance storage. The strategy keeps no per-round state.

use soroban_sdk::{contracttype, Address, Env};

use lottery_shared::ttl::bump_instance;
use lottery_shared::Error;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Owner,
    PrizePool,
    Lottery,
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
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

pub fn load_prize_pool(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::PrizePool)
}

pub fn save_prize_pool(env: &Env, prize_pool: &Address) {
    env.storage().instance().set(&DataKey::PrizePool, prize_pool);
}

pub fn load_lottery(env: &Env) -> Option<Address> {
    bump_instance(env);
    env.storage().instance().get(&DataKey::Lottery)
}

pub fn save_lottery(env: &Env, lottery: &Address) {
    env.storage().instance().set(&DataKey::Lottery, lottery);
}
