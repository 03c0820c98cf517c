//! Instance storage holds `Admin` and `Rate`; each `(asset, owner)` position is
//! its own persistent entry.

use soroban_sdk::{contracttype, Address, Env};

use lottery_shared::ttl::{bump_instance, bump_persistent};
use lottery_shared::Error;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Admin,
    Rate,
    Position(Address, Address),
}

/// Interest-bearing position, checkpointed at `updated_at`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Position {
    pub amount: i128,
    pub updated_at: u64,
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn init(env: &Env, admin: &Address, rate_bps: u32) {
    env.storage().instance().set(&DataKey::Admin, admin);
    env.storage().instance().set(&DataKey::Rate, &rate_bps);
    bump_instance(env);
}

pub fn load_admin(env: &Env) -> Result<Address, Error> {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::NotInitialized)
}

pub fn load_rate(env: &Env) -> Result<u32, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Rate)
        .ok_or(Error::NotInitialized)
}

pub fn save_rate(env: &Env, rate_bps: u32) {
    env.storage().instance().set(&DataKey::Rate, &rate_bps);
    bump_instance(env);
}

pub fn load_position(env: &Env, asset: &Address, owner: &Address) -> Option<Position> {
    let key = DataKey::Position(asset.clone(), owner.clone());
    let position = env.storage().persistent().get(&key);
    if position.is_some() {
        bump_persistent(env, &key);
    }
    position
}

pub fn save_position(env: &Env, asset: &Address, owner: &Address, position: &Position) {
    let key = DataKey::Position(asset.clone(), owner.clone());
    env.storage().persistent().set(&key, position);
    bump_persistent(env, &key);
}
