//! # Storage
//!
//! | Key         | Type            | Description                           |
//! |-------------|-----------------|---------------------------------------|
//! | `Owner`     | `Address`       | May create lotteries                  |
//! | `WasmHash`  | `BytesN<32>`    | Uploaded `YieldLottery` wasm          |
//! | `Nonce`     | `u64`           | Deployment counter mixed into salts   |
//! | `Lotteries` | `Vec<Address>`  | Every lottery created, oldest first   |
//!
//! All keys live in instance storage.

use soroban_sdk::{contracttype, Address, BytesN, Env, Vec};

use lottery_shared::ttl::bump_instance;
use lottery_shared::Error;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Owner,
    WasmHash,
    Nonce,
    Lotteries,
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn init(env: &Env, owner: &Address, wasm_hash: &BytesN<32>) {
    let instance = env.storage().instance();
    instance.set(&DataKey::Owner, owner);
    instance.set(&DataKey::WasmHash, wasm_hash);
    instance.set(&DataKey::Nonce, &0u64);
    instance.set(&DataKey::Lotteries, &Vec::<Address>::new(env));
    bump_instance(env);
}

pub fn load_owner(env: &Env) -> Result<Address, Error> {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(Error::NotInitialized)
}

pub fn load_wasm_hash(env: &Env) -> Result<BytesN<32>, Error> {
    env.storage()
        .instance()
        .get(&DataKey::WasmHash)
        .ok_or(Error::NotInitialized)
}

pub fn save_wasm_hash(env: &Env, wasm_hash: &BytesN<32>) {
    env.storage().instance().set(&DataKey::WasmHash, wasm_hash);
}

pub fn load_nonce(env: &Env) -> u64 {
    env.storage().instance().get(&DataKey::Nonce).unwrap_or(0)
}

pub fn save_nonce(env: &Env, nonce: u64) {
    env.storage().instance().set(&DataKey::Nonce, &nonce);
}

pub fn load_lotteries(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::Lotteries)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn push_lottery(env: &Env, lottery: &Address) {
    let mut lotteries = load_lotteries(env);
    lotteries.push_back(lottery.clone());
    env.storage()
        .instance()
        .set(&DataKey::Lotteries, &lotteries);
}
