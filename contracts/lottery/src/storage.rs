//! # Storage
//!
//! ## Instance storage
//!
//! | Key             | Type            | Description                               |
//! |-----------------|-----------------|-------------------------------------------|
//! | `Owner`         | `Address`       | Administers the lottery                   |
//! | `Config`        | `LotteryConfig` | Immutable round parameters                |
//! | `PrizePool`     | `Address`       | Receives ticket money (optional)          |
//! | `Strategy`      | `Address`       | Draws the winner (optional)               |
//! | `Deadline`      | `u64`           | 0 until the first participation           |
//! | `Participants`  | `Vec<Address>`  | Insertion order, no duplicates            |
//! | `Winner`        | `Address`       | Present once the draw happened            |
//! | `Prize`         | `i128`          | Amount paid to the winner                 |
//!
//! ## Persistent storage
//!
//! | Key                   | Type   | Description                         |
//! |-----------------------|--------|-------------------------------------|
//! | `Participant(player)` | `bool` | Membership index for `Participants` |

use soroban_sdk::{contracttype, Address, Env, Vec};

use lottery_shared::ttl::{bump_instance, bump_persistent};
use lottery_shared::Error;

use crate::types::LotteryConfig;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Owner,
    Config,
    PrizePool,
    Strategy,
    Deadline,
    Participants,
    Winner,
    Prize,
    Participant(Address),
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn init(env: &Env, owner: &Address, config: &LotteryConfig) {
    let instance = env.storage().instance();
    instance.set(&DataKey::Owner, owner);
    instance.set(&DataKey::Config, config);
    instance.set(&DataKey::Deadline, &0u64);
    instance.set(&DataKey::Participants, &Vec::<Address>::new(env));
    bump_instance(env);
}

pub fn load_owner(env: &Env) -> Result<Address, Error> {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(Error::NotInitialized)
}

pub fn load_config(env: &Env) -> Result<LotteryConfig, Error> {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn load_prize_pool(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::PrizePool)
}

pub fn save_prize_pool(env: &Env, prize_pool: &Address) {
    env.storage().instance().set(&DataKey::PrizePool, prize_pool);
}

pub fn load_strategy(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Strategy)
}

pub fn save_strategy(env: &Env, strategy: &Address) {
    env.storage().instance().set(&DataKey::Strategy, strategy);
}

pub fn load_deadline(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::Deadline)
        .unwrap_or(0)
}

pub fn save_deadline(env: &Env, deadline: u64) {
    env.storage().instance().set(&DataKey::Deadline, &deadline);
}

pub fn load_participants(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::Participants)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn has_participated(env: &Env, player: &Address) -> bool {
    let key = DataKey::Participant(player.clone());
    let joined = env.storage().persistent().has(&key);
    if joined {
        bump_persistent(env, &key);
    }
    joined
}

pub fn save_participants(env: &Env, participants: &Vec<Address>) {
    env.storage()
        .instance()
        .set(&DataKey::Participants, participants);
}

pub fn mark_participant(env: &Env, player: &Address) {
    let key = DataKey::Participant(player.clone());
    env.storage().persistent().set(&key, &true);
    bump_persistent(env, &key);
}

pub fn load_winner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Winner)
}

pub fn load_prize(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::Prize).unwrap_or(0)
}

pub fn save_draw(env: &Env, winner: &Address, prize: i128) {
    env.storage().instance().set(&DataKey::Winner, winner);
    env.storage().instance().set(&DataKey::Prize, &prize);
}
