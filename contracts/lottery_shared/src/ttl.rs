//! Storage TTL policy shared by every contract.
//!
//! Instance storage is bumped by **7 days** whenever it falls below 1 day
//! remaining; persistent entries by **30 days** whenever they fall below 7 days.

use soroban_sdk::{Env, IntoVal, Val};

/// Approximate ledgers per day (~5 seconds per ledger).
pub const DAY_IN_LEDGERS: u32 = 17_280;

pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

/// Extend instance storage TTL if it falls below the threshold.
pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Extend the TTL for a persistent storage key.
pub fn bump_persistent<K>(env: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Last ledger an allowance granted now may live until.
///
/// Used for the one-time "unlimited" approvals contracts grant downstream.
/// The asset contract extends the allowance entry one ledger past the
/// expiration it is given, so the horizon sits one below the host maximum.
pub fn approval_horizon(env: &Env) -> u32 {
    env.ledger().max_live_until_ledger().saturating_sub(1)
}
