#![allow(dead_code)]

extern crate std;

use soroban_sdk::Address;

use lottery_shared::YieldSourceClient;

use crate::YieldSourcePrizePoolClient;

/// Per-user principal sums to the pool total, and the pool total equals the
/// shares outstanding in the yield source.
pub fn assert_principal_partition(
    pool: &YieldSourcePrizePoolClient,
    ys: &YieldSourceClient,
    users: &[Address],
) {
    let sum: i128 = users.iter().map(|u| pool.principal_of(u)).sum();
    let total = pool.total_principal();
    assert_eq!(sum, total, "principal partition broken: {} != {}", sum, total);
    assert_eq!(
        total,
        ys.total_supply(),
        "pool principal {} diverged from yield source shares",
        total
    );
    for user in users {
        assert_eq!(pool.principal_of(user), pool.balance_of_user(user));
    }
}

/// Pool value never drops below its principal.
pub fn assert_solvent(pool: &YieldSourcePrizePoolClient) {
    let balance = pool.balance();
    let principal = pool.total_principal();
    assert!(
        balance >= principal,
        "pool insolvent: balance {} < principal {}",
        balance,
        principal
    );
    assert!(pool.get_interest() >= 0);
}
