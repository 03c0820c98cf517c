#![allow(dead_code)]

extern crate std;

use prize_pool::YieldSourcePrizePoolClient;
use yield_source::MarketYieldSourceClient;

use crate::{LotteryState, YieldLotteryClient};

/// Every participant's principal sums to the pool total, which equals the
/// shares outstanding in the yield source. Assumes the lottery is the pool's
/// only depositor.
pub fn assert_principal_partition(
    lottery: &YieldLotteryClient,
    pool: &YieldSourcePrizePoolClient,
    ys: &MarketYieldSourceClient,
) {
    let sum: i128 = lottery
        .participants()
        .iter()
        .map(|p| pool.principal_of(&p))
        .sum();
    assert_eq!(sum, pool.total_principal(), "participant principal != pool total");
    assert_eq!(
        pool.total_principal(),
        ys.total_supply(),
        "pool principal diverged from yield source shares"
    );
}

/// `deadline == 0` exactly while nobody has joined.
pub fn assert_deadline_matches_participation(lottery: &YieldLotteryClient) {
    assert_eq!(
        lottery.deadline() == 0,
        lottery.participants().is_empty(),
        "deadline {} inconsistent with {} participants",
        lottery.deadline(),
        lottery.participants().len()
    );
}

/// A recorded winner means the round is finalized and was a participant.
pub fn assert_winner_consistent(lottery: &YieldLotteryClient) {
    match lottery.winner() {
        Some(winner) => {
            assert_eq!(lottery.state(), LotteryState::Finalized);
            assert!(lottery.participants().contains(&winner));
        }
        None => assert_ne!(lottery.state(), LotteryState::Finalized),
    }
}

pub fn assert_all(
    lottery: &YieldLotteryClient,
    pool: &YieldSourcePrizePoolClient,
    ys: &MarketYieldSourceClient,
) {
    assert_principal_partition(lottery, pool, ys);
    assert_deadline_matches_participation(lottery);
    assert_winner_consistent(lottery);
}
