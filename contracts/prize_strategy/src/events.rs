use soroban_sdk::{contracttype, symbol_short, Address, Env};

/// Emitted once per draw.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrizeAwarded {
    pub lottery: Address,
    pub winner: Address,
    pub prize: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrizePoolSet {
    pub prize_pool: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LotterySet {
    pub lottery: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferred {
    pub previous_owner: Address,
    pub new_owner: Address,
}

pub fn emit_prize_awarded(env: &Env, event: PrizeAwarded) {
    env.events()
        .publish((symbol_short!("awarded"), event.winner.clone()), event);
}

pub fn emit_prize_pool_set(env: &Env, event: PrizePoolSet) {
    env.events()
        .publish((symbol_short!("pool_set"), event.prize_pool.clone()), event);
}

pub fn emit_lottery_set(env: &Env, event: LotterySet) {
    env.events()
        .publish((symbol_short!("lot_set"), event.lottery.clone()), event);
}

pub fn emit_ownership_transferred(env: &Env, event: OwnershipTransferred) {
    env.events()
        .publish((symbol_short!("own_xfer"), event.new_owner.clone()), event);
}
