use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LotteryInitialized {
    pub factory: Address,
    pub owner: Address,
    pub token: Address,
    pub ticket_price: i128,
    pub interval: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrizePoolSet {
    pub prize_pool: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrizeStrategySet {
    pub strategy: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Participated {
    pub player: Address,
    pub amount: i128,
    pub deadline: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WinnerPicked {
    pub winner: Address,
    pub prize: i128,
}

/// Owner took principal back after the round.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerWithdrawn {
    pub owner: Address,
    pub amount: i128,
}

/// Participant took their principal back after the round.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrincipalExited {
    pub player: Address,
    pub amount: i128,
}

pub fn emit_initialized(env: &Env, event: LotteryInitialized) {
    env.events()
        .publish((symbol_short!("init"), event.owner.clone()), event);
}

pub fn emit_prize_pool_set(env: &Env, event: PrizePoolSet) {
    env.events()
        .publish((symbol_short!("pool_set"), event.prize_pool.clone()), event);
}

pub fn emit_prize_strategy_set(env: &Env, event: PrizeStrategySet) {
    env.events()
        .publish((symbol_short!("strat_set"), event.strategy.clone()), event);
}

pub fn emit_participated(env: &Env, event: Participated) {
    env.events()
        .publish((symbol_short!("joined"), event.player.clone()), event);
}

pub fn emit_winner_picked(env: &Env, event: WinnerPicked) {
    env.events()
        .publish((symbol_short!("winner"), event.winner.clone()), event);
}

pub fn emit_owner_withdrawn(env: &Env, event: OwnerWithdrawn) {
    env.events()
        .publish((symbol_short!("withdrawn"), event.owner.clone()), event);
}

pub fn emit_principal_exited(env: &Env, event: PrincipalExited) {
    env.events()
        .publish((symbol_short!("exited"), event.player.clone()), event);
}
