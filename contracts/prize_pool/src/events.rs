use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deposited {
    pub to: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Withdrawn {
    pub from: Address,
    pub to: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InterestWithdrawn {
    pub to: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LotterySet {
    pub lottery: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrizeStrategySet {
    pub prize_strategy: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferred {
    pub previous_owner: Address,
    pub new_owner: Address,
}

pub fn emit_deposited(env: &Env, event: Deposited) {
    env.events()
        .publish((symbol_short!("deposited"), event.to.clone()), event);
}

pub fn emit_withdrawn(env: &Env, event: Withdrawn) {
    env.events()
        .publish((symbol_short!("withdrawn"), event.from.clone()), event);
}

pub fn emit_interest_withdrawn(env: &Env, event: InterestWithdrawn) {
    env.events()
        .publish((symbol_short!("swept"), event.to.clone()), event);
}

pub fn emit_lottery_set(env: &Env, event: LotterySet) {
    env.events()
        .publish((symbol_short!("lot_set"), event.lottery.clone()), event);
}

pub fn emit_prize_strategy_set(env: &Env, event: PrizeStrategySet) {
    env.events()
        .publish((symbol_short!("strat_set"), event.prize_strategy.clone()), event);
}

pub fn emit_ownership_transferred(env: &Env, event: OwnershipTransferred) {
    env.events()
        .publish((symbol_short!("own_xfer"), event.new_owner.clone()), event);
}
