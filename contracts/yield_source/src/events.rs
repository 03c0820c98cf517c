//! Events emitted by the yield source. Topics are `(symbol, subject)`; data is
//! the struct named after the event.

use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct YieldSourceInitialized {
    pub asset: Address,
    pub market: Address,
    pub decimals: u32,
    pub name: String,
    pub symbol: String,
    pub owner: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SuppliedTokenTo {
    pub from: Address,
    pub to: Address,
    pub amount: i128,
    pub shares: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RedeemedToken {
    pub from: Address,
    pub to: Address,
    pub shares: i128,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Claimed {
    pub recipient: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferred {
    pub previous_owner: Address,
    pub new_owner: Address,
}

pub fn emit_initialized(env: &Env, event: YieldSourceInitialized) {
    env.events()
        .publish((symbol_short!("ys_init"), event.owner.clone()), event);
}

pub fn emit_supplied(env: &Env, event: SuppliedTokenTo) {
    env.events()
        .publish((symbol_short!("supplied"), event.to.clone()), event);
}

pub fn emit_redeemed(env: &Env, event: RedeemedToken) {
    env.events()
        .publish((symbol_short!("redeemed"), event.from.clone()), event);
}

pub fn emit_claimed(env: &Env, event: Claimed) {
    env.events()
        .publish((symbol_short!("claimed"), event.recipient.clone()), event);
}

pub fn emit_ownership_transferred(env: &Env, event: OwnershipTransferred) {
    env.events()
        .publish((symbol_short!("own_xfer"), event.new_owner.clone()), event);
}
