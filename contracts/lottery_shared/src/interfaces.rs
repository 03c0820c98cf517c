//! Cross-contract interfaces.
//!
//! Each trait generates a typed client (`*Client`) that a contract uses to
//! call its collaborators by address, without linking the collaborator's crate.
//! Only the entry points a caller actually needs are declared.

use soroban_sdk::{contractclient, Address, Env, Vec};

use crate::{Draw, Error};

/// The external lending market a yield source wraps.
///
/// `owner` is explicit on `withdraw` and `balance` because Soroban has no
/// implicit caller; the market must check `owner.require_auth()`.
#[contractclient(name = "MoneyMarketClient")]
pub trait MoneyMarket {
    /// Pull `amount` of `asset` from `on_behalf_of` (allowance) and credit its position.
    fn supply(env: Env, asset: Address, amount: i128, on_behalf_of: Address) -> Result<(), Error>;

    /// Debit `owner`'s position by `amount` and pay `to`. Returns the amount paid.
    fn withdraw(
        env: Env,
        owner: Address,
        asset: Address,
        amount: i128,
        to: Address,
    ) -> Result<i128, Error>;

    /// Current value of `owner`'s position, accrued interest included.
    fn balance(env: Env, asset: Address, owner: Address) -> i128;
}

#[contractclient(name = "YieldSourceClient")]
pub trait YieldSource {
    fn supply_token_to(
        env: Env,
        caller: Address,
        sender: Address,
        receiver: Address,
        amount: i128,
    ) -> Result<(), Error>;

    fn redeem_token(
        env: Env,
        caller: Address,
        sender: Address,
        receiver: Address,
        amount: i128,
    ) -> Result<(), Error>;

    fn withdraw_interest(env: Env, caller: Address, recipient: Address) -> Result<i128, Error>;

    fn redeem_interest(
        env: Env,
        caller: Address,
        recipient: Address,
        amount: i128,
    ) -> Result<(), Error>;

    fn get_total_interest(env: Env) -> Result<i128, Error>;

    fn total_balance(env: Env) -> Result<i128, Error>;

    fn total_supply(env: Env) -> i128;

    fn balance_of(env: Env, owner: Address) -> i128;

    fn deposit_token(env: Env) -> Result<Address, Error>;
}

#[contractclient(name = "PrizePoolClient")]
pub trait PrizePool {
    fn deposit_to(env: Env, caller: Address, to: Address, amount: i128) -> Result<(), Error>;

    fn withdraw_from(
        env: Env,
        caller: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), Error>;

    fn claim_interest(env: Env, caller: Address) -> Result<i128, Error>;

    fn withdraw_interest(env: Env, caller: Address, to: Address, amount: i128) -> Result<(), Error>;

    fn get_interest(env: Env) -> Result<i128, Error>;

    fn balance_of_user(env: Env, user: Address) -> Result<i128, Error>;

    fn token(env: Env) -> Result<Address, Error>;
}

#[contractclient(name = "PrizeStrategyClient")]
pub trait PrizeStrategy {
    fn distribute(env: Env, caller: Address, participants: Vec<Address>) -> Result<Draw, Error>;

    fn get_prize(env: Env) -> Result<i128, Error>;
}

#[contractclient(name = "LotteryClient")]
pub trait Lottery {
    fn initialize(
        env: Env,
        factory: Address,
        owner: Address,
        token: Address,
        ticket_price: i128,
        interval: u64,
    ) -> Result<(), Error>;
}
