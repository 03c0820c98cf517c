//! # Mock Money Market
//!
//! A minimal lending market satisfying the `MoneyMarket` interface the yield
//! source wraps. Between checkpoints a position earns simple interest at the
//! annual `rate_bps`:
//!
//! ```text
//! value = amount + amount * rate_bps * elapsed / (10_000 * SECONDS_PER_YEAR)
//! ```
//!
//! Every supply or withdrawal folds `value` back into `amount`, so interest
//! compounds at each checkpoint.
//!
//! Interest is paid out of whatever liquidity the market holds beyond supplied
//! funds, so deployments (and tests) fund a reserve by minting or transferring
//! tokens straight to the market address.

#![no_std]

use soroban_sdk::{contract, contractimpl, token, Address, Env};

use lottery_shared::{require_caller, Error};

mod storage;


use storage::{load_admin, load_position, load_rate, save_position};
pub use storage::Position;

pub const BPS_DENOMINATOR: i128 = 10_000;
pub const SECONDS_PER_YEAR: i128 = 365 * 86_400;

#[contract]
pub struct MockMoneyMarket;

#[contractimpl]
impl MockMoneyMarket {
    pub fn initialize(env: Env, admin: Address, rate_bps: u32) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();
        storage::init(&env, &admin, rate_bps);
        Ok(())
    }

    /// Change the annual rate. Only affects time elapsed after the next checkpoint
    /// of each position.
    pub fn set_rate(env: Env, caller: Address, rate_bps: u32) -> Result<(), Error> {
        let admin = load_admin(&env)?;
        require_caller(&caller, &admin, Error::Unauthorized)?;
        storage::save_rate(&env, rate_bps);
        Ok(())
    }

    pub fn rate(env: Env) -> Result<u32, Error> {
        load_rate(&env)
    }

    pub fn supply(env: Env, asset: Address, amount: i128, on_behalf_of: Address) -> Result<(), Error> {
        on_behalf_of.require_auth();
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let value = Self::accrued(&env, &asset, &on_behalf_of)?;
        let amount_after = value.checked_add(amount).ok_or(Error::Overflow)?;
        save_position(
            &env,
            &asset,
            &on_behalf_of,
            &Position {
                amount: amount_after,
                updated_at: env.ledger().timestamp(),
            },
        );

        let market = env.current_contract_address();
        token::Client::new(&env, &asset).transfer_from(&market, &on_behalf_of, &market, &amount);
        Ok(())
    }

    pub fn withdraw(
        env: Env,
        owner: Address,
        asset: Address,
        amount: i128,
        to: Address,
    ) -> Result<i128, Error> {
        owner.require_auth();
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let value = Self::accrued(&env, &asset, &owner)?;
        if amount > value {
            return Err(Error::InsufficientBalance);
        }
        save_position(
            &env,
            &asset,
            &owner,
            &Position {
                amount: value - amount,
                updated_at: env.ledger().timestamp(),
            },
        );

        token::Client::new(&env, &asset).transfer(&env.current_contract_address(), &to, &amount);
        Ok(amount)
    }

    pub fn balance(env: Env, asset: Address, owner: Address) -> i128 {
        Self::accrued(&env, &asset, &owner).unwrap_or(0)
    }
}

impl MockMoneyMarket {
    fn accrued(env: &Env, asset: &Address, owner: &Address) -> Result<i128, Error> {
        let rate = load_rate(env)?;
        match load_position(env, asset, owner) {
            Some(position) => accrue(&position, rate, env.ledger().timestamp()),
            None => Ok(0),
        }
    }
}

/// Value of `position` at `now`: simple interest since its last checkpoint.
pub fn accrue(position: &Position, rate_bps: u32, now: u64) -> Result<i128, Error> {
    let elapsed = now.saturating_sub(position.updated_at) as i128;
    let interest = position
        .amount
        .checked_mul(rate_bps as i128)
        .and_then(|v| v.checked_mul(elapsed))
        .ok_or(Error::Overflow)?
        / (BPS_DENOMINATOR * SECONDS_PER_YEAR);
    position.amount.checked_add(interest).ok_or(Error::Overflow)
}
