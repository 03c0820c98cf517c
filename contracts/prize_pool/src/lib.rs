//! # Yield Source Prize Pool
//!
//! Tracks how much principal each depositor owns and routes it into a
//! [`YieldSource`](lottery_shared::YieldSourceClient). Two capabilities gate
//! the mutating entry points:
//!
//! | Capability      | Entry Point(s)                     |
//! |-----------------|------------------------------------|
//! | lottery         | `deposit_to`, `withdraw_from`, `withdraw_interest` |
//! | prize strategy  | `claim_interest`                   |
//! | owner           | `set_lottery`, `set_prize_strategy`, `transfer_ownership` |
//!
//! ## Accounting invariant
//!
//! `sum(principal[*]) == total_principal == yield_source.total_supply()`.
//! Every deposit credits the depositor before tokens move and every
//! withdrawal debits before the yield source pays out.
//!
//! Deposited tokens must already be held by the pool when `deposit_to` runs
//! (the lottery transfers the ticket price in first). The pool grants the yield
//! source a one-time unlimited allowance at initialisation so the yield source
//! can pull them.

#![no_std]

use soroban_sdk::{contract, contractimpl, token, Address, Env};

use lottery_shared::ttl::approval_horizon;
use lottery_shared::{require_caller, require_non_zero, Error, YieldSourceClient};

mod events;
mod storage;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;

pub use events::{
    Deposited, InterestWithdrawn, LotterySet, OwnershipTransferred, PrizeStrategySet, Withdrawn,
};
pub use storage::PoolConfig;

use storage::{
    credit_principal, debit_principal, load_config, load_lottery, load_owner, load_prize_strategy,
    load_principal, load_total_principal,
};

#[contract]
pub struct YieldSourcePrizePool;

#[contractimpl]
impl YieldSourcePrizePool {
    /// Wire the pool to its yield source, prize strategy and lottery. Callable once.
    ///
    /// The yield source must already exist; its deposit token becomes the
    /// pool's token.
    pub fn initialize(
        env: Env,
        owner: Address,
        yield_source: Address,
        prize_strategy: Address,
        lottery: Address,
    ) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();
        require_non_zero(&env, &owner)?;
        require_non_zero(&env, &yield_source)?;
        require_non_zero(&env, &prize_strategy)?;
        require_non_zero(&env, &lottery)?;

        let token = YieldSourceClient::new(&env, &yield_source).deposit_token();
        let config = PoolConfig {
            yield_source: yield_source.clone(),
            token: token.clone(),
        };
        storage::init(&env, &owner, &config, &prize_strategy, &lottery);

        token::Client::new(&env, &token).approve(
            &env.current_contract_address(),
            &yield_source,
            &i128::MAX,
            &approval_horizon(&env),
        );
        Ok(())
    }

    /// Credit `amount` of principal to `to` and supply it to the yield source.
    /// Lottery only.
    pub fn deposit_to(env: Env, caller: Address, to: Address, amount: i128) -> Result<(), Error> {
        let lottery = load_lottery(&env)?;
        require_caller(&caller, &lottery, Error::NotLottery)?;
        require_non_zero(&env, &to)?;
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let config = load_config(&env)?;
        credit_principal(&env, &to, amount)?;

        let this = env.current_contract_address();
        YieldSourceClient::new(&env, &config.yield_source).supply_token_to(&this, &this, &to, &amount);

        events::emit_deposited(&env, Deposited { to, amount });
        Ok(())
    }

    /// Debit `amount` of `from`'s principal and pay it to `to`. Lottery only.
    pub fn withdraw_from(
        env: Env,
        caller: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), Error> {
        let lottery = load_lottery(&env)?;
        require_caller(&caller, &lottery, Error::NotLottery)?;
        require_non_zero(&env, &from)?;
        require_non_zero(&env, &to)?;
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let config = load_config(&env)?;
        debit_principal(&env, &from, amount)?;

        YieldSourceClient::new(&env, &config.yield_source).redeem_token(
            &env.current_contract_address(),
            &from,
            &to,
            &amount,
        );

        events::emit_withdrawn(&env, Withdrawn { from, to, amount });
        Ok(())
    }

    /// Withdraw all accrued interest to the prize strategy. Strategy only.
    /// Returns the amount claimed.
    pub fn claim_interest(env: Env, caller: Address) -> Result<i128, Error> {
        let strategy = load_prize_strategy(&env)?;
        require_caller(&caller, &strategy, Error::NotStrategy)?;

        let config = load_config(&env)?;
        Ok(YieldSourceClient::new(&env, &config.yield_source)
            .withdraw_interest(&env.current_contract_address(), &caller))
    }

    /// Pay `amount` of accrued interest to `to` without touching any
    /// depositor's principal. Lottery only.
    pub fn withdraw_interest(
        env: Env,
        caller: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), Error> {
        let lottery = load_lottery(&env)?;
        require_caller(&caller, &lottery, Error::NotLottery)?;
        require_non_zero(&env, &to)?;
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let config = load_config(&env)?;
        YieldSourceClient::new(&env, &config.yield_source).redeem_interest(
            &env.current_contract_address(),
            &to,
            &amount,
        );

        events::emit_interest_withdrawn(&env, InterestWithdrawn { to, amount });
        Ok(())
    }

    /// Interest currently claimable.
    pub fn get_interest(env: Env) -> Result<i128, Error> {
        let config = load_config(&env)?;
        Ok(YieldSourceClient::new(&env, &config.yield_source).get_total_interest())
    }

    /// Value held in the yield source: principal plus interest.
    pub fn balance(env: Env) -> Result<i128, Error> {
        let config = load_config(&env)?;
        Ok(YieldSourceClient::new(&env, &config.yield_source).total_balance())
    }

    /// `user`'s principal, as shares held in the yield source.
    pub fn balance_of_user(env: Env, user: Address) -> Result<i128, Error> {
        let config = load_config(&env)?;
        Ok(YieldSourceClient::new(&env, &config.yield_source).balance_of(&user))
    }

    /// `user`'s principal as tracked by the pool.
    pub fn principal_of(env: Env, user: Address) -> i128 {
        load_principal(&env, &user)
    }

    pub fn total_principal(env: Env) -> i128 {
        load_total_principal(&env)
    }

    pub fn token(env: Env) -> Result<Address, Error> {
        Ok(load_config(&env)?.token)
    }

    pub fn yield_source(env: Env) -> Result<Address, Error> {
        Ok(load_config(&env)?.yield_source)
    }

    pub fn prize_strategy(env: Env) -> Result<Address, Error> {
        load_prize_strategy(&env)
    }

    pub fn lottery(env: Env) -> Result<Address, Error> {
        load_lottery(&env)
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        load_owner(&env)
    }

    pub fn set_lottery(env: Env, caller: Address, lottery: Address) -> Result<(), Error> {
        let owner = load_owner(&env)?;
        require_caller(&caller, &owner, Error::Unauthorized)?;
        require_non_zero(&env, &lottery)?;

        storage::save_lottery(&env, &lottery);
        events::emit_lottery_set(&env, LotterySet { lottery });
        Ok(())
    }

    pub fn set_prize_strategy(env: Env, caller: Address, prize_strategy: Address) -> Result<(), Error> {
        let owner = load_owner(&env)?;
        require_caller(&caller, &owner, Error::Unauthorized)?;
        require_non_zero(&env, &prize_strategy)?;

        storage::save_prize_strategy(&env, &prize_strategy);
        events::emit_prize_strategy_set(&env, PrizeStrategySet { prize_strategy });
        Ok(())
    }

    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        let owner = load_owner(&env)?;
        require_caller(&caller, &owner, Error::Unauthorized)?;
        require_non_zero(&env, &new_owner)?;

        storage::save_owner(&env, &new_owner);
        events::emit_ownership_transferred(
            &env,
            OwnershipTransferred {
                previous_owner: owner,
                new_owner,
            },
        );
        Ok(())
    }
}
