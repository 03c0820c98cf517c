//! # Market Yield Source
//!
//! Wraps a single position in an external money market and accounts for the
//! principal supplied to it with a 1:1 share ledger:
//!
//! | Phase      | Entry Point(s)                                        |
//! |------------|-------------------------------------------------------|
//! | Bootstrap  | [`MarketYieldSource::initialize`]                     |
//! | Principal  | `supply_token_to`, `redeem_token`                     |
//! | Interest   | `withdraw_interest`, `redeem_interest`, `get_total_interest` |
//! | Ownership  | `transfer_ownership`                                  |
//! | Queries    | `total_balance`, `total_supply`, `balance_of`, ...    |
//!
//! Shares always equal principal, so
//! `get_total_interest() == total_balance() - total_supply()`.
//!
//! The market is granted an unlimited allowance on the deposit token once, at
//! initialisation, and pulls supplied funds with `transfer_from`. Likewise the
//! owner-designated `sender` of a supply must have approved this contract.

#![no_std]

use soroban_sdk::{contract, contractimpl, token, Address, Env, String};

use lottery_shared::ttl::approval_horizon;
use lottery_shared::{require_caller, require_non_zero, Error, MoneyMarketClient};

mod events;
mod storage;

#[cfg(test)]
mod test;
#[cfg(test)]
mod test_events;

pub use events::{Claimed, OwnershipTransferred, RedeemedToken, SuppliedTokenTo, YieldSourceInitialized};
pub use storage::YieldSourceConfig;

use storage::{burn_shares, load_config, load_owner, load_shares, load_total_supply, mint_shares};

#[contract]
pub struct MarketYieldSource;

#[contractimpl]
impl MarketYieldSource {
    /// Initialise the yield source. Callable once.
    ///
    /// `decimals` must match the deposit token's decimals so that shares and
    /// underlying units line up 1:1.
    pub fn initialize(
        env: Env,
        owner: Address,
        asset: Address,
        market: Address,
        decimals: u32,
        name: String,
        symbol: String,
    ) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();
        require_non_zero(&env, &owner)?;
        require_non_zero(&env, &asset)?;
        require_non_zero(&env, &market)?;

        let asset_client = token::Client::new(&env, &asset);
        if asset_client.decimals() != decimals {
            return Err(Error::DecimalsMismatch);
        }

        let config = YieldSourceConfig {
            asset: asset.clone(),
            market: market.clone(),
            decimals,
            name: name.clone(),
            symbol: symbol.clone(),
        };
        storage::init(&env, &owner, &config);

        asset_client.approve(
            &env.current_contract_address(),
            &market,
            &i128::MAX,
            &approval_horizon(&env),
        );

        events::emit_initialized(
            &env,
            YieldSourceInitialized {
                asset,
                market,
                decimals,
                name,
                symbol,
                owner,
            },
        );
        Ok(())
    }

    /// Pull `amount` from `sender`, supply it to the market and mint `amount`
    /// shares to `receiver`. Owner only.
    pub fn supply_token_to(
        env: Env,
        caller: Address,
        sender: Address,
        receiver: Address,
        amount: i128,
    ) -> Result<(), Error> {
        let owner = load_owner(&env)?;
        require_caller(&caller, &owner, Error::Unauthorized)?;
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        require_non_zero(&env, &sender)?;
        require_non_zero(&env, &receiver)?;

        let config = load_config(&env)?;
        mint_shares(&env, &receiver, amount)?;

        let this = env.current_contract_address();
        token::Client::new(&env, &config.asset).transfer_from(&this, &sender, &this, &amount);
        MoneyMarketClient::new(&env, &config.market).supply(&config.asset, &amount, &this);

        events::emit_supplied(
            &env,
            SuppliedTokenTo {
                from: sender,
                to: receiver,
                amount,
                shares: amount,
            },
        );
        Ok(())
    }

    /// Burn `amount` shares of `sender` and pay `amount` of underlying to
    /// `receiver`. Owner only.
    pub fn redeem_token(
        env: Env,
        caller: Address,
        sender: Address,
        receiver: Address,
        amount: i128,
    ) -> Result<(), Error> {
        let owner = load_owner(&env)?;
        require_caller(&caller, &owner, Error::Unauthorized)?;
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        require_non_zero(&env, &sender)?;
        require_non_zero(&env, &receiver)?;

        let config = load_config(&env)?;
        burn_shares(&env, &sender, amount)?;

        MoneyMarketClient::new(&env, &config.market).withdraw(
            &env.current_contract_address(),
            &config.asset,
            &amount,
            &receiver,
        );

        events::emit_redeemed(
            &env,
            RedeemedToken {
                from: sender,
                to: receiver,
                shares: amount,
                amount,
            },
        );
        Ok(())
    }

    /// Withdraw all accrued interest to `recipient`, leaving principal in the
    /// market. Owner only. Returns the amount paid.
    pub fn withdraw_interest(env: Env, caller: Address, recipient: Address) -> Result<i128, Error> {
        let owner = load_owner(&env)?;
        require_caller(&caller, &owner, Error::Unauthorized)?;
        require_non_zero(&env, &recipient)?;

        let config = load_config(&env)?;
        let interest = Self::get_total_interest(env.clone())?;
        if interest > 0 {
            MoneyMarketClient::new(&env, &config.market).withdraw(
                &env.current_contract_address(),
                &config.asset,
                &interest,
                &recipient,
            );
        }

        events::emit_claimed(
            &env,
            Claimed {
                recipient,
                amount: interest,
            },
        );
        Ok(interest)
    }

    /// Pay `amount` of accrued interest to `recipient`, leaving principal and
    /// any remaining interest in the market. Owner only.
    pub fn redeem_interest(
        env: Env,
        caller: Address,
        recipient: Address,
        amount: i128,
    ) -> Result<(), Error> {
        let owner = load_owner(&env)?;
        require_caller(&caller, &owner, Error::Unauthorized)?;
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        require_non_zero(&env, &recipient)?;
        if amount > Self::get_total_interest(env.clone())? {
            return Err(Error::InsufficientBalance);
        }

        let config = load_config(&env)?;
        MoneyMarketClient::new(&env, &config.market).withdraw(
            &env.current_contract_address(),
            &config.asset,
            &amount,
            &recipient,
        );

        events::emit_claimed(&env, Claimed { recipient, amount });
        Ok(())
    }

    /// Interest accrued beyond principal. Never negative.
    pub fn get_total_interest(env: Env) -> Result<i128, Error> {
        let balance = Self::total_balance(env.clone())?;
        let principal = load_total_supply(&env);
        Ok(balance.checked_sub(principal).ok_or(Error::Overflow)?.max(0))
    }

    /// Current value of the market position: principal plus interest.
    pub fn total_balance(env: Env) -> Result<i128, Error> {
        let config = load_config(&env)?;
        Ok(MoneyMarketClient::new(&env, &config.market)
            .balance(&config.asset, &env.current_contract_address()))
    }

    /// Total shares outstanding, equal to total principal.
    pub fn total_supply(env: Env) -> i128 {
        load_total_supply(&env)
    }

    pub fn balance_of(env: Env, owner: Address) -> i128 {
        load_shares(&env, &owner)
    }

    pub fn deposit_token(env: Env) -> Result<Address, Error> {
        Ok(load_config(&env)?.asset)
    }

    pub fn market(env: Env) -> Result<Address, Error> {
        Ok(load_config(&env)?.market)
    }

    pub fn name(env: Env) -> Result<String, Error> {
        Ok(load_config(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, Error> {
        Ok(load_config(&env)?.symbol)
    }

    pub fn decimals(env: Env) -> Result<u32, Error> {
        Ok(load_config(&env)?.decimals)
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        load_owner(&env)
    }

    /// Hand the yield source to `new_owner` (normally the prize pool).
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
