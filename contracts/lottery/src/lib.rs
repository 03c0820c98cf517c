//! # Yield Lottery
//!
//! One no-loss lottery round. Players buy a single ticket each; the ticket
//! money becomes their principal in the [`PrizePool`](lottery_shared::PrizePoolClient),
//! and once the round's deadline passes the
//! [`PrizeStrategy`](lottery_shared::PrizeStrategyClient) awards the interest the
//! pool earned to one of them.
//!
//! ## Entry points
//!
//! | Function                 | Who            | When                       |
//! |--------------------------|----------------|----------------------------|
//! | `initialize`             | factory        | once                       |
//! | `set_prize_pool`         | owner          | before the first ticket    |
//! | `set_prize_strategy`     | owner          | before the first ticket    |
//! | `participate`            | any player     | `Configured` or `Open`     |
//! | `pick_winner`            | anyone         | `Closed`                   |
//! | `withdraw`               | owner          | `Finalized`                |
//! | `withdraw_principal`     | any player     | `Closed` or `Finalized`    |
//!
//! The deadline is set by the first participation to `now + interval`.
//! A player can join up to `deadline - 1`; the draw is allowed from `deadline`.
//!
//! Interest that accrues after the draw belongs to no one; the owner sweeps it
//! with `withdraw`. Participant principal only ever leaves through
//! `withdraw_principal`.

#![no_std]

use soroban_sdk::{contract, contractimpl, token, Address, Env, Vec};

use lottery_shared::{
    require_caller, require_non_zero, Draw, Error, PrizePoolClient, PrizeStrategyClient,
};

mod events;
mod storage;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;

pub use events::{
    LotteryInitialized, OwnerWithdrawn, Participated, PrincipalExited, PrizePoolSet,
    PrizeStrategySet, WinnerPicked,
};
pub use types::{LotteryConfig, LotteryState};

/// Upper bound on tickets per round; the participant list lives in instance storage.
pub const MAX_PARTICIPANTS: u32 = 500;

#[contract]
pub struct YieldLottery;

#[contractimpl]
impl YieldLottery {
    /// Configure the round. Callable once, by the deploying factory.
    pub fn initialize(
        env: Env,
        factory: Address,
        owner: Address,
        token: Address,
        ticket_price: i128,
        interval: u64,
    ) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        factory.require_auth();
        require_non_zero(&env, &owner)?;
        require_non_zero(&env, &token)?;
        if ticket_price <= 0 || interval == 0 {
            return Err(Error::InvalidAmount);
        }

        let config = LotteryConfig {
            factory: factory.clone(),
            token: token.clone(),
            ticket_price,
            interval,
        };
        storage::init(&env, &owner, &config);

        events::emit_initialized(
            &env,
            LotteryInitialized {
                factory,
                owner,
                token,
                ticket_price,
                interval,
            },
        );
        Ok(())
    }

    pub fn set_prize_pool(env: Env, caller: Address, prize_pool: Address) -> Result<(), Error> {
        Self::require_configurable(&env, &caller)?;
        require_non_zero(&env, &prize_pool)?;
        let config = storage::load_config(&env)?;
        if PrizePoolClient::new(&env, &prize_pool).token() != config.token {
            return Err(Error::TokenMismatch);
        }

        storage::save_prize_pool(&env, &prize_pool);
        events::emit_prize_pool_set(&env, PrizePoolSet { prize_pool });
        Ok(())
    }

    pub fn set_prize_strategy(env: Env, caller: Address, strategy: Address) -> Result<(), Error> {
        Self::require_configurable(&env, &caller)?;
        require_non_zero(&env, &strategy)?;

        storage::save_strategy(&env, &strategy);
        events::emit_prize_strategy_set(&env, PrizeStrategySet { strategy });
        Ok(())
    }

    /// Buy one ticket. Pulls `ticket_price` from `player` into the prize pool
    /// and credits it as the player's principal.
    pub fn participate(env: Env, player: Address) -> Result<(), Error> {
        player.require_auth();
        let config = storage::load_config(&env)?;
        let pool = storage::load_prize_pool(&env).ok_or(Error::PoolNotSet)?;

        let now = env.ledger().timestamp();
        let mut deadline = storage::load_deadline(&env);
        if storage::load_winner(&env).is_some() || (deadline != 0 && now >= deadline) {
            return Err(Error::ClosedForParticipation);
        }
        if storage::has_participated(&env, &player) {
            return Err(Error::AlreadyParticipated);
        }
        let mut participants = storage::load_participants(&env);
        if participants.len() >= MAX_PARTICIPANTS {
            return Err(Error::LotteryFull);
        }
        let token = token::Client::new(&env, &config.token);
        if token.balance(&player) < config.ticket_price {
            return Err(Error::InsufficientBalance);
        }

        participants.push_back(player.clone());
        storage::save_participants(&env, &participants);
        storage::mark_participant(&env, &player);
        if deadline == 0 {
            deadline = now.checked_add(config.interval).ok_or(Error::Overflow)?;
            storage::save_deadline(&env, deadline);
        }

        token.transfer(&player, &pool, &config.ticket_price);
        PrizePoolClient::new(&env, &pool).deposit_to(
            &env.current_contract_address(),
            &player,
            &config.ticket_price,
        );

        events::emit_participated(
            &env,
            Participated {
                player,
                amount: config.ticket_price,
                deadline,
            },
        );
        Ok(())
    }

    /// Sweep `amount` of residual interest to the owner once the draw has run.
    /// Bounded by the pool's current interest; principal stays untouched.
    pub fn withdraw(env: Env, caller: Address, amount: i128) -> Result<(), Error> {
        let owner = storage::load_owner(&env)?;
        require_caller(&caller, &owner, Error::Unauthorized)?;
        let pool = Self::require_closed_pool(&env)?;
        if storage::load_winner(&env).is_none() {
            return Err(Error::NotFinishedYet);
        }

        PrizePoolClient::new(&env, &pool).withdraw_interest(
            &env.current_contract_address(),
            &owner,
            &amount,
        );

        events::emit_owner_withdrawn(&env, OwnerWithdrawn { owner, amount });
        Ok(())
    }

    /// Let a participant take back `amount` of their principal once the round
    /// has closed. The pool rejects amounts above the player's principal.
    pub fn withdraw_principal(env: Env, player: Address, amount: i128) -> Result<(), Error> {
        player.require_auth();
        let pool = Self::require_closed_pool(&env)?;

        PrizePoolClient::new(&env, &pool).withdraw_from(
            &env.current_contract_address(),
            &player,
            &player,
            &amount,
        );

        events::emit_principal_exited(&env, PrincipalExited { player, amount });
        Ok(())
    }

    /// Interest the draw would currently pay.
    pub fn get_future_prize(env: Env) -> Result<i128, Error> {
        if storage::load_deadline(&env) == 0 {
            return Err(Error::NotStartedYet);
        }
        if storage::load_winner(&env).is_some() {
            return Err(Error::ClosedForParticipation);
        }
        let strategy = storage::load_strategy(&env).ok_or(Error::StrategyNotSet)?;
        Ok(PrizeStrategyClient::new(&env, &strategy).get_prize())
    }

    /// Run the draw. Anyone may trigger it once the deadline has passed.
    pub fn pick_winner(env: Env) -> Result<Draw, Error> {
        let deadline = storage::load_deadline(&env);
        if deadline == 0 {
            return Err(Error::NotStartedYet);
        }
        if env.ledger().timestamp() < deadline {
            return Err(Error::NotFinishedYet);
        }
        let strategy = storage::load_strategy(&env).ok_or(Error::StrategyNotSet)?;
        if storage::load_winner(&env).is_some() {
            return Err(Error::WinnerAlreadyPicked);
        }

        let participants = storage::load_participants(&env);
        let draw = PrizeStrategyClient::new(&env, &strategy)
            .distribute(&env.current_contract_address(), &participants);
        storage::save_draw(&env, &draw.winner, draw.prize);

        events::emit_winner_picked(
            &env,
            WinnerPicked {
                winner: draw.winner.clone(),
                prize: draw.prize,
            },
        );
        Ok(draw)
    }

    // ── Views ────────────────────────────────────────────────────────

    pub fn state(env: Env) -> LotteryState {
        if !storage::is_initialized(&env) {
            return LotteryState::Uninitialized;
        }
        if storage::load_winner(&env).is_some() {
            return LotteryState::Finalized;
        }
        match storage::load_deadline(&env) {
            0 => LotteryState::Configured,
            deadline if env.ledger().timestamp() < deadline => LotteryState::Open,
            _ => LotteryState::Closed,
        }
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        storage::load_owner(&env)
    }

    pub fn factory(env: Env) -> Result<Address, Error> {
        Ok(storage::load_config(&env)?.factory)
    }

    pub fn token(env: Env) -> Result<Address, Error> {
        Ok(storage::load_config(&env)?.token)
    }

    pub fn ticket_price(env: Env) -> Result<i128, Error> {
        Ok(storage::load_config(&env)?.ticket_price)
    }

    pub fn interval(env: Env) -> Result<u64, Error> {
        Ok(storage::load_config(&env)?.interval)
    }

    /// 0 until the first participation.
    pub fn deadline(env: Env) -> u64 {
        storage::load_deadline(&env)
    }

    pub fn winner(env: Env) -> Option<Address> {
        storage::load_winner(&env)
    }

    pub fn prize(env: Env) -> i128 {
        storage::load_prize(&env)
    }

    pub fn participants(env: Env) -> Vec<Address> {
        storage::load_participants(&env)
    }

    pub fn has_participated(env: Env, player: Address) -> bool {
        storage::has_participated(&env, &player)
    }

    pub fn prize_pool(env: Env) -> Option<Address> {
        storage::load_prize_pool(&env)
    }

    pub fn strategy(env: Env) -> Option<Address> {
        storage::load_strategy(&env)
    }
}

impl YieldLottery {
    /// Owner check plus "round not started" for the wiring setters.
    fn require_configurable(env: &Env, caller: &Address) -> Result<(), Error> {
        let owner = storage::load_owner(env)?;
        require_caller(caller, &owner, Error::Unauthorized)?;
        if storage::load_deadline(env) != 0 {
            return Err(Error::AlreadyStarted);
        }
        Ok(())
    }

    /// Timing checks shared by the withdrawal paths. Returns the prize pool.
    fn require_closed_pool(env: &Env) -> Result<Address, Error> {
        let deadline = storage::load_deadline(env);
        if deadline == 0 {
            return Err(Error::NotStartedYet);
        }
        if env.ledger().timestamp() < deadline {
            return Err(Error::NotFinishedYet);
        }
        storage::load_prize_pool(env).ok_or(Error::PoolNotSet)
    }
}
