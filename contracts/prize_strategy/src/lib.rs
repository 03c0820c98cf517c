//! # Hash Prize Strategy
//!
//! Picks one participant of a finished round and pays them everything the
//! prize pool has earned.
//!
//! The winner index is derived from `sha256` over the ledger timestamp, ledger
//! sequence, network id and the XDR encoding of the participant list. Anyone
//! who can predict or influence those inputs (validators, the last
//! participant) can bias the draw. It is deterministic for a given ledger,
//! which makes it reproducible in tests.

#![no_std]

use soroban_sdk::{contract, contractimpl, token, xdr::ToXdr, Address, Bytes, Env, Vec};

use lottery_shared::{require_caller, require_non_zero, Draw, Error, PrizePoolClient};

mod events;
mod storage;


pub use events::{LotterySet, OwnershipTransferred, PrizeAwarded, PrizePoolSet};

#[contract]
pub struct HashPrizeStrategy;

#[contractimpl]
impl HashPrizeStrategy {
    pub fn initialize(env: Env, owner: Address) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();
        require_non_zero(&env, &owner)?;
        storage::save_owner(&env, &owner);
        Ok(())
    }

    /// Claim the pool's interest and pay it to one of `participants`.
    ///
    /// Only the configured lottery may call this. A zero prize is recorded
    /// without a transfer.
    pub fn distribute(env: Env, caller: Address, participants: Vec<Address>) -> Result<Draw, Error> {
        let lottery = storage::load_lottery(&env).ok_or(Error::NotLottery)?;
        require_caller(&caller, &lottery, Error::NotLottery)?;
        let pool = storage::load_prize_pool(&env).ok_or(Error::PoolNotSet)?;
        if participants.is_empty() {
            return Err(Error::NoParticipants);
        }

        let index = draw_index(&env, &participants);
        let winner = participants.get(index).ok_or(Error::NoParticipants)?;

        let this = env.current_contract_address();
        let pool = PrizePoolClient::new(&env, &pool);
        let prize = pool.claim_interest(&this);
        if prize > 0 {
            token::Client::new(&env, &pool.token()).transfer(&this, &winner, &prize);
        }

        events::emit_prize_awarded(
            &env,
            PrizeAwarded {
                lottery: caller,
                winner: winner.clone(),
                prize,
            },
        );
        Ok(Draw { winner, prize })
    }

    /// Interest the next draw would pay out.
    pub fn get_prize(env: Env) -> Result<i128, Error> {
        let pool = storage::load_prize_pool(&env).ok_or(Error::PoolNotSet)?;
        Ok(PrizePoolClient::new(&env, &pool).get_interest())
    }

    pub fn set_prize_pool(env: Env, caller: Address, prize_pool: Address) -> Result<(), Error> {
        let owner = storage::load_owner(&env)?;
        require_caller(&caller, &owner, Error::Unauthorized)?;
        require_non_zero(&env, &prize_pool)?;

        storage::save_prize_pool(&env, &prize_pool);
        events::emit_prize_pool_set(&env, PrizePoolSet { prize_pool });
        Ok(())
    }

    pub fn set_lottery(env: Env, caller: Address, lottery: Address) -> Result<(), Error> {
        let owner = storage::load_owner(&env)?;
        require_caller(&caller, &owner, Error::Unauthorized)?;
        require_non_zero(&env, &lottery)?;

        storage::save_lottery(&env, &lottery);
        events::emit_lottery_set(&env, LotterySet { lottery });
        Ok(())
    }

    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        let owner = storage::load_owner(&env)?;
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

    pub fn prize_pool(env: Env) -> Option<Address> {
        storage::load_prize_pool(&env)
    }

    pub fn lottery(env: Env) -> Option<Address> {
        storage::load_lottery(&env)
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        storage::load_owner(&env)
    }
}

/// Index into `participants` for a draw in the current ledger.
///
/// `participants` must be non-empty.
pub fn draw_index(env: &Env, participants: &Vec<Address>) -> u32 {
    let ledger = env.ledger();
    let mut seed = Bytes::new(env);
    seed.extend_from_array(&ledger.timestamp().to_be_bytes());
    seed.extend_from_array(&ledger.sequence().to_be_bytes());
    seed.append(&Bytes::from(ledger.network_id()));
    seed.append(&participants.clone().to_xdr(env));

    let digest = env.crypto().sha256(&seed).to_bytes().to_array();
    let mut head = [0u8; 8];
    head.copy_from_slice(&digest[..8]);
    (u64::from_be_bytes(head) % u64::from(participants.len())) as u32
}
