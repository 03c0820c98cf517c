//! # Lottery Factory
//!
//! Deploys [`YieldLottery`](lottery_shared::LotteryClient) instances from a
//! single uploaded wasm hash and initialises each one in the same call, with
//! the factory as the authorising `factory` and the caller as owner.
//!
//! Deployment salts are `sha256(owner ‖ timestamp ‖ nonce)`, where the nonce is
//! incremented on every deployment so two lotteries created in the same ledger
//! never collide.

#![no_std]

use soroban_sdk::{contract, contractimpl, xdr::ToXdr, Address, Bytes, BytesN, Env, Vec};

use lottery_shared::{require_caller, require_non_zero, Error, LotteryClient};

mod events;
mod storage;

#[cfg(test)]
mod test_deploy;

pub use events::{LotteryCreated, WasmHashUpdated};

#[contract]
pub struct LotteryFactory;

#[contractimpl]
impl LotteryFactory {
    pub fn initialize(env: Env, owner: Address, lottery_wasm_hash: BytesN<32>) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();
        require_non_zero(&env, &owner)?;
        require_non_zero_hash(&env, &lottery_wasm_hash)?;

        storage::init(&env, &owner, &lottery_wasm_hash);
        Ok(())
    }

    /// Deploy and initialise a new lottery owned by `caller`. Owner only.
    pub fn create_lottery(
        env: Env,
        caller: Address,
        token: Address,
        ticket_price: i128,
        interval: u64,
    ) -> Result<Address, Error> {
        let owner = storage::load_owner(&env)?;
        require_caller(&caller, &owner, Error::Unauthorized)?;
        require_non_zero(&env, &token)?;
        if ticket_price <= 0 || interval == 0 {
            return Err(Error::InvalidAmount);
        }

        let nonce = storage::load_nonce(&env);
        let salt = deployment_salt(&env, &owner, nonce);
        let wasm_hash = storage::load_wasm_hash(&env)?;
        let deployer = env.deployer().with_current_contract(salt);
        let lottery = deployer.deployed_address();

        storage::save_nonce(&env, nonce.checked_add(1).ok_or(Error::Overflow)?);
        storage::push_lottery(&env, &lottery);

        deployer.deploy_v2(wasm_hash, ());
        LotteryClient::new(&env, &lottery).initialize(
            &env.current_contract_address(),
            &caller,
            &token,
            &ticket_price,
            &interval,
        );

        events::emit_lottery_created(
            &env,
            LotteryCreated {
                lottery: lottery.clone(),
                owner: caller,
                token,
                ticket_price,
                interval,
                nonce,
            },
        );
        Ok(lottery)
    }

    pub fn set_lottery_wasm_hash(
        env: Env,
        caller: Address,
        lottery_wasm_hash: BytesN<32>,
    ) -> Result<(), Error> {
        let owner = storage::load_owner(&env)?;
        require_caller(&caller, &owner, Error::Unauthorized)?;
        require_non_zero_hash(&env, &lottery_wasm_hash)?;

        storage::save_wasm_hash(&env, &lottery_wasm_hash);
        events::emit_wasm_hash_updated(&env, WasmHashUpdated { lottery_wasm_hash });
        Ok(())
    }

    /// Address `create_lottery` would deploy to for `nonce` in the current ledger.
    pub fn predict_address(env: Env, nonce: u64) -> Result<Address, Error> {
        let owner = storage::load_owner(&env)?;
        let salt = deployment_salt(&env, &owner, nonce);
        Ok(env.deployer().with_current_contract(salt).deployed_address())
    }

    pub fn all_lotteries(env: Env) -> Vec<Address> {
        storage::load_lotteries(&env)
    }

    pub fn lottery_count(env: Env) -> u32 {
        storage::load_lotteries(&env).len()
    }

    /// Nonce the next deployment will use.
    pub fn nonce(env: Env) -> u64 {
        storage::load_nonce(&env)
    }

    pub fn lottery_wasm_hash(env: Env) -> Result<BytesN<32>, Error> {
        storage::load_wasm_hash(&env)
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        storage::load_owner(&env)
    }
}

fn require_non_zero_hash(env: &Env, hash: &BytesN<32>) -> Result<(), Error> {
    if *hash == BytesN::from_array(env, &[0u8; 32]) {
        return Err(Error::ZeroAddress);
    }
    Ok(())
}

fn deployment_salt(env: &Env, owner: &Address, nonce: u64) -> BytesN<32> {
    let mut preimage = Bytes::new(env);
    preimage.append(&owner.clone().to_xdr(env));
    preimage.extend_from_array(&env.ledger().timestamp().to_be_bytes());
    preimage.extend_from_array(&nonce.to_be_bytes());
    env.crypto().sha256(&preimage).to_bytes()
}
