//! Soroban has no null address. The contract strkey whose 32-byte id is all
//! zeroes stands in for it, and every operation that must not target "nobody"
//! rejects it with [`Error::ZeroAddress`].

use soroban_sdk::{Address, Env, String};

use crate::Error;

/// Strkey of the all-zero contract id.
pub const ZERO_ADDRESS: &str = "CAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABSC4";

pub fn zero_address(env: &Env) -> Address {
    Address::from_string(&String::from_str(env, ZERO_ADDRESS))
}

pub fn is_zero(env: &Env, address: &Address) -> bool {
    *address == zero_address(env)
}

/// Fails with [`Error::ZeroAddress`] when `address` is the zero address.
pub fn require_non_zero(env: &Env, address: &Address) -> Result<(), Error> {
    if is_zero(env, address) {
        return Err(Error::ZeroAddress);
    }
    Ok(())
}
