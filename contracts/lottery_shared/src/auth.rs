//! Capability guards.
//!
//! Soroban has no implicit message sender, so gated entry points take the
//! caller explicitly. The caller must authorise the invocation and match the
//! identity stored for the capability. A contract calling another contract
//! directly satisfies `require_auth` for its own address automatically.

use soroban_sdk::Address;

use crate::Error;

/// Require `caller` to have signed and to equal `expected`, failing with
/// `denied` otherwise.
pub fn require_caller(caller: &Address, expected: &Address, denied: Error) -> Result<(), Error> {
    caller.require_auth();
    if caller != expected {
        return Err(denied);
    }
    Ok(())
}
