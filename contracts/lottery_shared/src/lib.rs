//! # Lottery Shared
//!
//! Definitions every yield-lottery contract agrees on:
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`errors`]     | The single [`Error`] code space used by all contracts     |
//! | [`address`]    | The zero-address sentinel and guard helpers               |
//! | [`auth`]       | Caller-identity guard clauses                             |
//! | [`interfaces`] | `#[contractclient]` interfaces for cross-contract calls   |
//! | [`ttl`]        | Storage TTL constants and bump helpers                    |
//! | [`types`]      | Value types crossing contract boundaries                  |
//!
//! Errors share one numbering across every contract so that a failure raised
//! deep inside a nested call (for example `InsufficientBalance` from the yield
//! source during a lottery withdrawal) decodes to the same variant at the
//! outermost caller.

#![no_std]

pub mod address;
pub mod auth;
pub mod errors;
pub mod interfaces;
pub mod ttl;
pub mod types;

pub use address::{is_zero, require_non_zero, zero_address, ZERO_ADDRESS};
pub use auth::require_caller;
pub use errors::Error;
pub use interfaces::{
    LotteryClient, MoneyMarketClient, PrizePoolClient, PrizeStrategyClient, YieldSourceClient,
};
pub use types::Draw;
