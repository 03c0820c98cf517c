//! # Types
//!
//! ### Round lifecycle
//!
//! [`LotteryState`] is derived from stored fields on every read rather than
//! stored itself:
//!
//! ```text
//! Uninitialized ──► Configured ──► Open ──► Closed ──► Finalized
//! ```
//!
//! - `Configured`: initialised, no participant yet (`deadline == 0`).
//! - `Open`: first participant set `deadline = now + interval`, `now < deadline`.
//! - `Closed`: `now >= deadline`, no winner yet.
//! - `Finalized`: winner recorded. Terminal.

use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LotteryState {
    Uninitialized,
    Configured,
    Open,
    Closed,
    Finalized,
}

/// Written once by `initialize`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LotteryConfig {
    /// Factory that deployed and initialised this lottery.
    pub factory: Address,
    /// Deposit token; must match the prize pool's token.
    pub token: Address,
    pub ticket_price: i128,
    /// Round length in seconds, counted from the first participation.
    pub interval: u64,
}
