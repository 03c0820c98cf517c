//! The shared contract error taxonomy.

use soroban_sdk::contracterror;

/// Every failure a yield-lottery contract can report.
///
/// Codes are part of the on-chain interface; never renumber an existing variant.
/// They start at 100 so they never collide with the Stellar Asset Contract's
/// own codes when a nested token call fails.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// A required address parameter was the zero address.
    ZeroAddress            = 100,
    /// A value parameter was zero (or negative) where a positive value is required.
    InvalidAmount          = 101,
    /// A debit exceeds the holder's tracked balance.
    InsufficientBalance    = 102,
    /// Caller is not the owner.
    Unauthorized           = 103,
    AlreadyInitialized     = 104,
    AlreadyParticipated    = 105,
    NotStartedYet          = 106,
    NotFinishedYet         = 107,
    ClosedForParticipation = 108,
    PoolNotSet             = 109,
    StrategyNotSet         = 110,
    /// Caller is not the lottery authorised on this contract.
    NotLottery             = 111,
    /// Caller is not the prize strategy authorised on this contract.
    NotStrategy            = 112,
    NotInitialized         = 113,
    /// Lottery wiring can no longer change once the round has started.
    AlreadyStarted         = 114,
    WinnerAlreadyPicked    = 115,
    NoParticipants         = 116,
    LotteryFull            = 117,
    /// Declared share decimals differ from the deposit token's decimals.
    DecimalsMismatch       = 118,
    Overflow               = 119,
    /// A collaborator holds a different token than the lottery sells tickets in.
    TokenMismatch          = 120,
}
