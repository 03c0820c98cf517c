//! Canonical event types emitted by the yield lottery contracts.
//!
//! Every contract publishes `(symbol, subject address)` topics with a struct
//! payload. The symbol alone identifies the kind; `withdrawn` is shared by the
//! prize pool (principal paid out) and the lottery (owner interest sweep), and
//! `pool_set` / `lot_set` / `strat_set` / `own_xfer` by several contracts.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Yield source wired to its market (`ys_init`).
    YieldSourceInitialized,
    /// Principal supplied to the market (`supplied`).
    SuppliedTokenTo,
    /// Principal redeemed from the market (`redeemed`).
    RedeemedToken,
    /// Interest withdrawn from the yield source (`claimed`).
    InterestClaimed,
    /// Residual interest paid out of the prize pool (`swept`).
    InterestSwept,
    /// Principal credited in the prize pool (`deposited`).
    Deposited,
    /// Principal paid out by the pool, or interest swept by the lottery owner (`withdrawn`).
    Withdrawn,
    /// Lottery address changed (`lot_set`).
    LotterySet,
    /// Prize pool address changed (`pool_set`).
    PrizePoolSet,
    /// Prize strategy address changed (`strat_set`).
    PrizeStrategySet,
    /// Strategy paid the prize (`awarded`).
    PrizeAwarded,
    /// Lottery initialised by the factory (`init`).
    LotteryInitialized,
    /// Ticket bought (`joined`).
    Participated,
    /// Draw completed (`winner`).
    WinnerPicked,
    /// Participant took principal back (`exited`).
    PrincipalExited,
    /// Factory deployed a lottery (`created`).
    LotteryCreated,
    /// Owner handed over a contract (`own_xfer`).
    OwnershipTransferred,
    /// Factory switched lottery code (`wasm_set`).
    WasmHashUpdated,
    /// An event from a followed contract that we don't recognise.
    Unknown,
}

impl EventKind {
    /// Parse the leading topic symbol into an [`EventKind`].
    pub fn from_topic(topic: &str) -> Self {
        match topic {
            "ys_init" => Self::YieldSourceInitialized,
            "supplied" => Self::SuppliedTokenTo,
            "redeemed" => Self::RedeemedToken,
            "claimed" => Self::InterestClaimed,
            "swept" => Self::InterestSwept,
            "deposited" => Self::Deposited,
            "withdrawn" => Self::Withdrawn,
            "lot_set" => Self::LotterySet,
            "pool_set" => Self::PrizePoolSet,
            "strat_set" => Self::PrizeStrategySet,
            "awarded" => Self::PrizeAwarded,
            "init" => Self::LotteryInitialized,
            "joined" => Self::Participated,
            "winner" => Self::WinnerPicked,
            "exited" => Self::PrincipalExited,
            "created" => Self::LotteryCreated,
            "own_xfer" => Self::OwnershipTransferred,
            "wasm_set" => Self::WasmHashUpdated,
            _ => Self::Unknown,
        }
    }

    /// Identifier stored in the `event_type` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::YieldSourceInitialized => "yield_source_initialized",
            Self::SuppliedTokenTo => "supplied_token_to",
            Self::RedeemedToken => "redeemed_token",
            Self::InterestClaimed => "interest_claimed",
            Self::InterestSwept => "interest_swept",
            Self::Deposited => "deposited",
            Self::Withdrawn => "withdrawn",
            Self::LotterySet => "lottery_set",
            Self::PrizePoolSet => "prize_pool_set",
            Self::PrizeStrategySet => "prize_strategy_set",
            Self::PrizeAwarded => "prize_awarded",
            Self::LotteryInitialized => "lottery_initialized",
            Self::Participated => "participated",
            Self::WinnerPicked => "winner_picked",
            Self::PrincipalExited => "principal_exited",
            Self::LotteryCreated => "lottery_created",
            Self::OwnershipTransferred => "ownership_transferred",
            Self::WasmHashUpdated => "wasm_hash_updated",
            Self::Unknown => "unknown",
        }
    }

    /// Payload fields holding the acting address, in order of preference.
    pub fn actor_fields(&self) -> &'static [&'static str] {
        match self {
            Self::YieldSourceInitialized => &["owner"],
            Self::SuppliedTokenTo | Self::RedeemedToken => &["from"],
            Self::InterestClaimed => &["recipient"],
            Self::Deposited | Self::InterestSwept => &["to"],
            Self::Withdrawn => &["from", "owner"],
            Self::LotterySet => &["lottery"],
            Self::PrizePoolSet => &["prize_pool"],
            Self::PrizeStrategySet => &["prize_strategy", "strategy"],
            Self::PrizeAwarded | Self::WinnerPicked => &["winner"],
            Self::LotteryInitialized | Self::LotteryCreated => &["owner"],
            Self::Participated | Self::PrincipalExited => &["player"],
            Self::OwnershipTransferred => &["new_owner"],
            Self::WasmHashUpdated | Self::Unknown => &[],
        }
    }

    /// Payload fields holding the token amount, in order of preference.
    pub fn amount_fields(&self) -> &'static [&'static str] {
        match self {
            Self::SuppliedTokenTo
            | Self::RedeemedToken
            | Self::InterestClaimed
            | Self::InterestSwept
            | Self::Deposited
            | Self::Withdrawn
            | Self::Participated
            | Self::PrincipalExited => &["amount"],
            Self::PrizeAwarded | Self::WinnerPicked => &["prize"],
            Self::LotteryInitialized | Self::LotteryCreated => &["ticket_price"],
            _ => &[],
        }
    }
}

/// A decoded event, ready to be stored in the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LotteryEvent {
    /// RPC event id, unique per event; used to make inserts idempotent.
    pub event_id: Option<String>,
    pub event_type: String,
    /// Second topic: the address the event is about.
    pub subject: Option<String>,
    pub actor: Option<String>,
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
}

/// An event row as stored in / read from the database.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EventRecord {
    pub id: i64,
    pub event_id: Option<String>,
    pub event_type: String,
    pub subject: Option<String>,
    pub actor: Option<String>,
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
    pub created_at: i64,
}
