use soroban_sdk::{contracttype, Address};

/// Outcome of a prize draw.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Draw {
    /// Participant that received the prize.
    pub winner: Address,
    /// Interest paid to the winner, in deposit-token units.
    pub prize: i128,
}
