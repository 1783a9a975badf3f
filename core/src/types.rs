//! Shared primitive types used across the whole machine.

/// Whole-dollar amounts: deposits, bets, winnings and balances.
pub type Credits = u64;

/// A settled spin. Round 1 is the first spin of a session.
pub type Round = u64;

/// The canonical session identifier.
pub type RunId = String;
