use crate::types::Credits;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Insufficient funds: stake ${stake} exceeds balance ${balance}")]
    InsufficientFunds { stake: Credits, balance: Credits },

    #[error("Invalid line count {lines}: must be between 1 and {max}")]
    LinesOutOfRange { lines: usize, max: usize },

    #[error("Invalid bet ${bet}: must be between ${min} and ${max}")]
    BetOutOfRange { bet: Credits, min: Credits, max: Credits },

    #[error("Balance overflow: ${winnings} won on a balance of ${balance}")]
    BalanceOverflow { balance: Credits, winnings: Credits },

    #[error("Deposit must be greater than 0")]
    InvalidDeposit,

    #[error("Invalid machine config: {0}")]
    InvalidConfig(String),

    #[error("Session already cashed out")]
    SessionClosed,

    #[error("Input closed before the session finished")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type SlotResult<T> = Result<T, SlotError>;
