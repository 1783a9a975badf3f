//! Parsing of raw console input.
//!
//! Every error's Display text is the message shown before re-prompting.

use crate::types::Credits;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter a number.")]
    NotANumber,

    #[error("Please enter a valid bet.")]
    NotABet,

    #[error("That amount is too large.")]
    TooLarge,

    #[error("Amount must be greater than 0.")]
    DepositNotPositive,

    #[error("Enter a valid amount of lines.")]
    LinesOutOfRange { max: usize },

    #[error("Amount must be between ${min} - ${max}.")]
    BetOutOfRange { min: Credits, max: Credits },
}

/// Digits only: no sign, no decimal point, no blanks inside.
/// Surrounding whitespace (including the line ending) is ignored.
fn parse_digits(raw: &str) -> Option<Result<u64, InputError>> {
    let text = raw.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(text.parse::<u64>().map_err(|_| InputError::TooLarge))
}

pub fn parse_deposit(raw: &str) -> Result<Credits, InputError> {
    match parse_digits(raw) {
        None => Err(InputError::NotANumber),
        Some(Ok(0)) => Err(InputError::DepositNotPositive),
        Some(amount) => amount,
    }
}

pub fn parse_lines(raw: &str, max: usize) -> Result<usize, InputError> {
    let lines = parse_digits(raw).ok_or(InputError::NotANumber)?;
    match lines {
        Ok(n) if (1..=max as u64).contains(&n) => Ok(n as usize),
        _ => Err(InputError::LinesOutOfRange { max }),
    }
}

pub fn parse_bet(raw: &str, min: Credits, max: Credits) -> Result<Credits, InputError> {
    let bet = parse_digits(raw).ok_or(InputError::NotABet)?;
    match bet {
        Ok(n) if (min..=max).contains(&n) => Ok(n),
        _ => Err(InputError::BetOutOfRange { min, max }),
    }
}
