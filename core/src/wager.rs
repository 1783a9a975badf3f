use crate::{
    config::TableLimits,
    error::{SlotError, SlotResult},
    types::Credits,
};
use serde::{Deserialize, Serialize};

/// A validated (lines, bet-per-line) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wager {
    lines: usize,
    bet:   Credits,
}

impl Wager {
    pub fn new(lines: usize, bet: Credits, limits: &TableLimits) -> SlotResult<Self> {
        if !(1..=limits.max_lines).contains(&lines) {
            return Err(SlotError::LinesOutOfRange { lines, max: limits.max_lines });
        }
        if !(limits.min_bet..=limits.max_bet).contains(&bet) {
            return Err(SlotError::BetOutOfRange {
                bet,
                min: limits.min_bet,
                max: limits.max_bet,
            });
        }
        if bet.checked_mul(lines as Credits).is_none() {
            return Err(SlotError::BetOutOfRange {
                bet,
                min: limits.min_bet,
                max: Credits::MAX / lines as Credits,
            });
        }
        Ok(Self { lines, bet })
    }

    pub fn lines(&self) -> usize {
        self.lines
    }

    pub fn bet(&self) -> Credits {
        self.bet
    }

    /// bet × lines. Cannot overflow: `new` checks it.
    pub fn total_stake(&self) -> Credits {
        self.bet * self.lines as Credits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_stake_is_bet_times_lines() {
        let w = Wager::new(3, 25, &TableLimits::default()).unwrap();
        assert_eq!(w.total_stake(), 75);
    }

    #[test]
    fn lines_outside_range_are_rejected() {
        let limits = TableLimits::default();
        assert!(matches!(
            Wager::new(0, 10, &limits),
            Err(SlotError::LinesOutOfRange { lines: 0, max: 3 })
        ));
        assert!(matches!(
            Wager::new(4, 10, &limits),
            Err(SlotError::LinesOutOfRange { lines: 4, max: 3 })
        ));
    }

    #[test]
    fn bet_outside_range_is_rejected() {
        let limits = TableLimits::default();
        assert!(matches!(
            Wager::new(1, 0, &limits),
            Err(SlotError::BetOutOfRange { bet: 0, min: 1, max: 100 })
        ));
        assert!(Wager::new(1, 101, &limits).is_err());
        assert!(Wager::new(1, 100, &limits).is_ok());
        assert!(Wager::new(1, 1, &limits).is_ok());
    }

    #[test]
    fn stake_that_overflows_is_rejected() {
        // Unvalidated limits wide enough to let the bet itself through.
        let limits = TableLimits { max_lines: 3, min_bet: 1, max_bet: u64::MAX };
        assert!(matches!(
            Wager::new(3, u64::MAX, &limits),
            Err(SlotError::BetOutOfRange { .. })
        ));
        let w = Wager::new(1, u64::MAX, &limits).unwrap();
        assert_eq!(w.total_stake(), u64::MAX);
    }
}
