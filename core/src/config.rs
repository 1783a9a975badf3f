use crate::{
    error::{SlotError, SlotResult},
    symbol::SymbolTable,
    types::Credits,
};
use serde::{Deserialize, Serialize};

/// Grid height. Fixed for every session.
pub const ROWS: usize = 3;
/// Grid width. Fixed for every session.
pub const COLS: usize = 3;

pub const MAX_LINES: usize = 3;
pub const MIN_BET: Credits = 1;
pub const MAX_BET: Credits = 100;

/// Betting limits. The only part of the machine that may come from a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableLimits {
    pub max_lines: usize,
    pub min_bet:   Credits,
    pub max_bet:   Credits,
}

impl Default for TableLimits {
    fn default() -> Self {
        Self {
            max_lines: MAX_LINES,
            min_bet:   MIN_BET,
            max_bet:   MAX_BET,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineConfig {
    pub rows:    usize,
    pub cols:    usize,
    pub symbols: SymbolTable,
    pub limits:  TableLimits,
}

impl MachineConfig {
    /// The 3×3 machine with the classic symbol table and $1–$100 bets.
    pub fn classic() -> Self {
        Self {
            rows:    ROWS,
            cols:    COLS,
            symbols: SymbolTable::classic(),
            limits:  TableLimits::default(),
        }
    }

    /// Classic machine with table limits read from a JSON file.
    pub fn load(limits_path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(limits_path)
            .map_err(|e| anyhow::anyhow!("Cannot read {limits_path}: {e}"))?;
        let limits: TableLimits = serde_json::from_str(&content)?;
        let config = Self { limits, ..Self::classic() };
        config.validate()?;
        Ok(config)
    }

    pub fn with_limits(limits: TableLimits) -> SlotResult<Self> {
        let config = Self { limits, ..Self::classic() };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SlotResult<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(SlotError::InvalidConfig("grid must have rows and columns".into()));
        }
        if self.symbols.drawable_symbols() < self.rows {
            return Err(SlotError::InvalidConfig(format!(
                "{} rows need at least as many distinct symbols, table has {}",
                self.rows,
                self.symbols.drawable_symbols()
            )));
        }
        let l = &self.limits;
        if l.max_lines == 0 || l.max_lines > self.rows {
            return Err(SlotError::InvalidConfig(format!(
                "max_lines must be between 1 and {}, got {}",
                self.rows, l.max_lines
            )));
        }
        if l.min_bet == 0 || l.min_bet > l.max_bet {
            return Err(SlotError::InvalidConfig(format!(
                "bet range ${}-${} is empty or starts at zero",
                l.min_bet, l.max_bet
            )));
        }
        // Stakes and line wins are computed in Credits; the largest
        // possible round must fit.
        let top_round = l
            .max_bet
            .checked_mul(l.max_lines as Credits)
            .and_then(|stake| stake.checked_mul(self.symbols.max_payout()));
        if top_round.is_none() {
            return Err(SlotError::InvalidConfig(format!(
                "max_bet ${} on {} lines overflows the payout table",
                l.max_bet, l.max_lines
            )));
        }
        Ok(())
    }

    /// Smallest stake a round can be played for.
    pub fn minimum_stake(&self) -> Credits {
        self.limits.min_bet
    }
}

impl Default for MachineConfig {
    fn default() -> Self { Self::classic() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_config_is_valid() {
        let config = MachineConfig::classic();
        config.validate().unwrap();
        assert_eq!((config.rows, config.cols), (3, 3));
        assert_eq!(config.limits, TableLimits { max_lines: 3, min_bet: 1, max_bet: 100 });
    }

    #[test]
    fn more_lines_than_rows_is_rejected() {
        let limits = TableLimits { max_lines: 4, ..TableLimits::default() };
        assert!(matches!(
            MachineConfig::with_limits(limits),
            Err(SlotError::InvalidConfig(_))
        ));
    }

    #[test]
    fn inverted_bet_range_is_rejected() {
        let limits = TableLimits { min_bet: 50, max_bet: 10, ..TableLimits::default() };
        assert!(MachineConfig::with_limits(limits).is_err());
        let zero = TableLimits { min_bet: 0, ..TableLimits::default() };
        assert!(MachineConfig::with_limits(zero).is_err());
    }

    #[test]
    fn limits_parse_from_json() {
        let limits: TableLimits =
            serde_json::from_str(r#"{ "max_lines": 2, "min_bet": 5, "max_bet": 50 }"#).unwrap();
        let config = MachineConfig::with_limits(limits).unwrap();
        assert_eq!(config.limits.max_lines, 2);
        assert_eq!(config.minimum_stake(), 5);
    }

    #[test]
    fn max_bet_that_would_overflow_a_round_is_rejected() {
        let huge = TableLimits { max_lines: 3, min_bet: 1, max_bet: u64::MAX };
        assert!(matches!(
            MachineConfig::with_limits(huge),
            Err(SlotError::InvalidConfig(_))
        ));

        // Largest bet whose 3-line top payout (×5) still fits.
        let edge = TableLimits { max_lines: 3, min_bet: 1, max_bet: u64::MAX / 15 };
        assert!(MachineConfig::with_limits(edge).is_ok());
        let past_edge = TableLimits { max_bet: u64::MAX / 15 + 1, ..edge };
        assert!(MachineConfig::with_limits(past_edge).is_err());
    }

    fn write_temp(name: &str, content: &str) -> String {
        let path = std::env::temp_dir().join(format!("reeldesk-{}-{name}", std::process::id()));
        std::fs::write(&path, content).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn load_reads_shipped_limits_file() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../data/table_limits.json");
        let config = MachineConfig::load(path).unwrap();
        assert_eq!(config, MachineConfig::classic());
    }

    #[test]
    fn load_reports_missing_file() {
        let err = MachineConfig::load("/nonexistent/reeldesk/limits.json").unwrap_err();
        assert!(err.to_string().contains("Cannot read"), "unexpected error: {err}");
    }

    #[test]
    fn load_rejects_malformed_and_invalid_limits() {
        let malformed = write_temp("malformed.json", "{ \"max_lines\": ");
        assert!(MachineConfig::load(&malformed).is_err());

        let invalid = write_temp(
            "invalid.json",
            r#"{ "max_lines": 4, "min_bet": 1, "max_bet": 100 }"#,
        );
        let err = MachineConfig::load(&invalid).unwrap_err();
        assert!(err.to_string().contains("max_lines"), "unexpected error: {err}");

        let _ = std::fs::remove_file(malformed);
        let _ = std::fs::remove_file(invalid);
    }
}
