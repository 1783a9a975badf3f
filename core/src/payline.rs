//! Payline scorer.
//!
//! A line pays only when every column shows the same symbol on that row.
//! No partial pays, no wilds, no scatters.

use crate::{
    spin::Grid,
    symbol::SymbolTable,
    types::Credits,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineWins {
    pub winnings:      Credits,
    /// 1-indexed line numbers, ascending.
    pub winning_lines: Vec<usize>,
}

impl LineWins {
    pub fn is_win(&self) -> bool {
        !self.winning_lines.is_empty()
    }
}

/// Score the first `lines` rows of `grid` at `bet` per line.
/// A line count above the grid height is clamped to the height.
pub fn check_winnings(grid: &Grid, lines: usize, bet: Credits, table: &SymbolTable) -> LineWins {
    let mut wins = LineWins::default();
    for line in 0..lines.min(grid.rows()) {
        let reference = grid.symbol_at(0, line);
        if grid.row(line).all(|s| s == reference) {
            let line_pay = table.payout(reference).saturating_mul(bet);
            wins.winnings = wins.winnings.saturating_add(line_pay);
            wins.winning_lines.push(line + 1);
        }
    }
    wins
}
