//! Running totals for a session: stake, winnings, hit counts.

use crate::{payline::LineWins, types::Credits, wager::Wager};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    pub rounds:         u64,
    pub winning_rounds: u64,
    pub total_staked:   Credits,
    pub total_won:      Credits,
    pub biggest_win:    Credits,
    /// Wins per payline; index 0 is line 1.
    pub line_hits:      Vec<u64>,
}

impl SessionStats {
    pub fn new(lines: usize) -> Self {
        Self { line_hits: vec![0; lines], ..Self::default() }
    }

    pub fn record(&mut self, wager: &Wager, wins: &LineWins) {
        self.rounds += 1;
        self.total_staked = self.total_staked.saturating_add(wager.total_stake());
        self.total_won = self.total_won.saturating_add(wins.winnings);
        self.biggest_win = self.biggest_win.max(wins.winnings);
        if wins.is_win() {
            self.winning_rounds += 1;
        }
        for &line in &wins.winning_lines {
            if let Some(hits) = self.line_hits.get_mut(line - 1) {
                *hits += 1;
            }
        }
    }

    /// Fraction of stake paid back. 0.0 before the first round.
    pub fn return_to_player(&self) -> f64 {
        if self.total_staked == 0 {
            return 0.0;
        }
        self.total_won as f64 / self.total_staked as f64
    }

    /// Fraction of rounds that paid anything.
    pub fn hit_rate(&self) -> f64 {
        if self.rounds == 0 {
            return 0.0;
        }
        self.winning_rounds as f64 / self.rounds as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TableLimits;

    #[test]
    fn record_accumulates_totals_and_line_hits() {
        let mut stats = SessionStats::new(3);
        let wager = Wager::new(3, 10, &TableLimits::default()).unwrap();

        stats.record(&wager, &LineWins { winnings: 50, winning_lines: vec![1] });
        stats.record(&wager, &LineWins::default());
        stats.record(&wager, &LineWins { winnings: 70, winning_lines: vec![1, 3] });

        assert_eq!(stats.rounds, 3);
        assert_eq!(stats.winning_rounds, 2);
        assert_eq!(stats.total_staked, 90);
        assert_eq!(stats.total_won, 120);
        assert_eq!(stats.biggest_win, 70);
        assert_eq!(stats.line_hits, vec![2, 0, 1]);
        assert!((stats.return_to_player() - 120.0 / 90.0).abs() < 1e-12);
        assert!((stats.hit_rate() - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn empty_stats_report_zero_rates() {
        let stats = SessionStats::new(3);
        assert_eq!(stats.return_to_player(), 0.0);
        assert_eq!(stats.hit_rate(), 0.0);
    }
}
