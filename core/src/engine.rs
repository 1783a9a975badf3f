//! The slot engine — owns the balance and settles one round at a time.
//!
//! ROUND ORDER (fixed):
//!   1. Check the total stake against the balance (reject, mutate nothing).
//!      A payout the balance cannot hold is rejected the same way.
//!   2. Advance the round counter and take that round's RNG stream.
//!   3. Spin generator fills the grid.
//!   4. Payline scorer prices the grid.
//!   5. Balance = balance − stake + winnings; stats and event log updated.
//!
//! RULES:
//!   - Only the engine mutates the balance.
//!   - All randomness flows through the RngBank.
//!   - Every balance change is recorded in the event log.

use crate::{
    config::MachineConfig,
    error::{SlotError, SlotResult},
    event::{EventLogEntry, SessionEvent},
    payline::{check_winnings, LineWins},
    rng::RngBank,
    snapshot::SessionSnapshot,
    spin::{generate_spin, Grid},
    stats::SessionStats,
    types::{Credits, Round, RunId},
    wager::Wager,
};

/// Result of one settled round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinOutcome {
    pub round:         Round,
    pub wager:         Wager,
    pub grid:          Grid,
    pub wins:          LineWins,
    pub balance_after: Credits,
}

impl SpinOutcome {
    /// Winnings minus stake for this round.
    pub fn net(&self) -> i128 {
        i128::from(self.wins.winnings) - i128::from(self.wager.total_stake())
    }
}

pub struct SlotEngine {
    pub run_id: RunId,
    config:     MachineConfig,
    rng_bank:   RngBank,
    deposit:    Credits,
    balance:    Credits,
    round:      Round,
    stats:      SessionStats,
    events:     Vec<EventLogEntry>,
    closed:     bool,
}

impl SlotEngine {
    /// Open a session with `deposit` on the table.
    pub fn new(run_id: RunId, seed: u64, config: MachineConfig, deposit: Credits) -> SlotResult<Self> {
        config.validate()?;
        if deposit == 0 {
            return Err(SlotError::InvalidDeposit);
        }

        let stats = SessionStats::new(config.limits.max_lines);
        let mut engine = Self {
            run_id,
            config,
            rng_bank: RngBank::new(seed),
            deposit,
            balance: deposit,
            round: 0,
            stats,
            events: Vec::new(),
            closed: false,
        };

        let opened = SessionEvent::SessionOpened {
            run_id:  engine.run_id.clone(),
            seed,
            deposit,
        };
        engine.record(&opened)?;
        log::info!("session {} opened: seed={seed} deposit=${deposit}", engine.run_id);
        Ok(engine)
    }

    /// Classic 3×3 machine.
    pub fn classic(run_id: RunId, seed: u64, deposit: Credits) -> SlotResult<Self> {
        Self::new(run_id, seed, MachineConfig::classic(), deposit)
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    pub fn balance(&self) -> Credits {
        self.balance
    }

    pub fn deposit(&self) -> Credits {
        self.deposit
    }

    /// Number of rounds settled so far.
    pub fn round(&self) -> Round {
        self.round
    }

    pub fn seed(&self) -> u64 {
        self.rng_bank.master_seed()
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn event_log(&self) -> &[EventLogEntry] {
        &self.events
    }

    /// Validate (lines, bet) against this machine's limits.
    pub fn wager(&self, lines: usize, bet: Credits) -> SlotResult<Wager> {
        Wager::new(lines, bet, &self.config.limits)
    }

    /// Whether `wager`'s total stake is covered by the balance.
    pub fn can_cover(&self, wager: &Wager) -> bool {
        wager.total_stake() <= self.balance
    }

    /// False once the balance cannot cover one line at the minimum bet.
    pub fn can_play(&self) -> bool {
        !self.closed && self.balance >= self.config.minimum_stake()
    }

    /// Play one round.
    pub fn spin(&mut self, wager: &Wager) -> SlotResult<SpinOutcome> {
        if self.closed {
            return Err(SlotError::SessionClosed);
        }
        let stake = wager.total_stake();
        if stake > self.balance {
            log::warn!(
                "session {} rejected stake ${stake}: balance ${}",
                self.run_id,
                self.balance
            );
            return Err(SlotError::InsufficientFunds { stake, balance: self.balance });
        }

        let round = self.round + 1;
        let mut rng = self.rng_bank.for_round(round);
        let grid = generate_spin(
            self.config.rows,
            self.config.cols,
            &self.config.symbols,
            &mut rng,
        );
        let wins = check_winnings(&grid, wager.lines(), wager.bet(), &self.config.symbols);
        let balance_after = (self.balance - stake)
            .checked_add(wins.winnings)
            .ok_or(SlotError::BalanceOverflow {
                balance:  self.balance,
                winnings: wins.winnings,
            })?;

        let settled = SessionEvent::SpinSettled {
            round,
            lines:         wager.lines(),
            bet:           wager.bet(),
            stake,
            grid:          grid.clone(),
            winnings:      wins.winnings,
            winning_lines: wins.winning_lines.clone(),
            balance:       balance_after,
        };
        let entry = EventLogEntry::new(&self.run_id, round, &settled)?;

        self.round = round;
        self.balance = balance_after;
        self.stats.record(wager, &wins);
        self.events.push(entry);

        log::debug!(
            "round={round} stake=${stake} won=${} lines={:?} balance=${balance_after}",
            wins.winnings,
            wins.winning_lines
        );

        Ok(SpinOutcome {
            round,
            wager: *wager,
            grid,
            wins,
            balance_after,
        })
    }

    /// Spin `wager` up to `max_rounds` times, stopping early once the
    /// balance no longer covers the stake.
    pub fn autoplay(&mut self, wager: &Wager, max_rounds: u64) -> SlotResult<Vec<SpinOutcome>> {
        let mut outcomes = Vec::new();
        for _ in 0..max_rounds {
            if !self.can_cover(wager) {
                log::info!(
                    "session {} stopped after {} rounds: balance ${} below stake ${}",
                    self.run_id,
                    self.round,
                    self.balance,
                    wager.total_stake()
                );
                break;
            }
            outcomes.push(self.spin(wager)?);
        }
        Ok(outcomes)
    }

    /// Current state as a serializable snapshot.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            run_id:  self.run_id.clone(),
            seed:    self.seed(),
            round:   self.round,
            deposit: self.deposit,
            balance: self.balance,
            stats:   self.stats.clone(),
        }
    }

    /// Close the session. Calling it again returns the same snapshot
    /// without logging a second close.
    pub fn cash_out(&mut self) -> SlotResult<SessionSnapshot> {
        if !self.closed {
            let closed = SessionEvent::SessionClosed {
                rounds:  self.round,
                balance: self.balance,
            };
            self.record(&closed)?;
            self.closed = true;
            log::info!(
                "session {} closed after {} rounds with ${}",
                self.run_id,
                self.round,
                self.balance
            );
        }
        Ok(self.snapshot())
    }

    fn record(&mut self, event: &SessionEvent) -> SlotResult<()> {
        let entry = EventLogEntry::new(&self.run_id, self.round, event)?;
        self.events.push(entry);
        Ok(())
    }
}
