//! Interactive console front-end.
//!
//! Prompts, retry loops and rendering live here. The engine never sees
//! unvalidated input: every number reaching it has passed `input::*` and
//! `Wager::new`.

use crate::{
    command::PlayerCommand,
    config::MachineConfig,
    engine::{SlotEngine, SpinOutcome},
    error::{SlotError, SlotResult},
    input::{parse_bet, parse_deposit, parse_lines},
    snapshot::SessionSnapshot,
    types::{Credits, RunId},
    wager::Wager,
};
use std::io::{BufRead, Write};

pub struct Console<R, W> {
    input:  R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Prompt for a deposit, open a session and play it to the end.
    pub fn play(&mut self, run_id: RunId, seed: u64, config: MachineConfig) -> SlotResult<SessionSnapshot> {
        let deposit = self.prompt_deposit()?;
        let mut engine = SlotEngine::new(run_id, seed, config, deposit)?;
        self.run_session(&mut engine)
    }

    /// Play rounds until the player quits, runs out of funds or input ends,
    /// then cash out and print the final balance.
    pub fn run_session(&mut self, engine: &mut SlotEngine) -> SlotResult<SessionSnapshot> {
        loop {
            writeln!(self.output, "Current balance is: ${}", engine.balance())?;
            if !engine.can_play() {
                writeln!(self.output, "You are out of funds.")?;
                break;
            }

            let command = match self.prompt_command() {
                Ok(command) => command,
                Err(SlotError::InputClosed) => break,
                Err(e) => return Err(e),
            };
            if command == PlayerCommand::Quit {
                break;
            }

            match self.play_round(engine) {
                Ok(_) => {}
                Err(SlotError::InputClosed) => break,
                Err(e) => return Err(e),
            }
        }

        let snapshot = engine.cash_out()?;
        writeln!(self.output, "You left with ${}", snapshot.balance)?;
        self.output.flush()?;
        Ok(snapshot)
    }

    /// One round: lines, bet, spin, report.
    pub fn play_round(&mut self, engine: &mut SlotEngine) -> SlotResult<SpinOutcome> {
        let wager = self.prompt_wager(engine)?;
        writeln!(
            self.output,
            "You are betting ${} on {} lines. Total bet is equal to ${}.",
            wager.bet(),
            wager.lines(),
            wager.total_stake()
        )?;

        let outcome = engine.spin(&wager)?;
        self.print_outcome(&outcome)?;
        Ok(outcome)
    }

    pub fn prompt_deposit(&mut self) -> SlotResult<Credits> {
        loop {
            let raw = self.read_line("What would you like to deposit? $")?;
            match parse_deposit(&raw) {
                Ok(amount) => return Ok(amount),
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }

    pub fn prompt_lines(&mut self, max_lines: usize) -> SlotResult<usize> {
        let prompt = format!("Enter the number of lines to bet on (1-{max_lines})? ");
        loop {
            let raw = self.read_line(&prompt)?;
            match parse_lines(&raw, max_lines) {
                Ok(lines) => return Ok(lines),
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }

    pub fn prompt_bet(&mut self, min_bet: Credits, max_bet: Credits) -> SlotResult<Credits> {
        loop {
            let raw = self.read_line("What would you like to bet on each line? $")?;
            match parse_bet(&raw, min_bet, max_bet) {
                Ok(bet) => return Ok(bet),
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }

    /// Lines then bet, re-prompting until the total stake fits the balance.
    /// If even the minimum bet on the chosen lines is out of reach, the
    /// line count is asked for again.
    pub fn prompt_wager(&mut self, engine: &SlotEngine) -> SlotResult<Wager> {
        let limits = engine.config().limits;
        let balance = engine.balance();
        loop {
            let lines = self.prompt_lines(limits.max_lines)?;
            if limits.min_bet.saturating_mul(lines as Credits) > balance {
                self.print_short_balance(balance)?;
                continue;
            }
            loop {
                let bet = self.prompt_bet(limits.min_bet, limits.max_bet)?;
                let wager = engine.wager(lines, bet)?;
                if engine.can_cover(&wager) {
                    return Ok(wager);
                }
                self.print_short_balance(balance)?;
            }
        }
    }

    pub fn prompt_command(&mut self) -> SlotResult<PlayerCommand> {
        let raw = self.read_line("Press enter to play (q to quit).")?;
        Ok(PlayerCommand::parse(&raw))
    }

    pub fn print_outcome(&mut self, outcome: &SpinOutcome) -> SlotResult<()> {
        writeln!(self.output, "{}", outcome.grid)?;
        writeln!(self.output, "You won ${}.", outcome.wins.winnings)?;
        let lines: String = outcome
            .wins
            .winning_lines
            .iter()
            .map(|l| format!(" {l}"))
            .collect();
        writeln!(self.output, "You won on lines:{lines}")?;
        Ok(())
    }

    fn print_short_balance(&mut self, balance: Credits) -> SlotResult<()> {
        writeln!(
            self.output,
            "You do not have enough to bet that amount, your current balance is ${balance}"
        )?;
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> SlotResult<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SlotError::InputClosed);
        }
        Ok(line)
    }
}
