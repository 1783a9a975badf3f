//! reel-runner: console slot machine and headless autoplay runner.
//!
//! Usage:
//!   reel-runner --seed 12345
//!   reel-runner --seed 12345 --autoplay 1000 --deposit 500 --lines 3 --bet 5
//!   reel-runner --limits data/table_limits.json --events

use anyhow::Result;
use reeldesk_core::{
    config::MachineConfig,
    console::Console,
    engine::SlotEngine,
    error::SlotError,
    snapshot::SessionSnapshot,
    types::Credits,
};
use std::env;
use std::io::{self, Write};

#[derive(serde::Serialize)]
struct AutoplayReport<'a> {
    rounds_requested: u64,
    rounds_played:    u64,
    return_to_player: f64,
    hit_rate:         f64,
    net_result:       i128,
    session:          &'a SessionSnapshot,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", wall_clock_seed());
    let autoplay = args
        .windows(2)
        .find(|w| w[0] == "--autoplay")
        .and_then(|w| w[1].parse::<u64>().ok());
    let print_events = args.iter().any(|a| a == "--events");
    let limits_path = args
        .windows(2)
        .find(|w| w[0] == "--limits")
        .map(|w| w[1].as_str());

    let config = match limits_path {
        Some(path) => MachineConfig::load(path)?,
        None => MachineConfig::classic(),
    };
    let run_id = format!("run-{}", uuid::Uuid::new_v4());
    log::info!("{run_id}: seed={seed} limits={:?}", config.limits);

    let engine = match autoplay {
        Some(rounds) => run_autoplay(&args, run_id, seed, config, rounds)?,
        None => run_interactive(run_id, seed, config)?,
    };

    if let Some(engine) = engine {
        if print_events {
            let mut stdout = io::stdout().lock();
            for entry in engine.event_log() {
                writeln!(stdout, "{}", entry.payload)?;
            }
        }
    }
    Ok(())
}

fn run_interactive(run_id: String, seed: u64, config: MachineConfig) -> Result<Option<SlotEngine>> {
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    let deposit = match console.prompt_deposit() {
        Ok(amount) => amount,
        Err(SlotError::InputClosed) => {
            println!();
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };
    let mut engine = SlotEngine::new(run_id, seed, config, deposit)?;
    console.run_session(&mut engine)?;
    Ok(Some(engine))
}

fn run_autoplay(
    args: &[String],
    run_id: String,
    seed: u64,
    config: MachineConfig,
    rounds: u64,
) -> Result<Option<SlotEngine>> {
    let deposit: Credits = parse_arg(args, "--deposit", 1_000);
    let lines = parse_arg(args, "--lines", config.limits.max_lines);
    let bet: Credits = parse_arg(args, "--bet", config.limits.min_bet);

    let mut engine = SlotEngine::new(run_id, seed, config, deposit)?;
    let wager = engine.wager(lines, bet)?;
    let outcomes = engine.autoplay(&wager, rounds)?;
    let session = engine.cash_out()?;

    let report = AutoplayReport {
        rounds_requested: rounds,
        rounds_played:    outcomes.len() as u64,
        return_to_player: session.stats.return_to_player(),
        hit_rate:         session.stats.hit_rate(),
        net_result:       session.net_result(),
        session:          &session,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(Some(engine))
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}

fn wall_clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
