//! Reel Desk core: a seeded three-reel, three-line slot machine.

pub mod command;
pub mod config;
pub mod console;
pub mod engine;
pub mod error;
pub mod event;
pub mod input;
pub mod payline;
pub mod pool;
pub mod rng;
pub mod snapshot;
pub mod spin;
pub mod stats;
pub mod symbol;
pub mod types;
pub mod wager;
