//! Session event log.
//!
//! RULE: Every balance change is recorded as an event.
//! A rejected wager changes nothing and records nothing.

use crate::{
    spin::Grid,
    types::{Credits, Round, RunId},
};
use serde::{Deserialize, Serialize};

/// Every event emitted during a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    SessionOpened {
        run_id:  RunId,
        seed:    u64,
        deposit: Credits,
    },
    SpinSettled {
        round:         Round,
        lines:         usize,
        bet:           Credits,
        stake:         Credits,
        grid:          Grid,
        winnings:      Credits,
        winning_lines: Vec<usize>,
        balance:       Credits,
    },
    SessionClosed {
        rounds:  Round,
        balance: Credits,
    },
}

impl SessionEvent {
    /// Stable name, used as the event_type of a log entry.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::SessionOpened { .. } => "session_opened",
            Self::SpinSettled { .. }   => "spin_settled",
            Self::SessionClosed { .. } => "session_closed",
        }
    }
}

/// One line of the event log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLogEntry {
    pub run_id:     RunId,
    pub round:      Round,
    pub event_type: String,
    pub payload:    String, // JSON-serialized SessionEvent
}

impl EventLogEntry {
    pub fn new(run_id: &str, round: Round, event: &SessionEvent) -> serde_json::Result<Self> {
        Ok(Self {
            run_id:     run_id.to_string(),
            round,
            event_type: event.type_name().to_string(),
            payload:    serde_json::to_string(event)?,
        })
    }
}
