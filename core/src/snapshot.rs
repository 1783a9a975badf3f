//! Snapshot of a session — everything needed to report on it as JSON.

use crate::{
    stats::SessionStats,
    types::{Credits, Round, RunId},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub run_id:  RunId,
    pub seed:    u64,
    pub round:   Round,
    pub deposit: Credits,
    pub balance: Credits,
    pub stats:   SessionStats,
}

impl SessionSnapshot {
    /// Balance minus deposit; negative when the player is down.
    pub fn net_result(&self) -> i128 {
        i128::from(self.balance) - i128::from(self.deposit)
    }
}
