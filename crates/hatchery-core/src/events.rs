//! Events emitted by the simulation for UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::{AlertLevel, ReturnCode};

/// Per-tick events for the frontend event feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ColonyEvent {
    /// A spawn started producing a creep.
    SpawnStarted {
        spawn: String,
        creep: String,
        need_time: u32,
    },
    /// Production finished; the creep materialized next to its spawn.
    SpawnCompleted { spawn: String, creep: String },
    /// A spawn command was rejected.
    SpawnRejected { spawn: String, code: ReturnCode },
    /// A creep's lifetime ran out.
    CreepDied { creep: String },
    /// A creep was recycled; `refund` energy was reclaimed.
    CreepRecycled {
        spawn: String,
        creep: String,
        refund: u32,
    },
    /// A recycle command was rejected.
    RecycleRejected { spawn: String, code: ReturnCode },
    /// A creep's lifetime was extended by `added_ticks`.
    CreepRenewed {
        spawn: String,
        creep: String,
        added_ticks: u32,
    },
    /// A renew command was rejected.
    RenewRejected { spawn: String, code: ReturnCode },
    /// Energy moved from a spawn into a creep's store.
    EnergyTransferred {
        spawn: String,
        creep: String,
        amount: u32,
    },
    /// A transfer command was rejected.
    TransferRejected { spawn: String, code: ReturnCode },
}

/// Alert for the UI alert queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
    pub tick: u64,
}
