//! Player commands sent from the frontend to the simulation.
//!
//! Commands are validated and queued for processing at the next tick boundary.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enums::*;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Spawn operations ---
    /// Start producing a creep at the named spawn.
    SpawnCreep {
        spawn: String,
        body: Vec<BodyPart>,
        /// Unique creep name; a random one is generated when omitted.
        name: Option<String>,
        /// Initial creep memory, stored immediately under the new name.
        memory: Option<Value>,
    },
    /// Kill an adjacent creep and reclaim part of its spawn cost.
    RecycleCreep { spawn: String, target: String },
    /// Extend the lifetime of an adjacent creep.
    RenewCreep { spawn: String, target: String },
    /// Transfer energy from the spawn to an adjacent creep.
    /// Legacy operation kept for older frontends.
    TransferEnergy {
        spawn: String,
        target: String,
        /// Amount to transfer; all available energy when omitted.
        amount: Option<u32>,
    },

    // --- Creep control ---
    /// Step a creep one tile in the given direction.
    MoveCreep { creep: String, direction: Direction },

    // --- Memory ---
    /// Replace the memory attached to a spawn.
    SetSpawnMemory { spawn: String, value: Value },
    /// Replace the memory attached to a creep.
    SetCreepMemory { creep: String, value: Value },

    // --- Simulation control ---
    /// Select a scenario before starting a colony.
    SelectScenario { scenario: ScenarioId },
    /// Start a new colony with the selected scenario.
    StartColony,
    /// Return to the main menu.
    ReturnToMenu,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
    /// Set time scale (1.0 = normal, 2.0 = double).
    SetTimeScale { scale: f64 },
}
