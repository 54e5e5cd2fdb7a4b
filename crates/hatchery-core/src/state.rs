//! Colony state snapshot — the complete visible state sent to the frontend each tick.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enums::*;
use crate::events::{Alert, ColonyEvent};
use crate::types::{PlayerId, RoomPosition, SimTime};

/// Complete colony state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColonyStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub scenario: Option<ScenarioId>,
    pub spawns: Vec<SpawnView>,
    pub extensions: ExtensionsView,
    pub creeps: Vec<CreepView>,
    pub controller: ControllerView,
    pub events: Vec<ColonyEvent>,
    pub alerts: Vec<Alert>,
    pub stats: StatsView,
}

/// A spawn structure as shown on the colony display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpawnView {
    pub name: String,
    pub position: RoomPosition,
    pub energy: u32,
    pub energy_capacity: u32,
    /// In-progress production, or None when idle.
    pub spawning: Option<SpawningView>,
    /// Whether the controller level supports this spawn.
    pub active: bool,
    /// The spawn's memory attachment.
    pub memory: Value,
}

/// The spawning-status record: present iff the spawn is mid-production.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawningView {
    /// Name of the creep being produced.
    pub name: String,
    /// Total ticks needed to complete production.
    pub need_time: u32,
    /// Ticks remaining to go.
    pub remaining_time: u32,
}

/// Aggregate view of the colony's extensions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtensionsView {
    pub count: u32,
    pub energy: u32,
    pub energy_capacity: u32,
}

/// A live creep as shown on the colony display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreepView {
    pub name: String,
    pub position: RoomPosition,
    pub ticks_to_live: u32,
    pub lifetime: u32,
    pub body: Vec<BodyPart>,
    pub carry_energy: u32,
    pub carry_capacity: u32,
    pub owner: PlayerId,
    pub boosted: bool,
}

/// Controller status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ControllerView {
    pub level: u8,
    pub spawns_allowed: u32,
}

/// Running colony statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsView {
    pub creeps_spawned: u32,
    pub creeps_died: u32,
    pub energy_spent: u32,
    pub energy_recovered: u32,
}
