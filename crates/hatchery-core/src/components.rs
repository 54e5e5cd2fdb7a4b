//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::types::{Body, PlayerId};

/// A spawn structure: the colony center that produces creeps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spawn {
    /// Immutable identity key, chosen at placement and never changed.
    pub name: String,
    /// Energy currently held. Never exceeds `energy_capacity`.
    pub energy: u32,
    /// Total energy the spawn can hold.
    pub energy_capacity: u32,
    /// In-progress production, or None when idle.
    pub spawning: Option<SpawningCreep>,
    /// Placement order. Spawns with index >= spawns_allowed(level) are inactive.
    pub index: u8,
}

/// An in-progress creep production job.
/// Present on a spawn if and only if it is mid-production.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawningCreep {
    /// Name of the creep being produced.
    pub name: String,
    /// Total ticks required to complete production.
    pub need_time: u32,
    /// Ticks remaining. Decreases monotonically; the job is removed at zero.
    pub remaining_time: u32,
    /// The body the creep will materialize with.
    pub body: Body,
}

/// An energy extension feeding the colony's spawn capacity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Extension {
    /// Placement order, used for deterministic withdrawal.
    pub index: u8,
    pub energy: u32,
    pub energy_capacity: u32,
}

/// A live creep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Creep {
    /// Unique name (hash key into creep memory).
    pub name: String,
    /// Remaining lifetime in ticks. The creep dies at zero.
    pub ticks_to_live: u32,
    /// Lifetime ceiling for this creep (claim bodies are capped lower).
    pub lifetime: u32,
}

/// Energy carried by a creep.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CarryStore {
    pub energy: u32,
    pub capacity: u32,
}

/// Ownership marker for structures and creeps.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Owner {
    pub player: PlayerId,
}

/// The colony controller. Its level gates spawn activity and
/// extension capacity. One per colony.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Controller {
    pub level: u8,
}

// RoomPosition and Body are defined in types.rs and used as components too.
