//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result codes returned by spawn operations.
///
/// Operations that can fail return `Result<_, ReturnCode>`; the capability
/// check returns the code directly (`Ok` meaning the operation would succeed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Error)]
pub enum ReturnCode {
    /// The operation would succeed / has succeeded.
    #[error("ok")]
    Ok,
    /// The structure or target creep belongs to another player.
    #[error("not the owner")]
    NotOwner,
    /// A creep with the requested name already exists or is being spawned.
    #[error("name already exists")]
    NameExists,
    /// The spawn is already producing a creep.
    #[error("spawn is busy")]
    Busy,
    /// The colony does not hold enough energy for the operation.
    #[error("not enough energy")]
    NotEnoughEnergy,
    /// The spawn does not hold enough of the requested resource.
    #[error("not enough resources")]
    NotEnoughResources,
    /// The target is missing or not a valid target for the operation.
    #[error("invalid target")]
    InvalidTarget,
    /// The target cannot take any more (store full, or lifetime at cap).
    #[error("full")]
    Full,
    /// The target is not on an adjacent tile.
    #[error("not in range")]
    NotInRange,
    /// The arguments are malformed (empty body, too many parts).
    #[error("invalid arguments")]
    InvalidArgs,
    /// The controller level does not support this spawn.
    #[error("controller level too low")]
    RclNotEnough,
}

/// Creep body part types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyPart {
    Move,
    Work,
    Carry,
    Attack,
    RangedAttack,
    Heal,
    Tough,
    Claim,
}

impl BodyPart {
    /// Energy cost to spawn one part of this type.
    pub const fn cost(self) -> u32 {
        match self {
            BodyPart::Move => 50,
            BodyPart::Work => 100,
            BodyPart::Carry => 50,
            BodyPart::Attack => 80,
            BodyPart::RangedAttack => 150,
            BodyPart::Heal => 250,
            BodyPart::Tough => 10,
            BodyPart::Claim => 600,
        }
    }
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Active,
    Paused,
}

/// Starting colony preset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioId {
    /// Level 1: a single spawn, no extensions.
    #[default]
    Outpost,
    /// Level 3: a single spawn, a small extension field.
    Foothold,
    /// Level 7: two spawns, a large extension field.
    Stronghold,
}

/// 8-way compass direction for creep movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
    TopLeft,
}

impl Direction {
    /// All directions, clockwise from Top. Used for adjacent-tile scans.
    pub const ALL: [Direction; 8] = [
        Direction::Top,
        Direction::TopRight,
        Direction::Right,
        Direction::BottomRight,
        Direction::Bottom,
        Direction::BottomLeft,
        Direction::Left,
        Direction::TopLeft,
    ];

    /// Tile offset (dx, dy) for this direction. y grows downward.
    pub const fn offset(self) -> (i8, i8) {
        match self {
            Direction::Top => (0, -1),
            Direction::TopRight => (1, -1),
            Direction::Right => (1, 0),
            Direction::BottomRight => (1, 1),
            Direction::Bottom => (0, 1),
            Direction::BottomLeft => (-1, 1),
            Direction::Left => (-1, 0),
            Direction::TopLeft => (-1, -1),
        }
    }
}

/// Alert severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AlertLevel {
    Info,
    Warning,
    Critical,
}
