//! Fundamental grid and simulation types.

use serde::{Deserialize, Serialize};

use crate::constants::{CARRY_CAPACITY, CREEP_CLAIM_LIFE_TIME, CREEP_LIFE_TIME, ROOM_SIZE};
use crate::enums::{BodyPart, Direction};

/// A tile position on the colony's 50x50 grid.
/// (0, 0) is the top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomPosition {
    pub x: u8,
    pub y: u8,
}

impl RoomPosition {
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Chebyshev distance to another position (diagonal steps count as 1).
    pub fn range_to(&self, other: &RoomPosition) -> u8 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        dx.max(dy)
    }

    /// Whether `other` is on one of the 8 surrounding tiles (or the same tile).
    pub fn is_adjacent_to(&self, other: &RoomPosition) -> bool {
        self.range_to(other) <= 1
    }

    /// Position one step in `dir`, clamped to the room bounds.
    pub fn step(&self, dir: Direction) -> RoomPosition {
        let (dx, dy) = dir.offset();
        let max = ROOM_SIZE - 1;
        RoomPosition {
            x: self.x.saturating_add_signed(dx).min(max),
            y: self.y.saturating_add_signed(dy).min(max),
        }
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        1.0 / crate::constants::TICK_RATE as f64
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}

/// Identifies the owner of a structure or creep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The local player — the one issuing commands to this engine.
    pub const LOCAL: PlayerId = PlayerId(1);
}

/// One slot of a creep body: the part type plus an optional boost label.
/// Boost chemistry is out of scope; labels are only carried and stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyPartSlot {
    pub part: BodyPart,
    pub boost: Option<String>,
}

impl BodyPartSlot {
    pub fn plain(part: BodyPart) -> Self {
        Self { part, boost: None }
    }
}

/// A creep body: 1 to 50 part slots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Body {
    pub parts: Vec<BodyPartSlot>,
}

impl Body {
    /// Build a body from plain (unboosted) parts.
    pub fn from_parts(parts: &[BodyPart]) -> Self {
        Self {
            parts: parts.iter().copied().map(BodyPartSlot::plain).collect(),
        }
    }

    /// Number of body parts.
    pub fn size(&self) -> usize {
        self.parts.len()
    }

    /// Total energy cost of the body at spawn time.
    pub fn cost(&self) -> u32 {
        self.parts.iter().map(|slot| slot.part.cost()).sum()
    }

    /// Whether the body contains at least one part of the given type.
    pub fn has_part(&self, part: BodyPart) -> bool {
        self.parts.iter().any(|slot| slot.part == part)
    }

    /// Carry capacity granted by Carry parts.
    pub fn carry_capacity(&self) -> u32 {
        self.parts
            .iter()
            .filter(|slot| slot.part == BodyPart::Carry)
            .count() as u32
            * CARRY_CAPACITY
    }

    /// Lifetime a freshly spawned creep of this body receives.
    /// Claim-bearing creeps live on a hard-capped shorter clock.
    pub fn lifetime(&self) -> u32 {
        if self.has_part(BodyPart::Claim) {
            CREEP_CLAIM_LIFE_TIME
        } else {
            CREEP_LIFE_TIME
        }
    }

    /// Whether any slot carries a boost label.
    pub fn is_boosted(&self) -> bool {
        self.parts.iter().any(|slot| slot.boost.is_some())
    }

    /// Remove all boost labels (renewing a creep strips its boosts).
    pub fn strip_boosts(&mut self) {
        for slot in &mut self.parts {
            slot.boost = None;
        }
    }
}
