//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 10;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Room geometry ---

/// Side length of the colony grid in tiles.
pub const ROOM_SIZE: u8 = 50;

// --- Spawn structure ---

/// Energy a spawn can hold.
pub const SPAWN_ENERGY_CAPACITY: u32 = 300;

/// Energy a spawn regenerates each tick, up to its capacity.
pub const SPAWN_ENERGY_REGEN: u32 = 1;

// --- Extensions ---

/// Energy capacity of one extension at controller levels 1-6.
pub const EXTENSION_ENERGY_CAPACITY: u32 = 50;

/// Extension capacity for a given controller level.
pub const fn extension_capacity(level: u8) -> u32 {
    match level {
        0..=6 => EXTENSION_ENERGY_CAPACITY,
        7 => 100,
        _ => 200,
    }
}

// --- Controller ---

/// Number of active spawns the controller level supports.
/// Spawns beyond this count exist but cannot produce creeps.
pub const fn spawns_allowed(level: u8) -> u32 {
    match level {
        0 => 0,
        1..=6 => 1,
        7 => 2,
        _ => 3,
    }
}

// --- Creeps ---

/// Maximum number of body parts per creep.
pub const MAX_CREEP_SIZE: usize = 50;

/// Ticks of production time per body part.
pub const CREEP_SPAWN_TIME: u32 = 3;

/// Lifetime of a freshly spawned creep, in ticks.
pub const CREEP_LIFE_TIME: u32 = 1500;

/// Lifetime of a creep with a Claim part, in ticks. Not renewable.
pub const CREEP_CLAIM_LIFE_TIME: u32 = 600;

/// Carry capacity per Carry body part.
pub const CARRY_CAPACITY: u32 = 50;

// --- Renewal ---

/// Numerator of the renew formula: one renewal adds
/// floor(RENEW_POINT_EFFECT / body_size) ticks to the creep's lifetime.
pub const RENEW_POINT_EFFECT: u32 = 600;

/// One renewal costs ceil(body_cost / RENEW_COST_DIVISOR / body_size) energy.
pub const RENEW_COST_DIVISOR: f64 = 2.5;

// --- Alerts ---

/// Remaining-life threshold below which a creep raises an expiry warning.
pub const CREEP_EXPIRY_WARNING_TICKS: u32 = 100;
