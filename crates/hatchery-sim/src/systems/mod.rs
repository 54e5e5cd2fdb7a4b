//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state — all state lives in components.

pub mod aging;
pub mod cleanup;
pub mod energy;
pub mod movement;
pub mod snapshot;
pub mod spawn_control;
pub mod spawning;
