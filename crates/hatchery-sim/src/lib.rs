//! Simulation engine for HATCHERY.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces ColonyStateSnapshots for the frontend.

pub mod engine;
pub mod scenario;
pub mod systems;
pub mod world_setup;

pub use engine::ColonyEngine;
pub use hatchery_core as core;
