//! Core types and definitions for the HATCHERY colony simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, state snapshots, events, memory, and constants.
//! It has no dependency on the ECS or any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod memory;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
