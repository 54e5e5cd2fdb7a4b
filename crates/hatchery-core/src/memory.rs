//! Externally-managed memory attachments.
//!
//! Every spawn and creep has a memory slot keyed by its name: an arbitrary
//! JSON value the player attaches and the simulation never interprets.
//! Memory outlives the entity — the engine does not garbage-collect it,
//! callers remove entries when they are done with them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// All memory attachments for one colony.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColonyMemory {
    /// Spawn memory, keyed by spawn name.
    pub spawns: HashMap<String, Value>,
    /// Creep memory, keyed by creep name.
    pub creeps: HashMap<String, Value>,
}

impl ColonyMemory {
    pub fn spawn_memory(&self, name: &str) -> Option<&Value> {
        self.spawns.get(name)
    }

    pub fn set_spawn_memory(&mut self, name: &str, value: Value) {
        self.spawns.insert(name.to_string(), value);
    }

    pub fn creep_memory(&self, name: &str) -> Option<&Value> {
        self.creeps.get(name)
    }

    pub fn set_creep_memory(&mut self, name: &str, value: Value) {
        self.creeps.insert(name.to_string(), value);
    }

    pub fn remove_creep_memory(&mut self, name: &str) -> Option<Value> {
        self.creeps.remove(name)
    }
}
