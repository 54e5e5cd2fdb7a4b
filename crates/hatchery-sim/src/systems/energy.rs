//! Spawn energy regeneration.
//!
//! Spawns auto-regenerate a small amount of energy each tick, so a colony
//! can recover even after all its creeps have died. Extensions do not
//! regenerate; they are filled by creeps (outside this engine's scope).

use hecs::World;

use hatchery_core::components::Spawn;
use hatchery_core::constants::SPAWN_ENERGY_REGEN;

/// Regenerate each spawn's energy up to its capacity.
pub fn run(world: &mut World) {
    for (_entity, spawn) in world.query_mut::<&mut Spawn>() {
        spawn.energy = (spawn.energy + SPAWN_ENERGY_REGEN).min(spawn.energy_capacity);
    }
}
