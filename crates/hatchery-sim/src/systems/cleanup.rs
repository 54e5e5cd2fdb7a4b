//! Cleanup system: removes creeps whose lifetime has run out.
//! Uses a pre-allocated buffer to avoid per-tick allocation.

use hecs::{Entity, World};

use hatchery_core::components::Creep;
use hatchery_core::events::ColonyEvent;

use crate::engine::ColonyStats;

/// Despawn creeps with no remaining lifetime, emitting a death event for each.
pub fn run(
    world: &mut World,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<ColonyEvent>,
    stats: &mut ColonyStats,
) {
    despawn_buffer.clear();

    for (entity, creep) in world.query_mut::<&Creep>() {
        if creep.ticks_to_live == 0 {
            events.push(ColonyEvent::CreepDied {
                creep: creep.name.clone(),
            });
            despawn_buffer.push(entity);
        }
    }

    stats.creeps_died += despawn_buffer.len() as u32;
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
