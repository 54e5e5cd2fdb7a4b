//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the controller, spawn structures, extensions, and creep
//! entities with appropriate component bundles.

use hecs::World;

use hatchery_core::components::*;
use hatchery_core::constants::{extension_capacity, SPAWN_ENERGY_CAPACITY};
use hatchery_core::enums::{BodyPart, ScenarioId};
use hatchery_core::types::{Body, PlayerId, RoomPosition};

use crate::scenario;

/// Set up the initial colony world for the given scenario.
pub fn setup_colony(world: &mut World, scenario_id: ScenarioId) {
    let layout = scenario::build_layout(scenario_id);

    add_controller(world, layout.controller_level);
    for i in 0..layout.spawn_count {
        add_spawn(world, &format!("Spawn{}", i + 1), spawn_position(i), i);
    }
    for i in 0..layout.extension_count {
        add_extension(world, i, extension_position(i), layout.controller_level);
    }
}

/// Spawn the colony controller.
pub fn add_controller(world: &mut World, level: u8) -> hecs::Entity {
    world.spawn((Controller { level }, RoomPosition::new(5, 5)))
}

/// Spawn a spawn structure, fully charged and idle.
pub fn add_spawn(world: &mut World, name: &str, position: RoomPosition, index: u8) -> hecs::Entity {
    world.spawn((
        Spawn {
            name: name.to_string(),
            energy: SPAWN_ENERGY_CAPACITY,
            energy_capacity: SPAWN_ENERGY_CAPACITY,
            spawning: None,
            index,
        },
        position,
        Owner {
            player: PlayerId::LOCAL,
        },
    ))
}

/// Spawn an extension, fully charged.
pub fn add_extension(
    world: &mut World,
    index: u8,
    position: RoomPosition,
    controller_level: u8,
) -> hecs::Entity {
    let capacity = extension_capacity(controller_level);
    world.spawn((
        Extension {
            index,
            energy: capacity,
            energy_capacity: capacity,
        },
        position,
        Owner {
            player: PlayerId::LOCAL,
        },
    ))
}

/// Spawn a creep entity directly with a fresh lifetime.
/// Production normally runs through the spawning system; this factory is for
/// setup and tests that need a creep already standing somewhere.
pub fn spawn_creep_entity(
    world: &mut World,
    name: &str,
    parts: &[BodyPart],
    position: RoomPosition,
    owner: PlayerId,
) -> hecs::Entity {
    let body = Body::from_parts(parts);
    let lifetime = body.lifetime();
    let capacity = body.carry_capacity();
    world.spawn((
        Creep {
            name: name.to_string(),
            ticks_to_live: lifetime,
            lifetime,
        },
        body,
        CarryStore {
            energy: 0,
            capacity,
        },
        Owner { player: owner },
        position,
    ))
}

/// Spawn structure positions: a row near the room center.
fn spawn_position(index: u8) -> RoomPosition {
    RoomPosition::new(24 + 4 * index, 24)
}

/// Extension positions: a compact grid below the spawns.
fn extension_position(index: u8) -> RoomPosition {
    RoomPosition::new(16 + 2 * (index % 10), 30 + 2 * (index / 10))
}
