//! Creep movement — single-tile steps issued by player commands.
//!
//! There is no pathfinding here: a step moves the creep one tile in the
//! requested direction, clamped to the room bounds. Enough to bring creeps
//! into (or out of) range of a spawn.

use hecs::World;

use hatchery_core::components::{Creep, Owner};
use hatchery_core::enums::Direction;
use hatchery_core::types::{PlayerId, RoomPosition};

/// Step the named creep one tile. Only the local player's creeps respond.
pub fn step_creep(world: &mut World, name: &str, direction: Direction) {
    for (_entity, (creep, owner, pos)) in
        world.query_mut::<(&Creep, &Owner, &mut RoomPosition)>()
    {
        if creep.name == name && owner.player == PlayerId::LOCAL {
            *pos = pos.step(direction);
            return;
        }
    }
}
