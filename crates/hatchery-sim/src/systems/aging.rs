//! Creep aging — every live creep burns one tick of lifetime per tick.
//! Death itself is handled by the cleanup system.

use hecs::World;

use hatchery_core::components::Creep;

/// Decrement every creep's remaining lifetime.
pub fn run(world: &mut World) {
    for (_entity, creep) in world.query_mut::<&mut Creep>() {
        creep.ticks_to_live = creep.ticks_to_live.saturating_sub(1);
    }
}
