//! Spawning progress — advances in-progress production jobs and
//! materializes finished creeps next to their spawn.

use std::collections::HashSet;

use hecs::World;

use hatchery_core::components::{CarryStore, Creep, Owner, Spawn, SpawningCreep};
use hatchery_core::enums::Direction;
use hatchery_core::events::ColonyEvent;
use hatchery_core::types::{PlayerId, RoomPosition};

use crate::engine::ColonyStats;

/// Advance every production job by one tick; jobs reaching zero are removed
/// and their creep entity is created on a free adjacent tile.
pub fn run(world: &mut World, events: &mut Vec<ColonyEvent>, stats: &mut ColonyStats) {
    // Advance jobs and collect the ones that finished this tick.
    let mut completions: Vec<(String, SpawningCreep, RoomPosition, PlayerId)> = Vec::new();
    for (_entity, (spawn, pos, owner)) in
        world.query_mut::<(&mut Spawn, &RoomPosition, &Owner)>()
    {
        let finished = spawn
            .spawning
            .as_mut()
            .map(|job| {
                job.remaining_time = job.remaining_time.saturating_sub(1);
                job.remaining_time == 0
            })
            .unwrap_or(false);
        if finished {
            if let Some(job) = spawn.spawning.take() {
                completions.push((spawn.name.clone(), job, *pos, owner.player));
            }
        }
    }
    if completions.is_empty() {
        return;
    }

    let mut occupied: HashSet<RoomPosition> = world
        .query::<&RoomPosition>()
        .iter()
        .map(|(_, pos)| *pos)
        .collect();

    for (spawn_name, job, spawn_pos, player) in completions {
        let tile = placement_tile(&occupied, spawn_pos);
        occupied.insert(tile);

        let lifetime = job.body.lifetime();
        let capacity = job.body.carry_capacity();
        world.spawn((
            Creep {
                name: job.name.clone(),
                ticks_to_live: lifetime,
                lifetime,
            },
            job.body,
            CarryStore {
                energy: 0,
                capacity,
            },
            Owner { player },
            tile,
        ));

        stats.creeps_spawned += 1;
        events.push(ColonyEvent::SpawnCompleted {
            spawn: spawn_name,
            creep: job.name,
        });
    }
}

/// First free tile among the spawn's 8 neighbors, scanning clockwise from
/// Top. Falls back to the tile below the spawn when everything is taken.
fn placement_tile(occupied: &HashSet<RoomPosition>, spawn_pos: RoomPosition) -> RoomPosition {
    for dir in Direction::ALL {
        let tile = spawn_pos.step(dir);
        if tile != spawn_pos && !occupied.contains(&tile) {
            return tile;
        }
    }
    spawn_pos.step(Direction::Bottom)
}
