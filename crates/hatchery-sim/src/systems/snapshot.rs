//! Snapshot system: queries the ECS world and builds a complete ColonyStateSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use hatchery_core::components::*;
use hatchery_core::constants::{spawns_allowed, CREEP_EXPIRY_WARNING_TICKS};
use hatchery_core::enums::{AlertLevel, GamePhase, ScenarioId};
use hatchery_core::events::{Alert, ColonyEvent};
use hatchery_core::memory::ColonyMemory;
use hatchery_core::state::*;
use hatchery_core::types::{Body, PlayerId, RoomPosition, SimTime};

use crate::engine::ColonyStats;

/// Build a complete ColonyStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    scenario: Option<ScenarioId>,
    memory: &ColonyMemory,
    stats: &ColonyStats,
    events: Vec<ColonyEvent>,
) -> ColonyStateSnapshot {
    let controller = build_controller(world);

    ColonyStateSnapshot {
        time: *time,
        phase,
        scenario,
        spawns: build_spawns(world, memory, controller.spawns_allowed),
        extensions: build_extensions(world),
        creeps: build_creeps(world),
        controller,
        alerts: build_alerts(world, time),
        events,
        stats: StatsView {
            creeps_spawned: stats.creeps_spawned,
            creeps_died: stats.creeps_died,
            energy_spent: stats.energy_spent,
            energy_recovered: stats.energy_recovered,
        },
    }
}

/// Build SpawnView list from all spawn entities.
fn build_spawns(world: &World, memory: &ColonyMemory, allowed: u32) -> Vec<SpawnView> {
    let mut spawns: Vec<SpawnView> = world
        .query::<(&Spawn, &RoomPosition)>()
        .iter()
        .map(|(_, (spawn, pos))| SpawnView {
            name: spawn.name.clone(),
            position: *pos,
            energy: spawn.energy,
            energy_capacity: spawn.energy_capacity,
            spawning: spawn.spawning.as_ref().map(|job| SpawningView {
                name: job.name.clone(),
                need_time: job.need_time,
                remaining_time: job.remaining_time,
            }),
            active: u32::from(spawn.index) < allowed,
            memory: memory
                .spawn_memory(&spawn.name)
                .cloned()
                .unwrap_or(serde_json::Value::Null),
        })
        .collect();

    spawns.sort_by(|a, b| a.name.cmp(&b.name));
    spawns
}

/// Aggregate all extensions into one view.
fn build_extensions(world: &World) -> ExtensionsView {
    let mut view = ExtensionsView::default();
    for (_, ext) in world.query::<&Extension>().iter() {
        view.count += 1;
        view.energy += ext.energy;
        view.energy_capacity += ext.energy_capacity;
    }
    view
}

/// Build CreepView list from all creep entities.
fn build_creeps(world: &World) -> Vec<CreepView> {
    let mut creeps: Vec<CreepView> = world
        .query::<(&Creep, &Body, &CarryStore, &Owner, &RoomPosition)>()
        .iter()
        .map(|(_, (creep, body, store, owner, pos))| CreepView {
            name: creep.name.clone(),
            position: *pos,
            ticks_to_live: creep.ticks_to_live,
            lifetime: creep.lifetime,
            body: body.parts.iter().map(|slot| slot.part).collect(),
            carry_energy: store.energy,
            carry_capacity: store.capacity,
            owner: owner.player,
            boosted: body.is_boosted(),
        })
        .collect();

    creeps.sort_by(|a, b| a.name.cmp(&b.name));
    creeps
}

/// Build ControllerView from the colony's controller entity.
fn build_controller(world: &World) -> ControllerView {
    world
        .query::<&Controller>()
        .iter()
        .next()
        .map(|(_, controller)| ControllerView {
            level: controller.level,
            spawns_allowed: spawns_allowed(controller.level),
        })
        .unwrap_or_default()
}

/// Raise a warning for each local creep close to expiring.
fn build_alerts(world: &World, time: &SimTime) -> Vec<Alert> {
    let mut alerts: Vec<Alert> = world
        .query::<(&Creep, &Owner)>()
        .iter()
        .filter(|(_, (creep, owner))| {
            owner.player == PlayerId::LOCAL
                && creep.ticks_to_live < CREEP_EXPIRY_WARNING_TICKS
        })
        .map(|(_, (creep, _))| Alert {
            level: AlertLevel::Warning,
            message: format!(
                "creep {} expires in {} ticks",
                creep.name, creep.ticks_to_live
            ),
            tick: time.tick,
        })
        .collect();

    alerts.sort_by(|a, b| a.message.cmp(&b.message));
    alerts
}
