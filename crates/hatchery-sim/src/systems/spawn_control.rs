//! Spawn control — the five spawn operations with their result codes.
//!
//! Each operation validates in a fixed, documented order and returns the
//! first failing code. `can_spawn_creep` and `spawn_creep` share one
//! checker so they can never disagree.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde_json::Value;

use hatchery_core::components::*;
use hatchery_core::constants::*;
use hatchery_core::enums::{BodyPart, ReturnCode};
use hatchery_core::events::ColonyEvent;
use hatchery_core::memory::ColonyMemory;
use hatchery_core::types::{Body, PlayerId, RoomPosition};

use crate::engine::ColonyStats;

/// Check whether a creep could be produced at the named spawn.
///
/// Check order: InvalidTarget (unknown spawn), NotOwner, InvalidArgs
/// (empty body or more than 50 parts), RclNotEnough (spawn inactive at
/// the current controller level), Busy, NameExists (against live creeps
/// and in-progress jobs), NotEnoughEnergy (against the colony total).
pub fn can_spawn_creep(
    world: &World,
    spawn_name: &str,
    body: &[BodyPart],
    name: Option<&str>,
) -> ReturnCode {
    let Some(spawn_ent) = find_spawn(world, spawn_name) else {
        return ReturnCode::InvalidTarget;
    };
    if !is_local(world, spawn_ent) {
        return ReturnCode::NotOwner;
    }
    if body.is_empty() || body.len() > MAX_CREEP_SIZE {
        return ReturnCode::InvalidArgs;
    }

    let (index, busy) = match world.get::<&Spawn>(spawn_ent) {
        Ok(spawn) => (spawn.index, spawn.spawning.is_some()),
        Err(_) => return ReturnCode::InvalidTarget,
    };
    if u32::from(index) >= spawns_allowed(controller_level(world)) {
        return ReturnCode::RclNotEnough;
    }
    if busy {
        return ReturnCode::Busy;
    }
    if let Some(requested) = name {
        if name_taken(world, requested) {
            return ReturnCode::NameExists;
        }
    }
    if body_cost(body) > colony_energy(world) {
        return ReturnCode::NotEnoughEnergy;
    }
    ReturnCode::Ok
}

/// Start producing a creep at the named spawn.
///
/// Generates a random name when none is given. The body cost is withdrawn
/// from the initiating spawn first, then the remaining spawns, then the
/// extensions. Returns the new creep's name.
#[allow(clippy::too_many_arguments)]
pub fn spawn_creep(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    memory: &mut ColonyMemory,
    stats: &mut ColonyStats,
    events: &mut Vec<ColonyEvent>,
    spawn_name: &str,
    body: &[BodyPart],
    name: Option<String>,
    creep_memory: Option<Value>,
) -> Result<String, ReturnCode> {
    match can_spawn_creep(world, spawn_name, body, name.as_deref()) {
        ReturnCode::Ok => {}
        code => return Err(code),
    }
    let spawn_ent = find_spawn(world, spawn_name).ok_or(ReturnCode::InvalidTarget)?;

    let creep_name = match name {
        Some(requested) => requested,
        None => generate_creep_name(world, rng),
    };

    let cost = body_cost(body);
    withdraw_energy(world, spawn_ent, cost);

    let need_time = CREEP_SPAWN_TIME * body.len() as u32;
    if let Ok(mut spawn) = world.get::<&mut Spawn>(spawn_ent) {
        spawn.spawning = Some(SpawningCreep {
            name: creep_name.clone(),
            need_time,
            remaining_time: need_time,
            body: Body::from_parts(body),
        });
    }

    if let Some(value) = creep_memory {
        memory.set_creep_memory(&creep_name, value);
    }
    stats.energy_spent += cost;
    events.push(ColonyEvent::SpawnStarted {
        spawn: spawn_name.to_string(),
        creep: creep_name.clone(),
        need_time,
    });
    Ok(creep_name)
}

/// Kill an adjacent creep and reclaim part of its spawn cost.
///
/// Check order: InvalidTarget (unknown spawn), NotOwner (spawn),
/// InvalidTarget (unknown creep), NotOwner (creep), NotInRange.
/// The refund is `floor(body_cost * ticks_to_live / lifetime)`, credited to
/// the spawn first, then the extensions; overflow is discarded.
/// Returns the refund.
pub fn recycle_creep(
    world: &mut World,
    stats: &mut ColonyStats,
    events: &mut Vec<ColonyEvent>,
    spawn_name: &str,
    target: &str,
) -> Result<u32, ReturnCode> {
    let spawn_ent = find_spawn(world, spawn_name).ok_or(ReturnCode::InvalidTarget)?;
    if !is_local(world, spawn_ent) {
        return Err(ReturnCode::NotOwner);
    }
    let creep_ent = find_creep(world, target).ok_or(ReturnCode::InvalidTarget)?;
    if !is_local(world, creep_ent) {
        return Err(ReturnCode::NotOwner);
    }
    check_adjacent(world, spawn_ent, creep_ent)?;

    let (cost, ticks_to_live, lifetime) = {
        let creep = world
            .get::<&Creep>(creep_ent)
            .map_err(|_| ReturnCode::InvalidTarget)?;
        let body = world
            .get::<&Body>(creep_ent)
            .map_err(|_| ReturnCode::InvalidTarget)?;
        (body.cost(), creep.ticks_to_live, creep.lifetime)
    };

    let refund = (u64::from(cost) * u64::from(ticks_to_live) / u64::from(lifetime)) as u32;
    let credited = credit_energy(world, spawn_ent, refund);
    stats.energy_recovered += credited;
    stats.creeps_died += 1;

    let _ = world.despawn(creep_ent);
    events.push(ColonyEvent::CreepRecycled {
        spawn: spawn_name.to_string(),
        creep: target.to_string(),
        refund,
    });
    Ok(refund)
}

/// Extend the lifetime of an adjacent creep.
///
/// Check order: InvalidTarget (unknown spawn), NotOwner (spawn), Busy,
/// InvalidTarget (unknown creep), NotOwner (creep), NotInRange, Full
/// (claim-bearing body, or lifetime already near its cap), NotEnoughEnergy.
/// One renewal adds `floor(600 / body_size)` ticks, costs
/// `ceil(body_cost / 2.5 / body_size)` energy, and strips all boosts.
/// Returns the added ticks.
pub fn renew_creep(
    world: &mut World,
    stats: &mut ColonyStats,
    events: &mut Vec<ColonyEvent>,
    spawn_name: &str,
    target: &str,
) -> Result<u32, ReturnCode> {
    let spawn_ent = find_spawn(world, spawn_name).ok_or(ReturnCode::InvalidTarget)?;
    if !is_local(world, spawn_ent) {
        return Err(ReturnCode::NotOwner);
    }
    let busy = world
        .get::<&Spawn>(spawn_ent)
        .map(|spawn| spawn.spawning.is_some())
        .unwrap_or(false);
    if busy {
        return Err(ReturnCode::Busy);
    }
    let creep_ent = find_creep(world, target).ok_or(ReturnCode::InvalidTarget)?;
    if !is_local(world, creep_ent) {
        return Err(ReturnCode::NotOwner);
    }
    check_adjacent(world, spawn_ent, creep_ent)?;

    let (size, cost, has_claim, ticks_to_live, lifetime) = {
        let creep = world
            .get::<&Creep>(creep_ent)
            .map_err(|_| ReturnCode::InvalidTarget)?;
        let body = world
            .get::<&Body>(creep_ent)
            .map_err(|_| ReturnCode::InvalidTarget)?;
        (
            body.size() as u32,
            body.cost(),
            body.has_part(BodyPart::Claim),
            creep.ticks_to_live,
            creep.lifetime,
        )
    };

    // Claim bodies run on a hard-capped clock and cannot be extended.
    if has_claim {
        return Err(ReturnCode::Full);
    }
    let added_ticks = RENEW_POINT_EFFECT / size;
    if ticks_to_live + added_ticks > lifetime {
        return Err(ReturnCode::Full);
    }
    let energy_cost = renew_cost(cost, size);
    if colony_energy(world) < energy_cost {
        return Err(ReturnCode::NotEnoughEnergy);
    }

    withdraw_energy(world, spawn_ent, energy_cost);
    if let Ok(mut creep) = world.get::<&mut Creep>(creep_ent) {
        creep.ticks_to_live += added_ticks;
    }
    if let Ok(mut body) = world.get::<&mut Body>(creep_ent) {
        body.strip_boosts();
    }
    stats.energy_spent += energy_cost;
    events.push(ColonyEvent::CreepRenewed {
        spawn: spawn_name.to_string(),
        creep: target.to_string(),
        added_ticks,
    });
    Ok(added_ticks)
}

/// Transfer energy from the spawn's own store to an adjacent creep.
///
/// Check order: InvalidTarget (unknown spawn), NotOwner, InvalidTarget
/// (unknown creep or no carry capacity), NotInRange, NotEnoughResources,
/// Full. An omitted or zero amount transfers everything that fits.
/// Returns the transferred amount.
#[deprecated(note = "legacy spawn API; creeps withdraw for themselves now")]
pub fn transfer_energy(
    world: &mut World,
    events: &mut Vec<ColonyEvent>,
    spawn_name: &str,
    target: &str,
    amount: Option<u32>,
) -> Result<u32, ReturnCode> {
    let spawn_ent = find_spawn(world, spawn_name).ok_or(ReturnCode::InvalidTarget)?;
    if !is_local(world, spawn_ent) {
        return Err(ReturnCode::NotOwner);
    }
    let creep_ent = find_creep(world, target).ok_or(ReturnCode::InvalidTarget)?;
    let (carried, capacity) = {
        let store = world
            .get::<&CarryStore>(creep_ent)
            .map_err(|_| ReturnCode::InvalidTarget)?;
        (store.energy, store.capacity)
    };
    if capacity == 0 {
        return Err(ReturnCode::InvalidTarget);
    }
    check_adjacent(world, spawn_ent, creep_ent)?;

    let available = world
        .get::<&Spawn>(spawn_ent)
        .map(|spawn| spawn.energy)
        .unwrap_or(0);
    let free = capacity - carried;
    let transferred = match amount {
        Some(requested) if requested > 0 => {
            if requested > available {
                return Err(ReturnCode::NotEnoughResources);
            }
            if requested > free {
                return Err(ReturnCode::Full);
            }
            requested
        }
        _ => {
            if available == 0 {
                return Err(ReturnCode::NotEnoughResources);
            }
            if free == 0 {
                return Err(ReturnCode::Full);
            }
            available.min(free)
        }
    };

    if let Ok(mut spawn) = world.get::<&mut Spawn>(spawn_ent) {
        spawn.energy -= transferred;
    }
    if let Ok(mut store) = world.get::<&mut CarryStore>(creep_ent) {
        store.energy += transferred;
    }
    events.push(ColonyEvent::EnergyTransferred {
        spawn: spawn_name.to_string(),
        creep: target.to_string(),
        amount: transferred,
    });
    Ok(transferred)
}

// --- Shared helpers ---

/// Total energy cost of a part list.
pub fn body_cost(body: &[BodyPart]) -> u32 {
    body.iter().map(|part| part.cost()).sum()
}

/// Energy cost of one renewal: ceil(body_cost / 2.5 / body_size).
pub fn renew_cost(body_cost: u32, body_size: u32) -> u32 {
    // ceil(cost / 2.5 / size) == ceil(2 * cost / (5 * size)) in integers
    let denominator = 5 * body_size;
    (2 * body_cost + denominator - 1) / denominator
}

/// Total energy held across all spawns and extensions.
pub fn colony_energy(world: &World) -> u32 {
    let from_spawns: u32 = world
        .query::<&Spawn>()
        .iter()
        .map(|(_, spawn)| spawn.energy)
        .sum();
    let from_extensions: u32 = world
        .query::<&Extension>()
        .iter()
        .map(|(_, ext)| ext.energy)
        .sum();
    from_spawns + from_extensions
}

/// Find a spawn entity by name.
pub fn find_spawn(world: &World, name: &str) -> Option<Entity> {
    world
        .query::<&Spawn>()
        .iter()
        .find(|(_, spawn)| spawn.name == name)
        .map(|(entity, _)| entity)
}

/// Find a creep entity by name.
pub fn find_creep(world: &World, name: &str) -> Option<Entity> {
    world
        .query::<&Creep>()
        .iter()
        .find(|(_, creep)| creep.name == name)
        .map(|(entity, _)| entity)
}

/// Whether the entity is owned by the local player.
fn is_local(world: &World, entity: Entity) -> bool {
    world
        .get::<&Owner>(entity)
        .map(|owner| owner.player == PlayerId::LOCAL)
        .unwrap_or(false)
}

/// Current controller level (0 if the colony has none).
fn controller_level(world: &World) -> u8 {
    world
        .query::<&Controller>()
        .iter()
        .next()
        .map(|(_, controller)| controller.level)
        .unwrap_or(0)
}

/// Whether a creep name collides with a live creep or an in-progress job.
fn name_taken(world: &World, name: &str) -> bool {
    let live = world
        .query::<&Creep>()
        .iter()
        .any(|(_, creep)| creep.name == name);
    if live {
        return true;
    }
    world.query::<&Spawn>().iter().any(|(_, spawn)| {
        spawn
            .spawning
            .as_ref()
            .is_some_and(|job| job.name == name)
    })
}

/// Generate a fresh creep name from the engine RNG.
fn generate_creep_name(world: &World, rng: &mut ChaCha8Rng) -> String {
    loop {
        let candidate = format!("creep_{:06x}", rng.gen_range(0..0x100_0000u32));
        if !name_taken(world, &candidate) {
            return candidate;
        }
    }
}

/// Error with NotInRange unless the two entities sit on adjacent tiles.
fn check_adjacent(world: &World, a: Entity, b: Entity) -> Result<(), ReturnCode> {
    let pos_a = world
        .get::<&RoomPosition>(a)
        .map(|pos| *pos)
        .map_err(|_| ReturnCode::InvalidTarget)?;
    let pos_b = world
        .get::<&RoomPosition>(b)
        .map(|pos| *pos)
        .map_err(|_| ReturnCode::InvalidTarget)?;
    if pos_a.is_adjacent_to(&pos_b) {
        Ok(())
    } else {
        Err(ReturnCode::NotInRange)
    }
}

/// Withdraw `amount` energy: the initiating spawn first, then the remaining
/// spawns by name, then the extensions by index. The caller has already
/// verified the colony holds enough.
fn withdraw_energy(world: &mut World, initiating: Entity, amount: u32) {
    let mut remaining = amount;
    if let Ok(mut spawn) = world.get::<&mut Spawn>(initiating) {
        let take = remaining.min(spawn.energy);
        spawn.energy -= take;
        remaining -= take;
    }
    if remaining == 0 {
        return;
    }

    let mut spawns: Vec<(String, Entity)> = world
        .query::<&Spawn>()
        .iter()
        .filter(|(entity, _)| *entity != initiating)
        .map(|(entity, spawn)| (spawn.name.clone(), entity))
        .collect();
    spawns.sort();
    for (_, entity) in spawns {
        if remaining == 0 {
            return;
        }
        if let Ok(mut spawn) = world.get::<&mut Spawn>(entity) {
            let take = remaining.min(spawn.energy);
            spawn.energy -= take;
            remaining -= take;
        }
    }

    let mut extensions: Vec<(u8, Entity)> = world
        .query::<&Extension>()
        .iter()
        .map(|(entity, ext)| (ext.index, entity))
        .collect();
    extensions.sort_by_key(|(index, _)| *index);
    for (_, entity) in extensions {
        if remaining == 0 {
            return;
        }
        if let Ok(mut ext) = world.get::<&mut Extension>(entity) {
            let take = remaining.min(ext.energy);
            ext.energy -= take;
            remaining -= take;
        }
    }
}

/// Credit up to `amount` energy: the spawn first, then extensions by index.
/// Returns how much actually fit; the overflow is discarded.
fn credit_energy(world: &mut World, spawn_ent: Entity, amount: u32) -> u32 {
    let mut remaining = amount;
    if let Ok(mut spawn) = world.get::<&mut Spawn>(spawn_ent) {
        let fit = remaining.min(spawn.energy_capacity - spawn.energy);
        spawn.energy += fit;
        remaining -= fit;
    }
    if remaining > 0 {
        let mut extensions: Vec<(u8, Entity)> = world
            .query::<&Extension>()
            .iter()
            .map(|(entity, ext)| (ext.index, entity))
            .collect();
        extensions.sort_by_key(|(index, _)| *index);
        for (_, entity) in extensions {
            if remaining == 0 {
                break;
            }
            if let Ok(mut ext) = world.get::<&mut Extension>(entity) {
                let fit = remaining.min(ext.energy_capacity - ext.energy);
                ext.energy += fit;
                remaining -= fit;
            }
        }
    }
    amount - remaining
}
