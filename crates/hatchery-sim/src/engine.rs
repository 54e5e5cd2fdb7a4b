//! Simulation engine — the core of the game.
//!
//! `ColonyEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `ColonyStateSnapshot`s. Completely
//! headless (no GUI dependency), enabling deterministic testing.
//!
//! The spawn operations are also exposed directly on the engine, each
//! returning the result codes documented in `spawn_control`.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::Value;

use hatchery_core::commands::PlayerCommand;
use hatchery_core::enums::{BodyPart, GamePhase, ReturnCode, ScenarioId};
use hatchery_core::events::ColonyEvent;
use hatchery_core::memory::ColonyMemory;
use hatchery_core::state::ColonyStateSnapshot;
use hatchery_core::types::SimTime;

use crate::systems;
use crate::systems::spawn_control;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct ColonyConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
    /// Starting colony preset.
    pub scenario: ScenarioId,
}

impl Default for ColonyConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            scenario: ScenarioId::default(),
        }
    }
}

/// Running colony statistics tracked by the engine.
#[derive(Debug, Clone, Default)]
pub struct ColonyStats {
    pub creeps_spawned: u32,
    pub creeps_died: u32,
    pub energy_spent: u32,
    pub energy_recovered: u32,
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct ColonyEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    scenario: ScenarioId,
    time_scale: f64,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<ColonyEvent>,
    memory: ColonyMemory,
    stats: ColonyStats,
}

impl ColonyEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: ColonyConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            scenario: config.scenario,
            time_scale: config.time_scale,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            memory: ColonyMemory::default(),
            stats: ColonyStats::default(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> ColonyStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        let scenario = (self.phase != GamePhase::MainMenu).then_some(self.scenario);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            scenario,
            &self.memory,
            &self.stats,
            events,
        )
    }

    // --- Spawn operations (direct API) ---

    /// Check if a creep could be produced at the named spawn.
    pub fn can_spawn_creep(
        &self,
        spawn: &str,
        body: &[BodyPart],
        name: Option<&str>,
    ) -> ReturnCode {
        spawn_control::can_spawn_creep(&self.world, spawn, body, name)
    }

    /// Start producing a creep. Returns the (possibly generated) creep name.
    pub fn spawn_creep(
        &mut self,
        spawn: &str,
        body: &[BodyPart],
        name: Option<String>,
        memory: Option<Value>,
    ) -> Result<String, ReturnCode> {
        spawn_control::spawn_creep(
            &mut self.world,
            &mut self.rng,
            &mut self.memory,
            &mut self.stats,
            &mut self.events,
            spawn,
            body,
            name,
            memory,
        )
    }

    /// Kill an adjacent creep, reclaiming part of its spawn cost.
    /// Returns the refunded energy.
    pub fn recycle_creep(&mut self, spawn: &str, target: &str) -> Result<u32, ReturnCode> {
        spawn_control::recycle_creep(
            &mut self.world,
            &mut self.stats,
            &mut self.events,
            spawn,
            target,
        )
    }

    /// Extend the lifetime of an adjacent creep. Returns the added ticks.
    pub fn renew_creep(&mut self, spawn: &str, target: &str) -> Result<u32, ReturnCode> {
        spawn_control::renew_creep(
            &mut self.world,
            &mut self.stats,
            &mut self.events,
            spawn,
            target,
        )
    }

    /// Transfer energy from a spawn to an adjacent creep.
    /// Returns the transferred amount.
    #[deprecated(note = "legacy spawn API; creeps withdraw for themselves now")]
    pub fn transfer_energy(
        &mut self,
        spawn: &str,
        target: &str,
        amount: Option<u32>,
    ) -> Result<u32, ReturnCode> {
        spawn_control::transfer_energy(&mut self.world, &mut self.events, spawn, target, amount)
    }

    // --- Accessors ---

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a read-only reference to the colony memory.
    pub fn memory(&self) -> &ColonyMemory {
        &self.memory
    }

    /// Get a mutable reference to the colony memory (externally managed).
    pub fn memory_mut(&mut self) -> &mut ColonyMemory {
        &mut self.memory
    }

    /// Get a read-only reference to the running statistics.
    pub fn stats(&self) -> &ColonyStats {
        &self.stats
    }

    /// Spawn an extra creep entity directly (for tests needing placed creeps).
    #[cfg(test)]
    pub fn place_test_creep(
        &mut self,
        name: &str,
        body: &[BodyPart],
        position: hatchery_core::types::RoomPosition,
        owner: hatchery_core::types::PlayerId,
    ) -> hecs::Entity {
        world_setup::spawn_creep_entity(&mut self.world, name, body, position, owner)
    }

    /// Overwrite a spawn's stored energy (for tests exercising energy paths).
    #[cfg(test)]
    pub fn set_spawn_energy(&mut self, spawn: &str, energy: u32) {
        for (_entity, s) in self
            .world
            .query_mut::<&mut hatchery_core::components::Spawn>()
        {
            if s.name == spawn {
                s.energy = energy.min(s.energy_capacity);
            }
        }
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::SelectScenario { scenario } => {
                if self.phase == GamePhase::MainMenu {
                    self.scenario = scenario;
                }
            }
            PlayerCommand::StartColony => {
                if self.phase == GamePhase::MainMenu {
                    self.world = World::new();
                    self.memory = ColonyMemory::default();
                    self.stats = ColonyStats::default();
                    self.time = SimTime::default();
                    world_setup::setup_colony(&mut self.world, self.scenario);
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::ReturnToMenu => {
                if matches!(self.phase, GamePhase::Active | GamePhase::Paused) {
                    self.phase = GamePhase::MainMenu;
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::SetTimeScale { scale } => {
                self.time_scale = scale.clamp(0.0, 4.0);
            }
            PlayerCommand::SpawnCreep {
                spawn,
                body,
                name,
                memory,
            } => {
                if let Err(code) = self.spawn_creep(&spawn, &body, name, memory) {
                    self.events
                        .push(ColonyEvent::SpawnRejected { spawn, code });
                }
            }
            PlayerCommand::RecycleCreep { spawn, target } => {
                if let Err(code) = self.recycle_creep(&spawn, &target) {
                    self.events
                        .push(ColonyEvent::RecycleRejected { spawn, code });
                }
            }
            PlayerCommand::RenewCreep { spawn, target } => {
                if let Err(code) = self.renew_creep(&spawn, &target) {
                    self.events
                        .push(ColonyEvent::RenewRejected { spawn, code });
                }
            }
            PlayerCommand::TransferEnergy {
                spawn,
                target,
                amount,
            } => {
                #[allow(deprecated)]
                if let Err(code) = self.transfer_energy(&spawn, &target, amount) {
                    self.events
                        .push(ColonyEvent::TransferRejected { spawn, code });
                }
            }
            PlayerCommand::MoveCreep { creep, direction } => {
                systems::movement::step_creep(&mut self.world, &creep, direction);
            }
            PlayerCommand::SetSpawnMemory { spawn, value } => {
                self.memory.set_spawn_memory(&spawn, value);
            }
            PlayerCommand::SetCreepMemory { creep, value } => {
                self.memory.set_creep_memory(&creep, value);
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Spawn energy regeneration
        systems::energy::run(&mut self.world);
        // 2. Spawning progress (jobs advance, finished creeps materialize)
        systems::spawning::run(&mut self.world, &mut self.events, &mut self.stats);
        // 3. Creep aging
        systems::aging::run(&mut self.world);
        // 4. Cleanup (expired creeps despawn)
        systems::cleanup::run(
            &mut self.world,
            &mut self.despawn_buffer,
            &mut self.events,
            &mut self.stats,
        );
    }
}
