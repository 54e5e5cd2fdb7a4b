//! Headless colony runner.
//!
//! Drives the simulation engine for a fixed number of ticks, optionally
//! replaying a JSON command script and dumping per-tick snapshots as
//! JSON lines. Useful for scripted scenarios and regression runs.

#![forbid(unsafe_code)]

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Deserialize;

use hatchery_core::commands::PlayerCommand;
use hatchery_core::enums::ScenarioId;
use hatchery_sim::engine::{ColonyConfig, ColonyEngine};

/// Headless colony simulation runner
#[derive(Parser, Debug)]
#[command(name = "hatchery")]
#[command(about = "Run a colony simulation headlessly", long_about = None)]
struct Args {
    /// RNG seed; the same seed always produces the same run
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Starting colony preset
    #[arg(long, value_enum, default_value = "outpost")]
    scenario: Scenario,

    /// Number of ticks to simulate
    #[arg(long, default_value_t = 200)]
    ticks: u64,

    /// JSON command script: an array of { "tick": N, "command": { ... } }
    #[arg(long)]
    script: Option<PathBuf>,

    /// Write one snapshot per tick as JSON lines to this file
    #[arg(long)]
    snapshots: Option<PathBuf>,

    /// Print colony events as they happen
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Scenario {
    Outpost,
    Foothold,
    Stronghold,
}

impl From<Scenario> for ScenarioId {
    fn from(scenario: Scenario) -> Self {
        match scenario {
            Scenario::Outpost => ScenarioId::Outpost,
            Scenario::Foothold => ScenarioId::Foothold,
            Scenario::Stronghold => ScenarioId::Stronghold,
        }
    }
}

/// One scripted command, queued when the run reaches its tick.
#[derive(Debug, Deserialize)]
struct ScriptEntry {
    tick: u64,
    command: PlayerCommand,
}

fn load_script(path: &Path) -> Result<Vec<ScriptEntry>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading script {}", path.display()))?;
    parse_script(&text).with_context(|| format!("parsing script {}", path.display()))
}

fn parse_script(text: &str) -> Result<Vec<ScriptEntry>> {
    let mut entries: Vec<ScriptEntry> = serde_json::from_str(text)?;
    entries.sort_by_key(|entry| entry.tick);
    Ok(entries)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let script = match &args.script {
        Some(path) => load_script(path)?,
        None => Vec::new(),
    };
    let mut sink = match &args.snapshots {
        Some(path) => {
            let file = fs::File::create(path)
                .with_context(|| format!("creating snapshot file {}", path.display()))?;
            Some(BufWriter::new(file))
        }
        None => None,
    };

    let mut engine = ColonyEngine::new(ColonyConfig {
        seed: args.seed,
        scenario: args.scenario.into(),
        ..Default::default()
    });
    engine.queue_command(PlayerCommand::StartColony);

    let mut last = None;
    for tick in 0..args.ticks {
        engine.queue_commands(
            script
                .iter()
                .filter(|entry| entry.tick == tick)
                .map(|entry| entry.command.clone()),
        );
        let snapshot = engine.tick();

        if args.verbose {
            for event in &snapshot.events {
                println!("[{tick:>6}] {event:?}");
            }
        }
        if let Some(out) = sink.as_mut() {
            serde_json::to_writer(&mut *out, &snapshot).context("writing snapshot")?;
            out.write_all(b"\n").context("writing snapshot")?;
        }
        last = Some(snapshot);
    }
    if let Some(out) = sink.as_mut() {
        out.flush().context("flushing snapshots")?;
    }

    if let Some(snapshot) = last {
        println!(
            "simulated {} ticks ({:?}, seed {})",
            snapshot.time.tick, args.scenario, args.seed
        );
        println!("creeps alive: {}", snapshot.creeps.len());
        println!(
            "creeps spawned: {}, died: {}",
            snapshot.stats.creeps_spawned, snapshot.stats.creeps_died
        );
        println!(
            "energy spent: {}, recovered: {}",
            snapshot.stats.energy_spent, snapshot.stats.energy_recovered
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script() {
        let text = r#"[
            { "tick": 5, "command": { "type": "RecycleCreep", "spawn": "Spawn1", "target": "worker_1" } },
            { "tick": 0, "command": { "type": "SpawnCreep", "spawn": "Spawn1", "body": ["Work", "Carry", "Move"], "name": "worker_1", "memory": null } }
        ]"#;
        let entries = parse_script(text).unwrap();
        assert_eq!(entries.len(), 2);
        // Entries come back sorted by tick.
        assert_eq!(entries[0].tick, 0);
        assert!(matches!(entries[0].command, PlayerCommand::SpawnCreep { .. }));
        assert_eq!(entries[1].tick, 5);
    }

    #[test]
    fn test_parse_script_rejects_garbage() {
        assert!(parse_script("{}").is_err());
        assert!(parse_script("[{ \"tick\": 1 }]").is_err());
    }

    #[test]
    fn test_scenario_mapping() {
        assert_eq!(ScenarioId::from(Scenario::Foothold), ScenarioId::Foothold);
    }
}
