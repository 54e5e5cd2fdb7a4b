//! Scenario definitions — hardcoded starting colony layouts.
//!
//! Each scenario fixes the controller level, spawn count, and extension
//! field size. Structures start fully charged: the hauling loop that would
//! normally refill extensions is outside this engine's scope.

use hatchery_core::enums::ScenarioId;

/// A starting colony layout.
#[derive(Debug, Clone, Copy)]
pub struct ColonyLayout {
    pub controller_level: u8,
    pub spawn_count: u8,
    pub extension_count: u8,
}

/// Build the layout for a given scenario.
pub fn build_layout(scenario: ScenarioId) -> ColonyLayout {
    match scenario {
        // "First Room": one spawn, nothing else. Big bodies are out of reach.
        ScenarioId::Outpost => ColonyLayout {
            controller_level: 1,
            spawn_count: 1,
            extension_count: 0,
        },
        // "Growing Colony": a small extension field opens up mid-size bodies.
        ScenarioId::Foothold => ColonyLayout {
            controller_level: 3,
            spawn_count: 1,
            extension_count: 5,
        },
        // "Established Base": second spawn online, large extension field.
        ScenarioId::Stronghold => ColonyLayout {
            controller_level: 7,
            spawn_count: 2,
            extension_count: 20,
        },
    }
}
