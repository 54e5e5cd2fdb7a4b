#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::{Alert, ColonyEvent};
    use crate::memory::ColonyMemory;
    use crate::state::ColonyStateSnapshot;
    use crate::types::{Body, BodyPartSlot, PlayerId, RoomPosition, SimTime};

    /// Verify all result codes round-trip through serde_json.
    #[test]
    fn test_return_code_serde() {
        let variants = vec![
            ReturnCode::Ok,
            ReturnCode::NotOwner,
            ReturnCode::NameExists,
            ReturnCode::Busy,
            ReturnCode::NotEnoughEnergy,
            ReturnCode::NotEnoughResources,
            ReturnCode::InvalidTarget,
            ReturnCode::Full,
            ReturnCode::NotInRange,
            ReturnCode::InvalidArgs,
            ReturnCode::RclNotEnough,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: ReturnCode = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_return_code_display() {
        assert_eq!(ReturnCode::NotOwner.to_string(), "not the owner");
        assert_eq!(ReturnCode::RclNotEnough.to_string(), "controller level too low");
    }

    #[test]
    fn test_body_part_serde() {
        let variants = vec![
            BodyPart::Move,
            BodyPart::Work,
            BodyPart::Carry,
            BodyPart::Attack,
            BodyPart::RangedAttack,
            BodyPart::Heal,
            BodyPart::Tough,
            BodyPart::Claim,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: BodyPart = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::SpawnCreep {
                spawn: "Spawn1".into(),
                body: vec![BodyPart::Work, BodyPart::Carry, BodyPart::Move],
                name: Some("worker_1".into()),
                memory: Some(serde_json::json!({ "role": "harvester" })),
            },
            PlayerCommand::RecycleCreep {
                spawn: "Spawn1".into(),
                target: "worker_1".into(),
            },
            PlayerCommand::RenewCreep {
                spawn: "Spawn1".into(),
                target: "worker_1".into(),
            },
            PlayerCommand::TransferEnergy {
                spawn: "Spawn1".into(),
                target: "worker_1".into(),
                amount: Some(50),
            },
            PlayerCommand::MoveCreep {
                creep: "worker_1".into(),
                direction: Direction::TopRight,
            },
            PlayerCommand::StartColony,
            PlayerCommand::Pause,
            PlayerCommand::Resume,
            PlayerCommand::SetTimeScale { scale: 2.0 },
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since PlayerCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify ColonyEvent round-trips through serde.
    #[test]
    fn test_colony_event_serde() {
        let events = vec![
            ColonyEvent::SpawnStarted {
                spawn: "Spawn1".into(),
                creep: "worker_1".into(),
                need_time: 9,
            },
            ColonyEvent::SpawnRejected {
                spawn: "Spawn1".into(),
                code: ReturnCode::NotEnoughEnergy,
            },
            ColonyEvent::CreepRecycled {
                spawn: "Spawn1".into(),
                creep: "worker_1".into(),
                refund: 120,
            },
            ColonyEvent::CreepRenewed {
                spawn: "Spawn1".into(),
                creep: "worker_1".into(),
                added_ticks: 200,
            },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let _back: ColonyEvent = serde_json::from_str(&json).unwrap();
        }
    }

    /// Verify Alert round-trips through serde.
    #[test]
    fn test_alert_serde() {
        let alert = Alert {
            level: AlertLevel::Warning,
            message: "creep worker_1 expires in 42 ticks".to_string(),
            tick: 1000,
        };
        let json = serde_json::to_string(&alert).unwrap();
        let back: Alert = serde_json::from_str(&json).unwrap();
        assert_eq!(alert.message, back.message);
        assert_eq!(alert.tick, back.tick);
    }

    /// Verify ColonyStateSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = ColonyStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: ColonyStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
        // Verify the default snapshot is reasonably small
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    /// Verify grid range and adjacency math.
    #[test]
    fn test_position_range() {
        let a = RoomPosition::new(10, 10);
        assert_eq!(a.range_to(&RoomPosition::new(13, 11)), 3);
        assert_eq!(a.range_to(&RoomPosition::new(11, 11)), 1);
        assert_eq!(a.range_to(&a), 0);

        assert!(a.is_adjacent_to(&RoomPosition::new(9, 11)));
        assert!(!a.is_adjacent_to(&RoomPosition::new(12, 10)));
    }

    #[test]
    fn test_position_step_clamps_to_room() {
        let corner = RoomPosition::new(0, 0);
        assert_eq!(corner.step(Direction::TopLeft), corner);
        assert_eq!(corner.step(Direction::Right), RoomPosition::new(1, 0));

        let far = RoomPosition::new(49, 49);
        assert_eq!(far.step(Direction::BottomRight), far);
        assert_eq!(far.step(Direction::Top), RoomPosition::new(49, 48));
    }

    /// Verify SimTime advancement.
    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        assert_eq!(time.tick, 0);
        assert_eq!(time.elapsed_secs, 0.0);

        for _ in 0..10 {
            time.advance();
        }
        assert_eq!(time.tick, 10);
        // 10 ticks at 10Hz = 1 second
        assert!((time.elapsed_secs - 1.0).abs() < 1e-10);
    }

    /// Verify the body cost table and derived values.
    #[test]
    fn test_body_cost_and_capacity() {
        let body = Body::from_parts(&[BodyPart::Work, BodyPart::Carry, BodyPart::Move]);
        assert_eq!(body.cost(), 200);
        assert_eq!(body.size(), 3);
        assert_eq!(body.carry_capacity(), CARRY_CAPACITY);
        assert_eq!(body.lifetime(), CREEP_LIFE_TIME);
        assert!(!body.is_boosted());

        let claimer = Body::from_parts(&[BodyPart::Claim, BodyPart::Move]);
        assert_eq!(claimer.cost(), 650);
        assert_eq!(claimer.lifetime(), CREEP_CLAIM_LIFE_TIME);
    }

    #[test]
    fn test_body_strip_boosts() {
        let mut body = Body {
            parts: vec![
                BodyPartSlot {
                    part: BodyPart::Work,
                    boost: Some("UO".into()),
                },
                BodyPartSlot::plain(BodyPart::Move),
            ],
        };
        assert!(body.is_boosted());
        body.strip_boosts();
        assert!(!body.is_boosted());
        assert_eq!(body.size(), 2);
    }

    /// Verify level-derived capacity rules.
    #[test]
    fn test_level_tables() {
        assert_eq!(spawns_allowed(0), 0);
        assert_eq!(spawns_allowed(1), 1);
        assert_eq!(spawns_allowed(6), 1);
        assert_eq!(spawns_allowed(7), 2);
        assert_eq!(spawns_allowed(8), 3);

        assert_eq!(extension_capacity(3), 50);
        assert_eq!(extension_capacity(7), 100);
        assert_eq!(extension_capacity(8), 200);
    }

    /// Verify memory slots are independent per name and survive removal round-trips.
    #[test]
    fn test_colony_memory() {
        let mut memory = ColonyMemory::default();
        memory.set_spawn_memory("Spawn1", serde_json::json!({ "initialized": true }));
        memory.set_creep_memory("worker_1", serde_json::json!({ "role": "builder" }));

        assert_eq!(
            memory.spawn_memory("Spawn1").unwrap()["initialized"],
            serde_json::json!(true)
        );
        assert!(memory.creep_memory("worker_2").is_none());

        let taken = memory.remove_creep_memory("worker_1").unwrap();
        assert_eq!(taken["role"], serde_json::json!("builder"));
        assert!(memory.creep_memory("worker_1").is_none());
    }

    #[test]
    fn test_player_id_local() {
        assert_eq!(PlayerId::LOCAL, PlayerId(1));
        assert_ne!(PlayerId::LOCAL, PlayerId(2));
    }
}
