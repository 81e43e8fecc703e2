#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::components::{Combatant, DamageOutcome};
    use crate::enums::*;
    use crate::events::CombatEvent;
    use crate::state::EncounterSnapshot;
    use crate::tuning::{ConfigError, Tuning};
    use crate::types::{Facing, SimTime, Vec2};

    // ---- Combatant ----

    #[test]
    fn test_health_is_non_increasing_and_floored() {
        let mut c = Combatant::new(Vec2::ZERO, 50.0);
        let hits = [10.0, -5.0, 0.0, f32::NAN, 15.0, 100.0, 7.0];
        let mut last = c.current_health();
        for amount in hits {
            c.take_damage(amount);
            assert!(c.current_health() <= last, "health rose after {amount}");
            assert!(c.current_health() >= 0.0);
            last = c.current_health();
        }
        assert_eq!(c.current_health(), 0.0);
        assert!(c.is_dead());
    }

    #[test]
    fn test_death_flips_exactly_once() {
        let mut c = Combatant::new(Vec2::ZERO, 20.0);
        assert_eq!(
            c.take_damage(5.0),
            DamageOutcome::Wounded { remaining: 15.0 }
        );
        assert_eq!(c.take_damage(30.0), DamageOutcome::Killed);
        assert_eq!(c.take_damage(30.0), DamageOutcome::Ignored);
        assert!(!c.is_alive());
        assert_eq!(c.current_health(), 0.0);
    }

    #[test]
    fn test_non_positive_damage_is_ignored() {
        let mut c = Combatant::new(Vec2::ZERO, 20.0);
        assert!(!c.take_damage(-10.0).landed());
        assert!(!c.take_damage(0.0).landed());
        assert_eq!(c.current_health(), 20.0);
    }

    #[test]
    fn test_health_fraction() {
        let mut c = Combatant::new(Vec2::ZERO, 300.0);
        c.take_damage(151.0);
        assert!((c.health_fraction() - 149.0 / 300.0).abs() < 1e-6);
    }

    // ---- Facing ----

    #[test]
    fn test_facing_toward_and_behind() {
        assert_eq!(Facing::toward(0.0, 10.0), Facing::Right);
        assert_eq!(Facing::toward(0.0, -10.0), Facing::Left);
        assert!(Facing::Left.is_behind(0.0, 80.0));
        assert!(!Facing::Right.is_behind(0.0, 80.0));
        assert!(Facing::Right.is_behind(0.0, -1.0));
        assert_eq!(Facing::Left.flipped(), Facing::Right);
        assert_eq!(Facing::Left.sign(), -1.0);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut t = SimTime::default();
        for _ in 0..10 {
            t.advance(0.1);
        }
        assert_eq!(t.tick, 10);
        assert!((t.elapsed_secs - 1.0).abs() < 1e-5);
    }

    // ---- Tuning ----

    #[test]
    fn test_partial_tuning_json_keeps_defaults() {
        let tuning = Tuning::from_json_str(r#"{ "boss": { "max_health": 500.0 } }"#).unwrap();
        assert_eq!(tuning.boss.max_health, 500.0);
        assert_eq!(tuning.boss.a1_chance, Tuning::default().boss.a1_chance);
        assert_eq!(tuning.melee, Tuning::default().melee);
    }

    #[test]
    fn test_tuning_rejects_bad_values() {
        let err = Tuning::from_json_str(r#"{ "boss": { "a1_chance": 1.5 } }"#).unwrap_err();
        match err {
            ConfigError::Invalid { field, .. } => assert_eq!(field, "boss.a1_chance"),
            other => panic!("unexpected error: {other}"),
        }

        let err = Tuning::from_json_str(r#"{ "melee": { "detection_range": 10.0 } }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "melee.detection_range",
                ..
            }
        ));
    }

    #[test]
    fn test_tuning_parse_error() {
        let err = Tuning::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("Failed to parse tuning"));
    }

    #[test]
    fn test_zero_retreat_distance_is_accepted() {
        let tuning =
            Tuning::from_json_str(r#"{ "ranged": { "retreat_distance": 0.0 } }"#).unwrap();
        assert_eq!(tuning.ranged.retreat_distance, 0.0);
    }

    // ---- Serde ----

    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::Move { axis: -1.0 },
            PlayerCommand::Jump,
            PlayerCommand::Attack,
            PlayerCommand::Pause,
            PlayerCommand::Resume,
            PlayerCommand::Restart,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(*cmd, back);
        }
        let json = serde_json::to_string(&PlayerCommand::Jump).unwrap();
        assert_eq!(json, r#"{"type":"Jump"}"#);
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut snap = EncounterSnapshot::default();
        snap.events.push(CombatEvent::BossStateChanged {
            from: BossState::Idle,
            to: BossState::Attack2,
        });
        snap.events.push(CombatEvent::ProjectileExpired {
            reason: ExpiryReason::Hit,
        });
        let json = serde_json::to_string(&snap).unwrap();
        let back: EncounterSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.events, snap.events);
        assert_eq!(back.phase, EncounterPhase::Active);
    }

    #[test]
    fn test_boss_state_is_attack() {
        assert!(BossState::Attack4.is_attack());
        assert!(!BossState::Stagger.is_attack());
        assert!(!BossState::Dead.is_attack());
        assert!(BossPhase::Phase2 > BossPhase::Phase1);
    }
}
