//! Scenario file loading against real files on disk.

use skirmish_engine::{ProfileKind, Rect, Stat, StatMod, Team, Vec2};
use skirmish_runtime::{ScenarioError, ScenarioSpec};

const DUEL_SCENARIO: &str = r#"(
    playable_area: (top_left: (x: -2000, y: -2000), width: 4000, height: 4000),
    config: (repath_delay: 6, max_path_steps: 50),
    spawns: [
        (
            team: Player,
            hitbox: (top_left: (x: 0, y: 0), width: 100, height: 100),
            stats: { Damage: 20 },
        ),
        (
            team: Enemy,
            hitbox: (top_left: (x: 600, y: 600), width: 100, height: 100),
            profile: Some(Grunt),
            modifiers: { Move: 5.0 },
        ),
    ],
)"#;

#[test]
fn scenario_file_loads_with_overrides_and_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("duel.ron");
    std::fs::write(&path, DUEL_SCENARIO).unwrap();

    let spec = ScenarioSpec::load_from_path(&path).unwrap();

    assert_eq!(spec.playable_area, Rect::new(-2000, -2000, 4000, 4000));
    assert_eq!(spec.config.repath_delay, 6);
    assert_eq!(spec.spawns.len(), 2);

    let player = &spec.spawns[0];
    assert_eq!(player.team, Team::Player);
    assert_eq!(player.profile, None);
    assert_eq!(player.stats.get(&Stat::Damage), Some(&20));

    let grunt = &spec.spawns[1];
    assert_eq!(grunt.profile, Some(ProfileKind::Grunt));
    assert_eq!(grunt.modifiers.get(&StatMod::Move), Some(&5.0));
}

#[test]
fn built_session_applies_the_file_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("duel.ron");
    std::fs::write(&path, DUEL_SCENARIO).unwrap();

    let session = ScenarioSpec::load_from_path(&path).unwrap().build().unwrap();
    let map = session.map();

    let player = map.entity(map.player_id()).unwrap();
    assert_eq!(player.final_stats().stat(Stat::Damage), 20);
    assert_eq!(player.final_stats().stat(Stat::Hp), 50);

    let grunt_id = map.active_entity_ids()[1];
    let grunt = map.entity(grunt_id).unwrap();
    assert_eq!(grunt.hitbox().top_left, Vec2::new(600, 600));
    assert_eq!(grunt.final_stats().modifier(StatMod::Move), 5.0);
    assert_eq!(session.controller_count(), 1);
}

#[test]
fn malformed_ron_reports_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.ron");
    std::fs::write(&path, "this is not a scenario").unwrap();

    let result = ScenarioSpec::load_from_path(&path);
    assert!(matches!(result, Err(ScenarioError::Parse(_))));
}

#[test]
fn missing_file_reports_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.ron");

    let result = ScenarioSpec::load_from_path(&path);
    assert!(matches!(result, Err(ScenarioError::Io(_))));
}

#[test]
fn file_without_a_leading_player_spawn_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("headless.ron");
    std::fs::write(
        &path,
        r#"(
            playable_area: (top_left: (x: 0, y: 0), width: 1000, height: 1000),
            spawns: [
                (team: Enemy, hitbox: (top_left: (x: 0, y: 0), width: 100, height: 100)),
            ],
        )"#,
    )
    .unwrap();

    let result = ScenarioSpec::load_from_path(&path);
    assert!(matches!(result, Err(ScenarioError::Invalid(_))));
}
