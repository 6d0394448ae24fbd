//! Headless demo driver.
//!
//! Loads a scenario (or the built-in demo layout), then runs the session
//! loop with a simple player policy: hold the attack on the nearest enemy
//! until one side is gone or the tick budget runs out.
//!
//! Usage: `skirmish [scenario.ron] [ticks]`

use std::path::PathBuf;

use anyhow::Context;
use skirmish_engine::{Map, Stat, Team, Vec2};
use skirmish_runtime::{PlayerCommands, ScenarioSpec};
use tracing::info;

const DEFAULT_TICK_BUDGET: u64 = 600;
const STATUS_INTERVAL: u64 = 100;

struct Args {
    scenario: Option<PathBuf>,
    ticks: u64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args()?;
    let spec = match &args.scenario {
        Some(path) => ScenarioSpec::load_from_path(path)
            .with_context(|| format!("loading scenario {}", path.display()))?,
        None => {
            info!("No scenario file given, using the built-in demo layout");
            ScenarioSpec::default()
        }
    };

    let mut session = spec.build().context("building session from scenario")?;
    let mut commands = PlayerCommands::new();
    info!(
        "Session ready: {} entities, budget {} ticks",
        session.map().active_entity_ids().len(),
        args.ticks
    );

    while session.tick_count() < args.ticks {
        commands.tick();
        if let Some(target) = nearest_enemy_center(session.map()) {
            commands.attack(session.map_mut(), target);
        }
        session.tick();

        if session.tick_count() % STATUS_INTERVAL == 0 {
            log_status(&session);
        }
        if !session.player_alive() || enemy_count(session.map()) == 0 {
            break;
        }
    }

    let enemies = enemy_count(session.map());
    println!("Simulation finished after {} ticks", session.tick_count());
    if session.player_alive() {
        let player = session.map().player_id();
        let hp = session
            .map()
            .entity(player)
            .map(|entity| entity.final_stats().stat(Stat::Hp))
            .unwrap_or(0);
        println!("  Player alive with {} HP", hp);
    } else {
        println!("  Player was culled");
    }
    println!("  Enemies remaining: {}", enemies);
    Ok(())
}

fn parse_args() -> anyhow::Result<Args> {
    let mut raw = std::env::args().skip(1);
    let mut args = Args {
        scenario: None,
        ticks: DEFAULT_TICK_BUDGET,
    };
    if let Some(first) = raw.next() {
        args.scenario = Some(PathBuf::from(first));
    }
    if let Some(second) = raw.next() {
        args.ticks = second
            .parse()
            .with_context(|| format!("tick budget must be an integer, got {:?}", second))?;
    }
    Ok(args)
}

/// Center of the closest live enemy, if any.
fn nearest_enemy_center(map: &Map) -> Option<Vec2> {
    let origin = map.entity(map.player_id())?.hitbox().center();
    map.entities()
        .filter(|entity| entity.team() == Team::Enemy)
        .map(|entity| entity.hitbox().center())
        .min_by(|a, b| origin.distance_to(*a).total_cmp(&origin.distance_to(*b)))
}

fn enemy_count(map: &Map) -> usize {
    map.entities()
        .filter(|entity| entity.team() == Team::Enemy)
        .count()
}

fn log_status(session: &skirmish_runtime::Session) {
    let map = session.map();
    let hp = map
        .entity(map.player_id())
        .map(|entity| entity.final_stats().stat(Stat::Hp))
        .unwrap_or(0);
    info!(
        "Tick {}: {} live entities, player HP {}, {} pending actions",
        session.tick_count(),
        map.active_entity_ids().len(),
        hp,
        map.pending_actions()
    );
}
