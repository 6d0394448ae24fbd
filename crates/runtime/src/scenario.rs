//! Scenario files: the initial world layout in RON form.
//!
//! A scenario names the playable area, the simulation tunables, and the
//! spawn list. Entities spawn in listed order, so the first spawn takes
//! id 0 and must be the player-team entity.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use skirmish_engine::{
    EntityStats, EntityTemplate, GruntProfile, Map, ProfileKind, Rect, SimConfig, Stat, StatMod,
    Team,
};
use tracing::info;

use crate::error::{Result, ScenarioError};
use crate::session::Session;

/// One entity to spawn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpawnSpec {
    pub team: Team,
    pub hitbox: Rect,
    /// AI controller to attach, if any.
    #[serde(default)]
    pub profile: Option<ProfileKind>,
    /// Stat keys to override on top of the baseline block.
    #[serde(default)]
    pub stats: BTreeMap<Stat, i32>,
    /// Modifier keys to override on top of the baseline block.
    #[serde(default)]
    pub modifiers: BTreeMap<StatMod, f32>,
}

impl SpawnSpec {
    pub fn new(team: Team, hitbox: Rect) -> Self {
        Self {
            team,
            hitbox,
            profile: None,
            stats: BTreeMap::new(),
            modifiers: BTreeMap::new(),
        }
    }

    pub fn with_profile(mut self, profile: ProfileKind) -> Self {
        self.profile = Some(profile);
        self
    }

    pub fn with_stat(mut self, stat: Stat, value: i32) -> Self {
        self.stats.insert(stat, value);
        self
    }

    pub fn with_modifier(mut self, modifier: StatMod, value: f32) -> Self {
        self.modifiers.insert(modifier, value);
        self
    }

    fn template(&self) -> EntityTemplate {
        let mut stats = EntityStats::default();
        for (&key, &value) in &self.stats {
            stats.set_stat(key, value);
        }
        for (&key, &value) in &self.modifiers {
            stats.set_modifier(key, value);
        }
        let mut template = EntityTemplate::new(self.team, self.hitbox).with_stats(stats);
        template.profile = self.profile;
        template
    }
}

/// A full scenario description with the playable area and spawn list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSpec {
    pub playable_area: Rect,
    #[serde(default)]
    pub config: SimConfig,
    pub spawns: Vec<SpawnSpec>,
}

impl ScenarioSpec {
    /// Loads and validates a scenario from a RON file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let spec: ScenarioSpec =
            ron::from_str(&content).map_err(|e| ScenarioError::Parse(e.to_string()))?;
        spec.validate()?;
        info!(
            "Loaded scenario from {}: {} spawns",
            path.display(),
            spec.spawns.len()
        );
        Ok(spec)
    }

    /// Checks the player-first spawn convention.
    pub fn validate(&self) -> Result<()> {
        let Some(first) = self.spawns.first() else {
            return Err(ScenarioError::Invalid("scenario spawns no entities".into()));
        };
        if first.team != Team::Player {
            return Err(ScenarioError::Invalid(
                "first spawn must be the player-team entity that takes id 0".into(),
            ));
        }
        Ok(())
    }

    /// Builds a ready-to-run session: spawns every entity in listed order
    /// and wires a controller for each tagged spawn.
    pub fn build(&self) -> Result<Session> {
        self.validate()?;

        let mut map = Map::new();
        map.set_playable_area(self.playable_area);

        let mut tagged = Vec::new();
        for spawn in &self.spawns {
            let id = map.create_entity(&spawn.template());
            if let Some(profile) = spawn.profile {
                tagged.push((id, profile));
            }
        }
        info!(
            "Scenario spawned {} entities ({} AI-controlled)",
            self.spawns.len(),
            tagged.len()
        );

        let mut session = Session::new(map, self.config);
        for (id, profile) in tagged {
            match profile {
                ProfileKind::Grunt => {
                    session.add_controller(Box::new(GruntProfile::new(id, self.config)));
                }
            }
        }
        Ok(session)
    }
}

impl Default for ScenarioSpec {
    /// Built-in demo layout: one player and two grunts in a 4000-unit arena.
    fn default() -> Self {
        Self {
            playable_area: Rect::new(-2000, -2000, 4000, 4000),
            config: SimConfig::default(),
            spawns: vec![
                SpawnSpec::new(Team::Player, Rect::new(0, 0, 100, 100)),
                SpawnSpec::new(Team::Enemy, Rect::new(600, 600, 100, 100))
                    .with_profile(ProfileKind::Grunt),
                SpawnSpec::new(Team::Enemy, Rect::new(-800, 300, 100, 100))
                    .with_profile(ProfileKind::Grunt),
            ],
        }
    }
}
