//! Faction tags and the team filters carried by actions.

use crate::entity::EntityId;
use crate::map::Map;

/// Faction of an entity, doubling as the team filter an action carries.
///
/// Variants are plain values with fixed filter tables; an action filtered by
/// a team affects targets according to that team's row. All filters drop ids
/// that no longer name a live entity.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Team {
    /// The player's side.
    Player,
    /// Hostile to the player.
    Enemy,
    /// Walls, rocks, destructibles. Hit and displaced by anyone, healed by
    /// no one.
    Terrain,
}

impl Team {
    /// True when an action filtered by `self` may hit `target`.
    pub fn may_hit(self, target: Team) -> bool {
        match self {
            Team::Player => matches!(target, Team::Enemy),
            Team::Enemy => matches!(target, Team::Player),
            Team::Terrain => true,
        }
    }

    /// True when an action filtered by `self` may heal `target`.
    pub fn may_heal(self, target: Team) -> bool {
        match self {
            Team::Player => matches!(target, Team::Player),
            Team::Enemy => matches!(target, Team::Enemy),
            Team::Terrain => false,
        }
    }

    /// Displacement shares the hit table.
    pub fn may_displace(self, target: Team) -> bool {
        self.may_hit(target)
    }

    /// Candidates a hit filtered by `self` may affect.
    pub fn can_be_hit(self, candidates: &[EntityId], map: &Map) -> Vec<EntityId> {
        self.filter(candidates, map, Team::may_hit)
    }

    /// Candidates a heal filtered by `self` may affect.
    pub fn can_be_healed(self, candidates: &[EntityId], map: &Map) -> Vec<EntityId> {
        self.filter(candidates, map, Team::may_heal)
    }

    /// Candidates a displacement filtered by `self` may affect.
    pub fn can_be_displaced(self, candidates: &[EntityId], map: &Map) -> Vec<EntityId> {
        self.filter(candidates, map, Team::may_displace)
    }

    fn filter(
        self,
        candidates: &[EntityId],
        map: &Map,
        allow: fn(Team, Team) -> bool,
    ) -> Vec<EntityId> {
        candidates
            .iter()
            .copied()
            .filter(|&id| map.entity(id).is_some_and(|entity| allow(self, entity.team())))
            .collect()
    }
}
