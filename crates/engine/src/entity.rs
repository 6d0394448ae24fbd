//! Entities and the templates they are spawned from.

use std::fmt;

use crate::buff::Buff;
use crate::geometry::Rect;
use crate::stats::{EntityStats, Stat};
use crate::team::Team;

/// Unique identifier for an entity registered on a map.
///
/// Ids are handed out monotonically and never reused; an id whose entity has
/// been culled stays invalid forever.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl EntityId {
    /// Reserved identifier for the player: the first entity created on a
    /// fresh map.
    pub const PLAYER: Self = Self(0);

    /// True when this id belongs to the player slot.
    #[inline]
    pub const fn is_player(self) -> bool {
        self.0 == Self::PLAYER.0
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::PLAYER
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Names the AI controller that drives an entity.
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
pub enum ProfileKind {
    /// Paths toward the player and radiates contact damage.
    Grunt,
}

/// Spawn-time description of an entity.
///
/// Also doubles as the read-only snapshot shape returned by
/// [`Entity::state`], so display layers never hold entity references.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityTemplate {
    pub stats: EntityStats,
    pub hitbox: Rect,
    pub profile: Option<ProfileKind>,
    pub team: Team,
}

impl EntityTemplate {
    /// Template with baseline stats and no AI profile.
    pub fn new(team: Team, hitbox: Rect) -> Self {
        Self {
            stats: EntityStats::default(),
            hitbox,
            profile: None,
            team,
        }
    }

    pub fn with_stats(mut self, stats: EntityStats) -> Self {
        self.stats = stats;
        self
    }

    pub fn with_profile(mut self, profile: ProfileKind) -> Self {
        self.profile = Some(profile);
        self
    }
}

/// A live combatant or obstacle registered on a [`Map`](crate::map::Map).
///
/// Entities are owned exclusively by their map and referred to by id
/// everywhere else. Movement goes through the map so the collision rules
/// always apply; the only direct mutations are stats and buffs.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    id: EntityId,
    hitbox: Rect,
    base_stats: EntityStats,
    buffs: Vec<Buff>,
    profile: Option<ProfileKind>,
    team: Team,
}

impl Entity {
    pub(crate) fn from_template(id: EntityId, template: &EntityTemplate) -> Self {
        Self {
            id,
            hitbox: template.hitbox,
            base_stats: template.stats.clone(),
            buffs: Vec::new(),
            profile: template.profile,
            team: template.team,
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn hitbox(&self) -> Rect {
        self.hitbox
    }

    pub(crate) fn set_hitbox(&mut self, hitbox: Rect) {
        self.hitbox = hitbox;
    }

    pub fn team(&self) -> Team {
        self.team
    }

    pub fn profile(&self) -> Option<ProfileKind> {
        self.profile
    }

    pub fn base_stats(&self) -> &EntityStats {
        &self.base_stats
    }

    /// Replaces the whole base stat block.
    pub fn set_base_stats(&mut self, stats: EntityStats) {
        self.base_stats = stats;
    }

    /// Attaches a buff. No dedup, no cap; expired buffs are never removed.
    pub fn add_buff(&mut self, buff: Buff) {
        self.buffs.push(buff);
    }

    pub fn buffs(&self) -> &[Buff] {
        &self.buffs
    }

    /// Base stats plus every attached buff delta, recomputed on each call.
    ///
    /// Expired buffs still count; see [`Buff::apply`].
    pub fn final_stats(&self) -> EntityStats {
        let mut out = self.base_stats.clone();
        for buff in &self.buffs {
            buff.apply(&mut out);
        }
        out
    }

    /// Counts every attached buff down one frame.
    pub fn tick_buffs(&mut self) {
        for buff in &mut self.buffs {
            buff.tick();
        }
    }

    /// True when effective hit points are at least 1.
    pub fn is_alive(&self) -> bool {
        self.final_stats().stat(Stat::Hp) >= 1
    }

    /// Snapshot in template form for read-only consumers like display
    /// layers.
    ///
    /// Carries base stats rather than effective stats: buffs never move a
    /// snapshot, so diffing successive snapshots detects applied actions
    /// only.
    pub fn state(&self) -> EntityTemplate {
        EntityTemplate {
            stats: self.base_stats.clone(),
            hitbox: self.hitbox,
            profile: self.profile,
            team: self.team,
        }
    }
}
