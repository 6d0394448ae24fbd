//! Delayed one-shot effects queued on the map.

use crate::entity::EntityId;
use crate::geometry::Vec2;
use crate::map::Map;
use crate::stats::Stat;
use crate::targeting::Targeting;
use crate::team::Team;

/// What an action does to the targets it reaches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    /// Subtracts `damage` hit points from each target.
    Hit { damage: u32 },
    /// Adds `amount` hit points to each target. No maximum clamp.
    Heal { amount: u32 },
    /// Pushes each target by `by`, subject to the usual movement validation
    /// and ignoring the target's move modifier.
    Displace { by: Vec2 },
}

/// A delayed effect owned by the map's queue.
///
/// The delay counts down once per tick; the action fires on the tick its
/// delay reaches zero (the first tick for delay 0, the n-th tick for delay
/// n) and the map retires it in the same tick. Targets are resolved at fire
/// time: targeting first, then the team filter for the effect.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Action {
    delay: u32,
    targeting: Targeting,
    team: Team,
    kind: ActionKind,
}

impl Action {
    pub fn new(kind: ActionKind, targeting: Targeting, team: Team, delay: u32) -> Self {
        Self {
            delay,
            targeting,
            team,
            kind,
        }
    }

    pub fn hit(damage: u32, targeting: Targeting, team: Team, delay: u32) -> Self {
        Self::new(ActionKind::Hit { damage }, targeting, team, delay)
    }

    pub fn heal(amount: u32, targeting: Targeting, team: Team, delay: u32) -> Self {
        Self::new(ActionKind::Heal { amount }, targeting, team, delay)
    }

    pub fn displace(by: Vec2, targeting: Targeting, team: Team, delay: u32) -> Self {
        Self::new(ActionKind::Displace { by }, targeting, team, delay)
    }

    /// Ticks remaining before the action fires.
    pub fn delay(&self) -> u32 {
        self.delay
    }

    pub fn targeting(&self) -> &Targeting {
        &self.targeting
    }

    pub fn team(&self) -> Team {
        self.team
    }

    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    /// Counts the delay down one tick. Returns true when the action fires
    /// this tick.
    pub(crate) fn tick_down(&mut self) -> bool {
        self.delay = self.delay.saturating_sub(1);
        self.delay == 0
    }

    /// Resolves targets and applies the effect once.
    pub(crate) fn apply_to(&self, map: &mut Map) {
        let candidates = map.active_entity_ids();
        let in_range = self.targeting.resolve(&candidates, map);
        let targets = match self.kind {
            ActionKind::Hit { .. } => self.team.can_be_hit(&in_range, map),
            ActionKind::Heal { .. } => self.team.can_be_healed(&in_range, map),
            ActionKind::Displace { .. } => self.team.can_be_displaced(&in_range, map),
        };

        for id in targets {
            match self.kind {
                ActionKind::Hit { damage } => {
                    adjust_hit_points(map, id, |hp| hp.saturating_sub_unsigned(damage));
                }
                ActionKind::Heal { amount } => {
                    adjust_hit_points(map, id, |hp| hp.saturating_add_unsigned(amount));
                }
                ActionKind::Displace { by } => {
                    map.displace_entity(id, by);
                }
            }
        }
    }
}

/// Reads the target's base stats, adjusts hit points, and writes the whole
/// block back. Never a partial field update.
fn adjust_hit_points(map: &mut Map, id: EntityId, adjust: impl Fn(i32) -> i32) {
    if let Some(entity) = map.entity_mut(id) {
        let mut stats = entity.base_stats().clone();
        let hp = stats.stat(Stat::Hp);
        stats.set_stat(Stat::Hp, adjust(hp));
        entity.set_base_stats(stats);
    }
}
