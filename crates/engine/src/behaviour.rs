//! AI profiles that steer entities through the map's public API.
//!
//! Profiles hold no entity data beyond an id. Every move and every attack
//! goes through [`Map`], so AI obeys the same collision and team rules as
//! player commands, and a profile whose entity has been culled degrades to
//! a no-op.

use std::collections::VecDeque;

use crate::action::Action;
use crate::config::SimConfig;
use crate::entity::EntityId;
use crate::geometry::{Rect, Vec2};
use crate::map::Map;
use crate::stats::Stat;
use crate::targeting::Targeting;

/// A per-entity controller ticked once per simulation step.
pub trait BehaviourProfile {
    /// Id of the entity this profile steers.
    fn entity_id(&self) -> EntityId;

    /// Runs one tick of decision-making against the map.
    fn tick(&mut self, map: &mut Map);
}

impl<P: BehaviourProfile + ?Sized> BehaviourProfile for Box<P> {
    fn entity_id(&self) -> EntityId {
        (**self).entity_id()
    }

    fn tick(&mut self, map: &mut Map) {
        (**self).tick(map)
    }
}

/// The eight one-unit steps, axis directions before diagonals. Greedy ties
/// resolve to the earliest entry.
const STEPS: [Vec2; 8] = [
    Vec2::new(1, 0),
    Vec2::new(-1, 0),
    Vec2::new(0, 1),
    Vec2::new(0, -1),
    Vec2::new(1, 1),
    Vec2::new(1, -1),
    Vec2::new(-1, 1),
    Vec2::new(-1, -1),
];

/// One-unit translations of `hitbox` that pass movement validation for the
/// entity that owns it.
fn adjacent_steps(map: &Map, id: EntityId, hitbox: Rect) -> impl Iterator<Item = Rect> + '_ {
    STEPS
        .iter()
        .map(move |&step| hitbox.translated(step))
        .filter(move |candidate| map.entity_can_move_to_space(id, *candidate))
}

/// Chases the player along a greedy path and radiates contact damage.
///
/// The planner is greedy best-first with no backtracking: each expansion
/// takes the valid neighbor closest to the target by straight-line center
/// distance. It can stall against concave obstacles, and a target point
/// inside another entity's hitbox is unreachable outright (any rect
/// containing it would overlap that entity), so the plan aborts to an empty
/// path and the grunt stands still until the next replan.
#[derive(Debug)]
pub struct GruntProfile {
    entity_id: EntityId,
    path: VecDeque<Rect>,
    ticks_since_repath: u32,
    config: SimConfig,
}

impl GruntProfile {
    pub fn new(entity_id: EntityId, config: SimConfig) -> Self {
        Self {
            entity_id,
            path: VecDeque::new(),
            // At or past the threshold, so the first tick plans immediately.
            ticks_since_repath: config.repath_delay,
            config,
        }
    }

    /// Nodes left on the current path.
    pub fn path_len(&self) -> usize {
        self.path.len()
    }

    /// Replans every `repath_delay` ticks toward the player's current
    /// center. Skips silently when the player is gone.
    fn check_repath(&mut self, map: &Map) {
        self.ticks_since_repath += 1;
        if self.ticks_since_repath < self.config.repath_delay {
            return;
        }
        self.ticks_since_repath = 0;
        let Some(player) = map.entity(map.player_id()) else {
            return;
        };
        self.plan_path(map, player.hitbox().center());
    }

    /// Greedy best-first walk toward `target`. Succeeds when the current
    /// rect contains the target; aborts to an empty path once the expansion
    /// budget is spent or no neighbor is valid.
    fn plan_path(&mut self, map: &Map, target: Vec2) {
        self.path.clear();
        let Some(entity) = map.entity(self.entity_id) else {
            return;
        };
        let mut current = entity.hitbox();
        for _ in 0..self.config.max_path_steps {
            if current.contains_point(target) {
                return;
            }
            let next = adjacent_steps(map, self.entity_id, current).min_by(|a, b| {
                a.center()
                    .distance_to(target)
                    .total_cmp(&b.center().distance_to(target))
            });
            let Some(next) = next else {
                self.path.clear();
                return;
            };
            self.path.push_back(next);
            current = next;
        }
        self.path.clear();
    }

    /// Steps toward the next node using the unscaled move primitive; the
    /// node is popped only once the hitbox matches it exactly, so a blocked
    /// step leaves the path untouched.
    fn traverse_path(&mut self, map: &mut Map) {
        let Some(next) = self.path.front().copied() else {
            return;
        };
        let Some(entity) = map.entity(self.entity_id) else {
            return;
        };
        let delta = next.top_left - entity.hitbox().top_left;
        map.displace_entity(self.entity_id, delta);
        if map
            .entity(self.entity_id)
            .is_some_and(|entity| entity.hitbox() == next)
        {
            self.path.pop_front();
        }
    }

    /// Enqueues a zero-delay hit over the grunt's own footprint, filtered
    /// by its own team. Works as a contact-damage aura: it only connects
    /// when another hitbox already overlaps the grunt's.
    fn spawn_damage_action(&self, map: &mut Map) {
        let Some(entity) = map.entity(self.entity_id) else {
            return;
        };
        let damage = entity.final_stats().stat(Stat::Damage).max(0) as u32;
        let aura = Action::hit(
            damage,
            Targeting::rect(entity.hitbox()),
            entity.team(),
            0,
        );
        map.add_action(aura);
    }
}

impl BehaviourProfile for GruntProfile {
    fn entity_id(&self) -> EntityId {
        self.entity_id
    }

    fn tick(&mut self, map: &mut Map) {
        if map.entity(self.entity_id).is_none() {
            return;
        }
        self.check_repath(map);
        self.traverse_path(map);
        self.spawn_damage_action(map);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{EntityTemplate, ProfileKind};
    use crate::stats::{EntityStats, Stat};
    use crate::team::Team;

    fn open_map_with_grunt(hitbox: Rect) -> (Map, EntityId) {
        let mut map = Map::new();
        // Player far away so plans in these tests are driven explicitly.
        map.create_entity(&EntityTemplate::new(
            Team::Player,
            Rect::new(10_000, 10_000, 100, 100),
        ));
        let grunt = map.create_entity(
            &EntityTemplate::new(Team::Enemy, hitbox).with_profile(ProfileKind::Grunt),
        );
        (map, grunt)
    }

    #[test]
    fn plan_reaches_an_open_target() {
        let (map, grunt) = open_map_with_grunt(Rect::new(0, 0, 10, 10));
        let mut profile = GruntProfile::new(grunt, SimConfig::default());

        profile.plan_path(&map, Vec2::new(35, 35));
        assert!(!profile.path.is_empty());
        assert!(profile.path.len() <= 50);
        let last = *profile.path.back().unwrap();
        assert!(last.contains_point(Vec2::new(35, 35)));
    }

    #[test]
    fn plan_aborts_to_empty_when_the_budget_runs_out() {
        let (map, grunt) = open_map_with_grunt(Rect::new(0, 0, 10, 10));
        let mut profile = GruntProfile::new(grunt, SimConfig::default());

        // 500 units away, far beyond 50 one-unit expansions.
        profile.plan_path(&map, Vec2::new(500, 0));
        assert_eq!(profile.path_len(), 0);
    }

    #[test]
    fn plan_aborts_when_the_target_sits_inside_another_entity() {
        let (mut map, grunt) = open_map_with_grunt(Rect::new(0, 0, 10, 10));
        let wall = map.create_entity(&EntityTemplate::new(
            Team::Terrain,
            Rect::new(20, 0, 10, 10),
        ));
        let mut profile = GruntProfile::new(grunt, SimConfig::default());

        let inside_wall = map.entity(wall).unwrap().hitbox().center();
        profile.plan_path(&map, inside_wall);
        assert_eq!(profile.path_len(), 0);
    }

    #[test]
    fn traverse_pops_nodes_only_on_exact_match() {
        let (mut map, grunt) = open_map_with_grunt(Rect::new(0, 0, 10, 10));
        let mut profile = GruntProfile::new(grunt, SimConfig::default());
        profile.path.push_back(Rect::new(1, 1, 10, 10));
        profile.path.push_back(Rect::new(2, 2, 10, 10));

        profile.traverse_path(&mut map);
        assert_eq!(map.entity(grunt).unwrap().hitbox(), Rect::new(1, 1, 10, 10));
        assert_eq!(profile.path_len(), 1);

        profile.traverse_path(&mut map);
        assert_eq!(map.entity(grunt).unwrap().hitbox(), Rect::new(2, 2, 10, 10));
        assert_eq!(profile.path_len(), 0);
    }

    #[test]
    fn blocked_traversal_keeps_the_node() {
        let (mut map, grunt) = open_map_with_grunt(Rect::new(0, 0, 10, 10));
        map.create_entity(&EntityTemplate::new(
            Team::Terrain,
            Rect::new(5, 5, 10, 10),
        ));
        let mut profile = GruntProfile::new(grunt, SimConfig::default());
        profile.path.push_back(Rect::new(1, 1, 10, 10));

        profile.traverse_path(&mut map);
        // The step into overlap is rejected and the node stays queued.
        assert_eq!(map.entity(grunt).unwrap().hitbox(), Rect::new(0, 0, 10, 10));
        assert_eq!(profile.path_len(), 1);
    }

    #[test]
    fn tick_enqueues_the_contact_aura_every_tick() {
        let (mut map, grunt) = open_map_with_grunt(Rect::new(0, 0, 10, 10));
        let mut profile = GruntProfile::new(grunt, SimConfig::default());

        profile.tick(&mut map);
        assert_eq!(map.pending_actions(), 1);
        profile.tick(&mut map);
        assert_eq!(map.pending_actions(), 2);
    }

    #[test]
    fn aura_damages_an_overlapping_player() {
        let mut map = Map::new();
        // Spawn validation does not exist, so the player can start on top
        // of the grunt.
        let player = map.create_entity(&EntityTemplate::new(
            Team::Player,
            Rect::new(0, 0, 100, 100),
        ));
        let grunt = map.create_entity(&EntityTemplate::new(
            Team::Enemy,
            Rect::new(50, 50, 100, 100),
        ));
        let mut profile = GruntProfile::new(grunt, SimConfig::default());

        profile.tick(&mut map);
        map.tick_and_apply_actions();

        let hp = map.entity(player).unwrap().base_stats().stat(Stat::Hp);
        assert_eq!(hp, 40);
    }

    #[test]
    fn culled_entity_makes_the_profile_a_no_op() {
        let (mut map, grunt) = open_map_with_grunt(Rect::new(0, 0, 10, 10));
        map.entity_mut(grunt)
            .unwrap()
            .set_base_stats(EntityStats::default().with_stat(Stat::Hp, 0));
        map.tick_and_apply_actions();
        assert!(map.entity(grunt).is_none());

        let mut profile = GruntProfile::new(grunt, SimConfig::default());
        profile.tick(&mut map);
        assert_eq!(map.pending_actions(), 0);
    }

    #[test]
    fn repath_cadence_follows_the_config() {
        let (mut map, grunt) = open_map_with_grunt(Rect::new(0, 0, 10, 10));
        let mut profile = GruntProfile::new(grunt, SimConfig::default());

        // First tick plans immediately, then the counter restarts.
        profile.tick(&mut map);
        assert_eq!(profile.ticks_since_repath, 0);
        for _ in 0..9 {
            profile.tick(&mut map);
        }
        assert_eq!(profile.ticks_since_repath, 9);
        profile.tick(&mut map);
        assert_eq!(profile.ticks_since_repath, 0);
    }
}
