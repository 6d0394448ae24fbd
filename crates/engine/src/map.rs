//! The world: entity arena, action queue, and playable area.

use crate::action::Action;
use crate::entity::{Entity, EntityId, EntityTemplate};
use crate::geometry::{Rect, Vec2};
use crate::stats::StatMod;

/// Sole owner of all entities and pending actions.
///
/// Ids are handed out monotonically from zero and never reused, so a culled
/// id stays invalid for the life of the map. Lookup is a linear scan; maps
/// hold tens of entities, not thousands.
///
/// ```
/// use skirmish_engine::{EntityTemplate, Map, Rect, Team};
///
/// let mut map = Map::new();
/// map.set_playable_area(Rect::new(-500, -500, 1000, 1000));
/// let id = map.create_entity(&EntityTemplate::new(Team::Player, Rect::new(0, 0, 100, 100)));
/// assert_eq!(id, map.player_id());
/// assert!(map.entity(id).is_some());
/// ```
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Map {
    next_entity_id: u32,
    entities: Vec<Entity>,
    actions: Vec<Action>,
    playable_area: Rect,
}

impl Map {
    /// Empty map with a degenerate playable area, so no bounds apply until
    /// [`set_playable_area`](Self::set_playable_area) is called.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new entity built from `template` and returns its id.
    ///
    /// No placement or health validation happens here: overlapping or
    /// already-dead spawns are accepted and left to later ticks to resolve.
    pub fn create_entity(&mut self, template: &EntityTemplate) -> EntityId {
        let id = EntityId(self.next_entity_id);
        self.next_entity_id += 1;
        self.entities.push(Entity::from_template(id, template));
        id
    }

    /// Looks up a live entity. `None` for never-issued and culled ids alike.
    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.id() == id)
    }

    /// Mutable lookup of a live entity.
    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|entity| entity.id() == id)
    }

    /// Every live entity in creation order.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Ids of every live entity, in creation order.
    pub fn active_entity_ids(&self) -> Vec<EntityId> {
        self.entities.iter().map(Entity::id).collect()
    }

    /// The player id. The player is the first entity created on a fresh
    /// map, by convention.
    pub fn player_id(&self) -> EntityId {
        EntityId::PLAYER
    }

    /// True when no live entity's hitbox intersects `space`.
    pub fn space_empty(&self, space: &Rect) -> bool {
        self.entities
            .iter()
            .all(|entity| !entity.hitbox().intersects(space))
    }

    /// Movement validation: `candidate` must lie inside the playable area
    /// and must not overlap any other live entity. A degenerate playable
    /// area disables the bounds check only; the overlap check always runs.
    pub fn entity_can_move_to_space(&self, id: EntityId, candidate: Rect) -> bool {
        let in_bounds = self.playable_area.is_degenerate()
            || self.playable_area.contains_rect(&candidate);
        in_bounds
            && self
                .entities
                .iter()
                .filter(|entity| entity.id() != id)
                .all(|entity| !entity.hitbox().intersects(&candidate))
    }

    /// Moves an entity by `v` scaled by its move modifier, truncating each
    /// component toward zero. A rejected move is a silent no-op; the return
    /// value reports whether the move was committed.
    pub fn move_entity(&mut self, id: EntityId, v: Vec2) -> bool {
        let Some(entity) = self.entity(id) else {
            return false;
        };
        let speed = entity.final_stats().modifier(StatMod::Move);
        let scaled = Vec2::new((v.x as f32 * speed) as i32, (v.y as f32 * speed) as i32);
        self.move_entity_raw(id, scaled)
    }

    /// Moves an entity by exactly `v`, bypassing its move modifier. Path
    /// traversal and displacement effects use this; validation is the same
    /// as for [`move_entity`](Self::move_entity).
    pub fn displace_entity(&mut self, id: EntityId, v: Vec2) -> bool {
        self.move_entity_raw(id, v)
    }

    fn move_entity_raw(&mut self, id: EntityId, v: Vec2) -> bool {
        let Some(entity) = self.entity(id) else {
            return false;
        };
        let candidate = entity.hitbox().translated(v);
        if !self.entity_can_move_to_space(id, candidate) {
            return false;
        }
        if let Some(entity) = self.entity_mut(id) {
            entity.set_hitbox(candidate);
        }
        true
    }

    /// Queues an action; the map owns it and drives its countdown.
    pub fn add_action(&mut self, action: Action) {
        self.actions.push(action);
    }

    /// Number of actions still waiting to fire.
    pub fn pending_actions(&self) -> usize {
        self.actions.len()
    }

    /// Bounds for movement validation. A degenerate rect disables the
    /// bounds check entirely.
    pub fn set_playable_area(&mut self, area: Rect) {
        self.playable_area = area;
    }

    pub fn playable_area(&self) -> Rect {
        self.playable_area
    }

    /// Advances the world one tick.
    ///
    /// Order: every queued action counts down, firing and retiring in queue
    /// order as delays reach zero; every entity's buffs count down; entities
    /// whose effective hit points fell below 1 are culled. Death is only
    /// detected here, once per tick.
    pub fn tick_and_apply_actions(&mut self) {
        let mut pending = std::mem::take(&mut self.actions);
        pending.retain_mut(|action| {
            if action.tick_down() {
                action.apply_to(self);
                false
            } else {
                true
            }
        });
        // Anything enqueued while actions were firing waits for next tick.
        pending.append(&mut self.actions);
        self.actions = pending;

        for entity in &mut self.entities {
            entity.tick_buffs();
        }
        self.entities.retain(Entity::is_alive);
    }
}
