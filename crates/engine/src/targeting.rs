//! Target selection for queued actions.

use crate::entity::EntityId;
use crate::geometry::{Circle, Rect};
use crate::map::Map;

/// Selects which candidates an action can reach.
///
/// A closed set of shapes. `All` passes its input through untouched; the
/// shaped variants keep candidates whose live hitbox intersects the shape
/// and silently drop ids that no longer resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Targeting {
    /// Matches nothing.
    None,
    /// Returns the candidate list unchanged.
    All,
    /// Matches entities whose hitbox intersects the rect.
    Rect(Rect),
    /// Matches entities whose hitbox intersects the circle.
    Circle(Circle),
}

impl Targeting {
    pub fn rect(area: Rect) -> Self {
        Self::Rect(area)
    }

    pub fn circle(area: Circle) -> Self {
        Self::Circle(area)
    }

    /// Filters `candidates` down to the ids in range.
    pub fn resolve(&self, candidates: &[EntityId], map: &Map) -> Vec<EntityId> {
        match self {
            Targeting::None => Vec::new(),
            Targeting::All => candidates.to_vec(),
            Targeting::Rect(area) => candidates
                .iter()
                .copied()
                .filter(|&id| {
                    map.entity(id)
                        .is_some_and(|entity| area.intersects(&entity.hitbox()))
                })
                .collect(),
            Targeting::Circle(area) => candidates
                .iter()
                .copied()
                .filter(|&id| {
                    map.entity(id)
                        .is_some_and(|entity| area.intersects(&entity.hitbox()))
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityTemplate;
    use crate::geometry::Vec2;
    use crate::team::Team;

    fn arena() -> (Map, EntityId, EntityId) {
        let mut map = Map::new();
        let near = map.create_entity(&EntityTemplate::new(
            Team::Player,
            Rect::new(0, 0, 100, 100),
        ));
        let far = map.create_entity(&EntityTemplate::new(
            Team::Enemy,
            Rect::new(1000, 1000, 100, 100),
        ));
        (map, near, far)
    }

    #[test]
    fn none_matches_nothing() {
        let (map, near, far) = arena();
        assert!(Targeting::None.resolve(&[near, far], &map).is_empty());
    }

    #[test]
    fn all_passes_input_through() {
        let (map, near, far) = arena();
        let stale = EntityId(42);
        assert_eq!(
            Targeting::All.resolve(&[near, far, stale], &map),
            vec![near, far, stale],
        );
    }

    #[test]
    fn rect_keeps_intersecting_hitboxes() {
        let (map, near, far) = arena();
        let targeting = Targeting::rect(Rect::new(50, 50, 100, 100));
        assert_eq!(targeting.resolve(&[near, far], &map), vec![near]);
    }

    #[test]
    fn circle_keeps_intersecting_hitboxes() {
        let (map, near, far) = arena();
        // Reaches the near entity's (100, 100) corner only.
        let targeting = Targeting::circle(Circle::new(Vec2::new(110, 110), 20));
        assert_eq!(targeting.resolve(&[near, far], &map), vec![near]);
    }

    #[test]
    fn shaped_variants_drop_stale_ids() {
        let (map, near, _) = arena();
        let targeting = Targeting::rect(Rect::new(-10, -10, 3000, 3000));
        assert_eq!(targeting.resolve(&[near, EntityId(42)], &map), vec![near]);
    }
}
