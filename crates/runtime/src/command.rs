//! Player command layer.
//!
//! Attack pacing lives here rather than in the simulation core: the
//! cooldown counter advances once per session tick and gates attacks by
//! the player's effective attack delay, the way an input frontend would.

use skirmish_engine::{Action, Circle, Map, Stat, Targeting, Vec2};
use tracing::debug;

/// Issues movement and attacks on behalf of the player entity.
///
/// Starts cold: the first attack unlocks only after the player's attack
/// delay has elapsed in [`PlayerCommands::tick`] calls.
#[derive(Clone, Debug, Default)]
pub struct PlayerCommands {
    frames_since_attack: u32,
}

impl PlayerCommands {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the cooldown clock. Call once per session tick.
    pub fn tick(&mut self) {
        self.frames_since_attack += 1;
    }

    /// Ticks elapsed since the last issued attack.
    pub fn frames_since_attack(&self) -> u32 {
        self.frames_since_attack
    }

    /// Moves the player by `direction`, scaled by its movement modifier.
    /// Returns whether the move committed.
    pub fn move_player(&self, map: &mut Map, direction: Vec2) -> bool {
        map.move_entity(map.player_id(), direction)
    }

    /// Attacks toward `at`: the aim point is pulled back along the aim ray
    /// to the player's attack range, then a zero-delay hit circle with that
    /// range as radius is queued. Does nothing while the cooldown is
    /// running or the player is gone. Returns whether an attack was issued.
    pub fn attack(&mut self, map: &mut Map, at: Vec2) -> bool {
        let Some(player) = map.entity(map.player_id()) else {
            return false;
        };
        let stats = player.final_stats();
        let delay = stats.stat(Stat::AtkDelay).max(0) as u32;
        if self.frames_since_attack < delay {
            return false;
        }

        let range = stats.stat(Stat::Range);
        let damage = stats.stat(Stat::Damage).max(0) as u32;
        let team = player.team();
        let aim = clamp_to_range(player.hitbox().center(), at, range);

        self.frames_since_attack = 0;
        debug!("Player attack toward {} lands at {}", at, aim);
        map.add_action(Action::hit(
            damage,
            Targeting::circle(Circle::new(aim, range)),
            team,
            0,
        ));
        true
    }
}

/// Pulls `at` back toward `origin` so it sits at most `range` away.
fn clamp_to_range(origin: Vec2, at: Vec2, range: i32) -> Vec2 {
    let distance = origin.distance_to(at);
    if distance <= f64::from(range) {
        return at;
    }
    let scale = f64::from(range) / distance;
    Vec2::new(
        origin.x + (f64::from(at.x - origin.x) * scale) as i32,
        origin.y + (f64::from(at.y - origin.y) * scale) as i32,
    )
}
