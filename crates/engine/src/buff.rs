//! Timed stat deltas attached to entities.

use crate::stats::EntityStats;

/// A stat delta with a frame countdown.
///
/// `apply` never looks at the countdown: a buff that has run out but is
/// still attached keeps contributing its delta. Whoever owns the buff list
/// decides when, and whether, expired buffs get dropped.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Buff {
    changes: EntityStats,
    frames_left: u32,
    frames_max: u32,
    frame_interval: u32,
}

impl Buff {
    /// Buff worth `changes` for `frames` frames. `frame_interval` is carried
    /// for periodic effects and read only by consumers.
    pub fn new(changes: EntityStats, frames: u32, frame_interval: u32) -> Self {
        Self {
            changes,
            frames_left: frames,
            frames_max: frames,
            frame_interval,
        }
    }

    /// Adds the full delta to `target`, expired or not.
    pub fn apply(&self, target: &mut EntityStats) {
        *target += &self.changes;
    }

    /// Counts one frame down, stopping at zero.
    pub fn tick(&mut self) {
        self.frames_left = self.frames_left.saturating_sub(1);
    }

    pub fn changes(&self) -> &EntityStats {
        &self.changes
    }

    pub fn frames_left(&self) -> u32 {
        self.frames_left
    }

    pub fn frames_max(&self) -> u32 {
        self.frames_max
    }

    pub fn frame_interval(&self) -> u32 {
        self.frame_interval
    }

    pub fn is_expired(&self) -> bool {
        self.frames_left == 0
    }
}
