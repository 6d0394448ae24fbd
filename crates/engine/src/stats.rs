//! Keyed stat tables with key-union arithmetic.
//!
//! An entity's numbers live in two maps: integer stats (hit points, range,
//! damage) and float modifiers (move speed, rate multipliers). Arithmetic is
//! key-wise over the union of keys, with missing keys reading as zero, so a
//! sparse delta can be added to and later subtracted from a full block and
//! leave it unchanged.

use std::collections::BTreeMap;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Integer-valued stat keys.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Stat {
    MaxHp,
    Hp,
    MaxStam,
    Stam,
    /// Vision radius in world units.
    Sight,
    /// Minimum ticks between attacks; enforced by the input layer.
    AtkDelay,
    /// Attack reach in world units.
    Range,
    Damage,
}

/// Float-valued modifier keys.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StatMod {
    MaxHp,
    MaxStam,
    Sight,
    AtkDelay,
    /// Scales steered movement vectors. Displacements ignore it.
    Move,
    Damage,
}

/// Keyed stat block: integer stats plus float modifiers.
///
/// `BTreeMap` keeps iteration deterministic. [`EntityStats::default`] is the
/// baseline combat-ready block; [`EntityStats::delta`] is empty and meant for
/// buff payloads and overrides.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityStats {
    pub stats: BTreeMap<Stat, i32>,
    pub modifiers: BTreeMap<StatMod, f32>,
}

impl EntityStats {
    /// Empty block: every key reads as zero.
    pub fn delta() -> Self {
        Self {
            stats: BTreeMap::new(),
            modifiers: BTreeMap::new(),
        }
    }

    /// Baseline block for a fresh entity.
    pub fn baseline() -> Self {
        let mut block = Self::delta();
        block.set_stat(Stat::MaxHp, 50);
        block.set_stat(Stat::Hp, 50);
        block.set_stat(Stat::MaxStam, 50);
        block.set_stat(Stat::Stam, 50);
        block.set_stat(Stat::Sight, 500);
        block.set_stat(Stat::AtkDelay, 15);
        block.set_stat(Stat::Range, 150);
        block.set_stat(Stat::Damage, 10);
        block.set_modifier(StatMod::MaxHp, 1.0);
        block.set_modifier(StatMod::MaxStam, 1.0);
        block.set_modifier(StatMod::Sight, 1.0);
        block.set_modifier(StatMod::AtkDelay, 1.0);
        block.set_modifier(StatMod::Move, 10.0);
        block.set_modifier(StatMod::Damage, 1.0);
        block
    }

    /// Value for `key`, zero when absent.
    pub fn stat(&self, key: Stat) -> i32 {
        self.stats.get(&key).copied().unwrap_or(0)
    }

    /// Value for `key`, zero when absent.
    pub fn modifier(&self, key: StatMod) -> f32 {
        self.modifiers.get(&key).copied().unwrap_or(0.0)
    }

    pub fn set_stat(&mut self, key: Stat, value: i32) {
        self.stats.insert(key, value);
    }

    pub fn set_modifier(&mut self, key: StatMod, value: f32) {
        self.modifiers.insert(key, value);
    }

    /// Builder-style [`set_stat`](Self::set_stat).
    pub fn with_stat(mut self, key: Stat, value: i32) -> Self {
        self.set_stat(key, value);
        self
    }

    /// Builder-style [`set_modifier`](Self::set_modifier).
    pub fn with_modifier(mut self, key: StatMod, value: f32) -> Self {
        self.set_modifier(key, value);
        self
    }
}

impl Default for EntityStats {
    fn default() -> Self {
        Self::baseline()
    }
}

impl AddAssign<&EntityStats> for EntityStats {
    fn add_assign(&mut self, rhs: &EntityStats) {
        for (&key, &value) in &rhs.stats {
            *self.stats.entry(key).or_insert(0) += value;
        }
        for (&key, &value) in &rhs.modifiers {
            *self.modifiers.entry(key).or_insert(0.0) += value;
        }
    }
}

impl AddAssign for EntityStats {
    fn add_assign(&mut self, rhs: EntityStats) {
        *self += &rhs;
    }
}

impl Add for EntityStats {
    type Output = EntityStats;

    fn add(mut self, rhs: EntityStats) -> EntityStats {
        self += &rhs;
        self
    }
}

impl SubAssign<&EntityStats> for EntityStats {
    fn sub_assign(&mut self, rhs: &EntityStats) {
        for (&key, &value) in &rhs.stats {
            *self.stats.entry(key).or_insert(0) -= value;
        }
        for (&key, &value) in &rhs.modifiers {
            *self.modifiers.entry(key).or_insert(0.0) -= value;
        }
    }
}

impl SubAssign for EntityStats {
    fn sub_assign(&mut self, rhs: EntityStats) {
        *self -= &rhs;
    }
}

impl Sub for EntityStats {
    type Output = EntityStats;

    fn sub(mut self, rhs: EntityStats) -> EntityStats {
        self -= &rhs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_read_as_zero() {
        let block = EntityStats::delta();
        assert_eq!(block.stat(Stat::Hp), 0);
        assert_eq!(block.modifier(StatMod::Move), 0.0);
    }

    #[test]
    fn baseline_values() {
        let block = EntityStats::default();
        assert_eq!(block.stat(Stat::Hp), 50);
        assert_eq!(block.stat(Stat::MaxHp), 50);
        assert_eq!(block.stat(Stat::Range), 150);
        assert_eq!(block.stat(Stat::AtkDelay), 15);
        assert_eq!(block.modifier(StatMod::Move), 10.0);
    }

    #[test]
    fn addition_covers_the_key_union() {
        let a = EntityStats::delta().with_stat(Stat::Hp, 10);
        let b = EntityStats::delta()
            .with_stat(Stat::Hp, 5)
            .with_stat(Stat::Damage, 3)
            .with_modifier(StatMod::Move, 2.5);

        let sum = a + b;
        assert_eq!(sum.stat(Stat::Hp), 15);
        assert_eq!(sum.stat(Stat::Damage), 3);
        assert_eq!(sum.modifier(StatMod::Move), 2.5);
    }

    #[test]
    fn addition_commutes() {
        let a = EntityStats::default().with_stat(Stat::Hp, 20);
        let b = EntityStats::delta()
            .with_stat(Stat::Stam, -7)
            .with_modifier(StatMod::Damage, 0.5);

        assert_eq!(a.clone() + b.clone(), b + a);
    }

    #[test]
    fn subtraction_reverses_addition() {
        let base = EntityStats::default();
        let delta = EntityStats::delta()
            .with_stat(Stat::Hp, -30)
            .with_stat(Stat::Sight, 100)
            .with_modifier(StatMod::Move, 1.5);

        let round_trip = (base.clone() + delta.clone()) - delta;
        assert_eq!(round_trip.stat(Stat::Hp), base.stat(Stat::Hp));
        assert_eq!(round_trip.stat(Stat::Sight), base.stat(Stat::Sight));
        assert_eq!(round_trip.modifier(StatMod::Move), base.modifier(StatMod::Move));
    }

    #[test]
    fn compound_assignment_matches_operators() {
        let mut block = EntityStats::delta().with_stat(Stat::Hp, 40);
        let delta = EntityStats::delta().with_stat(Stat::Hp, -15);

        block += &delta;
        assert_eq!(block.stat(Stat::Hp), 25);
        block -= &delta;
        assert_eq!(block.stat(Stat::Hp), 40);
    }
}
