//! Deterministic combat simulation core shared by the runtime and tools.
//!
//! `skirmish-engine` defines the canonical rules (geometry, stats, buffs,
//! actions, maps, AI profiles) and exposes pure APIs with no I/O. All world
//! mutation flows through [`map::Map`], and supporting crates depend on the
//! types re-exported here.
pub mod action;
pub mod behaviour;
pub mod buff;
pub mod config;
pub mod entity;
pub mod geometry;
pub mod map;
pub mod stats;
pub mod targeting;
pub mod team;

pub use action::{Action, ActionKind};
pub use behaviour::{BehaviourProfile, GruntProfile};
pub use buff::Buff;
pub use config::SimConfig;
pub use entity::{Entity, EntityId, EntityTemplate, ProfileKind};
pub use geometry::{Circle, Rect, Vec2};
pub use map::Map;
pub use stats::{EntityStats, Stat, StatMod};
pub use targeting::Targeting;
pub use team::Team;
