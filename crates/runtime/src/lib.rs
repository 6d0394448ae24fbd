//! Session layer over the combat simulation core.
//!
//! Wraps a [`skirmish_engine::Map`] with the pieces a playable build needs:
//! RON scenario files, AI controller wiring, a fixed tick order, and the
//! player command surface with its attack cooldown.

pub mod command;
pub mod error;
pub mod scenario;
pub mod session;

pub use command::PlayerCommands;
pub use error::{Result, ScenarioError};
pub use scenario::{ScenarioSpec, SpawnSpec};
pub use session::Session;
