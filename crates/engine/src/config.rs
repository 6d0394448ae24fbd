//! Simulation tuning knobs.

/// Tunables for the AI layer.
///
/// Compile-time defaults live on the type; scenarios may override the
/// runtime values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Ticks between path regenerations.
    pub repath_delay: u32,
    /// Expansion budget for one path search before it aborts empty.
    pub max_path_steps: u32,
}

impl SimConfig {
    pub const DEFAULT_REPATH_DELAY: u32 = 10;
    pub const DEFAULT_MAX_PATH_STEPS: u32 = 50;

    pub const fn new() -> Self {
        Self {
            repath_delay: Self::DEFAULT_REPATH_DELAY,
            max_path_steps: Self::DEFAULT_MAX_PATH_STEPS,
        }
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new()
    }
}
