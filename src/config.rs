/// Width and height of the grid, in cells.
pub const GRID_SIZE: usize = 1000;

/// Value placed in the centre cell at startup.
pub const SEED_VALUE: i32 = 1_000_000;

/// Frames between two statistics log lines.
pub const STATS_LOG_INTERVAL: u64 = 120;

pub const WINDOW_TITLE: &str = "Collatz Life";

/// Parameters a simulator is built from.
/// The binary always uses [`SimulationConfig::default`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    pub size: usize,
    pub seed_value: i32,
    /// Stop after this many frames (None = run forever)
    pub frame_limit: Option<u64>,
}

impl SimulationConfig {
    /// Builder-style override of the frame limit
    pub const fn with_frame_limit(mut self, frames: u64) -> Self {
        self.frame_limit = Some(frames);
        self
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            size: GRID_SIZE,
            seed_value: SEED_VALUE,
            frame_limit: None,
        }
    }
}
