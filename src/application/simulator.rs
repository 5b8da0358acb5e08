use std::time::Instant;

use crate::config::SimulationConfig;
use crate::domain::{Frame, Grid, GridError};

/// GridSimulator owns the live grid and produces one frame per step.
///
/// Two grids are kept and swapped after every step, so no allocation
/// happens per frame and the grid being read is never the one written.
pub struct GridSimulator {
    current: Grid,
    back: Grid,
    frame: Frame,
    generation: u64,
    last_alive: usize,
    last_step_time_ms: f32,
}

impl GridSimulator {
    /// Allocate both buffers and seed the centre cell
    pub fn new(config: &SimulationConfig) -> Result<Self, GridError> {
        Ok(Self::from_grid(Grid::seeded(config.size, config.seed_value)?))
    }

    /// Start from an arbitrary grid
    pub fn from_grid(grid: Grid) -> Self {
        let size = grid.size();
        Self {
            back: grid.clone(),
            frame: Frame::new(size),
            current: grid,
            generation: 0,
            last_alive: 0,
            last_step_time_ms: 0.0,
        }
    }

    /// Advance one generation and return the colours of that transition.
    /// The returned frame is only valid until the next call.
    pub fn step(&mut self) -> &Frame {
        let start = Instant::now();

        self.last_alive = self.current.step_into(&mut self.back, &mut self.frame);
        std::mem::swap(&mut self.current, &mut self.back);

        self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.generation += 1;
        &self.frame
    }

    pub const fn grid(&self) -> &Grid {
        &self.current
    }

    /// Frames computed so far
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Alive cells in the most recent frame
    pub const fn last_alive(&self) -> usize {
        self.last_alive
    }

    pub const fn last_step_time_ms(&self) -> f32 {
        self.last_step_time_ms
    }

    /// Value currently held by the centre cell
    pub fn center_value(&self) -> i32 {
        let (cx, cy) = self.current.center();
        self.current.get(cx, cy).unwrap_or_default()
    }
}
