use std::future::Future;

use tracing::{debug, info};

use super::GridSimulator;
use crate::config::{STATS_LOG_INTERVAL, SimulationConfig};
use crate::domain::{Frame, GridError};

/// Surface that shows one full frame at a time.
pub trait DisplaySink {
    /// Replace the whole surface with `frame`
    fn present(&mut self, frame: &Frame);
}

/// Host facility that resumes the loop on the next display refresh.
pub trait FrameScheduler {
    fn next_frame(&mut self) -> impl Future<Output = ()>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    /// No tick requested yet
    Idle,
    /// Ticks are scheduled back to back
    Running,
    /// Frame limit reached (only with a limit configured)
    Finished,
}

/// RenderLoop drives the simulator and hands each frame to a display.
pub struct RenderLoop {
    simulator: GridSimulator,
    state: LoopState,
    frame_limit: Option<u64>,
}

impl RenderLoop {
    pub fn new(config: &SimulationConfig) -> Result<Self, GridError> {
        let simulator = GridSimulator::new(config)?;
        info!(
            size = config.size,
            seed_value = config.seed_value,
            frame_limit = ?config.frame_limit,
            "simulator initialised"
        );
        Ok(Self::with_simulator(simulator, config.frame_limit))
    }

    pub const fn with_simulator(simulator: GridSimulator, frame_limit: Option<u64>) -> Self {
        Self {
            simulator,
            state: LoopState::Idle,
            frame_limit,
        }
    }

    pub const fn state(&self) -> LoopState {
        self.state
    }

    pub const fn simulator(&self) -> &GridSimulator {
        &self.simulator
    }

    /// Idle -> Running. Has no effect once started.
    pub fn start(&mut self) {
        if self.state == LoopState::Idle {
            self.state = LoopState::Running;
            info!("render loop running");
        }
    }

    /// Step once and present the result.
    /// Returns whether another tick should be scheduled.
    pub fn tick(&mut self, display: &mut impl DisplaySink) -> bool {
        if self.state != LoopState::Running {
            return false;
        }
        if self.limit_reached() {
            self.finish();
            return false;
        }

        let frame = self.simulator.step();
        display.present(frame);

        let generation = self.simulator.generation();
        if generation % STATS_LOG_INTERVAL == 0 {
            debug!(
                generation,
                alive = self.simulator.last_alive(),
                step_ms = self.simulator.last_step_time_ms(),
                center = self.simulator.center_value(),
                "frame stats"
            );
        }

        if self.limit_reached() {
            self.finish();
            return false;
        }
        true
    }

    fn limit_reached(&self) -> bool {
        self.frame_limit
            .is_some_and(|limit| self.simulator.generation() >= limit)
    }

    fn finish(&mut self) {
        self.state = LoopState::Finished;
        info!(generation = self.simulator.generation(), "frame limit reached");
    }

    /// Start and tick once per scheduled refresh until finished.
    /// Without a frame limit this never returns.
    pub async fn run(&mut self, display: &mut impl DisplaySink, scheduler: &mut impl FrameScheduler) {
        self.start();
        while self.tick(display) {
            scheduler.next_frame().await;
        }
    }
}
