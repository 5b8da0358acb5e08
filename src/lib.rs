// Domain layer - Collatz rule, grid and colour buffer
pub mod domain;

// Application layer - simulator and render loop
pub mod application;

// Infrastructure layer - window surface and frame pacing
pub mod rendering;

pub mod config;

// Re-exports for convenience
pub use domain::{Cell, Frame, Grid, GridError, collatz};
pub use application::{DisplaySink, FrameScheduler, GridSimulator, LoopState, RenderLoop};
pub use config::SimulationConfig;
