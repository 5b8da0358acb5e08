mod render_loop;
mod simulator;

pub use render_loop::{DisplaySink, FrameScheduler, LoopState, RenderLoop};
pub use simulator::GridSimulator;
