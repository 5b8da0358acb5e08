mod cell;
mod frame;
mod grid;

pub use cell::{Cell, Transition, collatz};
pub use frame::Frame;
pub use grid::{Grid, GridError};
