mod actions;
mod core;
mod edit;
mod mouse;
mod render;

pub use core::{DrawingState, InputState};
