//! Input handling and editing state machine.
//!
//! This module translates host pointer and keyboard events into canvas edits.
//! It owns the shape list, selection, clipboard and undo history, and
//! interprets each gesture according to the current [`Interaction`].

pub mod events;
pub mod mode;
pub mod modifiers;
pub mod state;

// Re-export commonly used types at module level
pub use events::{Key, MouseButton};
pub use mode::{EditOp, Interaction, PolygonSides, Tool};
pub use modifiers::Modifiers;
pub use state::{DrawingState, InputState};
