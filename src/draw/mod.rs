//! Rendering primitives and shape definitions (Cairo-based).
//!
//! This module defines the core drawing types of the canvas:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Shape`] / [`ColoredShape`]: the drawable primitives and their stroke attributes
//! - [`Canvas`]: the ordered list of committed shapes
//! - [`History`]: snapshot stack backing undo
//! - [`Clipboard`]: copied shapes stored relative to the selection anchor
//! - Rendering functions for Cairo-based output

pub mod canvas;
pub mod clipboard;
pub mod color;
pub mod history;
pub mod render;
pub mod shape;

// Re-export commonly used types at module level
pub use canvas::Canvas;
pub use clipboard::{Clipboard, ClipboardEntry};
pub use color::Color;
pub use history::History;
pub use render::{MarqueeStyle, render_background, render_scene, render_shape, render_shapes};
pub use shape::{ColoredShape, Shape, ShapeKind};
