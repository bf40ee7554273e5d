//! Library exports for the sketchpad canvas core.
//!
//! Exposes the editing state machine, shape model, renderer and export path so
//! that any shell (a GUI toolkit, the bundled script runner, tests) can drive
//! the same canvas logic through the [`host::Host`] trait.

pub mod config;
pub mod draw;
pub mod export;
pub mod host;
pub mod input;
pub mod script;
pub mod util;

pub use config::Config;
