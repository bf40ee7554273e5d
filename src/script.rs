//! Scripted input replay.
//!
//! A script is a TOML file listing input events in order, plus optional
//! queued answers for the dialogs the canvas asks its host for:
//!
//! ```toml
//! [[events]]
//! type = "tool"
//! tool = "rectangle"
//!
//! [[events]]
//! type = "press"
//! x = 10
//! y = 10
//!
//! [[events]]
//! type = "drag"
//! x = 60
//! y = 40
//!
//! [[events]]
//! type = "release"
//! x = 60
//! y = 40
//!
//! [answers]
//! polygon_sides = [5]
//! colors = ["red"]
//! save_paths = ["out.png"]
//! ```

use crate::config::{ColorSpec, ExportConfig, KeyBinding};
use crate::draw::Color;
use crate::export::{ExportOutcome, default_export_path};
use crate::host::Host;
use crate::input::{EditOp, InputState, Key, MouseButton, PolygonSides, Tool};
use serde::Deserialize;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading or replaying a script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read script {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid script: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid key '{key}' in event {index}: {reason}")]
    InvalidKey {
        index: usize,
        key: String,
        reason: String,
    },

    #[error("Invalid polygon answer: {0}")]
    InvalidPolygonSides(String),
}

/// One scripted input event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// Select a drawing tool
    Tool { tool: Tool },
    /// Arm an edit operation
    Edit { op: EditOp },
    /// Left button press
    Press { x: i32, y: i32 },
    /// Pointer motion with the button held
    Drag { x: i32, y: i32 },
    /// Left button release
    Release { x: i32, y: i32 },
    /// Key combination such as "Ctrl+Z", pressed and released
    Key { key: String },
    /// Clear the selection
    Escape,
    /// Undo the last change
    Undo,
    /// Set the stroke color directly
    Color { color: ColorSpec },
    /// Run the color chooser
    ChooseColor,
    /// Run the export flow
    Export,
}

/// Queued dialog answers, consumed front to back.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Answers {
    #[serde(default)]
    pub polygon_sides: Vec<u32>,
    #[serde(default)]
    pub colors: Vec<ColorSpec>,
    #[serde(default)]
    pub save_paths: Vec<PathBuf>,
}

/// A parsed script.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub answers: Answers,
}

impl Script {
    /// Reads and parses a script file.
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let source = fs::read_to_string(path).map_err(|source| ScriptError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&source)
    }

    pub fn from_toml(source: &str) -> Result<Self, ScriptError> {
        Ok(toml::from_str(source)?)
    }
}

/// Host that answers dialogs from a script's queues.
///
/// Once the save path queue runs dry, exports fall back to the configured
/// default location.
#[derive(Debug)]
pub struct ScriptedHost {
    polygon_sides: VecDeque<PolygonSides>,
    colors: VecDeque<Color>,
    save_paths: VecDeque<PathBuf>,
    export_config: ExportConfig,
    /// Number of repaint requests received
    pub repaints: usize,
    /// Every export outcome reported, in order
    pub outcomes: Vec<ExportOutcome>,
}

impl ScriptedHost {
    pub fn new(answers: &Answers, export_config: ExportConfig) -> Result<Self, ScriptError> {
        let polygon_sides = answers
            .polygon_sides
            .iter()
            .map(|&sides| PolygonSides::try_from(sides))
            .collect::<Result<VecDeque<_>, _>>()
            .map_err(ScriptError::InvalidPolygonSides)?;

        Ok(Self {
            polygon_sides,
            colors: answers.colors.iter().map(ColorSpec::to_color).collect(),
            save_paths: answers.save_paths.iter().cloned().collect(),
            export_config,
            repaints: 0,
            outcomes: Vec::new(),
        })
    }
}

impl Host for ScriptedHost {
    fn request_repaint(&mut self) {
        self.repaints += 1;
    }

    fn choose_color(&mut self, _current: Color) -> Option<Color> {
        self.colors.pop_front()
    }

    fn choose_polygon_sides(&mut self) -> Option<PolygonSides> {
        self.polygon_sides.pop_front()
    }

    fn choose_save_path(&mut self) -> Option<PathBuf> {
        if let Some(path) = self.save_paths.pop_front() {
            return Some(path);
        }
        match default_export_path(&self.export_config) {
            Ok(path) => Some(path),
            Err(err) => {
                log::warn!("No default export location: {}", err);
                None
            }
        }
    }

    fn notify_export(&mut self, outcome: &ExportOutcome) {
        log::info!("{}", outcome);
        self.outcomes.push(outcome.clone());
    }
}

/// Feeds every event to `state`, servicing host requests and repaints as a
/// live shell would.
pub fn replay(
    state: &mut InputState,
    host: &mut dyn Host,
    events: &[Event],
) -> Result<(), ScriptError> {
    for (index, event) in events.iter().enumerate() {
        log::debug!("Event {}: {:?}", index, event);
        match event {
            Event::Tool { tool } => state.set_tool(*tool),
            Event::Edit { op } => state.set_edit_op(*op),
            Event::Press { x, y } => state.on_mouse_press(host, MouseButton::Left, *x, *y),
            Event::Drag { x, y } => state.on_mouse_motion(*x, *y),
            Event::Release { x, y } => state.on_mouse_release(MouseButton::Left, *x, *y),
            Event::Key { key } => press_combination(state, index, key)?,
            Event::Escape => state.clear_selection(),
            Event::Undo => {
                state.undo();
            }
            Event::Color { color } => state.set_color(color.to_color()),
            Event::ChooseColor => state.choose_color(host),
            Event::Export => {
                state.request_export(host);
            }
        }

        if let Some(request) = state.take_pending_host_action() {
            state.service_host_request(host, request);
        }

        if state.needs_redraw {
            host.request_repaint();
            state.needs_redraw = false;
        }
    }
    Ok(())
}

/// Presses the modifiers, taps the key, then releases the modifiers.
fn press_combination(state: &mut InputState, index: usize, combo: &str) -> Result<(), ScriptError> {
    let invalid = |reason: String| ScriptError::InvalidKey {
        index,
        key: combo.to_string(),
        reason,
    };
    let binding = KeyBinding::parse(combo).map_err(invalid)?;
    let key = Key::from_name(&binding.key);
    if key == Key::Unknown {
        return Err(invalid(format!("unknown key name '{}'", binding.key)));
    }

    let modifiers: Vec<Key> = [
        (binding.ctrl, Key::Ctrl),
        (binding.shift, Key::Shift),
        (binding.alt, Key::Alt),
    ]
    .into_iter()
    .filter_map(|(held, key)| held.then_some(key))
    .collect();

    for &modifier in &modifiers {
        state.on_key_press(modifier);
    }
    state.on_key_press(key);
    state.on_key_release(key);
    for &modifier in modifiers.iter().rev() {
        state.on_key_release(modifier);
    }
    Ok(())
}
