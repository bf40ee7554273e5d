//! Keybinding configuration types and parsing.
//!
//! Every host intent that has a keyboard shortcut is an [`Action`]. Users map
//! actions to one or more key combinations in the `[keybindings]` section.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// All possible actions that can be bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // Selection and history
    ClearSelection,
    Undo,

    // Tools
    ToolFreehand,
    ToolLine,
    ToolRectangle,
    ToolEllipse,
    ToolPolygon,
    ToolSelect,

    // Edit operations
    EditMove,
    EditCut,
    EditCopy,
    EditPaste,

    // Host dialogs
    ChooseColor,
    Export,
}

/// A single keybinding: a key name with optional modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyBinding {
    /// Parse a keybinding string like "Ctrl+Shift+Z" or "Escape".
    ///
    /// Modifiers may appear in any order and spaces around `+` are ignored.
    /// A trailing `+` binds the plus key itself ("Ctrl++").
    pub fn parse(s: &str) -> Result<Self, String> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.is_empty() {
            return Err("Empty keybinding string".to_string());
        }

        let (modifier_part, key) = if let Some(prefix) = compact.strip_suffix("++") {
            (prefix, "+")
        } else if compact == "+" {
            ("", "+")
        } else {
            match compact.rsplit_once('+') {
                Some((mods, key)) => (mods, key),
                None => ("", compact.as_str()),
            }
        };

        if key.is_empty() {
            return Err(format!("No key specified in: {}", s));
        }

        let mut binding = Self {
            key: key.to_string(),
            ctrl: false,
            shift: false,
            alt: false,
        };

        for modifier in modifier_part.split('+').filter(|m| !m.is_empty()) {
            match modifier.to_lowercase().as_str() {
                "ctrl" | "control" => binding.ctrl = true,
                "shift" => binding.shift = true,
                "alt" => binding.alt = true,
                other => return Err(format!("Unknown modifier '{}' in: {}", other, s)),
            }
        }

        Ok(binding)
    }

    /// Normalized form used as a map key: the key name is lowercased.
    pub(crate) fn normalized(mut self) -> Self {
        self.key = self.key.to_lowercase();
        self
    }
}

/// Configuration for all keybindings.
///
/// Each action can have multiple keybindings:
/// ```toml
/// [keybindings]
/// undo = ["Ctrl+Z"]
/// clear_selection = ["Escape"]
/// tool_rectangle = ["R"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct KeybindingsConfig {
    #[serde(default = "default_clear_selection")]
    pub clear_selection: Vec<String>,

    #[serde(default = "default_undo")]
    pub undo: Vec<String>,

    #[serde(default = "default_tool_freehand")]
    pub tool_freehand: Vec<String>,

    #[serde(default = "default_tool_line")]
    pub tool_line: Vec<String>,

    #[serde(default = "default_tool_rectangle")]
    pub tool_rectangle: Vec<String>,

    #[serde(default = "default_tool_ellipse")]
    pub tool_ellipse: Vec<String>,

    #[serde(default = "default_tool_polygon")]
    pub tool_polygon: Vec<String>,

    #[serde(default = "default_tool_select")]
    pub tool_select: Vec<String>,

    #[serde(default = "default_edit_move")]
    pub edit_move: Vec<String>,

    #[serde(default = "default_edit_cut")]
    pub edit_cut: Vec<String>,

    #[serde(default = "default_edit_copy")]
    pub edit_copy: Vec<String>,

    #[serde(default = "default_edit_paste")]
    pub edit_paste: Vec<String>,

    #[serde(default = "default_choose_color")]
    pub choose_color: Vec<String>,

    #[serde(default = "default_export")]
    pub export: Vec<String>,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            clear_selection: default_clear_selection(),
            undo: default_undo(),
            tool_freehand: default_tool_freehand(),
            tool_line: default_tool_line(),
            tool_rectangle: default_tool_rectangle(),
            tool_ellipse: default_tool_ellipse(),
            tool_polygon: default_tool_polygon(),
            tool_select: default_tool_select(),
            edit_move: default_edit_move(),
            edit_cut: default_edit_cut(),
            edit_copy: default_edit_copy(),
            edit_paste: default_edit_paste(),
            choose_color: default_choose_color(),
            export: default_export(),
        }
    }
}

impl KeybindingsConfig {
    fn entries(&self) -> [(&[String], Action); 14] {
        [
            (self.clear_selection.as_slice(), Action::ClearSelection),
            (self.undo.as_slice(), Action::Undo),
            (self.tool_freehand.as_slice(), Action::ToolFreehand),
            (self.tool_line.as_slice(), Action::ToolLine),
            (self.tool_rectangle.as_slice(), Action::ToolRectangle),
            (self.tool_ellipse.as_slice(), Action::ToolEllipse),
            (self.tool_polygon.as_slice(), Action::ToolPolygon),
            (self.tool_select.as_slice(), Action::ToolSelect),
            (self.edit_move.as_slice(), Action::EditMove),
            (self.edit_cut.as_slice(), Action::EditCut),
            (self.edit_copy.as_slice(), Action::EditCopy),
            (self.edit_paste.as_slice(), Action::EditPaste),
            (self.choose_color.as_slice(), Action::ChooseColor),
            (self.export.as_slice(), Action::Export),
        ]
    }

    /// Build a lookup map from keybindings to actions for efficient matching.
    /// Returns an error if any keybinding string is invalid or if duplicates are detected.
    pub fn build_action_map(&self) -> Result<HashMap<KeyBinding, Action>, String> {
        let mut map = HashMap::new();

        for (bindings, action) in self.entries() {
            for binding_str in bindings {
                let binding = KeyBinding::parse(binding_str)?.normalized();
                if let Some(existing_action) = map.insert(binding, action) {
                    return Err(format!(
                        "Duplicate keybinding '{}' assigned to both {:?} and {:?}",
                        binding_str, existing_action, action
                    ));
                }
            }
        }

        Ok(map)
    }
}

// =============================================================================
// Default keybinding functions
// =============================================================================

fn bind(keys: &[&str]) -> Vec<String> {
    keys.iter().map(|k| k.to_string()).collect()
}

fn default_clear_selection() -> Vec<String> {
    bind(&["Escape"])
}

fn default_undo() -> Vec<String> {
    bind(&["Ctrl+Z"])
}

fn default_tool_freehand() -> Vec<String> {
    bind(&["F"])
}

fn default_tool_line() -> Vec<String> {
    bind(&["L"])
}

fn default_tool_rectangle() -> Vec<String> {
    bind(&["R"])
}

fn default_tool_ellipse() -> Vec<String> {
    bind(&["E"])
}

fn default_tool_polygon() -> Vec<String> {
    bind(&["P"])
}

fn default_tool_select() -> Vec<String> {
    bind(&["S"])
}

fn default_edit_move() -> Vec<String> {
    bind(&["M"])
}

fn default_edit_cut() -> Vec<String> {
    bind(&["Ctrl+X"])
}

fn default_edit_copy() -> Vec<String> {
    bind(&["Ctrl+C"])
}

fn default_edit_paste() -> Vec<String> {
    bind(&["Ctrl+V"])
}

fn default_choose_color() -> Vec<String> {
    bind(&["C"])
}

fn default_export() -> Vec<String> {
    bind(&["Ctrl+S"])
}
