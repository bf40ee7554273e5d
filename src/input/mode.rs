//! Interaction modes: which tool is active and whether an edit operation is armed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Drawing tool selection.
///
/// The active tool determines what a press-drag-release gesture produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    /// Freehand drawing - follows the pointer path
    Freehand,
    /// Straight line between press and current point
    Line,
    /// Rectangle outline from corner to corner
    #[serde(rename = "rectangle", alias = "rect")]
    Rect,
    /// Ellipse inscribed in the dragged box
    Ellipse,
    /// Regular polygon centered at the press point
    Polygon,
    /// Rubber-band marquee selection
    Select,
}

/// Edit operation applied to the current selection (or clipboard) on press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditOp {
    /// Drag the selected shapes
    Move,
    /// Remove the selected shapes
    Cut,
    /// Store the selected shapes in the clipboard
    Copy,
    /// Insert the clipboard contents at the press point
    Paste,
}

/// Current interaction mode.
///
/// Drawing and editing are mutually exclusive: choosing a tool always disarms
/// editing, while arming an edit operation remembers the tool that was active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// Gestures build shapes (or a marquee) with the given tool
    Drawing(Tool),
    /// Gestures apply `op` to the selection; `tool` is kept for display
    Editing { op: EditOp, tool: Tool },
}

impl Default for Interaction {
    fn default() -> Self {
        Interaction::Drawing(Tool::Freehand)
    }
}

impl Interaction {
    /// The tool that is active, or was active before editing was armed.
    pub fn tool(&self) -> Tool {
        match self {
            Interaction::Drawing(tool) | Interaction::Editing { tool, .. } => *tool,
        }
    }

    /// The armed edit operation, if any.
    pub fn edit_op(&self) -> Option<EditOp> {
        match self {
            Interaction::Drawing(_) => None,
            Interaction::Editing { op, .. } => Some(*op),
        }
    }
}

/// Side counts offered by the polygon chooser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PolygonSides {
    #[default]
    Triangle,
    Pentagon,
    Hexagon,
}

impl PolygonSides {
    pub fn count(self) -> u32 {
        match self {
            PolygonSides::Triangle => 3,
            PolygonSides::Pentagon => 5,
            PolygonSides::Hexagon => 6,
        }
    }
}

impl TryFrom<u32> for PolygonSides {
    type Error = String;

    fn try_from(sides: u32) -> Result<Self, Self::Error> {
        match sides {
            3 => Ok(PolygonSides::Triangle),
            5 => Ok(PolygonSides::Pentagon),
            6 => Ok(PolygonSides::Hexagon),
            other => Err(format!(
                "Unsupported polygon side count {other} (expected 3, 5 or 6)"
            )),
        }
    }
}

impl fmt::Display for PolygonSides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PolygonSides::Triangle => "Triangle",
            PolygonSides::Pentagon => "Pentagon",
            PolygonSides::Hexagon => "Hexagon",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing_keeps_tool() {
        let mode = Interaction::Editing {
            op: EditOp::Copy,
            tool: Tool::Select,
        };
        assert_eq!(mode.tool(), Tool::Select);
        assert_eq!(mode.edit_op(), Some(EditOp::Copy));
        assert_eq!(Interaction::Drawing(Tool::Line).edit_op(), None);
    }

    #[test]
    fn polygon_sides_accept_only_offered_counts() {
        for sides in [3, 5, 6] {
            assert_eq!(PolygonSides::try_from(sides).unwrap().count(), sides);
        }
        assert!(PolygonSides::try_from(4).is_err());
        assert!(PolygonSides::try_from(0).is_err());
    }
}
