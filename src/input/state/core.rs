//! Editing state machine and input state management.

use crate::config::{Action, Config, KeyBinding};
use crate::draw::{Canvas, Clipboard, Color, ColoredShape, History, MarqueeStyle, Shape, color};
use crate::host::HostRequest;
use crate::input::{
    modifiers::Modifiers,
    mode::{EditOp, Interaction, PolygonSides, Tool},
};
use crate::util::Rect;
use anyhow::{Result, anyhow};
use std::collections::HashMap;

/// Current gesture state machine.
///
/// Tracks whether the user is idle or in the middle of a press-drag-release
/// gesture, and what that gesture is doing.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawingState {
    /// No button held
    Idle,
    /// Building a new shape (mouse button held down)
    Drawing {
        /// Which tool is being used for this shape
        tool: Tool,
        /// Anchor X coordinate (where mouse was pressed)
        start_x: i32,
        /// Anchor Y coordinate (where mouse was pressed)
        start_y: i32,
        /// Shape under construction; polygons have none until the first drag
        shape: Option<Shape>,
    },
    /// Dragging out a selection marquee
    Selecting {
        /// Marquee anchor X coordinate
        start_x: i32,
        /// Marquee anchor Y coordinate
        start_y: i32,
    },
    /// Dragging the selected shapes
    Moving {
        /// Pointer X coordinate at the previous motion event
        last_x: i32,
        /// Pointer Y coordinate at the previous motion event
        last_y: i32,
    },
}

/// Main input state containing the whole editing session.
///
/// This struct owns the canvas, undo history, clipboard, selection and the
/// active interaction mode. It processes keyboard and mouse events, mutates the
/// canvas accordingly, and records whether the host needs to repaint.
pub struct InputState {
    /// Committed shapes in paint order
    pub canvas: Canvas,
    /// Snapshots taken before each mutation
    pub(crate) history: History,
    /// Shapes captured by the last copy
    pub(crate) clipboard: Clipboard,
    /// Indices into `canvas` of the selected shapes
    pub(crate) selection: Vec<usize>,
    /// Selection rectangle, shown as a dashed outline
    pub(crate) marquee: Option<Rect>,
    /// Drawing tool or armed edit operation
    pub(crate) interaction: Interaction,
    /// Current gesture
    pub state: DrawingState,
    /// Stroke color for new shapes
    pub current_color: Color,
    /// Stroke width for new shapes in pixels
    pub current_thickness: f64,
    /// Side count used by the polygon tool
    pub polygon_sides: PolygonSides,
    /// Whether the polygon chooser already ran for the current gesture
    pub(crate) polygon_prompted: bool,
    /// Current modifier key state
    pub modifiers: Modifiers,
    /// Whether the canvas needs to be redrawn
    pub needs_redraw: bool,
    /// Canvas width in pixels
    pub canvas_width: u32,
    /// Canvas height in pixels
    pub canvas_height: u32,
    /// Fill painted under all shapes
    pub background: Color,
    /// Marquee outline appearance
    pub marquee_style: MarqueeStyle,
    /// Keybinding action map for efficient lookup
    action_map: HashMap<KeyBinding, Action>,
    /// Pending host request (dialogs are run by the host, not the state machine)
    pending_host_action: Option<HostRequest>,
}

impl InputState {
    /// Creates a new InputState with specified defaults.
    ///
    /// The canvas starts at 800x600 on a white background; use
    /// [`update_canvas_dimensions`](Self::update_canvas_dimensions) to resize.
    ///
    /// # Arguments
    /// * `color` - Initial stroke color
    /// * `thickness` - Initial stroke width in pixels
    /// * `polygon_sides` - Side count until the user picks one
    /// * `history_limit` - Maximum undo snapshots (0 = unlimited)
    /// * `action_map` - Keybinding action map
    pub fn with_defaults(
        color: Color,
        thickness: f64,
        polygon_sides: PolygonSides,
        history_limit: usize,
        action_map: HashMap<KeyBinding, Action>,
    ) -> Self {
        Self {
            canvas: Canvas::new(),
            history: History::new(history_limit),
            clipboard: Clipboard::new(),
            selection: Vec::new(),
            marquee: None,
            interaction: Interaction::default(),
            state: DrawingState::Idle,
            current_color: color,
            current_thickness: thickness,
            polygon_sides,
            polygon_prompted: false,
            modifiers: Modifiers::new(),
            needs_redraw: true,
            canvas_width: 800,
            canvas_height: 600,
            background: color::WHITE,
            marquee_style: MarqueeStyle::default(),
            action_map,
            pending_host_action: None,
        }
    }

    /// Builds the initial state from a loaded configuration.
    ///
    /// # Errors
    /// Returns an error if the keybindings are invalid or conflict.
    pub fn from_config(config: &Config) -> Result<Self> {
        let action_map = config
            .keybindings
            .build_action_map()
            .map_err(|err| anyhow!("Invalid keybindings: {err}"))?;

        let polygon_sides =
            PolygonSides::try_from(config.drawing.default_polygon_sides).unwrap_or_default();

        let mut state = Self::with_defaults(
            config.drawing.default_color.to_color(),
            config.drawing.default_thickness,
            polygon_sides,
            config.history.limit,
            action_map,
        );
        state.update_canvas_dimensions(config.canvas.width, config.canvas.height);
        state.background = config.canvas.background.to_color_or(color::WHITE);
        state.marquee_style = MarqueeStyle {
            color: config.selection.marquee_color.to_color_or(color::GRAY),
            dash_length: config.selection.dash_length,
        };

        Ok(state)
    }

    /// Updates the canvas size used for rendering and export.
    ///
    /// # Arguments
    /// * `width` - Canvas width in pixels
    /// * `height` - Canvas height in pixels
    pub fn update_canvas_dimensions(&mut self, width: u32, height: u32) {
        self.canvas_width = width;
        self.canvas_height = height;
        self.needs_redraw = true;
    }

    /// Current interaction mode.
    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    /// Indices of the selected shapes, in canvas order.
    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    /// The selection marquee, if one is shown.
    pub fn marquee(&self) -> Option<Rect> {
        self.marquee
    }

    /// Number of undo snapshots available.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Shapes captured by the last copy.
    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    /// Switches to a drawing tool.
    ///
    /// Disarms any edit operation, drops the selection and marquee, and
    /// abandons a gesture in progress.
    pub fn set_tool(&mut self, tool: Tool) {
        self.interaction = Interaction::Drawing(tool);
        self.selection.clear();
        self.marquee = None;
        self.state = DrawingState::Idle;
        self.polygon_prompted = false;
        self.needs_redraw = true;
        log::debug!("Tool set to {:?}", tool);
    }

    /// Arms an edit operation, keeping the current tool and selection.
    pub fn set_edit_op(&mut self, op: EditOp) {
        let tool = self.interaction.tool();
        self.interaction = Interaction::Editing { op, tool };
        log::debug!("Edit operation set to {:?} (tool {:?})", op, tool);
    }

    /// Sets the stroke color for subsequent shapes and the live preview.
    pub fn set_color(&mut self, color: Color) {
        self.current_color = color;
        if matches!(self.state, DrawingState::Drawing { .. }) {
            self.needs_redraw = true;
        }
    }

    /// The shape currently being drawn, in the current stroke.
    pub fn provisional_shape(&self) -> Option<ColoredShape> {
        match &self.state {
            DrawingState::Drawing {
                shape: Some(shape), ..
            } => Some(ColoredShape::new(
                shape.clone(),
                self.current_color,
                self.current_thickness,
            )),
            _ => None,
        }
    }

    /// Look up an action for the given key name and the held modifiers.
    pub(super) fn find_action(&self, key_name: &str) -> Option<Action> {
        let binding = KeyBinding {
            key: key_name.to_string(),
            ctrl: self.modifiers.ctrl,
            shift: self.modifiers.shift,
            alt: self.modifiers.alt,
        }
        .normalized();
        self.action_map.get(&binding).copied()
    }

    /// Takes and clears any pending host request.
    ///
    /// Hosts call this after forwarding a key event and service the request
    /// with [`choose_color`](Self::choose_color) or
    /// [`request_export`](Self::request_export).
    pub fn take_pending_host_action(&mut self) -> Option<HostRequest> {
        self.pending_host_action.take()
    }

    /// Stores a host request for retrieval by the host.
    pub(super) fn set_pending_host_action(&mut self, request: HostRequest) {
        self.pending_host_action = Some(request);
    }
}
