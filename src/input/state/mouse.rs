use crate::draw::{ColoredShape, Shape};
use crate::host::Host;
use crate::input::{
    events::MouseButton,
    mode::{EditOp, Interaction, Tool},
};
use crate::util::{self, Rect};

use super::{DrawingState, InputState};

impl InputState {
    /// Processes a mouse button press event.
    ///
    /// # Arguments
    /// * `host` - Used to ask for the polygon side count
    /// * `button` - Which mouse button was pressed
    /// * `x` - Mouse X coordinate
    /// * `y` - Mouse Y coordinate
    ///
    /// # Behavior
    /// - Drawing: starts a shape (or a marquee for the select tool) at the point
    /// - Editing: applies the armed edit operation to the selection
    /// - Non-left buttons are ignored
    pub fn on_mouse_press(&mut self, host: &mut dyn Host, button: MouseButton, x: i32, y: i32) {
        if button != MouseButton::Left {
            return;
        }

        match self.interaction {
            Interaction::Drawing(tool) => self.begin_drawing(host, tool, x, y),
            Interaction::Editing { op, .. } => match op {
                EditOp::Move => self.begin_move(x, y),
                EditOp::Cut => self.cut_selection(),
                EditOp::Copy => self.copy_selection(),
                EditOp::Paste => self.paste_at(x, y),
            },
        }
    }

    fn begin_drawing(&mut self, host: &mut dyn Host, tool: Tool, x: i32, y: i32) {
        let shape = match tool {
            Tool::Freehand => Some(Shape::Freehand {
                points: vec![(x, y)],
            }),
            Tool::Line => Some(Shape::Line {
                x1: x,
                y1: y,
                x2: x,
                y2: y,
            }),
            Tool::Rect => Some(Shape::rect_from_diagonal(x, y, x, y)),
            Tool::Ellipse => Some(Shape::ellipse_from_diagonal(x, y, x, y)),
            Tool::Polygon => {
                if !self.polygon_prompted {
                    self.polygon_prompted = true;
                    if let Some(sides) = host.choose_polygon_sides() {
                        log::debug!("Polygon sides set to {}", sides);
                        self.polygon_sides = sides;
                    }
                }
                None
            }
            Tool::Select => {
                self.selection.clear();
                self.marquee = Some(Rect::from_diagonal(x, y, x, y));
                self.state = DrawingState::Selecting {
                    start_x: x,
                    start_y: y,
                };
                self.needs_redraw = true;
                return;
            }
        };

        self.state = DrawingState::Drawing {
            tool,
            start_x: x,
            start_y: y,
            shape,
        };
        self.needs_redraw = true;
    }

    /// Processes mouse motion (dragging) events.
    ///
    /// # Arguments
    /// * `x` - Current mouse X coordinate
    /// * `y` - Current mouse Y coordinate
    ///
    /// # Behavior
    /// - Drawing: reshapes the in-progress shape toward the point
    /// - Selecting: stretches the marquee from its anchor to the point
    /// - Moving: translates the selection by the distance since the last event
    pub fn on_mouse_motion(&mut self, x: i32, y: i32) {
        let sides = self.polygon_sides.count();

        match &mut self.state {
            DrawingState::Idle => {}
            DrawingState::Drawing {
                tool,
                start_x,
                start_y,
                shape,
            } => {
                let (sx, sy) = (*start_x, *start_y);
                match tool {
                    Tool::Freehand => {
                        if let Some(Shape::Freehand { points }) = shape {
                            points.push((x, y));
                        }
                    }
                    Tool::Line => {
                        if let Some(Shape::Line { x2, y2, .. }) = shape {
                            *x2 = x;
                            *y2 = y;
                        }
                    }
                    Tool::Rect => *shape = Some(Shape::rect_from_diagonal(sx, sy, x, y)),
                    Tool::Ellipse => *shape = Some(Shape::ellipse_from_diagonal(sx, sy, x, y)),
                    Tool::Polygon => {
                        let radius = util::pixel_distance(sx, sy, x, y);
                        *shape = Some(Shape::regular_polygon(sx, sy, sides, radius));
                    }
                    Tool::Select => return,
                }
                self.needs_redraw = true;
            }
            DrawingState::Selecting { start_x, start_y } => {
                self.marquee = Some(Rect::from_diagonal(*start_x, *start_y, x, y));
                self.needs_redraw = true;
            }
            DrawingState::Moving { last_x, last_y } => {
                if self.selection.is_empty() {
                    return;
                }
                let (dx, dy) = (x.saturating_sub(*last_x), y.saturating_sub(*last_y));
                *last_x = x;
                *last_y = y;
                self.canvas.translate_indices(&self.selection, dx, dy);
                if let Some(marquee) = self.marquee.as_mut() {
                    marquee.translate(dx, dy);
                }
                self.needs_redraw = true;
            }
        }
    }

    /// Processes mouse button release events.
    ///
    /// # Arguments
    /// * `button` - Which mouse button was released
    /// * `_x` - Mouse X coordinate at release (the last drag point is authoritative)
    /// * `_y` - Mouse Y coordinate at release
    ///
    /// # Behavior
    /// - Drawing: commits the in-progress shape with the current stroke
    /// - Selecting: selects every shape whose bounds overlap the marquee
    /// - Moving: records the finished move in the history
    pub fn on_mouse_release(&mut self, button: MouseButton, _x: i32, _y: i32) {
        if button != MouseButton::Left {
            return;
        }

        self.polygon_prompted = false;
        match std::mem::replace(&mut self.state, DrawingState::Idle) {
            DrawingState::Idle => {}
            DrawingState::Drawing { tool, shape, .. } => {
                if let Some(shape) = shape {
                    self.history.push(self.canvas.snapshot());
                    let index = self.canvas.add_shape(ColoredShape::new(
                        shape,
                        self.current_color,
                        self.current_thickness,
                    ));
                    self.selection.clear();
                    log::debug!("Committed {:?} shape at index {}", tool, index);
                }
                self.needs_redraw = true;
            }
            DrawingState::Selecting { .. } => {
                self.selection = match self.marquee {
                    Some(marquee) => self.canvas.shapes_intersecting(&marquee),
                    None => Vec::new(),
                };
                log::debug!("Selected {} shape(s)", self.selection.len());
                self.needs_redraw = true;
            }
            DrawingState::Moving { .. } => {
                if !self.selection.is_empty() {
                    self.history.push(self.canvas.snapshot());
                    log::debug!("Moved {} shape(s)", self.selection.len());
                }
            }
        }
    }
}
