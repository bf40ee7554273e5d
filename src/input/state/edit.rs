use super::{DrawingState, InputState};

impl InputState {
    /// Starts dragging the selection. The pre-move canvas is recorded first.
    pub(super) fn begin_move(&mut self, x: i32, y: i32) {
        if self.selection.is_empty() {
            return;
        }
        self.history.push(self.canvas.snapshot());
        self.state = DrawingState::Moving {
            last_x: x,
            last_y: y,
        };
    }

    /// Removes the selected shapes from the canvas.
    pub(super) fn cut_selection(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        self.history.push(self.canvas.snapshot());
        let removed = self.canvas.remove_indices(&self.selection);
        self.selection.clear();
        self.marquee = None;
        self.needs_redraw = true;
        log::debug!("Cut {} shape(s)", removed);
    }

    /// Replaces the clipboard with copies of the selected shapes.
    ///
    /// Offsets are measured from the marquee's top-left corner, or from the
    /// selection bounds when no marquee is shown.
    pub(super) fn copy_selection(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        let Some(anchor) = self
            .marquee
            .or_else(|| self.canvas.bounds_of(&self.selection))
        else {
            return;
        };

        self.history.push(self.canvas.snapshot());
        let shapes = &self.canvas.shapes;
        self.clipboard.capture(
            self.selection.iter().filter_map(|&index| shapes.get(index)),
            (anchor.x, anchor.y),
        );
        log::debug!(
            "Copied {} shape(s) anchored at ({}, {})",
            self.clipboard.len(),
            anchor.x,
            anchor.y
        );
    }

    /// Appends the clipboard contents anchored at `(x, y)` and selects them.
    pub(super) fn paste_at(&mut self, x: i32, y: i32) {
        if self.clipboard.is_empty() {
            return;
        }
        self.history.push(self.canvas.snapshot());
        self.selection.clear();
        for shape in self.clipboard.materialize(x, y) {
            let index = self.canvas.add_shape(shape);
            self.selection.push(index);
        }
        self.marquee = crate::util::Rect::new(x, y, 0, 0);
        self.needs_redraw = true;
        log::debug!("Pasted {} shape(s) at ({}, {})", self.selection.len(), x, y);
    }

    /// Drops the selection and hides the marquee. History is untouched.
    pub fn clear_selection(&mut self) {
        if self.selection.is_empty() && self.marquee.is_none() {
            return;
        }
        self.selection.clear();
        self.marquee = None;
        self.needs_redraw = true;
    }

    /// Restores the canvas to the most recent snapshot.
    ///
    /// Clears the selection and marquee. Returns `false` when there is
    /// nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.pop() else {
            log::debug!("Nothing to undo");
            return false;
        };
        self.canvas.restore(snapshot);
        self.selection.clear();
        self.marquee = None;
        if matches!(
            self.state,
            DrawingState::Moving { .. } | DrawingState::Selecting { .. }
        ) {
            self.state = DrawingState::Idle;
        }
        self.needs_redraw = true;
        log::debug!("Undo: {} snapshot(s) left", self.history.len());
        true
    }
}
