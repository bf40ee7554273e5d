use crate::config::Action;
use crate::export::{self, ExportOutcome};
use crate::host::{Host, HostRequest};
use crate::input::{
    events::Key,
    mode::{EditOp, Tool},
};

use super::InputState;

impl InputState {
    /// Processes a key press event.
    ///
    /// Modifier keys only update the modifier state. Any other key is looked up
    /// in the keybinding map together with the held modifiers and the bound
    /// action, if any, is dispatched.
    pub fn on_key_press(&mut self, key: Key) {
        if self.modifiers.update(key, true) {
            return;
        }

        let Some(key_name) = key.binding_name() else {
            return;
        };

        if let Some(action) = self.find_action(&key_name) {
            self.handle_action(action);
        }
    }

    /// Processes a key release event.
    ///
    /// Currently only tracks modifier key releases to update the modifier state.
    pub fn on_key_release(&mut self, key: Key) {
        self.modifiers.update(key, false);
    }

    /// Handle an action triggered by a keybinding.
    pub(super) fn handle_action(&mut self, action: Action) {
        log::debug!("Action {:?}", action);
        match action {
            Action::ClearSelection => self.clear_selection(),
            Action::Undo => {
                self.undo();
            }
            Action::ToolFreehand => self.set_tool(Tool::Freehand),
            Action::ToolLine => self.set_tool(Tool::Line),
            Action::ToolRectangle => self.set_tool(Tool::Rect),
            Action::ToolEllipse => self.set_tool(Tool::Ellipse),
            Action::ToolPolygon => self.set_tool(Tool::Polygon),
            Action::ToolSelect => self.set_tool(Tool::Select),
            Action::EditMove => self.set_edit_op(EditOp::Move),
            Action::EditCut => self.set_edit_op(EditOp::Cut),
            Action::EditCopy => self.set_edit_op(EditOp::Copy),
            Action::EditPaste => self.set_edit_op(EditOp::Paste),
            Action::ChooseColor | Action::Export => {
                let request = if action == Action::ChooseColor {
                    HostRequest::ChooseColor
                } else {
                    HostRequest::Export
                };
                log::debug!("Host request {:?} pending", request);
                self.set_pending_host_action(request);

                // A modal dialog swallows the matching key releases
                self.modifiers.clear();
            }
        }
    }

    /// Runs a request previously taken with `take_pending_host_action`.
    pub fn service_host_request(&mut self, host: &mut dyn Host, request: HostRequest) {
        match request {
            HostRequest::ChooseColor => self.choose_color(host),
            HostRequest::Export => {
                self.request_export(host);
            }
        }
    }

    /// Asks the host for a new stroke color; a dismissed chooser keeps the current one.
    pub fn choose_color(&mut self, host: &mut dyn Host) {
        if let Some(color) = host.choose_color(self.current_color) {
            log::debug!("Stroke color set to {}", crate::util::color_to_name(&color));
            self.set_color(color);
        }
    }

    /// Exports the rendered canvas to a PNG chosen by the host.
    ///
    /// The outcome is reported through [`Host::notify_export`] and returned.
    /// The canvas is never modified.
    pub fn request_export(&mut self, host: &mut dyn Host) -> ExportOutcome {
        let outcome = match host.choose_save_path() {
            None => {
                log::info!("Export cancelled");
                ExportOutcome::Cancelled
            }
            Some(path) => match export::export_png(self, &path) {
                Ok(written) => ExportOutcome::Saved(written),
                Err(err) => {
                    log::warn!("Export to {} failed: {}", path.display(), err);
                    ExportOutcome::Failed(err.to_string())
                }
            },
        };

        host.notify_export(&outcome);
        outcome
    }
}
