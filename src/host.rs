//! Outbound interface to the shell hosting the canvas.
//!
//! The editing state machine never opens dialogs itself. Whenever it needs a
//! decision from the user (polygon type, stroke color, save location) or has
//! something to report, it goes through a [`Host`]. Every chooser may decline
//! by returning `None`, which leaves the corresponding state unchanged.

use crate::draw::Color;
use crate::export::ExportOutcome;
use crate::input::PolygonSides;
use std::path::PathBuf;

/// Requests the state machine queues for the host after a keybinding fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostRequest {
    /// Show the color chooser and apply the result with `InputState::choose_color`
    ChooseColor,
    /// Run the export flow with `InputState::request_export`
    Export,
}

/// Services provided by the shell around the canvas.
pub trait Host {
    /// Called after an event changed anything visible.
    fn request_repaint(&mut self) {}

    /// Ask the user for a stroke color, starting from `current`.
    fn choose_color(&mut self, current: Color) -> Option<Color>;

    /// Ask the user which regular polygon to draw.
    fn choose_polygon_sides(&mut self) -> Option<PolygonSides>;

    /// Ask the user where to save the exported image.
    fn choose_save_path(&mut self) -> Option<PathBuf>;

    /// Report how an export request ended.
    fn notify_export(&mut self, outcome: &ExportOutcome);
}

/// Host that declines every request and only logs export results.
///
/// Useful for driving the state machine where no user is present.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeadlessHost;

impl Host for HeadlessHost {
    fn choose_color(&mut self, _current: Color) -> Option<Color> {
        None
    }

    fn choose_polygon_sides(&mut self) -> Option<PolygonSides> {
        None
    }

    fn choose_save_path(&mut self) -> Option<PathBuf> {
        None
    }

    fn notify_export(&mut self, outcome: &ExportOutcome) {
        log::info!("Export finished: {outcome}");
    }
}
