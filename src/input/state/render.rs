use crate::draw::{render_background, render_scene};

use super::InputState;

impl InputState {
    /// Paints the background, committed shapes, the in-progress shape and the marquee.
    ///
    /// Read-only: may be called at any time, including mid-gesture.
    pub fn render(&self, ctx: &cairo::Context) {
        render_background(ctx, self.background);
        let provisional = self.provisional_shape();
        render_scene(
            ctx,
            &self.canvas.shapes,
            provisional.as_ref(),
            self.marquee,
            &self.marquee_style,
        );
    }
}
