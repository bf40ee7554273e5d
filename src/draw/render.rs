//! Cairo-based rendering functions for shapes.

use super::color::Color;
use super::shape::{ColoredShape, Shape};
use crate::util::Rect;

/// Appearance of the selection marquee.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarqueeStyle {
    /// Outline color
    pub color: Color,
    /// Length of each dash and each gap in pixels
    pub dash_length: f64,
}

impl Default for MarqueeStyle {
    fn default() -> Self {
        Self {
            color: super::color::GRAY,
            dash_length: 10.0,
        }
    }
}

/// Fills the entire surface with the canvas background color.
///
/// Should be called before rendering shapes.
pub fn render_background(ctx: &cairo::Context, color: Color) {
    color.apply(ctx);
    let _ = ctx.paint(); // Ignore errors - a failed paint leaves the surface as it was
}

/// Renders a complete scene: committed shapes, the in-progress shape, then the marquee.
///
/// This has no side effects beyond drawing, so it is safe to call at any time.
///
/// # Arguments
/// * `ctx` - Cairo drawing context to render to
/// * `shapes` - Committed shapes in paint order
/// * `provisional` - Shape currently being drawn, already carrying the current color
/// * `marquee` - Active selection rectangle, if any
/// * `style` - Marquee appearance
pub fn render_scene(
    ctx: &cairo::Context,
    shapes: &[ColoredShape],
    provisional: Option<&ColoredShape>,
    marquee: Option<Rect>,
    style: &MarqueeStyle,
) {
    render_shapes(ctx, shapes);
    if let Some(shape) = provisional {
        render_shape(ctx, shape);
    }
    if let Some(rect) = marquee {
        render_marquee(ctx, rect, style);
    }
}

/// Renders all shapes in a collection, first shape at the bottom.
pub fn render_shapes(ctx: &cairo::Context, shapes: &[ColoredShape]) {
    for shape in shapes {
        render_shape(ctx, shape);
    }
}

/// Renders a single colored shape as an unfilled outline.
pub fn render_shape(ctx: &cairo::Context, colored: &ColoredShape) {
    let ColoredShape {
        shape,
        color,
        thick,
    } = colored;

    let _ = ctx.save();
    color.apply(ctx);
    ctx.set_line_width(*thick);

    match shape {
        Shape::Freehand { points } => render_polyline(ctx, points, false),
        Shape::Line { x1, y1, x2, y2 } => {
            ctx.set_line_cap(cairo::LineCap::Round);
            ctx.move_to(*x1 as f64, *y1 as f64);
            ctx.line_to(*x2 as f64, *y2 as f64);
            let _ = ctx.stroke();
        }
        Shape::Rect { x, y, w, h } => {
            ctx.set_line_join(cairo::LineJoin::Miter);
            ctx.rectangle(*x as f64, *y as f64, *w as f64, *h as f64);
            let _ = ctx.stroke();
        }
        Shape::Ellipse { x, y, w, h } => render_ellipse(ctx, *x, *y, *w, *h),
        Shape::Polygon { points } => render_polyline(ctx, points, true),
    }

    let _ = ctx.restore();
}

/// Renders the marquee as a thin dashed outline.
pub fn render_marquee(ctx: &cairo::Context, rect: Rect, style: &MarqueeStyle) {
    let _ = ctx.save();
    style.color.apply(ctx);
    ctx.set_line_width(1.0);
    ctx.set_line_cap(cairo::LineCap::Butt);
    ctx.set_line_join(cairo::LineJoin::Miter);
    ctx.set_dash(&[style.dash_length], 0.0);
    ctx.rectangle(
        rect.x as f64,
        rect.y as f64,
        rect.width as f64,
        rect.height as f64,
    );
    let _ = ctx.stroke();
    let _ = ctx.restore();
}

/// Stroke a sequence of points, optionally closing the path.
fn render_polyline(ctx: &cairo::Context, points: &[(i32, i32)], close: bool) {
    let Some((&(x0, y0), rest)) = points.split_first() else {
        return;
    };

    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    ctx.move_to(x0 as f64, y0 as f64);
    for &(x, y) in rest {
        ctx.line_to(x as f64, y as f64);
    }
    if close {
        ctx.close_path();
    }
    let _ = ctx.stroke();
}

/// Render an ellipse inscribed in a box using Cairo's arc with scaling
fn render_ellipse(ctx: &cairo::Context, x: i32, y: i32, w: i32, h: i32) {
    if w == 0 || h == 0 {
        return;
    }

    let rx = w as f64 / 2.0;
    let ry = h as f64 / 2.0;

    ctx.save().ok();
    ctx.translate(x as f64 + rx, y as f64 + ry);
    ctx.scale(rx, ry);
    ctx.arc(0.0, 0.0, 1.0, 0.0, 2.0 * std::f64::consts::PI);
    ctx.restore().ok();

    let _ = ctx.stroke();
}
