//! Shape definitions for canvas drawings.

use super::color::Color;
use crate::util::{self, Rect};

/// Discriminant of a [`Shape`], useful for logging and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Freehand,
    Line,
    Rect,
    Ellipse,
    Polygon,
}

/// Geometric primitive drawn on the canvas.
///
/// Each variant carries only geometry; stroke attributes live on
/// [`ColoredShape`]. The kind never changes after creation, but the payload is
/// redefined while a gesture is in progress and translated during moves.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Freehand drawing - polyline connecting pointer drag points
    Freehand {
        /// Sequence of (x, y) coordinates traced by the pointer
        points: Vec<(i32, i32)>,
    },
    /// Straight line between two points
    Line {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
    },
    /// Rectangle outline; `w` and `h` are never negative
    Rect { x: i32, y: i32, w: i32, h: i32 },
    /// Ellipse inscribed in the given box; `w` and `h` are never negative
    Ellipse { x: i32, y: i32, w: i32, h: i32 },
    /// Closed regular polygon
    Polygon {
        /// Vertices in drawing order
        points: Vec<(i32, i32)>,
    },
}

/// A [`Shape`] paired with its stroke attributes.
///
/// `Clone` produces a fully independent copy: the geometry is owned and the
/// color is copied by value, so undo snapshots and clipboard entries never
/// observe later edits to the live canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct ColoredShape {
    pub shape: Shape,
    /// Stroke color (shapes are never filled)
    pub color: Color,
    /// Stroke width in pixels
    pub thick: f64,
}

impl ColoredShape {
    pub fn new(shape: Shape, color: Color, thick: f64) -> Self {
        Self {
            shape,
            color,
            thick,
        }
    }

    /// Bounding box of the underlying geometry (see [`Shape::bounding_box`]).
    pub fn bounding_box(&self) -> Option<Rect> {
        self.shape.bounding_box()
    }
}

impl Shape {
    /// Normalized rectangle spanned by two opposite corners.
    pub fn rect_from_diagonal(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        let r = Rect::from_diagonal(x1, y1, x2, y2);
        Shape::Rect {
            x: r.x,
            y: r.y,
            w: r.width,
            h: r.height,
        }
    }

    /// Ellipse inscribed in the normalized box spanned by two opposite corners.
    pub fn ellipse_from_diagonal(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        let r = Rect::from_diagonal(x1, y1, x2, y2);
        Shape::Ellipse {
            x: r.x,
            y: r.y,
            w: r.width,
            h: r.height,
        }
    }

    /// Regular polygon centered at `(cx, cy)` with the given circumradius.
    pub fn regular_polygon(cx: i32, cy: i32, sides: u32, radius: i32) -> Self {
        Shape::Polygon {
            points: util::regular_polygon_points(cx, cy, sides, radius),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Freehand { .. } => ShapeKind::Freehand,
            Shape::Line { .. } => ShapeKind::Line,
            Shape::Rect { .. } => ShapeKind::Rect,
            Shape::Ellipse { .. } => ShapeKind::Ellipse,
            Shape::Polygon { .. } => ShapeKind::Polygon,
        }
    }

    /// Returns the axis-aligned bounding box of the geometry.
    ///
    /// Stroke width is not included. Degenerate extents (a horizontal line, a
    /// single-point stroke) are widened to one pixel so every shape stays
    /// pickable by the marquee. Returns `None` only for a shape with no points.
    pub fn bounding_box(&self) -> Option<Rect> {
        match self {
            Shape::Freehand { points } | Shape::Polygon { points } => {
                bounding_box_for_points(points)
            }
            Shape::Line { x1, y1, x2, y2 } => {
                ensure_positive_rect(*x1.min(x2), *y1.min(y2), *x1.max(x2), *y1.max(y2))
            }
            Shape::Rect { x, y, w, h } | Shape::Ellipse { x, y, w, h } => {
                ensure_positive_rect(*x, *y, x.saturating_add(*w), y.saturating_add(*h))
            }
        }
    }

    /// Moves every control point by `(dx, dy)`.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        match self {
            Shape::Freehand { points } | Shape::Polygon { points } => {
                for (x, y) in points.iter_mut() {
                    *x = x.saturating_add(dx);
                    *y = y.saturating_add(dy);
                }
            }
            Shape::Line { x1, y1, x2, y2 } => {
                *x1 = x1.saturating_add(dx);
                *y1 = y1.saturating_add(dy);
                *x2 = x2.saturating_add(dx);
                *y2 = y2.saturating_add(dy);
            }
            Shape::Rect { x, y, .. } | Shape::Ellipse { x, y, .. } => {
                *x = x.saturating_add(dx);
                *y = y.saturating_add(dy);
            }
        }
    }

    /// Returns a copy translated so that its bounding box origin lands at `(x, y)`.
    pub fn moved_to(&self, x: i32, y: i32) -> Self {
        let mut copy = self.clone();
        if let Some(bounds) = self.bounding_box() {
            copy.translate(x.saturating_sub(bounds.x), y.saturating_sub(bounds.y));
        }
        copy
    }
}

pub(crate) fn bounding_box_for_points(points: &[(i32, i32)]) -> Option<Rect> {
    let (&(first_x, first_y), rest) = points.split_first()?;
    let mut min_x = first_x;
    let mut max_x = first_x;
    let mut min_y = first_y;
    let mut max_y = first_y;

    for &(x, y) in rest {
        min_x = min_x.min(x);
        max_x = max_x.max(x);
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }

    ensure_positive_rect(min_x, min_y, max_x, max_y)
}

fn ensure_positive_rect(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<Rect> {
    // Widen degenerate extents, shifting the origin back at the i32 edge
    let (min_x, max_x) = widen_degenerate(min_x, max_x);
    let (min_y, max_y) = widen_degenerate(min_y, max_y);
    Rect::from_min_max(min_x, min_y, max_x, max_y)
}

fn widen_degenerate(min: i32, max: i32) -> (i32, i32) {
    match (min == max, max.checked_add(1)) {
        (false, _) => (min, max),
        (true, Some(widened)) => (min, widened),
        (true, None) => (min - 1, max),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, RED};

    #[test]
    fn rect_from_diagonal_is_normalized() {
        let shape = Shape::rect_from_diagonal(50, 50, 10, 10);
        assert_eq!(
            shape,
            Shape::Rect {
                x: 10,
                y: 10,
                w: 40,
                h: 40
            }
        );
    }

    #[test]
    fn ellipse_from_diagonal_is_normalized() {
        let shape = Shape::ellipse_from_diagonal(80, 10, 20, 70);
        assert_eq!(
            shape,
            Shape::Ellipse {
                x: 20,
                y: 10,
                w: 60,
                h: 60
            }
        );
    }

    #[test]
    fn triangle_has_three_vertices() {
        let shape = Shape::regular_polygon(0, 0, 3, 30);
        match shape {
            Shape::Polygon { points } => assert_eq!(points.len(), 3),
            other => panic!("expected polygon, got {other:?}"),
        }
    }

    #[test]
    fn freehand_bounding_box_covers_points() {
        let shape = Shape::Freehand {
            points: vec![(10, 20), (30, 40), (5, 25)],
        };
        let rect = shape.bounding_box().expect("freehand should have bounds");
        assert_eq!(rect, Rect::new(5, 20, 25, 20).unwrap());
    }

    #[test]
    fn horizontal_line_bounding_box_is_pickable() {
        let shape = Shape::Line {
            x1: 70,
            y1: 40,
            x2: 10,
            y2: 40,
        };
        let rect = shape.bounding_box().expect("line should have bounds");
        assert_eq!(rect, Rect::new(10, 40, 60, 1).unwrap());
        assert!(!rect.is_empty());
    }

    #[test]
    fn empty_freehand_has_no_bounds() {
        let shape = Shape::Freehand { points: Vec::new() };
        assert!(shape.bounding_box().is_none());
    }

    #[test]
    fn translate_moves_every_kind() {
        let mut shapes = vec![
            Shape::Freehand {
                points: vec![(0, 0), (5, 5)],
            },
            Shape::Line {
                x1: 0,
                y1: 0,
                x2: 5,
                y2: 5,
            },
            Shape::rect_from_diagonal(0, 0, 5, 5),
            Shape::ellipse_from_diagonal(0, 0, 5, 5),
            Shape::regular_polygon(10, 10, 6, 10),
        ];
        for shape in &mut shapes {
            let before = shape.bounding_box().unwrap();
            shape.translate(7, -3);
            let after = shape.bounding_box().unwrap();
            assert_eq!(after.x, before.x + 7, "{:?}", shape.kind());
            assert_eq!(after.y, before.y - 3, "{:?}", shape.kind());
            assert_eq!(after.width, before.width);
            assert_eq!(after.height, before.height);
        }
    }

    #[test]
    fn moved_to_places_bounds_origin() {
        let shape = Shape::Line {
            x1: 30,
            y1: 10,
            x2: 10,
            y2: 50,
        };
        let moved = shape.moved_to(100, 200);
        let bounds = moved.bounding_box().unwrap();
        assert_eq!((bounds.x, bounds.y), (100, 200));
        assert_eq!(
            moved,
            Shape::Line {
                x1: 120,
                y1: 200,
                x2: 100,
                y2: 240
            }
        );
    }

    #[test]
    fn clone_does_not_alias_original() {
        let mut original = ColoredShape::new(
            Shape::Freehand {
                points: vec![(1, 1), (2, 2)],
            },
            RED,
            1.0,
        );
        let copy = original.clone();

        original.shape.translate(10, 10);
        if let Shape::Freehand { points } = &mut original.shape {
            points.push((99, 99));
        }
        original.color = BLACK;

        assert_eq!(
            copy.shape,
            Shape::Freehand {
                points: vec![(1, 1), (2, 2)]
            }
        );
        assert_eq!(copy.color, RED);
    }

    #[test]
    fn degenerate_bounds_at_coordinate_limit_stay_positive() {
        let line = Shape::Line {
            x1: i32::MAX,
            y1: 0,
            x2: i32::MAX,
            y2: 10,
        };
        let bounds = line.bounding_box().unwrap();
        assert_eq!((bounds.x, bounds.width), (i32::MAX - 1, 1));

        let mut rect = Shape::rect_from_diagonal(0, 0, 10, 10);
        rect.translate(i32::MAX, i32::MIN);
        let bounds = rect.bounding_box().unwrap();
        assert_eq!((bounds.x, bounds.width), (i32::MAX - 1, 1));
        assert_eq!((bounds.y, bounds.height), (i32::MIN, 10));
    }
}
