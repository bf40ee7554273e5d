//! Copied shapes stored relative to the selection anchor.

use super::shape::ColoredShape;

/// One copied shape plus its offset from the anchor it was copied against.
#[derive(Clone, Debug, PartialEq)]
pub struct ClipboardEntry {
    /// Independent copy of the shape as it looked when copied
    pub shape: ColoredShape,
    /// Offset of the shape's bounding box origin from the copy anchor
    pub offset: (i32, i32),
}

/// Shapes captured by a copy, ready to be pasted at any anchor point.
///
/// Offsets are relative, so pasting re-anchors the whole group while keeping
/// the spacing between shapes.
#[derive(Clone, Debug, Default)]
pub struct Clipboard {
    entries: Vec<ClipboardEntry>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[ClipboardEntry] {
        &self.entries
    }

    /// Replaces the clipboard contents with copies of `shapes`.
    ///
    /// Each offset is measured from `anchor` to the shape's bounding box
    /// origin. Shapes without bounds are stored with a zero offset.
    pub fn capture<'a>(
        &mut self,
        shapes: impl IntoIterator<Item = &'a ColoredShape>,
        anchor: (i32, i32),
    ) {
        self.entries = shapes
            .into_iter()
            .map(|shape| {
                let offset = shape
                    .bounding_box()
                    .map(|b| (b.x.saturating_sub(anchor.0), b.y.saturating_sub(anchor.1)))
                    .unwrap_or((0, 0));
                ClipboardEntry {
                    shape: shape.clone(),
                    offset,
                }
            })
            .collect();
    }

    /// Builds fresh copies of every entry anchored at `(x, y)`.
    pub fn materialize(&self, x: i32, y: i32) -> Vec<ColoredShape> {
        self.entries
            .iter()
            .map(|entry| ColoredShape {
                shape: entry
                    .shape
                    .shape
                    .moved_to(
                        x.saturating_add(entry.offset.0),
                        y.saturating_add(entry.offset.1),
                    ),
                ..entry.shape.clone()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLUE, RED};
    use crate::draw::shape::Shape;

    fn sample() -> Vec<ColoredShape> {
        vec![
            ColoredShape::new(Shape::rect_from_diagonal(20, 30, 40, 50), RED, 1.0),
            ColoredShape::new(
                Shape::Line {
                    x1: 60,
                    y1: 35,
                    x2: 80,
                    y2: 45,
                },
                BLUE,
                2.0,
            ),
        ]
    }

    #[test]
    fn capture_records_offsets_from_anchor() {
        let shapes = sample();
        let mut clipboard = Clipboard::new();
        clipboard.capture(&shapes, (10, 20));

        assert_eq!(clipboard.len(), 2);
        assert_eq!(clipboard.entries()[0].offset, (10, 10));
        assert_eq!(clipboard.entries()[1].offset, (50, 15));
    }

    #[test]
    fn materialize_preserves_relative_layout_and_color() {
        let shapes = sample();
        let mut clipboard = Clipboard::new();
        clipboard.capture(&shapes, (10, 20));

        let pasted = clipboard.materialize(110, 220);
        assert_eq!(pasted.len(), 2);
        for (original, copy) in shapes.iter().zip(&pasted) {
            let a = original.bounding_box().unwrap();
            let b = copy.bounding_box().unwrap();
            assert_eq!((b.x - a.x, b.y - a.y), (100, 200));
            assert_eq!(copy.color, original.color);
            assert_eq!(copy.thick, original.thick);
        }
    }

    #[test]
    fn capture_is_independent_of_source() {
        let mut shapes = sample();
        let mut clipboard = Clipboard::new();
        clipboard.capture(&shapes, (0, 0));

        shapes[0].shape.translate(500, 500);
        assert_eq!(
            clipboard.entries()[0].shape.shape,
            Shape::rect_from_diagonal(20, 30, 40, 50)
        );
    }
}
