//! Canvas container for the committed shape list.

use super::shape::ColoredShape;
use crate::util::Rect;

/// Container for all committed shapes.
///
/// Shapes are kept in paint order (first = bottom, last = top). There is no
/// other layering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Canvas {
    /// Vector of all shapes in draw order
    pub shapes: Vec<ColoredShape>,
}

impl Canvas {
    /// Creates a new empty canvas.
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Adds a new shape on top of the existing ones and returns its index.
    pub fn add_shape(&mut self, shape: ColoredShape) -> usize {
        self.shapes.push(shape);
        self.shapes.len() - 1
    }

    /// Deep copy of the shape list, suitable for the undo history.
    pub fn snapshot(&self) -> Vec<ColoredShape> {
        self.shapes.clone()
    }

    /// Replaces every shape with a previously captured snapshot.
    pub fn restore(&mut self, shapes: Vec<ColoredShape>) {
        self.shapes = shapes;
    }

    /// Indices of every shape whose bounding box intersects `region`.
    pub fn shapes_intersecting(&self, region: &Rect) -> Vec<usize> {
        self.shapes
            .iter()
            .enumerate()
            .filter(|(_, shape)| {
                shape
                    .bounding_box()
                    .is_some_and(|bounds| region.intersects(&bounds))
            })
            .map(|(index, _)| index)
            .collect()
    }

    /// Removes the shapes at the given indices, preserving the order of the rest.
    ///
    /// Out-of-range and duplicate indices are ignored.
    pub fn remove_indices(&mut self, indices: &[usize]) -> usize {
        let before = self.shapes.len();
        let mut index = 0;
        self.shapes.retain(|_| {
            let keep = !indices.contains(&index);
            index += 1;
            keep
        });
        before - self.shapes.len()
    }

    /// Translates the shapes at the given indices.
    pub fn translate_indices(&mut self, indices: &[usize], dx: i32, dy: i32) {
        for &index in indices {
            if let Some(shape) = self.shapes.get_mut(index) {
                shape.shape.translate(dx, dy);
            }
        }
    }

    /// Union of the bounding boxes of the shapes at the given indices.
    pub fn bounds_of(&self, indices: &[usize]) -> Option<Rect> {
        indices
            .iter()
            .filter_map(|&index| self.shapes.get(index))
            .filter_map(ColoredShape::bounding_box)
            .reduce(Rect::union)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{Shape, color::RED};

    fn rect(x1: i32, y1: i32, x2: i32, y2: i32) -> ColoredShape {
        ColoredShape::new(Shape::rect_from_diagonal(x1, y1, x2, y2), RED, 1.0)
    }

    #[test]
    fn shapes_intersecting_uses_bounding_boxes() {
        let mut canvas = Canvas::new();
        canvas.add_shape(rect(0, 0, 10, 10));
        canvas.add_shape(rect(50, 50, 60, 60));
        canvas.add_shape(rect(5, 5, 55, 55));

        let region = Rect::from_diagonal(0, 0, 20, 20);
        assert_eq!(canvas.shapes_intersecting(&region), vec![0, 2]);

        let nowhere = Rect::from_diagonal(200, 200, 300, 300);
        assert!(canvas.shapes_intersecting(&nowhere).is_empty());
    }

    #[test]
    fn remove_indices_keeps_order() {
        let mut canvas = Canvas::new();
        for i in 0..5 {
            canvas.add_shape(rect(i * 10, 0, i * 10 + 5, 5));
        }
        let removed = canvas.remove_indices(&[1, 3, 42]);
        assert_eq!(removed, 2);
        let origins: Vec<i32> = canvas
            .shapes
            .iter()
            .map(|s| s.bounding_box().unwrap().x)
            .collect();
        assert_eq!(origins, vec![0, 20, 40]);
    }

    #[test]
    fn snapshot_is_independent() {
        let mut canvas = Canvas::new();
        canvas.add_shape(rect(0, 0, 10, 10));
        let snapshot = canvas.snapshot();

        canvas.translate_indices(&[0], 5, 5);
        assert_eq!(snapshot[0].shape, Shape::rect_from_diagonal(0, 0, 10, 10));

        canvas.restore(snapshot);
        assert_eq!(canvas.shapes[0].shape, Shape::rect_from_diagonal(0, 0, 10, 10));
    }

    #[test]
    fn bounds_of_unions_selection() {
        let mut canvas = Canvas::new();
        canvas.add_shape(rect(0, 0, 10, 10));
        canvas.add_shape(rect(30, 40, 50, 60));
        assert_eq!(
            canvas.bounds_of(&[0, 1]),
            Some(Rect::from_diagonal(0, 0, 50, 60))
        );
        assert_eq!(canvas.bounds_of(&[]), None);
    }
}
