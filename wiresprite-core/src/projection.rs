/// 2D segment emission for the draw pass
use nalgebra::Point2;

use crate::path::{PathElement, PenPath};

/// A single stroke between two screen-space endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point2<f32>,
    pub end: Point2<f32>,
}

impl Segment {
    pub fn new(start: Point2<f32>, end: Point2<f32>) -> Self {
        Self { start, end }
    }
}

/// Emit the drawable 2D segments for a path, in path order.
///
/// The trailing reference vertex is dropped before pairing, then each
/// adjacent vertex pair becomes one segment. A pair touching a pen lift
/// produces nothing, so sub-paths are never bridged by a stray line.
pub fn segments(path: &PenPath) -> Vec<Segment> {
    let end = path.len().saturating_sub(1);
    let drawable = &path.elements[..end];

    let mut segments = Vec::new();
    for pair in drawable.windows(2) {
        if let (PathElement::Vertex(a), PathElement::Vertex(b)) = (&pair[0], &pair[1]) {
            segments.push(Segment::new(
                Point2::new(a.x, a.y),
                Point2::new(b.x, b.y),
            ));
        }
    }
    segments
}
