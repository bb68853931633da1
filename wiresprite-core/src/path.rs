/// Path primitives for wireframe sprites
use nalgebra::Point3;

/// One element of a pen path: either a drawable vertex in screen space or a
/// pen lift separating disconnected sub-paths.
///
/// Pen lifts never participate in transform arithmetic and never have a line
/// drawn across them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathElement {
    Vertex(Point3<f32>),
    PenUp,
}

impl PathElement {
    pub fn vertex(x: f32, y: f32, z: f32) -> Self {
        Self::Vertex(Point3::new(x, y, z))
    }

    pub fn is_pen_up(&self) -> bool {
        matches!(self, Self::PenUp)
    }

    pub fn as_vertex(&self) -> Option<&Point3<f32>> {
        match self {
            Self::Vertex(point) => Some(point),
            Self::PenUp => None,
        }
    }
}

/// An ordered sequence of path elements; insertion order is draw order.
///
/// A loaded path always ends with one reference vertex at the origin,
/// appended by the loader and excluded from drawing by the projection
/// adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct PenPath {
    pub elements: Vec<PathElement>,
}

impl PenPath {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, element: PathElement) {
        self.elements.push(element);
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathElement> {
        self.elements.iter()
    }

    /// The pivot for scale and rotation: the element at index 1, read live.
    ///
    /// Returns `None` when the path is too short or when index 1 holds a pen
    /// lift, in which case pivot transforms skip the path entirely.
    pub fn pivot(&self) -> Option<Point3<f32>> {
        self.elements.get(1).and_then(|e| e.as_vertex()).copied()
    }
}

impl Default for PenPath {
    fn default() -> Self {
        Self::new()
    }
}
