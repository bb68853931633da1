/// Shape data parser for the line-oriented sample format
///
/// Each line of a shape file is either a jump marker (first character `J`,
/// lifting the pen between sub-paths) or three whitespace-separated floats
/// `x y z` in world coordinates. There is no header and no point count.
use nom::{
    character::complete::{multispace0, multispace1},
    number::complete::float,
    IResult,
};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

use crate::path::{PathElement, PenPath};

/// Destination viewport for the world-to-screen normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Depth reuses the width extent; the screen has no depth axis of its
    /// own.
    pub fn depth(&self) -> f32 {
        self.width
    }
}

/// Failure to interpret a single sample line. The loader reports these and
/// skips the line; they never abort a load.
#[derive(Debug, Error, PartialEq)]
pub enum LineError {
    #[error("expected `x y z` coordinates, got {0:?}")]
    Malformed(String),
}

enum Line {
    Jump,
    Sample(f32, f32, f32),
}

fn parse_line(line: &str) -> Result<Line, LineError> {
    if line.trim_start().starts_with('J') {
        return Ok(Line::Jump);
    }
    match parse_triple(line) {
        Ok((_, (x, y, z))) => Ok(Line::Sample(x, y, z)),
        Err(_) => Err(LineError::Malformed(line.to_string())),
    }
}

fn parse_triple(input: &str) -> IResult<&str, (f32, f32, f32)> {
    let (input, _) = multispace0(input)?;
    let (input, x) = float(input)?;
    let (input, _) = multispace1(input)?;
    let (input, y) = float(input)?;
    let (input, _) = multispace1(input)?;
    let (input, z) = float(input)?;
    Ok((input, (x, y, z)))
}

/// Map a world-space sample into screen space. The world is a cube of side
/// `world_size` centered on the origin; each axis is shifted to base zero and
/// scaled to the viewport extent.
fn normalize(x: f32, y: f32, z: f32, world_size: f32, viewport: Viewport) -> PathElement {
    let half = world_size / 2.0;
    PathElement::vertex(
        (x + half) * (viewport.width / world_size),
        (y + half) * (viewport.height / world_size),
        (z + half) * (viewport.depth() / world_size),
    )
}

/// Load a pen path from a line-oriented reader, normalizing every sample
/// into screen space and appending the trailing reference vertex.
///
/// Malformed lines are logged and skipped; read failures end the load early.
/// The result is always usable, in the worst case holding only the reference
/// vertex (which draws as nothing).
pub fn load_path<R: BufRead>(reader: R, world_size: f32, viewport: Viewport) -> PenPath {
    let mut path = PenPath::new();

    for (row, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                log::error!("shape data unreadable at line {}: {}", row + 1, err);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(&line) {
            Ok(Line::Jump) => path.push(PathElement::PenUp),
            Ok(Line::Sample(x, y, z)) => path.push(normalize(x, y, z, world_size, viewport)),
            Err(err) => log::warn!("skipping line {}: {}", row + 1, err),
        }
    }

    // Reference vertex at the origin; trimmed off again before drawing.
    path.push(PathElement::vertex(0.0, 0.0, 0.0));
    path
}

/// Load a pen path from a file on disk.
///
/// An unopenable file yields the empty shape (reference vertex only) with a
/// logged diagnostic; transforms and drawing then degrade to no-ops.
pub fn load_path_from_file(
    path: &Path,
    world_size: f32,
    viewport: Viewport,
) -> PenPath {
    match File::open(path) {
        Ok(file) => load_path(BufReader::new(file), world_size, viewport),
        Err(err) => {
            log::error!("could not open shape data {}: {}", path.display(), err);
            let mut empty = PenPath::new();
            empty.push(PathElement::vertex(0.0, 0.0, 0.0));
            empty
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;
    use std::io::Cursor;

    const TOLERANCE: f32 = 1e-4;

    fn vertex_at(path: &PenPath, index: usize) -> Point3<f32> {
        *path.elements[index].as_vertex().expect("vertex expected")
    }

    #[test]
    fn loads_samples_markers_and_reference() {
        let data = "0 0 0\nJ\n100 0 0\n";
        let path = load_path(Cursor::new(data), 200.0, Viewport::new(100.0, 100.0));

        assert_eq!(path.len(), 4);
        assert!((vertex_at(&path, 0) - Point3::new(50.0, 50.0, 50.0)).norm() < TOLERANCE);
        assert!(path.elements[1].is_pen_up());
        assert!((vertex_at(&path, 2) - Point3::new(100.0, 50.0, 50.0)).norm() < TOLERANCE);
        assert_eq!(vertex_at(&path, 3), Point3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn world_center_maps_to_viewport_center() {
        let data = "0 0 0\n";
        let path = load_path(Cursor::new(data), 10000.0, Viewport::new(640.0, 480.0));

        // Depth uses the width extent.
        assert!((vertex_at(&path, 0) - Point3::new(320.0, 240.0, 320.0)).norm() < TOLERANCE);
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let data = "-5000 -5000 -5000\nnot a sample\n5000 5000 5000\n";
        let path = load_path(Cursor::new(data), 10000.0, Viewport::new(100.0, 100.0));

        assert_eq!(path.len(), 3);
        assert!((vertex_at(&path, 0) - Point3::new(0.0, 0.0, 0.0)).norm() < TOLERANCE);
        assert!((vertex_at(&path, 1) - Point3::new(100.0, 100.0, 100.0)).norm() < TOLERANCE);
    }

    #[test]
    fn truncated_sample_is_malformed() {
        assert!(matches!(parse_line("1.0 2.0"), Err(LineError::Malformed(_))));
        assert!(matches!(parse_line("J"), Ok(Line::Jump)));
        assert!(matches!(parse_line("  1 2 3"), Ok(Line::Sample(..))));
    }

    #[test]
    fn empty_source_yields_reference_only() {
        let path = load_path(Cursor::new(""), 10000.0, Viewport::new(100.0, 100.0));
        assert_eq!(path.len(), 1);
        assert_eq!(vertex_at(&path, 0), Point3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn missing_file_yields_reference_only() {
        let path = load_path_from_file(
            Path::new("no/such/shape.dat"),
            10000.0,
            Viewport::new(100.0, 100.0),
        );
        assert_eq!(path.len(), 1);
    }
}
