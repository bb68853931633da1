/// Affine transform kernel for pen paths
use nalgebra::{Matrix4, Vector3};

use crate::path::{PathElement, PenPath};

/// Apply one matrix stage to every vertex of the path. Pen lifts pass
/// through untouched; this is the single skip rule every transform shares.
fn apply_stage(path: &mut PenPath, stage: &Matrix4<f32>) {
    for element in path.elements.iter_mut() {
        if let PathElement::Vertex(point) = element {
            *point = stage.transform_point(point);
        }
    }
}

/// Apply a linear stage about the path's pivot: translate the pivot to the
/// origin, apply `stage`, translate back. The three stages run as three full
/// passes over the path so every family shares one code path and one skip
/// rule. Paths without a pivot are left unchanged.
fn apply_about_pivot(path: &mut PenPath, stage: &Matrix4<f32>) {
    let Some(pivot) = path.pivot() else {
        return;
    };
    apply_stage(path, &Matrix4::new_translation(&-pivot.coords));
    apply_stage(path, stage);
    apply_stage(path, &Matrix4::new_translation(&pivot.coords));
}

/// Move every vertex by the given delta.
pub fn translate(path: &mut PenPath, dx: f32, dy: f32, dz: f32) {
    let stage = Matrix4::new_translation(&Vector3::new(dx, dy, dz));
    apply_stage(path, &stage);
}

/// Uniformly scale the shape about its pivot. Factors below 1 zoom in,
/// above 1 zoom out; repeated application gives a smooth zoom.
pub fn scale(path: &mut PenPath, factor: f32) {
    apply_about_pivot(path, &Matrix4::new_scaling(factor));
}

/// Rotate the shape about the X axis through its pivot.
pub fn rotate_x(path: &mut PenPath, angle_deg: f32) {
    rotate(path, Vector3::x() * angle_deg.to_radians());
}

/// Rotate the shape about the Y axis through its pivot.
pub fn rotate_y(path: &mut PenPath, angle_deg: f32) {
    rotate(path, Vector3::y() * angle_deg.to_radians());
}

/// Rotate the shape about the Z axis through its pivot.
pub fn rotate_z(path: &mut PenPath, angle_deg: f32) {
    rotate(path, Vector3::z() * angle_deg.to_radians());
}

fn rotate(path: &mut PenPath, axis_angle: Vector3<f32>) {
    apply_about_pivot(path, &Matrix4::new_rotation(axis_angle));
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    const TOLERANCE: f32 = 1e-4;

    fn sample_path() -> PenPath {
        let mut path = PenPath::new();
        path.push(PathElement::vertex(10.0, 20.0, 30.0));
        path.push(PathElement::vertex(40.0, 50.0, 60.0)); // pivot
        path.push(PathElement::PenUp);
        path.push(PathElement::vertex(-5.0, 12.5, 0.0));
        path.push(PathElement::vertex(0.0, 0.0, 0.0));
        path
    }

    fn assert_paths_close(actual: &PenPath, expected: &PenPath) {
        assert_eq!(actual.len(), expected.len());
        for (lhs, rhs) in actual.iter().zip(expected.iter()) {
            match (lhs, rhs) {
                (PathElement::Vertex(p), PathElement::Vertex(q)) => {
                    assert!((p - q).norm() < TOLERANCE, "{p} != {q}");
                }
                (PathElement::PenUp, PathElement::PenUp) => {}
                _ => panic!("element kind mismatch"),
            }
        }
    }

    #[test]
    fn translate_then_inverse_returns_original() {
        let original = sample_path();
        let mut path = original.clone();

        translate(&mut path, 8.0, -3.0, 2.5);
        translate(&mut path, -8.0, 3.0, -2.5);

        assert_paths_close(&path, &original);
    }

    #[test]
    fn scale_then_inverse_returns_original() {
        let original = sample_path();
        let mut path = original.clone();

        scale(&mut path, 1.125);
        scale(&mut path, 1.0 / 1.125);

        assert_paths_close(&path, &original);
    }

    #[test]
    fn rotation_then_inverse_returns_original() {
        let rotations: [fn(&mut PenPath, f32); 3] = [rotate_x, rotate_y, rotate_z];
        for rotation in rotations {
            let original = sample_path();
            let mut path = original.clone();

            rotation(&mut path, 37.0);
            rotation(&mut path, -37.0);

            assert_paths_close(&path, &original);
        }
    }

    #[test]
    fn translate_moves_every_vertex() {
        let mut path = sample_path();
        translate(&mut path, 8.0, 0.0, 0.0);

        let expected = [
            Some(Point3::new(18.0, 20.0, 30.0)),
            Some(Point3::new(48.0, 50.0, 60.0)),
            None,
            Some(Point3::new(3.0, 12.5, 0.0)),
            Some(Point3::new(8.0, 0.0, 0.0)),
        ];
        for (element, want) in path.iter().zip(expected) {
            match want {
                Some(point) => {
                    assert!((element.as_vertex().unwrap() - point).norm() < TOLERANCE)
                }
                None => assert!(element.is_pen_up()),
            }
        }
    }

    #[test]
    fn pen_lifts_survive_every_transform() {
        let mut path = sample_path();

        translate(&mut path, 1.0, 2.0, 3.0);
        scale(&mut path, 2.0);
        rotate_x(&mut path, 45.0);
        rotate_y(&mut path, 45.0);
        rotate_z(&mut path, 45.0);

        assert!(path.elements[2].is_pen_up());
        assert_eq!(path.iter().filter(|e| e.is_pen_up()).count(), 1);
    }

    #[test]
    fn pivot_is_fixed_under_scale_and_rotation() {
        let pivot = sample_path().pivot().unwrap();

        let mut path = sample_path();
        scale(&mut path, 3.5);
        assert!((path.pivot().unwrap() - pivot).norm() < TOLERANCE);

        let mut path = sample_path();
        rotate_x(&mut path, 123.0);
        rotate_y(&mut path, -77.0);
        rotate_z(&mut path, 4.0);
        assert!((path.pivot().unwrap() - pivot).norm() < TOLERANCE);
    }

    #[test]
    fn rotation_honors_the_angle_parameter() {
        let mut path = PenPath::new();
        path.push(PathElement::vertex(2.0, 1.0, 0.0));
        path.push(PathElement::vertex(1.0, 1.0, 0.0)); // pivot

        // A quarter turn about Z maps the offset (1,0,0) to (0,1,0).
        rotate_z(&mut path, 90.0);

        let turned = path.elements[0].as_vertex().unwrap();
        assert!((turned - Point3::new(1.0, 2.0, 0.0)).norm() < TOLERANCE);
    }

    #[test]
    fn empty_path_is_a_noop() {
        let mut path = PenPath::new();
        translate(&mut path, 1.0, 1.0, 1.0);
        scale(&mut path, 2.0);
        rotate_z(&mut path, 90.0);
        assert!(path.is_empty());
    }

    #[test]
    fn pivot_transforms_skip_undersized_paths() {
        let mut path = PenPath::new();
        path.push(PathElement::vertex(1.0, 2.0, 3.0));

        let before = path.clone();
        scale(&mut path, 2.0);
        rotate_y(&mut path, 90.0);
        assert_eq!(path, before);
    }

    #[test]
    fn pivot_transforms_skip_paths_with_a_lifted_pivot() {
        let mut path = PenPath::new();
        path.push(PathElement::vertex(1.0, 2.0, 3.0));
        path.push(PathElement::PenUp);
        path.push(PathElement::vertex(4.0, 5.0, 6.0));

        let before = path.clone();
        scale(&mut path, 2.0);
        rotate_x(&mut path, 30.0);
        assert_eq!(path, before);

        // Translation needs no pivot and still applies.
        translate(&mut path, 1.0, 0.0, 0.0);
        assert!(
            (path.elements[0].as_vertex().unwrap() - Point3::new(2.0, 2.0, 3.0)).norm()
                < TOLERANCE
        );
    }
}
