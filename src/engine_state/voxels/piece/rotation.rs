//! # Rotation Module
//!
//! Euler rotation of integer voxel coordinates about a pivot.
//!
//! Angles are in degrees and composed as `R = Rz * Ry * Rx`. Each rotated
//! coordinate is rounded to the nearest integer, which is exact for multiples of
//! 90 degrees and lossy for anything else.

use cgmath::{Deg, Matrix3, Vector3};

use crate::engine_state::voxels::cell::Vector3D;

/// Builds the composed rotation matrix for the given Euler angles in degrees.
pub fn rotation_matrix(angle: Vector3D) -> Matrix3<f64> {
    Matrix3::from_angle_z(Deg(angle.z as f64))
        * Matrix3::from_angle_y(Deg(angle.y as f64))
        * Matrix3::from_angle_x(Deg(angle.x as f64))
}

/// Rotates `point` about `pivot` and snaps the result back onto the voxel lattice.
pub fn rotate_about(point: Vector3D, pivot: Vector3D, rotation: &Matrix3<f64>) -> Vector3D {
    let from_pivot = Vector3::new(
        (point.x - pivot.x) as f64,
        (point.y - pivot.y) as f64,
        (point.z - pivot.z) as f64,
    );
    let rotated = *rotation * from_pivot;

    Vector3::new(
        (rotated.x + pivot.x as f64).round() as i32,
        (rotated.y + pivot.y as f64).round() as i32,
        (rotated.z + pivot.z as f64).round() as i32,
    )
}

/// Tight axis-aligned bounds `(lower, upper)` of a non-empty set of cells.
///
/// Returns `None` for an empty slice.
pub fn bounds(cells: &[Vector3D]) -> Option<(Vector3D, Vector3D)> {
    let first = *cells.first()?;
    Some(cells.iter().skip(1).fold((first, first), |(lower, upper), cell| {
        (
            Vector3::new(lower.x.min(cell.x), lower.y.min(cell.y), lower.z.min(cell.z)),
            Vector3::new(upper.x.max(cell.x), upper.y.max(cell.y), upper.z.max(cell.z)),
        )
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_turn_about_y_maps_x_onto_negative_z() {
        let rotation = rotation_matrix(Vector3::new(0, 90, 0));
        let rotated = rotate_about(Vector3::new(1, 0, 0), Vector3::new(0, 0, 0), &rotation);
        assert_eq!(rotated, Vector3::new(0, 0, -1));
    }

    #[test]
    fn quarter_turn_about_z_maps_x_onto_y() {
        let rotation = rotation_matrix(Vector3::new(0, 0, 90));
        let rotated = rotate_about(Vector3::new(1, 0, 0), Vector3::new(0, 0, 0), &rotation);
        assert_eq!(rotated, Vector3::new(0, 1, 0));
    }

    #[test]
    fn rotation_respects_pivot() {
        let rotation = rotation_matrix(Vector3::new(180, 0, 0));
        let rotated = rotate_about(Vector3::new(2, 3, 1), Vector3::new(2, 2, 1), &rotation);
        assert_eq!(rotated, Vector3::new(2, 1, 1));
    }

    #[test]
    fn bounds_are_tight() {
        let cells = [
            Vector3::new(1, -2, 0),
            Vector3::new(-1, 4, 2),
            Vector3::new(0, 0, 5),
        ];
        assert_eq!(
            bounds(&cells),
            Some((Vector3::new(-1, -2, 0), Vector3::new(1, 4, 5)))
        );
        assert_eq!(bounds(&[]), None);
    }
}
