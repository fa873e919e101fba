//! # Cell Faces
//!
//! The six axis-aligned faces of a unit voxel, with their outward normals and
//! the corner offsets of the quad that covers each face.

use cgmath::Vector3;

use crate::engine_state::voxels::cell::Vector3D;

/// Represents the six possible faces of a voxel cell.
///
/// The order is: [FRONT, BACK, BOTTOM, TOP, LEFT, RIGHT]
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum CellSide {
    /// The front face (facing positive Z)
    FRONT = 0,

    /// The back face (facing negative Z)
    BACK = 1,

    /// The bottom face (facing negative Y)
    BOTTOM = 2,

    /// The top face (facing positive Y)
    TOP = 3,

    /// The left face (facing negative X)
    LEFT = 4,

    /// The right face (facing positive X)
    RIGHT = 5,
}

impl CellSide {
    /// Returns an array containing all six faces in a consistent order.
    pub fn all() -> [CellSide; 6] {
        [
            CellSide::FRONT,
            CellSide::BACK,
            CellSide::BOTTOM,
            CellSide::TOP,
            CellSide::LEFT,
            CellSide::RIGHT,
        ]
    }

    /// Unit offset towards the neighbouring cell across this face.
    pub fn normal(&self) -> Vector3D {
        match self {
            CellSide::FRONT => Vector3::new(0, 0, 1),
            CellSide::BACK => Vector3::new(0, 0, -1),
            CellSide::BOTTOM => Vector3::new(0, -1, 0),
            CellSide::TOP => Vector3::new(0, 1, 0),
            CellSide::LEFT => Vector3::new(-1, 0, 0),
            CellSide::RIGHT => Vector3::new(1, 0, 0),
        }
    }

    /// Quad corners relative to the cell's minimum corner.
    ///
    /// Corners are ordered so that `(0, 1, 2)` and `(2, 1, 3)` are the two
    /// counter-clockwise triangles seen from outside the cell.
    pub fn corners(&self) -> [[i32; 3]; 4] {
        match self {
            CellSide::FRONT => [[0, 0, 1], [1, 0, 1], [0, 1, 1], [1, 1, 1]],
            CellSide::BACK => [[1, 0, 0], [0, 0, 0], [1, 1, 0], [0, 1, 0]],
            CellSide::BOTTOM => [[1, 0, 1], [0, 0, 1], [1, 0, 0], [0, 0, 0]],
            CellSide::TOP => [[0, 1, 1], [1, 1, 1], [0, 1, 0], [1, 1, 0]],
            CellSide::LEFT => [[0, 1, 0], [0, 0, 0], [0, 1, 1], [0, 0, 1]],
            CellSide::RIGHT => [[1, 1, 1], [1, 0, 1], [1, 1, 0], [1, 0, 0]],
        }
    }
}
