//! Mesh data structures for voxel surfaces.
//!
//! A [`Mesh`] is a set of plain geometry buffers (positions, normals, colors and
//! triangle indices). It owns no graphics-API resources; the renderer decides
//! when to upload and release them.

use crate::engine_state::rendering::Vertex;
use crate::engine_state::voxels::cell::Vector3D;

use super::face::CellSide;

/// Triangulated surface with four shared vertices per quad.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    pub positions: Vec<[i32; 3]>,
    pub normals: Vec<[i32; 3]>,
    pub colors: Vec<[u8; 3]>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the quad covering `side` of the unit cell whose minimum corner is `origin`.
    pub fn add_face(&mut self, origin: Vector3D, side: CellSide, color: [u8; 3]) {
        let first = self.positions.len() as u32;
        let normal = side.normal();

        for corner in side.corners() {
            self.positions.push([
                origin.x + corner[0],
                origin.y + corner[1],
                origin.z + corner[2],
            ]);
            self.normals.push([normal.x, normal.y, normal.z]);
            self.colors.push(color);
        }

        self.indices.extend_from_slice(&Self::face_indices(first));
    }

    /// Two triangles over the four vertices starting at `first`.
    pub fn face_indices(first: u32) -> [u32; 6] {
        [first, first + 1, first + 2, first + 2, first + 1, first + 3]
    }

    pub fn face_count(&self) -> usize {
        self.indices.len() / 6
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Interleaves the buffers into GPU vertices.
    pub fn vertices(&self) -> Vec<Vertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .zip(&self.colors)
            .map(|((position, normal), color)| Vertex::new(*position, *normal, *color))
            .collect()
    }

    /// Vertex bytes ready for a buffer upload.
    pub fn vertex_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.vertices()).to_vec()
    }

    /// Index bytes ready for a buffer upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
