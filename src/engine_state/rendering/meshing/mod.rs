//! Surface extraction for pieces and the grid.
//!
//! Both extractors walk every occupied cell and emit a quad for each of its six
//! faces unless the neighbouring cell across that face is also occupied. Faces
//! between adjacent cells are culled, leaving only the exposed surface.
//!
//! # Usage
//! ```ignore
//! let piece_mesh = meshing::piece_mesh(game.active_piece());
//! let grid_mesh = meshing::grid_mesh(game.grid());
//! renderer.upload(&piece_mesh.vertex_bytes(), piece_mesh.index_bytes());
//! ```
//!
//! Meshes must be rebuilt whenever cell geometry changes: after a rotation for
//! the piece, and after a lock or layer clear for the grid.

mod face;
mod mesh;

pub use face::CellSide;
pub use mesh::Mesh;

use crate::engine_state::voxels::{grid::VoxelGrid, piece::Piece};

/// Exposed surface of a piece, in world space, colored with the piece color.
pub fn piece_mesh(piece: &Piece) -> Mesh {
    let mut mesh = Mesh::new();
    let color = piece.color().channels();

    for cell in piece.cells() {
        for side in CellSide::all() {
            if piece.occupies_local(*cell + side.normal()) {
                continue;
            }
            mesh.add_face(piece.location + *cell, side, color);
        }
    }

    mesh
}

/// Exposed surface of every occupied grid cell, colored per cell.
///
/// Faces on the boundary of the grid are always emitted. Occupied cells without
/// a color render black.
pub fn grid_mesh(grid: &VoxelGrid) -> Mesh {
    let mut mesh = Mesh::new();

    for cell in grid.cells().filter(|cell| cell.occupied) {
        let color = cell.color.map_or([0, 0, 0], |color| color.channels());
        for side in CellSide::all() {
            if grid.is_occupied(cell.location + side.normal()) {
                continue;
            }
            mesh.add_face(cell.location, side, color);
        }
    }

    mesh
}

#[cfg(test)]
mod tests {
    use cgmath::Vector3;

    use super::*;
    use crate::engine_state::voxels::cell::Color;

    fn piece(cells: Vec<Vector3<i32>>) -> Piece {
        Piece::new(
            "test",
            cells,
            Vector3::new(0, 0, 0),
            Vector3::new(5, 5, 5),
            Color(0x102030),
        )
        .unwrap()
    }

    #[test]
    fn single_cell_has_six_faces() {
        let mesh = piece_mesh(&piece(vec![Vector3::new(0, 0, 0)]));
        assert_eq!(mesh.face_count(), 6);
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.indices.len(), 36);
        assert!(mesh.colors.iter().all(|c| *c == [0x10, 0x20, 0x30]));
    }

    #[test]
    fn shared_faces_are_culled() {
        let mesh = piece_mesh(&piece(vec![
            Vector3::new(0, 0, 0),
            Vector3::new(1, 0, 0),
            Vector3::new(2, 0, 0),
        ]));
        // 3 cells * 6 faces - 2 shared pairs * 2 faces
        assert_eq!(mesh.face_count(), 14);
    }

    #[test]
    fn piece_mesh_is_in_world_space() {
        let mesh = piece_mesh(&piece(vec![Vector3::new(0, 0, 0)]));
        for position in &mesh.positions {
            for axis in 0..3 {
                assert!((5..=6).contains(&position[axis]));
            }
        }
    }

    #[test]
    fn grid_mesh_culls_between_cells_and_uses_cell_colors() {
        let mut grid = VoxelGrid::new(Vector3::new(3, 3, 3)).unwrap();
        grid.fill(Vector3::new(0, 0, 0), Some(Color(0xFF0000)));
        grid.fill(Vector3::new(0, 1, 0), Some(Color(0x00FF00)));
        grid.fill(Vector3::new(2, 2, 2), None);

        let mesh = grid_mesh(&grid);

        assert_eq!(mesh.face_count(), 10 + 6);
        assert!(mesh.colors.contains(&[0xFF, 0, 0]));
        assert!(mesh.colors.contains(&[0, 0xFF, 0]));
        assert!(mesh.colors.contains(&[0, 0, 0]));
        assert_eq!(mesh.vertices().len(), mesh.vertex_count());
        assert_eq!(mesh.vertex_bytes().len(), mesh.vertex_count() * 28);
    }

    #[test]
    fn empty_grid_has_empty_mesh() {
        let grid = VoxelGrid::new(Vector3::new(2, 2, 2)).unwrap();
        assert!(grid_mesh(&grid).is_empty());
    }
}
