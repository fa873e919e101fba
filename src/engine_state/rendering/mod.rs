//! # Rendering Adapters
//!
//! The presentation-facing side of the simulation: surface extraction for the
//! active piece and the grid, and the vertex format a GPU renderer consumes.
//!
//! Nothing here holds graphics-API resources. [`SceneMeshes`] is extracted from
//! game state on request and handed to whoever owns the renderer; the bundled
//! window only shows the HUD in its title.

pub mod meshing;
mod vertex;

pub use vertex::Vertex;

use meshing::Mesh;

use crate::engine_state::voxels::game::Game;

/// Meshes for one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneMeshes {
    /// Surface of the falling piece.
    pub piece: Mesh,
    /// Surface of everything locked into the grid.
    pub grid: Mesh,
}

impl SceneMeshes {
    /// Extracts both surfaces from the current game state.
    pub fn from_game(game: &Game) -> Self {
        SceneMeshes {
            piece: meshing::piece_mesh(game.active_piece()),
            grid: meshing::grid_mesh(game.grid()),
        }
    }

    /// Rebuilds only the piece surface, for moves that leave the grid untouched.
    pub fn refresh_piece(&mut self, game: &Game) {
        self.piece = meshing::piece_mesh(game.active_piece());
    }

    pub fn face_count(&self) -> usize {
        self.piece.face_count() + self.grid.face_count()
    }
}
