//! # Piece Module
//!
//! A rigid cluster of occupied voxels that can be translated horizontally,
//! dropped one step at a time, and rotated about its pivot.
//!
//! ## Coordinates
//!
//! Cells are stored in *local* coordinates. The world position of a cell is
//! `location + cell`. Translation only touches `location`, so the cached bounds
//! stay valid; rotation rewrites the local cells and recomputes the bounds.

use cgmath::Vector3;

use crate::engine_state::voxels::cell::{Color, Vector3D};
use crate::error::{Error, Result};

pub mod factory;
pub mod rotation;
pub mod template;

use template::PieceTemplate;

/// A movable group of filled cells with a pending world position.
#[derive(Clone, Debug, PartialEq)]
pub struct Piece {
    /// Name of the template this piece was sampled from.
    pub name: String,
    /// Occupied cells in local space. The count never changes after construction.
    cells: Vec<Vector3D>,
    /// Pivot for rotation, in local space.
    center: Vector3D,
    /// World-space origin of the local frame.
    pub location: Vector3D,
    lower_bound: Vector3D,
    upper_bound: Vector3D,
    color: Color,
}

impl Piece {
    /// Creates a piece whose pivot lands on `spawn_location`.
    ///
    /// # Errors
    /// [`Error::EmptyShape`] if `cells` is empty.
    pub fn new(
        name: &str,
        cells: Vec<Vector3D>,
        center: Vector3D,
        spawn_location: Vector3D,
        color: Color,
    ) -> Result<Self> {
        let (lower_bound, upper_bound) =
            rotation::bounds(&cells).ok_or_else(|| Error::EmptyShape(name.to_string()))?;

        Ok(Piece {
            name: name.to_string(),
            cells,
            center,
            location: spawn_location - center,
            lower_bound,
            upper_bound,
            color,
        })
    }

    /// Instantiates a template at `spawn_location`.
    ///
    /// Templates never hold an empty volume, so this cannot fail.
    pub fn from_template(template: &PieceTemplate, spawn_location: Vector3D) -> Self {
        let cells = template.occupied_cells();
        let (lower_bound, upper_bound) = rotation::bounds(&cells)
            .unwrap_or((Vector3::new(0, 0, 0), Vector3::new(0, 0, 0)));

        Piece {
            name: template.name().to_string(),
            cells,
            center: template.center(),
            location: spawn_location - template.center(),
            lower_bound,
            upper_bound,
            color: template.color(),
        }
    }

    pub fn cells(&self) -> &[Vector3D] {
        &self.cells
    }

    pub fn center(&self) -> Vector3D {
        self.center
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Lowest local coordinate of any cell on each axis.
    pub fn lower_bound(&self) -> Vector3D {
        self.lower_bound
    }

    /// Highest local coordinate of any cell on each axis.
    pub fn upper_bound(&self) -> Vector3D {
        self.upper_bound
    }

    /// World-space coordinates of every occupied cell.
    pub fn world_cells(&self) -> impl Iterator<Item = Vector3D> + '_ {
        self.cells.iter().map(move |cell| self.location + *cell)
    }

    /// Whether the local coordinate `cell` belongs to this piece.
    pub fn occupies_local(&self, cell: Vector3D) -> bool {
        self.cells.contains(&cell)
    }

    /// Moves the piece on the horizontal plane. Vertical motion belongs to [`Piece::tick`].
    pub fn translate(&mut self, dx: i32, dz: i32) {
        self.location.x += dx;
        self.location.z += dz;
    }

    /// One gravity step. Does nothing once the bottom of the piece rests on `y == 0`.
    pub fn tick(&mut self) {
        if self.location.y + self.lower_bound.y <= 0 {
            return;
        }

        self.location.y -= 1;
    }

    /// Rotates every cell about the pivot by Euler angles in degrees (`Rz * Ry * Rx`).
    ///
    /// Results are rounded onto the lattice, so only right-angle rotations are
    /// exactly reversible.
    pub fn rotate(&mut self, angle: Vector3D) {
        let rotation = rotation::rotation_matrix(angle);
        for cell in self.cells.iter_mut() {
            *cell = rotation::rotate_about(*cell, self.center, &rotation);
        }

        if let Some((lower, upper)) = rotation::bounds(&self.cells) {
            self.lower_bound = lower;
            self.upper_bound = upper;
        }
    }

    /// World-space position of the lowest cell layer.
    pub fn bottom(&self) -> i32 {
        self.location.y + self.lower_bound.y
    }

    /// Size of the bounding box on each axis.
    pub fn extent(&self) -> Vector3D {
        self.upper_bound - self.lower_bound + Vector3::new(1, 1, 1)
    }
}
