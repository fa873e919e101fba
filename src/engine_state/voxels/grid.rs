//! # Grid Module
//!
//! The fixed-size voxel field pieces lock into.
//!
//! ## Layout
//!
//! Cells live in one dense vector indexed `x + y * width + z * width * height`.
//! Every coordinate in `[0, size)` has exactly one cell for the lifetime of the
//! grid; cells are mutated in place, never reallocated.
//!
//! ## Layer Clearing
//!
//! A layer is a constant-`y` slice. It is full when every `(x, z)` cell in it is
//! occupied. Clearing scans from the top layer down: each full layer triggers one
//! shift of everything above it down by one, the top layer is emptied, and the
//! scan continues with the next layer below.

use cgmath::Vector3;

use crate::engine_state::voxels::cell::{Cell, Color, Vector3D};
use crate::error::{Error, Result};

/// Largest number of cells a grid may hold.
pub const MAX_CELLS: usize = 1 << 24;

/// Dense 3D array of cells.
#[derive(Clone, Debug, PartialEq)]
pub struct VoxelGrid {
    size: Vector3D,
    cells: Vec<Cell>,
}

impl VoxelGrid {
    /// Creates an empty grid.
    ///
    /// # Errors
    /// [`Error::InvalidGridSize`] if any axis is not positive or the grid would
    /// hold more than [`MAX_CELLS`] cells.
    pub fn new(size: Vector3D) -> Result<Self> {
        let count = Self::cell_count(size)?;

        let mut cells = Vec::with_capacity(count);
        for z in 0..size.z {
            for y in 0..size.y {
                for x in 0..size.x {
                    cells.push(Cell::empty(Vector3::new(x, y, z)));
                }
            }
        }

        Ok(VoxelGrid { size, cells })
    }

    /// Number of cells a grid of `size` holds, checked against [`MAX_CELLS`].
    pub fn cell_count(size: Vector3D) -> Result<usize> {
        let invalid = || Error::InvalidGridSize {
            x: size.x,
            y: size.y,
            z: size.z,
        };
        if size.x <= 0 || size.y <= 0 || size.z <= 0 {
            return Err(invalid());
        }

        (size.x as usize)
            .checked_mul(size.y as usize)
            .and_then(|count| count.checked_mul(size.z as usize))
            .filter(|count| *count <= MAX_CELLS)
            .ok_or_else(invalid)
    }

    pub fn size(&self) -> Vector3D {
        self.size
    }

    pub fn contains(&self, location: Vector3D) -> bool {
        (0..self.size.x).contains(&location.x)
            && (0..self.size.y).contains(&location.y)
            && (0..self.size.z).contains(&location.z)
    }

    fn index(&self, location: Vector3D) -> Option<usize> {
        if !self.contains(location) {
            return None;
        }
        Some(
            (location.x + location.y * self.size.x + location.z * self.size.x * self.size.y)
                as usize,
        )
    }

    /// The cell at `location`, or `None` if any axis is out of range.
    pub fn get_cell(&self, location: Vector3D) -> Option<&Cell> {
        self.index(location).map(|index| &self.cells[index])
    }

    pub fn get_cell_mut(&mut self, location: Vector3D) -> Option<&mut Cell> {
        self.index(location).map(move |index| &mut self.cells[index])
    }

    /// Out-of-range coordinates are never occupied.
    pub fn is_occupied(&self, location: Vector3D) -> bool {
        self.get_cell(location).is_some_and(|cell| cell.occupied)
    }

    /// Marks a cell as filled with `color`.
    ///
    /// Returns `false` and leaves the grid untouched if `location` is out of range.
    pub fn fill(&mut self, location: Vector3D, color: Option<Color>) -> bool {
        match self.get_cell_mut(location) {
            Some(cell) => {
                cell.occupied = true;
                cell.color = color;
                true
            }
            None => false,
        }
    }

    /// Iterates over every cell in storage order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Number of occupied cells in the whole grid.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.occupied).count()
    }

    /// Whether every `(x, z)` cell of layer `y` is occupied.
    pub fn is_layer_full(&self, y: i32) -> bool {
        if !(0..self.size.y).contains(&y) {
            return false;
        }
        (0..self.size.z).all(|z| (0..self.size.x).all(|x| self.is_occupied(Vector3::new(x, y, z))))
    }

    /// Moves every layer above `y` down by one, overwriting `y`, and empties the top layer.
    pub fn shift_down_onto(&mut self, y: i32) {
        for layer in y..self.size.y - 1 {
            for z in 0..self.size.z {
                for x in 0..self.size.x {
                    let (Some(below), Some(above)) = (
                        self.index(Vector3::new(x, layer, z)),
                        self.index(Vector3::new(x, layer + 1, z)),
                    ) else {
                        continue;
                    };
                    let source = self.cells[above];
                    self.cells[below].copy_contents_from(&source);
                }
            }
        }

        let top = self.size.y - 1;
        for z in 0..self.size.z {
            for x in 0..self.size.x {
                if let Some(cell) = self.get_cell_mut(Vector3::new(x, top, z)) {
                    cell.clear();
                }
            }
        }
    }

    /// Removes every full layer, top to bottom, and returns how many were removed.
    pub fn clear_full_layers(&mut self) -> u32 {
        let mut cleared = 0;
        for y in (0..self.size.y).rev() {
            if self.is_layer_full(y) {
                self.shift_down_onto(y);
                cleared += 1;
            }
        }
        cleared
    }
}
