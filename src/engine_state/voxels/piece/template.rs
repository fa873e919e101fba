//! # Piece Template Module
//!
//! The static catalog of selectable shapes. Each template is a boolean volume,
//! a pivot and a color. The catalog is loaded once at startup (from JSON) and is
//! immutable afterwards; pieces are independent instances sampled from it.
//!
//! ## JSON Layout
//!
//! ```json
//! [
//!     {
//!         "name": "T",
//!         "dimensions": [[[0], [1], [0]], [[1], [1], [1]]],
//!         "center": [1, 1, 0],
//!         "colorHex": "aa00ff"
//!     }
//! ]
//! ```
//!
//! `dimensions` is indexed `[x][y][z]`. Entries may be `0`/`1` or booleans.

use bitvec::vec::BitVec;
use cgmath::Vector3;
use serde::Deserialize;

use crate::engine_state::voxels::cell::{Color, Vector3D};
use crate::error::{Error, Result};

/// Catalog shipped with the game.
const BUILTIN_CATALOG_JSON: &str = include_str!("../../../../assets/pieces.json");

/// One entry of the shape volume as written in JSON.
#[derive(Deserialize)]
#[serde(untagged)]
enum Occupancy {
    Flag(bool),
    Number(u8),
}

impl Occupancy {
    fn is_filled(&self) -> bool {
        match self {
            Occupancy::Flag(flag) => *flag,
            Occupancy::Number(value) => *value != 0,
        }
    }
}

#[derive(Deserialize)]
struct RawTemplate {
    #[serde(default)]
    name: String,
    dimensions: Vec<Vec<Vec<Occupancy>>>,
    center: [i32; 3],
    #[serde(rename = "colorHex")]
    color_hex: String,
}

/// A selectable shape: a boolean volume plus a pivot and a color.
///
/// Only [`PieceTemplate::from_volume`] builds one, so every template is
/// rectangular and has at least one filled cell.
#[derive(Clone, Debug, PartialEq)]
pub struct PieceTemplate {
    name: String,
    dimensions: Vector3<usize>,
    /// Filled flags in `x`, then `y`, then `z` nesting order (z varies fastest).
    volume: BitVec,
    center: Vector3D,
    color: Color,
}

impl PieceTemplate {
    /// Builds a template from a nested `[x][y][z]` volume.
    ///
    /// # Errors
    /// * [`Error::RaggedShape`] if rows along an axis differ in length
    /// * [`Error::EmptyShape`] if no entry is filled
    pub fn from_volume(
        name: &str,
        volume: &[Vec<Vec<bool>>],
        center: Vector3D,
        color: Color,
    ) -> Result<Self> {
        let size_x = volume.len();
        let size_y = volume.first().map_or(0, |plane| plane.len());
        let size_z = volume
            .first()
            .and_then(|plane| plane.first())
            .map_or(0, |row| row.len());

        let mut bits = BitVec::with_capacity(size_x * size_y * size_z);
        for plane in volume {
            if plane.len() != size_y {
                return Err(Error::RaggedShape(name.to_string()));
            }
            for row in plane {
                if row.len() != size_z {
                    return Err(Error::RaggedShape(name.to_string()));
                }
                bits.extend(row.iter().copied());
            }
        }

        if bits.not_any() {
            return Err(Error::EmptyShape(name.to_string()));
        }

        Ok(PieceTemplate {
            name: name.to_string(),
            dimensions: Vector3::new(size_x, size_y, size_z),
            volume: bits,
            center,
            color,
        })
    }

    fn from_raw(raw: RawTemplate) -> Result<Self> {
        let volume: Vec<Vec<Vec<bool>>> = raw
            .dimensions
            .iter()
            .map(|plane| {
                plane
                    .iter()
                    .map(|row| row.iter().map(Occupancy::is_filled).collect())
                    .collect()
            })
            .collect();
        let center = Vector3::new(raw.center[0], raw.center[1], raw.center[2]);
        let color = Color::from_hex(&raw.color_hex)?;
        Self::from_volume(&raw.name, &volume, center, color)
    }

    /// Human readable name, used in logs.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Extent of the volume on each axis.
    pub fn dimensions(&self) -> Vector3<usize> {
        self.dimensions
    }

    pub fn volume(&self) -> &BitVec {
        &self.volume
    }

    /// Pivot the piece rotates around, in local coordinates.
    pub fn center(&self) -> Vector3D {
        self.center
    }

    /// Color given to every piece sampled from this template.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Local coordinates of every filled entry of the volume.
    pub fn occupied_cells(&self) -> Vec<Vector3D> {
        let mut cells = Vec::new();
        for x in 0..self.dimensions.x {
            for y in 0..self.dimensions.y {
                for z in 0..self.dimensions.z {
                    let bit = (x * self.dimensions.y + y) * self.dimensions.z + z;
                    if self.volume[bit] {
                        cells.push(Vector3::new(x as i32, y as i32, z as i32));
                    }
                }
            }
        }
        cells
    }
}

/// The immutable set of shapes pieces are drawn from.
#[derive(Clone, Debug, PartialEq)]
pub struct PieceCatalog {
    templates: Vec<PieceTemplate>,
}

impl PieceCatalog {
    /// Wraps a list of templates.
    ///
    /// # Errors
    /// [`Error::EmptyCatalog`] if `templates` is empty.
    pub fn new(templates: Vec<PieceTemplate>) -> Result<Self> {
        if templates.is_empty() {
            return Err(Error::EmptyCatalog);
        }
        Ok(PieceCatalog { templates })
    }

    /// Parses a catalog from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: Vec<RawTemplate> = serde_json::from_str(json)?;
        let templates = raw
            .into_iter()
            .map(PieceTemplate::from_raw)
            .collect::<Result<Vec<_>>>()?;
        Self::new(templates)
    }

    /// The catalog bundled with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG_JSON)
    }

    pub fn templates(&self) -> &[PieceTemplate] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PieceTemplate> {
        self.templates.get(index)
    }
}
