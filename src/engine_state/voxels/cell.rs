//! # Cell Module
//!
//! The unit voxel slot of the grid and the packed color it may carry.

use cgmath::Vector3;

use crate::error::{Error, Result};

/// Integer triple used both as absolute grid coordinates and as relative offsets.
pub type Vector3D = Vector3<i32>;

/// A 24-bit RGB color packed as `0xRRGGBB`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    /// Parses a hex string such as `"ff8800"`, with an optional `#` or `0x` prefix.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let trimmed = hex
            .trim()
            .trim_start_matches('#')
            .trim_start_matches("0x");
        match u32::from_str_radix(trimmed, 16) {
            Ok(value) if value <= 0xFF_FF_FF => Ok(Color(value)),
            _ => Err(Error::InvalidColor(hex.to_string())),
        }
    }

    /// Splits the color into its red, green and blue bytes.
    pub fn channels(&self) -> [u8; 3] {
        [
            ((self.0 >> 16) & 0xFF) as u8,
            ((self.0 >> 8) & 0xFF) as u8,
            (self.0 & 0xFF) as u8,
        ]
    }
}

/// One voxel slot of the grid.
///
/// A cell exists for every grid coordinate for the lifetime of the grid. Its
/// identity is purely positional; only `occupied` and `color` ever change.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    /// Absolute grid coordinate of this cell.
    pub location: Vector3D,
    /// Whether a locked piece fills this slot.
    pub occupied: bool,
    /// Color copied from the piece that filled this slot.
    pub color: Option<Color>,
}

impl Cell {
    /// Creates an empty cell at `location`.
    pub fn empty(location: Vector3D) -> Self {
        Cell {
            location,
            occupied: false,
            color: None,
        }
    }

    /// Copies the contents (but not the location) of another cell.
    pub fn copy_contents_from(&mut self, other: &Cell) {
        self.occupied = other.occupied;
        self.color = other.color;
    }

    /// Resets the cell to unoccupied and uncolored.
    pub fn clear(&mut self) {
        self.occupied = false;
        self.color = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colors_with_prefixes() {
        assert_eq!(Color::from_hex("ff8800").unwrap(), Color(0xFF8800));
        assert_eq!(Color::from_hex("#00ff00").unwrap(), Color(0x00FF00));
        assert_eq!(Color::from_hex("0x0000ff").unwrap(), Color(0x0000FF));
    }

    #[test]
    fn rejects_values_wider_than_24_bits() {
        assert!(Color::from_hex("1000000").is_err());
        assert!(Color::from_hex("purple").is_err());
    }

    #[test]
    fn splits_channels() {
        assert_eq!(Color(0x12_34_56).channels(), [0x12, 0x34, 0x56]);
    }
}
