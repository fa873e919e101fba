//! # Commands
//!
//! The closed set of player intents the input adapter feeds into the game.

use cgmath::Vector3;

use crate::engine_state::voxels::cell::Vector3D;

/// Rotation angle of a single command, in degrees.
pub const QUARTER_TURN: i32 = 90;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// A discrete player command.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// One unit step on x or z, never both and never y.
    Translate { dx: i32, dz: i32 },
    /// A quarter turn about one axis. `sign` is `1` or `-1`.
    Rotate { axis: Axis, sign: i32 },
}

impl Command {
    /// Euler angles (degrees) for a rotate command.
    pub fn rotation_angle(axis: Axis, sign: i32) -> Vector3D {
        let degrees = sign.signum() * QUARTER_TURN;
        match axis {
            Axis::X => Vector3::new(degrees, 0, 0),
            Axis::Y => Vector3::new(0, degrees, 0),
            Axis::Z => Vector3::new(0, 0, degrees),
        }
    }
}
