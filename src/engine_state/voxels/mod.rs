//! # Voxel Simulation
//!
//! The game-simulation core: the voxel grid, the falling piece, collision and
//! placement rules, rotation arithmetic, and layer clearing.
//!
//! ## Architecture
//!
//! * **Cell**: one voxel slot, occupied or empty, with an optional color
//! * **Piece**: a rigid cluster of cells that translates, falls and rotates
//! * **Grid**: the fixed-size field locked pieces are written into
//! * **Game**: owns the grid, the active piece, the queue and the score
//!
//! ## Data Flow
//!
//! 1. A fixed-period tick calls [`game::Game::tick`]
//! 2. The active piece either falls one layer or locks into the grid
//! 3. Full layers are removed and scored
//! 4. Player commands move or rotate the active piece between ticks
//!
//! ## Thread Safety
//!
//! Everything here is plain owned data mutated from a single thread. The
//! presentation layer reads it between ticks; nothing is shared across threads
//! except the immutable piece catalog.

pub mod cell;
pub mod game;
pub mod grid;
pub mod piece;
