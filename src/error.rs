//! # Errors
//!
//! Construction-time failures: malformed piece catalogs, invalid configuration
//! and windowing setup.
//! Gameplay never produces an `Err`; illegal moves and out-of-range lookups are
//! reported through `bool` and `Option` return values instead.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while building a game.
#[derive(Debug, Error)]
pub enum Error {
    #[error("piece template `{0}` has no occupied cells")]
    EmptyShape(String),

    #[error("piece template `{0}` has rows of differing lengths")]
    RaggedShape(String),

    #[error("piece catalog is empty")]
    EmptyCatalog,

    #[error("invalid color `{0}`, expected a 24-bit hex value such as \"ff8800\"")]
    InvalidColor(String),

    #[error("grid size ({x}, {y}, {z}) must be positive on every axis and hold at most 16777216 cells")]
    InvalidGridSize { x: i32, y: i32, z: i32 },

    #[error("queue length must be at least 1")]
    InvalidQueueLength,

    #[error("could not read {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("event loop failed: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
}
