//! # Configuration
//!
//! Game settings read from an optional JSON file. Every field has a default, so
//! a partial file (or no file at all) is valid.
//!
//! The file is named by the `BLOKTRIS_CONFIG` environment variable:
//!
//! ```json
//! {
//!     "grid_size": [6, 14, 6],
//!     "tick_interval_ms": 800,
//!     "seed": 42
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use cgmath::Vector3;
use log::info;
use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::engine_state::voxels::{
    cell::Vector3D, game::Game, grid::VoxelGrid, piece::template::PieceCatalog,
};
use crate::error::{Error, Result};

/// Environment variable holding the path of the config file.
pub const CONFIG_ENV_VAR: &str = "BLOKTRIS_CONFIG";

fn default_grid_size() -> [i32; 3] {
    [6, 14, 6]
}

fn default_queue_length() -> usize {
    3
}

fn default_tick_interval_ms() -> u64 {
    1000
}

fn default_key_repeat_ms() -> u64 {
    150
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameConfig {
    /// Width, height and depth of the grid.
    #[serde(default = "default_grid_size")]
    pub grid_size: [i32; 3],
    /// Pivot position of new pieces. Defaults to the top center of the grid.
    #[serde(default)]
    pub spawn_location: Option<[i32; 3]>,
    /// Upcoming pieces kept in the queue.
    #[serde(default = "default_queue_length")]
    pub queue_length: usize,
    /// Period of the gravity tick.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    /// Repeat period of held movement keys.
    #[serde(default = "default_key_repeat_ms")]
    pub key_repeat_ms: u64,
    /// Seed for piece selection. Absent means a fresh seed every run.
    #[serde(default)]
    pub seed: Option<u64>,
    /// JSON piece catalog. Absent means the built-in catalog.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: default_grid_size(),
            spawn_location: None,
            queue_length: default_queue_length(),
            tick_interval_ms: default_tick_interval_ms(),
            key_repeat_ms: default_key_repeat_ms(),
            seed: None,
            catalog_path: None,
        }
    }
}

impl GameConfig {
    /// Loads the file named by [`CONFIG_ENV_VAR`], or the defaults if it is unset.
    pub fn load() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::from_path(Path::new(&path)),
            None => {
                info!("{} not set, using default configuration", CONFIG_ENV_VAR);
                Ok(Self::default())
            }
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| Error::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Loading configuration from {}", path.display());
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        VoxelGrid::cell_count(self.grid_size())?;
        if self.queue_length == 0 {
            return Err(Error::InvalidQueueLength);
        }
        Ok(())
    }

    pub fn grid_size(&self) -> Vector3D {
        let [x, y, z] = self.grid_size;
        Vector3::new(x, y, z)
    }

    /// Configured spawn point, or the top center of the grid.
    pub fn spawn_location(&self) -> Vector3D {
        match self.spawn_location {
            Some([x, y, z]) => Vector3::new(x, y, z),
            None => {
                let size = self.grid_size();
                Vector3::new(size.x / 2, (size.y - 2).max(0), size.z / 2)
            }
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn key_repeat(&self) -> Duration {
        Duration::from_millis(self.key_repeat_ms)
    }

    /// Reads the configured catalog, or the built-in one.
    pub fn load_catalog(&self) -> Result<PieceCatalog> {
        match &self.catalog_path {
            Some(path) => {
                let json = fs::read_to_string(path).map_err(|source| Error::ConfigIo {
                    path: path.clone(),
                    source,
                })?;
                PieceCatalog::from_json(&json)
            }
            None => PieceCatalog::builtin(),
        }
    }

    /// Random source for piece selection.
    pub fn rng(&self) -> fastrand::Rng {
        match self.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        }
    }

    /// Builds a game from this configuration.
    pub fn build_game(&self) -> Result<Game> {
        self.validate()?;
        let catalog = Arc::new(self.load_catalog()?);
        info!("Loaded {} piece templates", catalog.len());
        Game::new(
            self.grid_size(),
            self.spawn_location(),
            self.queue_length,
            catalog,
            self.rng(),
        )
    }
}
