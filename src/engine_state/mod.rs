//! # Engine State Module
//!
//! Everything that runs between input and presentation.
//!
//! ## Key Components
//!
//! * `EngineState` - Owns the game and keeps its derived views in step
//! * `voxels` - Grid, pieces, catalog and the simulation itself
//! * `rendering` - Surface extraction and the GPU vertex format
//! * `hud` - Score and level readout
//! * `timing` - The fixed-period gravity timer
//!
//! ## Architecture
//!
//! The simulation is single-threaded. Player commands and gravity ticks are
//! applied synchronously from the event loop, and the HUD is refreshed
//! immediately after each mutation, so readers never see a partial update.
//! Meshes are only marked stale and get extracted when a renderer asks.

use log::{debug, info};
use web_time::Instant;

use crate::config::GameConfig;
use crate::error::Result;

pub mod hud;
pub mod rendering;
pub mod timing;
pub mod voxels;

use hud::Hud;
use rendering::SceneMeshes;
use timing::TickTimer;
use voxels::game::{command::Command, Game, GameStatus};

/// The game plus the views derived from it.
///
/// # Examples
///
/// ```
/// use bloktris::{config::GameConfig, engine_state::EngineState};
/// use web_time::Instant;
///
/// let config = GameConfig { seed: Some(1), ..GameConfig::default() };
/// let mut engine = EngineState::new(&config, Instant::now()).unwrap();
/// engine.play(Instant::now());
/// engine.update(Instant::now());
/// println!("{}", engine.hud().title());
/// ```
pub struct EngineState {
    game: Game,
    timer: TickTimer,
    meshes: SceneMeshes,
    piece_stale: bool,
    grid_stale: bool,
    hud: Hud,
}

impl EngineState {
    /// Builds the game described by `config`, with the first tick due one period after `now`.
    pub fn new(config: &GameConfig, now: Instant) -> Result<Self> {
        let game = config.build_game()?;
        info!(
            "Engine ready: grid {:?}, tick every {:?}",
            game.grid().size(),
            config.tick_interval()
        );
        Ok(Self::from_game(game, TickTimer::new(config.tick_interval(), now)))
    }

    /// Wraps an existing game.
    pub fn from_game(game: Game, timer: TickTimer) -> Self {
        let hud = Hud::from_game(&game);
        Self {
            game,
            timer,
            meshes: SceneMeshes::default(),
            piece_stale: true,
            grid_stale: true,
            hud,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Surfaces for an external renderer to upload.
    ///
    /// Meshes are extracted on demand: only the parts changed since the last
    /// call are rebuilt, and nothing is built if no renderer asks.
    pub fn meshes(&mut self) -> &SceneMeshes {
        if self.grid_stale {
            self.meshes = SceneMeshes::from_game(&self.game);
        } else if self.piece_stale {
            self.meshes.refresh_piece(&self.game);
        }
        self.piece_stale = false;
        self.grid_stale = false;
        &self.meshes
    }

    /// Whether the next [`EngineState::meshes`] call has anything to rebuild.
    pub fn meshes_stale(&self) -> bool {
        self.piece_stale || self.grid_stale
    }

    pub fn hud(&self) -> &Hud {
        &self.hud
    }

    /// Starts or resumes play. The next tick is a full period away.
    pub fn play(&mut self, now: Instant) {
        self.game.play();
        self.timer.reset(now);
        self.hud.refresh(&self.game);
    }

    /// Toggles pause.
    pub fn pause(&mut self, now: Instant) {
        self.game.pause();
        self.timer.reset(now);
        self.hud.refresh(&self.game);
        info!("Game {:?}", self.game.status());
    }

    /// Applies one player command. Returns `true` if the piece moved.
    pub fn dispatch(&mut self, command: Command) -> bool {
        let moved = self.game.apply(command);
        if moved {
            self.piece_stale = true;
        } else {
            debug!("Rejected {:?}", command);
        }
        moved
    }

    /// Runs every gravity tick due by `now`. Returns `true` if the HUD changed.
    pub fn update(&mut self, now: Instant) -> bool {
        let due = self.timer.poll(now);
        if self.game.status() != GameStatus::Playing {
            return false;
        }

        for _ in 0..due {
            let report = self.game.tick();
            self.piece_stale = true;
            if report.locked || report.cleared > 0 {
                self.grid_stale = true;
            }
            if self.game.status() != GameStatus::Playing {
                break;
            }
        }

        self.hud.refresh(&self.game)
    }

    /// When the next tick is due, or `None` while the game is not running.
    pub fn next_deadline(&self) -> Option<Instant> {
        (self.game.status() == GameStatus::Playing).then(|| self.timer.next_deadline())
    }
}
