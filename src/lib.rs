#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Bloktris
//!
//! A three-dimensional falling-block puzzle. Pieces made of unit cubes fall
//! through a box-shaped grid, can be slid along x and z and turned a quarter
//! turn about any axis, and lock when they land. Every horizontal layer that
//! fills up is removed and the cells above it drop down.
//!
//! ## Key Modules
//!
//! * `engine_state` - The simulation (grid, pieces, scoring) and the views derived from it
//! * `application_state` - Window lifecycle and keyboard input
//! * `config` - JSON settings with defaults
//! * `error` - Construction-time failures
//!
//! ## Architecture
//!
//! The crate separates:
//! * Simulation state that owns every invariant (`engine_state::voxels`)
//! * Presentation adapters that read it (meshes, HUD)
//! * Platform glue that feeds it commands and timer ticks (native and web)
//!
//! ## Usage
//!
//! ```rust
//! use bloktris::{Command, GameConfig};
//!
//! let config = GameConfig { seed: Some(7), ..GameConfig::default() };
//! let mut game = config.build_game()?;
//! game.play();
//! game.apply(Command::Translate { dx: 1, dz: 0 });
//! let report = game.tick();
//! assert!(!report.overflowed);
//! # Ok::<(), bloktris::Error>(())
//! ```
//!
//! The windowed game is started with [`run`] natively, or `run_web` from
//! JavaScript on the web.

#[cfg(target_family = "wasm")]
use wasm_bindgen::prelude::wasm_bindgen;

use winit::event_loop::EventLoop;

use application_state::ApplicationState;

pub mod application_state;
pub mod config;
pub mod engine_state;
pub mod error;

pub use config::GameConfig;
pub use engine_state::voxels::{
    cell::{Cell, Color, Vector3D},
    game::{
        command::{Axis, Command},
        Game, GameStatus, TickReport,
    },
    grid::VoxelGrid,
    piece::{template::PieceCatalog, Piece},
};
pub use error::{Error, Result};

#[cfg(target_family = "wasm")]
const CANVAS_ID: &str = "wgpu-canvas";

fn init_logger() {
    cfg_if::cfg_if! {
        if #[cfg(target_family = "wasm")] {
            std::panic::set_hook(Box::new(console_error_panic_hook::hook));
            if let Err(err) = console_log::init_with_level(log::Level::Info) {
                web_sys::console::error_1(&format!("Couldn't initialize logger: {}", err).into());
            }
        } else {
            env_logger::Builder::new()
                .target(env_logger::Target::Stdout)
                .filter_level(log::LevelFilter::Info)
                .parse_env("RUST_LOG")
                .init();
        }
    }
    log::info!("Logger initialized");
}

/// Runs the windowed game until the window closes.
///
/// Settings come from the file named by `BLOKTRIS_CONFIG`, if set.
#[cfg(not(target_family = "wasm"))]
pub fn run() -> Result<()> {
    init_logger();

    let config = GameConfig::load()?;
    let event_loop = EventLoop::new()?;
    let mut state = ApplicationState::new(config);

    event_loop.run_app(&mut state)?;
    Ok(())
}

#[cfg(target_family = "wasm")]
#[wasm_bindgen]
pub fn run_web() {
    use winit::platform::web::EventLoopExtWebSys;

    init_logger();

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(err) => {
            log::error!("Couldn't create event loop: {}", err);
            return;
        }
    };

    event_loop.spawn_app(ApplicationState::new(GameConfig::default()));
}
