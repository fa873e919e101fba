//! # Bloktris Entry Point
//!
//! Native entry point. It calls into the library's `run()` function.
//!
//! For web applications, see the `run_web()` function in the library.
//!
//! ## Usage
//!
//! ```bash
//! BLOKTRIS_CONFIG=bloktris.json cargo run --release
//! ```

#[cfg(not(target_family = "wasm"))]
fn main() {
    if let Err(err) = bloktris::run() {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

#[cfg(target_family = "wasm")]
fn main() {}
