//! Application orchestration and main event loop.
//!
//! The app is structured around a single `App` struct that holds all UI
//! state; note state itself lives in the core `Workspace`. Events are
//! processed sequentially in the main loop.
//!
//! Submodules:
//! - state: App struct, screens and overlay types
//! - runner: terminal setup and the main loop
//! - input: keyboard event handling
//! - render: UI drawing

mod input;
mod render;
mod runner;
mod state;

pub use runner::run;
