#![cfg(not(target_arch = "wasm32"))]
#![warn(missing_docs)]

//! # Drift Map
//!
//! A Terminal User Interface (TUI) and command line for exploring how data
//! concepts drift across services. It draws the snapshots produced by
//! [`drift_view`] and feeds key presses back into its selection handlers.
//!
//! ## Usage
//!
//! Browse the built-in catalog interactively:
//!
//! ```bash
//! cargo run --bin drift-map -- browse
//! ```
//!
//! Print a snapshot of one version node:
//!
//! ```bash
//! cargo run --bin drift-map -- show --concept user_status --node "Service A:0"
//! ```
//!
//! Load your own catalog document:
//!
//! ```bash
//! cargo run --bin drift-map -- --catalog concepts.json list
//! ```
//!
//! ## Key Bindings
//!
//! - `q` or `Esc` - Quit the application
//! - `Up`/`Down` - Choose a concept (the top entry clears the selection)
//! - `Tab`/`Shift-Tab` - Move between service lanes
//! - `Left`/`Right` - Move between versions within a lane
//! - `Enter` - Show the details of the version under the cursor

mod cli;
pub use cli::*;

mod commands;
pub use commands::*;

mod config;
pub use config::*;

mod logging;
pub use logging::*;

mod state;
pub use state::*;

mod widgets;
pub use widgets::*;
