//! sidediff - compare two texts side by side in the terminal
//!
//! This library exposes modules for use in integration tests and benches.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod diff;
pub mod error;
pub mod input;
pub mod loader;
pub mod logging;
pub mod state;
pub mod stats;
pub mod terminal;
pub mod traits;
pub mod ui;
