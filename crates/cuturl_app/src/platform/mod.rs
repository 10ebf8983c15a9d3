//! Terminal front end: wires the core state machine to the engine, storage and clipboard.
mod app;
pub mod cli;
mod clipboard;
mod commands;
mod effects;
mod logging;
mod render;

pub use app::run_app;
