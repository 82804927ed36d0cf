//! # CLI Layer
//!
//! One client of the notebook API. This is the only place that parses
//! arguments, reads stdin, prints, or decides exit codes.
//!
//! - [`setup`]: clap definitions
//! - [`commands`]: context setup and per-command handlers
//! - [`render`]: terminal and JSON output

mod commands;
mod render;
mod setup;

pub use commands::run;
