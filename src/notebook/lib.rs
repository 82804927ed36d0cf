//! # Notebook Architecture
//!
//! Notebook is a **storage library for Markdown notes and pasted images** that
//! lives inside a host application's user-data directory. The CLI shipped with
//! it is one client; a desktop front end embedding the library is another.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - The bridged capability table                             │
//! │  - Resolves directories through the host, applies config    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/) + Path Resolution (paths.rs)        │
//! │  - Stateless file functions over notes/ and images/         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The host is injected through [`host::HostBridge`]: a user-data path and a
//! logger, nothing more.
//!
//! ## Key Principle: No Terminal I/O in Core
//!
//! From `api.rs` inward, code returns Rust values and emits `tracing` events.
//! It never prints and never exits.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`store`]: Note and image file operations
//! - [`paths`]: Notebook directory resolution
//! - [`host`]: Host capabilities and the standalone host
//! - [`model`]: `Note` and `Folder` records
//! - [`actions`]: Host-dispatched plugin actions
//! - [`config`]: Configuration management
//! - [`utility`]: Clock, text and fetch helpers
//! - [`logging`]: Subscriber setup for binaries
//! - [`error`]: Error types
//! - `cli`: Argument parsing and rendering for the binary (not part of the lib API)

pub mod actions;
pub mod api;
pub mod config;
pub mod error;
pub mod host;
pub mod logging;
pub mod model;
pub mod paths;
pub mod store;
pub mod utility;
