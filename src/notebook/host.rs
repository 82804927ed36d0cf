//! # Host Bridge
//!
//! The host application injects exactly two capabilities: the user-data path
//! and a structured logger. Everything else the notebook needs it does itself.
//!
//! [`HostBridge`] is that contract as a trait, so the API facade can run inside
//! a real host, inside the CLI ([`StandaloneHost`]), or inside tests.

use directories::ProjectDirs;
use serde_json::Value;
use std::path::PathBuf;

/// Environment variable consulted by [`StandaloneHost`] before the OS data dir.
pub const USER_DATA_ENV: &str = "NOTEBOOK_USER_DATA";

/// Capabilities supplied by the host application.
pub trait HostBridge {
    /// The host's user-data directory, if it can provide one.
    ///
    /// `None` (or an empty path) makes the path resolver fall back to
    /// [`crate::paths::FALLBACK_USER_DATA`].
    fn user_data_path(&self) -> Option<PathBuf>;

    /// Forward an informational message with structured metadata to the host log.
    fn log_info(&self, message: &str, meta: &Value);
}

/// Host used when the notebook runs on its own (the CLI).
///
/// User-data resolution order:
/// 1. An explicit override (`--user-data`)
/// 2. `NOTEBOOK_USER_DATA`
/// 3. The OS data directory for `notebook` (via `directories`)
#[derive(Debug, Clone, Default)]
pub struct StandaloneHost {
    user_data: Option<PathBuf>,
}

impl StandaloneHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user_data(mut self, path: impl Into<PathBuf>) -> Self {
        self.user_data = Some(path.into());
        self
    }
}

impl HostBridge for StandaloneHost {
    fn user_data_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.user_data {
            return Some(path.clone());
        }
        if let Some(path) = std::env::var_os(USER_DATA_ENV) {
            if !path.is_empty() {
                return Some(PathBuf::from(path));
            }
        }
        ProjectDirs::from("com", "naimo", "notebook").map(|dirs| dirs.data_dir().to_path_buf())
    }

    fn log_info(&self, message: &str, meta: &Value) {
        tracing::info!(meta = %meta, "{}", message);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;

    /// Host with a fixed user-data path that records log calls.
    #[derive(Default)]
    pub struct RecordingHost {
        pub user_data: Option<PathBuf>,
        pub logs: RefCell<Vec<(String, Value)>>,
    }

    impl RecordingHost {
        pub fn at(path: impl Into<PathBuf>) -> Self {
            Self {
                user_data: Some(path.into()),
                logs: RefCell::new(Vec::new()),
            }
        }
    }

    impl HostBridge for RecordingHost {
        fn user_data_path(&self) -> Option<PathBuf> {
            self.user_data.clone()
        }

        fn log_info(&self, message: &str, meta: &Value) {
            self.logs
                .borrow_mut()
                .push((message.to_string(), meta.clone()));
        }
    }
}
