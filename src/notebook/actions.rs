//! # Plugin Actions
//!
//! The host dispatches commands to named actions and calls `on_enter` with
//! whatever parameters the command carried. The notebook registers a single
//! action, `hello`, which reports that the plugin is loaded.

use crate::error::{NotebookError, Result};
use crate::host::HostBridge;
use serde_json::{json, Value};
use std::collections::BTreeMap;

pub trait Action {
    fn on_enter(&self, host: &dyn HostBridge, params: &Value) -> Result<()>;
}

/// Logs the invocation and forwards "plugin loaded" to the host log.
pub struct HelloAction;

impl Action for HelloAction {
    fn on_enter(&self, host: &dyn HostBridge, params: &Value) -> Result<()> {
        tracing::info!(params = %params, "hello action triggered");
        host.log_info("plugin loaded", &json!({ "params": params }));
        Ok(())
    }
}

/// Name-to-action table the host dispatches through.
pub struct Actions {
    handlers: BTreeMap<&'static str, Box<dyn Action>>,
}

impl Actions {
    pub fn empty() -> Self {
        Self {
            handlers: BTreeMap::new(),
        }
    }

    pub fn register(mut self, name: &'static str, action: impl Action + 'static) -> Self {
        self.handlers.insert(name, Box::new(action));
        self
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.handlers.keys().copied()
    }

    pub fn dispatch(&self, name: &str, host: &dyn HostBridge, params: &Value) -> Result<()> {
        let action = self
            .handlers
            .get(name)
            .ok_or_else(|| NotebookError::UnknownAction(name.to_string()))?;
        action.on_enter(host, params)
    }
}

impl Default for Actions {
    fn default() -> Self {
        Self::empty().register("hello", HelloAction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::testing::RecordingHost;

    #[test]
    fn hello_logs_params_to_host() {
        let host = RecordingHost::default();
        Actions::default()
            .dispatch("hello", &host, &json!({ "source": "menu" }))
            .unwrap();

        let logs = host.logs.borrow();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].0, "plugin loaded");
        assert_eq!(logs[0].1, json!({ "params": { "source": "menu" } }));
    }

    #[test]
    fn unknown_action_is_an_error() {
        let host = RecordingHost::default();
        let result = Actions::default().dispatch("goodbye", &host, &Value::Null);
        match result {
            Err(NotebookError::UnknownAction(name)) => assert_eq!(name, "goodbye"),
            other => panic!("expected UnknownAction, got {:?}", other),
        }
        assert!(host.logs.borrow().is_empty());
    }

    #[test]
    fn default_registers_hello() {
        let names: Vec<_> = Actions::default().names().collect();
        assert_eq!(names, vec!["hello"]);
    }
}
