//! Action creators of the index management admin ui
//!
//! These actions are not handled by the workpad store; they share its
//! `{ type, payload }` wire shape so the same tooling can record and replay
//! them.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Clears the status column of the selected index rows
pub const CLEAR_ROW_STATUS: ActionCreator =
    ActionCreator::new("INDEX_MANAGEMENT_CLEAR_ROW_STATUS");

/// An action in the plain `{ type, payload }` shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FluxAction {
    /// Identifies the action
    #[serde(rename = "type")]
    pub action_type: String,
    /// Whatever the caller supplied, if anything
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
}

/// Creates actions of a single type. Its string form is the type it creates.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub struct ActionCreator {
    action_type: &'static str,
}

impl ActionCreator {
    /// Returns a creator for actions of the given type
    pub const fn new(action_type: &'static str) -> Self {
        Self { action_type }
    }

    /// Returns the type of the actions this creator creates
    pub fn action_type(&self) -> &'static str {
        self.action_type
    }

    /// Creates an action carrying the given payload
    pub fn create(&self, payload: Option<serde_json::Value>) -> FluxAction {
        FluxAction {
            action_type: self.action_type.to_string(),
            payload,
        }
    }
}

impl Display for ActionCreator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.action_type)
    }
}

#[cfg(test)]
#[path = "./index_management_tests.rs"]
mod tests;
