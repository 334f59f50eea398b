//! Application state definitions.

use std::{collections::HashMap, rc::Rc};

use serde::{Deserialize, Serialize};

use crate::workpad::{AssetMap, Workpad};

/// Default editor zoom scale
pub const DEFAULT_ZOOM_SCALE: f64 = 1.0;

/// Ui-only editor state. Nothing in here is ever persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct TransientState {
    /// Element currently selected in the editor
    pub selected_element: Option<String>,
    /// Editor zoom scale
    pub zoom_scale: f64,
    /// Whether the workpad is presented fullscreen
    pub fullscreen: bool,
    /// Whether the editor is in edit mode
    pub editing: bool,
    /// Auto refresh interval in milliseconds, 0 when disabled
    pub refresh_interval: u64,
}

impl Default for TransientState {
    fn default() -> Self {
        Self {
            selected_element: None,
            zoom_scale: DEFAULT_ZOOM_SCALE,
            fullscreen: false,
            editing: true,
            refresh_interval: 0,
        }
    }
}

/// Cached output of an element expression.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolvedArg {
    /// Whether the expression is being evaluated
    pub loading: bool,
    /// Last successfully resolved output
    pub value: Option<serde_json::Value>,
    /// Last evaluation error
    pub error: Option<String>,
}

/// Complete state of the workpad editor.
///
/// The workpad is held behind an [`Rc`] so that snapshots can be compared by
/// identity: reducers that touch the workpad always install a new [`Rc`].
#[derive(Debug, Clone, Default)]
pub struct State {
    /// The loaded workpad, if any
    pub workpad: Option<Rc<Workpad>>,
    /// Asset registry
    pub assets: AssetMap,
    /// Ui-only editor state
    pub transient: TransientState,
    /// Resolved expression cache keyed by element id
    pub resolved_args: HashMap<String, ResolvedArg>,
}

impl State {
    /// Returns state holding the given workpad and assets
    pub fn with_workpad(workpad: Workpad, assets: AssetMap) -> Self {
        Self {
            workpad: Some(Rc::new(workpad)),
            assets,
            ..Default::default()
        }
    }
}
