//! Transient reducers for ui-only editor state.

use crate::store::state::State;

/// Selects an element or clears the selection.
pub fn select_element(state: &mut State, element_id: Option<String>) {
    state.transient.selected_element = element_id;
}

/// Sets the zoom scale. Non-positive scales are ignored.
pub fn set_zoom_scale(state: &mut State, scale: f64) {
    if scale > 0.0 {
        state.transient.zoom_scale = scale;
    }
}

/// Enters or leaves fullscreen.
pub fn set_fullscreen(state: &mut State, value: bool) {
    state.transient.fullscreen = value;
}

/// Enters or leaves edit mode.
pub fn set_editing(state: &mut State, value: bool) {
    state.transient.editing = value;
}

/// Sets the auto refresh interval.
pub fn set_refresh_interval(state: &mut State, interval: u64) {
    state.transient.refresh_interval = interval;
}
