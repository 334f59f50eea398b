//! Resolved args reducers for the expression output cache.

use crate::store::state::State;

/// Marks an element's cached output as loading, keeping the previous value.
pub fn set_loading(state: &mut State, element_id: String) {
    let entry = state.resolved_args.entry(element_id).or_default();
    entry.loading = true;
}

/// Stores the resolved output of an element.
pub fn set_value(state: &mut State, element_id: String, value: serde_json::Value) {
    let entry = state.resolved_args.entry(element_id).or_default();
    entry.loading = false;
    entry.value = Some(value);
    entry.error = None;
}

/// Records an evaluation error for an element.
pub fn set_error(state: &mut State, element_id: String, error: String) {
    let entry = state.resolved_args.entry(element_id).or_default();
    entry.loading = false;
    entry.error = Some(error);
}

/// Drops the cached output of an element.
pub fn clear_value(state: &mut State, element_id: String) {
    state.resolved_args.remove(&element_id);
}

/// Drops cached output of elements missing from the loaded workpad.
pub fn prune(state: &mut State) {
    let Some(workpad) = state.workpad.as_ref() else {
        state.resolved_args.clear();
        return;
    };

    state
        .resolved_args
        .retain(|element_id, _| workpad.has_element(element_id));
}
