//! Selectors projecting the parts of state other components care about.

use std::rc::Rc;

use crate::{
    store::state::{ResolvedArg, State},
    workpad::{Asset, AssetMap, Element, Page, PersistedWorkpad, Workpad},
};

/// Returns the loaded workpad. Compare results with [`Rc::ptr_eq`] to detect
/// replacement.
pub fn get_workpad(state: &State) -> Option<&Rc<Workpad>> {
    state.workpad.as_ref()
}

/// Returns the projection of the loaded workpad that is written to the
/// backing store.
pub fn get_workpad_persisted(state: &State) -> Option<PersistedWorkpad> {
    get_workpad(state).map(|w| PersistedWorkpad::from_parts(w, &state.assets))
}

/// Returns the asset registry.
pub fn get_assets(state: &State) -> &AssetMap {
    &state.assets
}

/// Returns the ids of every registered asset.
pub fn get_asset_ids(state: &State) -> Vec<String> {
    state.assets.keys().cloned().collect()
}

/// Returns a single asset.
pub fn get_asset<'a>(state: &'a State, id: &str) -> Option<&'a Asset> {
    state.assets.get(id)
}

/// Returns the pages of the loaded workpad.
pub fn get_pages(state: &State) -> &[Page] {
    get_workpad(state).map(|w| w.pages.as_slice()).unwrap_or_default()
}

/// Returns the page currently shown.
pub fn get_selected_page(state: &State) -> Option<&Page> {
    get_workpad(state).and_then(|w| w.pages.get(w.page))
}

/// Returns an element of the loaded workpad by id.
pub fn get_element_by_id<'a>(
    state: &'a State,
    element_id: &str,
) -> Option<&'a Element> {
    get_workpad(state)
        .and_then(|w| w.element_by_id(element_id))
        .map(|(_, e)| e)
}

/// Returns the cached output of an element expression.
pub fn get_resolved_value<'a>(
    state: &'a State,
    element_id: &str,
) -> Option<&'a ResolvedArg> {
    state.resolved_args.get(element_id)
}

#[cfg(test)]
#[path = "./selectors_tests.rs"]
mod tests;
