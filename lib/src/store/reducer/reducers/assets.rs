//! Asset registry reducers. None of these touch the workpad.

use crate::{
    store::state::State,
    workpad::{Asset, AssetMap},
};

/// Replaces the whole registry.
pub fn set_assets(state: &mut State, assets: AssetMap) {
    state.assets = assets;
}

/// Empties the registry.
pub fn reset_assets(state: &mut State) {
    state.assets.clear();
}

/// Adds or replaces a single asset.
pub fn set_asset(state: &mut State, asset: Asset) {
    state.assets.insert(asset.id.clone(), asset);
}

/// Replaces the value of a known asset.
pub fn set_asset_value(state: &mut State, id: String, value: String) {
    match state.assets.get_mut(&id) {
        Some(asset) => asset.value = value,
        None => log::warn!("cannot update unknown asset {id}"),
    }
}

/// Removes an asset.
pub fn remove_asset(state: &mut State, id: String) {
    state.assets.remove(&id);
}
