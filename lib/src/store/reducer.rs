//! Pure reducer functions that compute new state from actions.

use std::fmt::Debug;

use crate::store::Reducer;

use super::{action::Action, state::State};

mod reducers;

/// Applies actions to state, routing each to the reducer of its family.
#[derive(Default)]
pub struct StoreReducer;

impl StoreReducer {
    /// Returns a boxed reducer ready to hand to a store
    pub fn boxed() -> Box<Self> {
        Box::default()
    }

    fn log_action<D: Debug>(&self, name: &str, data: &D) {
        log::debug!("processing action: {name}({:?})", data);
    }
}

impl Reducer for StoreReducer {
    /// Applies an action to the state, mutating it in place.
    fn reduce(&self, state: &mut State, action: Action) {
        let name = action.type_tag();

        match action {
            // Workpad actions
            Action::SetWorkpad(workpad) => {
                self.log_action(name, &workpad.id);
                reducers::workpad::set_workpad(state, workpad);
            }
            Action::SetName(value) => {
                self.log_action(name, &value);
                reducers::workpad::set_name(state, value);
            }
            Action::SetWorkpadCss(css) => {
                self.log_action(name, &css);
                reducers::workpad::set_css(state, css);
            }
            Action::SetColors(colors) => {
                self.log_action(name, &colors);
                reducers::workpad::set_colors(state, colors);
            }
            Action::AddColor(color) => {
                self.log_action(name, &color);
                reducers::workpad::add_color(state, color);
            }
            Action::RemoveColor(color) => {
                self.log_action(name, &color);
                reducers::workpad::remove_color(state, color);
            }
            Action::SizeWorkpad { width, height } => {
                self.log_action(name, &(width, height));
                reducers::workpad::size_workpad(state, width, height);
            }
            Action::SetWriteable(value) => {
                self.log_action(name, &value);
                reducers::workpad::set_writeable(state, value);
            }

            // Page actions
            Action::AddPage => {
                self.log_action(name, &"");
                reducers::pages::add_page(state);
            }
            Action::DuplicatePage(page_id) => {
                self.log_action(name, &page_id);
                reducers::pages::duplicate_page(state, page_id);
            }
            Action::RemovePage(page_id) => {
                self.log_action(name, &page_id);
                reducers::pages::remove_page(state, page_id);
            }
            Action::MovePage { page_id, position } => {
                self.log_action(name, &(&page_id, position));
                reducers::pages::move_page(state, page_id, position);
            }
            Action::GotoPage(index) => {
                self.log_action(name, &index);
                reducers::pages::goto_page(state, index);
            }
            Action::SetPageStyle { page_id, style } => {
                self.log_action(name, &(&page_id, &style));
                reducers::pages::set_page_style(state, page_id, style);
            }
            Action::SetPageTransition {
                page_id,
                transition,
            } => {
                self.log_action(name, &(&page_id, &transition));
                reducers::pages::set_page_transition(state, page_id, transition);
            }

            // Element actions
            Action::AddElement { page_id, element } => {
                self.log_action(name, &(&page_id, &element.id));
                reducers::elements::add_element(state, page_id, element);
            }
            Action::DuplicateElement {
                page_id,
                element_id,
            } => {
                self.log_action(name, &(&page_id, &element_id));
                reducers::elements::duplicate_element(state, page_id, element_id);
            }
            Action::RemoveElements {
                page_id,
                element_ids,
            } => {
                self.log_action(name, &(&page_id, &element_ids));
                reducers::elements::remove_elements(state, page_id, element_ids);
            }
            Action::SetPosition {
                page_id,
                element_id,
                position,
            } => {
                self.log_action(name, &(&element_id, &position));
                reducers::elements::set_position(
                    state, page_id, element_id, position,
                );
            }
            Action::SetExpression {
                page_id,
                element_id,
                expression,
            } => {
                self.log_action(name, &(&element_id, &expression));
                reducers::elements::set_expression(
                    state, page_id, element_id, expression,
                );
            }
            Action::SetFilter {
                page_id,
                element_id,
                filter,
            } => {
                self.log_action(name, &(&element_id, &filter));
                reducers::elements::set_filter(state, page_id, element_id, filter);
            }

            // Asset actions
            Action::SetAssets(assets) => {
                self.log_action(name, &assets.keys().collect::<Vec<_>>());
                reducers::assets::set_assets(state, assets);
            }
            Action::ResetAssets => {
                self.log_action(name, &"");
                reducers::assets::reset_assets(state);
            }
            Action::SetAsset(asset) => {
                self.log_action(name, &asset.id);
                reducers::assets::set_asset(state, asset);
            }
            Action::SetAssetValue { id, value } => {
                self.log_action(name, &id);
                reducers::assets::set_asset_value(state, id, value);
            }
            Action::RemoveAsset(id) => {
                self.log_action(name, &id);
                reducers::assets::remove_asset(state, id);
            }

            // Transient actions
            Action::SelectElement(element_id) => {
                self.log_action(name, &element_id);
                reducers::transient::select_element(state, element_id);
            }
            Action::SetZoomScale(scale) => {
                self.log_action(name, &scale);
                reducers::transient::set_zoom_scale(state, scale);
            }
            Action::SetFullscreen(value) => {
                self.log_action(name, &value);
                reducers::transient::set_fullscreen(state, value);
            }
            Action::SetEditing(value) => {
                self.log_action(name, &value);
                reducers::transient::set_editing(state, value);
            }
            Action::SetRefreshInterval(interval) => {
                self.log_action(name, &interval);
                reducers::transient::set_refresh_interval(state, interval);
            }

            // Resolved args actions
            Action::SetLoading { element_id } => {
                self.log_action(name, &element_id);
                reducers::resolved_args::set_loading(state, element_id);
            }
            Action::SetValue { element_id, value } => {
                self.log_action(name, &element_id);
                reducers::resolved_args::set_value(state, element_id, value);
            }
            Action::SetError { element_id, error } => {
                self.log_action(name, &(&element_id, &error));
                reducers::resolved_args::set_error(state, element_id, error);
            }
            Action::ClearValue { element_id } => {
                self.log_action(name, &element_id);
                reducers::resolved_args::clear_value(state, element_id);
            }
            Action::PruneResolvedArgs => {
                self.log_action(name, &"");
                reducers::resolved_args::prune(state);
            }
        }
    }
}

#[cfg(test)]
#[path = "./reducer_tests.rs"]
mod tests;
