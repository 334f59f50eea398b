//! Page reducers for adding, removing, ordering and navigating pages.

use std::collections::HashMap;

use crate::{
    store::{reducer::reducers::update_workpad, state::State},
    workpad::Page,
};

fn page_index(state: &State, page_id: &str) -> Option<usize> {
    state
        .workpad
        .as_ref()
        .and_then(|w| w.pages.iter().position(|p| p.id == page_id))
}

/// Inserts a blank page after the current one and navigates to it.
pub fn add_page(state: &mut State) {
    update_workpad(state, |w| {
        let index = (w.page + 1).min(w.pages.len());
        w.pages.insert(index, Page::new());
        w.page = index;
    });
}

/// Inserts a copy of a page right after it and navigates to the copy.
pub fn duplicate_page(state: &mut State, page_id: String) {
    let Some(index) = page_index(state, &page_id) else {
        log::warn!("cannot duplicate unknown page {page_id}");
        return;
    };

    update_workpad(state, |w| {
        let copy = w.pages[index].duplicate();
        w.pages.insert(index + 1, copy);
        w.page = index + 1;
    });
}

/// Removes a page. The last remaining page is never removed.
pub fn remove_page(state: &mut State, page_id: String) {
    let Some(index) = page_index(state, &page_id) else {
        log::warn!("cannot remove unknown page {page_id}");
        return;
    };

    if state.workpad.as_ref().is_some_and(|w| w.pages.len() <= 1) {
        log::warn!("refusing to remove the only page {page_id}");
        return;
    }

    update_workpad(state, |w| {
        w.pages.remove(index);
        if index < w.page {
            w.page -= 1;
        }
        w.page = w.page.min(w.pages.len() - 1);
    });
}

/// Moves a page by a relative offset, clamped to the page list, and follows
/// it with the current page.
pub fn move_page(state: &mut State, page_id: String, position: i64) {
    let Some(index) = page_index(state, &page_id) else {
        log::warn!("cannot move unknown page {page_id}");
        return;
    };

    update_workpad(state, |w| {
        let last = w.pages.len() as i64 - 1;
        let target = (index as i64).saturating_add(position).clamp(0, last) as usize;
        let page = w.pages.remove(index);
        w.pages.insert(target, page);
        w.page = target;
    });
}

/// Navigates to a page. Out of range indexes are ignored.
pub fn goto_page(state: &mut State, index: usize) {
    let in_range = state
        .workpad
        .as_ref()
        .is_some_and(|w| index < w.pages.len());

    if !in_range {
        log::warn!("ignoring navigation to missing page index {index}");
        return;
    }

    update_workpad(state, |w| w.page = index);
}

/// Replaces the style of a page.
pub fn set_page_style(
    state: &mut State,
    page_id: String,
    style: HashMap<String, String>,
) {
    let Some(index) = page_index(state, &page_id) else {
        log::warn!("cannot style unknown page {page_id}");
        return;
    };

    update_workpad(state, |w| w.pages[index].style = style);
}

/// Sets or clears the transition of a page.
pub fn set_page_transition(
    state: &mut State,
    page_id: String,
    transition: Option<String>,
) {
    let Some(index) = page_index(state, &page_id) else {
        log::warn!("cannot set transition of unknown page {page_id}");
        return;
    };

    update_workpad(state, |w| w.pages[index].transition = transition);
}
