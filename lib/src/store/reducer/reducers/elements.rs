//! Element reducers.

use crate::{
    store::{reducer::reducers::update_workpad, state::State},
    workpad::{Element, Position, generate_id},
};

fn element_index(
    state: &State,
    page_id: &str,
    element_id: &str,
) -> Option<(usize, usize)> {
    let workpad = state.workpad.as_ref()?;
    let page = workpad.pages.iter().position(|p| p.id == page_id)?;
    let element = workpad.pages[page]
        .elements
        .iter()
        .position(|e| e.id == element_id)?;
    Some((page, element))
}

fn update_element<F>(
    state: &mut State,
    page_id: &str,
    element_id: &str,
    edit: F,
) where
    F: FnOnce(&mut Element),
{
    let Some((page, element)) = element_index(state, page_id, element_id) else {
        log::warn!("unknown element {element_id} on page {page_id}");
        return;
    };

    update_workpad(state, |w| edit(&mut w.pages[page].elements[element]));
}

/// Appends an element to a page.
pub fn add_element(state: &mut State, page_id: String, element: Element) {
    let page = state
        .workpad
        .as_ref()
        .and_then(|w| w.pages.iter().position(|p| p.id == page_id));

    let Some(page) = page else {
        log::warn!("cannot add element to unknown page {page_id}");
        return;
    };

    update_workpad(state, |w| w.pages[page].elements.push(element));
}

/// Inserts a copy of an element right after it, under a new id.
pub fn duplicate_element(state: &mut State, page_id: String, element_id: String) {
    let Some((page, element)) = element_index(state, &page_id, &element_id)
    else {
        log::warn!("cannot duplicate unknown element {element_id}");
        return;
    };

    update_workpad(state, |w| {
        let elements = &mut w.pages[page].elements;
        let copy = Element {
            id: generate_id("element"),
            ..elements[element].clone()
        };
        elements.insert(element + 1, copy);
    });
}

/// Removes elements from a page, clearing the selection if it pointed at one
/// of them.
pub fn remove_elements(
    state: &mut State,
    page_id: String,
    element_ids: Vec<String>,
) {
    let page = state
        .workpad
        .as_ref()
        .and_then(|w| w.pages.iter().position(|p| p.id == page_id));

    let Some(page) = page else {
        log::warn!("cannot remove elements from unknown page {page_id}");
        return;
    };

    update_workpad(state, |w| {
        w.pages[page]
            .elements
            .retain(|e| !element_ids.contains(&e.id));
    });

    if state
        .transient
        .selected_element
        .as_ref()
        .is_some_and(|selected| element_ids.contains(selected))
    {
        state.transient.selected_element = None;
    }
}

/// Moves or resizes an element.
pub fn set_position(
    state: &mut State,
    page_id: String,
    element_id: String,
    position: Position,
) {
    update_element(state, &page_id, &element_id, |e| e.position = position);
}

/// Replaces the expression of an element.
pub fn set_expression(
    state: &mut State,
    page_id: String,
    element_id: String,
    expression: String,
) {
    update_element(state, &page_id, &element_id, |e| {
        e.expression = expression
    });
}

/// Sets or clears the filter of an element.
pub fn set_filter(
    state: &mut State,
    page_id: String,
    element_id: String,
    filter: Option<String>,
) {
    update_element(state, &page_id, &element_id, |e| e.filter = filter);
}
