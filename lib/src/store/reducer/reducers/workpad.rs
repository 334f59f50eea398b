//! Workpad reducers for document level edits.

use std::rc::Rc;

use crate::{
    store::{reducer::reducers::update_workpad, state::State},
    workpad::Workpad,
};

/// Loads a workpad, dropping selection and cached expression output that
/// belonged to the previous one.
pub fn set_workpad(state: &mut State, workpad: Workpad) {
    state.workpad = Some(Rc::new(workpad));
    state.transient.selected_element = None;
    state.resolved_args.clear();
}

/// Renames the workpad.
pub fn set_name(state: &mut State, name: String) {
    update_workpad(state, |w| w.name = name);
}

/// Replaces the global css.
pub fn set_css(state: &mut State, css: String) {
    update_workpad(state, |w| w.css = css);
}

/// Replaces the colour palette.
pub fn set_colors(state: &mut State, colors: Vec<String>) {
    update_workpad(state, |w| w.colors = colors);
}

/// Appends a colour unless the palette already holds it.
pub fn add_color(state: &mut State, color: String) {
    update_workpad(state, |w| {
        if !w.colors.contains(&color) {
            w.colors.push(color);
        }
    });
}

/// Removes every occurrence of a colour from the palette.
pub fn remove_color(state: &mut State, color: String) {
    update_workpad(state, |w| w.colors.retain(|c| *c != color));
}

/// Resizes the workpad pages.
pub fn size_workpad(state: &mut State, width: u32, height: u32) {
    update_workpad(state, |w| {
        w.width = width;
        w.height = height;
    });
}

/// Marks the workpad writeable or read only.
pub fn set_writeable(state: &mut State, writeable: bool) {
    update_workpad(state, |w| w.is_writeable = writeable);
}
