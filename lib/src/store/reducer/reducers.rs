//! Per-family reducer functions.

use std::rc::Rc;

use crate::{store::state::State, workpad::Workpad};

pub mod assets;
pub mod elements;
pub mod pages;
pub mod resolved_args;
pub mod transient;
pub mod workpad;

/// Applies an edit to a copy of the loaded workpad and installs the copy, so
/// the edited workpad never shares identity with the previous one. Returns
/// false when no workpad is loaded.
pub fn update_workpad<F>(state: &mut State, edit: F) -> bool
where
    F: FnOnce(&mut Workpad),
{
    let Some(current) = state.workpad.as_ref() else {
        log::warn!("no workpad loaded: ignoring workpad edit");
        return false;
    };

    let mut next = Workpad::clone(current);
    edit(&mut next);
    state.workpad = Some(Rc::new(next));
    true
}
