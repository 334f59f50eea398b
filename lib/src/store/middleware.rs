//! Middleware seam of the store.

use crate::store::{Dispatched, StateGetter, action::Action};

/// Observes every dispatched action. Implementations decide whether to
/// forward the action to `next`, which applies it through the rest of the
/// chain, and may read the store before and after doing so.
pub trait Middleware {
    /// Handles a single action and returns what forwarding it produced
    fn handle(
        &self,
        action: Action,
        next: &dyn Fn(Action) -> Dispatched,
        store: &dyn StateGetter,
    ) -> Dispatched;
}
