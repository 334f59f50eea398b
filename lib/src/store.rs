//! Redux-like state container for the workpad editor.
//!
//! Actions pass through a chain of [`middleware::Middleware`] before the
//! innermost step hands them to the [`Reducer`]. Every middleware sees the
//! state before and after the rest of the chain applied the action.

#[cfg(test)]
use mockall::automock;

use std::{cell::RefCell, rc::Rc};

use crate::{
    persist::PersistHandle,
    store::{action::Action, middleware::Middleware, state::State},
};

pub mod action;
pub mod middleware;
pub mod reducer;
pub mod selectors;
pub mod state;

/// Result of dispatching an action
#[derive(Debug)]
pub enum Dispatched {
    /// The action was applied to the store
    Applied,
    /// The action was applied and a persist request is in flight
    Persisting(PersistHandle),
}

impl Dispatched {
    /// Returns true if a persist request was issued for this action
    pub fn is_persisting(&self) -> bool {
        matches!(self, Self::Persisting(_))
    }

    /// Returns the in-flight persist request, if any
    pub fn into_persist(self) -> Option<PersistHandle> {
        match self {
            Self::Applied => None,
            Self::Persisting(handle) => Some(handle),
        }
    }
}

/// Gets application state
#[cfg_attr(test, automock)]
pub trait StateGetter {
    /// Returns a snapshot of the current state
    fn get_state(&self) -> Rc<State>;
}

/// Dispatches actions to update application state
#[cfg_attr(test, automock)]
pub trait Dispatcher {
    /// Runs the action through the middleware chain and the reducer
    fn dispatch(&self, action: Action) -> Dispatched;
}

/// Handles mutating store state based on provided action
#[cfg_attr(test, automock)]
pub trait Reducer {
    /// Applies the action to the state in place
    fn reduce(&self, state: &mut State, action: Action);
}

/// Centralized state container
///
/// Reducers run through [`Rc::make_mut`], so while any snapshot returned by
/// [`StateGetter::get_state`] is alive the next dispatch copies the whole
/// [`State`], asset values included. Middleware holding a snapshot across
/// `next` pays that copy on every action it does not skip.
pub struct Store {
    state: RefCell<Rc<State>>,
    reducer: Box<dyn Reducer>,
    middleware: Vec<Box<dyn Middleware>>,
}

impl Store {
    /// Creates a new store without middleware.
    pub fn new(initial_state: State, reducer: Box<dyn Reducer>) -> Self {
        Self::with_middleware(initial_state, reducer, Vec::new())
    }

    /// Creates a new store running every action through the given
    /// middleware, outermost first.
    pub fn with_middleware(
        initial_state: State,
        reducer: Box<dyn Reducer>,
        middleware: Vec<Box<dyn Middleware>>,
    ) -> Self {
        Self {
            state: RefCell::new(Rc::new(initial_state)),
            reducer,
            middleware,
        }
    }

    /// Appends a middleware to the innermost end of the chain
    pub fn add_middleware<M: Middleware + 'static>(&mut self, middleware: M) {
        self.middleware.push(Box::new(middleware));
    }

    fn dispatch_from(&self, index: usize, action: Action) -> Dispatched {
        match self.middleware.get(index) {
            Some(middleware) => middleware.handle(
                action,
                &|next_action| self.dispatch_from(index + 1, next_action),
                self,
            ),
            None => self.apply(action),
        }
    }

    fn apply(&self, action: Action) -> Dispatched {
        let mut rc = self.state.borrow_mut();
        let state = Rc::make_mut(&mut rc);
        self.reducer.reduce(state, action);
        Dispatched::Applied
    }
}

impl StateGetter for Store {
    fn get_state(&self) -> Rc<State> {
        self.state.borrow().clone()
    }
}

impl Dispatcher for Store {
    fn dispatch(&self, action: Action) -> Dispatched {
        self.dispatch_from(0, action)
    }
}

#[cfg(test)]
#[path = "./store_tests.rs"]
mod tests;
