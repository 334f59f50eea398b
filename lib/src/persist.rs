//! Store middleware that writes workpad changes to the workpad service
//!
//! Every action that is not excluded is applied first; the state before and
//! after is then compared. If the workpad was replaced, or the set of asset
//! ids changed, the persisted projection of the workpad is sent to the
//! [`WorkpadService`] on its own thread. Failures are reported through the
//! [`Notifier`] and never reach the dispatcher.

use derive_builder::Builder;
use itertools::Itertools;
use std::{
    any::Any,
    collections::HashSet,
    rc::Rc,
    sync::{Arc, LazyLock},
    thread::{self, JoinHandle},
};
use strum::IntoEnumIterator;

use crate::{
    error::WorkpadError,
    notify::{Notifier, Toast},
    service::WorkpadService,
    store::{
        Dispatched, StateGetter,
        action::{Action, ActionType},
        middleware::Middleware,
        selectors::{get_asset_ids, get_workpad, get_workpad_persisted},
        state::State,
    },
    workpad::PersistedWorkpad,
};

/// Title of the notification raised when the service rejects the document
pub const SAVE_FAILED_TITLE: &str = "Couldn't save your changes to Elasticsearch";

/// Title of the notification raised for every other failure
pub const UPDATE_FAILED_TITLE: &str = "Couldn't update workpad";

/// Status the service answers with when it rejects the document
pub const BAD_REQUEST: u16 = 400;

static SKIPPED_ACTIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    ActionType::iter()
        .filter(|t| !t.affects_persistence())
        .map(ActionType::as_str)
        .collect()
});

/// Returns the tags of every action that never triggers a persist call.
/// Computed once, never modified afterwards.
pub fn skipped_actions() -> &'static HashSet<&'static str> {
    &SKIPPED_ACTIONS
}

/// Returns true if the loaded workpad was replaced between the two
/// snapshots. Compares identity, not content.
pub fn workpad_changed(before: &State, after: &State) -> bool {
    match (get_workpad(before), get_workpad(after)) {
        (Some(b), Some(a)) => !Rc::ptr_eq(b, a),
        (None, None) => false,
        _ => true,
    }
}

/// Returns true if the set of asset ids differs between the two snapshots.
/// Order is irrelevant.
pub fn assets_changed(before: &State, after: &State) -> bool {
    let before = get_asset_ids(before).into_iter().sorted().collect_vec();
    let after = get_asset_ids(after).into_iter().sorted().collect_vec();
    before != after
}

/// Returns the notification title used for a failed update
pub fn failure_title(error: &WorkpadError) -> &'static str {
    if error.status() == Some(BAD_REQUEST) {
        SAVE_FAILED_TITLE
    } else {
        UPDATE_FAILED_TITLE
    }
}

/// How a persist request settled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistOutcome {
    /// The service accepted the workpad
    Saved {
        /// Id of the saved workpad
        id: String,
    },
    /// The service call failed and the user was notified
    Notified {
        /// Title of the emitted notification
        title: &'static str,
    },
    /// The persist thread panicked before settling
    Aborted(String),
}

/// An in-flight persist request. Dropping it detaches the request; waiting
/// on it blocks until the request settled.
#[derive(Debug)]
pub struct PersistHandle {
    workpad_id: String,
    handle: JoinHandle<PersistOutcome>,
}

impl PersistHandle {
    /// Returns the id of the workpad being persisted
    pub fn workpad_id(&self) -> &str {
        &self.workpad_id
    }

    /// Returns true once the request settled
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Blocks until the request settled and returns how it did
    pub fn wait(self) -> PersistOutcome {
        self.handle
            .join()
            .unwrap_or_else(|e| PersistOutcome::Aborted(panic_message(e)))
    }
}

fn panic_message(e: Box<dyn Any + Send>) -> String {
    if let Some(value) = e.downcast_ref::<&str>() {
        format!("persist thread panicked with {value}")
    } else if let Some(value) = e.downcast_ref::<String>() {
        format!("persist thread panicked with {value}")
    } else {
        "persist thread panicked for unknown reason".to_string()
    }
}

/// Middleware persisting workpad changes
#[derive(Builder)]
#[builder(build_fn(private, name = "_build"))]
pub struct PersistGate {
    /// Storage collaborator receiving updates
    service: Arc<dyn WorkpadService>,
    /// Notification collaborator receiving failures
    notifier: Arc<dyn Notifier>,
}

impl PersistGateBuilder {
    /// Builds the gate
    pub fn build(&self) -> crate::error::Result<PersistGate> {
        Ok(self._build()?)
    }
}

impl PersistGate {
    /// Returns builder for PersistGate
    pub fn builder() -> PersistGateBuilder {
        PersistGateBuilder::default()
    }

    /// Sends the workpad to the service on its own thread
    pub fn persist(&self, workpad: PersistedWorkpad) -> PersistHandle {
        let service = Arc::clone(&self.service);
        let notifier = Arc::clone(&self.notifier);
        let workpad_id = workpad.id.clone();

        log::info!("persisting workpad {workpad_id}");

        let handle = thread::spawn(move || {
            match service.update(&workpad.id, &workpad) {
                Ok(()) => {
                    log::debug!("workpad {} saved", workpad.id);
                    PersistOutcome::Saved { id: workpad.id }
                }
                Err(err) => {
                    log::error!("failed to persist workpad {}: {err}", workpad.id);
                    let title = failure_title(&err);
                    notifier.notify(Toast::error(title, &err));
                    PersistOutcome::Notified { title }
                }
            }
        });

        PersistHandle { workpad_id, handle }
    }
}

impl Middleware for PersistGate {
    fn handle(
        &self,
        action: Action,
        next: &dyn Fn(Action) -> Dispatched,
        store: &dyn StateGetter,
    ) -> Dispatched {
        if skipped_actions().contains(action.type_tag()) {
            return next(action);
        }

        let before = store.get_state();
        let forwarded = next(action);
        let after = store.get_state();

        if !workpad_changed(&before, &after) && !assets_changed(&before, &after) {
            return forwarded;
        }

        match get_workpad_persisted(&after) {
            Some(workpad) => Dispatched::Persisting(self.persist(workpad)),
            None => {
                log::warn!("state changed but no workpad is loaded: nothing to persist");
                forwarded
            }
        }
    }
}

#[cfg(test)]
#[path = "./persist_tests.rs"]
mod tests;
