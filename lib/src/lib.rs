//! Library package for editing workpads through a redux-like store that
//! persists every meaningful change
//!
//! The [`store::Store`] applies [`store::action::Action`]s through a chain of
//! middleware. [`persist::PersistGate`] is the middleware that compares the
//! state before and after each action and sends the persisted projection of
//! the workpad to a [`service::WorkpadService`] when the workpad was
//! replaced or the asset registry gained or lost an asset. Failures are
//! reported through a [`notify::Notifier`].
//!
//! # Examples
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use workpad_lib::{
//!     notify::LogNotifier,
//!     persist::PersistGate,
//!     service::HttpWorkpadService,
//!     store::{Dispatcher, Store, action::Action, reducer::StoreReducer, state::State},
//!     workpad::Workpad,
//! };
//!
//! let gate = PersistGate::builder()
//!     .service(Arc::new(
//!         HttpWorkpadService::builder()
//!             .base_url("http://localhost:5601")
//!             .build()
//!             .unwrap(),
//!     ))
//!     .notifier(Arc::new(LogNotifier))
//!     .build()
//!     .unwrap();
//!
//! let mut store = Store::new(State::default(), StoreReducer::boxed());
//! store.add_middleware(gate);
//!
//! // loading a workpad is never persisted
//! store.dispatch(Action::SetWorkpad(Workpad::new("quarterly report")));
//!
//! // editing it is
//! if let Some(persist) = store.dispatch(Action::SetName("Q3".into())).into_persist() {
//!     println!("{:?}", persist.wait());
//! }
//! ```

#![deny(missing_docs)]
pub mod config;
pub mod error;
pub mod index_management;
pub mod notify;
pub mod persist;
pub mod service;
pub mod store;
pub mod workpad;
