//! User facing notifications
//!
//! Notifications are fire-and-forget toasts. [`LogNotifier`] writes them to
//! the log; [`ChannelNotifier`] hands them to whichever thread renders them.

#[cfg(test)]
use mockall::automock;

use serde::{Deserialize, Serialize};
use std::{fmt::Display, sync::mpsc::Sender};

use crate::error::WorkpadError;

/// Category of a notification
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    /// Something failed
    Error,
    /// Something may need attention
    Warning,
    /// Purely informational
    Info,
    /// Something succeeded
    Success,
}

/// A single notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    /// Category of the notification
    pub kind: ToastKind,
    /// Short headline
    pub title: String,
    /// Details, typically the failure message
    pub text: String,
    /// Status of the response that caused the notification, if any
    pub status: Option<u16>,
}

impl Toast {
    /// Returns an error notification describing a failed request
    pub fn error(title: impl Into<String>, error: &WorkpadError) -> Self {
        let text = match error.response() {
            Some(response) => response.message.clone(),
            None => error.to_string(),
        };

        Self {
            kind: ToastKind::Error,
            title: title.into(),
            text,
            status: error.status(),
        }
    }

    /// Returns a notification without an attached response
    pub fn new(
        kind: ToastKind,
        title: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            text: text.into(),
            status: None,
        }
    }
}

impl Display for Toast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.text.is_empty(), self.status) {
            (true, _) => write!(f, "{}", self.title),
            (false, Some(status)) => {
                write!(f, "{} ({status}): {}", self.title, self.text)
            }
            (false, None) => write!(f, "{}: {}", self.title, self.text),
        }
    }
}

/// Receives notifications meant for the user
#[cfg_attr(test, automock)]
pub trait Notifier: Send + Sync {
    /// Emits a notification. Never fails from the caller's point of view.
    fn notify(&self, toast: Toast);
}

/// Writes notifications to the log at a level matching their kind
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, toast: Toast) {
        match toast.kind {
            ToastKind::Error => log::error!("{toast}"),
            ToastKind::Warning => log::warn!("{toast}"),
            ToastKind::Info | ToastKind::Success => log::info!("{toast}"),
        }
    }
}

/// Drops every notification
#[derive(Debug, Default)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&self, toast: Toast) {
        log::trace!("dropping notification: {toast}");
    }
}

/// Forwards notifications over a channel
#[derive(Debug)]
pub struct ChannelNotifier {
    tx: Sender<Toast>,
}

impl ChannelNotifier {
    /// Returns a notifier sending on the given channel
    pub fn new(tx: Sender<Toast>) -> Self {
        Self { tx }
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, toast: Toast) {
        if let Err(e) = self.tx.send(toast) {
            log::warn!("notification receiver is gone, dropping: {}", e.0);
        }
    }
}

#[cfg(test)]
#[path = "./notify_tests.rs"]
mod tests;
