//! Global toast-notification queue.
//!
//! DESIGN
//! ======
//! Failed requests and one-shot confirmations surface here instead of in
//! page-local message signals, so every page reports through the same chrome.
//! Ids are monotonically increasing so dismissal (manual or timed) can target
//! a specific entry even after the queue has shifted.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

/// Visual severity of a toast entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

impl ToastLevel {
    /// CSS modifier suffix for this level.
    #[must_use]
    pub fn as_class(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// A single queued notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

/// Queue of live toasts plus the id counter.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a toast and return its id.
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            level,
            message: message.into(),
        });
        id
    }

    /// Remove the toast with the given id, if still queued.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Live toasts in arrival order.
    #[must_use]
    pub fn entries(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Push an error toast onto the shared queue and return its id.
pub fn push_error(toasts: RwSignal<ToastState>, message: impl Into<String>) -> u64 {
    let message = message.into();
    let mut id = 0;
    toasts.update(|t| id = t.push(ToastLevel::Error, message.clone()));
    id
}

/// Push a success toast onto the shared queue and return its id.
pub fn push_success(toasts: RwSignal<ToastState>, message: impl Into<String>) -> u64 {
    let message = message.into();
    let mut id = 0;
    toasts.update(|t| id = t.push(ToastLevel::Success, message.clone()));
    id
}
