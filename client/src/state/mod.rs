//! Process-wide reactive state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` and `toast` are provided as `RwSignal`s at the app root and read by
//! pages and chrome components. All writes happen on the single browser event
//! loop, so no further coordination is needed.

pub mod auth;
pub mod toast;
