//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render cards, dialogs, forms, and chrome while reading shared
//! state from Leptos context providers. Route-scoped orchestration stays in
//! `pages`.

pub mod artifact_card;
pub mod artifact_detail;
pub mod artifact_form;
pub mod modal;
pub mod navbar;
pub mod toast_host;
