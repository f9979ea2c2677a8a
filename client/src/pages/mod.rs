//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration — fetches, redirects, submit
//! handlers — and delegates rendering details to `components`.

pub mod create_artifact;
pub mod home;
pub mod login;
pub mod logout;
pub mod personal_artifacts;
pub mod register;
pub mod update_artifact;
