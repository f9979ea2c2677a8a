//! Networking modules for the external artifact API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns every HTTP call the client makes. There is no other transport;
//! the backend is an external collaborator reached over same-origin HTTP.

pub mod api;
