//! Session persistence in `localStorage`.
//!
//! DESIGN
//! ======
//! The backend issues stateless bearer tokens, so staying signed in across
//! reloads is purely a client concern: the session is stored as JSON under a
//! single key and dropped on logout. Storage access is best-effort; a
//! corrupt or missing entry simply means signed-out.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use records::Session;

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "artifact_keep_session";

/// Serialize a session for storage.
#[must_use]
pub fn encode_session(session: &Session) -> String {
    serde_json::to_string(session).unwrap_or_default()
}

/// Parse a stored session; `None` for corrupt or empty input.
#[must_use]
pub fn decode_session(raw: &str) -> Option<Session> {
    serde_json::from_str(raw).ok()
}

/// Load the persisted session, if any.
#[must_use]
pub fn load() -> Option<Session> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        let raw = storage.get_item(STORAGE_KEY).ok()??;
        decode_session(&raw)
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Persist the session for future page loads.
pub fn store(session: &Session) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, &encode_session(session));
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = session;
    }
}

/// Drop the persisted session.
pub fn clear() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}
