//! Persisted user session and locale preference.
//!
//! Everything that touches the session goes through a [`SessionStore`] handed
//! to the API client and the router guard at construction time, so tests can
//! swap in an in-memory store instead of real browser storage.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::utils::storage as storage_utils;

/// localStorage key holding the serialized [`Session`].
pub const SESSION_KEY: &str = "user";
/// localStorage key holding the display-language tag.
pub const LOCALE_KEY: &str = "locale";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Admin,
}

/// Client-held proof of the authenticated identity. Written on login,
/// deleted on logout or when a 401 invalidates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub username: String,
    pub role: Role,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Access to the persisted session record and locale preference.
///
/// Login/registration forms own the writes; the request interceptor reads on
/// every call and clears on detected invalidation. The server stays
/// authoritative either way.
pub trait SessionStore {
    fn load_session(&self) -> Option<Session>;
    fn save_session(&self, session: &Session);
    fn clear_session(&self);
    fn locale(&self) -> Option<String>;
    fn set_locale(&self, locale: &str);
}

pub type SharedStore = Rc<dyn SessionStore>;

/// Decode a persisted session record. A record that fails to parse is
/// treated as no session at all; it must never surface as an error to the
/// caller.
pub fn parse_session(raw: &str) -> Option<Session> {
    match serde_json::from_str(raw) {
        Ok(session) => Some(session),
        Err(err) => {
            log::warn!("discarding malformed session record: {}", err);
            None
        }
    }
}

/// [`SessionStore`] over browser localStorage.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl SessionStore for BrowserStore {
    fn load_session(&self) -> Option<Session> {
        let storage = storage_utils::local_storage().ok()?;
        let raw = storage.get_item(SESSION_KEY).ok().flatten()?;
        parse_session(&raw)
    }

    fn save_session(&self, session: &Session) {
        let raw = match serde_json::to_string(session) {
            Ok(raw) => raw,
            Err(err) => {
                log::warn!("failed to serialize session: {}", err);
                return;
            }
        };
        if let Ok(storage) = storage_utils::local_storage() {
            let _ = storage.set_item(SESSION_KEY, &raw);
        }
    }

    fn clear_session(&self) {
        if let Ok(storage) = storage_utils::local_storage() {
            let _ = storage.remove_item(SESSION_KEY);
        }
    }

    fn locale(&self) -> Option<String> {
        let storage = storage_utils::local_storage().ok()?;
        storage.get_item(LOCALE_KEY).ok().flatten()
    }

    fn set_locale(&self, locale: &str) {
        if let Ok(storage) = storage_utils::local_storage() {
            let _ = storage.set_item(LOCALE_KEY, locale);
        }
    }
}
