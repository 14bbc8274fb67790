//! Durable credential record
//!
//! One localStorage entry holding the bearer token. The session store is the
//! sole writer; other tabs observe changes through the storage event.

use crate::config::AppConfig;

/// Storage for the durable credential record
pub trait CredentialStore {
    /// Read the stored token, if any
    fn load(&self) -> Option<String>;

    /// Persist the token
    fn store(&self, token: &str);

    /// Remove the stored token
    fn clear(&self);
}

/// Browser localStorage implementation
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageCredentials;

impl LocalStorageCredentials {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl CredentialStore for LocalStorageCredentials {
    fn load(&self) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(AppConfig::TOKEN_KEY).ok().flatten())
    }

    fn store(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(AppConfig::TOKEN_KEY, token);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(AppConfig::TOKEN_KEY);
        }
    }
}
