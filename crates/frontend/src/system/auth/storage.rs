//! Bearer token held by the browser
//!
//! The token is issued elsewhere and only read here: `localStorage` first,
//! then `sessionStorage`, under the configured key.

use crate::shared::gateway::CredentialProvider;
use web_sys::{window, Storage};

fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

fn get_session_storage() -> Option<Storage> {
    window()?.session_storage().ok()?
}

fn read(storage: Option<Storage>, key: &str) -> Option<String> {
    storage?
        .get_item(key)
        .ok()?
        .filter(|token| !token.trim().is_empty())
}

/// Get the access token from localStorage, falling back to sessionStorage
pub fn get_access_token(key: &str) -> Option<String> {
    read(get_local_storage(), key).or_else(|| read(get_session_storage(), key))
}

pub fn has_token(key: &str) -> bool {
    get_access_token(key).is_some()
}

/// Remove the token from both storages
pub fn clear_token(key: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(key);
    }
    if let Some(storage) = get_session_storage() {
        let _ = storage.remove_item(key);
    }
}

/// Credential provider reading browser storage on every request
#[derive(Debug, Clone)]
pub struct BrowserCredentials {
    key: String,
}

impl BrowserCredentials {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
        }
    }
}

impl CredentialProvider for BrowserCredentials {
    fn access_token(&self) -> Option<String> {
        get_access_token(&self.key)
    }
}
