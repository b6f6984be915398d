//! Platform keychain credential store
//!
//! Persists the session in the operating system keychain (macOS Keychain,
//! Windows Credential Manager, Linux Secret Service) via the `keyring`
//! crate, which gives the browser-profile durability the session needs
//! without writing tokens to disk in the clear.

use async_trait::async_trait;
use keyring::Entry;
use tracing::debug;

use super::CredentialStore;
use crate::error::StoreError;

/// Credential store backed by the platform keychain
///
/// Each store key becomes a keychain account under the configured service
/// name, so multiple clients (or tests) can coexist by namespacing the
/// service.
#[derive(Debug, Clone)]
pub struct KeyringStore {
    service: String,
}

impl KeyringStore {
    /// Create a store scoped to the given keychain service name
    #[must_use]
    pub fn new(service: impl Into<String>) -> Self {
        Self { service: service.into() }
    }

    fn entry(&self, key: &str) -> Result<Entry, StoreError> {
        Entry::new(&self.service, key).map_err(|e| StoreError::Backend(e.to_string()))
    }
}

#[async_trait]
impl CredentialStore for KeyringStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self.entry(key)?.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(other) => Err(StoreError::Backend(other.to_string())),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        debug!(service = %self.service, key = %key, "storing credential");
        self.entry(key)?.set_password(value).map_err(|e| StoreError::Backend(e.to_string()))
    }

    async fn clear(&self, keys: &[&str]) -> Result<(), StoreError> {
        debug!(service = %self.service, count = keys.len(), "clearing credentials");
        for key in keys {
            match self.entry(key)?.delete_credential() {
                Ok(()) | Err(keyring::Error::NoEntry) => {}
                Err(other) => return Err(StoreError::Backend(other.to_string())),
            }
        }
        Ok(())
    }
}
