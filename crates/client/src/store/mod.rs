//! Credential persistence
//!
//! The [`CredentialStore`] trait abstracts durable key-value storage for the
//! session so the client can be tested against an in-memory backend and
//! shipped against the platform keychain. Session-level helpers are layered
//! on top of the raw `get`/`set`/`clear` contract as default methods.

mod keyring;
mod memory;

use async_trait::async_trait;

pub use self::keyring::KeyringStore;
pub use self::memory::MemoryStore;
use crate::error::StoreError;
use crate::session::{keys, Session};

/// Durable key-value persistence for the client session
///
/// Contract:
/// - `get` treats an absent key as a normal state (logged out), not an error.
/// - `set` is a side effect with no return contract beyond success.
/// - `clear` removes every listed entry and ignores ones already absent.
///
/// Last write wins; callers provide no concurrency control because all writes
/// originate from the request path of a single client.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Read a stored value
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store a value under a key, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove every listed entry
    async fn clear(&self, keys: &[&str]) -> Result<(), StoreError>;

    /// Currently stored access token
    async fn access_token(&self) -> Result<Option<String>, StoreError> {
        self.get(keys::ACCESS_TOKEN).await
    }

    /// Currently stored refresh token
    async fn refresh_token(&self) -> Result<Option<String>, StoreError> {
        self.get(keys::REFRESH_TOKEN).await
    }

    /// Reassemble the persisted session
    ///
    /// An undecodable user record is treated as absent rather than failing
    /// the whole read.
    async fn session(&self) -> Result<Session, StoreError> {
        let access = self.get(keys::ACCESS_TOKEN).await?;
        let refresh = self.get(keys::REFRESH_TOKEN).await?;
        let user = match self.get(keys::USER).await? {
            Some(raw) => serde_json::from_str(&raw).ok(),
            None => None,
        };
        Ok(Session::from_parts(access, refresh, user))
    }

    /// Persist a session, writing the token pair together
    async fn store_session(&self, session: &Session) -> Result<(), StoreError> {
        match (session.access_token(), session.refresh_token()) {
            (Some(access), Some(refresh)) => {
                self.set(keys::ACCESS_TOKEN, access).await?;
                self.set(keys::REFRESH_TOKEN, refresh).await?;
            }
            _ => self.clear(&[keys::ACCESS_TOKEN, keys::REFRESH_TOKEN]).await?,
        }
        match session.user() {
            Some(user) => {
                let encoded = serde_json::to_string(user)?;
                self.set(keys::USER, &encoded).await?;
            }
            None => self.clear(&[keys::USER]).await?,
        }
        Ok(())
    }

    /// Remove every session entry (logout)
    async fn clear_session(&self) -> Result<(), StoreError> {
        self.clear(&keys::ALL).await
    }
}
