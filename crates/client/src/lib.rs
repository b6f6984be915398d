//! Rust client for the IMMOB real-estate backend.
//!
//! The crate is organized in three layers:
//! - [`store`]: durable credential persistence behind the
//!   [`CredentialStore`] trait, with keychain and in-memory backends.
//! - [`http`]: the authenticated [`ApiClient`]. It attaches the stored
//!   bearer token to every request and, on a 401, refreshes the token once
//!   and replays the request before surfacing an error.
//! - [`services`]: thin façades ([`AuthService`], [`PropertiesService`],
//!   [`ReviewsService`], [`NotificationsService`]) that map domain
//!   operations onto endpoints.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use immob_client::{ApiClient, AuthService, MemoryStore, PropertiesService, PropertyFilter};
//!
//! # async fn run() -> Result<(), immob_client::ApiError> {
//! let client = Arc::new(
//!     ApiClient::builder()
//!         .base_url("https://api.immob.example")
//!         .store(Arc::new(MemoryStore::new()))
//!         .build()?,
//! );
//!
//! let auth = AuthService::new(Arc::clone(&client));
//! auth.login("jdoe", "secret").await?;
//!
//! let properties = PropertiesService::new(client);
//! let page = properties.list(&PropertyFilter::default()).await?;
//! println!("{} listings", page.count);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod services;
pub mod session;
pub mod store;

pub use config::ApiConfig;
pub use error::{ApiError, ApiErrorCategory, StoreError};
pub use http::{ApiClient, ApiClientBuilder};
pub use services::{
    AuthService, NotificationsService, PropertiesService, PropertyFilter, ReviewFilter,
    ReviewsService,
};
pub use session::Session;
pub use store::{CredentialStore, KeyringStore, MemoryStore};
