//! HTTP access to the GRC backend.
//!
//! Two halves: the [`AuthApi`] trait (login, profile, refresh) that the session
//! monitor depends on, and generic CRUD over the entity resources. Both run on
//! [`ApiClient`]. Failed calls come back as [`ClientError`](crate::ClientError)
//! with a localized message picked from a per-endpoint [`StatusMessages`] table.

mod client;
mod messages;
#[cfg(any(test, feature = "mocks"))]
mod mock;
mod resources;
mod types;

pub use client::{ApiClient, AuthApi};
pub use messages::StatusMessages;
#[cfg(any(test, feature = "mocks"))]
pub use mock::MockAuthApi;
pub use resources::{AuditPhase, ResourceKind, ResourcePath};
pub use types::{Credentials, Envelope, Profile, RefreshRequest, TokenResponse};
