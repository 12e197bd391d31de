//! Persistent client-side storage for the session.
//!
//! This is the browser-storage equivalent: a flat string key/value space that
//! survives reloads. Only the session monitor and the login flow write
//! [`TOKEN_KEY`] and [`EXPIRED_AT_KEY`]; every other key is a UI convenience
//! value (selected filters, tab indices) that logout wipes along with them.

mod file_store;
mod memory_store;
mod repository;

pub use file_store::FileSessionStorage;
pub use memory_store::InMemorySessionStorage;
pub use repository::SessionStorage;

/// Current bearer credential.
pub const TOKEN_KEY: &str = "token";

/// Wall-clock marker (epoch millis) written while the session is in its final
/// seconds, so a reload keeps showing the blocking indicator.
pub const EXPIRED_AT_KEY: &str = "expiredAt";
