//! Reading the bearer token's claims on the client.
//!
//! The client never holds the signing key, so claims are decoded without
//! signature verification. The server stays authoritative for every request;
//! the decoded `exp` is only used to schedule the session warning and cutoff.
//!
//! # Example
//!
//! ```ignore
//! use grc_session::jwt::decode_claims;
//!
//! let claims = decode_claims(token.expose_secret())?;
//! let left = claims.time_left_ms(chrono::Utc::now());
//! ```

mod claims;
mod decode;

pub use claims::TokenClaims;
pub use decode::{SessionToken, decode_claims};
