use std::collections::HashSet;

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};

use super::TokenClaims;
use crate::{ClientError, SecretString};

/// Reads the claims of `token` without checking its signature.
///
/// Expiry is not validated here; an expired token still decodes so the caller
/// can tell "expired" apart from "no session".
pub fn decode_claims(token: &str) -> Result<TokenClaims, ClientError> {
    if token.trim().is_empty() {
        return Err(ClientError::TokenMissing);
    }

    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_nbf = false;
    validation.validate_aud = false;
    validation.required_spec_claims = HashSet::from(["exp".to_owned()]);

    let data = jsonwebtoken::decode::<TokenClaims>(token, &DecodingKey::from_secret(&[]), &validation)
        .map_err(|_| ClientError::TokenInvalid)?;

    Ok(data.claims)
}

/// A bearer token together with the claims decoded from it.
///
/// Built only through [`SessionToken::parse`], so `expires_at` is always
/// derived from the token it sits next to.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionToken {
    token: SecretString,
    claims: TokenClaims,
}

impl SessionToken {
    pub fn parse(token: impl Into<SecretString>) -> Result<Self, ClientError> {
        let token = token.into();
        let claims = decode_claims(token.expose_secret())?;
        Ok(Self { token, claims })
    }

    pub fn token(&self) -> &SecretString {
        &self.token
    }

    pub fn claims(&self) -> &TokenClaims {
        &self.claims
    }

    pub fn expires_at(&self) -> Result<DateTime<Utc>, ClientError> {
        self.claims.expires_at()
    }

    pub fn time_left_ms(&self, now: DateTime<Utc>) -> i64 {
        self.claims.time_left_ms(now)
    }
}
