use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{PermissionSet, SecretString};

// Request DTOs

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: SecretString,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<SecretString>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RefreshRequest<'a> {
    pub token: &'a SecretString,
}

// Response DTOs

#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub token: SecretString,
}

/// The signed-in user's profile.
///
/// Only the permission list is interpreted; every other field is kept as-is
/// for views to display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub permissions: PermissionSet,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Profile {
    pub fn with_permissions<I, S>(permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            permissions: permissions.into_iter().collect(),
            ..Default::default()
        }
    }
}

/// Standard response wrapper of the resource services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    /// Total row count for paginated listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_keeps_unknown_fields() {
        let json = r#"{
            "name": "Ana",
            "email": "ana@example.com",
            "company": "ACME",
            "permissions": ["read.risk", "update.execution.audit_program"]
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();

        assert_eq!(profile.name.as_deref(), Some("Ana"));
        assert!(profile.permissions.contains("update.execution.audit_program"));
        assert_eq!(profile.extra["company"], "ACME");
    }

    #[test]
    fn test_profile_without_permissions() {
        let profile: Profile = serde_json::from_str("{}").unwrap();
        assert!(profile.permissions.is_empty());
    }

    #[test]
    fn test_envelope_count_optional() {
        let page: Envelope<Vec<u32>> = serde_json::from_str(r#"{"data": [1, 2], "count": 10}"#).unwrap();
        assert_eq!(page.data, vec![1, 2]);
        assert_eq!(page.count, Some(10));

        let single: Envelope<u32> = serde_json::from_str(r#"{"data": 7}"#).unwrap();
        assert_eq!(single.count, None);
    }

    #[test]
    fn test_credentials_serialize_password() {
        let creds = Credentials::new("ana@example.com", "hunter22");
        let value = serde_json::to_value(&creds).unwrap();
        assert_eq!(value["password"], "hunter22");
        assert!(!format!("{creds:?}").contains("hunter22"));
    }
}
