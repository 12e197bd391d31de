//! Flat permission storage for the signed-in user.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Returns true iff `required` is empty or every entry is in `held`.
///
/// ```rust
/// use grc_session::authz::has_all;
///
/// let held = ["read.risk", "update.risk"];
/// assert!(has_all(&["read.risk"], &held));
/// assert!(!has_all(&["read.risk", "delete.risk"], &held));
/// assert!(has_all::<&str>(&[], &held));
/// ```
pub fn has_all<S: AsRef<str>>(required: &[S], held: &[S]) -> bool {
    required
        .iter()
        .all(|r| held.iter().any(|h| h.as_ref() == r.as_ref()))
}

/// The set of capability strings granted to the current user.
///
/// Fetched once with the profile and held for the whole app session.
/// Serializes as a plain JSON array, the shape the profile endpoint returns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet {
    permissions: HashSet<String>,
}

impl PermissionSet {
    /// Create an empty permission set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Grant a permission.
    pub fn grant(&mut self, permission: impl Into<String>) {
        self.permissions.insert(permission.into());
    }

    /// Remove a permission.
    pub fn revoke(&mut self, permission: &str) {
        self.permissions.remove(permission);
    }

    pub fn contains(&self, permission: &str) -> bool {
        self.permissions.contains(permission)
    }

    /// AND semantics: an empty requirement always passes.
    pub fn has_all<S: AsRef<str>>(&self, required: &[S]) -> bool {
        required.iter().all(|r| self.contains(r.as_ref()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.permissions.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.permissions.len()
    }
}

impl<S: Into<String>> FromIterator<S> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            permissions: iter.into_iter().map(Into::into).collect(),
        }
    }
}
