//! Request-scoped data types.
//!
//! Every value here is built fresh for one authentication and dropped once
//! the outcome has been produced.

use std::fmt;

use serde::Serialize;
use zeroize::Zeroizing;

use crate::error::AuthFailure;

/// A caller-supplied access key / secret key pair.
///
/// The secret is zeroized on drop and never shown by `Debug`.
#[derive(Clone)]
pub struct CredentialPair {
    access_key: String,
    secret_key: Zeroizing<String>,
}

impl CredentialPair {
    /// Build a pair, trimming surrounding whitespace from both halves.
    pub fn new(access_key: impl AsRef<str>, secret_key: impl AsRef<str>) -> Self {
        Self {
            access_key: access_key.as_ref().trim().to_string(),
            secret_key: Zeroizing::new(secret_key.as_ref().trim().to_string()),
        }
    }

    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    pub fn secret_key(&self) -> &str {
        self.secret_key.as_str()
    }

    /// Check both halves are present.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidRequest` failure if either half is empty.
    pub fn validate(&self) -> Result<(), AuthFailure> {
        if self.access_key.is_empty() || self.secret_key.is_empty() {
            return Err(AuthFailure::missing_credentials());
        }
        Ok(())
    }

    /// Access key safe for logs: first and last four characters only.
    pub fn masked_access_key(&self) -> String {
        let chars: Vec<char> = self.access_key.chars().collect();
        if chars.len() <= 8 {
            return "*".repeat(chars.len());
        }
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}****{}", head, tail)
    }
}

impl fmt::Debug for CredentialPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialPair")
            .field("access_key", &self.masked_access_key())
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

/// Result of a successful "who am I" call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityDescriptor {
    pub arn: String,
    pub account: String,
    pub user_id: String,
}

/// A single key/value tag attached to a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Ordered tags for one user, as returned by the provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet(Vec<Tag>);

impl TagSet {
    pub fn new(tags: Vec<Tag>) -> Self {
        Self(tags)
    }

    /// Value of the first tag with `key`, exactly as tagged. Empty or blank
    /// values count as absent.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|t| t.key == key)
            .map(|t| t.value.as_str())
            .filter(|v| !v.trim().is_empty())
    }

    pub fn extend(&mut self, tags: impl IntoIterator<Item = Tag>) {
        self.0.extend(tags);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

}

impl FromIterator<Tag> for TagSet {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Metadata extracted from a user's tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagInfo {
    /// Canonical team keyword, if the label matched one.
    pub team: Option<String>,
    /// Raw team label as tagged.
    pub team_full: Option<String>,
    pub email: Option<String>,
    pub full_name: Option<String>,
}

/// The authenticated caller with organizational metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedIdentity {
    pub username: String,
    pub account: String,
    pub arn: String,
    pub user_id: String,
    pub team: Option<String>,
    pub team_full: Option<String>,
    /// Email tag, or the username when the tag is missing.
    pub email: String,
    pub full_name: Option<String>,
}

/// Exactly one of success or classified failure per authentication.
pub type ResolutionOutcome = std::result::Result<EnrichedIdentity, AuthFailure>;
