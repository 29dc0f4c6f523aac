//! In-memory identity provider.
//!
//! Holds registered users and their tags in process. Mirrors the error
//! codes AWS returns for unknown keys, bad signatures and missing users, so
//! the authenticator can be exercised end to end without a network.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::trace;

use super::{CredentialVerifier, TagDirectory};
use crate::core::arn::username_from_arn;
use crate::core::types::{CredentialPair, IdentityDescriptor, Tag, TagSet};
use crate::error::ProviderError;

#[derive(Debug)]
struct MemoryUser {
    secret_key: String,
    identity: IdentityDescriptor,
}

/// In-memory credential verifier and tag directory.
#[derive(Debug, Default)]
pub struct MemoryDirectory {
    users: HashMap<String, MemoryUser>,
    tags: HashMap<String, Vec<Tag>>,
    tag_errors: HashMap<String, ProviderError>,
    verify_calls: AtomicUsize,
    tag_calls: AtomicUsize,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a credential pair that resolves to `arn` in `account`.
    pub fn with_user(mut self, access_key: &str, secret_key: &str, arn: &str, account: &str) -> Self {
        let user_id = format!("AIDA{}", access_key.trim_start_matches("AKIA"));
        self.users.insert(
            access_key.to_string(),
            MemoryUser {
                secret_key: secret_key.to_string(),
                identity: IdentityDescriptor {
                    arn: arn.to_string(),
                    account: account.to_string(),
                    user_id,
                },
            },
        );
        self
    }

    /// Attach tags to `username`, in order.
    pub fn with_tags(mut self, username: &str, tags: &[(&str, &str)]) -> Self {
        self.tags
            .entry(username.to_string())
            .or_default()
            .extend(tags.iter().map(|(k, v)| Tag::new(*k, *v)));
        self
    }

    /// Make tag lookups for `username` fail with `error`.
    pub fn with_tag_error(mut self, username: &str, error: ProviderError) -> Self {
        self.tag_errors.insert(username.to_string(), error);
        self
    }

    /// Number of credential validations attempted.
    pub fn verify_calls(&self) -> usize {
        self.verify_calls.load(Ordering::SeqCst)
    }

    /// Number of tag lookups attempted.
    pub fn tag_calls(&self) -> usize {
        self.tag_calls.load(Ordering::SeqCst)
    }

    fn is_known_user(&self, username: &str) -> bool {
        self.users
            .values()
            .any(|u| username_from_arn(&u.identity.arn) == username)
    }
}

impl CredentialVerifier for MemoryDirectory {
    fn caller_identity(
        &self,
        credentials: &CredentialPair,
    ) -> Result<IdentityDescriptor, ProviderError> {
        self.verify_calls.fetch_add(1, Ordering::SeqCst);
        trace!(access_key = %credentials.masked_access_key(), "memory caller identity");

        let user = self.users.get(credentials.access_key()).ok_or_else(|| {
            ProviderError::rejected(
                "InvalidClientTokenId",
                "The security token included in the request is invalid.",
            )
        })?;

        if user.secret_key != credentials.secret_key() {
            return Err(ProviderError::rejected(
                "SignatureDoesNotMatch",
                "The request signature we calculated does not match the signature you provided.",
            ));
        }

        Ok(user.identity.clone())
    }
}

impl TagDirectory for MemoryDirectory {
    fn user_tags(&self, username: &str) -> Result<TagSet, ProviderError> {
        self.tag_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(error) = self.tag_errors.get(username) {
            return Err(error.clone());
        }
        if let Some(tags) = self.tags.get(username) {
            return Ok(TagSet::new(tags.clone()));
        }
        if self.is_known_user(username) {
            return Ok(TagSet::default());
        }
        Err(ProviderError::rejected(
            "NoSuchEntity",
            format!("The user with name {} cannot be found.", username),
        ))
    }
}
