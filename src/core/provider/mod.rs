//! Identity provider seams.
//!
//! The authenticator talks to the identity provider through two narrow
//! traits, one per outbound call:
//!
//! - [`CredentialVerifier`]: validate a credential pair and return who it
//!   belongs to
//! - [`TagDirectory`]: list the tags attached to a user
//!
//! ## Implementations
//!
//! - `aws`: STS `GetCallerIdentity` + IAM `ListUserTags` (feature `aws`)
//! - `memory`: in-process directory for tests and benchmarks

use crate::core::types::{CredentialPair, IdentityDescriptor, TagSet};
use crate::error::ProviderError;

#[cfg(feature = "aws")]
pub mod aws;
pub mod memory;

#[cfg(feature = "aws")]
pub use aws::AwsProvider;
pub use memory::MemoryDirectory;

/// Validates caller-supplied credentials.
///
/// Implementations must not keep any client built from `credentials` past
/// the call.
pub trait CredentialVerifier {
    fn caller_identity(
        &self,
        credentials: &CredentialPair,
    ) -> Result<IdentityDescriptor, ProviderError>;
}

/// Read-only access to per-user tags.
pub trait TagDirectory {
    /// All tags for `username`, merged across pages, in provider order.
    fn user_tags(&self, username: &str) -> Result<TagSet, ProviderError>;
}

impl<T: CredentialVerifier + ?Sized> CredentialVerifier for &T {
    fn caller_identity(
        &self,
        credentials: &CredentialPair,
    ) -> Result<IdentityDescriptor, ProviderError> {
        (**self).caller_identity(credentials)
    }
}

impl<T: TagDirectory + ?Sized> TagDirectory for &T {
    fn user_tags(&self, username: &str) -> Result<TagSet, ProviderError> {
        (**self).user_tags(username)
    }
}
