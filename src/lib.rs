//! iamgate - Authenticate IAM credentials and resolve team metadata.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/                # Command-line interface
//! │   ├── login           # Authenticate a key pair
//! │   ├── handle          # Run a Lambda proxy event locally
//! │   ├── team            # Inspect the team keyword table
//! │   └── completions     # Shell completions
//! └── core/               # Core library components
//!     ├── config          # .iamgate.toml management
//!     ├── types           # Credential pair, identity, tags
//!     ├── arn             # Username derivation
//!     ├── team            # Team keyword normalization
//!     ├── resolver        # Tag metadata resolution
//!     ├── authenticator   # Authentication pipeline
//!     ├── response        # Proxy event / response adapter
//!     └── provider/       # Identity provider backends
//!         ├── mod         # CredentialVerifier / TagDirectory traits
//!         ├── aws         # STS + IAM implementation
//!         └── memory      # In-process implementation
//! ```
//!
//! # Flow
//!
//! A credential pair is validated with STS `GetCallerIdentity`, the
//! username is taken from the returned ARN, the user's IAM tags are read
//! and the free-text `Team` tag is normalized to a canonical keyword. A
//! failed tag lookup degrades to empty metadata instead of failing.

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::authenticator::Authenticator;
pub use crate::core::config::{Config, TagKeys};
pub use crate::core::provider::{CredentialVerifier, MemoryDirectory, TagDirectory};
pub use crate::core::resolver::{Metadata, Resolver};
pub use crate::core::team::{TeamGroup, TeamTable};
pub use crate::core::types::{
    CredentialPair, EnrichedIdentity, IdentityDescriptor, ResolutionOutcome, Tag, TagInfo, TagSet,
};
pub use crate::error::{AuthFailure, FailureKind, MetadataUnavailable, ProviderError};
