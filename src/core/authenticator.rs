//! Authentication pipeline.
//!
//! Validates a credential pair with the identity provider, derives the
//! username from the returned ARN, resolves tag metadata and assembles the
//! [`EnrichedIdentity`]:
//!
//! ```text
//! validate input → caller identity → username → metadata → assemble
//! ```
//!
//! Every run yields exactly one [`ResolutionOutcome`]. Metadata failures are
//! recovered; only bad input, rejected credentials and internal faults end
//! the run early.

use tracing::{debug, error, info, warn};

use crate::core::arn::username_from_arn;
use crate::core::config::Config;
use crate::core::provider::{CredentialVerifier, TagDirectory};
use crate::core::resolver::Resolver;
use crate::core::types::{CredentialPair, EnrichedIdentity, ResolutionOutcome};
use crate::error::{AuthFailure, ProviderError};

/// Runs the authentication pipeline against a provider.
pub struct Authenticator<V, D> {
    verifier: V,
    resolver: Resolver<D>,
}

impl<V: CredentialVerifier, D: TagDirectory> Authenticator<V, D> {
    pub fn new(verifier: V, resolver: Resolver<D>) -> Self {
        Self { verifier, resolver }
    }

    /// Build an authenticator from configuration, using the configured team
    /// table and tag keys.
    pub fn from_config(verifier: V, directory: D, config: &Config) -> Self {
        Self::new(
            verifier,
            Resolver::new(directory, config.teams.clone(), config.tags.clone()),
        )
    }

    /// Authenticate a credential pair.
    pub fn authenticate(&self, credentials: &CredentialPair) -> ResolutionOutcome {
        credentials.validate()?;

        let identity = self
            .verifier
            .caller_identity(credentials)
            .map_err(|e| match e {
                ProviderError::Rejected { code, message } => {
                    info!(
                        access_key = %credentials.masked_access_key(),
                        code = %code,
                        "credential rejected"
                    );
                    AuthFailure::authentication_failed(&code, &message)
                }
                ProviderError::Fault(detail) => {
                    error!(
                        access_key = %credentials.masked_access_key(),
                        error = %detail,
                        "credential validation fault"
                    );
                    AuthFailure::internal()
                }
            })?;

        let username = username_from_arn(&identity.arn).to_string();
        if username.is_empty() {
            error!(arn = %identity.arn, "provider returned an empty ARN");
            return Err(AuthFailure::internal());
        }
        info!(username = %username, arn = %identity.arn, "user authenticated");

        let info = self.resolver.lookup(&username).into_info();

        match &info.team {
            Some(team) => info!(username = %username, team = %team, "user has team"),
            None => warn!(username = %username, label = ?info.team_full, "user has no team"),
        }
        let email = match info.email {
            Some(email) => email,
            None => {
                debug!(username = %username, "no email tag, using username as email");
                username.clone()
            }
        };
        if info.full_name.is_none() {
            warn!(username = %username, "user has no person tag");
        }

        Ok(EnrichedIdentity {
            username,
            account: identity.account,
            arn: identity.arn,
            user_id: identity.user_id,
            team: info.team,
            team_full: info.team_full,
            email,
            full_name: info.full_name,
        })
    }
}
