//! Identity metadata resolution.
//!
//! Reads a user's tags and extracts team, email and display name. A failed
//! lookup is [`MetadataUnavailable`]; [`Resolver::lookup`] recovers it into
//! empty metadata so it can never deny an otherwise valid authentication.

use tracing::{debug, warn};

use crate::core::config::TagKeys;
use crate::core::provider::TagDirectory;
use crate::core::team::TeamTable;
use crate::core::types::TagInfo;
use crate::error::{MetadataUnavailable, ProviderError};

/// Metadata for an authenticated user, or the reason there is none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Metadata {
    Tagged(TagInfo),
    Unavailable(MetadataUnavailable),
}

impl Metadata {
    /// Tag info, empty when the lookup failed.
    pub fn into_info(self) -> TagInfo {
        match self {
            Self::Tagged(info) => info,
            Self::Unavailable(_) => TagInfo::default(),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Tagged(_))
    }
}

/// Resolves tag metadata for usernames.
pub struct Resolver<D> {
    directory: D,
    teams: TeamTable,
    keys: TagKeys,
}

impl<D: TagDirectory> Resolver<D> {
    pub fn new(directory: D, teams: TeamTable, keys: TagKeys) -> Self {
        Self {
            directory,
            teams,
            keys,
        }
    }

    /// Fetch and interpret tags for `username`.
    ///
    /// # Errors
    ///
    /// Returns `MetadataUnavailable` carrying the provider error if the tag
    /// lookup fails for any reason.
    pub fn resolve(&self, username: &str) -> Result<TagInfo, MetadataUnavailable> {
        let tags = self
            .directory
            .user_tags(username)
            .map_err(|source: ProviderError| MetadataUnavailable {
                username: username.to_string(),
                source,
            })?;
        debug!(username = %username, tags = tags.len(), "fetched user tags");

        let team_full = tags.first(&self.keys.team).map(str::to_string);
        let team = self
            .teams
            .normalize(team_full.as_deref())
            .map(str::to_string);

        if let (Some(label), None) = (&team_full, &team) {
            debug!(username = %username, label = %label, "team label matched no keyword");
        }

        Ok(TagInfo {
            team,
            team_full,
            email: tags.first(&self.keys.email).map(str::to_string),
            full_name: tags.first(&self.keys.person).map(str::to_string),
        })
    }

    /// Like [`resolve`](Self::resolve), but a failed lookup degrades to
    /// [`Metadata::Unavailable`] instead of an error.
    pub fn lookup(&self, username: &str) -> Metadata {
        match self.resolve(username) {
            Ok(info) => Metadata::Tagged(info),
            Err(unavailable) => {
                warn!(
                    username = %username,
                    code = %unavailable.source.code(),
                    error = %unavailable.source,
                    "user metadata unavailable, continuing without tags"
                );
                Metadata::Unavailable(unavailable)
            }
        }
    }
}
