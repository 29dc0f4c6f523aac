//! Team keyword normalization.
//!
//! Maps free-text team labels ("Equipo Darwin", "SAPL Corp Team") onto a
//! small closed set of canonical keywords using an ordered table of
//! `(keyword, aliases)` groups. The first group with any alias contained in
//! the lower-cased label wins, so a group whose aliases contain a broader
//! group's alias must be declared before it.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// One canonical keyword and the substrings that select it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamGroup {
    pub keyword: String,
    pub aliases: Vec<String>,
}

impl TeamGroup {
    pub fn new(keyword: impl Into<String>, aliases: &[&str]) -> Self {
        Self {
            keyword: keyword.into(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Ordered team keyword table.
///
/// Immutable once built; aliases are stored lower-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamTable {
    groups: Vec<TeamGroup>,
}

impl TeamTable {
    /// Build a table from groups in priority order.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a keyword is empty or repeated, a group has
    /// no aliases, an alias is empty, or an alias can never match because an
    /// earlier keyword's alias is a substring of it.
    pub fn new(groups: Vec<TeamGroup>) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut normalized: Vec<TeamGroup> = Vec::with_capacity(groups.len());

        for group in groups {
            let keyword = group.keyword.trim().to_string();
            if keyword.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "teams.keyword",
                    reason: "keyword cannot be empty".to_string(),
                }
                .into());
            }
            if !seen.insert(keyword.clone()) {
                return Err(ConfigError::DuplicateKeyword(keyword).into());
            }
            if group.aliases.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "teams.aliases",
                    reason: format!("'{}' has no aliases", keyword),
                }
                .into());
            }

            let mut aliases = Vec::with_capacity(group.aliases.len());
            for alias in &group.aliases {
                let alias = alias.to_lowercase();
                if alias.trim().is_empty() {
                    return Err(ConfigError::InvalidValue {
                        field: "teams.aliases",
                        reason: format!("'{}' has an empty alias", keyword),
                    }
                    .into());
                }

                for earlier in &normalized {
                    if let Some(hit) = earlier.aliases.iter().find(|e| alias.contains(e.as_str())) {
                        return Err(ConfigError::ShadowedAlias {
                            keyword: keyword.clone(),
                            alias,
                            shadowed_by: earlier.keyword.clone(),
                            earlier: hit.clone(),
                        }
                        .into());
                    }
                }
                aliases.push(alias);
            }

            normalized.push(TeamGroup { keyword, aliases });
        }

        Ok(Self { groups: normalized })
    }

    /// Canonical keyword for a raw team label.
    ///
    /// Returns `None` for a missing or empty label, or when no alias matches.
    pub fn normalize(&self, label: Option<&str>) -> Option<&str> {
        let label = label?;
        if label.trim().is_empty() {
            return None;
        }
        let lowered = label.to_lowercase();

        let keyword = self
            .groups
            .iter()
            .find(|g| g.aliases.iter().any(|a| lowered.contains(a.as_str())))
            .map(|g| g.keyword.as_str());

        trace!(label = %label, keyword = ?keyword, "normalized team label");
        keyword
    }

    /// Groups in priority order.
    pub fn groups(&self) -> &[TeamGroup] {
        &self.groups
    }

    /// Whether `keyword` is one of the canonical keywords.
    pub fn contains(&self, keyword: &str) -> bool {
        self.groups.iter().any(|g| g.keyword == keyword)
    }
}

impl Default for TeamTable {
    fn default() -> Self {
        // The built-in table is lower-case, unique and shadow-free.
        Self {
            groups: constants::DEFAULT_TEAMS
                .iter()
                .map(|(keyword, aliases)| TeamGroup::new(*keyword, aliases))
                .collect(),
        }
    }
}
