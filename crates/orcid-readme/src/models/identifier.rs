//! ORCID iD newtype.

use std::fmt;
use std::str::FromStr;

use crate::config::api;
use crate::error::IdentifierError;

/// A validated ORCID iD such as `0000-0001-9812-1078`.
///
/// Four groups of four ASCII digits or letters separated by hyphens. The
/// trailing checksum character is stored upper-cased (`x` becomes `X`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrcidId(String);

impl OrcidId {
    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Public profile URL, e.g. `https://orcid.org/0000-0001-9812-1078`.
    #[must_use]
    pub fn profile_url(&self) -> String {
        format!("{}/{}", api::PROFILE_URL, self.0)
    }
}

impl FromStr for OrcidId {
    type Err = IdentifierError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(IdentifierError::Empty);
        }

        // Accept a pasted profile URL as well as the bare iD.
        let bare = trimmed
            .strip_prefix(api::PROFILE_URL)
            .or_else(|| trimmed.strip_prefix("http://orcid.org"))
            .map_or(trimmed, |rest| rest.trim_start_matches('/'));

        let groups: Vec<&str> = bare.split('-').collect();
        let well_formed = groups.len() == 4
            && groups
                .iter()
                .all(|group| group.len() == 4 && group.bytes().all(|b| b.is_ascii_alphanumeric()));

        if !well_formed {
            return Err(IdentifierError::Malformed(trimmed.to_string()));
        }

        Ok(Self(bare.to_ascii_uppercase()))
    }
}

impl fmt::Display for OrcidId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for OrcidId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
