//! Domain value objects: BaseName, PackageName.
//!
//! # Design
//!
//! Both types are validated newtypes. The only way to obtain one is through
//! `parse`, so holding a `BaseName` proves the string already passed every
//! identifier rule and downstream code (name derivation, rendering) never
//! re-checks it.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::{error::DomainError, validation::IdentifierRules};

// ── BaseName ─────────────────────────────────────────────────────────────────

/// The user-supplied feature identifier a scene is derived from (e.g. `Login`).
///
/// Invariants:
/// - non-empty
/// - no path separators (`/`, `\`)
/// - no whitespace
/// - a valid identifier start followed by identifier characters, so that
///   every suffixed component name is a valid type name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BaseName(String);

impl BaseName {
    /// Validate `raw` and wrap it.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let raw = raw.as_ref();
        IdentifierRules::check_base_name(raw)?;
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Directory (and layout key) form of the name.
    pub fn to_directory_name(&self) -> String {
        self.0.to_lowercase()
    }
}

impl fmt::Display for BaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for BaseName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for BaseName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ── PackageName ──────────────────────────────────────────────────────────────

/// A dot-separated Java package, e.g. `com.example.app`.
///
/// Every segment follows the same identifier rules as [`BaseName`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PackageName(String);

impl PackageName {
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let raw = raw.as_ref();
        if raw.is_empty() {
            return Err(DomainError::invalid_package(raw, "package cannot be empty"));
        }

        for segment in raw.split('.') {
            if segment.is_empty() {
                return Err(DomainError::invalid_package(
                    raw,
                    "package segments cannot be empty",
                ));
            }
            if let Err(reason) = IdentifierRules::package_segment_violation(segment) {
                return Err(DomainError::invalid_package(
                    raw,
                    format!("segment '{segment}': {reason}"),
                ));
            }
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The package a scene's files live in: this package plus the scene
    /// directory as the last segment.  Fails when the directory name is a
    /// reserved word, e.g. a scene called `Default`.
    pub fn scene_package(&self, directory_name: &str) -> Result<String, DomainError> {
        let full = format!("{}.{}", self.0, directory_name);
        IdentifierRules::package_segment_violation(directory_name).map_err(|reason| {
            DomainError::invalid_package(&full, format!("scene directory {reason}"))
        })?;
        Ok(full)
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PackageName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
