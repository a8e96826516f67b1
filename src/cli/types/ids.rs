//! ID types for BFV entities.
//!
//! BFV identifiers are opaque strings (e.g.
//! `016PE7FISS000000VV0AG811VTE5EA5R`), so the wrappers validate
//! non-emptiness rather than parsing numbers.

use crate::error::{BfvError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for BFV team IDs (the `permanentId` of a team).
///
/// Ensures team IDs are handled consistently throughout the application and
/// cannot be mixed up with club or competition IDs.
///
/// # Examples
///
/// ```rust
/// use bfv_api::TeamId;
///
/// let team_id = TeamId::new("016PE7FISS000000VV0AG811VTE5EA5R");
/// assert_eq!(team_id.as_str(), "016PE7FISS000000VV0AG811VTE5EA5R");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(pub String);

impl TeamId {
    /// Create a new TeamId from a string value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TeamId {
    type Err = BfvError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Err(BfvError::EmptyId { kind: "Team" });
        }
        Ok(Self(s.to_string()))
    }
}

/// Type-safe wrapper for club IDs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClubId(pub String);

impl ClubId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClubId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ClubId {
    type Err = BfvError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Err(BfvError::EmptyId { kind: "Club" });
        }
        Ok(Self(s.to_string()))
    }
}

/// Type-safe wrapper for competition IDs (the `compoundId` of a competition).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompetitionId(pub String);

impl CompetitionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompetitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CompetitionId {
    type Err = BfvError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Err(BfvError::EmptyId { kind: "Competition" });
        }
        Ok(Self(s.to_string()))
    }
}

/// Type-safe wrapper for match IDs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(pub String);

impl MatchId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MatchId {
    type Err = BfvError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Err(BfvError::EmptyId { kind: "Match" });
        }
        Ok(Self(s.to_string()))
    }
}
