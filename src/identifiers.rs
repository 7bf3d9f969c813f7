//! Domain identifier types for teams and worlds.
//!
//! These types provide type-safe wrappers around the string identifiers the
//! game server uses, so a team id can never be passed where a world id is
//! expected.

use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

/// Identifier of the team the agent plays for.
///
/// The game server addresses all state (location, score, runs) by team id.
///
/// # Examples
///
/// ```
/// use gridpilot::identifiers::TeamId;
///
/// let team = TeamId::new("1459");
/// assert_eq!(team.as_str(), "1459");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TeamId(String);

impl TeamId {
    /// Create a new team identifier.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert the identifier into its inner String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Borrow<str> for TeamId {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl From<String> for TeamId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for TeamId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for TeamId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Identifier of a gridworld instance on the game server.
///
/// Worlds are compared as opaque strings. The server reports the world a team
/// currently occupies in the same representation it accepts on entry, so
/// string equality is the membership test.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WorldId(String);

impl WorldId {
    /// Create a new world identifier.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert the identifier into its inner String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for WorldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Borrow<str> for WorldId {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl From<String> for WorldId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for WorldId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for WorldId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
