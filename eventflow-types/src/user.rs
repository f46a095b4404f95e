//! User accounts and the fixed role set.

use crate::record::Keyed;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Access role of a user account.
///
/// Serialized as the lowercase role name on every wire and cache format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Full administrative access.
    Admin,
    /// Regular account.
    Common,
    /// Read-only account.
    Viewer,
}

impl UserRole {
    /// The lowercase wire name of the role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Common => "common",
            Self::Viewer => "viewer",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "common" => Ok(Self::Common),
            "viewer" => Ok(Self::Viewer),
            other => Err(crate::Error::UnknownRole(other.to_string())),
        }
    }
}

/// A user account record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable unique identifier, used as the storage key in every tier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Credential secret.
    pub password: String,
    /// Access role.
    pub role: UserRole,
    /// Whether the account may log in.
    pub active: bool,
}

impl Keyed for User {
    fn key(&self) -> &str {
        &self.id
    }
}
