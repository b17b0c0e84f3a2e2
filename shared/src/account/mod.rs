pub mod handle;

use serde::{Deserialize, Serialize};

/// Represents the kind of user acting on the listings.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Posts surplus food.
    Donor,
    /// Accepts donations for themselves.
    Recipient,
    /// Accepts donations on behalf of an organization.
    Ngo,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Donor, Role::Recipient, Role::Ngo];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Donor => "donor",
            Role::Recipient => "recipient",
            Role::Ngo => "ngo",
        }
    }

    /// Indicates whether this role may post new donations.
    pub fn can_post(&self) -> bool {
        matches!(self, Role::Donor)
    }

    /// Indicates whether this role may accept available donations.
    pub fn can_accept(&self) -> bool {
        matches!(self, Role::Recipient | Role::Ngo)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

/// A role name that is not one of donor, recipient or ngo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl std::fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown role \"{}\"", self.0)
    }
}

impl std::error::Error for UnknownRole {}

/// The user performing an operation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub role: Role,
    pub name: String,
}

impl Actor {
    pub fn new(role: Role, name: impl Into<String>) -> Self {
        Self {
            role,
            name: name.into(),
        }
    }
}

/// A logged in user, stored until logout.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(rename = "type")]
    pub role: Role,
    pub email: lettre::Address,
    /// Display name derived from the email address.
    pub name: String,
    pub login_time: chrono::DateTime<chrono::Utc>,
}

impl Session {
    pub fn actor(&self) -> Actor {
        Actor {
            role: self.role,
            name: self.name.clone(),
        }
    }
}
