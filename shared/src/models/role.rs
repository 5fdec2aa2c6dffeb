//! Role Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Account role, decides which pages the user may open
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Customer,
    /// Restaurant owner
    Restaurant,
    Rider,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Customer => "customer",
            Self::Restaurant => "restaurant",
            Self::Rider => "rider",
            Self::Other(raw) => raw,
        }
    }

    /// Page opened right after a successful login
    pub fn landing_page(&self) -> &'static str {
        match self {
            Self::Restaurant => "/restaurant-orders",
            Self::Customer => "/homepage",
            Self::Rider | Self::Other(_) => "/",
        }
    }

    /// Page a user with this role is sent to when opening a page meant for
    /// another role. `None` means no redirect.
    pub fn home_page(&self) -> Option<&'static str> {
        match self {
            Self::Customer => Some("/restaurants"),
            Self::Restaurant => Some("/restaurant-orders"),
            Self::Rider | Self::Other(_) => None,
        }
    }

    /// Restaurant accounts must name their cuisine on registration.
    pub fn requires_cuisine_type(&self) -> bool {
        matches!(self, Self::Restaurant)
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.as_str() {
            "customer" => Self::Customer,
            "restaurant" => Self::Restaurant,
            "rider" => Self::Rider,
            _ => Self::Other(value),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl FromStr for Role {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.trim().to_string()))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
