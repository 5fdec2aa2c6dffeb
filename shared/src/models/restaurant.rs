//! Restaurant Model

use serde::{Deserialize, Serialize};

/// Restaurant entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: i64,
    /// Owner account
    #[serde(default)]
    pub user_id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "crate::nullable::deserialize")]
    pub cuisine_type: Option<String>,
    #[serde(default, deserialize_with = "crate::nullable::deserialize")]
    pub address: Option<String>,
    /// Minutes
    #[serde(default, deserialize_with = "crate::nullable::deserialize")]
    pub delivery_time: Option<i32>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Restaurant {
    /// Delivery time worth showing.
    ///
    /// Some handlers flatten a NULL column to `0`, which means "unknown".
    pub fn delivery_minutes(&self) -> Option<i32> {
        self.delivery_time.filter(|minutes| *minutes > 0)
    }

    /// Page listing this restaurant's menu
    pub fn menu_link(&self) -> String {
        format!("/menu?restaurant_id={}", self.id)
    }
}

/// Restaurant header returned together with a menu
///
/// `GET /api/menu` sends it with Go field names (`ID`, `Name`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantSummary {
    #[serde(alias = "ID")]
    pub id: i64,
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(default, alias = "Address", deserialize_with = "crate::nullable::deserialize")]
    pub address: Option<String>,
    #[serde(default, alias = "CuisineType", deserialize_with = "crate::nullable::deserialize")]
    pub cuisine_type: Option<String>,
}

/// Restaurant list filter (the three selects of the restaurants page)
///
/// `None` and the literal `"all"` both mean "no constraint"; such fields are
/// not sent at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RestaurantFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine_type: Option<String>,
    /// Upper bound in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_time: Option<String>,
    /// Lower bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
}

impl RestaurantFilter {
    pub const ALL: &'static str = "all";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cuisine_type(mut self, value: impl Into<String>) -> Self {
        self.cuisine_type = Self::select(value.into());
        self
    }

    pub fn with_delivery_time(mut self, value: impl Into<String>) -> Self {
        self.delivery_time = Self::select(value.into());
        self
    }

    pub fn with_rating(mut self, value: impl Into<String>) -> Self {
        self.rating = Self::select(value.into());
        self
    }

    /// Drops `"all"` and empty selections.
    pub fn normalized(self) -> Self {
        Self {
            cuisine_type: self.cuisine_type.and_then(Self::select),
            delivery_time: self.delivery_time.and_then(Self::select),
            rating: self.rating.and_then(Self::select),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cuisine_type.is_none() && self.delivery_time.is_none() && self.rating.is_none()
    }

    fn select(value: String) -> Option<String> {
        let value = value.trim();
        if value.is_empty() || value == Self::ALL {
            None
        } else {
            Some(value.to_string())
        }
    }
}
