//! Menu Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{FOOD_PLACEHOLDER, RestaurantSummary};

/// Menu item entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: i64,
    #[serde(default)]
    pub restaurant_id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "crate::nullable::deserialize")]
    pub description: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default, deserialize_with = "crate::nullable::deserialize")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl MenuItem {
    pub fn image_or_placeholder(&self) -> &str {
        self.image_url.as_deref().unwrap_or(FOOD_PLACEHOLDER)
    }

    /// Items with a non-positive id cannot be linked to and are skipped.
    pub fn has_valid_id(&self) -> bool {
        self.id > 0
    }

    pub fn details_link(&self) -> String {
        format!("/product-details/{}", self.id)
    }
}

/// Restaurant header plus its menu (`GET /api/menu`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuPage {
    #[serde(default)]
    pub restaurant: Option<RestaurantSummary>,
    #[serde(default, deserialize_with = "crate::nullable::deserialize_vec")]
    pub menu_items: Vec<MenuItem>,
}

/// Random dish shown on the product page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedDish {
    pub id: i64,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default, deserialize_with = "crate::nullable::deserialize")]
    pub image_url: Option<String>,
}

impl RecommendedDish {
    pub fn image_or_placeholder(&self) -> &str {
        self.image_url.as_deref().unwrap_or(FOOD_PLACEHOLDER)
    }
}
