//! Request bodies
//!
//! Field names are the backend's wire names; note the camelCase checkout body.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{OrderStatus, Role};

// =============================================================================
// Auth
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    /// Empty unless `role` is restaurant
    pub cuisine_type: String,
}

// =============================================================================
// Cart & checkout
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddToCartRequest {
    pub menu_item_id: i64,
    pub quantity: u32,
    pub restaurant_id: i64,
}

/// Signed delta for `PATCH /api/cart/{id}`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct QuantityChange {
    pub change: i32,
}

/// Absolute quantity for `PUT /api/cart`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SetQuantityRequest {
    pub cart_id: i64,
    pub quantity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub promo_code: String,
    pub delivery_address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub delivery_address: String,
}

// =============================================================================
// Restaurant admin
// =============================================================================

/// `?restaurant_id=` query of the restaurant-scoped reads
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RestaurantQuery {
    pub restaurant_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub restaurant_id: i64,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub description: String,
    pub image_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub menu_id: i64,
    pub restaurant_id: i64,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub description: String,
}

/// Body of `DELETE /api/menu`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MenuItemRef {
    pub menu_id: i64,
    pub restaurant_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub order_id: i64,
    pub restaurant_id: i64,
    pub status: OrderStatus,
}
