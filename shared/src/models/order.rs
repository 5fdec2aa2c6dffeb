//! Order Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Order lifecycle as stored by the backend.
///
/// Unknown values are kept verbatim so a newer backend does not break
/// decoding; they render as "Неизвестный статус".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    /// Placed, not paid yet
    Pending,
    Preparing,
    EnRoute,
    Delivered,
    Other(String),
}

impl OrderStatus {
    /// Steps of the tracking page, in order.
    pub const STEPS: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::EnRoute,
        OrderStatus::Delivered,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Preparing => "preparing",
            Self::EnRoute => "en_route",
            Self::Delivered => "delivered",
            Self::Other(raw) => raw,
        }
    }

    /// Display text shown to the customer
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Не оплачен",
            Self::Preparing => "Готовится",
            Self::EnRoute => "В пути",
            Self::Delivered => "Доставлен",
            Self::Other(_) => "Неизвестный статус",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for OrderStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "pending" => Self::Pending,
            "preparing" => Self::Preparing,
            "en_route" => Self::EnRoute,
            "delivered" => Self::Delivered,
            _ => Self::Other(value),
        }
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        status.as_str().to_string()
    }
}

/// Error returned when parsing a status that the backend does not accept
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid order status '{0}', expected one of: pending, preparing, en_route, delivered")]
pub struct InvalidOrderStatus(pub String);

impl FromStr for OrderStatus {
    type Err = InvalidOrderStatus;

    /// Strict parse, used for status updates sent to the backend.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Self::from(s.trim().to_string()) {
            Self::Other(raw) => Err(InvalidOrderStatus(raw)),
            status => Ok(status),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order item (a snapshot of the menu row at order time)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub menu_item_id: i64,
    #[serde(default)]
    pub menu_name: String,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub menu_price: Decimal,
    pub quantity: i32,
}

/// Order entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub restaurant_id: i64,
    #[serde(default)]
    pub delivery_address: String,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
    pub status: OrderStatus,
    #[serde(default, deserialize_with = "crate::nullable::deserialize_vec")]
    pub items: Vec<OrderItem>,
}

impl Order {
    pub fn tracking_link(&self) -> String {
        format!("/order-status/{}", self.id)
    }
}
