//! Shared types for the food-ordering client
//!
//! Wire-level data model of the food-ordering backend: entities, request and
//! response bodies, the nullable-field decoding the backend forces on us, and
//! the catalogue of error strings the backend is known to return.

pub mod error;
pub mod models;
pub mod nullable;
pub mod request;
pub mod response;

// Re-exports
pub use rust_decimal::Decimal;
pub use serde::{Deserialize, Serialize};

pub use error::KnownError;
pub use models::{
    CartLine, CartSummary, MenuItem, Order, OrderItem, OrderStatus, RecommendedDish, Restaurant,
    RestaurantSummary, Role, SessionInfo,
};
