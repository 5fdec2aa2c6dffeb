//! Data models
//!
//! Entities as the backend returns them. IDs are `i64`, money is `Decimal`,
//! optional backend columns are plain `Option`s (see [`crate::nullable`]).

pub mod cart;
pub mod menu;
pub mod order;
pub mod restaurant;
pub mod role;
pub mod session;

// Re-exports
pub use cart::*;
pub use menu::*;
pub use order::*;
pub use restaurant::*;
pub use role::*;
pub use session::*;

/// Image shown for a restaurant, the backend stores none.
pub const RESTAURANT_PLACEHOLDER: &str = "/static/images/restaurant-placeholder.jpg";

/// Image shown for a dish without `image_url`.
pub const FOOD_PLACEHOLDER: &str = "/static/images/food-placeholder.jpg";
