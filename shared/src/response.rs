//! Response bodies
//!
//! The backend has no envelope: successes are either the bare entity or a
//! small `{"message": ...}` object, failures are `{"error": ...}`.

use serde::{Deserialize, Serialize};

use crate::models::{Restaurant, Role};

/// `{"message": "..."}` acknowledgement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Failure body. `error` is optional because not every handler sets it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: String,
    pub role: Role,
}

/// `{"restaurants": [...]}` wrapper used by both restaurant lists
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RestaurantList {
    #[serde(default, deserialize_with = "crate::nullable::deserialize_vec")]
    pub restaurants: Vec<Restaurant>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedOrder {
    #[serde(default)]
    pub message: String,
    pub order_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedMenuItem {
    #[serde(default)]
    pub message: String,
    pub menu_item_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_without_error_field() {
        let body: ApiErrorBody = serde_json::from_str(r#"{"detail": "x"}"#).unwrap();
        assert!(body.error.is_none());
        let body: ApiErrorBody = serde_json::from_str(r#"{"error": "Корзина пуста"}"#).unwrap();
        assert_eq!(body.error.as_deref(), Some("Корзина пуста"));
    }

    #[test]
    fn test_restaurant_list_null() {
        let list: RestaurantList = serde_json::from_str(r#"{"restaurants": null}"#).unwrap();
        assert!(list.restaurants.is_empty());
    }

    #[test]
    fn test_login_response() {
        let resp: LoginResponse =
            serde_json::from_str(r#"{"message": "Вход выполнен успешно", "role": "restaurant"}"#).unwrap();
        assert_eq!(resp.role, Role::Restaurant);
    }
}
