//! Cart Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::FOOD_PLACEHOLDER;

/// One line of the user's cart (`GET /api/cart`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Cart row id, used by PATCH/DELETE `/api/cart/{id}`
    pub id: i64,
    /// Some handlers call it `menu_id`
    #[serde(default, alias = "menu_id")]
    pub menu_item_id: Option<i64>,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity: i32,
    #[serde(default, deserialize_with = "crate::nullable::deserialize")]
    pub image_url: Option<String>,
}

impl CartLine {
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }

    pub fn image_or_placeholder(&self) -> &str {
        self.image_url.as_deref().unwrap_or(FOOD_PLACEHOLDER)
    }
}

/// Cart totals recomputed on the client from returned prices and quantities
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartSummary {
    pub lines: Vec<CartLine>,
    pub total: Decimal,
}

impl CartSummary {
    pub fn new(lines: Vec<CartLine>) -> Self {
        let total = lines.iter().map(CartLine::line_total).sum();
        Self { lines, total }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The checkout control is hidden for an empty cart.
    pub fn checkout_visible(&self) -> bool {
        !self.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn line(id: i64, price: &str, quantity: i32) -> CartLine {
        CartLine {
            id,
            menu_item_id: None,
            name: format!("item-{id}"),
            price: Decimal::from_str(price).unwrap(),
            quantity,
            image_url: None,
        }
    }

    #[test]
    fn test_summary_totals() {
        let summary = CartSummary::new(vec![line(1, "199.90", 2), line(2, "50", 1)]);
        assert_eq!(summary.total, Decimal::from_str("449.80").unwrap());
        assert!(summary.checkout_visible());
    }

    #[test]
    fn test_empty_cart_hides_checkout() {
        let summary = CartSummary::new(Vec::new());
        assert!(summary.is_empty());
        assert!(!summary.checkout_visible());
        assert_eq!(summary.total, Decimal::ZERO);
    }

    #[test]
    fn test_cart_line_accepts_menu_id_alias() {
        let json = r#"{"id": 5, "menu_id": 42, "name": "Борщ", "price": 300, "quantity": 2, "image_url": {"String": "", "Valid": false}}"#;
        let line: CartLine = serde_json::from_str(json).unwrap();
        assert_eq!(line.menu_item_id, Some(42));
        assert_eq!(line.line_total(), Decimal::from(600));
        assert_eq!(line.image_or_placeholder(), FOOD_PLACEHOLDER);
    }
}
