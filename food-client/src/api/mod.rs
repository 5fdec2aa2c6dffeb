//! API layer: one module per screen of the web front-end
//!
//! Every operation validates its input, issues its requests through the
//! client's [`HttpClient`](crate::http::HttpClient), and returns typed data or
//! a [`ClientError`](crate::ClientError). Turning an error into the text shown
//! to the user is [`Action::describe`](crate::messages::Action::describe).

pub mod admin;
pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod orders;
pub mod product;

pub use admin::{MenuItemDraft, MenuItemEdit};
pub use auth::{AuthCheck, LoginOutcome, Registration};
pub use cart::QuantityOutcome;
pub use catalog::MenuView;
pub use orders::OrderTracking;

/// Page paths the front-end navigates to
pub mod routes {
    pub const LOGIN: &str = "/login";
    pub const MY_ORDERS: &str = "/my-orders";
    pub const CART: &str = "/cart";
}

/// Where to go after an action succeeded, and what to tell the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextStep {
    pub message: String,
    pub redirect: &'static str,
}

impl NextStep {
    pub fn new(message: impl Into<String>, redirect: &'static str) -> Self {
        Self {
            message: message.into(),
            redirect,
        }
    }
}
