//! Food Client - HTTP client for the food-ordering backend
//!
//! Provides the user actions of the food-ordering web pages (login, browsing
//! restaurants, cart, checkout, order tracking, restaurant menu management)
//! as typed async calls, plus a plain-text renderer for their results.
//!
//! Session cookies and the CSRF token are kept in a [`session::SessionJar`]
//! and can be persisted between runs with [`FoodClient::persist_session`].

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod messages;
pub mod session;
pub mod view;

#[cfg(test)]
mod testing;

pub use client::FoodClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};
pub use messages::Action;

// Re-export shared types for convenience
pub use shared;
