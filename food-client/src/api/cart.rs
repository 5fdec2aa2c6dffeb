//! Cart: listing, quantity changes, removal
//!
//! Totals are recomputed from the lines the backend returns; every change is
//! followed by a fresh `GET /api/cart` instead of patching local state.

use shared::KnownError;
use shared::models::{CartLine, CartSummary};
use shared::request::{QuantityChange, SetQuantityRequest};
use shared::response::MessageResponse;

use crate::http::HttpClient;
use crate::messages;
use crate::{ClientError, ClientResult, FoodClient};

/// What happened to a cart line after a quantity change
#[derive(Debug, Clone, PartialEq)]
pub enum QuantityOutcome {
    Updated(CartSummary),
    /// The change would have reached zero and the user agreed to remove it
    Removed(CartSummary),
    /// The change would have reached zero and the user declined
    Kept,
}

impl<H: HttpClient> FoodClient<H> {
    pub async fn load_cart(&self) -> ClientResult<CartSummary> {
        let lines: Option<Vec<CartLine>> = self.http.get("/api/cart").await?;
        Ok(CartSummary::new(lines.unwrap_or_default()))
    }

    /// Apply a signed quantity delta to a cart line and reload the cart
    pub async fn update_quantity(&self, item_id: i64, change: i32) -> ClientResult<CartSummary> {
        let _: Option<MessageResponse> = self
            .http
            .patch(&format!("/api/cart/{item_id}"), &QuantityChange { change })
            .await?;
        self.load_cart().await
    }

    /// [`update_quantity`](Self::update_quantity), offering removal when the
    /// backend refuses to go below one unit.
    ///
    /// `confirm` gets the question to ask and returns the user's answer.
    pub async fn adjust_quantity<F>(
        &self,
        item_id: i64,
        change: i32,
        confirm: F,
    ) -> ClientResult<QuantityOutcome>
    where
        F: FnOnce(&str) -> bool,
    {
        match self.update_quantity(item_id, change).await {
            Ok(cart) => Ok(QuantityOutcome::Updated(cart)),
            Err(e) if e.is_known(KnownError::QuantityMustBePositive) => {
                if confirm(messages::CONFIRM_REMOVE_AT_ZERO) {
                    let cart = self.remove_from_cart(item_id).await?;
                    Ok(QuantityOutcome::Removed(cart))
                } else {
                    tracing::debug!(item_id, "Removal declined");
                    Ok(QuantityOutcome::Kept)
                }
            }
            Err(e) => Err(e),
        }
    }

    /// Set an absolute quantity and reload the cart
    pub async fn set_quantity(&self, cart_id: i64, quantity: i32) -> ClientResult<CartSummary> {
        if quantity <= 0 {
            return Err(ClientError::input(KnownError::QuantityMustBePositive.message()));
        }
        let _: Option<MessageResponse> = self
            .http
            .put("/api/cart", &SetQuantityRequest { cart_id, quantity })
            .await?;
        self.load_cart().await
    }

    /// Remove a cart line and reload the cart
    pub async fn remove_from_cart(&self, item_id: i64) -> ClientResult<CartSummary> {
        let _: Option<MessageResponse> = self.http.delete(&format!("/api/cart/{item_id}")).await?;
        tracing::debug!(item_id, "Removed from cart");
        self.load_cart().await
    }
}
