//! Checkout and direct order placement

use shared::request::{CheckoutRequest, CreateOrderRequest};
use shared::response::{CreatedOrder, MessageResponse};

use super::{NextStep, routes};
use crate::http::HttpClient;
use crate::messages;
use crate::{ClientError, ClientResult, FoodClient};

fn validate_address(input: &str) -> ClientResult<String> {
    let address = input.trim();
    if address.is_empty() {
        return Err(ClientError::input(messages::DELIVERY_ADDRESS_REQUIRED));
    }
    Ok(address.to_string())
}

impl<H: HttpClient> FoodClient<H> {
    /// Turn the cart into an order. The promo code may be empty.
    ///
    /// A blank address is rejected without contacting the backend.
    pub async fn checkout(&self, delivery_address: &str, promo_code: &str) -> ClientResult<NextStep> {
        let request = CheckoutRequest {
            promo_code: promo_code.trim().to_string(),
            delivery_address: validate_address(delivery_address)?,
        };

        // The backend may answer with an empty body
        let _: Option<MessageResponse> = self.http.post("/api/checkout", &request).await?;
        tracing::info!("Order placed");
        Ok(NextStep::new(messages::ORDER_PLACED, routes::MY_ORDERS))
    }

    /// Create an order from the cart through `POST /api/order`
    pub async fn place_order(&self, delivery_address: &str) -> ClientResult<CreatedOrder> {
        let request = CreateOrderRequest {
            delivery_address: validate_address(delivery_address)?,
        };
        let created: CreatedOrder = self.http.post("/api/order", &request).await?;
        tracing::info!(order_id = created.order_id, "Order created");
        Ok(created)
    }
}
