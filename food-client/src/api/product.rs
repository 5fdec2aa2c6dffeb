//! Product page: recommended dishes and "order now"

use shared::models::RecommendedDish;
use shared::request::AddToCartRequest;
use shared::response::MessageResponse;

use crate::http::HttpClient;
use crate::{ClientResult, FoodClient};

impl<H: HttpClient> FoodClient<H> {
    pub async fn recommended_dishes(&self) -> ClientResult<Vec<RecommendedDish>> {
        let dishes: Option<Vec<RecommendedDish>> = self.http.get("/api/recommended-dishes").await?;
        Ok(dishes.unwrap_or_default())
    }

    /// Put `quantity` units of a dish into the cart. The quantity is raised
    /// to one if lower.
    ///
    /// The backend must answer with JSON; anything else is reported as
    /// [`ClientError::InvalidResponse`](crate::ClientError::InvalidResponse).
    pub async fn add_to_cart(
        &self,
        menu_item_id: i64,
        quantity: u32,
        restaurant_id: i64,
    ) -> ClientResult<MessageResponse> {
        let request = AddToCartRequest {
            menu_item_id,
            quantity: quantity.max(1),
            restaurant_id,
        };
        tracing::debug!(menu_item_id, quantity = request.quantity, restaurant_id, "Adding to cart");
        self.http.post("/api/cart/add", &request).await
    }
}
