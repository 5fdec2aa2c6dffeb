//! Customer orders: history and tracking

use shared::models::{Order, OrderStatus, RestaurantFilter};

use crate::http::HttpClient;
use crate::messages::{self, Action};
use crate::{ClientError, ClientResult, FoodClient};

/// An order together with the delivery estimate of its restaurant
#[derive(Debug, Clone, PartialEq)]
pub struct OrderTracking {
    pub order: Order,
    /// Minutes, if the restaurant publishes a delivery time
    pub delivery_time: Option<i32>,
}

impl OrderTracking {
    pub fn delivery_text(&self) -> String {
        match self.delivery_time {
            Some(minutes) => format!("Время: {minutes} мин"),
            None => "Время: не указано".to_string(),
        }
    }

    /// Every tracking step, flagged when it matches the order status
    pub fn steps(&self) -> Vec<(OrderStatus, bool)> {
        OrderStatus::STEPS
            .iter()
            .map(|step| (step.clone(), *step == self.order.status))
            .collect()
    }
}

impl<H: HttpClient> FoodClient<H> {
    /// Orders of the logged-in customer
    pub async fn load_orders(&self) -> ClientResult<Vec<Order>> {
        let orders: Option<Vec<Order>> = self.http.get("/api/orders").await?;
        Ok(orders.unwrap_or_default())
    }

    pub async fn get_order(&self, order_id: i64) -> ClientResult<Order> {
        if order_id <= 0 {
            return Err(ClientError::input(messages::INVALID_ORDER_ID));
        }
        self.http.get(&format!("/api/order/{order_id}")).await
    }

    /// Load an order and look up its restaurant's delivery time.
    ///
    /// The restaurant list is needed for the estimate; failing to load it
    /// fails the whole page.
    pub async fn track_order(&self, order_id: i64) -> ClientResult<OrderTracking> {
        let order = self.get_order(order_id).await?;

        let restaurants = self
            .load_restaurants(&RestaurantFilter::new())
            .await
            .map_err(|e| {
                tracing::error!(error = %e, order_id, "Failed to load restaurants for tracking");
                ClientError::incomplete(Action::LoadRestaurantDetails.fallback())
            })?;

        let delivery_time = restaurants
            .iter()
            .find(|r| r.id == order.restaurant_id)
            .and_then(|r| r.delivery_minutes());
        if delivery_time.is_none() {
            tracing::debug!(order_id, restaurant_id = order.restaurant_id, "No delivery time");
        }

        Ok(OrderTracking {
            order,
            delivery_time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockHttpClient;
    use serde_json::json;
    use shared::Decimal;
    use std::str::FromStr;

    fn order_json(status: &str) -> serde_json::Value {
        json!({
            "id": 15, "user_id": 3, "restaurant_id": 7,
            "delivery_address": "ул. Пушкина, 10",
            "total_price": 1240.5, "status": status,
            "items": [
                {"id": 1, "menu_item_id": 11, "menu_name": "Хинкали", "menu_price": 420.25, "quantity": 2}
            ]
        })
    }

    #[tokio::test]
    async fn test_load_orders() {
        let client = MockHttpClient::new()
            .json(json!([order_json("preparing"), {"id": 16, "status": "delivered", "items": null}]))
            .json(json!(null))
            .into_client();

        let orders = client.load_orders().await.unwrap();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].status.label(), "Готовится");
        assert_eq!(orders[0].total_price, Decimal::from_str("1240.5").unwrap());
        assert_eq!(orders[0].items[0].menu_name, "Хинкали");
        assert!(orders[1].items.is_empty());

        assert!(client.load_orders().await.unwrap().is_empty());
        assert_eq!(client.http().routes(), vec!["GET /api/orders", "GET /api/orders"]);
    }

    #[tokio::test]
    async fn test_load_orders_failure() {
        let client = MockHttpClient::new().api_error(401, "").into_client();
        let err = client.load_orders().await.unwrap_err();
        assert_eq!(Action::LoadOrders.describe(&err), "Не удалось загрузить заказы");
    }

    #[tokio::test]
    async fn test_track_order() {
        let client = MockHttpClient::new()
            .json(order_json("en_route"))
            .json(json!({"restaurants": [
                {"id": 5, "name": "Другой", "delivery_time": 10},
                {"id": 7, "name": "Хинкальная", "delivery_time": {"Int32": 40, "Valid": true}}
            ]}))
            .into_client();

        let tracking = client.track_order(15).await.unwrap();
        assert_eq!(tracking.delivery_text(), "Время: 40 мин");

        let active: Vec<_> = tracking
            .steps()
            .into_iter()
            .filter(|(_, active)| *active)
            .map(|(step, _)| step)
            .collect();
        assert_eq!(active, vec![OrderStatus::EnRoute]);
        assert_eq!(tracking.steps().len(), 4);

        assert_eq!(
            client.http().routes(),
            vec!["GET /api/order/15", "GET /api/restaurants"]
        );
    }

    #[tokio::test]
    async fn test_track_order_without_delivery_time() {
        let client = MockHttpClient::new()
            .json(order_json("pending"))
            .json(json!([{"id": 7, "name": "Хинкальная", "delivery_time": 0}]))
            .into_client();
        let tracking = client.track_order(15).await.unwrap();
        assert_eq!(tracking.delivery_text(), "Время: не указано");
    }

    #[tokio::test]
    async fn test_track_unknown_status_marks_nothing() {
        let client = MockHttpClient::new()
            .json(order_json("cancelled"))
            .json(json!({"restaurants": []}))
            .into_client();
        let tracking = client.track_order(15).await.unwrap();
        assert!(tracking.steps().iter().all(|(_, active)| !active));
        assert_eq!(tracking.order.status.label(), "Неизвестный статус");
    }

    #[tokio::test]
    async fn test_track_order_errors() {
        let client = MockHttpClient::new().into_client();
        let err = client.track_order(0).await.unwrap_err();
        assert_eq!(Action::TrackOrder.describe(&err), "Неверный ID заказа");
        assert!(client.http().calls().is_empty());

        let client = MockHttpClient::new().error(500, "internal error").into_client();
        let err = client.track_order(15).await.unwrap_err();
        assert_eq!(
            Action::TrackOrder.describe(&err),
            "Не удалось разобрать ответ сервера: internal error"
        );

        let client = MockHttpClient::new().api_error(404, "Заказ не найден").into_client();
        let err = client.track_order(15).await.unwrap_err();
        assert_eq!(Action::TrackOrder.describe(&err), "Заказ не найден");

        let client = MockHttpClient::new()
            .json(order_json("pending"))
            .error(500, "{}")
            .into_client();
        let err = client.track_order(15).await.unwrap_err();
        assert_eq!(
            Action::TrackOrder.describe(&err),
            "Не удалось загрузить данные ресторана"
        );
    }
}
