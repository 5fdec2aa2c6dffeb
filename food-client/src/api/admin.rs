//! Restaurant side: menu management and incoming orders
//!
//! The restaurant id is whatever the operator typed; ownership is checked by
//! the backend, not here.

use std::str::FromStr;

use shared::Decimal;
use shared::models::{MenuItem, Order, OrderStatus, Restaurant};
use shared::request::{MenuItemCreate, MenuItemRef, MenuItemUpdate, OrderStatusUpdate, RestaurantQuery};
use shared::response::{CreatedMenuItem, MessageResponse};

use super::catalog::RestaurantsBody;
use crate::http::HttpClient;
use crate::messages;
use crate::{ClientError, ClientResult, FoodClient};

/// Parse a typed restaurant id
pub fn parse_restaurant_id(input: &str) -> ClientResult<i64> {
    input
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| ClientError::input(messages::RESTAURANT_ID_REQUIRED))
}

fn parse_price(input: &str) -> Option<Decimal> {
    Decimal::from_str(input.trim()).ok().filter(|price| !price.is_sign_negative())
}

/// A new dish as entered in the add-menu form
#[derive(Debug, Clone, Default)]
pub struct MenuItemDraft {
    pub restaurant_id: i64,
    pub name: String,
    pub price: String,
    pub description: String,
    pub image_url: String,
}

impl MenuItemDraft {
    /// Restaurant, name and a readable price are required; the rest may be
    /// empty.
    pub fn into_request(self) -> ClientResult<MenuItemCreate> {
        let name = self.name.trim().to_string();
        let price = parse_price(&self.price);
        match price {
            Some(price) if self.restaurant_id > 0 && !name.is_empty() => Ok(MenuItemCreate {
                restaurant_id: self.restaurant_id,
                name,
                price,
                description: self.description.trim().to_string(),
                image_url: self.image_url.trim().to_string(),
            }),
            _ => Err(ClientError::input(messages::FILL_REQUIRED_FIELDS)),
        }
    }
}

/// Replacement values for an existing dish. Every field is required.
#[derive(Debug, Clone, Default)]
pub struct MenuItemEdit {
    pub menu_id: i64,
    pub restaurant_id: String,
    pub name: String,
    pub price: String,
    pub description: String,
}

impl MenuItemEdit {
    pub fn into_request(self) -> ClientResult<MenuItemUpdate> {
        let restaurant_id = parse_restaurant_id(&self.restaurant_id)?;
        let name = self.name.trim();
        let description = self.description.trim();
        if name.is_empty() || description.is_empty() {
            return Err(ClientError::input(messages::ALL_FIELDS_REQUIRED));
        }
        let price =
            parse_price(&self.price).ok_or_else(|| ClientError::input(messages::ALL_FIELDS_REQUIRED))?;

        Ok(MenuItemUpdate {
            menu_id: self.menu_id,
            restaurant_id,
            name: name.to_string(),
            price,
            description: description.to_string(),
        })
    }
}

impl<H: HttpClient> FoodClient<H> {
    /// Restaurants owned by the logged-in account
    pub async fn my_restaurants(&self) -> ClientResult<Vec<Restaurant>> {
        let body: Option<RestaurantsBody> = self.http.get("/api/restaurants/user").await?;
        Ok(body.map(RestaurantsBody::into_vec).unwrap_or_default())
    }

    /// Full menu of a restaurant, as the manage-menu screen lists it
    pub async fn load_menu_items(&self, restaurant_id: &str) -> ClientResult<Vec<MenuItem>> {
        let restaurant_id = parse_restaurant_id(restaurant_id)?;
        let items: Option<Vec<MenuItem>> = self
            .http
            .get_with_query("/api/menu-restaurants", &RestaurantQuery { restaurant_id })
            .await?;
        Ok(items.unwrap_or_default())
    }

    pub async fn add_menu_item(&self, draft: MenuItemDraft) -> ClientResult<CreatedMenuItem> {
        let request = draft.into_request()?;
        let created: CreatedMenuItem = self.http.post("/api/menu", &request).await?;
        tracing::info!(
            menu_item_id = created.menu_item_id,
            restaurant_id = request.restaurant_id,
            "Menu item added"
        );
        Ok(created)
    }

    pub async fn edit_menu_item(&self, edit: MenuItemEdit) -> ClientResult<MessageResponse> {
        let request = edit.into_request()?;
        let response: Option<MessageResponse> = self.http.put("/api/menu", &request).await?;
        tracing::info!(menu_id = request.menu_id, "Menu item updated");
        Ok(response.unwrap_or_default())
    }

    /// Delete a dish once `confirm` agrees. Returns `None` when declined.
    pub async fn delete_menu_item<F>(
        &self,
        menu_id: i64,
        restaurant_id: &str,
        confirm: F,
    ) -> ClientResult<Option<MessageResponse>>
    where
        F: FnOnce(&str) -> bool,
    {
        let restaurant_id = parse_restaurant_id(restaurant_id)?;
        if !confirm(messages::CONFIRM_DELETE_MENU_ITEM) {
            return Ok(None);
        }

        let body = MenuItemRef {
            menu_id,
            restaurant_id,
        };
        tracing::debug!(?body, "Deleting menu item");
        let response: Option<MessageResponse> = self.http.delete_with_body("/api/menu", &body).await?;
        Ok(Some(response.unwrap_or_default()))
    }

    /// Orders placed with a restaurant
    pub async fn load_restaurant_orders(&self, restaurant_id: &str) -> ClientResult<Vec<Order>> {
        let restaurant_id = parse_restaurant_id(restaurant_id)?;
        let orders: Option<Vec<Order>> = self
            .http
            .get_with_query("/api/restaurant/orders", &RestaurantQuery { restaurant_id })
            .await?;
        Ok(orders.unwrap_or_default())
    }

    pub async fn update_order_status(
        &self,
        order_id: i64,
        restaurant_id: i64,
        status: OrderStatus,
    ) -> ClientResult<MessageResponse> {
        let request = OrderStatusUpdate {
            order_id,
            restaurant_id,
            status,
        };
        let response: Option<MessageResponse> =
            self.http.put("/api/restaurant/orders", &request).await?;
        tracing::info!(order_id, status = %request.status, "Order status updated");
        Ok(response.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::Action;
    use crate::testing::MockHttpClient;
    use serde_json::json;

    #[test]
    fn test_parse_restaurant_id() {
        assert_eq!(parse_restaurant_id(" 7 ").unwrap(), 7);
        for input in ["", "  ", "abc", "0", "-3"] {
            let err = parse_restaurant_id(input).unwrap_err();
            assert_eq!(err.user_message("x"), "Укажите ID ресторана");
        }
    }

    #[tokio::test]
    async fn test_my_restaurants() {
        let client = MockHttpClient::new()
            .json(json!({"restaurants": [{"id": 4, "user_id": 9, "name": "Блинная"}]}))
            .json(json!({"restaurants": null}))
            .into_client();

        let restaurants = client.my_restaurants().await.unwrap();
        assert_eq!(restaurants[0].name, "Блинная");
        assert!(client.my_restaurants().await.unwrap().is_empty());
        assert_eq!(client.http().calls()[0].route(), "GET /api/restaurants/user");
    }

    #[tokio::test]
    async fn test_load_menu_items() {
        let client = MockHttpClient::new()
            .json(json!([
                {"id": 11, "restaurant_id": 4, "name": "Блин с икрой", "price": 590,
                 "description": {"String": "", "Valid": false}}
            ]))
            .into_client();

        let items = client.load_menu_items("4").await.unwrap();
        assert_eq!(items.len(), 1);
        assert!(items[0].description.is_none());

        let calls = client.http().calls();
        assert_eq!(calls[0].route(), "GET /api/menu-restaurants");
        assert_eq!(calls[0].query, Some(json!({"restaurant_id": 4})));
    }

    #[tokio::test]
    async fn test_restaurant_id_required_before_request() {
        let client = MockHttpClient::new().into_client();
        let err = client.load_menu_items("").await.unwrap_err();
        assert_eq!(Action::LoadMenuItems.describe(&err), "Укажите ID ресторана");
        let err = client.load_restaurant_orders(" ").await.unwrap_err();
        assert_eq!(Action::LoadRestaurantOrders.describe(&err), "Укажите ID ресторана");
        assert!(client.http().calls().is_empty());
    }

    #[tokio::test]
    async fn test_add_menu_item() {
        let client = MockHttpClient::new()
            .json(json!({"message": "Блюдо успешно добавлено", "menu_item_id": 31}))
            .into_client();

        let draft = MenuItemDraft {
            restaurant_id: 4,
            name: " Сырники ".into(),
            price: "249.90".into(),
            description: "Со сметаной".into(),
            image_url: String::new(),
        };
        let created = client.add_menu_item(draft).await.unwrap();
        assert_eq!(created.menu_item_id, 31);
        assert_eq!(
            client.http().calls()[0].body,
            Some(json!({
                "restaurant_id": 4, "name": "Сырники", "price": 249.9,
                "description": "Со сметаной", "image_url": ""
            }))
        );
    }

    #[tokio::test]
    async fn test_add_menu_item_validation() {
        let client = MockHttpClient::new().into_client();
        let draft = MenuItemDraft {
            restaurant_id: 4,
            name: "Сырники".into(),
            price: "дёшево".into(),
            ..Default::default()
        };
        let err = client.add_menu_item(draft).await.unwrap_err();
        assert_eq!(
            Action::AddMenuItem.describe(&err),
            "Пожалуйста, заполните все обязательные поля"
        );
        assert!(client.http().calls().is_empty());
    }

    #[tokio::test]
    async fn test_edit_menu_item() {
        let client = MockHttpClient::new()
            .json(json!({"message": "Блюдо обновлено"}))
            .into_client();

        let edit = MenuItemEdit {
            menu_id: 11,
            restaurant_id: "4".into(),
            name: "Блин".into(),
            price: "300".into(),
            description: "Тонкий".into(),
        };
        let response = client.edit_menu_item(edit).await.unwrap();
        assert_eq!(response.message, "Блюдо обновлено");

        let calls = client.http().calls();
        assert_eq!(calls[0].route(), "PUT /api/menu");
        assert_eq!(
            calls[0].body,
            Some(json!({
                "menu_id": 11, "restaurant_id": 4, "name": "Блин",
                "price": 300.0, "description": "Тонкий"
            }))
        );
    }

    #[tokio::test]
    async fn test_edit_requires_all_fields() {
        let client = MockHttpClient::new().into_client();
        let edit = MenuItemEdit {
            menu_id: 11,
            restaurant_id: "4".into(),
            name: "Блин".into(),
            price: "300".into(),
            description: "   ".into(),
        };
        let err = client.edit_menu_item(edit).await.unwrap_err();
        assert_eq!(Action::EditMenuItem.describe(&err), "Все поля обязательны");
        assert!(client.http().calls().is_empty());
    }

    #[tokio::test]
    async fn test_edit_failure_without_message() {
        let client = MockHttpClient::new().error(500, "{}").into_client();
        let edit = MenuItemEdit {
            menu_id: 11,
            restaurant_id: "4".into(),
            name: "Блин".into(),
            price: "300".into(),
            description: "Тонкий".into(),
        };
        let err = client.edit_menu_item(edit).await.unwrap_err();
        assert_eq!(Action::EditMenuItem.describe(&err), "Не удалось обновить блюдо");
    }

    #[tokio::test]
    async fn test_delete_menu_item_asks_first() {
        let client = MockHttpClient::new()
            .json(json!({"message": "Блюдо удалено"}))
            .into_client();

        let declined = client.delete_menu_item(11, "4", |_| false).await.unwrap();
        assert!(declined.is_none());
        assert!(client.http().calls().is_empty());

        let mut asked = None;
        let deleted = client
            .delete_menu_item(11, "4", |question| {
                asked = Some(question.to_string());
                true
            })
            .await
            .unwrap();
        assert_eq!(deleted.unwrap().message, "Блюдо удалено");
        assert_eq!(asked.as_deref(), Some("Вы уверены, что хотите удалить это блюдо?"));

        let calls = client.http().calls();
        assert_eq!(calls[0].route(), "DELETE /api/menu");
        assert_eq!(calls[0].body, Some(json!({"menu_id": 11, "restaurant_id": 4})));
    }

    #[tokio::test]
    async fn test_delete_forbidden() {
        let client = MockHttpClient::new()
            .api_error(403, "Нет прав на удаление этого блюда")
            .into_client();
        let err = client.delete_menu_item(11, "4", |_| true).await.unwrap_err();
        assert_eq!(
            Action::DeleteMenuItem.describe(&err),
            "Нет прав на удаление этого блюда"
        );
    }

    #[tokio::test]
    async fn test_restaurant_orders() {
        let client = MockHttpClient::new()
            .json(json!([
                {"id": 5, "restaurant_id": 4, "delivery_address": "ул. Мира, 1",
                 "total_price": 900, "status": "pending", "items": null}
            ]))
            .json(json!([]))
            .into_client();

        let orders = client.load_restaurant_orders("4").await.unwrap();
        assert_eq!(orders.len(), 1);
        assert!(orders[0].items.is_empty());
        assert!(client.load_restaurant_orders("4").await.unwrap().is_empty());
        assert_eq!(client.http().calls()[0].query, Some(json!({"restaurant_id": 4})));
    }

    #[tokio::test]
    async fn test_update_order_status() {
        let client = MockHttpClient::new()
            .json(json!({"message": "Статус обновлён"}))
            .api_error(400, "")
            .into_client();

        client.update_order_status(5, 4, OrderStatus::Delivered).await.unwrap();
        let calls = client.http().calls();
        assert_eq!(calls[0].route(), "PUT /api/restaurant/orders");
        assert_eq!(
            calls[0].body,
            Some(json!({"order_id": 5, "restaurant_id": 4, "status": "delivered"}))
        );

        let err = client
            .update_order_status(5, 4, OrderStatus::Preparing)
            .await
            .unwrap_err();
        assert_eq!(
            Action::UpdateOrderStatus.describe(&err),
            "Не удалось обновить статус заказа"
        );
    }
}
