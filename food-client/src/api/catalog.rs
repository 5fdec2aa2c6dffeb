//! Restaurant list and restaurant menu

use serde::Deserialize;
use shared::models::{MenuItem, MenuPage, Restaurant, RestaurantFilter, RestaurantSummary};
use shared::request::RestaurantQuery;
use shared::response::RestaurantList;

use crate::http::HttpClient;
use crate::messages;
use crate::{ClientError, ClientResult, FoodClient};

/// `GET /api/restaurants` answers `{"restaurants": [...]}`; older builds sent
/// the bare array.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum RestaurantsBody {
    Bare(Vec<Restaurant>),
    Wrapped(RestaurantList),
}

impl RestaurantsBody {
    pub(crate) fn into_vec(self) -> Vec<Restaurant> {
        match self {
            Self::Bare(restaurants) => restaurants,
            Self::Wrapped(list) => list.restaurants,
        }
    }
}

/// A restaurant's page: header and the dishes that can be shown
#[derive(Debug, Clone, PartialEq)]
pub struct MenuView {
    pub restaurant: RestaurantSummary,
    pub items: Vec<MenuItem>,
}

impl MenuView {
    pub fn description(&self) -> String {
        let cuisine = self
            .restaurant
            .cuisine_type
            .as_deref()
            .unwrap_or("традиционной кухни");
        format!("Испытайте вкус {cuisine} с нашими аутентичными блюдами.")
    }

    pub fn address(&self) -> &str {
        self.restaurant.address.as_deref().unwrap_or("Адрес не указан")
    }
}

impl<H: HttpClient> FoodClient<H> {
    /// Restaurants matching `filter`. Selections set to `all` are not sent.
    pub async fn load_restaurants(&self, filter: &RestaurantFilter) -> ClientResult<Vec<Restaurant>> {
        let filter = filter.clone().normalized();
        tracing::debug!(?filter, "Loading restaurants");

        let body: Option<RestaurantsBody> = self.http.get_with_query("/api/restaurants", &filter).await?;
        Ok(body.map(RestaurantsBody::into_vec).unwrap_or_default())
    }

    pub async fn load_menu(&self, restaurant_id: i64) -> ClientResult<MenuView> {
        if restaurant_id <= 0 {
            return Err(ClientError::input(messages::RESTAURANT_ID_MISSING));
        }

        let page: MenuPage = self
            .http
            .get_with_query("/api/menu", &RestaurantQuery { restaurant_id })
            .await?;
        let restaurant = page
            .restaurant
            .ok_or_else(|| ClientError::incomplete(messages::RESTAURANT_INFO_MISSING))?;

        let items = page
            .menu_items
            .into_iter()
            .filter(|item| {
                if !item.has_valid_id() {
                    tracing::warn!(id = item.id, name = %item.name, "Skipping menu item with invalid id");
                }
                item.has_valid_id()
            })
            .collect();

        Ok(MenuView { restaurant, items })
    }
}
