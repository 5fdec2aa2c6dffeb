//! User-facing strings
//!
//! The backend and its users speak Russian; every message the client prints
//! on its own lives here. [`Action`] maps a failed action to the text shown
//! for it.

use crate::error::ClientError;

// ========== Validation ==========
pub const FILL_ALL_FIELDS: &str = "Пожалуйста, заполните все поля";
pub const FILL_REQUIRED_FIELDS: &str = "Пожалуйста, заполните все обязательные поля";
pub const CHOOSE_CUISINE: &str = "Пожалуйста, выберите тип кухни";
pub const DELIVERY_ADDRESS_REQUIRED: &str = "Пожалуйста, укажите адрес доставки";
pub const RESTAURANT_ID_REQUIRED: &str = "Укажите ID ресторана";
pub const RESTAURANT_ID_MISSING: &str = "ID ресторана не указан в URL";
pub const ALL_FIELDS_REQUIRED: &str = "Все поля обязательны";
pub const INVALID_ORDER_ID: &str = "Неверный ID заказа";
pub const CSRF_TOKEN_MISSING: &str = "CSRF-токен не найден";

// ========== Success ==========
pub const LOGIN_SUCCESS: &str = "Вход выполнен успешно!";
pub const REGISTER_SUCCESS: &str = "Регистрация прошла успешно! Пожалуйста, войдите.";
pub const ADDED_TO_CART: &str = "Товар добавлен в корзину!";
pub const ORDER_PLACED: &str = "Заказ успешно оформлен!";
pub const MENU_ITEM_ADDED: &str = "Блюдо успешно добавлено!";
pub const MENU_ITEM_UPDATED: &str = "Блюдо успешно обновлено!";
pub const MENU_ITEM_DELETED: &str = "Блюдо удалено!";
pub const ORDER_STATUS_UPDATED: &str = "Статус заказа обновлён!";

// ========== Confirmations ==========
pub const CONFIRM_REMOVE_AT_ZERO: &str =
    "Количество станет 0. Хотите удалить товар из корзины?";
pub const CONFIRM_DELETE_MENU_ITEM: &str = "Вы уверены, что хотите удалить это блюдо?";

// ========== Empty states ==========
pub const NO_RESTAURANTS: &str = "Рестораны не найдены.";
pub const EMPTY_MENU: &str = "Меню пусто.";
pub const EMPTY_MANAGED_MENU: &str = "Меню пусто. Добавьте блюда.";
pub const EMPTY_CART: &str = "Ваша корзина пуста.";
pub const NO_ORDERS: &str = "У вас пока нет заказов.";
pub const NO_RESTAURANT_ORDERS: &str = "Заказов нет.";
pub const NO_ORDER_ITEMS: &str = "Элементы заказа отсутствуют.";
pub const RESTAURANT_INFO_MISSING: &str = "Информация о ресторане не найдена";

// ========== Response shape ==========
pub const RESPONSE_NOT_JSON: &str = "Ответ сервера не в формате JSON";
pub const UNPARSABLE_RESPONSE_PREFIX: &str = "Не удалось разобрать ответ сервера";

/// A user action, for picking the message of its failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Login,
    Register,
    Logout,
    CheckSession,
    LoadRestaurants,
    LoadMenu,
    LoadRecommended,
    AddToCart,
    LoadCart,
    UpdateQuantity,
    SetQuantity,
    RemoveFromCart,
    Checkout,
    PlaceOrder,
    LoadOrders,
    TrackOrder,
    LoadRestaurantDetails,
    LoadMyRestaurants,
    LoadMenuItems,
    AddMenuItem,
    EditMenuItem,
    DeleteMenuItem,
    LoadRestaurantOrders,
    UpdateOrderStatus,
}

impl Action {
    /// Shown when the backend gives no message of its own
    pub const fn fallback(&self) -> &'static str {
        match self {
            Action::Login => "Не удалось войти",
            Action::Register => "Не удалось зарегистрироваться",
            Action::Logout => "Не удалось выйти из системы",
            Action::CheckSession => "Не удалось проверить сессию",
            Action::LoadRestaurants | Action::LoadMyRestaurants => "Не удалось загрузить рестораны",
            Action::LoadMenu | Action::LoadMenuItems => "Не удалось загрузить меню",
            Action::LoadRecommended => "Не удалось загрузить рекомендованные блюда",
            Action::AddToCart => "Не удалось обновить корзину",
            Action::LoadCart => "Не удалось загрузить корзину",
            Action::UpdateQuantity | Action::SetQuantity => "Не удалось обновить количество",
            Action::RemoveFromCart => "Не удалось удалить товар из корзины",
            Action::Checkout | Action::PlaceOrder => "Не удалось оформить заказ",
            Action::LoadOrders | Action::LoadRestaurantOrders => "Не удалось загрузить заказы",
            Action::TrackOrder => "Не удалось загрузить статус заказа",
            Action::LoadRestaurantDetails => "Не удалось загрузить данные ресторана",
            Action::AddMenuItem => "Не удалось добавить блюдо",
            Action::EditMenuItem => "Не удалось обновить блюдо",
            Action::DeleteMenuItem => "Не удалось удалить блюдо",
            Action::UpdateOrderStatus => "Не удалось обновить статус заказа",
        }
    }

    /// Message for a failure of this action
    pub fn describe(&self, error: &ClientError) -> String {
        match (self, error) {
            // The menu page shows a non-JSON error body as is.
            (Action::LoadMenu, error) => match error.body_text().map(str::trim) {
                Some(text) if !text.is_empty() => text.to_string(),
                _ => error.user_message(self.fallback()),
            },
            (Action::TrackOrder, error) => match error.body_text() {
                Some(text) => format!("{UNPARSABLE_RESPONSE_PREFIX}: {text}"),
                None => error.user_message(self.fallback()),
            },
            (Action::AddToCart, ClientError::InvalidResponse(_)) => RESPONSE_NOT_JSON.to_string(),
            (_, error) => error.user_message(self.fallback()),
        }
    }
}
