//! Error strings the backend is known to return
//!
//! The backend reports failures as `{"error": "<russian text>"}` with no
//! machine-readable code. Flows that need to branch on a specific failure
//! (the cart quantity confirm, for one) match on [`KnownError`] instead of
//! comparing strings inline.
//!
//! ```
//! use shared::KnownError;
//!
//! let err = KnownError::from_message(" Корзина пуста ");
//! assert_eq!(err, Some(KnownError::CartEmpty));
//! ```

use std::fmt;

/// Known backend error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownError {
    // ==================== Request ====================
    /// Body did not bind
    InvalidFormat,

    // ==================== Auth ====================
    InvalidCredentials,
    /// No session cookie
    NotAuthorized,
    InvalidSession,
    /// Handler found no user in the request context
    UserNotAuthorized,
    EmailExists,
    InvalidRole,
    CuisineTypeRequired,

    // ==================== Cart ====================
    InvalidDishOrQuantity,
    CartItemNotFound,
    /// A PATCH would take the quantity to zero or below
    QuantityMustBePositive,
    CartEmpty,
    CartEmptyOrUnavailable,
    MixedRestaurants,

    // ==================== Order ====================
    DeliveryAddressRequired,
    OrderNotFound,
    InvalidOrderStatus,

    // ==================== Menu / restaurant ====================
    DishNotFound,
    RestaurantNotFound,
    RestaurantIdRequired,
    NotRestaurantOwner,
    MenuEditForbidden,
    MenuDeleteForbidden,
}

impl KnownError {
    /// Exact text the backend sends in the `error` field
    pub const fn message(&self) -> &'static str {
        match self {
            KnownError::InvalidFormat => "Неверный формат данных",

            KnownError::InvalidCredentials => "Неверный email или пароль",
            KnownError::NotAuthorized => "Не авторизован",
            KnownError::InvalidSession => "Неверная сессия",
            KnownError::UserNotAuthorized => "Пользователь не авторизован",
            KnownError::EmailExists => "Email уже существует",
            KnownError::InvalidRole => "Неверная роль",
            KnownError::CuisineTypeRequired => "Тип кухни обязателен для ресторана",

            KnownError::InvalidDishOrQuantity => "Неверный ID блюда или количество",
            KnownError::CartItemNotFound => "Товар не найден в корзине",
            KnownError::QuantityMustBePositive => "Количество должно быть больше 0",
            KnownError::CartEmpty => "Корзина пуста",
            KnownError::CartEmptyOrUnavailable => "Корзина пуста или не удалось загрузить",
            KnownError::MixedRestaurants => "Все товары должны быть из одного ресторана",

            KnownError::DeliveryAddressRequired => "Адрес доставки обязателен",
            KnownError::OrderNotFound => "Заказ не найден",
            KnownError::InvalidOrderStatus => "Недопустимый статус заказа",

            KnownError::DishNotFound => "Блюдо не найдено",
            KnownError::RestaurantNotFound => "Ресторан не найден",
            KnownError::RestaurantIdRequired => "ID ресторана обязателен",
            KnownError::NotRestaurantOwner => "Вы не владелец этого ресторана",
            KnownError::MenuEditForbidden => "У вас нет прав для редактирования этого блюда",
            KnownError::MenuDeleteForbidden => "У вас нет прав для удаления этого блюда",
        }
    }

    /// Match a backend `error` string. Surrounding whitespace is ignored.
    pub fn from_message(message: &str) -> Option<Self> {
        let known = match message.trim() {
            "Неверный формат данных" => KnownError::InvalidFormat,

            "Неверный email или пароль" => KnownError::InvalidCredentials,
            "Не авторизован" => KnownError::NotAuthorized,
            "Неверная сессия" => KnownError::InvalidSession,
            "Пользователь не авторизован" => KnownError::UserNotAuthorized,
            "Email уже существует" => KnownError::EmailExists,
            "Неверная роль" => KnownError::InvalidRole,
            "Тип кухни обязателен для ресторана" => KnownError::CuisineTypeRequired,

            "Неверный ID блюда или количество" => KnownError::InvalidDishOrQuantity,
            "Товар не найден в корзине" => KnownError::CartItemNotFound,
            "Количество должно быть больше 0" => KnownError::QuantityMustBePositive,
            "Корзина пуста" => KnownError::CartEmpty,
            "Корзина пуста или не удалось загрузить" => KnownError::CartEmptyOrUnavailable,
            "Все товары должны быть из одного ресторана" => KnownError::MixedRestaurants,

            "Адрес доставки обязателен" => KnownError::DeliveryAddressRequired,
            "Заказ не найден" => KnownError::OrderNotFound,
            "Недопустимый статус заказа" => KnownError::InvalidOrderStatus,

            "Блюдо не найдено" => KnownError::DishNotFound,
            "Ресторан не найден" => KnownError::RestaurantNotFound,
            "ID ресторана обязателен" => KnownError::RestaurantIdRequired,
            "Вы не владелец этого ресторана" => KnownError::NotRestaurantOwner,
            "У вас нет прав для редактирования этого блюда" => KnownError::MenuEditForbidden,
            "У вас нет прав для удаления этого блюда" => KnownError::MenuDeleteForbidden,

            _ => return None,
        };
        Some(known)
    }
}

impl fmt::Display for KnownError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
