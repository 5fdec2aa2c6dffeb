//! Plain-text rendering of what the pages show
//!
//! Each function returns the full text for one screen so the binary only has
//! to print it. Amounts always carry two decimals and the ruble sign.

use std::fmt::Write;

use shared::Decimal;
use shared::models::{CartSummary, MenuItem, Order, RecommendedDish, Restaurant};

use crate::api::{MenuView, NextStep, OrderTracking};
use crate::messages;

/// `1234.5` → `1234.50 ₽`
pub fn money(amount: Decimal) -> String {
    format!("{:.2} ₽", amount.round_dp(2))
}

/// The backend's message, then where the page would go next
pub fn next_step(next: &NextStep) -> String {
    if next.message.is_empty() {
        format!("→ {}\n", next.redirect)
    } else {
        format!("{}\n→ {}\n", next.message, next.redirect)
    }
}

pub fn restaurants(list: &[Restaurant]) -> String {
    if list.is_empty() {
        return format!("{}\n", messages::NO_RESTAURANTS);
    }

    let mut out = String::new();
    for restaurant in list {
        let cuisine = restaurant.cuisine_type.as_deref().unwrap_or("Не указан");
        let delivery = match restaurant.delivery_minutes() {
            Some(minutes) => format!("{minutes} мин"),
            None => "Не указано".to_string(),
        };
        let _ = writeln!(out, "{}", restaurant.name);
        let _ = writeln!(out, "  Тип кухни: {cuisine}");
        let _ = writeln!(out, "  Время доставки: {delivery}");
        let _ = writeln!(out, "  Рейтинг: {:.1}", restaurant.rating);
        let _ = writeln!(out, "  Подробнее: {}", restaurant.menu_link());
    }
    out
}

pub fn menu(view: &MenuView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.restaurant.name);
    let _ = writeln!(out, "{}", view.description());
    let _ = writeln!(out, "{}", view.address());
    let _ = writeln!(out);

    if view.items.is_empty() {
        let _ = writeln!(out, "{}", messages::EMPTY_MENU);
        return out;
    }
    for item in &view.items {
        let _ = writeln!(out, "[{}] {} | {}", item.id, item.name, money(item.price));
        if let Some(description) = &item.description {
            let _ = writeln!(out, "      {description}");
        }
    }
    out
}

pub fn recommended(dishes: &[RecommendedDish]) -> String {
    let mut out = String::new();
    for dish in dishes {
        let _ = writeln!(out, "[{}] {} | {}", dish.id, dish.name, money(dish.price));
    }
    out
}

/// Cart lines, the order summary and the total. The checkout hint is only
/// shown for a non-empty cart.
pub fn cart(summary: &CartSummary) -> String {
    if summary.is_empty() {
        return format!("{}\n", messages::EMPTY_CART);
    }

    let mut out = String::new();
    for line in &summary.lines {
        let _ = writeln!(out, "[{}] {}", line.id, line.name);
        let _ = writeln!(out, "  Цена: {}", money(line.price));
        let _ = writeln!(out, "  Количество: {}", line.quantity);
        let _ = writeln!(out, "  Итого: {}", money(line.line_total()));
    }

    let _ = writeln!(out);
    for line in &summary.lines {
        let _ = writeln!(out, "{} x{}  {}", line.name, line.quantity, money(line.line_total()));
    }
    let _ = writeln!(out, "Общая сумма: {}", money(summary.total));
    if summary.checkout_visible() {
        let _ = writeln!(out, "Оформить заказ: food checkout --address <адрес>");
    }
    out
}

/// The customer's order history
pub fn orders(list: &[Order]) -> String {
    if list.is_empty() {
        return format!("{}\n", messages::NO_ORDERS);
    }

    let mut out = String::new();
    for order in list {
        let _ = writeln!(out, "Заказ #{}", order.id);
        let _ = writeln!(out, "  Адрес доставки: {}", order.delivery_address);
        let _ = writeln!(out, "  Статус: {}", order.status.label());
        let _ = writeln!(out, "  Итоговая сумма: {:.2} рублей.", order.total_price.round_dp(2));
        let _ = writeln!(out, "  Товары:");
        for item in &order.items {
            let _ = writeln!(out, "    {} x{}", item.menu_name, item.quantity);
        }
        let _ = writeln!(out, "  Отследить заказ: {}", order.tracking_link());
    }
    out
}

pub fn tracking(view: &OrderTracking) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Заказ #{}", view.order.id);
    for (step, active) in view.steps() {
        let marker = if active { "●" } else { "○" };
        let _ = writeln!(out, "  {marker} {}", step.label());
    }
    let _ = writeln!(out, "{}", view.delivery_text());
    out
}

/// Menu of the manage-menu screen
pub fn managed_menu(items: &[MenuItem]) -> String {
    if items.is_empty() {
        return format!("{}\n", messages::EMPTY_MANAGED_MENU);
    }

    let mut out = String::new();
    for item in items {
        let _ = writeln!(out, "ID: {} | {} - {}", item.id, item.name, money(item.price));
    }
    out
}

/// Incoming orders of a restaurant
pub fn restaurant_orders(list: &[Order]) -> String {
    if list.is_empty() {
        return format!("{}\n", messages::NO_RESTAURANT_ORDERS);
    }

    let mut out = String::new();
    for order in list {
        let _ = writeln!(out, "Заказ #{} | Статус: {}", order.id, order.status);
        let _ = writeln!(out, "  Адрес доставки: {}", order.delivery_address);
        let _ = writeln!(out, "  Итого: {}", money(order.total_price));
        if order.items.is_empty() {
            let _ = writeln!(out, "  {}", messages::NO_ORDER_ITEMS);
        }
        for item in &order.items {
            let _ = writeln!(
                out,
                "  {} - {} x {}",
                item.menu_name,
                money(item.menu_price),
                item.quantity
            );
        }
    }
    out
}

/// Restaurant picker of the add-menu screen
pub fn restaurant_options(list: &[Restaurant]) -> String {
    let mut out = String::new();
    for restaurant in list {
        let _ = writeln!(out, "{}: {}", restaurant.id, restaurant.name);
    }
    out
}
