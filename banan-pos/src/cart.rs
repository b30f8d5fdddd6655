//! Client-side cart of dishes about to be ordered for the selected table
//!
//! Lines are keyed by dish id. A line never holds quantity 0: any change that
//! would take it to 0 or below removes it.

use rust_decimal::Decimal;
use serde::Serialize;
use shared::models::{Dish, OrderItemCreate};

use crate::money::to_decimal;

/// One cart line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartItem {
    /// Dish id
    pub id: String,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub quantity: u32,
    pub note: String,
}

#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn get(&self, dish_id: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id == dish_id)
    }

    /// Increment an existing line by one, or append a new line with quantity 1
    pub fn add(&mut self, dish: &Dish) {
        if let Some(line) = self.items.iter_mut().find(|i| i.id == dish.id) {
            line.quantity = line.quantity.saturating_add(1);
            return;
        }
        self.items.push(CartItem {
            id: dish.id.clone(),
            name: dish.name.clone(),
            price: dish.price,
            image: dish.image.clone().unwrap_or_default(),
            quantity: 1,
            note: String::new(),
        });
    }

    /// Apply a signed delta. Returns the new quantity, `None` once the line is gone.
    pub fn change_quantity(&mut self, dish_id: &str, delta: i64) -> Option<u32> {
        let pos = self.items.iter().position(|i| i.id == dish_id)?;
        let next = i64::from(self.items[pos].quantity) + delta;
        if next <= 0 {
            self.items.remove(pos);
            return None;
        }
        let quantity = u32::try_from(next).unwrap_or(u32::MAX);
        self.items[pos].quantity = quantity;
        Some(quantity)
    }

    /// Returns false when no line matches
    pub fn set_note(&mut self, dish_id: &str, note: impl Into<String>) -> bool {
        match self.items.iter_mut().find(|i| i.id == dish_id) {
            Some(line) => {
                line.note = note.into();
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn total(&self) -> Decimal {
        self.items
            .iter()
            .map(|i| to_decimal(i.price) * Decimal::from(i.quantity))
            .sum()
    }

    /// Order-item payloads for a table; blank notes are omitted
    pub fn to_order_lines(&self, table_id: &str) -> Vec<OrderItemCreate> {
        self.items
            .iter()
            .map(|i| OrderItemCreate {
                table_id: table_id.to_string(),
                dish_id: i.id.clone(),
                quantity: i.quantity,
                note: Some(i.note.trim().to_string()).filter(|n| !n.is_empty()),
            })
            .collect()
    }
}
