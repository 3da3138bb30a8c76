use std::collections::HashMap;

use crate::domain::food_item::model::FoodItem;
use crate::domain::shared::value_objects::ItemId;

use super::model::Cart;

#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub item_id: ItemId,
    pub quantity: u32,
    /// `None` when the item is no longer in the catalog.
    pub unit_price: Option<f64>,
    pub line_total: f64,
}

/// Priced view of a cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSummary {
    pub lines: Vec<CartLine>,
    pub total_quantity: u64,
    pub total_amount: f64,
}

impl CartSummary {
    /// Prices every cart line against the catalog. Lines for items missing
    /// from the catalog keep their quantity and add nothing to the total.
    pub fn build(cart: &Cart, catalog: &[FoodItem]) -> Self {
        let prices: HashMap<&ItemId, f64> =
            catalog.iter().map(|item| (&item.id, item.price)).collect();

        let lines: Vec<CartLine> = cart
            .iter()
            .map(|(item_id, quantity)| {
                let unit_price = prices.get(item_id).copied();
                CartLine {
                    item_id: item_id.clone(),
                    quantity: quantity.get(),
                    unit_price,
                    line_total: unit_price.map_or(0.0, |price| price * f64::from(quantity.get())),
                }
            })
            .collect();

        let total_amount: f64 = lines.iter().map(|line| line.line_total).sum();

        Self {
            lines,
            total_quantity: cart.total_quantity(),
            total_amount,
        }
    }
}
