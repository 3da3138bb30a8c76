use poem_openapi::{Enum, Object};

use business::domain::storefront::view::{CartControl, ItemView};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
#[oai(rename_all = "snake_case")]
pub enum ControlKind {
    Add,
    Stepper,
}

/// Control shown on the item card: an add button or a quantity stepper
#[derive(Debug, Clone, Object)]
pub struct CartControlResponse {
    pub kind: ControlKind,
    /// Accessible label of the add button
    #[oai(skip_serializing_if_is_none)]
    pub label: Option<String>,
    /// Quantity shown between the stepper buttons
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<u32>,
}

impl From<CartControl> for CartControlResponse {
    fn from(control: CartControl) -> Self {
        match control {
            CartControl::Add { label } => Self {
                kind: ControlKind::Add,
                label: Some(label),
                quantity: None,
            },
            CartControl::Stepper { quantity } => Self {
                kind: ControlKind::Stepper,
                label: None,
                quantity: Some(quantity.get()),
            },
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ItemViewResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Formatted price, e.g. "$9.5"
    pub price_label: String,
    pub image_url: String,
    pub rating_asset: String,
    pub control: CartControlResponse,
}

impl From<ItemView> for ItemViewResponse {
    fn from(view: ItemView) -> Self {
        Self {
            id: view.id.to_string(),
            name: view.name,
            description: view.description,
            price_label: view.price_label,
            image_url: view.image_url,
            rating_asset: view.rating_asset.to_string(),
            control: view.control.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroU32;

    #[test]
    fn should_expose_label_only_for_add_control() {
        let response: CartControlResponse = CartControl::Add {
            label: "Add Greek salad to cart".to_string(),
        }
        .into();

        assert_eq!(response.kind, ControlKind::Add);
        assert_eq!(response.label.as_deref(), Some("Add Greek salad to cart"));
        assert!(response.quantity.is_none());
    }

    #[test]
    fn should_expose_quantity_only_for_stepper_control() {
        let response: CartControlResponse = CartControl::Stepper {
            quantity: NonZeroU32::new(2).unwrap(),
        }
        .into();

        assert_eq!(response.kind, ControlKind::Stepper);
        assert_eq!(response.quantity, Some(2));
        assert!(response.label.is_none());
    }
}
