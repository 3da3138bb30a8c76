use chrono::{DateTime, Utc};

use super::errors::FoodItemError;
use crate::domain::shared::value_objects::ItemId;

/// A purchasable dish shown on the storefront.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodItem {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub price: f64,
    /// Image file name, resolved against the public base URL when rendered.
    pub image: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewFoodItemProps {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub category: String,
}

impl FoodItem {
    pub fn new(props: NewFoodItemProps) -> Result<Self, FoodItemError> {
        if props.name.trim().is_empty() {
            return Err(FoodItemError::NameEmpty);
        }

        if !props.price.is_finite() || props.price < 0.0 {
            return Err(FoodItemError::InvalidPrice);
        }

        if props.image.trim().is_empty() {
            return Err(FoodItemError::ImageEmpty);
        }

        if !is_plain_file_name(&props.image) {
            return Err(FoodItemError::InvalidImage);
        }

        let now = Utc::now();
        Ok(Self {
            id: ItemId::generate(),
            name: props.name,
            description: props.description,
            price: props.price,
            image: props.image,
            category: props.category,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: ItemId,
        name: String,
        description: String,
        price: f64,
        image: String,
        category: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
            image,
            category,
            created_at,
            updated_at,
        }
    }
}

/// Images are file names inside the images directory, never paths or URLs.
fn is_plain_file_name(image: &str) -> bool {
    !matches!(image, "." | "..") && !image.contains(['/', '\\', ':'])
}
