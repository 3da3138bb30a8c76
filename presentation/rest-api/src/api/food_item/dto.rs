use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::food_item::model::FoodItem;

#[derive(Debug, Clone, Object)]
pub struct CreateFoodItemRequest {
    /// Dish name (cannot be empty)
    pub name: String,
    /// Short description shown on the card
    #[oai(default)]
    pub description: String,
    /// Unit price, zero or more
    pub price: f64,
    /// Image file name served under `/images/`
    pub image: String,
    /// Menu category, e.g. "Salad" or "Rolls"
    #[oai(default)]
    pub category: String,
}

#[derive(Debug, Clone, Object)]
pub struct FoodItemResponse {
    /// Food item identifier
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub category: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<FoodItem> for FoodItemResponse {
    fn from(item: FoodItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name,
            description: item.description,
            price: item.price,
            image: item.image,
            category: item.category,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}
