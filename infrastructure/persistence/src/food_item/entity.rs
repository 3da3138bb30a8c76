use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Bson, Document, doc};
use serde::{Deserialize, Serialize};

use business::domain::food_item::model::FoodItem;
use business::domain::shared::value_objects::ItemId;

/// Document stored in the `foods` collection. Timestamps are epoch millis.
///
/// `_id` is an `ObjectId` for documents written by the original store and a
/// string for ids that are not 24-char hex. Both surface as a hex `ItemId`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItemDocument {
    #[serde(rename = "_id")]
    pub id: Bson,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub image: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

impl FoodItemDocument {
    pub fn from_domain(item: &FoodItem) -> Self {
        Self {
            id: id_to_bson(&item.id),
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price,
            image: item.image.clone(),
            category: item.category.clone(),
            created_at: item.created_at.timestamp_millis(),
            updated_at: item.updated_at.timestamp_millis(),
        }
    }

    pub fn into_domain(self) -> FoodItem {
        FoodItem::from_repository(
            ItemId::new(id_from_bson(self.id)),
            self.name,
            self.description,
            self.price,
            self.image,
            self.category,
            from_millis(self.created_at),
            from_millis(self.updated_at),
        )
    }
}

fn id_to_bson(id: &ItemId) -> Bson {
    match ObjectId::parse_str(id.as_str()) {
        Ok(oid) => Bson::ObjectId(oid),
        Err(_) => Bson::String(id.as_str().to_string()),
    }
}

fn id_from_bson(id: Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s,
        other => other.to_string(),
    }
}

/// Filter matching an item whether its `_id` was stored as an `ObjectId` or a string.
pub fn id_filter(id: &ItemId) -> Document {
    match ObjectId::parse_str(id.as_str()) {
        Ok(oid) => doc! { "_id": { "$in": [oid, id.as_str()] } },
        Err(_) => doc! { "_id": id.as_str() },
    }
}

fn from_millis(millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis).unwrap_or_default()
}
