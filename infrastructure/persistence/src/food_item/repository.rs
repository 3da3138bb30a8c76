use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use mongodb::{Collection, Database};

use business::domain::errors::RepositoryError;
use business::domain::food_item::model::FoodItem;
use business::domain::food_item::repository::FoodItemRepository;
use business::domain::shared::value_objects::ItemId;

use super::entity::{FoodItemDocument, id_filter};

const COLLECTION: &str = "foods";
const DUPLICATE_KEY_CODE: i32 = 11000;

pub struct FoodItemRepositoryMongo {
    collection: Collection<FoodItemDocument>,
}

impl FoodItemRepositoryMongo {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(COLLECTION),
        }
    }
}

fn is_duplicate_key(error: &MongoError) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE
    )
}

#[async_trait]
impl FoodItemRepository for FoodItemRepositoryMongo {
    async fn get_all(&self) -> Result<Vec<FoodItem>, RepositoryError> {
        let mut cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "created_at": 1 })
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        let mut items = Vec::new();
        while cursor
            .advance()
            .await
            .map_err(|_| RepositoryError::DatabaseError)?
        {
            let document = cursor
                .deserialize_current()
                .map_err(|_| RepositoryError::DatabaseError)?;
            items.push(document.into_domain());
        }

        Ok(items)
    }

    async fn get_by_id(&self, id: &ItemId) -> Result<FoodItem, RepositoryError> {
        let document = self
            .collection
            .find_one(id_filter(id))
            .await
            .map_err(|_| RepositoryError::DatabaseError)?
            .ok_or(RepositoryError::NotFound)?;

        Ok(document.into_domain())
    }

    async fn save(&self, item: &FoodItem) -> Result<(), RepositoryError> {
        self.collection
            .insert_one(FoodItemDocument::from_domain(item))
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    RepositoryError::Duplicated
                } else {
                    RepositoryError::DatabaseError
                }
            })?;

        Ok(())
    }

    async fn delete(&self, id: &ItemId) -> Result<(), RepositoryError> {
        let result = self
            .collection
            .delete_one(id_filter(id))
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        if result.deleted_count == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
