#[derive(Debug, thiserror::Error)]
pub enum FoodItemError {
    #[error("food_item.name_empty")]
    NameEmpty,
    #[error("food_item.invalid_price")]
    InvalidPrice,
    #[error("food_item.image_empty")]
    ImageEmpty,
    #[error("food_item.invalid_image")]
    InvalidImage,
    #[error("food_item.not_found")]
    NotFound,
    #[error("food_item.already_exists")]
    AlreadyExists,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
