use std::sync::Arc;

use logger::TracingLogger;
use persistence::cart::in_memory_store::InMemoryCartStore;
use persistence::food_item::repository::FoodItemRepositoryMongo;

use business::application::cart::add_item::AddToCartUseCaseImpl;
use business::application::cart::clear::ClearCartUseCaseImpl;
use business::application::cart::get::GetCartUseCaseImpl;
use business::application::cart::remove_item::RemoveFromCartUseCaseImpl;
use business::application::food_item::create::CreateFoodItemUseCaseImpl;
use business::application::food_item::delete::DeleteFoodItemUseCaseImpl;
use business::application::food_item::get_all::GetAllFoodItemsUseCaseImpl;
use business::application::food_item::get_by_id::GetFoodItemByIdUseCaseImpl;
use business::application::storefront::render::RenderStorefrontUseCaseImpl;
use business::domain::storefront::view::AssetBaseUrl;

use crate::api::cart::routes::CartApi;
use crate::api::food_item::routes::FoodItemApi;
use crate::api::health::routes::HealthApi;
use crate::api::storefront::routes::StorefrontApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub food_item_api: FoodItemApi,
    pub cart_api: CartApi,
    pub storefront_api: StorefrontApi,
}

impl DependencyContainer {
    pub fn new(database: &mongodb::Database, base_url: AssetBaseUrl) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = HealthApi::new();

        // Infrastructure adapters
        let food_item_repository = Arc::new(FoodItemRepositoryMongo::new(database));
        let cart_store = Arc::new(InMemoryCartStore::new());

        // Food item use cases
        let create_food_item_use_case = Arc::new(CreateFoodItemUseCaseImpl {
            repository: food_item_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_food_items_use_case = Arc::new(GetAllFoodItemsUseCaseImpl {
            repository: food_item_repository.clone(),
            logger: logger.clone(),
        });
        let get_food_item_by_id_use_case = Arc::new(GetFoodItemByIdUseCaseImpl {
            repository: food_item_repository.clone(),
            logger: logger.clone(),
        });
        let delete_food_item_use_case = Arc::new(DeleteFoodItemUseCaseImpl {
            repository: food_item_repository.clone(),
            logger: logger.clone(),
        });

        // Cart use cases
        let add_to_cart_use_case = Arc::new(AddToCartUseCaseImpl {
            store: cart_store.clone(),
            logger: logger.clone(),
        });
        let remove_from_cart_use_case = Arc::new(RemoveFromCartUseCaseImpl {
            store: cart_store.clone(),
            logger: logger.clone(),
        });
        let get_cart_use_case = Arc::new(GetCartUseCaseImpl {
            store: cart_store.clone(),
            food_item_repository: food_item_repository.clone(),
            logger: logger.clone(),
        });
        let clear_cart_use_case = Arc::new(ClearCartUseCaseImpl {
            store: cart_store.clone(),
            logger: logger.clone(),
        });

        // Storefront use cases
        let render_storefront_use_case = Arc::new(RenderStorefrontUseCaseImpl {
            food_item_repository,
            store: cart_store,
            base_url,
            logger,
        });

        let food_item_api = FoodItemApi::new(
            create_food_item_use_case,
            get_all_food_items_use_case,
            get_food_item_by_id_use_case,
            delete_food_item_use_case,
        );

        let cart_api = CartApi::new(
            add_to_cart_use_case,
            remove_from_cart_use_case,
            get_cart_use_case,
            clear_cart_use_case,
        );

        let storefront_api = StorefrontApi::new(render_storefront_use_case);

        Self {
            health_api,
            food_item_api,
            cart_api,
            storefront_api,
        }
    }
}
