pub mod db;
pub mod cart {
    pub mod in_memory_store;
}
pub mod food_item {
    pub mod entity;
    pub mod repository;
}
