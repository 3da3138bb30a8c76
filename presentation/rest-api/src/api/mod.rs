pub mod error;
pub mod tags;
pub mod health {
    pub mod routes;
}
pub mod cart {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod food_item {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod storefront {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
