pub mod application {
    pub mod cart {
        pub mod add_item;
        pub mod clear;
        pub mod get;
        pub mod remove_item;
    }
    pub mod food_item {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
    }
    pub mod storefront {
        pub mod render;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod store;
        pub mod summary;
        pub mod use_cases {
            pub mod add_item;
            pub mod clear;
            pub mod get;
            pub mod remove_item;
        }
    }
    pub mod food_item {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
        }
    }
    pub mod storefront {
        pub mod errors;
        pub mod view;
        pub mod use_cases {
            pub mod render;
        }
    }
}
