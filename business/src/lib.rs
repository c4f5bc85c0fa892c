pub mod application {
    pub mod wishlist {
        pub mod add;
        pub mod list;
        pub mod remove;
        pub mod service;
        #[cfg(test)]
        pub(crate) mod test_support;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod product {
        pub mod model;
        pub mod repository;
    }
    pub mod user {
        pub mod model;
        pub mod repository;
    }
    pub mod wishlist {
        pub mod cache;
        pub mod errors;
        pub mod model;
        pub mod page;
        pub mod repository;
        pub mod use_cases {
            pub mod add;
            pub mod list;
            pub mod remove;
        }
    }
}
