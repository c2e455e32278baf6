pub mod application {
    pub mod daily_log {
        pub mod delete;
        pub mod get_all;
        pub mod get_stats;
        pub mod record;
        pub mod toggle_completion;
    }
    pub mod recommendation {
        pub mod fetch;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod daily_log {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod stats;
        pub mod use_cases {
            pub mod delete;
            pub mod get_all;
            pub mod get_stats;
            pub mod record;
            pub mod toggle_completion;
        }
    }
    pub mod mood {
        pub mod errors;
        pub mod model;
    }
    pub mod recommendation {
        pub mod errors;
        pub mod fallback;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod fetch;
        }
    }
    pub mod weather {
        pub mod model;
    }
}
