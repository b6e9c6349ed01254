pub mod shared {
    pub mod infrastructure {
        pub mod http {
            pub mod cors;
        }
    }
}

pub mod modules {
    pub mod items {
        pub mod core {
            pub mod errors;
            pub mod item;
            pub mod ports;
        }
        pub mod use_cases {
            pub mod list_items {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_item {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_item {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_item {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_item {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http_responses;
            }
            pub mod outbound {
                pub mod items_in_memory;
            }
        }
    }
}

pub mod shell;
