pub mod shared {
    pub mod core {
        pub mod primitives;
    }
}

pub mod modules {
    pub mod accounts {
        pub mod core {
            pub mod account;
            pub mod errors;
            pub mod ports;
        }
        pub mod use_cases {
            pub mod open_account {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod query_accounts {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod close_account {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod change_balance {
                pub mod command;
                pub mod conflict;
                pub mod decide;
                pub mod handler;
                pub mod retry_policy;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
                pub mod http_error;
            }
            pub mod outbound {
                pub mod account_store_in_memory;
            }
        }
    }
}

pub mod shell;
