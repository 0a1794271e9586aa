pub mod shared {
    pub mod core {
        pub mod collection;
        pub mod errors;
        pub mod filter;
        pub mod form_state;
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod graphql_client;
        pub mod notifications;
        pub mod session;
    }
}

pub mod modules {
    pub mod users {
        pub mod core {
            pub mod change;
            pub mod patch;
            pub mod user;
        }
        pub mod use_cases {
            pub mod list_users {
                pub mod graphql;
                pub mod handler;
            }
            pub mod view_user {
                pub mod graphql;
                pub mod handler;
            }
            pub mod edit_user {
                pub mod command;
                pub mod graphql;
                pub mod handler;
            }
            pub mod create_user {
                pub mod command;
                pub mod graphql;
                pub mod handler;
            }
            pub mod delete_user {
                pub mod graphql;
                pub mod handler;
            }
            pub mod toggle_lock {
                pub mod graphql;
                pub mod handler;
            }
            pub mod change_password {
                pub mod command;
                pub mod graphql;
                pub mod handler;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod user_node;
            }
        }
    }
    pub mod auth {
        pub mod core {
            pub mod identity;
        }
        pub mod use_cases {
            pub mod login {
                pub mod command;
                pub mod graphql;
                pub mod handler;
            }
            pub mod sign_out {
                pub mod handler;
            }
            pub mod current_user {
                pub mod graphql;
                pub mod handler;
            }
        }
    }
    pub mod profiles {
        pub mod core {
            pub mod permissions;
            pub mod profile;
        }
        pub mod use_cases {
            pub mod list_profiles {
                pub mod graphql;
                pub mod handler;
            }
            pub mod view_profile_permissions {
                pub mod graphql;
                pub mod handler;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod profile_node;
            }
        }
    }
}

pub mod shell;
