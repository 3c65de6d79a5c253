pub mod shared {
    pub mod application_error;
    pub mod inbound {
        pub mod http_error;
    }
    pub mod infrastructure {
        pub mod event_store;
        pub mod intent_outbox;
        pub mod session_store;
    }
}

pub mod modules {
    pub mod catalog {
        pub mod core {
            pub mod course;
            pub mod ports;
            pub mod seed;
        }
        pub mod use_cases {
            pub mod list_courses {
                pub mod filter;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod seed_catalog {
                pub mod handler;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod catalog_in_memory;
            }
        }
    }

    pub mod students {
        pub mod core {
            pub mod decision;
            pub mod events;
            pub mod evolve;
            pub mod intents;
            pub mod password_policy;
            pub mod reg_number;
            pub mod registration;
            pub mod state;
        }
        pub mod use_cases {
            pub mod sign_up {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod log_in {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod check_session {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod log_out {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_student {
                pub mod handler;
                pub mod view;
            }
            pub mod register_courses {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod update_profile {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod forgot_password {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod session;
            }
            pub mod outbound {
                pub mod intent_outbox;
                pub mod student_stream;
            }
        }
    }
}

pub mod shell;
