pub mod shared {
    pub mod core {
        pub mod errors;
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod gateway;
        pub mod session_store;
    }
}

pub mod modules {
    pub mod identity {
        pub mod core {
            pub mod capabilities;
            pub mod password;
            pub mod user;
        }
        pub mod use_cases {
            pub mod authenticate {
                pub mod handler;
                pub mod inbound {
                    pub mod current_user;
                    pub mod http;
                }
            }
            pub mod authorize {
                pub mod handler;
            }
        }
    }
    pub mod shift_requests {
        pub mod core {
            pub mod request;
            pub mod submission;
        }
        pub mod use_cases {
            pub mod create_request {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod find_requests {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_submission {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod find_submissions {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
