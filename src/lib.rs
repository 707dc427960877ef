// Crate entry point. Re-export modules so tests and binaries can import them easily.
//
// Responsibilities
// - Only declare and expose modules. No business logic here.
//
// How it is used
// - Tests import modules from this crate root to reach the code under test.

pub mod modules {
    pub mod payments {
        pub mod core {
            pub mod record;
            pub mod store;
        }
        pub mod use_cases {
            pub mod list_payments {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod process_payment {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
