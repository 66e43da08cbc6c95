// Composition root for the shift request service.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the gateway and session store.
// - Wire them into use case handlers and the HTTP router.

pub mod api_error;
pub mod config;
pub mod http;
pub mod seed;
pub mod state;
