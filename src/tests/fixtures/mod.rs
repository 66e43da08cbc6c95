// Shared builders and seeded stores for unit tests.

pub mod commands;
pub mod gateway;
pub mod http;
pub mod identity;
pub mod records;
