//! BFV widget API: wire types, HTTP client, result parsing and response cache.

pub mod cache;
pub mod http;
pub mod result;
pub mod types;
