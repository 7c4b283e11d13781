//! Blog API server building blocks, exposed as a library so the
//! integration tests under `tests/` can assemble the same app.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod state;
