//! Middleware and shared handler plumbing.

pub mod error;
