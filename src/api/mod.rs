//! HTTP API for greenband
//!
//! Thin orchestration over the library pipeline: upload handling,
//! error-to-status mapping, and response framing.

pub mod handlers;
pub mod models;
pub mod routes;

pub use routes::create_router;
