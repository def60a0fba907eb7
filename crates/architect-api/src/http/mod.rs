//! HTTP/REST API layer for Woken Architect.
//!
//! Axum-based REST API at `/api/v1/` over the process-wide session, with
//! envelope response format and CORS support.

pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
