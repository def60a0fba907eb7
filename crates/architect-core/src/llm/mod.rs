//! Generative backend abstractions.
//!
//! - `GenerativeBackend`: RPITIT trait for concrete service adapters
//! - `BoxGenerativeBackend`: object-safe wrapper for dynamic dispatch

pub mod backend;
pub mod box_backend;

pub use backend::GenerativeBackend;
pub use box_backend::BoxGenerativeBackend;
