//! Gemini (Google Generative Language) REST backend.
//!
//! [`GeminiProvider`] implements the
//! [`GenerativeBackend`](architect_core::llm::GenerativeBackend) trait over
//! `models/{model}:generateContent`, for both structured text and images.

pub mod client;
pub mod types;

pub use client::GeminiProvider;
