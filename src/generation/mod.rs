//! Text generation boundary
//!
//! The `TextGenerator` trait and its DeepSeek-backed implementation.

pub mod client;
pub mod types;

pub use client::{DeepSeekClient, GenerationRequest, TextGenerator, DEFAULT_SYSTEM_PROMPT};
