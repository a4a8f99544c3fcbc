//! Diagnostic probe for the Gemini generative-language API
//!
//! Resolves an API key, sends a single search-augmented `generateContent`
//! request, and prints the raw and parsed response.

pub mod ai;
pub mod error;
pub mod models;
pub mod probe;
pub mod prompts;

pub use error::{Error, Result};
