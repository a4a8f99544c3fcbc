//! Generative-language service integration
//!
//! The probe talks to the remote model through [`GenerateContentService`] so
//! that tests can substitute [`MockGenerateContentClient`] for the HTTP client.

pub mod gemini;
pub mod mock;

pub use gemini::GeminiHttpClient;
pub use mock::MockGenerateContentClient;

use crate::Result;
use async_trait::async_trait;
use gemini::types::{GenerateContentRequest, RawResponse};

#[async_trait]
pub trait GenerateContentService: Send + Sync {
    /// URL being called, safe to print (no secrets).
    fn endpoint(&self) -> String;

    /// Send one request. Non-success statuses are returned, not raised;
    /// only transport failures are errors.
    async fn generate_content(&self, request: &GenerateContentRequest) -> Result<RawResponse>;
}
