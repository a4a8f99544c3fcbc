use super::types::{GenerateContentRequest, RawResponse};
use crate::ai::GenerateContentService;
use crate::models::{Credential, DEFAULT_BASE_URL};
use crate::Result;
use async_trait::async_trait;
use reqwest::Client;

/// Minimal Gemini REST client: one `generateContent` POST, key in the query string.
pub struct GeminiHttpClient {
    client: Client,
    credential: Credential,
    model: String,
    base_url: String,
}

impl GeminiHttpClient {
    /// Construct a Gemini client.
    ///
    /// `model` should be the bare model ID (for example `gemini-2.0-flash-exp`);
    /// a leading `models/` segment is stripped.
    pub fn new(credential: Credential, model: String) -> Self {
        Self::new_with_client(credential, model, Client::new())
    }

    pub fn new_with_client(credential: Credential, model: String, client: Client) -> Self {
        let model = model.strip_prefix("models/").unwrap_or(&model).to_string();

        Self {
            client,
            credential,
            model,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Returns the configured model ID without the `models/` prefix.
    pub fn model(&self) -> &str {
        &self.model
    }

    fn url_with_key(&self, key: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, key
        )
    }
}

#[async_trait]
impl GenerateContentService for GeminiHttpClient {
    fn endpoint(&self) -> String {
        self.url_with_key("***")
    }

    async fn generate_content(&self, request: &GenerateContentRequest) -> Result<RawResponse> {
        tracing::debug!("Sending generateContent request to {}", self.endpoint());

        let response = self
            .client
            .post(self.url_with_key(self.credential.expose()))
            .json(request)
            .send()
            .await
            .map_err(|e| {
                // The request URL carries the key.
                let e = e.without_url();
                tracing::error!("Failed to send request to Gemini: {}", e);
                e
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| e.without_url())?;
        tracing::debug!("Gemini responded with status {} ({} bytes)", status, body.len());

        Ok(RawResponse { status, body })
    }
}
