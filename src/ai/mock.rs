use super::gemini::types::{GenerateContentRequest, RawResponse};
use super::GenerateContentService;
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Canned stand-in for the Gemini endpoint.
pub struct MockGenerateContentClient {
    response: Option<RawResponse>,
    requests: Arc<Mutex<Vec<GenerateContentRequest>>>,
}

impl MockGenerateContentClient {
    pub fn new() -> Self {
        Self {
            response: None,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_response(mut self, status: u16, body: impl Into<String>) -> Self {
        self.response = Some(RawResponse {
            status,
            body: body.into(),
        });
        self
    }

    pub fn get_call_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or(0)
    }

    pub fn requests(&self) -> Vec<GenerateContentRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl Default for MockGenerateContentClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerateContentService for MockGenerateContentClient {
    fn endpoint(&self) -> String {
        "mock://gemini/v1beta/models/mock:generateContent?key=***".to_string()
    }

    async fn generate_content(&self, request: &GenerateContentRequest) -> Result<RawResponse> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }

        // No canned response behaves like an unreachable host.
        self.response
            .clone()
            .ok_or_else(|| Error::Gemini("mock transport: connection refused".to_string()))
    }
}
