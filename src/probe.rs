//! The probe itself: build one request, send it, print what came back.

use crate::ai::gemini::types::{
    Content, GenerateContentRequest, Part, RawResponse, ResponseDocument, Tool,
};
use crate::ai::{GeminiHttpClient, GenerateContentService};
use crate::models::Config;
use crate::{Error, Result};
use std::io::Write;
use tracing::{debug, error, info};

/// Printed in place of a fragment that carries no text.
pub const NO_TEXT: &str = "No text";

pub fn build_request(prompt: &str, google_search: bool) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            role: None,
            parts: vec![Part {
                text: prompt.to_string(),
            }],
        }],
        tools: if google_search {
            vec![Tool::GoogleSearch {}]
        } else {
            Vec::new()
        },
    }
}

/// HTTP client pointed at the configured model and base URL.
pub fn http_client(config: &Config) -> GeminiHttpClient {
    GeminiHttpClient::new(config.credential.clone(), config.model.clone())
        .with_base_url(config.base_url.clone())
}

pub async fn send(
    service: &dyn GenerateContentService,
    payload: &GenerateContentRequest,
) -> Result<RawResponse> {
    service.generate_content(payload).await
}

/// Write the status, then either the raw error body or the pretty-printed
/// document followed by the first candidate's text fragments.
pub fn render<W: Write>(out: &mut W, response: &RawResponse) -> Result<()> {
    writeln!(out, "Status Code: {}", response.status)?;

    if response.status != 200 {
        writeln!(out, "Error Response: {}", response.body)?;
        return Ok(());
    }

    let value: serde_json::Value = serde_json::from_str(&response.body)?;
    writeln!(out, "\n--- Full Response ---")?;
    writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;

    match ResponseDocument::from_value(&value)? {
        ResponseDocument::FirstCandidate(candidate) => {
            for fragment in candidate.fragments() {
                writeln!(out, "\n--- Response Part ---")?;
                writeln!(out, "{}", fragment.unwrap_or(NO_TEXT))?;
            }
        }
        ResponseDocument::WithoutCandidates => debug!("Response has no candidates field"),
    }

    Ok(())
}

/// Run the probe once against `service`.
///
/// Transport, JSON and schema failures are reported on `out` and logged;
/// the run still succeeds. Only failures writing to `out` are returned.
pub async fn run<W: Write>(
    config: &Config,
    service: &dyn GenerateContentService,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "Calling Gemini API: {}", service.endpoint())?;

    let payload = build_request(&config.prompt, config.google_search);
    let outcome = match send(service, &payload).await {
        Ok(response) => render(out, &response),
        Err(e) => Err(e),
    };

    match outcome {
        Ok(()) => {
            info!("Probe completed");
            Ok(())
        }
        Err(Error::Io(e)) => Err(Error::Io(e)),
        Err(e) => {
            error!("Probe failed: {}", e);
            writeln!(out, "Exception: {}", e)?;
            Ok(())
        }
    }
}
