//! Gemini `generateContent` payload types.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Top-level `generateContent` request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Tool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Part {
    pub text: String,
}

/// Provider-side tool toggle. Serializes as `{"google_search": {}}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Tool {
    #[serde(rename = "google_search")]
    GoogleSearch {},
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

/// A content fragment. Non-text parts (function calls, inline data) carry no `text`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
}

impl Candidate {
    /// Text of each fragment in order, `None` where a fragment has no text.
    pub fn fragments(&self) -> impl Iterator<Item = Option<&str>> + '_ {
        self.content
            .iter()
            .flat_map(|content| content.parts.iter())
            .map(|part| part.text.as_deref())
    }
}

/// Parsed response, split on whether the service returned a `candidates` field.
///
/// Only the first candidate is decoded; later entries are never inspected.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseDocument {
    FirstCandidate(Candidate),
    WithoutCandidates,
}

impl ResponseDocument {
    /// A non-object body or a missing/null `candidates` field means no candidates.
    /// A `candidates` field that is not a non-empty array is an error.
    pub fn from_value(value: &serde_json::Value) -> Result<Self> {
        let candidates = match value.get("candidates") {
            None | Some(serde_json::Value::Null) => return Ok(Self::WithoutCandidates),
            Some(candidates) => candidates,
        };

        let first = candidates
            .as_array()
            .ok_or_else(|| Error::Gemini("Response candidates field is not an array".to_string()))?
            .first()
            .ok_or_else(|| Error::Gemini("Response contained no candidates".to_string()))?;

        Ok(Self::FirstCandidate(Candidate::deserialize(first)?))
    }
}

/// Status and body as received, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}
