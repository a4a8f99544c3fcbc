//! Probe configuration
//!
//! Everything the probe reads from its surroundings is resolved once into a
//! [`Config`] and passed explicitly into [`crate::probe::run`].

use crate::{prompts, Error, Result};
use std::fmt;
use std::path::PathBuf;

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const DEFAULT_ENV_FILE: &str = ".env.local";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Non-empty API key. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Knobs supplied on the command line.
#[derive(Debug, Clone)]
pub struct ProbeOptions {
    pub env_file: PathBuf,
    pub model: String,
    pub base_url: String,
    pub prompt: String,
    pub google_search: bool,
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self {
            env_file: PathBuf::from(DEFAULT_ENV_FILE),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            prompt: prompts::PROBE.to_string(),
            google_search: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub credential: Credential,
    pub model: String,
    pub base_url: String,
    pub prompt: String,
    pub google_search: bool,
}

impl Config {
    /// Import `options.env_file` into the process environment, then read the
    /// API key from it. Existing environment values take precedence over the file.
    pub fn load(options: ProbeOptions) -> Result<Self> {
        match dotenvy::from_path(&options.env_file) {
            Ok(()) => tracing::debug!("Loaded {}", options.env_file.display()),
            Err(e) if e.not_found() => {
                tracing::debug!("No env file at {}", options.env_file.display())
            }
            Err(e) => tracing::warn!(
                "Ignoring unreadable env file {}: {}",
                options.env_file.display(),
                e
            ),
        }

        Self::from_lookup(options, |name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(options: ProbeOptions, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let credential = lookup(API_KEY_VAR)
            .and_then(Credential::new)
            .ok_or_else(|| Error::MissingCredential {
                var: API_KEY_VAR.to_string(),
                env_file: options.env_file.display().to_string(),
            })?;

        Ok(Self {
            credential,
            model: options.model,
            base_url: options.base_url,
            prompt: options.prompt,
            google_search: options.google_search,
        })
    }
}
