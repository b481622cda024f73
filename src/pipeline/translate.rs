//! Translation round-trip around the English-only keyword pipeline.
//!
//! The service is fail-open: an outage degrades to showing untranslated text
//! rather than breaking the conversation. [`translate_or_passthrough`] is the
//! single place where that fallback happens.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranslationError {
    #[error("Translation service unreachable at {0}")]
    Connection(String),

    #[error("Translation request timed out after {0}s")]
    Timeout(u64),

    #[error("Translation service returned {status}: {body}")]
    Service { status: u16, body: String },

    #[error("Translation response parsing error: {0}")]
    ResponseParsing(String),

    #[error("HTTP client error: {0}")]
    HttpClient(String),
}

/// Translation service abstraction (allows mocking for tests)
pub trait Translator: Send + Sync {
    fn translate(&self, text: &str, target: &str) -> Result<String, TranslationError>;
}

/// Translate `text` from `source` into `target`.
///
/// The translator is not called when both codes match. Any translator error
/// returns `text` unchanged.
pub fn translate_or_passthrough(
    translator: &dyn Translator,
    text: &str,
    source: &str,
    target: &str,
) -> String {
    if source == target {
        return text.to_string();
    }
    match translator.translate(text, target) {
        Ok(translated) => translated,
        Err(e) => {
            tracing::warn!(error = %e, target, "Translation failed, passing text through");
            text.to_string()
        }
    }
}

/// Request body for LibreTranslate-compatible `/translate`
#[derive(Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

/// Response body from `/translate`
#[derive(Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

/// Blocking HTTP client for a LibreTranslate-compatible service.
///
/// Must be constructed and dropped outside of an async context; handlers
/// call it from `spawn_blocking` workers.
pub struct HttpTranslator {
    base_url: String,
    api_key: Option<String>,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl HttpTranslator {
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        timeout_secs: u64,
    ) -> Result<Self, TranslationError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| TranslationError::HttpClient(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            client,
            timeout_secs,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Translator for HttpTranslator {
    fn translate(&self, text: &str, target: &str) -> Result<String, TranslationError> {
        let url = format!("{}/translate", self.base_url);
        let body = TranslateRequest {
            q: text,
            source: "auto",
            target,
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    TranslationError::Connection(self.base_url.clone())
                } else if e.is_timeout() {
                    TranslationError::Timeout(self.timeout_secs)
                } else {
                    TranslationError::HttpClient(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(TranslationError::Service {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: TranslateResponse = response
            .json()
            .map_err(|e| TranslationError::ResponseParsing(e.to_string()))?;

        Ok(parsed.translated_text)
    }
}
