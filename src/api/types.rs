//! Shared types for the helpdesk API layer.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::pipeline::HelpdeskPipeline;

/// Shared context for all API routes and middleware.
#[derive(Clone)]
pub struct ApiContext {
    pub pipeline: Arc<HelpdeskPipeline>,
}

impl ApiContext {
    pub fn new(pipeline: Arc<HelpdeskPipeline>) -> Self {
        Self { pipeline }
    }
}

/// Codes outside the catalog are still passed to the translator as is.
pub fn check_language(lang_code: &str) {
    if catalog::is_supported(lang_code) {
        tracing::debug!(lang = lang_code, name = catalog::display_name(lang_code), "User language");
    } else {
        tracing::warn!(lang = lang_code, "Unsupported language code");
    }
}

fn default_lang_code() -> String {
    catalog::WORKING_LANGUAGE.to_string()
}

/// Body of `POST /send_message`. Missing fields take their defaults.
#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default = "default_lang_code")]
    pub lang_code: String,
}

/// Reply envelope shared by the chat and upload endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReplyResponse {
    pub reply: String,
}
