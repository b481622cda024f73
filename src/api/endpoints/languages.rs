//! Language menu for presentation layers.

use axum::Json;
use serde::Serialize;

use crate::catalog::{self, LanguageEntry};

#[derive(Serialize)]
pub struct LanguagesResponse {
    pub languages: Vec<LanguageEntry>,
    pub helpline: &'static str,
}

/// `GET /languages`: supported language codes with display names.
pub async fn list() -> Json<LanguagesResponse> {
    Json(LanguagesResponse {
        languages: catalog::entries(),
        helpline: catalog::HELPLINE,
    })
}
