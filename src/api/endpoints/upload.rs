//! Document upload endpoint.
//!
//! `POST /upload_file`: multipart form with a `file` part and an optional
//! `lang_code` part. The file goes through the document pipeline variant.
//! A request that is not multipart at all carries no file either.

use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::{check_language, ApiContext, ReplyResponse};
use crate::catalog::WORKING_LANGUAGE;
use crate::pipeline::UploadedDocument;

/// `POST /upload_file`: explain an uploaded prescription.
pub async fn upload(
    State(ctx): State<ApiContext>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ReplyResponse>, ApiError> {
    let mut multipart = multipart.map_err(|rejection| {
        tracing::debug!(%rejection, "Upload is not a multipart form");
        ApiError::MissingFile
    })?;
    let mut lang_code = WORKING_LANGUAGE.to_string();
    let mut document: Option<UploadedDocument> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "lang_code" => {
                let value = field.text().await?;
                let value = value.trim();
                if !value.is_empty() {
                    lang_code = value.to_string();
                }
            }
            "file" => {
                let filename = field.file_name().map(str::to_string);
                let bytes = field.bytes().await?;
                // A part without a filename is an unselected file input.
                match filename.as_deref().map(str::trim) {
                    Some(name) if !name.is_empty() => {
                        document = Some(UploadedDocument::new(Some(name), bytes.to_vec()));
                    }
                    _ => tracing::debug!(size_bytes = bytes.len(), "Ignoring nameless file part"),
                }
            }
            _ => {}
        }
    }

    let document = document.ok_or(ApiError::MissingFile)?;
    check_language(&lang_code);
    tracing::info!(
        filename = %document.filename,
        size_bytes = document.bytes.len(),
        lang = %lang_code,
        "Document received"
    );

    let pipeline = ctx.pipeline.clone();
    let reply =
        tokio::task::spawn_blocking(move || pipeline.handle_document(&document, &lang_code))
            .await?;

    Ok(Json(ReplyResponse { reply }))
}
