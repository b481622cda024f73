//! Chat endpoint.
//!
//! `POST /send_message`: run one message through the helpdesk pipeline.

use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::{check_language, ApiContext, ReplyResponse, SendMessageRequest};

/// `POST /send_message`: answer a typed message.
///
/// The pipeline makes blocking network calls, so it runs on the blocking
/// pool. Every pipeline failure degrades inside the pipeline; only a
/// crashed worker produces an error response.
pub async fn send(
    State(ctx): State<ApiContext>,
    Json(req): Json<SendMessageRequest>,
) -> Result<Json<ReplyResponse>, ApiError> {
    check_language(&req.lang_code);

    let pipeline = ctx.pipeline.clone();
    let reply =
        tokio::task::spawn_blocking(move || pipeline.handle_message(&req.message, &req.lang_code))
            .await?;

    Ok(Json(ReplyResponse { reply }))
}
