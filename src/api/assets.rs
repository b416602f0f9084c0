//! Image Asset Handler
//!
//! Serves product images straight from the store.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};

use super::AppState;
use crate::error::Result;

/// Cache policy for images, which only change through the product API.
const IMAGE_CACHE_CONTROL: &str = "public, max-age=432000";

/// Handler for GET /images/:filename
///
/// The content type recorded at upload time wins; without one it is
/// guessed from the file extension.
pub async fn image(State(state): State<AppState>, Path(filename): Path<String>) -> Result<Response> {
    let asset = state.catalog.repo().asset(&filename).await?;
    let content_type = asset
        .content_type
        .clone()
        .unwrap_or_else(|| guess_content_type(&filename));

    Ok((
        [
            (header::CONTENT_TYPE, content_type),
            (header::CACHE_CONTROL, IMAGE_CACHE_CONTROL.to_string()),
        ],
        asset.bytes,
    )
        .into_response())
}

fn guess_content_type(filename: &str) -> String {
    match filename.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => format!("image/{}", ext.to_lowercase()),
        _ => "application/octet-stream".to_string(),
    }
}
