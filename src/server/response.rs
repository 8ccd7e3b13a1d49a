//! Response bodies for a successful scrape.

use axum::Json;
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::page_extractor::ExtractionResult;

/// Labeled plain-text layout used when `json` is not requested.
#[must_use]
pub fn format_text_response(result: &ExtractionResult) -> String {
    format!(
        "# Title: {}\n\n# URL Source: {}\n\n# Published Time: {}\n\n# Markdown Content:\n{}",
        result.title,
        result.url_source,
        result.published_time.as_deref().unwrap_or("N/A"),
        result.markdown_content
    )
}

pub fn into_response(result: ExtractionResult, use_json: bool) -> Response {
    if use_json {
        Json(result).into_response()
    } else {
        (
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            format_text_response(&result),
        )
            .into_response()
    }
}
