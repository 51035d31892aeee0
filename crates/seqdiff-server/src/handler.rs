use axum::body::Bytes;
use axum::http::{header, HeaderMap};
use axum::response::{IntoResponse, Json, Response};

use crate::error::{ServerError, ServerResult};
use crate::protocol::{CompareRequest, UsageResponse, REPORT_CONTENT_TYPE, REPORT_FILENAME};

/// `GET`: describe how to use the endpoint. Also serves as a liveness check.
pub async fn usage_handler() -> Json<UsageResponse> {
    Json(UsageResponse::default())
}

/// `POST`: compare `seqA` with `seqB` and return the report as a file download.
pub async fn compare_handler(headers: HeaderMap, body: Bytes) -> ServerResult<Response> {
    let length = declared_length(&headers)?;
    if length <= 0 || body.is_empty() {
        return Err(ServerError::EmptyBody);
    }

    let request = CompareRequest::from_body(&body)?;
    let diff = seqdiff_report::compare(&request.seq_a, &request.seq_b);
    tracing::debug!(
        lines_a = diff.lines_a(),
        lines_b = diff.lines_b(),
        diff_count = diff.diff_count(),
        "built diff report"
    );

    let disposition = format!("attachment; filename=\"{REPORT_FILENAME}\"");
    Ok((
        [
            (header::CONTENT_TYPE, REPORT_CONTENT_TYPE.to_owned()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        diff.render(),
    )
        .into_response())
}

/// Value of the `Content-Length` header, `0` when absent.
fn declared_length(headers: &HeaderMap) -> ServerResult<i64> {
    match headers.get(header::CONTENT_LENGTH) {
        None => Ok(0),
        Some(value) => value
            .to_str()
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .ok_or(ServerError::InvalidContentLength),
    }
}
