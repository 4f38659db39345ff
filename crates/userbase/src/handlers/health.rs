//! Liveness probe.

use axum::http::StatusCode;

/// GET /livez - Returns 200 as soon as the server accepts connections.
pub async fn livez() -> StatusCode {
    StatusCode::OK
}
