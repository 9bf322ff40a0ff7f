use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;
use serde_json::Value;
use tracing::warn;

/// Fail-soft fetch error. Callers never learn more than "no data available";
/// the underlying cause only reaches the log.
#[derive(Debug)]
pub struct FetchError {
    pub code: StatusCode,
    pub body: Json<Value>,
}

impl FetchError {
    pub fn new(code: StatusCode, message: &str) -> Self {
        Self {
            code,
            body: Json(json!({"error": message})),
        }
    }
}

impl IntoResponse for FetchError {
    fn into_response(self) -> Response {
        (self.code, self.body).into_response()
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        warn!("schedule request failed: {:?}", error);
        Self::new(StatusCode::BAD_GATEWAY, "No data available")
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(error: serde_json::Error) -> Self {
        warn!("schedule feed returned malformed data: {:?}", error);
        Self::new(StatusCode::BAD_GATEWAY, "No data available")
    }
}
