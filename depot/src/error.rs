use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Json as ResponseJson;
use serde_json::json;

/// Request-boundary error. Every failure renders as the uniform
/// `{ "success": false, "error": <message> }` body.
#[derive(Clone, Debug)]
pub struct DepotError {
    message: String,
    status_code: StatusCode,
}

impl DepotError {
    pub fn bad_request(message: &str) -> Self {
        Self {
            message: message.to_string(),
            status_code: StatusCode::BAD_REQUEST,
        }
    }

    pub fn not_found(message: &str) -> Self {
        Self {
            message: message.to_string(),
            status_code: StatusCode::NOT_FOUND,
        }
    }

    pub fn internal(message: &str) -> Self {
        Self {
            message: message.to_string(),
            status_code: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<MultipartError> for DepotError {
    fn from(value: MultipartError) -> Self {
        Self {
            message: format!("Error in multipart request: {:?}", value.to_string()),
            status_code: StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for DepotError {
    fn into_response(self) -> axum::response::Response {
        (
            self.status_code,
            ResponseJson(json!({
                "success": false,
                "error": self.message,
            })),
        )
            .into_response()
    }
}
