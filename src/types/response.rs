use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

/// Standard API response envelope: `{status, data?, message?, count?}`.
///
/// Every endpoint, success or failure, answers with this shape; the HTTP
/// status code is redundant with but consistent with the `status` field.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: "success",
            data: Some(data),
            message: None,
            count: None,
        }
    }

    /// Success envelope for list endpoints, carrying the item count.
    pub fn with_count(data: T, count: usize) -> Self {
        Self {
            status: "success",
            data: Some(data),
            message: None,
            count: Some(count),
        }
    }

    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            status: "success",
            data: Some(data),
            message: Some(message.into()),
            count: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: "success",
            data: None,
            message: Some(message.into()),
            count: None,
        }
    }
}

/// Created response helper (common pattern for POST endpoints)
pub struct Created<T: Serialize>(pub T, pub &'static str);

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> axum::response::Response {
        (
            StatusCode::CREATED,
            Json(ApiResponse::with_message(self.0, self.1)),
        )
            .into_response()
    }
}
