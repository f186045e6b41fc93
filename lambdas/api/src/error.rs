use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::Error;
use serde::Serialize;

/// JSON failure body returned by every `/api` route.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    /// Maps a domain error to a status and a generic user-facing message.
    ///
    /// `fallback` is the message for failures specific to the route.
    pub fn from_domain(err: Error, fallback: &'static str) -> Self {
        let (status, message, error) = match &err {
            Error::NotFound { .. } => (StatusCode::NOT_FOUND, "找不到該日期的數據", None),
            Error::Validation { .. } => {
                (StatusCode::BAD_REQUEST, "請求參數無效", Some(err.to_string()))
            }
            Error::Parse { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "解析記錄時出現錯誤",
                Some(err.to_string()),
            ),
            Error::Upstream { .. } | Error::Io { .. } | Error::Csv(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, fallback, Some(err.to_string()))
            }
        };

        if status.is_server_error() {
            tracing::error!("{}: {}", fallback, err);
        } else {
            tracing::info!("Rejected request: {}", err);
        }

        Self {
            status,
            body: ErrorBody { message, error },
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_error_kind() {
        let cases = [
            (Error::NotFound { date: "2024-01-10".into() }, StatusCode::NOT_FOUND),
            (Error::Validation { message: "bad".into() }, StatusCode::BAD_REQUEST),
            (Error::Parse { message: "eof".into() }, StatusCode::INTERNAL_SERVER_ERROR),
            (Error::Upstream { message: "503".into() }, StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::from_domain(err, "failed").status(), status);
        }
    }

    #[test]
    fn not_found_body_has_no_detail() {
        let err = ApiError::from_domain(Error::NotFound { date: "2024-01-10".into() }, "failed");
        assert_eq!(
            serde_json::to_value(&err.body).unwrap(),
            serde_json::json!({ "message": "找不到該日期的數據" })
        );
    }
}
