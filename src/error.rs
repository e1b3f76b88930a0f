use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use sqlx::error::ErrorKind;
use thiserror::Error as ThisError;
use tracing::{debug, error, warn};

#[derive(Debug, ThisError)]
pub enum TriviaError {
    #[error("resource not found")]
    NotFound,

    #[error("unprocessable: {0}")]
    Unprocessable(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[source] SqlxError),

    #[error("Database error: {0}")]
    DatabaseError(#[source] SqlxError),
}

impl TriviaError {
    pub fn status(&self) -> StatusCode {
        match self {
            TriviaError::NotFound => StatusCode::NOT_FOUND,
            TriviaError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            TriviaError::BadRequest(_) => StatusCode::BAD_REQUEST,
            TriviaError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            TriviaError::StorageUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            TriviaError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Fixed client-facing message for each error kind.
    pub fn message(&self) -> &'static str {
        match self {
            TriviaError::NotFound => "resource not found",
            TriviaError::Unprocessable(_) => "unprocessable",
            TriviaError::BadRequest(_) => "bad request",
            TriviaError::MethodNotAllowed => "method not allowed",
            TriviaError::StorageUnavailable(_) => "service unavailable",
            TriviaError::DatabaseError(_) => "internal server error",
        }
    }

    /// Write paths report any storage failure short of an outage as 422.
    pub fn into_unprocessable(self) -> Self {
        match self {
            TriviaError::DatabaseError(e) => TriviaError::Unprocessable(e.to_string()),
            other => other,
        }
    }
}

impl From<SqlxError> for TriviaError {
    fn from(e: SqlxError) -> Self {
        match e {
            SqlxError::RowNotFound => TriviaError::NotFound,
            SqlxError::PoolTimedOut | SqlxError::PoolClosed | SqlxError::Io(_) => {
                TriviaError::StorageUnavailable(e)
            }
            SqlxError::Database(ref db)
                if matches!(
                    db.kind(),
                    ErrorKind::UniqueViolation
                        | ErrorKind::ForeignKeyViolation
                        | ErrorKind::NotNullViolation
                        | ErrorKind::CheckViolation
                ) =>
            {
                TriviaError::Unprocessable(db.message().to_string())
            }
            other => TriviaError::DatabaseError(other),
        }
    }
}

impl IntoResponse for TriviaError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status.is_server_error() {
            error!(status = status.as_u16(), error = %self, "request failed");
        } else if matches!(self, TriviaError::Unprocessable(_) | TriviaError::BadRequest(_)) {
            warn!(status = status.as_u16(), error = %self, "rejected request");
        } else {
            debug!(status = status.as_u16(), error = %self, "request failed");
        }

        let body = ApiErrorBody {
            success: false,
            error: status.as_u16(),
            message: self.message(),
        };
        (status, Json(body)).into_response()
    }
}

/// Standardized API error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    pub success: bool,
    pub error: u16,
    pub message: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    #[test]
    fn pool_failures_map_to_service_unavailable() {
        let err: TriviaError = SqlxError::PoolTimedOut.into();
        assert!(matches!(err, TriviaError::StorageUnavailable(_)));
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);

        let err: TriviaError = SqlxError::PoolClosed.into();
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn missing_row_maps_to_not_found() {
        let err: TriviaError = SqlxError::RowNotFound.into();
        assert!(matches!(err, TriviaError::NotFound));
    }

    #[test]
    fn write_paths_downgrade_database_errors_only() {
        let err = TriviaError::DatabaseError(SqlxError::Protocol("bad frame".into()));
        assert!(matches!(err.into_unprocessable(), TriviaError::Unprocessable(_)));

        let err = TriviaError::StorageUnavailable(SqlxError::PoolTimedOut);
        assert!(matches!(
            err.into_unprocessable(),
            TriviaError::StorageUnavailable(_)
        ));

        assert!(matches!(
            TriviaError::NotFound.into_unprocessable(),
            TriviaError::NotFound
        ));
    }

    #[tokio::test]
    async fn response_body_carries_code_and_message() {
        let resp = TriviaError::Unprocessable("no such question".into()).into_response();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = to_bytes(resp.into_body(), usize::MAX)
            .await
            .expect("failed to read body");
        let json: Value = serde_json::from_slice(&body).expect("body was not json");
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], 422);
        assert_eq!(json["message"], "unprocessable");
    }

    #[test]
    fn detail_is_not_leaked_into_message() {
        let err = TriviaError::BadRequest("expected value at line 1 column 1".into());
        assert_eq!(err.message(), "bad request");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}
