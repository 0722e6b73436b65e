//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes
//! in exactly one place; handlers never map errors ad hoc.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::DbError;
use crate::dogapi::DogApiError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Record not found (404)
    NotFound { resource: &'static str, id: String },

    /// Upstream image provider failed (500, logged)
    Upstream(DogApiError),

    /// Database error (500, logged)
    Database(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::NotFound { resource, id } => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "not_found",
                    "message": format!("{} com ID {} não encontrada", resource, id)
                }),
            ),
            Self::Upstream(e) => {
                tracing::error!("upstream fetch failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "upstream_error",
                        "message": format!("Erro ao buscar imagem da API externa: {}", e)
                    }),
                )
            }
            Self::Database(e) => {
                tracing::error!("database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "database_error",
                        "message": format!("Erro ao acessar o banco de dados: {}", e)
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<DogApiError> for ApiError {
    fn from(e: DogApiError) -> Self {
        Self::Upstream(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            _ => Self::Database(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn not_found_is_404() {
        let err = ApiError::NotFound {
            resource: "imagem",
            id: "99999".into(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn upstream_error_is_500() {
        let err = ApiError::Upstream(DogApiError::Status {
            status: "error".into(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn db_not_found_converts_to_404() {
        let err: ApiError = DbError::NotFound {
            resource: "imagem",
            id: "42".into(),
        }
        .into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn other_db_errors_convert_to_500() {
        let err: ApiError = DbError::Sqlx(sqlx::Error::RowNotFound).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
