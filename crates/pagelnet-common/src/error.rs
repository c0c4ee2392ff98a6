use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PagelnetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("GraphML parse error: {0}")]
    Graphml(String),

    #[error("edge {source_id}--{target_id} is missing required numeric attribute `{attr}`")]
    MalformedEdge {
        source_id: String,
        target_id: String,
        attr: &'static str,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("matrix parse error: {0}")]
    Matrix(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid query: {0}")]
    InvalidQuery(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, PagelnetError>;

/// Error returned from Axum handlers, mapped onto an HTTP status plus a
/// JSON `{"error": ...}` body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("unprocessable: {0}")]
    UnprocessableEntity(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<PagelnetError> for ApiError {
    fn from(err: PagelnetError) -> Self {
        match err {
            PagelnetError::InvalidQuery(msg) => ApiError::UnprocessableEntity(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}
