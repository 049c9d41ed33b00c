use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use rdxenv_content::ContentError;
use rdxenv_site::SiteError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Content(#[from] ContentError),

    #[error("Page error: {0}")]
    Site(#[from] SiteError),
}

pub type ServerResult<T> = Result<T, ServerError>;

impl From<&ServerError> for StatusCode {
    fn from(err: &ServerError) -> Self {
        match err {
            ServerError::Content(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = StatusCode::from(&self);
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
