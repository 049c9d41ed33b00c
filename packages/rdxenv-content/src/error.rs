use crate::document::ContentDocument;
use thiserror::Error;

/// Display strings double as the public error message, so the underlying
/// cause lives in `reason` and only reaches the logs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("{}", .document.failure_message())]
    Unavailable {
        document: ContentDocument,
        reason: String,
    },

    #[error("Projects not found for this client")]
    ClientNotFound(String),
}

impl ContentError {
    pub fn unavailable(document: ContentDocument, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            document,
            reason: reason.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ClientNotFound(_))
    }

    pub fn reason(&self) -> &str {
        match self {
            Self::Unavailable { reason, .. } => reason,
            Self::ClientNotFound(id) => id,
        }
    }
}

pub type ContentResult<T> = Result<T, ContentError>;
