use crate::document::ContentDocument;
use crate::error::{ContentError, ContentResult};
use crate::source::{ContentSource, check_document, is_truthy};
use serde_json::{Value, json};
use std::path::{Path, PathBuf};

/// Content documents read from JSON files in one directory.
///
/// Files are read on every request, so edits show up without a restart.
#[derive(Debug, Clone)]
pub struct ContentStore {
    data_dir: PathBuf,
}

impl ContentStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn path_of(&self, document: ContentDocument) -> PathBuf {
        self.data_dir.join(document.file_name())
    }

    #[tracing::instrument(skip(self), fields(file = document.file_name()))]
    pub async fn read(&self, document: ContentDocument) -> ContentResult<Value> {
        let result = self.read_unchecked(document).await.and_then(|value| {
            check_document(document, &value)?;
            Ok(value)
        });
        if let Err(err) = &result {
            tracing::error!(reason = err.reason(), "failed to read content document");
        }
        result
    }

    async fn read_unchecked(&self, document: ContentDocument) -> ContentResult<Value> {
        let raw = tokio::fs::read_to_string(self.path_of(document))
            .await
            .map_err(|e| ContentError::unavailable(document, e.to_string()))?;
        serde_json::from_str(&raw).map_err(|e| ContentError::unavailable(document, e.to_string()))
    }

    /// `{ "projects": [...] }` for one client. Any failure to find them,
    /// an unreadable projects file included, is a not-found.
    pub async fn client_projects(&self, client_id: &str) -> ContentResult<Value> {
        let data = self
            .read(ContentDocument::Projects)
            .await
            .map_err(|_| ContentError::ClientNotFound(client_id.to_string()))?;
        match data.get("projects").and_then(|p| p.get(client_id)) {
            Some(projects) if is_truthy(projects) => Ok(json!({ "projects": projects })),
            _ => {
                tracing::debug!(client = client_id, "no projects for client");
                Err(ContentError::ClientNotFound(client_id.to_string()))
            }
        }
    }
}

impl ContentSource for ContentStore {
    async fn fetch(&self, document: ContentDocument) -> ContentResult<Value> {
        self.read(document).await
    }
}
