use crate::document::ContentDocument;
use crate::error::{ContentError, ContentResult};
use crate::models::{ClientsDocument, CopyDocument, FilmsDocument, ProjectsDocument};
use rdxenv_hero::{BackgroundColours, HeroDocument, LayoutConfig};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::future::Future;

/// Falsy values count as missing: `null`, `false`, `0` and `""`.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Presence checks a document must pass before it is served.
pub fn check_document(document: ContentDocument, value: &Value) -> ContentResult<()> {
    if !is_truthy(value) {
        return Err(ContentError::unavailable(document, "document is empty"));
    }
    if document == ContentDocument::BackgroundColours && !value["colors"].is_array() {
        return Err(ContentError::unavailable(document, "missing `colors` array"));
    }
    Ok(())
}

/// Decodes a raw document into its typed model.
pub fn decode<T: DeserializeOwned>(document: ContentDocument, value: Value) -> ContentResult<T> {
    serde_json::from_value(value).map_err(|e| ContentError::unavailable(document, e.to_string()))
}

/// Anything that can hand out content documents.
///
/// Only [`ContentSource::fetch`] is required; the typed accessors decode
/// its output.
pub trait ContentSource: Send + Sync {
    fn fetch(&self, document: ContentDocument) -> impl Future<Output = ContentResult<Value>> + Send;

    fn fetch_as<T: DeserializeOwned + Send>(
        &self,
        document: ContentDocument,
    ) -> impl Future<Output = ContentResult<T>> + Send {
        async move { decode(document, self.fetch(document).await?) }
    }

    fn clients(&self) -> impl Future<Output = ContentResult<ClientsDocument>> + Send {
        self.fetch_as(ContentDocument::Clients)
    }

    fn projects(&self) -> impl Future<Output = ContentResult<ProjectsDocument>> + Send {
        self.fetch_as(ContentDocument::Projects)
    }

    fn films(&self) -> impl Future<Output = ContentResult<FilmsDocument>> + Send {
        self.fetch_as(ContentDocument::Films)
    }

    fn copy(&self) -> impl Future<Output = ContentResult<CopyDocument>> + Send {
        self.fetch_as(ContentDocument::Copy)
    }

    fn hero(&self) -> impl Future<Output = ContentResult<HeroDocument>> + Send {
        self.fetch_as(ContentDocument::Hero)
    }

    /// Decoded and validated layout rules.
    fn hero_config(&self) -> impl Future<Output = ContentResult<LayoutConfig>> + Send {
        async move {
            let config: LayoutConfig = self.fetch_as(ContentDocument::HeroConfig).await?;
            config
                .validate()
                .map_err(|e| ContentError::unavailable(ContentDocument::HeroConfig, e.to_string()))?;
            Ok(config)
        }
    }

    fn background_colours(&self) -> impl Future<Output = ContentResult<BackgroundColours>> + Send {
        self.fetch_as(ContentDocument::BackgroundColours)
    }
}
