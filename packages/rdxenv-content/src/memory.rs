use crate::document::ContentDocument;
use crate::error::{ContentError, ContentResult};
use crate::source::{ContentSource, check_document};
use rustc_hash::FxHashMap;
use serde_json::Value;

/// Content held in memory, for rendering without a data directory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: FxHashMap<ContentDocument, Value>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, document: ContentDocument, value: Value) -> Self {
        self.insert(document, value);
        self
    }

    pub fn insert(&mut self, document: ContentDocument, value: Value) {
        self.documents.insert(document, value);
    }

    pub fn remove(&mut self, document: ContentDocument) -> Option<Value> {
        self.documents.remove(&document)
    }
}

impl ContentSource for MemorySource {
    async fn fetch(&self, document: ContentDocument) -> ContentResult<Value> {
        let value = self
            .documents
            .get(&document)
            .cloned()
            .ok_or_else(|| ContentError::unavailable(document, "document not loaded"))?;
        check_document(document, &value)?;
        Ok(value)
    }
}
