//! Content documents served by the API and rendered into the pages.

pub mod document;
pub mod error;
pub mod memory;
pub mod models;
pub mod source;
pub mod store;

pub use document::ContentDocument;
pub use error::{ContentError, ContentResult};
pub use memory::MemorySource;
pub use models::{
    AboutCopy, Client, ClientLink, ClientsDocument, ContactCopy, CopyDocument, Film, FilmYear,
    FilmographyCopy, FilmsDocument, Project, ProjectsDocument,
};
pub use source::{ContentSource, check_document, decode, is_truthy};
pub use store::ContentStore;
