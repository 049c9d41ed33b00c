//! Server-side rendering of an rdxenv [`Document`](rdxenv_core::Document)
//! to HTML, either chunk by chunk or into one string.

pub mod error;
pub mod render;

pub use error::{SsrError, SsrResult};
pub use render::{
    DOCTYPE, Renderer, SsrStream, escape_html, is_void_element, render_document, render_to_string,
    write_document,
};
