use crate::error::{SsrError, SsrResult};
use futures::stream::Stream;
use rdxenv_core::{Document, Element, Node, NodeId};
use std::collections::VecDeque;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::io::{AsyncWrite, AsyncWriteExt};

pub const DOCTYPE: &str = "<!DOCTYPE html>";

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// Elements that never have a closing tag.
pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// Walks a subtree depth first and yields one HTML chunk per opening tag,
/// text node and closing tag.
pub struct SsrStream<'a> {
    document: &'a Document,
    // Start tag -> children -> Close marker.
    stack: VecDeque<RenderOp<'a>>,
}

enum RenderOp<'a> {
    Visit(NodeId),
    Close(&'a str),
}

impl<'a> SsrStream<'a> {
    pub fn new(document: &'a Document, root: NodeId) -> Self {
        let mut stack = VecDeque::new();
        stack.push_front(RenderOp::Visit(root));
        Self { document, stack }
    }

    /// Drains the remaining chunks into one string without polling.
    pub fn into_html(mut self) -> String {
        let mut html = String::new();
        while let Some(chunk) = self.next_chunk() {
            html.push_str(&chunk);
        }
        html
    }

    fn next_chunk(&mut self) -> Option<String> {
        let document = self.document;
        loop {
            match self.stack.pop_front()? {
                RenderOp::Close(tag) => return Some(format!("</{tag}>")),
                RenderOp::Visit(id) => match document.node(id) {
                    Some(Node::Element(el)) => {
                        let chunk = open_tag(el);
                        if !is_void_element(&el.tag) {
                            self.stack.push_front(RenderOp::Close(&el.tag));
                            // Reverse so the first child ends up in front.
                            for &child in el.children.iter().rev() {
                                self.stack.push_front(RenderOp::Visit(child));
                            }
                        }
                        return Some(chunk);
                    }
                    Some(Node::Text(txt)) => return Some(escape_html(&txt.text)),
                    None => {
                        tracing::warn!(node = ?id, "skipping dangling node during render");
                    }
                },
            }
        }
    }
}

impl Stream for SsrStream<'_> {
    type Item = String;

    fn poll_next(mut self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Poll::Ready(self.next_chunk())
    }
}

fn open_tag(el: &Element) -> String {
    let mut chunk = String::new();
    chunk.push('<');
    chunk.push_str(&el.tag);

    for attr in &el.attributes {
        push_attribute(&mut chunk, &attr.name, &attr.value);
    }
    if !el.classes.is_empty() {
        push_attribute(&mut chunk, "class", &el.classes.join(" "));
    }
    if !el.style.is_empty() {
        push_attribute(&mut chunk, "style", &el.style_text());
    }
    chunk.push('>');
    chunk
}

fn push_attribute(chunk: &mut String, name: &str, value: &str) {
    chunk.push(' ');
    chunk.push_str(name);
    chunk.push_str("=\"");
    chunk.push_str(&escape_html(value));
    chunk.push('"');
}

pub fn escape_html(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '&' => output.push_str("&amp;"),
            '"' => output.push_str("&quot;"),
            _ => output.push(c),
        }
    }
    output
}

pub struct Renderer<'a> {
    document: &'a Document,
}

impl<'a> Renderer<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self { document }
    }

    pub fn render_to_stream(&self, root: NodeId) -> SsrResult<SsrStream<'a>> {
        if !self.document.contains(root) {
            return Err(SsrError::UnknownNode(root));
        }
        Ok(SsrStream::new(self.document, root))
    }

    pub fn render_to_string(&self, root: NodeId) -> SsrResult<String> {
        Ok(self.render_to_stream(root)?.into_html())
    }
}

pub fn render_to_string(document: &Document, root: NodeId) -> SsrResult<String> {
    Renderer::new(document).render_to_string(root)
}

/// The whole document, doctype included.
pub fn render_document(document: &Document) -> String {
    let mut html = String::from(DOCTYPE);
    html.push_str(&SsrStream::new(document, document.root()).into_html());
    html
}

/// Streams the whole document into `writer` and returns the number of
/// bytes written.
pub async fn write_document<W>(document: &Document, writer: &mut W) -> SsrResult<usize>
where
    W: AsyncWrite + Unpin,
{
    let mut written = 0;
    writer.write_all(DOCTYPE.as_bytes()).await?;
    written += DOCTYPE.len();
    let mut stream = SsrStream::new(document, document.root());
    while let Some(chunk) = stream.next_chunk() {
        writer.write_all(chunk.as_bytes()).await?;
        written += chunk.len();
    }
    writer.flush().await?;
    tracing::debug!(bytes = written, "document written");
    Ok(written)
}
