use crate::error::{SiteError, SiteResult};
use rdxenv_core::{BoxSize, Document, NodeId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const SITE_TITLE: &str = "RDXENV";

/// The pages the site serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    Index,
    Filmography,
}

impl PageKind {
    pub fn path(self) -> &'static str {
        match self {
            PageKind::Index => "/",
            PageKind::Filmography => "/filmography",
        }
    }

    /// Empty page skeleton, ready for the section renderers.
    pub fn skeleton(self, viewport: BoxSize) -> SiteResult<Document> {
        match self {
            PageKind::Index => index_page(viewport),
            PageKind::Filmography => filmography_page(),
        }
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageKind::Index => f.write_str("index"),
            PageKind::Filmography => f.write_str("filmography"),
        }
    }
}

impl FromStr for PageKind {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "index" | "/" | "home" => Ok(PageKind::Index),
            "filmography" | "/filmography" => Ok(PageKind::Filmography),
            other => Err(SiteError::UnknownPage(other.to_string())),
        }
    }
}

fn head(doc: &mut Document, title: &str, stylesheets: &[&str]) -> SiteResult<NodeId> {
    let root = doc.root();
    doc.set_attribute(root, "lang", "en")?;
    let head = doc.append_element(root, "head", &[])?;

    let charset = doc.append_element(head, "meta", &[])?;
    doc.set_attribute(charset, "charset", "UTF-8")?;
    let viewport = doc.append_element(head, "meta", &[])?;
    doc.set_attribute(viewport, "name", "viewport")?;
    doc.set_attribute(viewport, "content", "width=device-width, initial-scale=1.0")?;
    doc.append_text_element(head, "title", &[], title)?;
    for href in stylesheets {
        let link = doc.append_element(head, "link", &[])?;
        doc.set_attribute(link, "rel", "stylesheet")?;
        doc.set_attribute(link, "href", href)?;
    }

    Ok(doc.append_element(root, "body", &[])?)
}

fn site_header(doc: &mut Document, body: NodeId, heading: &str) -> SiteResult<NodeId> {
    let header = doc.append_element(body, "header", &[])?;
    doc.append_text_element(header, "h1", &[], heading)?;
    let nav = doc.append_element(header, "nav", &["site-nav"])?;
    for (href, label) in [("/", "Home"), ("/filmography", "Filmography")] {
        let link = doc.append_text_element(nav, "a", &[], label)?;
        doc.set_attribute(link, "href", href)?;
    }
    Ok(header)
}

fn section(doc: &mut Document, parent: NodeId, id: &str) -> SiteResult<NodeId> {
    let node = doc.append_element(parent, "section", &[])?;
    doc.set_attribute(node, "id", id)?;
    Ok(node)
}

/// Home page: hero, about, client projects and contact.
///
/// The hero section reports `viewport` as its measured size.
pub fn index_page(viewport: BoxSize) -> SiteResult<Document> {
    let mut doc = Document::new();
    let body = head(
        &mut doc,
        SITE_TITLE,
        &["/css/styles.css", "/css/hero.css"],
    )?;
    site_header(&mut doc, body, SITE_TITLE)?;

    let hero = section(&mut doc, body, "hero-section")?;
    doc.set_style(hero, "position", "relative")?;
    doc.set_style(hero, "width", &format!("{}px", viewport.width))?;
    doc.set_style(hero, "height", &format!("{}px", viewport.height))?;
    doc.set_box_size(hero, viewport)?;

    section(&mut doc, body, "about")?;

    let projects = section(&mut doc, body, "projects")?;
    doc.append_element(projects, "nav", &["CLientProjNAv"])?;
    let container = doc.append_element(projects, "div", &[])?;
    doc.set_attribute(container, "id", "client-container")?;

    section(&mut doc, body, "contact")?;
    Ok(doc)
}

/// Filmography page: header, intro and film grid.
pub fn filmography_page() -> SiteResult<Document> {
    let mut doc = Document::new();
    let body = head(
        &mut doc,
        &format!("{SITE_TITLE} | Filmography"),
        &["/css/styles.css", "/css/filmography.css"],
    )?;
    site_header(&mut doc, body, "Filmography")?;

    let films = section(&mut doc, body, "filmography")?;
    doc.append_element(films, "h2", &[])?;
    doc.append_element(films, "div", &["film-container"])?;
    Ok(doc)
}
