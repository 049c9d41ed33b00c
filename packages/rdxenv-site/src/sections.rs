//! Renderers for the home page sections.

use crate::carousel::{Carousel, build_carousel};
use crate::error::{SiteError, SiteResult};
use once_cell::sync::Lazy;
use rdxenv_content::{AboutCopy, Client, ContactCopy, Project, ProjectsDocument};
use rdxenv_core::{Document, NodeId};
use regex::Regex;

pub const ABOUT_SELECTOR: &str = "#about";
pub const CONTACT_SELECTOR: &str = "#contact";
pub const CLIENT_CONTAINER_SELECTOR: &str = "#client-container";
pub const CLIENT_NAV_SELECTOR: &str = ".CLientProjNAv";

static CLIENT_ID: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").ok());

pub fn is_valid_client_id(id: &str) -> bool {
    CLIENT_ID.as_ref().is_some_and(|re| re.is_match(id))
}

fn find(doc: &Document, selector: &str) -> SiteResult<NodeId> {
    doc.query_selector(selector)?
        .ok_or_else(|| SiteError::missing(selector))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

pub fn render_about(doc: &mut Document, about: &AboutCopy) -> SiteResult<NodeId> {
    let section = find(doc, ABOUT_SELECTOR)?;
    doc.clear_children(section)?;
    let title = non_empty(about.title.as_deref()).unwrap_or("About");
    doc.append_text_element(section, "h2", &[], title)?;
    for paragraph in &about.paragraphs {
        doc.append_text_element(section, "p", &[], paragraph)?;
    }
    Ok(section)
}

pub fn render_contact(doc: &mut Document, contact: &ContactCopy) -> SiteResult<NodeId> {
    let section = find(doc, CONTACT_SELECTOR)?;
    doc.clear_children(section)?;
    let title = non_empty(contact.title.as_deref()).unwrap_or("Contact");
    doc.append_text_element(section, "h2", &[], title)?;

    let container = doc.append_element(section, "div", &["contact-container"])?;
    let info = doc.append_element(container, "div", &["contact-info"])?;
    if let Some(email) = non_empty(contact.email.as_deref()) {
        let row = doc.append_element(info, "div", &["contact-email"])?;
        doc.append_text_element(row, "strong", &[], "Email:")?;
        let link = doc.append_text_element(row, "a", &[], email)?;
        doc.set_attribute(link, "href", &format!("mailto:{email}"))?;
    }
    if let Some(phone) = non_empty(contact.phone.as_deref()) {
        let row = doc.append_element(info, "div", &["contact-phone"])?;
        doc.append_text_element(row, "strong", &[], "Phone:")?;
        let number = doc.create_text(&format!(" {phone}"));
        doc.append_child(row, number)?;
    }

    let social = doc.append_element(container, "div", &["contact-social"])?;
    for (platform, url) in &contact.social {
        let href = non_empty(url.as_deref()).unwrap_or("#");
        let link = doc.append_text_element(social, "a", &["social-link", platform.as_str()], platform)?;
        doc.set_attribute(link, "href", href)?;
        doc.set_attribute(link, "target", "_blank")?;
    }

    if let Some(message) = non_empty(contact.message.as_deref()) {
        doc.append_text_element(container, "p", &["contact-message"], message)?;
    }
    Ok(section)
}

/// One `div.client#client-<id>` block with the client's header, brand,
/// info, links and empty carousel containers.
pub fn create_client_section(doc: &mut Document, client: &Client) -> SiteResult<NodeId> {
    let section = doc.create_element("div");
    doc.add_class(section, "client")?;
    doc.set_attribute(section, "id", &format!("client-{}", client.id))?;

    doc.append_text_element(section, "h4", &["ProjHead"], &client.name)?;
    let body_class = format!("{}Cont", client.short_name);
    let body = doc.append_element(section, "div", &[body_class.as_str()])?;

    let brand_class = format!("{}-brand", client.short_name);
    let brand = doc.append_element(body, "div", &[brand_class.as_str()])?;
    let logo = doc.append_element(brand, "img", &[])?;
    doc.set_attribute(logo, "src", &client.logo)?;
    doc.set_attribute(logo, "alt", &format!("{} Logo", client.name))?;

    let info = doc.append_element(body, "div", &["ProjInfo-IP"])?;
    doc.append_text_element(
        info,
        "div",
        &["projTitle"],
        &format!("{} | {}", client.tagline, client.period),
    )?;
    doc.append_text_element(info, "div", &["projCopy"], &client.description)?;

    let links = doc.append_element(body, "div", &["ProjLinks"])?;
    doc.append_text_element(links, "div", &["ProjLinks-title"], "Project Links")?;
    for (index, link) in client.links.iter().enumerate() {
        let class = format!("ProjLinks-link{}-{}", index + 1, link.kind);
        match non_empty(link.url.as_deref()) {
            Some(url) => {
                let row = doc.append_element(links, "div", &[class.as_str()])?;
                let anchor = doc.append_text_element(row, "a", &[], &link.text)?;
                doc.set_attribute(anchor, "href", url)?;
                doc.set_attribute(anchor, "target", "_blank")?;
            }
            None => {
                doc.append_text_element(links, "div", &[class.as_str()], &link.text)?;
            }
        }
    }

    let grid_class = format!("{}-project-grid", client.id);
    let nav_class = format!("{}-project-nav", client.id);
    doc.append_element(section, "div", &["project-grid", grid_class.as_str()])?;
    doc.append_element(section, "div", &["project-nav", nav_class.as_str()])?;
    Ok(section)
}

/// Clients in display order: ascending `order`, missing counts as zero,
/// original order among equals.
pub fn sorted_clients(clients: &[Client]) -> Vec<&Client> {
    let mut sorted: Vec<&Client> = clients.iter().collect();
    sorted.sort_by(|a, b| a.sort_order().total_cmp(&b.sort_order()));
    sorted
}

/// Fills `#client-container` with one section per client, dividers in
/// between, and a carousel for every client that has projects.
pub fn render_client_projects(
    doc: &mut Document,
    clients: &[Client],
    projects: &ProjectsDocument,
) -> SiteResult<Vec<Carousel>> {
    let container = find(doc, CLIENT_CONTAINER_SELECTOR)?;
    doc.clear_children(container)?;

    let sorted = sorted_clients(clients);
    let mut carousels = Vec::new();
    for (index, client) in sorted.iter().enumerate() {
        if client.id.trim().is_empty() {
            tracing::warn!(name = %client.name, "skipping client without an id");
            continue;
        }
        let section = create_client_section(doc, client)?;
        doc.append_child(container, section)?;

        if index + 1 < sorted.len() {
            doc.append_element(container, "span", &["divider"])?;
        }

        let client_projects: &[Project] = projects.for_client(&client.id);
        if client_projects.is_empty() {
            continue;
        }
        if !is_valid_client_id(&client.id) {
            tracing::warn!(client = %client.id, "client id cannot be used in a selector, no carousel");
            continue;
        }
        let carousel = build_carousel(
            doc,
            client_projects,
            &format!(".{}-project-grid", client.id),
            &format!(".{}-project-nav", client.id),
        )?;
        carousels.push(carousel);
    }

    tracing::debug!(clients = sorted.len(), carousels = carousels.len(), "client projects rendered");
    Ok(carousels)
}

/// One navigation button per client, in document order.
pub fn init_client_navigation(doc: &mut Document, clients: &[Client]) -> SiteResult<Vec<NodeId>> {
    let nav = find(doc, CLIENT_NAV_SELECTOR)?;
    doc.clear_children(nav)?;

    let mut buttons = Vec::with_capacity(clients.len());
    for (index, client) in clients.iter().enumerate() {
        if client.id.trim().is_empty() {
            continue;
        }
        let class = format!("Client{}", index + 1);
        let button = doc.append_element(nav, "div", &[class.as_str()])?;
        doc.set_attribute(button, "data-client-id", &client.id)?;
        let title = if client.name.trim().is_empty() {
            format!("Client {}", index + 1)
        } else {
            client.name.clone()
        };
        doc.set_attribute(button, "title", &title)?;
        buttons.push(button);
    }
    Ok(buttons)
}

/// Element a client navigation button scrolls to.
pub fn scroll_target_for_client(doc: &Document, client_id: &str) -> SiteResult<NodeId> {
    if !is_valid_client_id(client_id) {
        tracing::warn!(client = client_id, "invalid client id for scrolling");
        return Err(SiteError::InvalidClientId(client_id.to_string()));
    }
    let element_id = format!("client-{client_id}");
    doc.get_element_by_id(&element_id).ok_or_else(|| {
        tracing::warn!(element = %element_id, "scroll target not found");
        SiteError::missing(format!("#{element_id}"))
    })
}
