//! Filmography page: header copy, the film grid and its filters.

use crate::error::{SiteError, SiteResult};
use rdxenv_content::{Film, FilmographyCopy};
use rdxenv_core::{Document, NodeId};
use std::cmp::Reverse;

pub const FILM_CONTAINER_SELECTOR: &str = ".film-container";
pub const FILTER_CONTAINER_CLASS: &str = "film-filters";
pub const ALL_OPTION: &str = "all";

/// Writes the page title, the subtitle and (once) the description paragraph.
pub fn render_filmography_header(doc: &mut Document, copy: &FilmographyCopy) -> SiteResult<()> {
    if let Some(heading) = doc.query_selector("header h1")? {
        doc.set_text_content(heading, copy.title.as_deref().unwrap_or_default())?;
    }

    let Some(subtitle) = doc.query_selector("#filmography h2")? else {
        return Ok(());
    };
    doc.set_text_content(subtitle, copy.subtitle.as_deref().unwrap_or_default())?;

    let existing = doc.query_selector("#filmography .description")?;
    if let (None, Some(description)) = (existing, copy.description.as_deref()) {
        let paragraph = doc.create_element("p");
        doc.add_class(paragraph, "description")?;
        doc.set_text_content(paragraph, description)?;
        doc.insert_after(subtitle, paragraph)?;
    }
    Ok(())
}

/// Newest first. Films without a parseable year go last; ties keep their
/// original order.
pub fn sort_films(films: &[Film]) -> Vec<Film> {
    let mut sorted = films.to_vec();
    sorted.sort_by_key(|film| Reverse(film.year.value()));
    sorted
}

fn render_film(doc: &mut Document, container: NodeId, film: &Film) -> SiteResult<NodeId> {
    let card = doc.append_element(container, "div", &["film"])?;
    doc.set_attribute(card, "data-id", &film.id)?;
    doc.set_attribute(card, "data-client", &film.client)?;

    let thumb = doc.append_element(card, "div", &["film-thumbnail"])?;
    let img = doc.append_element(thumb, "img", &[])?;
    doc.set_attribute(img, "src", &film.thumbnail_url)?;
    doc.set_attribute(img, "alt", &film.title)?;

    let details = doc.append_element(card, "div", &["film-details"])?;
    let heading = doc.append_element(details, "h3", &[])?;
    let title = doc.create_text(&format!("{} ", film.title));
    doc.append_child(heading, title)?;
    doc.append_text_element(heading, "span", &["film-year"], &format!("({})", film.year))?;

    doc.append_text_element(details, "div", &["film-client"], &format!("Client: {}", film.client))?;
    doc.append_text_element(
        details,
        "div",
        &["film-duration"],
        &format!("Duration: {}", film.duration),
    )?;
    doc.append_text_element(details, "p", &["film-description"], &film.description)?;

    let tags = doc.append_element(details, "div", &["film-tags"])?;
    for tag in &film.tags {
        doc.append_text_element(tags, "span", &["tag"], tag)?;
    }
    if let Some(url) = film.video_url.as_deref().filter(|u| !u.is_empty()) {
        let watch = doc.append_text_element(details, "a", &["watch-btn"], "Watch Film")?;
        doc.set_attribute(watch, "href", url)?;
        doc.set_attribute(watch, "target", "_blank")?;
    }
    Ok(card)
}

/// Replaces the grid content with one card per film, newest first, and
/// returns the films in rendered order.
pub fn render_filmography_grid(doc: &mut Document, films: &[Film]) -> SiteResult<Vec<Film>> {
    let container = doc
        .query_selector(FILM_CONTAINER_SELECTOR)?
        .ok_or_else(|| SiteError::missing(FILM_CONTAINER_SELECTOR))?;
    doc.clear_children(container)?;

    let sorted = sort_films(films);
    for film in &sorted {
        render_film(doc, container, film)?;
    }
    tracing::debug!(films = sorted.len(), "filmography grid rendered");
    Ok(sorted)
}

/// Filter options offered to the visitor, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOptions {
    pub clients: Vec<String>,
    pub tags: Vec<String>,
}

impl FilterOptions {
    pub fn from_films(films: &[Film]) -> Self {
        let mut options = Self::default();
        for film in films {
            if !options.clients.contains(&film.client) {
                options.clients.push(film.client.clone());
            }
            for tag in &film.tags {
                if !options.tags.contains(tag) {
                    options.tags.push(tag.clone());
                }
            }
        }
        options
    }
}

fn filter_group(
    doc: &mut Document,
    parent: NodeId,
    id: &str,
    label: &str,
    all_label: &str,
    values: &[String],
) -> SiteResult<NodeId> {
    let group = doc.append_element(parent, "div", &["filter-group"])?;
    let label_node = doc.append_text_element(group, "label", &[], label)?;
    doc.set_attribute(label_node, "for", id)?;
    let select = doc.append_element(group, "select", &[])?;
    doc.set_attribute(select, "id", id)?;

    let all = doc.append_text_element(select, "option", &[], all_label)?;
    doc.set_attribute(all, "value", ALL_OPTION)?;
    for value in values {
        let option = doc.append_text_element(select, "option", &[], value)?;
        doc.set_attribute(option, "value", value)?;
    }
    Ok(select)
}

/// Builds (or rebuilds) the `.film-filters` controls in front of the grid.
pub fn add_film_filters(doc: &mut Document, films: &[Film]) -> SiteResult<FilterOptions> {
    let options = FilterOptions::from_films(films);

    let container = match doc.query_selector(&format!(".{FILTER_CONTAINER_CLASS}"))? {
        Some(existing) => {
            doc.clear_children(existing)?;
            existing
        }
        None => {
            let grid = doc
                .query_selector(FILM_CONTAINER_SELECTOR)?
                .ok_or_else(|| SiteError::missing(FILM_CONTAINER_SELECTOR))?;
            let filters = doc.create_element("div");
            doc.add_class(filters, FILTER_CONTAINER_CLASS)?;
            doc.insert_before(grid, filters)?;
            filters
        }
    };

    filter_group(
        doc,
        container,
        "client-filter",
        "Filter by Client:",
        "All Clients",
        &options.clients,
    )?;
    filter_group(
        doc,
        container,
        "tag-filter",
        "Filter by Tag:",
        "All Tags",
        &options.tags,
    )?;
    let reset = doc.append_text_element(container, "button", &[], "Reset Filters")?;
    doc.set_attribute(reset, "id", "reset-filters")?;
    Ok(options)
}

/// Current filter selection. `None` matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilmFilter {
    pub client: Option<String>,
    pub tag: Option<String>,
}

impl FilmFilter {
    /// From the raw `select` values, where `"all"` means no restriction.
    pub fn from_values(client: &str, tag: &str) -> Self {
        let pick = |value: &str| (value != ALL_OPTION && !value.is_empty()).then(|| value.to_string());
        Self {
            client: pick(client),
            tag: pick(tag),
        }
    }

    pub fn matches(&self, film: &Film) -> bool {
        let client_ok = self.client.as_ref().is_none_or(|c| *c == film.client);
        let tag_ok = self.tag.as_ref().is_none_or(|t| film.tags.contains(t));
        client_ok && tag_ok
    }
}

/// Shows matching film cards and hides the rest. Cards whose `data-id` is
/// not among `films` are left alone. Returns how many cards are visible.
pub fn apply_film_filter(doc: &mut Document, films: &[Film], filter: &FilmFilter) -> SiteResult<usize> {
    let cards = doc.query_selector_all(".film")?;
    let mut visible = 0;
    for card in cards {
        let Some(film) = doc
            .element(card)
            .and_then(|el| el.attribute("data-id"))
            .and_then(|id| films.iter().find(|f| f.id == id))
        else {
            continue;
        };
        let shown = filter.matches(film);
        doc.set_style(card, "display", if shown { "block" } else { "none" })?;
        if shown {
            visible += 1;
        }
    }
    Ok(visible)
}

/// The reset button: back to "all" on both selects.
pub fn reset_film_filter(doc: &mut Document, films: &[Film]) -> SiteResult<usize> {
    apply_film_filter(doc, films, &FilmFilter::default())
}
