use crate::config::{HeroContent, LayoutConfig};
use crate::error::{HeroError, HeroResult};
use crate::tile::{Layout, PlacedTile};
use rdxenv_core::{Document, NodeId};

pub const CONTENT_CONTAINER_CLASS: &str = "hero-block-content-container";
pub const OVERLAY_CLASS: &str = "hero-block-content";

/// Where the hero overlay ended up.
#[derive(Debug, Clone, PartialEq)]
pub struct Injection {
    pub tile_id: String,
    pub tile_node: NodeId,
    pub overlay: NodeId,
}

/// Largest tile by pixel area. Ties go to the tile generated first.
pub fn largest_tile(tiles: &[PlacedTile]) -> Option<&PlacedTile> {
    let mut ranked: Vec<&PlacedTile> = tiles.iter().collect();
    // sort_by is stable, which keeps generation order among equal areas.
    ranked.sort_by(|a, b| b.tile.area_pixels.total_cmp(&a.tile.area_pixels));
    ranked.into_iter().next()
}

fn present(field: Option<&str>) -> Option<&str> {
    field.filter(|v| !v.trim().is_empty())
}

/// Overlays the hero text on the largest tile of `layout`, replacing
/// whatever that tile contained. Calling it again with the same inputs
/// yields the same tree.
pub fn inject_hero_content(
    doc: &mut Document,
    layout: &Layout,
    hero: &HeroContent,
    config: &LayoutConfig,
) -> HeroResult<Injection> {
    let target = largest_tile(&layout.tiles).ok_or(HeroError::EmptyLayout)?;
    let tile_node = target.node;

    doc.clear_children(tile_node)?;
    doc.add_class(tile_node, CONTENT_CONTAINER_CLASS)?;

    let overlay = doc.append_element(tile_node, "div", &[OVERLAY_CLASS])?;
    doc.set_style(overlay, "color", config.text_color())?;
    doc.set_style(overlay, "background-color", config.background_color())?;
    if hero.fades_in() {
        doc.add_class(overlay, "fade-in")?;
    }

    if let Some(title) = present(hero.title.as_deref()) {
        doc.append_text_element(overlay, "h1", &["hero-title"], title)?;
    }
    if let Some(subtitle) = present(hero.subtitle.as_deref()) {
        doc.append_text_element(overlay, "h2", &["hero-subtitle"], subtitle)?;
    }
    if let Some(tagline) = present(hero.tagline.as_deref()) {
        doc.append_text_element(overlay, "p", &["hero-tagline"], tagline)?;
    }
    if let (Some(text), Some(link)) = (
        present(hero.cta_text.as_deref()),
        present(hero.cta_link.as_deref()),
    ) {
        let cta = doc.append_text_element(overlay, "a", &["hero-cta"], text)?;
        doc.set_attribute(cta, "href", link)?;
    }

    tracing::debug!(tile = %target.tile.id, area = target.tile.area_pixels, "hero content injected");

    Ok(Injection {
        tile_id: target.tile.id.clone(),
        tile_node,
        overlay,
    })
}
