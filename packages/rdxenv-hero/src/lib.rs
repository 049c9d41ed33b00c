//! Hero banner effects: a recursive mosaic of background tiles, the hero
//! text overlaid on the largest tile, and an optional background colour
//! transition.

pub mod config;
pub mod error;
pub mod generator;
pub mod inject;
pub mod partition;
pub mod rng;
pub mod tile;
pub mod transition;

pub use config::{
    Animation, AnimationKind, HeroContent, HeroDocument, LayoutConfig, MAX_DEPTH, Ratio,
};
pub use error::{HeroError, HeroResult};
pub use generator::{generate_layout, measure_container};
pub use inject::{Injection, inject_hero_content, largest_tile};
pub use partition::{Orientation, Rect, partition, split_point};
pub use rng::{RandomSource, XorShiftRng, shuffle};
pub use tile::{Background, Layout, PercentBox, PlacedTile, Tile};
pub use transition::{
    BackgroundColours, ColorEntry, ColorPool, DEFAULT_TRANSITION_INTERVAL, Transitions,
    is_hex_color,
};

use rdxenv_core::Document;

/// Everything one hero render produced.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroRender {
    pub layout: Layout,
    pub injection: Injection,
}

/// Renders the whole hero section: resolves the container from
/// `config.target_selector`, builds the mosaic at the container's current
/// size and overlays `hero` on the largest tile.
pub fn init_hero(
    doc: &mut Document,
    hero: &HeroContent,
    config: &LayoutConfig,
    rng: &mut dyn RandomSource,
) -> HeroResult<HeroRender> {
    config.validate()?;
    let container = doc
        .query_selector(&config.target_selector)
        .map_err(|e| HeroError::invalid_config(e.to_string()))?
        .ok_or_else(|| HeroError::MissingContainer(config.target_selector.clone()))?;

    let size = measure_container(doc, container)?;
    let layout = generate_layout(doc, container, size.width, size.height, config, rng)?;
    let injection = inject_hero_content(doc, &layout, hero, config)?;

    tracing::info!(
        tiles = layout.len(),
        content_tile = %injection.tile_id,
        "hero section initialized"
    );
    Ok(HeroRender { layout, injection })
}
