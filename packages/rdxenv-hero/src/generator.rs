use crate::config::LayoutConfig;
use crate::error::{HeroError, HeroResult};
use crate::partition::{Rect, partition};
use crate::rng::{RandomSource, shuffled_first};
use crate::tile::{Background, Layout, PlacedTile};
use rdxenv_core::{BoxSize, Document, NodeId};

pub const TILE_CLASS: &str = "hero-block";

fn usable(size: BoxSize) -> bool {
    size.width > 0.0 && size.height > 0.0 && size.width.is_finite() && size.height.is_finite()
}

/// Size the container currently reports: its measured box, falling back to
/// its `width`/`height` inline style in px.
pub fn measure_container(doc: &Document, container: NodeId) -> HeroResult<BoxSize> {
    let el = doc
        .element(container)
        .ok_or_else(|| HeroError::MissingContainer(format!("{container:?}")))?;
    if let Some(size) = el.box_size.filter(|s| usable(*s)) {
        return Ok(size);
    }
    Ok(BoxSize::new(
        el.style_px("width").unwrap_or(0.0),
        el.style_px("height").unwrap_or(0.0),
    ))
}

/// Builds the hero mosaic inside `container`.
///
/// The container is cleared and receives one absolutely positioned
/// `div.hero-block` per tile, placed in percentages of
/// `initial_width` x `initial_height`. Non-positive initial dimensions fall
/// back to [`measure_container`]; if that is still degenerate the container
/// is left empty and [`HeroError::DegenerateDimensions`] is returned.
#[tracing::instrument(skip_all, fields(width = initial_width, height = initial_height))]
pub fn generate_layout(
    doc: &mut Document,
    container: NodeId,
    initial_width: f64,
    initial_height: f64,
    config: &LayoutConfig,
    rng: &mut dyn RandomSource,
) -> HeroResult<Layout> {
    config.validate()?;
    if doc.element(container).is_none() {
        return Err(HeroError::MissingContainer(format!("{container:?}")));
    }

    let requested = BoxSize::new(initial_width, initial_height);
    let initial = if usable(requested) {
        requested
    } else {
        measure_container(doc, container)?
    };

    doc.clear_children(container)?;
    if !usable(initial) {
        tracing::error!(
            width = initial.width,
            height = initial.height,
            "hero container has no usable size, leaving it empty"
        );
        return Err(HeroError::DegenerateDimensions {
            width: initial.width,
            height: initial.height,
        });
    }

    let root = Rect::new(0.0, 0.0, initial.width, initial.height);
    let tiles = partition(root, config, rng);

    if config.block_backgrounds.is_empty() {
        tracing::warn!("{}", HeroError::EmptyBackgroundPool);
    }

    let mut placed = Vec::with_capacity(tiles.len());
    for (index, tile) in tiles.into_iter().enumerate() {
        let percent = tile.percent_box(initial);
        let background = shuffled_first(&config.block_backgrounds, rng)
            .map(Background::Image)
            .unwrap_or_else(|| Background::fallback(index));

        let node = doc.create_element("div");
        doc.add_class(node, TILE_CLASS)?;
        doc.set_attribute(node, "id", &tile.id)?;
        doc.set_attribute(node, "data-depth", &tile.depth.to_string())?;
        doc.set_style(node, "position", "absolute")?;
        for (name, value) in percent.css() {
            doc.set_style(node, name, &value)?;
        }
        match &background {
            Background::Image(url) => {
                doc.set_style(node, "background-image", &format!("url('{url}')"))?;
                doc.set_style(node, "background-size", "cover")?;
                doc.set_style(node, "background-position", "center")?;
            }
            Background::Fill(color) => {
                doc.set_style(node, "background-color", color)?;
            }
        }
        doc.append_child(container, node)?;

        placed.push(PlacedTile {
            tile,
            percent,
            background,
            node,
        });
    }

    tracing::debug!(tiles = placed.len(), "hero mosaic generated");

    Ok(Layout {
        container,
        initial_width: initial.width,
        initial_height: initial.height,
        tiles: placed,
    })
}
