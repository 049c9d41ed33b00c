use rdxenv_core::{BoxSize, NodeId};
use serde::Serialize;

/// One leaf of the recursive split, in pixels relative to the root rectangle.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tile {
    pub id: String,
    pub origin_pixel_x: f64,
    pub origin_pixel_y: f64,
    pub width_pixels: f64,
    pub height_pixels: f64,
    pub area_pixels: f64,
    pub depth: u32,
}

impl Tile {
    pub fn percent_box(&self, initial: BoxSize) -> PercentBox {
        PercentBox::from_tile(self, initial)
    }
}

/// Tile position and size as percentages of the container's initial size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PercentBox {
    pub left_pct: f64,
    pub top_pct: f64,
    pub width_pct: f64,
    pub height_pct: f64,
}

impl PercentBox {
    /// Only the initial container size enters the computation, never the
    /// live one, so the mosaic scales with its container without a re-run.
    pub fn from_tile(tile: &Tile, initial: BoxSize) -> Self {
        Self {
            left_pct: tile.origin_pixel_x / initial.width * 100.0,
            top_pct: tile.origin_pixel_y / initial.height * 100.0,
            width_pct: tile.width_pixels / initial.width * 100.0,
            height_pct: tile.height_pixels / initial.height * 100.0,
        }
    }

    /// `(property, value)` pairs ready to be applied as inline styles.
    pub fn css(&self) -> [(&'static str, String); 4] {
        [
            ("left", format_pct(self.left_pct)),
            ("top", format_pct(self.top_pct)),
            ("width", format_pct(self.width_pct)),
            ("height", format_pct(self.height_pct)),
        ]
    }
}

fn format_pct(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    format!("{rounded}%")
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum Background {
    Image(String),
    Fill(String),
}

impl Background {
    /// `hsl()` fill used when no images are configured; depends only on the
    /// tile's position in generation order.
    pub fn fallback(index: usize) -> Self {
        Background::Fill(format!("hsl({}, 30%, 80%)", (index * 60) % 360))
    }
}

/// A tile together with what was rendered for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedTile {
    pub tile: Tile,
    pub percent: PercentBox,
    pub background: Background,
    #[serde(skip)]
    pub node: NodeId,
}

/// Result of one generation pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    #[serde(skip)]
    pub container: NodeId,
    pub initial_width: f64,
    pub initial_height: f64,
    pub tiles: Vec<PlacedTile>,
}

impl Layout {
    pub fn initial_size(&self) -> BoxSize {
        BoxSize::new(self.initial_width, self.initial_height)
    }

    pub fn total_area(&self) -> f64 {
        self.tiles.iter().map(|t| t.tile.area_pixels).sum()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}
