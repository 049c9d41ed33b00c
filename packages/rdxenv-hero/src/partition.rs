//! Pure recursive partition of a rectangle into tiles.

use crate::config::{LayoutConfig, Ratio};
use crate::rng::RandomSource;
use crate::tile::Tile;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Direction of the cut line. A vertical cut divides the width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

impl Orientation {
    pub fn perpendicular(self) -> Self {
        match self {
            Orientation::Vertical => Orientation::Horizontal,
            Orientation::Horizontal => Orientation::Vertical,
        }
    }
}

/// Where to cut `rect` along `orientation`, or `None` when either half
/// would fall below `min_size`.
pub fn split_point(rect: Rect, ratio: Ratio, orientation: Orientation, min_size: f64) -> Option<f64> {
    let (length, component) = match orientation {
        Orientation::Vertical => (rect.width, ratio.x),
        Orientation::Horizontal => (rect.height, ratio.y),
    };
    if length < 2.0 * min_size {
        return None;
    }
    let preferred = length * (component / (ratio.x + ratio.y));
    Some(preferred.clamp(min_size, length - min_size))
}

fn split_rect(rect: Rect, orientation: Orientation, at: f64) -> (Rect, Rect) {
    match orientation {
        Orientation::Vertical => (
            Rect::new(rect.x, rect.y, at, rect.height),
            Rect::new(rect.x + at, rect.y, rect.width - at, rect.height),
        ),
        Orientation::Horizontal => (
            Rect::new(rect.x, rect.y, rect.width, at),
            Rect::new(rect.x, rect.y + at, rect.width, rect.height - at),
        ),
    }
}

struct Partitioner<'a> {
    config: &'a LayoutConfig,
    rng: &'a mut dyn RandomSource,
    tiles: Vec<Tile>,
}

impl Partitioner<'_> {
    fn is_leaf(&self, rect: Rect, depth: u32) -> bool {
        let min = self.config.min_size;
        depth >= self.config.max_depth
            || rect.width < min
            || rect.height < min
            || (depth > 0 && rect.area() < min * min)
    }

    fn emit(&mut self, rect: Rect, depth: u32) {
        let id = format!("hero-tile-{}", self.tiles.len());
        self.tiles.push(Tile {
            id,
            origin_pixel_x: rect.x,
            origin_pixel_y: rect.y,
            width_pixels: rect.width,
            height_pixels: rect.height,
            area_pixels: rect.area(),
            depth,
        });
    }

    fn visit(&mut self, rect: Rect, depth: u32) {
        if rect.is_degenerate() {
            return;
        }
        if self.is_leaf(rect, depth) {
            self.emit(rect, depth);
            return;
        }

        let config = self.config;
        if config.ratios.is_empty() {
            self.emit(rect, depth);
            return;
        }
        let ratio = config.ratios[self.rng.next_index(config.ratios.len())];
        let preferred = if self.rng.next_bool() {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        };

        let min = config.min_size;
        let cut = [preferred, preferred.perpendicular()]
            .into_iter()
            .find_map(|o| split_point(rect, ratio, o, min).map(|at| (o, at)));

        match cut {
            Some((orientation, at)) => {
                let (first, second) = split_rect(rect, orientation, at);
                self.visit(first, depth + 1);
                self.visit(second, depth + 1);
            }
            None => self.emit(rect, depth),
        }
    }
}

/// Splits `root` into tiles following `config`.
///
/// Tiles come back in depth-first generation order with ids
/// `hero-tile-0`, `hero-tile-1`, … The leaves exactly cover `root`, except
/// that zero-area branches are dropped.
pub fn partition(root: Rect, config: &LayoutConfig, rng: &mut dyn RandomSource) -> Vec<Tile> {
    let mut partitioner = Partitioner {
        config,
        rng,
        tiles: Vec::new(),
    };
    partitioner.visit(root, 0);
    partitioner.tiles
}
