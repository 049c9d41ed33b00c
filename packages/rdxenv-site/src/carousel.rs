//! Horizontally scrolling project cards with paging dots.
//!
//! Interaction is computed from [`CarouselMetrics`], the geometry a layout
//! engine reports for the grid and its cards. Every handler returns the
//! scroll offset to apply (if any) and keeps the active dot in sync.

use crate::error::{SiteError, SiteResult};
use rdxenv_content::Project;
use rdxenv_core::{Document, NodeId};

pub const ITEM_CLASS: &str = "project-item";
pub const DOT_CLASS: &str = "nav-dot";
pub const ACTIVE_CLASS: &str = "active";

/// Minimum horizontal travel, in px, for a touch gesture to count as a swipe.
pub const SWIPE_THRESHOLD: f64 = 50.0;

/// Share of the grid width on each side that acts as a prev/next zone.
pub const EDGE_ZONE: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardMetrics {
    pub left: f64,
    pub width: f64,
}

impl CardMetrics {
    pub fn center(&self) -> f64 {
        self.left + self.width / 2.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselMetrics {
    pub grid_width: f64,
    pub cards: Vec<CardMetrics>,
}

impl CarouselMetrics {
    /// `count` cards of equal width laid out left to right with `gap` between them.
    pub fn uniform(grid_width: f64, card_width: f64, gap: f64, count: usize) -> Self {
        let cards = (0..count)
            .map(|i| CardMetrics {
                left: i as f64 * (card_width + gap),
                width: card_width,
            })
            .collect();
        Self { grid_width, cards }
    }
}

/// Which way a gesture moves the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Prev,
    Next,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    pub grid: NodeId,
    pub nav: NodeId,
    pub items: Vec<NodeId>,
    pub dots: Vec<NodeId>,
    active: usize,
}

/// Renders one card and one dot per project into the elements matched by
/// `grid_selector` and `nav_selector`, replacing their content. The first
/// dot starts active.
pub fn build_carousel(
    doc: &mut Document,
    projects: &[Project],
    grid_selector: &str,
    nav_selector: &str,
) -> SiteResult<Carousel> {
    let grid = doc
        .query_selector(grid_selector)?
        .ok_or_else(|| SiteError::missing(grid_selector))?;
    let nav = doc
        .query_selector(nav_selector)?
        .ok_or_else(|| SiteError::missing(nav_selector))?;
    if projects.is_empty() {
        return Err(SiteError::EmptyCarousel);
    }

    doc.clear_children(grid)?;
    doc.clear_children(nav)?;

    let mut items = Vec::with_capacity(projects.len());
    let mut dots = Vec::with_capacity(projects.len());
    for (index, project) in projects.iter().enumerate() {
        let item = doc.append_element(grid, "div", &[ITEM_CLASS])?;
        doc.append_text_element(item, "div", &["description"], &project.description)?;
        let frame = doc.append_element(item, "div", &["imageCont"])?;
        let img = doc.append_element(frame, "img", &[])?;
        doc.set_attribute(img, "src", &project.image_url)?;
        doc.set_attribute(img, "alt", &project.alt_text)?;
        items.push(item);

        let dot = doc.append_element(nav, "div", &[DOT_CLASS])?;
        doc.set_attribute(dot, "data-index", &index.to_string())?;
        if index == 0 {
            doc.add_class(dot, ACTIVE_CLASS)?;
        }
        dots.push(dot);
    }

    tracing::debug!(grid = grid_selector, items = items.len(), "carousel built");
    Ok(Carousel {
        grid,
        nav,
        items,
        dots,
        active: 0,
    })
}

impl Carousel {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn active(&self) -> usize {
        self.active
    }

    fn last_index(&self, metrics: &CarouselMetrics) -> usize {
        self.items.len().min(metrics.cards.len()).saturating_sub(1)
    }

    /// Index of the card whose centre is nearest the grid's centre at
    /// `scroll_left`. Ties go to the earlier card.
    pub fn nearest_to_center(&self, metrics: &CarouselMetrics, scroll_left: f64) -> usize {
        let center = scroll_left + metrics.grid_width / 2.0;
        let count = self.items.len().min(metrics.cards.len());
        metrics.cards[..count]
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, f64)>, (i, card)| {
                let distance = (card.center() - center).abs();
                match best {
                    Some((_, d)) if d <= distance => best,
                    _ => Some((i, distance)),
                }
            })
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    /// Scroll offset that centres card `index` in the grid, never negative.
    pub fn offset_for(&self, metrics: &CarouselMetrics, index: usize) -> f64 {
        metrics
            .cards
            .get(index)
            .map(|card| (card.center() - metrics.grid_width / 2.0).max(0.0))
            .unwrap_or(0.0)
    }

    pub fn set_active(&mut self, doc: &mut Document, index: usize) -> SiteResult<()> {
        for (i, &dot) in self.dots.iter().enumerate() {
            doc.toggle_class(dot, ACTIVE_CLASS, i == index)?;
        }
        self.active = index;
        Ok(())
    }

    /// Scroll event: the active dot follows whatever card is centred now.
    pub fn on_scroll(
        &mut self,
        doc: &mut Document,
        metrics: &CarouselMetrics,
        scroll_left: f64,
    ) -> SiteResult<usize> {
        let index = self.nearest_to_center(metrics, scroll_left);
        self.set_active(doc, index)?;
        Ok(index)
    }

    /// Dot click or programmatic selection. Returns the offset to scroll to.
    pub fn select(
        &mut self,
        doc: &mut Document,
        metrics: &CarouselMetrics,
        index: usize,
    ) -> SiteResult<f64> {
        let index = index.min(self.last_index(metrics));
        self.set_active(doc, index)?;
        Ok(self.offset_for(metrics, index))
    }

    fn step(
        &mut self,
        doc: &mut Document,
        metrics: &CarouselMetrics,
        scroll_left: f64,
        step: Step,
    ) -> SiteResult<f64> {
        let current = self.nearest_to_center(metrics, scroll_left);
        let target = match step {
            Step::Prev => current.saturating_sub(1),
            Step::Next => (current + 1).min(self.last_index(metrics)),
        };
        self.select(doc, metrics, target)
    }

    /// Touch gesture from `start_x` to `end_x` (screen px). Moving left by
    /// more than [`SWIPE_THRESHOLD`] goes to the next card, moving right to
    /// the previous one; shorter gestures do nothing.
    pub fn on_swipe(
        &mut self,
        doc: &mut Document,
        metrics: &CarouselMetrics,
        scroll_left: f64,
        start_x: f64,
        end_x: f64,
    ) -> SiteResult<Option<f64>> {
        let step = if start_x - end_x > SWIPE_THRESHOLD {
            Step::Next
        } else if end_x - start_x > SWIPE_THRESHOLD {
            Step::Prev
        } else {
            return Ok(None);
        };
        self.step(doc, metrics, scroll_left, step).map(Some)
    }

    /// Click at `x` px from the grid's left edge. Only the outer
    /// [`EDGE_ZONE`] on either side navigates.
    pub fn on_edge_click(
        &mut self,
        doc: &mut Document,
        metrics: &CarouselMetrics,
        scroll_left: f64,
        x: f64,
    ) -> SiteResult<Option<f64>> {
        let step = if x < metrics.grid_width * EDGE_ZONE {
            Step::Prev
        } else if x > metrics.grid_width * (1.0 - EDGE_ZONE) {
            Step::Next
        } else {
            return Ok(None);
        };
        self.step(doc, metrics, scroll_left, step).map(Some)
    }
}
