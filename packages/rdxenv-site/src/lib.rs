//! The RDXENV site: page skeletons, section renderers, project carousels
//! and the page initialisation that ties content, hero and sections
//! together.

pub mod app;
pub mod carousel;
pub mod error;
pub mod filmography;
pub mod pages;
pub mod sections;

pub use app::{InitReport, Section, SiteApp, SkippedSection};
pub use carousel::{CardMetrics, Carousel, CarouselMetrics, Step, build_carousel};
pub use error::{SiteError, SiteResult};
pub use filmography::{
    FilmFilter, FilterOptions, add_film_filters, apply_film_filter, render_filmography_grid,
    render_filmography_header, reset_film_filter, sort_films,
};
pub use pages::{PageKind, filmography_page, index_page};
pub use sections::{
    create_client_section, init_client_navigation, is_valid_client_id, render_about,
    render_client_projects, render_contact, scroll_target_for_client, sorted_clients,
};
