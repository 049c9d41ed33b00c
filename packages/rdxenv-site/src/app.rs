use crate::error::SiteError;
use crate::filmography::{add_film_filters, render_filmography_grid, render_filmography_header};
use crate::pages::PageKind;
use crate::sections::{
    init_client_navigation, render_about, render_client_projects, render_contact,
};
use rdxenv_content::{ContentError, ContentResult, ContentSource};
use rdxenv_core::{BoxSize, Document, NodeId, SharedDocument, lock, share};
use rdxenv_hero::{
    ColorPool, DEFAULT_TRANSITION_INTERVAL, RandomSource, Transitions, XorShiftRng, init_hero,
};
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// The independently rendered parts of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Hero,
    About,
    Contact,
    ClientProjects,
    ClientNavigation,
    BackgroundTransition,
    FilmographyHeader,
    FilmographyGrid,
    FilmFilters,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Contact => "contact",
            Section::ClientProjects => "client-projects",
            Section::ClientNavigation => "client-navigation",
            Section::BackgroundTransition => "background-transition",
            Section::FilmographyHeader => "filmography-header",
            Section::FilmographyGrid => "filmography-grid",
            Section::FilmFilters => "film-filters",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedSection {
    pub section: Section,
    pub reason: String,
}

/// What one initialisation pass rendered and what it had to leave out.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitReport {
    pub rendered: Vec<Section>,
    pub skipped: Vec<SkippedSection>,
    pub carousels: usize,
}

impl InitReport {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    pub fn rendered(&self, section: Section) -> bool {
        self.rendered.contains(&section)
    }

    pub fn skipped(&self, section: Section) -> Option<&str> {
        self.skipped
            .iter()
            .find(|s| s.section == section)
            .map(|s| s.reason.as_str())
    }

    fn record<T>(&mut self, section: Section, outcome: Result<T, SiteError>) -> Option<T> {
        match outcome {
            Ok(value) => {
                self.rendered.push(section);
                Some(value)
            }
            Err(err) => {
                self.skip(section, &err);
                None
            }
        }
    }

    fn skip(&mut self, section: Section, reason: &dyn fmt::Display) {
        tracing::warn!(%section, %reason, "section skipped");
        self.skipped.push(SkippedSection {
            section,
            reason: reason.to_string(),
        });
    }
}

/// `Ok` with both values, or the first failure.
fn both<A: Clone, B: Clone>(
    a: &ContentResult<A>,
    b: &ContentResult<B>,
) -> Result<(A, B), ContentError> {
    match (a, b) {
        (Ok(a), Ok(b)) => Ok((a.clone(), b.clone())),
        (Err(e), _) | (_, Err(e)) => Err(e.clone()),
    }
}

/// One page of the site bound to its content source.
///
/// Owns the page document and the background transitions running on it;
/// dropping the app cancels them.
pub struct SiteApp<S> {
    source: S,
    page: PageKind,
    document: SharedDocument,
    transitions: Transitions,
    transition_interval: Duration,
}

impl<S: ContentSource> SiteApp<S> {
    /// Fresh page skeleton for `page`, sized to `viewport`.
    pub fn new(source: S, page: PageKind, viewport: BoxSize) -> Result<Self, SiteError> {
        let document = page.skeleton(viewport)?;
        Ok(Self::with_document(source, page, document))
    }

    pub fn with_document(source: S, page: PageKind, document: Document) -> Self {
        Self {
            source,
            page,
            document: share(document),
            transitions: Transitions::new(),
            transition_interval: DEFAULT_TRANSITION_INTERVAL,
        }
    }

    pub fn with_transition_interval(mut self, interval: Duration) -> Self {
        self.transition_interval = interval;
        self
    }

    pub fn page(&self) -> PageKind {
        self.page
    }

    pub fn document(&self) -> SharedDocument {
        self.document.clone()
    }

    pub fn transitions(&self) -> &Transitions {
        &self.transitions
    }

    /// Runs the initialisation for this app's page.
    pub async fn init(&mut self, rng: &mut (dyn RandomSource + Send)) -> InitReport {
        match self.page {
            PageKind::Index => self.init_index(rng).await,
            PageKind::Filmography => self.init_filmography().await,
        }
    }

    /// Fetches everything the home page needs at once, then renders each
    /// section whose own documents arrived. Must run inside a tokio runtime
    /// when a background transition is configured.
    #[tracing::instrument(skip_all)]
    pub async fn init_index(&mut self, rng: &mut (dyn RandomSource + Send)) -> InitReport {
        self.transitions.cancel_all();

        let source = &self.source;
        let (copy, clients, projects, hero, hero_config, colours) = futures::join!(
            source.copy(),
            source.clients(),
            source.projects(),
            source.hero(),
            source.hero_config(),
            source.background_colours(),
        );

        let mut report = InitReport::default();
        let mut transition_target: Option<NodeId> = None;
        {
            let mut doc = lock(&self.document);

            match both(&hero, &hero_config) {
                Ok((hero, config)) => {
                    let outcome = init_hero(&mut doc, &hero.hero, &config, rng);
                    if let Err(err) = &outcome {
                        if err.is_fatal() {
                            tracing::error!(error = %err, "hero section aborted");
                        }
                    }
                    report.record(Section::Hero, outcome.map_err(SiteError::from));
                }
                Err(err) => report.skip(Section::Hero, &err),
            }

            match &copy {
                Ok(copy) => {
                    match &copy.about {
                        Some(about) => {
                            report.record(Section::About, render_about(&mut doc, about));
                        }
                        None => report.skip(Section::About, &"copy has no about section"),
                    }
                    match &copy.contact {
                        Some(contact) => {
                            report.record(Section::Contact, render_contact(&mut doc, contact));
                        }
                        None => report.skip(Section::Contact, &"copy has no contact section"),
                    }
                }
                Err(err) => {
                    report.skip(Section::About, err);
                    report.skip(Section::Contact, err);
                }
            }

            match both(&clients, &projects) {
                Ok((clients, projects)) => {
                    let carousels = report.record(
                        Section::ClientProjects,
                        render_client_projects(&mut doc, &clients.clients, &projects),
                    );
                    report.carousels = carousels.map(|c| c.len()).unwrap_or(0);
                }
                Err(err) => report.skip(Section::ClientProjects, &err),
            }

            match &clients {
                Ok(clients) => {
                    report.record(
                        Section::ClientNavigation,
                        init_client_navigation(&mut doc, &clients.clients),
                    );
                }
                Err(err) => report.skip(Section::ClientNavigation, err),
            }

            if colours.is_ok() {
                transition_target = doc.query_selector("body").ok().flatten();
            }
        }

        match (colours, transition_target) {
            (Ok(colours), Some(target)) => {
                let pool = ColorPool::from_entries(&colours.colors);
                let seed = rng.next_u64();
                let outcome = self.transitions.start(
                    self.document.clone(),
                    target,
                    pool,
                    self.transition_interval,
                    Box::new(XorShiftRng::seeded(seed)),
                );
                report.record(Section::BackgroundTransition, outcome.map_err(SiteError::from));
            }
            (Ok(_), None) => report.skip(Section::BackgroundTransition, &"page has no body"),
            (Err(err), _) => report.skip(Section::BackgroundTransition, &err),
        }

        tracing::info!(
            rendered = report.rendered.len(),
            skipped = report.skipped.len(),
            "home page initialized"
        );
        report
    }

    #[tracing::instrument(skip_all)]
    pub async fn init_filmography(&mut self) -> InitReport {
        self.transitions.cancel_all();

        let source = &self.source;
        let (films, copy) = futures::join!(source.films(), source.copy());

        let mut report = InitReport::default();
        let mut doc = lock(&self.document);

        match copy.map(|c| c.filmography) {
            Ok(Some(header)) => {
                report.record(
                    Section::FilmographyHeader,
                    render_filmography_header(&mut doc, &header),
                );
            }
            Ok(None) => report.skip(Section::FilmographyHeader, &"copy has no filmography section"),
            Err(err) => report.skip(Section::FilmographyHeader, &err),
        }

        match films {
            Ok(films) => {
                let sorted = report.record(
                    Section::FilmographyGrid,
                    render_filmography_grid(&mut doc, &films.filmography),
                );
                match sorted {
                    Some(sorted) => {
                        report.record(Section::FilmFilters, add_film_filters(&mut doc, &sorted));
                    }
                    None => report.skip(Section::FilmFilters, &"film grid was not rendered"),
                }
            }
            Err(err) => {
                report.skip(Section::FilmographyGrid, &err);
                report.skip(Section::FilmFilters, &err);
            }
        }

        tracing::info!(
            rendered = report.rendered.len(),
            skipped = report.skipped.len(),
            "filmography page initialized"
        );
        report
    }

    /// Serialises the current document, doctype included.
    pub fn render_html(&self) -> String {
        rdxenv_ssr::render_document(&lock(&self.document))
    }

    pub fn shutdown(&mut self) {
        self.transitions.cancel_all();
    }
}
