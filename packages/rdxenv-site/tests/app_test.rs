use rdxenv_content::{ContentDocument, MemorySource};
use rdxenv_core::{BoxSize, lock};
use rdxenv_hero::XorShiftRng;
use rdxenv_site::{PageKind, Section, SiteApp};
use serde_json::json;
use std::time::Duration;

fn content() -> MemorySource {
    MemorySource::new()
        .with(
            ContentDocument::Copy,
            json!({
                "about": {"title": "About us", "paragraphs": ["We make films."]},
                "contact": {"email": "hello@rdxenv.test", "social": {"vimeo": "https://vimeo.test"}},
                "filmography": {"title": "Films", "subtitle": "Selected", "description": "All of it."}
            }),
        )
        .with(
            ContentDocument::Clients,
            json!({"clients": [
                {"id": "acme", "name": "Acme", "shortName": "ACM", "order": 1},
                {"id": "beta", "name": "Beta", "shortName": "BET", "order": 0}
            ]}),
        )
        .with(
            ContentDocument::Projects,
            json!({"projects": {"acme": [
                {"description": "Launch", "imageUrl": "/img/a.jpg", "altText": "a"}
            ]}}),
        )
        .with(
            ContentDocument::Hero,
            json!({"hero": {"title": "RDXENV", "ctaText": "Watch", "ctaLink": "/filmography",
                            "animation": {"enabled": true, "type": "fade-in"}}}),
        )
        .with(
            ContentDocument::HeroConfig,
            json!({"minSize": 120, "maxDepth": 3, "ratios": [{"x": 1, "y": 1}, {"x": 2, "y": 1}],
                   "blockBackgrounds": ["/img/bg1.jpg", "/img/bg2.jpg"]}),
        )
        .with(
            ContentDocument::BackgroundColours,
            json!({"colors": [{"name": "sand", "hex": "#EBEFDF"}, {"name": "teal", "hex": "#225F6E"}]}),
        )
        .with(
            ContentDocument::Films,
            json!({"filmography": [
                {"id": "f1", "title": "One", "year": 2020, "client": "Acme", "tags": ["ad"]},
                {"id": "f2", "title": "Two", "year": 2022, "client": "Beta", "tags": ["doc"]}
            ]}),
        )
}

fn viewport() -> BoxSize {
    BoxSize::new(1280.0, 720.0)
}

#[tokio::test(start_paused = true)]
async fn test_index_renders_every_section() {
    let mut app = SiteApp::new(content(), PageKind::Index, viewport()).unwrap();
    let report = app.init(&mut XorShiftRng::seeded(42)).await;

    assert!(report.is_complete(), "skipped: {:?}", report.skipped);
    for section in [
        Section::Hero,
        Section::About,
        Section::Contact,
        Section::ClientProjects,
        Section::ClientNavigation,
        Section::BackgroundTransition,
    ] {
        assert!(report.rendered(section), "{section} not rendered");
    }
    assert_eq!(report.carousels, 1);
    assert_eq!(app.transitions().len(), 1);

    let html = app.render_html();
    assert!(html.starts_with("<!DOCTYPE html><html lang=\"en\">"));
    assert!(html.contains("class=\"hero-block"));
    assert!(html.contains("<h1 class=\"hero-title\">RDXENV</h1>"));
    assert!(html.contains("<h2>About us</h2>"));
    assert!(html.contains("id=\"client-beta\""));

    let doc = app.document();
    let doc = lock(&doc);
    let body = doc.query_selector("body").unwrap().unwrap();
    let colour = doc.element(body).unwrap().style_value("background-color");
    assert!(matches!(colour, Some("#EBEFDF") | Some("#225F6E")));
}

#[tokio::test(start_paused = true)]
async fn test_missing_hero_config_only_skips_hero() {
    let mut source = content();
    source.remove(ContentDocument::HeroConfig);
    let mut app = SiteApp::new(source, PageKind::Index, viewport()).unwrap();
    let report = app.init_index(&mut XorShiftRng::seeded(1)).await;

    assert_eq!(
        report.skipped(Section::Hero),
        Some("Failed to load hero configuration")
    );
    assert!(report.rendered(Section::About));
    assert!(report.rendered(Section::ClientProjects));

    let doc = app.document();
    let doc = lock(&doc);
    let hero = doc.query_selector("#hero-section").unwrap().unwrap();
    assert!(doc.children(hero).is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_background_colours_are_optional() {
    let mut source = content();
    source.insert(ContentDocument::BackgroundColours, json!({"palette": []}));
    let mut app = SiteApp::new(source, PageKind::Index, viewport()).unwrap();
    let report = app.init_index(&mut XorShiftRng::seeded(1)).await;

    assert!(report.skipped(Section::BackgroundTransition).is_some());
    assert!(report.rendered(Section::Hero));
    assert!(app.transitions().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_missing_clients_skip_client_sections() {
    let mut source = content();
    source.remove(ContentDocument::Clients);
    let mut app = SiteApp::new(source, PageKind::Index, viewport()).unwrap();
    let report = app.init_index(&mut XorShiftRng::seeded(1)).await;

    assert!(report.skipped(Section::ClientProjects).is_some());
    assert!(report.skipped(Section::ClientNavigation).is_some());
    assert!(report.rendered(Section::Contact));
    assert_eq!(report.carousels, 0);
}

#[tokio::test(start_paused = true)]
async fn test_reinit_keeps_a_single_transition() {
    let mut app = SiteApp::new(content(), PageKind::Index, viewport())
        .unwrap()
        .with_transition_interval(Duration::from_secs(1));
    let mut rng = XorShiftRng::seeded(3);

    app.init_index(&mut rng).await;
    app.init_index(&mut rng).await;
    assert_eq!(app.transitions().len(), 1);

    tokio::time::sleep(Duration::from_secs(3)).await;
    app.shutdown();
    assert!(app.transitions().is_empty());
}

#[tokio::test]
async fn test_filmography_page() {
    let mut app = SiteApp::new(content(), PageKind::Filmography, viewport()).unwrap();
    let report = app.init(&mut XorShiftRng::seeded(1)).await;

    assert!(report.is_complete(), "skipped: {:?}", report.skipped);
    assert!(report.rendered(Section::FilmFilters));

    let html = app.render_html();
    assert!(html.contains("<h1>Films</h1>"));
    assert!(html.contains("<p class=\"description\">All of it.</p>"));
    let first = html.find("data-id=\"f2\"").unwrap();
    let second = html.find("data-id=\"f1\"").unwrap();
    assert!(first < second, "newest film first");
}

#[tokio::test]
async fn test_filmography_without_films() {
    let mut source = content();
    source.remove(ContentDocument::Films);
    let mut app = SiteApp::new(source, PageKind::Filmography, viewport()).unwrap();
    let report = app.init_filmography().await;

    assert!(report.rendered(Section::FilmographyHeader));
    assert_eq!(
        report.skipped(Section::FilmographyGrid),
        Some("Failed to load filmography data")
    );
    assert!(report.skipped(Section::FilmFilters).is_some());
}
