use rdxenv_core::{BoxSize, Document, NodeId};
use rdxenv_hero::{
    Animation, AnimationKind, Background, HeroContent, HeroError, Layout, LayoutConfig,
    PlacedTile, Ratio, Tile, XorShiftRng, init_hero, inject_hero_content, largest_tile,
};

fn tile(doc: &mut Document, container: NodeId, n: usize, x: f64, w: f64, h: f64) -> PlacedTile {
    let node = doc.append_element(container, "div", &["hero-block"]).unwrap();
    let tile = Tile {
        id: format!("hero-tile-{n}"),
        origin_pixel_x: x,
        origin_pixel_y: 0.0,
        width_pixels: w,
        height_pixels: h,
        area_pixels: w * h,
        depth: 1,
    };
    PlacedTile {
        percent: tile.percent_box(BoxSize::new(1000.0, 100.0)),
        tile,
        background: Background::fallback(n),
        node,
    }
}

/// Three tiles of areas 20000, 50000 and 50000 side by side.
fn layout() -> (Document, Layout) {
    let mut doc = Document::new();
    let root = doc.root();
    let container = doc.append_element(root, "section", &[]).unwrap();
    let tiles = vec![
        tile(&mut doc, container, 0, 0.0, 200.0, 100.0),
        tile(&mut doc, container, 1, 200.0, 500.0, 100.0),
        tile(&mut doc, container, 2, 700.0, 500.0, 100.0),
    ];
    let layout = Layout {
        container,
        initial_width: 1000.0,
        initial_height: 100.0,
        tiles,
    };
    (doc, layout)
}

fn full_hero() -> HeroContent {
    HeroContent {
        title: Some("RDXENV".into()),
        subtitle: Some("Film & Motion".into()),
        tagline: Some("Stories in frames".into()),
        cta_text: Some("See work".into()),
        cta_link: Some("/filmography".into()),
        animation: Some(Animation {
            enabled: true,
            kind: AnimationKind::FadeIn,
        }),
    }
}

fn config() -> LayoutConfig {
    LayoutConfig::new(50.0, 2, vec![Ratio::new(1.0, 1.0)])
}

fn tags(doc: &Document, parent: NodeId) -> Vec<String> {
    doc.children(parent)
        .iter()
        .filter_map(|id| doc.element(*id).map(|el| el.tag.to_string()))
        .collect()
}

#[test]
fn test_largest_tile_ties_go_to_first_generated() {
    let (_, layout) = layout();
    let chosen = largest_tile(&layout.tiles).unwrap();
    assert_eq!(chosen.tile.id, "hero-tile-1");
    assert!(largest_tile(&[]).is_none());
}

#[test]
fn test_overlay_structure_and_order() {
    let (mut doc, layout) = layout();
    let injection = inject_hero_content(&mut doc, &layout, &full_hero(), &config()).unwrap();

    assert_eq!(injection.tile_id, "hero-tile-1");
    let tile = doc.element(injection.tile_node).unwrap();
    assert!(tile.has_class("hero-block-content-container"));
    assert_eq!(doc.children(injection.tile_node), &[injection.overlay]);

    let overlay = doc.element(injection.overlay).unwrap();
    assert!(overlay.has_class("hero-block-content"));
    assert!(overlay.has_class("fade-in"));
    assert_eq!(overlay.style_value("color"), Some("#ebefdf"));
    assert_eq!(
        overlay.style_value("background-color"),
        Some("rgba(34, 95, 110, 0.7)")
    );
    assert_eq!(tags(&doc, injection.overlay), ["h1", "h2", "p", "a"]);

    let cta = doc.query_selector("a.hero-cta").unwrap().unwrap();
    assert_eq!(doc.element(cta).unwrap().attribute("href"), Some("/filmography"));
    assert_eq!(doc.text_content(cta), "See work");
}

#[test]
fn test_missing_fields_are_omitted() {
    let (mut doc, layout) = layout();
    let hero = HeroContent {
        title: Some("Only a title".into()),
        tagline: Some("   ".into()),
        cta_text: Some("Dangling".into()),
        ..HeroContent::default()
    };
    let injection = inject_hero_content(&mut doc, &layout, &hero, &config()).unwrap();

    assert_eq!(tags(&doc, injection.overlay), ["h1"]);
    assert!(!doc.element(injection.overlay).unwrap().has_class("fade-in"));
}

#[test]
fn test_configured_colours_override_defaults() {
    let (mut doc, layout) = layout();
    let mut config = config();
    config.content_text_color = Some("#000000".into());
    config.content_background_color = Some("white".into());

    let injection = inject_hero_content(&mut doc, &layout, &full_hero(), &config).unwrap();
    let overlay = doc.element(injection.overlay).unwrap();
    assert_eq!(overlay.style_value("color"), Some("#000000"));
    assert_eq!(overlay.style_value("background-color"), Some("white"));
}

#[test]
fn test_injection_is_idempotent() {
    let (mut doc, layout) = layout();
    let hero = full_hero();
    let first = inject_hero_content(&mut doc, &layout, &hero, &config()).unwrap();
    let text = doc.text_content(first.tile_node);

    let second = inject_hero_content(&mut doc, &layout, &hero, &config()).unwrap();

    assert_eq!(first.tile_node, second.tile_node);
    assert_eq!(doc.children(second.tile_node).len(), 1);
    assert_eq!(doc.text_content(second.tile_node), text);
    assert_eq!(doc.query_selector_all(".hero-block-content").unwrap().len(), 1);
    let classes = &doc.element(second.tile_node).unwrap().classes;
    assert_eq!(
        classes
            .iter()
            .filter(|c| *c == "hero-block-content-container")
            .count(),
        1
    );
}

#[test]
fn test_empty_layout_is_rejected() {
    let (mut doc, mut layout) = layout();
    layout.tiles.clear();
    let err = inject_hero_content(&mut doc, &layout, &full_hero(), &config()).unwrap_err();
    assert!(matches!(err, HeroError::EmptyLayout));
}

#[test]
fn test_init_hero_renders_into_target_section() {
    let mut doc = Document::new();
    let root = doc.root();
    let section = doc.append_element(root, "section", &[]).unwrap();
    doc.set_attribute(section, "id", "hero-section").unwrap();
    doc.set_box_size(section, BoxSize::new(1280.0, 720.0)).unwrap();

    let render = init_hero(
        &mut doc,
        &full_hero(),
        &config(),
        &mut XorShiftRng::seeded(9),
    )
    .unwrap();

    assert_eq!(render.layout.container, section);
    assert_eq!(render.layout.initial_size(), BoxSize::new(1280.0, 720.0));
    assert_eq!(
        doc.query_selector_all("#hero-section .hero-block")
            .unwrap()
            .len(),
        render.layout.len()
    );
    assert_eq!(
        largest_tile(&render.layout.tiles).unwrap().node,
        render.injection.tile_node
    );
    assert_eq!(doc.query_selector_all("h1.hero-title").unwrap().len(), 1);
}

#[test]
fn test_init_hero_without_container() {
    let mut doc = Document::new();
    let err = init_hero(
        &mut doc,
        &full_hero(),
        &config(),
        &mut XorShiftRng::seeded(9),
    )
    .unwrap_err();
    assert!(matches!(&err, HeroError::MissingContainer(sel) if sel == "#hero-section"));
    assert!(err.is_fatal());
}

#[test]
fn test_config_from_json() {
    let config = LayoutConfig::from_json(serde_json::json!({
        "minSize": 80,
        "maxDepth": 3,
        "ratios": [{"x": 1, "y": 2}],
        "blockBackgrounds": ["/img/one.jpg"],
    }))
    .unwrap();
    assert_eq!(config.target_selector, "#hero-section");
    assert_eq!(config.min_size, 80.0);
    assert_eq!(config.ratios, vec![Ratio::new(1.0, 2.0)]);

    let missing = LayoutConfig::from_json(serde_json::json!({"maxDepth": 3}));
    assert!(matches!(missing, Err(HeroError::InvalidConfig(_))));

    let bad_ratio = LayoutConfig::from_json(serde_json::json!({
        "minSize": 10,
        "maxDepth": 1,
        "ratios": [{"x": 0, "y": 0}],
    }));
    assert!(matches!(bad_ratio, Err(HeroError::InvalidConfig(_))));
}

#[test]
fn test_unknown_animation_type_is_not_a_fade() {
    let hero: HeroContent = serde_json::from_value(serde_json::json!({
        "title": "x",
        "animation": {"enabled": true, "type": "slide"},
    }))
    .unwrap();
    assert!(!hero.fades_in());
}
