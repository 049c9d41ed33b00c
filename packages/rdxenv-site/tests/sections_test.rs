use rdxenv_content::{AboutCopy, Client, ClientLink, ContactCopy, Project, ProjectsDocument};
use rdxenv_core::{BoxSize, Document};
use rdxenv_site::{
    SiteError, index_page, init_client_navigation, is_valid_client_id, render_about,
    render_client_projects, render_contact, scroll_target_for_client,
};
use std::collections::BTreeMap;

fn page() -> Document {
    index_page(BoxSize::new(1280.0, 720.0)).unwrap()
}

fn client(id: &str, name: &str, order: Option<f64>) -> Client {
    Client {
        id: id.into(),
        name: name.into(),
        short_name: name.to_ascii_uppercase(),
        logo: format!("/img/{id}-logo.png"),
        tagline: "Campaign".into(),
        period: "2020-2022".into(),
        description: format!("{name} work"),
        order,
        links: vec![
            ClientLink {
                kind: "web".into(),
                text: "Website".into(),
                url: Some(format!("https://{id}.test")),
            },
            ClientLink {
                kind: "note".into(),
                text: "Coming soon".into(),
                url: None,
            },
        ],
    }
}

fn projects_for(ids: &[&str]) -> ProjectsDocument {
    let mut projects = BTreeMap::new();
    for id in ids {
        projects.insert(
            id.to_string(),
            vec![
                Project {
                    description: "One".into(),
                    image_url: "/img/1.jpg".into(),
                    alt_text: "one".into(),
                },
                Project {
                    description: "Two".into(),
                    image_url: "/img/2.jpg".into(),
                    alt_text: "two".into(),
                },
            ],
        );
    }
    ProjectsDocument { projects }
}

fn texts(doc: &Document, selector: &str) -> Vec<String> {
    doc.query_selector_all(selector)
        .unwrap()
        .into_iter()
        .map(|id| doc.text_content(id))
        .collect()
}

#[test]
fn test_about_defaults_title() {
    let mut doc = page();
    render_about(
        &mut doc,
        &AboutCopy {
            title: None,
            paragraphs: vec!["First".into(), "Second".into()],
        },
    )
    .unwrap();

    assert_eq!(texts(&doc, "#about h2"), ["About"]);
    assert_eq!(texts(&doc, "#about p"), ["First", "Second"]);
}

#[test]
fn test_contact_section() {
    let mut doc = page();
    let mut social = BTreeMap::new();
    social.insert("vimeo".to_string(), Some("https://vimeo.test".to_string()));
    social.insert("instagram".to_string(), None);

    render_contact(
        &mut doc,
        &ContactCopy {
            title: Some("Say hi".into()),
            email: Some("hello@rdxenv.test".into()),
            phone: None,
            social,
            message: Some("Always happy to talk.".into()),
        },
    )
    .unwrap();

    assert_eq!(texts(&doc, "#contact h2"), ["Say hi"]);
    let mail = doc.query_selector(".contact-email a").unwrap().unwrap();
    assert_eq!(
        doc.element(mail).unwrap().attribute("href"),
        Some("mailto:hello@rdxenv.test")
    );
    assert!(doc.query_selector(".contact-phone").unwrap().is_none());
    assert_eq!(texts(&doc, ".contact-social a"), ["instagram", "vimeo"]);
    let instagram = doc.query_selector("a.instagram").unwrap().unwrap();
    assert_eq!(doc.element(instagram).unwrap().attribute("href"), Some("#"));
    assert_eq!(texts(&doc, "p.contact-message"), ["Always happy to talk."]);
}

#[test]
fn test_clients_are_sorted_with_dividers_and_carousels() {
    let mut doc = page();
    let clients = vec![
        client("beta", "Beta", Some(2.0)),
        client("alpha", "Alpha", None),
        client("gamma", "Gamma", Some(1.0)),
    ];
    let carousels =
        render_client_projects(&mut doc, &clients, &projects_for(&["alpha", "beta"])).unwrap();

    assert_eq!(texts(&doc, ".client h4.ProjHead"), ["Alpha", "Gamma", "Beta"]);
    assert_eq!(doc.query_selector_all("#client-container span.divider").unwrap().len(), 2);
    assert_eq!(carousels.len(), 2);
    assert_eq!(
        doc.query_selector_all("#client-alpha .project-item")
            .unwrap()
            .len(),
        2
    );
    assert!(doc
        .query_selector_all("#client-gamma .project-item")
        .unwrap()
        .is_empty());

    assert_eq!(texts(&doc, "#client-alpha .projTitle"), ["Campaign | 2020-2022"]);
    let link = doc
        .query_selector("#client-alpha .ProjLinks-link1-web a")
        .unwrap()
        .unwrap();
    assert_eq!(
        doc.element(link).unwrap().attribute("href"),
        Some("https://alpha.test")
    );
    assert_eq!(
        texts(&doc, "#client-alpha .ProjLinks-link2-note"),
        ["Coming soon"]
    );
}

#[test]
fn test_clients_without_id_are_skipped() {
    let mut doc = page();
    let clients = vec![client("", "Ghost", None), client("alpha", "Alpha", None)];
    render_client_projects(&mut doc, &clients, &projects_for(&[])).unwrap();
    assert_eq!(texts(&doc, ".client h4"), ["Alpha"]);
}

#[test]
fn test_client_navigation_buttons() {
    let mut doc = page();
    let clients = vec![
        client("alpha", "Alpha", None),
        client("", "Ghost", None),
        client("gamma", "", None),
    ];
    let buttons = init_client_navigation(&mut doc, &clients).unwrap();
    assert_eq!(buttons.len(), 2);

    let first = doc.element(buttons[0]).unwrap();
    assert!(first.has_class("Client1"));
    assert_eq!(first.attribute("data-client-id"), Some("alpha"));
    assert_eq!(first.attribute("title"), Some("Alpha"));

    let second = doc.element(buttons[1]).unwrap();
    assert!(second.has_class("Client3"));
    assert_eq!(second.attribute("title"), Some("Client 3"));
}

#[test]
fn test_scroll_target_validation() {
    let mut doc = page();
    render_client_projects(&mut doc, &[client("alpha", "Alpha", None)], &projects_for(&[]))
        .unwrap();

    let target = scroll_target_for_client(&doc, "alpha").unwrap();
    assert_eq!(doc.element(target).unwrap().id(), Some("client-alpha"));

    assert!(matches!(
        scroll_target_for_client(&doc, "alpha\"] body"),
        Err(SiteError::InvalidClientId(_))
    ));
    assert!(matches!(
        scroll_target_for_client(&doc, "nobody"),
        Err(SiteError::MissingElement(_))
    ));
    assert!(is_valid_client_id("client_01-b"));
    assert!(!is_valid_client_id(""));
}

#[test]
fn test_missing_section_is_an_error() {
    let mut doc = Document::new();
    let err = render_about(&mut doc, &AboutCopy::default()).unwrap_err();
    assert!(matches!(err, SiteError::MissingElement(sel) if sel == "#about"));
}
