use rdxenv_core::{Document, NodeId, SharedDocument, lock, share};
use rdxenv_hero::{ColorEntry, ColorPool, HeroError, RandomSource, Transitions, XorShiftRng};
use std::time::Duration;

const INTERVAL: Duration = Duration::from_secs(5);

/// Replays a fixed sequence of raw draws, cycling when exhausted.
struct ScriptedRng {
    draws: Vec<u64>,
    next: usize,
}

impl ScriptedRng {
    fn boxed(draws: Vec<u64>) -> Box<Self> {
        Box::new(Self { draws, next: 0 })
    }
}

impl RandomSource for ScriptedRng {
    fn next_u64(&mut self) -> u64 {
        let value = self.draws[self.next % self.draws.len()];
        self.next += 1;
        value
    }
}

fn entry(hex: &str) -> ColorEntry {
    ColorEntry {
        name: String::new(),
        hex: hex.into(),
    }
}

fn pool(hexes: &[&str]) -> ColorPool {
    let entries: Vec<_> = hexes.iter().map(|h| entry(h)).collect();
    ColorPool::from_entries(&entries)
}

fn section() -> (SharedDocument, NodeId) {
    let mut doc = Document::new();
    let root = doc.root();
    let target = doc.append_element(root, "section", &[]).unwrap();
    (share(doc), target)
}

fn color(doc: &SharedDocument, target: NodeId) -> Option<String> {
    lock(doc)
        .element(target)
        .and_then(|el| el.style_value("background-color").map(str::to_string))
}

#[test]
fn test_invalid_entries_are_skipped() {
    let pool = pool(&["#A1B2C3", "red", "#12345", "#GGGGGG", "#abcdef"]);
    assert_eq!(pool.as_slice(), ["#A1B2C3", "#abcdef"]);
}

#[tokio::test(start_paused = true)]
async fn test_single_colour_is_always_applied() {
    let (doc, target) = section();
    let mut transitions = Transitions::new();
    transitions
        .start(
            doc.clone(),
            target,
            pool(&["#AABBCC"]),
            INTERVAL,
            Box::new(XorShiftRng::seeded(3)),
        )
        .unwrap();

    assert_eq!(color(&doc, target).as_deref(), Some("#AABBCC"));
    for _ in 0..3 {
        tokio::time::sleep(INTERVAL).await;
        assert_eq!(color(&doc, target).as_deref(), Some("#AABBCC"));
    }
    assert!(transitions.is_running(target));
}

#[tokio::test(start_paused = true)]
async fn test_colour_changes_on_each_tick() {
    let (doc, target) = section();
    let mut transitions = Transitions::new();
    transitions
        .start(
            doc.clone(),
            target,
            pool(&["#111111", "#222222"]),
            INTERVAL,
            ScriptedRng::boxed(vec![0, u64::MAX]),
        )
        .unwrap();

    assert_eq!(color(&doc, target).as_deref(), Some("#111111"));
    tokio::time::sleep(INTERVAL + Duration::from_millis(1)).await;
    assert_eq!(color(&doc, target).as_deref(), Some("#222222"));
    tokio::time::sleep(INTERVAL).await;
    assert_eq!(color(&doc, target).as_deref(), Some("#111111"));
}

#[tokio::test(start_paused = true)]
async fn test_restart_replaces_previous_timer() {
    let (doc, target) = section();
    let mut transitions = Transitions::new();
    let start = |transitions: &mut Transitions, hex: &str| {
        transitions
            .start(
                doc.clone(),
                target,
                pool(&[hex]),
                INTERVAL,
                Box::new(XorShiftRng::seeded(1)),
            )
            .unwrap();
    };

    start(&mut transitions, "#111111");
    start(&mut transitions, "#222222");
    assert_eq!(transitions.len(), 1);

    tokio::time::sleep(INTERVAL * 3 + Duration::from_millis(1)).await;
    assert_eq!(color(&doc, target).as_deref(), Some("#222222"));
}

#[tokio::test(start_paused = true)]
async fn test_cancel_stops_updates() {
    let (doc, target) = section();
    let mut transitions = Transitions::new();
    transitions
        .start(
            doc.clone(),
            target,
            pool(&["#AABBCC"]),
            INTERVAL,
            Box::new(XorShiftRng::seeded(1)),
        )
        .unwrap();

    assert!(transitions.cancel(target));
    assert!(!transitions.cancel(target));
    assert!(transitions.is_empty());

    lock(&doc)
        .set_style(target, "background-color", "transparent")
        .unwrap();
    tokio::time::sleep(INTERVAL * 2).await;
    assert_eq!(color(&doc, target).as_deref(), Some("transparent"));
}

#[tokio::test(start_paused = true)]
async fn test_empty_pool_starts_nothing() {
    let (doc, target) = section();
    let mut transitions = Transitions::new();
    let err = transitions
        .start(
            doc.clone(),
            target,
            pool(&["not-a-colour"]),
            INTERVAL,
            Box::new(XorShiftRng::seeded(1)),
        )
        .unwrap_err();

    assert!(matches!(err, HeroError::EmptyColorPool));
    assert!(!err.is_fatal());
    assert!(transitions.is_empty());
    assert_eq!(color(&doc, target), None);
}

#[tokio::test(start_paused = true)]
async fn test_zero_interval_is_rejected() {
    let (doc, target) = section();
    let mut transitions = Transitions::new();
    let err = transitions
        .start(
            doc,
            target,
            pool(&["#AABBCC"]),
            Duration::ZERO,
            Box::new(XorShiftRng::seeded(1)),
        )
        .unwrap_err();
    assert!(matches!(err, HeroError::InvalidConfig(_)));
}
