use anyhow::{Context, Result};
use rdxenv_core::Document;
use rdxenv_hero::{LayoutConfig, XorShiftRng, generate_layout};
use std::path::Path;

/// Generates one mosaic for `config` in a detached container of the given
/// size and returns it as pretty JSON.
pub fn layout(config: &Path, width: f64, height: f64, seed: Option<u64>) -> Result<String> {
    let raw = std::fs::read_to_string(config)
        .with_context(|| format!("reading {}", config.display()))?;
    let config = LayoutConfig::from_json(serde_json::from_str(&raw)?)?;

    let mut doc = Document::new();
    let root = doc.root();
    let container = doc.append_element(root, "section", &[])?;
    let mut rng = match seed {
        Some(seed) => XorShiftRng::seeded(seed),
        None => XorShiftRng::from_entropy(),
    };
    let layout = generate_layout(&mut doc, container, width, height, &config, &mut rng)?;
    Ok(serde_json::to_string_pretty(&layout)?)
}
