use crate::error::{HeroError, HeroResult};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TARGET_SELECTOR: &str = "#hero-section";
pub const DEFAULT_CONTENT_TEXT_COLOR: &str = "#ebefdf";
pub const DEFAULT_CONTENT_BACKGROUND_COLOR: &str = "rgba(34, 95, 110, 0.7)";
/// Upper bound on `maxDepth`; one pass emits at most `2^MAX_DEPTH` tiles.
pub const MAX_DEPTH: u32 = 12;

fn default_target_selector() -> String {
    DEFAULT_TARGET_SELECTOR.to_string()
}

/// Relative weights of the two halves produced by one split.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ratio {
    pub x: f64,
    pub y: f64,
}

impl Ratio {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Ruleset for one mosaic generation pass, as served by `/api/hero/config`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    #[serde(default = "default_target_selector")]
    pub target_selector: String,
    pub min_size: f64,
    pub max_depth: u32,
    #[serde(default)]
    pub ratios: Vec<Ratio>,
    #[serde(default)]
    pub block_backgrounds: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_background_color: Option<String>,
}

impl LayoutConfig {
    pub fn new(min_size: f64, max_depth: u32, ratios: Vec<Ratio>) -> Self {
        Self {
            target_selector: default_target_selector(),
            min_size,
            max_depth,
            ratios,
            block_backgrounds: Vec::new(),
            content_text_color: None,
            content_background_color: None,
        }
    }

    pub fn from_json(value: serde_json::Value) -> HeroResult<Self> {
        let config: Self = serde_json::from_value(value)
            .map_err(|e| HeroError::invalid_config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> HeroResult<()> {
        if self.target_selector.trim().is_empty() {
            return Err(HeroError::invalid_config("targetSelector is empty"));
        }
        if !self.min_size.is_finite() || self.min_size < 0.0 {
            return Err(HeroError::invalid_config(format!(
                "minSize must be a non-negative number, got {}",
                self.min_size
            )));
        }
        if self.max_depth > MAX_DEPTH {
            return Err(HeroError::invalid_config(format!(
                "maxDepth must be at most {MAX_DEPTH}, got {}",
                self.max_depth
            )));
        }
        if self.max_depth > 0 && self.ratios.is_empty() {
            return Err(HeroError::invalid_config(
                "ratios must not be empty when maxDepth > 0",
            ));
        }
        for (idx, ratio) in self.ratios.iter().enumerate() {
            let valid = ratio.x.is_finite()
                && ratio.y.is_finite()
                && ratio.x >= 0.0
                && ratio.y >= 0.0
                && ratio.x + ratio.y > 0.0;
            if !valid {
                return Err(HeroError::invalid_config(format!(
                    "ratios[{idx}] = {{x: {}, y: {}}} is not a usable split ratio",
                    ratio.x, ratio.y
                )));
            }
        }
        Ok(())
    }

    pub fn text_color(&self) -> &str {
        non_empty(self.content_text_color.as_deref()).unwrap_or(DEFAULT_CONTENT_TEXT_COLOR)
    }

    pub fn background_color(&self) -> &str {
        non_empty(self.content_background_color.as_deref())
            .unwrap_or(DEFAULT_CONTENT_BACKGROUND_COLOR)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationKind {
    FadeIn,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    #[serde(default)]
    pub enabled: bool,
    #[serde(rename = "type", default)]
    pub kind: AnimationKind,
}

/// Text and call-to-action overlaid on the largest tile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<Animation>,
}

impl HeroContent {
    pub fn fades_in(&self) -> bool {
        self.animation
            .as_ref()
            .is_some_and(|anim| anim.enabled && anim.kind == AnimationKind::FadeIn)
    }
}

/// Envelope returned by `/api/hero`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeroDocument {
    pub hero: HeroContent,
}
