//! Periodic background colour changes on one element.

use crate::error::{HeroError, HeroResult};
use crate::rng::RandomSource;
use rdxenv_core::{NodeId, SharedDocument, lock};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at};

pub const DEFAULT_TRANSITION_INTERVAL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorEntry {
    #[serde(default)]
    pub name: String,
    pub hex: String,
}

/// Envelope returned by `/api/background-colours`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundColours {
    pub colors: Vec<ColorEntry>,
}

/// `#RRGGBB`, nothing else.
pub fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Validated colours to pick from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorPool {
    colors: Vec<String>,
}

impl ColorPool {
    /// Keeps the valid entries; invalid ones are logged and skipped.
    pub fn from_entries(entries: &[ColorEntry]) -> Self {
        let colors = entries
            .iter()
            .filter_map(|entry| {
                if is_hex_color(&entry.hex) {
                    Some(entry.hex.clone())
                } else {
                    tracing::warn!(name = %entry.name, hex = %entry.hex, "skipping invalid colour");
                    None
                }
            })
            .collect();
        Self { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.colors
    }

    pub fn pick(&self, rng: &mut dyn RandomSource) -> Option<&str> {
        self.colors
            .get(rng.next_index(self.colors.len()))
            .map(String::as_str)
    }
}

fn apply_color(document: &SharedDocument, target: NodeId, color: &str) -> HeroResult<()> {
    lock(document).set_style(target, "background-color", color)?;
    Ok(())
}

/// Running transitions, at most one per target element.
///
/// Dropping the registry cancels every timer it owns.
#[derive(Debug, Default)]
pub struct Transitions {
    tasks: FxHashMap<NodeId, JoinHandle<()>>,
}

impl Transitions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one colour right away, then a new random one every
    /// `interval`. Any transition already running on `target` is cancelled
    /// first. Must be called from within a tokio runtime.
    pub fn start(
        &mut self,
        document: SharedDocument,
        target: NodeId,
        pool: ColorPool,
        interval: Duration,
        mut rng: Box<dyn RandomSource + Send>,
    ) -> HeroResult<()> {
        self.cancel(target);

        if interval.is_zero() {
            return Err(HeroError::invalid_config("transition interval must be positive"));
        }
        let Some(first) = pool.pick(rng.as_mut()).map(str::to_string) else {
            return Err(HeroError::EmptyColorPool);
        };
        apply_color(&document, target, &first)?;

        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + interval, interval);
            loop {
                ticker.tick().await;
                let Some(color) = pool.pick(rng.as_mut()).map(str::to_string) else {
                    break;
                };
                if let Err(err) = apply_color(&document, target, &color) {
                    tracing::warn!(error = %err, "stopping background transition");
                    break;
                }
            }
        });
        self.tasks.insert(target, handle);
        tracing::debug!(color = %first, "background transition started");
        Ok(())
    }

    /// Stops the transition on `target`. Returns whether one was running.
    pub fn cancel(&mut self, target: NodeId) -> bool {
        match self.tasks.remove(&target) {
            Some(handle) => {
                let was_running = !handle.is_finished();
                handle.abort();
                was_running
            }
            None => false,
        }
    }

    pub fn cancel_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }

    pub fn is_running(&self, target: NodeId) -> bool {
        self.tasks
            .get(&target)
            .is_some_and(|handle| !handle.is_finished())
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl Drop for Transitions {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
