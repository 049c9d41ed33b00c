use rdxenv_core::BoxSize;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{ServerError, ServerResult};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const PORT_ENV: &str = "PORT";

/// Size assumed for the hero container when a page is rendered on the server.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

impl From<Viewport> for BoxSize {
    fn from(viewport: Viewport) -> Self {
        BoxSize::new(viewport.width, viewport.height)
    }
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,

    /// Directory holding the JSON content documents
    pub data_dir: PathBuf,

    /// Directory served for every path the router does not know
    pub public_dir: PathBuf,

    pub viewport: Viewport,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            data_dir: PathBuf::from("data"),
            public_dir: PathBuf::from("public"),
            viewport: Viewport::default(),
        }
    }
}

impl ServerConfig {
    /// Load config from a JSON file; absent keys keep their defaults.
    pub fn from_file(path: &Path) -> ServerResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ServerError::Config(format!("{}: {e}", path.display())))?;
        let config: ServerConfig = serde_json::from_str(&content)
            .map_err(|e| ServerError::Config(format!("{}: {e}", path.display())))?;
        Ok(config)
    }

    /// Applies the `PORT` environment variable, if set.
    pub fn with_env(mut self) -> Self {
        let port = std::env::var(PORT_ENV).ok();
        self.apply_port_override(port.as_deref());
        self
    }

    /// Replaces the port with `value` when it parses; otherwise the
    /// current port stays.
    pub fn apply_port_override(&mut self, value: Option<&str>) {
        let Some(value) = value else {
            return;
        };
        match value.trim().parse::<u16>() {
            Ok(port) => self.port = port,
            Err(e) => tracing::warn!(value, error = %e, "ignoring invalid port override"),
        }
    }

    /// Get the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
