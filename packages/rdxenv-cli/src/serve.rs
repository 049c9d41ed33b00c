use anyhow::{Context, Result};
use rdxenv_server::ServerConfig;
use std::path::{Path, PathBuf};

/// Command line flags; each one that is set wins over the file and `PORT`.
#[derive(Debug, Default)]
pub struct Overrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub data_dir: Option<PathBuf>,
    pub public_dir: Option<PathBuf>,
}

pub fn resolve_config(file: Option<&Path>, overrides: Overrides) -> Result<ServerConfig> {
    let config = match file {
        Some(path) => ServerConfig::from_file(path)
            .with_context(|| format!("loading server config from {}", path.display()))?,
        None => ServerConfig::default(),
    };
    let mut config = config.with_env();

    if let Some(host) = overrides.host {
        config.host = host;
    }
    if let Some(port) = overrides.port {
        config.port = port;
    }
    if let Some(dir) = overrides.data_dir {
        config.data_dir = dir;
    }
    if let Some(dir) = overrides.public_dir {
        config.public_dir = dir;
    }
    Ok(config)
}

pub async fn serve(file: Option<&Path>, overrides: Overrides) -> Result<()> {
    let config = resolve_config(file, overrides)?;
    rdxenv_server::run(config).await?;
    Ok(())
}
