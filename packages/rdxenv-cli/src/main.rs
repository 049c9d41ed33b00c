use anyhow::Result;
use clap::{Parser, Subcommand};
use rdxenv_site::PageKind;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod layout;
mod render;
mod serve;

#[derive(Parser)]
#[command(name = "rdxenv")]
#[command(about = "RDXENV portfolio site", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the content API, rendered pages and static files
    Serve {
        #[arg(long)]
        host: Option<String>,
        /// Takes precedence over the PORT environment variable
        #[arg(long)]
        port: Option<u16>,
        #[arg(long)]
        data_dir: Option<PathBuf>,
        #[arg(long)]
        public_dir: Option<PathBuf>,
        /// JSON server configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Render a page to HTML
    Render {
        /// Page to render (index or filmography)
        page: String,
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,
        /// Seed for the hero mosaic; random when absent
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 1280.0)]
        width: f64,
        #[arg(long, default_value_t = 720.0)]
        height: f64,
        /// Output file; stdout when absent
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Print the hero tiles generated for a layout configuration as JSON
    Layout {
        #[arg(long)]
        config: PathBuf,
        #[arg(long)]
        width: f64,
        #[arg(long)]
        height: f64,
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            port,
            data_dir,
            public_dir,
            config,
        } => {
            let overrides = serve::Overrides {
                host,
                port,
                data_dir,
                public_dir,
            };
            serve::serve(config.as_deref(), overrides).await?;
        }
        Commands::Render {
            page,
            data_dir,
            seed,
            width,
            height,
            output,
        } => {
            let page: PageKind = page.parse()?;
            let options = render::RenderOptions {
                data_dir,
                seed,
                width,
                height,
                output,
            };
            render::render(page, options).await?;
        }
        Commands::Layout {
            config,
            width,
            height,
            seed,
        } => {
            let json = layout::layout(&config, width, height, seed)?;
            println!("{json}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_render_with_defaults() {
        let cli = Cli::try_parse_from(["rdxenv", "render", "filmography", "--seed", "7"]).unwrap();
        match cli.command {
            Commands::Render {
                page, seed, width, ..
            } => {
                assert_eq!(page, "filmography");
                assert_eq!(seed, Some(7));
                assert_eq!(width, 1280.0);
            }
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn layout_requires_config_and_size() {
        assert!(Cli::try_parse_from(["rdxenv", "layout", "--width", "800"]).is_err());
    }
}
