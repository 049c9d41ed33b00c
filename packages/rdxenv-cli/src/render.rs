use anyhow::Result;
use rdxenv_content::ContentStore;
use rdxenv_core::{BoxSize, lock};
use rdxenv_hero::XorShiftRng;
use rdxenv_site::{PageKind, SiteApp};
use std::path::PathBuf;
use tokio::io::AsyncWriteExt;

pub struct RenderOptions {
    pub data_dir: PathBuf,
    pub seed: Option<u64>,
    pub width: f64,
    pub height: f64,
    pub output: Option<PathBuf>,
}

pub async fn render(page: PageKind, options: RenderOptions) -> Result<()> {
    let store = ContentStore::new(options.data_dir);
    let viewport = BoxSize::new(options.width, options.height);
    let mut app = SiteApp::new(store, page, viewport)?;

    let mut rng = match options.seed {
        Some(seed) => XorShiftRng::seeded(seed),
        None => XorShiftRng::from_entropy(),
    };
    let report = app.init(&mut rng).await;
    app.shutdown();
    if !report.is_complete() {
        tracing::warn!(%page, skipped = report.skipped.len(), "page rendered partially");
    }

    let document = lock(&app.document()).clone();
    let written = match &options.output {
        Some(path) => {
            let mut file = tokio::fs::File::create(path).await?;
            let written = rdxenv_ssr::write_document(&document, &mut file).await?;
            file.flush().await?;
            tracing::info!(%page, path = %path.display(), bytes = written, "page written");
            written
        }
        None => {
            let mut stdout = tokio::io::stdout();
            let written = rdxenv_ssr::write_document(&document, &mut stdout).await?;
            stdout.write_all(b"\n").await?;
            stdout.flush().await?;
            written
        }
    };
    tracing::debug!(bytes = written, "render finished");
    Ok(())
}
