//! Binary bootstrap: resolve the dataset path, load it, hand off to the UI.
//!
//! Usage: `statscatter [path/to/data.csv]`. Without an argument the bundled
//! sample dataset is used; if that is missing too, a file picker is shown.

use std::path::PathBuf;

use anyhow::Context;

use statscatter::{run_scatter, Dataset, ScatterApp, ScatterConfig};

const BUNDLED_DATASET: &str = "assets/data/data.csv";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let mut csv_path: Option<PathBuf> = None;
    for arg in std::env::args().skip(1) {
        if csv_path.is_none() {
            csv_path = Some(PathBuf::from(arg));
        }
    }
    let csv_path = match csv_path {
        Some(path) => path,
        None => {
            let bundled = PathBuf::from(BUNDLED_DATASET);
            if bundled.exists() {
                bundled
            } else {
                rfd::FileDialog::new()
                    .add_filter("CSV", &["csv"])
                    .pick_file()
                    .context("no dataset given and no file chosen")?
            }
        }
    };

    let dataset = Dataset::load(&csv_path)
        .with_context(|| format!("failed to load dataset from {}", csv_path.display()))?;
    tracing::info!("loaded {} records from {}", dataset.len(), csv_path.display());

    let app = ScatterApp::new(dataset, ScatterConfig::default())?;
    run_scatter(app).map_err(|e| anyhow::anyhow!("failed to run UI: {e}"))
}
