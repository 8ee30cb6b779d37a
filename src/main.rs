use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use dwt_filter_rs::dwt_filter::{DwtFilter, FramePipeline, TiffFrameReader, TiffFrameWriter};
use dwt_filter_rs::logger;
use dwt_filter_rs::tool_config::load_config;

use tracing::info;

fn main() -> Result<()> {
    logger::init();

    let config_path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .ok_or_else(|| anyhow!("usage: dwt_filter_rs <config.json>"))?;
    let config = load_config(&config_path).map_err(|e| anyhow!(e))?;

    info!("Starting dwt_filter_rs...");

    let wavelet = config
        .filter
        .wavelet()
        .context("Invalid wavelet in config")?;
    let filter_config = config
        .filter
        .to_filter_config()
        .context("Invalid filter section in config")?;

    let mut filter = DwtFilter::with_kernel(wavelet).context("Failed to resolve wavelet kernel")?;
    filter
        .set_filter_config(filter_config)
        .context("Failed to apply filter config")?;

    info!("Wavelet: {}", wavelet);
    info!("Band: {} (cutoff {})", filter.config().band, filter.config().cutoff);
    info!(
        "Inverse transform: {}",
        if filter.config().inverse {
            "enabled"
        } else {
            "disabled"
        }
    );
    if let Some(window) = filter.config().detail_window {
        info!("Detail window: {}", window);
    }

    let mut pipeline = FramePipeline::with_custom(
        TiffFrameReader,
        TiffFrameWriter::new(config.compression.into()),
        filter,
    );

    let timings = pipeline
        .convert_file(&config.input, &config.output)
        .with_context(|| format!("Failed to filter {}", config.input.display()))?;

    info!("Filtering successful!");
    timings.log_summary();

    Ok(())
}
