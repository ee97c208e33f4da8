//! CLI handler for normalizing a directory of transcripts.

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::NormalizeCliArgs;
use crate::config::Config;
use crate::normalizer::TranscriptPipeline;
use crate::transcripts;

/// Handle the normalize CLI command.
pub fn handle_normalize_command(args: NormalizeCliArgs) -> Result<()> {
    let config = Config::load()?;
    let output_dir = args
        .output_dir
        .unwrap_or_else(|| config.normalize.output_dir.clone().into());

    let raw = transcripts::load_dir(&args.input_dir)?;
    if raw.is_empty() {
        println!("No transcript files in {}", args.input_dir.display());
        return Ok(());
    }

    // All stage regexes compile here, before the first file is touched.
    let pipeline = TranscriptPipeline::new().context("Failed to build normalization pipeline")?;

    println!("Processing {} files", raw.len());
    for transcript in &raw {
        let normalized = pipeline.normalize(&transcript.text);
        let path = transcripts::write_normalized(&output_dir, &transcript.name, &normalized)?;
        info!("Wrote {}", path.display());
        println!("  done: {}", transcript.name);
    }

    println!("Output in {}", output_dir.display());
    Ok(())
}
