//! CLI handler for merging the custom dictionary over the base dictionary.

use anyhow::{anyhow, Result};

use crate::cli::MergeCliArgs;
use crate::config::Config;
use crate::lexicon::{merge_dictionaries, resolve_first_existing};

/// Handle the merge CLI command.
pub fn handle_merge_command(args: MergeCliArgs) -> Result<()> {
    let config = Config::load()?;

    let base = match args.base {
        Some(path) => path,
        None => resolve_first_existing(&config.dictionary_search_paths()).ok_or_else(|| {
            anyhow!(
                "No base dictionary found, searched: {}",
                config.dictionary.search_paths.join(", ")
            )
        })?,
    };

    let report = merge_dictionaries(&base, &args.custom_dict, &args.output)?;

    println!(
        "Merged {} custom words over {} base words, {} total",
        report.custom_entries, report.base_entries, report.total_entries
    );
    println!("Saved to {}", args.output.display());

    Ok(())
}
