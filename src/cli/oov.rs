//! CLI handler for OOV detection and best-effort pronunciation generation.

use anyhow::Result;
use serde_json::json;
use std::collections::HashMap;
use std::time::Duration;
use tracing::warn;

use crate::cli::OovCliArgs;
use crate::config::Config;
use crate::g2p::{G2pBackend, MfaG2p};
use crate::lexicon::{scan_transcripts, Lexicon};
use crate::transcripts;

/// Handle the oov CLI command.
pub async fn handle_oov_command(args: OovCliArgs) -> Result<()> {
    let config = Config::load()?;

    let lexicon = Lexicon::find_and_load(&config.dictionary_search_paths())?;
    let transcripts = transcripts::load_dir(&args.transcripts_dir)?;

    let oov_words = scan_transcripts(&transcripts, &lexicon);

    if oov_words.is_empty() {
        if args.json {
            println!("{}", json!({ "oov": [], "pronunciations": {} }));
        } else {
            println!("No OOV words, everything is in the dictionary");
        }
        return Ok(());
    }

    if !args.json {
        println!(
            "Found {} OOV words: {}",
            oov_words.len(),
            oov_words.join(", ")
        );
    }

    let pronunciations = if args.g2p {
        generate_candidates(&config, &oov_words, args.timeout).await
    } else {
        HashMap::new()
    };

    if args.json {
        println!(
            "{}",
            json!({ "oov": oov_words, "pronunciations": pronunciations })
        );
        return Ok(());
    }

    if args.g2p {
        if pronunciations.is_empty() {
            println!("\nNo pronunciations generated");
            print_manual_instructions();
        } else {
            println!("\nGenerated pronunciations:");
            let mut sorted: Vec<_> = pronunciations.iter().collect();
            sorted.sort();
            for (word, pron) in sorted {
                println!("  {}\t{}", word, pron);
            }
        }
    } else {
        print_manual_instructions();
    }

    Ok(())
}

async fn generate_candidates(
    config: &Config,
    words: &[String],
    timeout_override: Option<u64>,
) -> HashMap<String, String> {
    let Some(backend) = MfaG2p::detect(&config.g2p, &config.g2p_model_search_paths()) else {
        warn!("No g2p backend available, falling back to manual curation");
        return HashMap::new();
    };

    let timeout = Duration::from_secs(timeout_override.unwrap_or(config.g2p.timeout_seconds));
    backend.generate(words, timeout).await
}

fn print_manual_instructions() {
    println!("Add pronunciations manually to custom_dictionary.txt");
    println!("Format (tab separated):");
    println!("  DUKAKIS\tD UW0 K AA1 K IH0 S");
    println!("  WBUR\tW AH1 B ER0");
    println!("Then run `alignprep merge custom_dictionary.txt` to merge with the base dictionary");
}
