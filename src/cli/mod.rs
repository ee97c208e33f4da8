use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

pub mod merge;
pub mod normalize;
pub mod oov;

pub use merge::handle_merge_command;
pub use normalize::handle_normalize_command;
pub use oov::handle_oov_command;

#[derive(Parser, Debug)]
#[command(name = "alignprep")]
#[command(about = "Prepare transcripts and dictionaries for forced alignment", long_about = None)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Normalize transcript text files into canonical aligner tokens
    Normalize(NormalizeCliArgs),
    /// Detect out-of-vocabulary words, optionally generating pronunciations
    Oov(OovCliArgs),
    /// Merge the custom dictionary over the base dictionary
    Merge(MergeCliArgs),
    /// Print version information
    Version,
}

#[derive(ClapArgs, Debug)]
pub struct NormalizeCliArgs {
    /// Directory containing raw transcript .txt files
    pub input_dir: PathBuf,
    /// Directory to write normalized transcripts to (default from config)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct OovCliArgs {
    /// Directory of normalized transcripts to scan
    pub transcripts_dir: PathBuf,
    /// Attempt automatic pronunciation generation for OOV words
    #[arg(long)]
    pub g2p: bool,
    /// Timeout in seconds for the g2p call (default from config)
    #[arg(long)]
    pub timeout: Option<u64>,
    /// Emit a machine-readable JSON report on stdout
    #[arg(long)]
    pub json: bool,
}

#[derive(ClapArgs, Debug)]
pub struct MergeCliArgs {
    /// Custom dictionary of curated word/pronunciation pairs (tab-delimited)
    pub custom_dict: PathBuf,
    /// Output path for the merged dictionary
    #[arg(short, long, default_value = "merged_dictionary.dict")]
    pub output: PathBuf,
    /// Base dictionary path (default: first existing configured search path)
    #[arg(long)]
    pub base: Option<PathBuf>,
}
