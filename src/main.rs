use alignprep::cli::{
    handle_merge_command, handle_normalize_command, handle_oov_command, Cli, CliCommand,
};
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_level = if cli.verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match cli.command {
        CliCommand::Normalize(args) => handle_normalize_command(args),
        CliCommand::Oov(args) => handle_oov_command(args).await,
        CliCommand::Merge(args) => handle_merge_command(args),
        CliCommand::Version => {
            println!("alignprep {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
