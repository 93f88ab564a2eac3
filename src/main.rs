use anyhow::Result;
use clap::Parser;
use part_file_merger::{run, LocalFileSystem, MergeConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// YAML file holding the merge configuration
    #[arg(long)]
    config: Option<String>,

    /// Directory to merge, with a filename regex as its final path segment
    #[arg(long)]
    source_path: Option<String>,

    /// Full path of the merged output file
    #[arg(long)]
    dest_path: Option<String>,

    /// Skip files that fail to read instead of aborting the merge
    #[arg(long)]
    continue_on_error: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => MergeConfig::read_from_file(path)?,
        None => MergeConfig {
            source_path: String::new(),
            dest_path: String::new(),
            continue_on_error: false,
        },
    };
    if let Some(source_path) = args.source_path {
        config.source_path = source_path;
    }
    if let Some(dest_path) = args.dest_path {
        config.dest_path = dest_path;
    }
    if args.continue_on_error {
        config.continue_on_error = true;
    }

    run(&config, &LocalFileSystem)?;

    Ok(())
}
