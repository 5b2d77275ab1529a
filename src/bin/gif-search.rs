use anyhow::{Context, Result};
use clap::Parser;
use matchfeed::giphy::{render, DEFAULT_LIMIT};
use matchfeed::logging::init_logging;
use matchfeed::{Config, GiphyClient};
use std::io;
use std::process;

/// Search Giphy for GIFs and print their GIF and MP4 URLs as JSON
#[derive(Parser, Debug)]
#[command(name = "gif-search", version)]
struct Cli {
    /// Search terms, joined with spaces
    #[arg(required = true)]
    query: Vec<String>,

    /// Maximum number of results to request
    #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
    limit: u32,

    /// Logging verbosity level (valid values: off, error, warn, info, debug, trace)
    #[arg(short, long, value_name = "LEVEL", default_value = "warn")]
    verbosity: log::LevelFilter,
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::from_env().context("Could not read configuration")?;
    let client = GiphyClient::from_config(&config)?;

    let query = cli.query.join(" ");
    let results = client
        .search(&query, cli.limit)
        .with_context(|| format!("Giphy search for {:?} failed", query))?;

    let stdout = io::stdout();
    render(&mut stdout.lock(), &results)?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    if let Err(error) = run(cli) {
        log::debug!("{:?}", error);
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}
