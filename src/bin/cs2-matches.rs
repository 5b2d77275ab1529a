use anyhow::{Context, Result};
use clap::Parser;
use matchfeed::logging::init_logging;
use matchfeed::matches::render;
use matchfeed::{upcoming_matches, Config, FeedQuery};
use std::io;
use std::process;

/// Fetch upcoming CS2 matches
#[derive(Parser, Debug)]
#[command(name = "cs2-matches", version)]
struct Cli {
    /// Number of days to look ahead
    #[arg(default_value_t = 1)]
    days: u64,

    /// Filter by team name (regex)
    #[arg(short, long)]
    team: Option<String>,

    /// Filter by competition (regex)
    #[arg(short, long)]
    competition: Option<String>,

    /// Hide matches with TBD/unannounced teams
    #[arg(long)]
    no_tbd: bool,

    /// Logging verbosity level (valid values: off, error, warn, info, debug, trace)
    #[arg(short, long, value_name = "LEVEL", default_value = "warn")]
    verbosity: log::LevelFilter,
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::from_env().context("Could not read configuration")?;
    let query = FeedQuery {
        team: cli.team,
        competition: cli.competition,
        no_tbd: cli.no_tbd,
    };

    let matches = upcoming_matches(&config, &query, cli.days)
        .context("Could not fetch the match calendar")?;

    let stdout = io::stdout();
    render(&mut stdout.lock(), &matches, cli.days).context("Could not write output")?;
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
