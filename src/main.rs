use clap::{Parser, ValueEnum};
use netmerge::config::Config;
use netmerge::input::{read_stdin_tokens, read_tokens};
use netmerge::logging::init_logging;
use netmerge::output::{render_json, render_summary, render_text};
use netmerge::{merge_cidrs_detailed, DistanceMetric};
use std::error::Error;
use std::io::IsTerminal;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Merge the two closest IPv4 prefixes of an allow-list into one supernet.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// CIDR prefixes and literal tokens. Read from stdin when no tokens or files are given.
    tokens: Vec<String>,

    /// Read tokens from a file (repeatable).
    #[arg(short, long = "file")]
    files: Vec<PathBuf>,

    /// Distance metric used to pick the pair [env: NETMERGE_DISTANCE]
    #[arg(short, long, value_enum)]
    distance: Option<DistanceMetric>,

    /// Target prefix count, reserved [env: NETMERGE_MAX_COUNT]
    #[arg(short, long)]
    max_count: Option<u8>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Disable colored output.
    #[arg(long)]
    no_color: bool,

    /// Print a one-line summary of the merge to stderr.
    #[arg(short, long)]
    summary: bool,

    /// log4rs YAML config [env: NETMERGE_LOG_CONFIG]
    #[arg(long)]
    log_config: Option<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(path) = cli.log_config {
        config.log_config = path;
    }
    init_logging(&config.log_config)?;
    log::info!("#Start main()");

    if let Some(metric) = cli.distance {
        config.metric = metric;
    }
    if let Some(max_count) = cli.max_count {
        config.max_count = max_count;
    }

    let mut tokens = cli.tokens;
    tokens.extend(read_tokens(&cli.files)?);
    if tokens.is_empty() {
        tokens = read_stdin_tokens()?;
    }

    let outcome = merge_cidrs_detailed(&tokens, &config.merge_options())?;
    if cli.summary {
        eprintln!("{}", render_summary(&outcome));
    }

    match cli.format {
        Format::Text => {
            let color = !cli.no_color && std::io::stdout().is_terminal();
            print!("{}", render_text(&outcome, color));
        }
        Format::Json => println!("{}", render_json(&outcome)?),
    }

    Ok(())
}
