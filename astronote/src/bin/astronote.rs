//! Command-line frontend: compute a digest and print it as JSON.
//!
//! ```bash
//! astronote --date 2016-06-20 --lat 51.48 --lon 0.0 --pretty
//! ```
//!
//! With no `--date` the digest is computed for the current UT day.
//! `RUST_LOG` controls log verbosity.

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Daily digest of astronomical events.
#[derive(Parser)]
#[command(name = "astronote", version, about)]
struct Cli {
    /// Date to compute the digest for (YYYY-MM-DD, defaults to today, UT)
    #[arg(long)]
    date: Option<String>,

    /// Observer latitude in decimal degrees (north positive)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    lat: f64,

    /// Observer longitude in decimal degrees (east positive)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    lon: f64,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let date = cli
        .date
        .unwrap_or_else(|| chrono::Utc::now().date_naive().to_string());

    let digest = astronote::get_events(&date, cli.lat, cli.lon)?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&digest)?
    } else {
        serde_json::to_string(&digest)?
    };
    println!("{json}");

    Ok(())
}
