//! orcid-readme - Entry Point
//!
//! Writes a markdown table of the publications in a public ORCID record.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use orcid_readme::config::{Config, RowOrder, api};
use orcid_readme::models::OrcidId;
use orcid_readme::{OrcidClient, report};

#[derive(Parser, Debug)]
#[command(name = "orcid-readme")]
#[command(about = "Generate a markdown publication table from a public ORCID record")]
#[command(version)]
struct Cli {
    /// ORCID iD (e.g. 0000-0001-9812-1078)
    #[arg(long)]
    orcid: OrcidId,

    /// Output markdown file
    #[arg(long, default_value = api::OUTPUT_PATH)]
    out: PathBuf,

    /// Seconds to sleep between per-work requests
    #[arg(long, default_value = "0.2", value_parser = parse_delay)]
    sleep: Duration,

    /// List newest publications first instead of record order
    #[arg(long)]
    sort_by_year: bool,

    /// ORCID API base URL
    #[arg(long, default_value = api::BASE_URL)]
    api_url: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn parse_delay(value: &str) -> Result<Duration, String> {
    let seconds: f64 = value.trim().parse().map_err(|e| format!("{e}"))?;
    Duration::try_from_secs_f64(seconds)
        .map_err(|_| format!("expected a non-negative number of seconds, got {value}"))
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        orcid = %cli.orcid,
        "Starting orcid-readme"
    );

    let row_order = if cli.sort_by_year { RowOrder::YearDescending } else { RowOrder::Record };
    let config = Config::new(cli.out)
        .with_api_url(cli.api_url)
        .with_request_delay(cli.sleep)
        .with_row_order(row_order);

    let client = OrcidClient::new(&config)?;
    let report = report::generate(&client, &cli.orcid, &config).await.inspect_err(|e| {
        tracing::error!(error = %e, "Report generation failed");
    })?;

    if !report.skipped.is_empty() {
        tracing::warn!(
            skipped = report.skipped.len(),
            "Some works could not be fetched and were left out"
        );
    }

    Ok(())
}
