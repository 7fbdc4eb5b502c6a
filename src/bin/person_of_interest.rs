//! CLI that fetches a birthdays page and prints one person-of-interest
//! entry per line.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use onthisday_poi::fetch::{birthdays_url, Fetcher};
use onthisday_poi::{encoding, extract_bytes, output};

#[derive(Parser)]
#[command(
    name = "person_of_interest",
    about = "Print the persons of interest born on a given calendar date"
)]
struct Cli {
    /// Month path segment of the birthdays page, e.g. "10" or "october"
    month: String,

    /// Day path segment of the birthdays page, e.g. "17"
    day: String,

    /// Re-encode output into a legacy charset (a WHATWG label, e.g.
    /// "windows-1252"); default is UTF-8
    #[arg(long)]
    charset: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let charset = match cli.charset.as_deref() {
        Some(label) => Some(
            encoding::resolve_label(label)
                .with_context(|| format!("unknown charset label: {label}"))?,
        ),
        None => None,
    };

    let url = birthdays_url(&cli.month, &cli.day)?;
    info!(url = url.as_str(), "fetching persons of interest");

    let fetcher = Fetcher::new()?;
    let body = fetcher.fetch(&url)?;

    let entries = extract_bytes(&body)?;
    info!(entries = entries.len(), "extraction finished");

    let stdout = io::stdout();
    let mut sink = stdout.lock();
    output::write_entries(&mut sink, &entries, charset)?;

    Ok(())
}
