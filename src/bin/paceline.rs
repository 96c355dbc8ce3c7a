//! Command-line extraction: one season of the archive to CSV on stdout.
//!
//! Diagnostics go to stderr through `tracing`, so piping stdout captures
//! clean CSV even when some weeks are skipped.

use anyhow::{Context, bail};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use paceline::{DirArchive, extract_year, write_csv};

#[derive(Parser, Debug)]
#[command(name = "paceline", version, about = "Extract Low-Key Hillclimbs results to CSV")]
struct Args {
    /// Year to extract results for
    #[arg(long, default_value_t = 2016)]
    year: u16,

    /// Root directory of the archived site mirror
    #[arg(long, default_value = "lowkeyhillclimbs.com")]
    archive: PathBuf,
}

/// Years with an archived season: the series ran 1995-1998 and resumed 2006.
fn validate_year(year: u16) -> anyhow::Result<()> {
    if (1995..=1998).contains(&year) || (2006..=2016).contains(&year) {
        Ok(())
    } else {
        bail!("year must be in the range [1995, 1998] or [2006, 2016] but was {year}");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    validate_year(args.year)?;

    let archive = DirArchive::new(&args.archive);
    let season = extract_year(&archive, args.year)
        .await
        .with_context(|| format!("no results extracted for {}", args.year))?;

    let stdout = std::io::stdout();
    write_csv(stdout.lock(), args.year, &season).context("writing CSV")?;

    Ok(())
}
