use crate::config::ScrapeConfig;
use crate::scraper::ListingScraper;
use crate::spreadsheets::ExportFormat;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

mod config;
mod domain;
mod errors;
mod logging;
mod scraper;
mod spreadsheets;


/// Scrapes rental listings from a classifieds site into a spreadsheet.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// TOML file overriding the built-in site settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Site origin, e.g. https://www.olx.pl
    #[arg(long)]
    base_url: Option<String>,

    /// Category path of the first results page
    #[arg(long)]
    start_path: Option<String>,

    /// Export destination
    #[arg(short, long)]
    output: Option<String>,

    /// Pause between results pages in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Export format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Csv)]
    format: ExportFormat,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Merged file and command-line settings for one run.
struct RunSettings {
    config: ScrapeConfig,
    format: ExportFormat,
    output_path: String,
}

impl Args {
    /// Command-line flags win over the config file.
    fn into_settings(self) -> anyhow::Result<RunSettings> {
        let mut config = ScrapeConfig::load(self.config.as_deref())?;

        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
        if let Some(start_path) = self.start_path {
            config.start_path = start_path;
        }
        if let Some(output) = self.output {
            config.output_path = Some(output);
        }
        if let Some(delay_ms) = self.delay_ms {
            config.page_delay_ms = delay_ms;
        }

        let output_path = config.output_path_or_default(self.format.extension());

        Ok(RunSettings {
            config,
            format: self.format,
            output_path,
        })
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init_logging(args.verbose);

    let RunSettings {
        config,
        format,
        output_path,
    } = args.into_settings()?;
    let start_url = config.start_url()?;

    info!(%start_url, "🏠 Starting listings scrape");

    let scraper = ListingScraper::new(config).context("Scraper init failed")?;
    let listings = scraper.scrape_all(start_url.as_str());

    println!("Listings Data: {}", serde_json::to_string_pretty(&listings)?);

    spreadsheets::export(&listings, &output_path, format)
        .with_context(|| format!("Failed to write {output_path}"))?;

    println!("Data has been saved to {output_path}");
    Ok(())
}
