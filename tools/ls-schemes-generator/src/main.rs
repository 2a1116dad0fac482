use anyhow::{Context, Result};
use clap::Parser;
use srg_schemes::{collect_schemes, fetch_records, write_schemes, Configuration, OutputFormat};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Fetch the SRG SSR application list and write the URL schemes an app must
/// declare under `LSApplicationQueriesSchemes` for installed-app tracking.
#[derive(Parser)]
#[command(name = "LSApplicationQueriesSchemesGenerator")]
struct Cli {
    /// Application list to fetch (http, https or file URL).
    #[arg(long)]
    url: Option<String>,

    /// Plist file to write.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format: xml1, binary1 or json.
    #[arg(long)]
    format: Option<String>,

    /// Log debug details to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn resolve_config(cli: &Cli) -> Result<Configuration> {
    let mut config = Configuration::load(&Configuration::default_paths())
        .context("unable to load configuration")?;

    if let Some(url) = &cli.url {
        config.source_url = url.clone();
    }
    if let Some(output) = &cli.output {
        config.output_file = output.clone();
    }
    if let Some(format) = &cli.format {
        config.output_format = format.parse::<OutputFormat>()?;
    }
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = resolve_config(&cli)?;
    let url = config
        .source_url()
        .with_context(|| format!("invalid source url {}", config.source_url))?;

    println!("Fetching configuration from {url}...");
    let records = fetch_records(&url)
        .with_context(|| format!("fetching configuration from {url} failed"))?;
    println!(
        "Configuration download successful ({} applications).",
        records.len()
    );

    let schemes = collect_schemes(&records);
    let output = &config.output_file;
    println!(
        "Saving {} schemes to file {}",
        schemes.len(),
        output.display()
    );

    if let Err(e) = write_schemes(output, &schemes, config.output_format) {
        tracing::error!(path = %output.display(), error = %e, "write failed");
        println!("plist failed to write! ({e})");
        std::process::exit(1);
    }

    println!("You have it in the {} file", output.display());
    Ok(())
}
