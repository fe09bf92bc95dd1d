//! schema-audit binary
//!
//! Prints a console summary to stdout and writes the JSON report. Logs go to
//! stderr; set `RUST_LOG=debug` for per-page detail.

use anyhow::Context;
use clap::Parser;
use schema_audit::{run, AuditConfig, ConsoleReporter};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "schema-audit")]
#[command(version, about = "Audit pages for missing structured data")]
struct Args {
    /// App directory to scan
    #[arg(long)]
    root: Option<PathBuf>,

    /// Output path for the JSON report
    #[arg(long)]
    output: Option<PathBuf>,

    /// TOML config file (defaults to ./schema-audit.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = match &args.config {
        Some(path) => AuditConfig::from_file(path)?,
        None => AuditConfig::load_default()?,
    };
    if let Some(root) = args.root {
        config.root_dir = root;
    }
    if let Some(output) = args.output {
        config.report_path = output;
    }

    tracing::info!(root = %config.root_dir.display(), "starting schema audit");
    let report = run(&config)
        .with_context(|| format!("Schema audit of {} failed", config.root_dir.display()))?;

    let summary = ConsoleReporter::format(&report, config.listing_limit)?;
    print!("{}", summary);
    println!("Report written to {}", config.report_path.display());
    Ok(())
}
