//! clause-scan
//!
//! Reads a contract, lease, terms of service or privacy policy from a file or
//! stdin and prints a risk analysis: section summaries, key points, ranked red
//! flags, a consent checklist and a 1-10 fairness rating.
//!
//! Analysis runs locally unless remote analysis is enabled in the
//! configuration and an API key is available, in which case the remote
//! service is tried first.

use std::io::Read;
use std::path::{Path, PathBuf};

use analysis_core::{Analyzer, AnalyzerConfig};
use anyhow::Context;
use clap::{Parser, ValueEnum};
use shared_types::{DocumentType, SourceRecord};
use tracing::{debug, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod report;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Console,
}

/// Command-line arguments for clause-scan
#[derive(Parser, Debug)]
#[command(name = "clause-scan")]
#[command(about = "Scan legal documents for risky clauses")]
struct Args {
    /// Document to analyze (reads stdin when omitted)
    file: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "console")]
    format: OutputFormat,

    /// Document title shown in the report
    #[arg(long)]
    title: Option<String>,

    /// Where the document came from
    #[arg(long)]
    url: Option<String>,

    /// Skip classification and treat the document as this type
    #[arg(long = "type", value_name = "TYPE")]
    document_type: Option<DocumentType>,

    /// Never call the remote analysis service
    #[arg(long)]
    local_only: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging; stdout is reserved for the report
    let log_level = if args.verbose { Level::DEBUG } else { Level::WARN };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = load_config(args.config.as_deref(), args.local_only)?;
    let text = read_input(args.file.as_deref())?;
    debug!(chars = text.len(), "read input");

    let record = SourceRecord {
        text,
        document_type: args.document_type,
        url: args.url.unwrap_or_default(),
        title: args
            .title
            .or_else(|| file_title(args.file.as_deref()))
            .unwrap_or_default(),
    };

    let analyzer = Analyzer::new(config)?;
    let result = analyzer.analyze_record(&record).await?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Console => {
            let label = analysis_core::source::source_label(&record);
            print!("{}", report::render(&result, label, chrono::Utc::now()));
        }
    }

    Ok(())
}

/// File configuration (or defaults), then environment overrides, then flags
fn load_config(path: Option<&Path>, local_only: bool) -> anyhow::Result<AnalyzerConfig> {
    let config = match path {
        Some(path) => AnalyzerConfig::from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => AnalyzerConfig::default(),
    };

    let mut config = config.with_env_overrides();
    if local_only {
        config.enable_remote_analysis = false;
    }
    Ok(config)
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read document: {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read document from stdin")?;
            Ok(text)
        }
    }
}

fn file_title(path: Option<&Path>) -> Option<String> {
    path?.file_name().map(|name| name.to_string_lossy().into_owned())
}
