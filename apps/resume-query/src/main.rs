use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resume_query::analyzer::ResumeAnalyzer;
use resume_query::config::Config;
use resume_query::ingest::load_document;

#[derive(Parser)]
#[command(name = "resume-query")]
#[command(about = "Extract a structured profile and a job-search query from a resume")]
struct Cli {
    /// Resume file (.txt, .md, .pdf), or `-` to read stdin
    path: PathBuf,

    /// Print only the job-search query
    #[arg(long)]
    query_only: bool,

    /// Leave the detected sections out of the JSON report
    #[arg(long)]
    no_sections: bool,

    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // Logs go to stderr; stdout carries only the report
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting resume-query v{}", env!("CARGO_PKG_VERSION"));

    let text = load_document(&cli.path)
        .inspect_err(|e| {
            error!(code = e.code(), path = %cli.path.display(), "Document load failed")
        })
        .with_context(|| format!("Failed to load {}", cli.path.display()))?;

    let analyzer = ResumeAnalyzer::new(&config);
    let mut report = analyzer.analyze(&text).await;

    if cli.query_only {
        println!("{}", report.job_query);
        return Ok(());
    }
    if cli.no_sections {
        report.sections = None;
    }

    let json = report
        .to_json(cli.pretty)
        .inspect_err(|e| error!(code = e.code(), "Report serialization failed"))?;
    println!("{json}");
    Ok(())
}
