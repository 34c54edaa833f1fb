use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{error, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod batch;
mod config;
mod report;
mod state;

use cardparse_core::ParsedStatement;
use config::Config;
use report::UNSUPPORTED_HINT;

#[derive(Parser, Debug)]
#[command(
    name = "cardparse",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("CARDPARSE_BUILD_SHA"), ")"),
    about = "Extract dues, dates and limits from credit card statement PDFs"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse one statement PDF and print the extracted fields as JSON
    Parse {
        pdf: PathBuf,

        /// Also print the raw extracted text
        #[arg(long)]
        raw: bool,

        /// Single-line JSON
        #[arg(long)]
        compact: bool,
    },

    /// Print which bank a statement PDF belongs to
    Detect { pdf: PathBuf },

    /// Print the raw text layer of a statement PDF
    Text { pdf: PathBuf },

    /// Parse the configured list of sample statements
    Batch {
        /// Folder holding the samples (default: batch.sample_dir from config)
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Also write one CSV row per parsed statement
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Manage ~/.cardparse/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config if none exists
    Init,
    /// Print the effective config
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let (cfg, cfg_err) = config::load_config_or_default();
    init_tracing(&cfg.log_level);
    if let Some(e) = cfg_err {
        warn!(error = %format!("{e:#}"), "config unreadable; using defaults");
    }

    match cli.command {
        Command::Parse { pdf, raw, compact } => {
            let pretty = cfg.output.pretty && !compact;
            let show_raw = raw || cfg.output.show_raw_text;
            cmd_parse(&pdf, pretty, show_raw)?;
        }

        Command::Detect { pdf } => {
            let text = cardparse_pdf::extract_text(&pdf).unwrap_or_else(|e| fail(&pdf, e));
            println!("{}", cardparse_ingest::detect_bank(&text));
        }

        Command::Text { pdf } => {
            let text = cardparse_pdf::extract_text(&pdf).unwrap_or_else(|e| fail(&pdf, e));
            print!("{}", text);
        }

        Command::Batch { dir, csv } => {
            batch::cmd_batch(&cfg.batch, dir, csv, cfg.output.pretty).await?;
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => show_config(&cfg)?,
        },
    }

    Ok(())
}

/// Logs go to stderr; RUST_LOG wins over the configured level.
fn init_tracing(default_level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn cmd_parse(pdf: &Path, pretty: bool, show_raw: bool) -> Result<()> {
    let parsed = cardparse_pdf::parse(pdf).unwrap_or_else(|e| fail(pdf, e));

    println!("{}", report::render_json(&parsed, pretty)?);

    if show_raw {
        let text = raw_text(&parsed, pdf).unwrap_or_else(|e| fail(pdf, e));
        println!("\n--- Raw extracted text ---\n{}", text);
    }

    Ok(())
}

/// Text for `--raw`: what the parse kept, else a second read of the PDF.
fn raw_text(parsed: &ParsedStatement, pdf: &Path) -> cardparse_core::Result<String> {
    match parsed.raw_text() {
        Some(t) => Ok(t.to_string()),
        None => cardparse_pdf::extract_text(pdf),
    }
}

fn show_config(cfg: &Config) -> Result<()> {
    println!("# {}", config::config_path()?.display());
    print!("{}", toml::to_string_pretty(cfg).context("serialize config")?);
    Ok(())
}

/// Generic diagnostic for the user; details only in the log.
fn fail(pdf: &Path, e: cardparse_core::Error) -> ! {
    error!(path = %pdf.display(), error = %e, "statement parse failed");
    eprintln!("Could not parse statement: {}", e.client_message());
    eprintln!("{}", UNSUPPORTED_HINT);
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardparse_core::{BankLabel, ExtractedStatement};

    #[test]
    fn test_raw_text_reuses_kept_text() {
        let parsed = ParsedStatement::unclassified("Acme Bank\n");
        let text = raw_text(&parsed, Path::new("/nonexistent/statement.pdf")).unwrap();
        assert_eq!(text, "Acme Bank\n");
    }

    #[test]
    fn test_raw_text_reread_failure_is_a_statement_error() {
        let dir = tempfile::tempdir().unwrap();
        let pdf = dir.path().join("AXIS.pdf");
        let parsed = ParsedStatement::Extracted(ExtractedStatement::new(BankLabel::AxisBank));

        let err = raw_text(&parsed, &pdf).unwrap_err();
        let msg = err.client_message();
        assert!(!msg.contains(&*pdf.to_string_lossy()), "{msg}");
    }

    #[test]
    fn test_version_carries_build_revision() {
        let rev = env!("CARDPARSE_BUILD_SHA");
        assert!(!rev.trim().is_empty());

        let cmd = <Cli as clap::CommandFactory>::command();
        assert!(cmd.get_version().unwrap().contains(rev));
    }
}
