//! Batch mode: run the fixed sample list through the parser.

use anyhow::Result;
use cardparse_core::ParsedStatement;
use std::path::{Path, PathBuf};
use tracing::error;

use crate::config::BatchSection;
use crate::report::{self, UNSUPPORTED_HINT};

/// Outcome for one configured file
#[derive(Debug)]
pub enum BatchOutcome {
    Parsed(ParsedStatement),
    NotFound,
    Failed(cardparse_core::Error),
}

#[derive(Debug)]
pub struct BatchItem {
    pub file: String,
    pub path: PathBuf,
    pub outcome: BatchOutcome,
}

/// Parse every configured file. Each file runs on its own blocking task;
/// results come back in list order.
pub async fn run_batch(dir: &Path, files: &[String]) -> Result<Vec<BatchItem>> {
    let mut handles = Vec::with_capacity(files.len());
    for file in files {
        let path = dir.join(file);
        let file = file.clone();
        handles.push(tokio::task::spawn_blocking(move || {
            let outcome = if !path.exists() {
                BatchOutcome::NotFound
            } else {
                match cardparse_pdf::parse(&path) {
                    Ok(parsed) => BatchOutcome::Parsed(parsed),
                    Err(e) => {
                        error!(path = %path.display(), error = %e, "parse failed");
                        BatchOutcome::Failed(e)
                    }
                }
            };
            BatchItem { file, path, outcome }
        }));
    }

    let mut items = Vec::with_capacity(handles.len());
    for handle in handles {
        items.push(handle.await?);
    }
    Ok(items)
}

pub async fn cmd_batch(
    section: &BatchSection,
    dir: Option<PathBuf>,
    csv_out: Option<PathBuf>,
    pretty: bool,
) -> Result<()> {
    let dir = dir.unwrap_or_else(|| section.sample_dir.clone());
    let items = run_batch(&dir, &section.files).await?;

    let mut parsed_rows = Vec::new();
    for item in items {
        match item.outcome {
            BatchOutcome::NotFound => {
                println!("--- File not found: {} ---\n", item.path.display());
            }
            BatchOutcome::Failed(e) => {
                println!("--- Processing {} ---", item.path.display());
                println!("Could not parse statement: {}", e.client_message());
                println!("{}", UNSUPPORTED_HINT);
                println!("--- Failed {} ---\n", item.file);
            }
            BatchOutcome::Parsed(parsed) => {
                println!("--- Processing {} ---", item.path.display());
                println!("{}", report::render_json(&parsed, pretty)?);
                println!("--- Finished {} ---\n", item.file);
                parsed_rows.push((item.file, parsed));
            }
        }
    }

    if let Some(out) = csv_out {
        report::write_csv(&out, &parsed_rows)?;
        println!("Wrote {} rows to {}", parsed_rows.len(), out.display());
    }

    Ok(())
}
