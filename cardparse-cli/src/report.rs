//! Rendering parsed statements for the terminal and for CSV export

use anyhow::{Context, Result};
use cardparse_core::{Field, ParsedStatement};
use std::path::Path;

pub const UNSUPPORTED_HINT: &str = "This might be an unsupported bank or a new statement format.";

pub fn render_json(parsed: &ParsedStatement, pretty: bool) -> Result<String> {
    let s = if pretty {
        serde_json::to_string_pretty(parsed)
    } else {
        serde_json::to_string(parsed)
    };
    s.context("serialize statement")
}

/// `file`, `bank_name`, then one column per schema field
pub fn csv_header() -> Vec<&'static str> {
    let mut header = vec!["file", "bank_name"];
    header.extend(Field::ALL.iter().map(|f| f.name()));
    header
}

/// Unresolved fields (and every field of a non-extracted record) are empty cells.
pub fn csv_row(file: &str, parsed: &ParsedStatement) -> Vec<String> {
    let mut row = vec![file.to_string(), parsed.bank().display_name().to_string()];
    row.extend(Field::ALL.iter().map(|f| {
        parsed
            .extracted()
            .and_then(|s| s.get(*f))
            .unwrap_or("")
            .to_string()
    }));
    row
}

pub fn write_csv(path: &Path, records: &[(String, ParsedStatement)]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("create {}", path.display()))?;
    wtr.write_record(csv_header())?;
    for (file, parsed) in records {
        wtr.write_record(csv_row(file, parsed))?;
    }
    wtr.flush().with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
