//! Persistence for the two reports.
//!
//! Reports are written as CSV, replacing any previous file. A short JSON
//! run report is available for logging.

use chrono::{DateTime, Utc};
use csv::{Writer, WriterBuilder};
use serde::Serialize;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::MissingCounts;
use crate::error::{InsightsError, Result};
use crate::summarizers::{BillSummary, LegislatorSummary};

pub const LEGISLATORS_REPORT_FILE: &str = "legislators-support-oppose-count.csv";
pub const BILLS_REPORT_FILE: &str = "bills.csv";

pub const LEGISLATOR_COLUMNS: [&str; 4] =
    ["id", "name", "num_supported_bills", "num_opposed_bills"];
pub const BILL_DERIVED_COLUMNS: [&str; 3] = ["supporter_count", "opposer_count", "name"];

/// Summary of one run, logged once every requested report is written.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub generated_at: DateTime<Utc>,
    pub reports: Vec<ReportEntry>,
}

#[derive(Debug, Serialize)]
pub struct ReportEntry {
    pub path: PathBuf,
    pub rows: usize,
}

/// Logs a [`RunReport`] as pretty-printed JSON.
pub fn print_json(report: &RunReport) -> serde_json::Result<()> {
    info!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Writes `legislators-support-oppose-count.csv` rows to `path`.
#[tracing::instrument(skip_all, fields(path = %path.display(), rows = rows.len()))]
pub fn write_legislator_summaries(path: &Path, rows: &[LegislatorSummary]) -> Result<()> {
    let mut writer = create_writer(path)?;

    writer
        .write_record(LEGISLATOR_COLUMNS)
        .map_err(|source| write_error(path, source))?;
    for row in rows {
        writer
            .serialize(row)
            .map_err(|source| write_error(path, source))?;
    }

    finish(writer, path)?;
    info!("Legislator report written");
    Ok(())
}

/// Writes `bills.csv` rows to `path`.
///
/// `headers` are the bill columns carried into the report, in the order the
/// values appear in [`BillSummary::fields`].
#[tracing::instrument(skip_all, fields(path = %path.display(), rows = rows.len()))]
pub fn write_bill_summaries(
    path: &Path,
    headers: &[String],
    rows: &[BillSummary],
    missing: MissingCounts,
) -> Result<()> {
    let mut writer = create_writer(path)?;

    let header_row = headers
        .iter()
        .map(String::as_str)
        .chain(BILL_DERIVED_COLUMNS);
    writer
        .write_record(header_row)
        .map_err(|source| write_error(path, source))?;

    for row in rows {
        let record = row
            .fields
            .iter()
            .cloned()
            .chain([
                missing.render(row.supporter_count),
                missing.render(row.opposer_count),
                row.name.clone(),
            ]);
        writer
            .write_record(record)
            .map_err(|source| write_error(path, source))?;
    }

    finish(writer, path)?;
    info!(missing_counts = ?missing, "Bill report written");
    Ok(())
}

fn create_writer(path: &Path) -> Result<Writer<File>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| InsightsError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    debug!(path = %path.display(), "Creating CSV report");
    WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|source| write_error(path, source))
}

fn finish(mut writer: Writer<File>, path: &Path) -> Result<()> {
    writer.flush().map_err(|source| InsightsError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn write_error(path: &Path, source: csv::Error) -> InsightsError {
    InsightsError::Write {
        path: path.to_path_buf(),
        source,
    }
}
