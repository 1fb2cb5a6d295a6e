//! CSV loaders for the four input tables.

use csv::{Reader, StringRecord};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::InsightsConfig;
use crate::error::{InsightsError, Result};
use crate::models::{Bill, BillTable, Legislator, Vote, VoteResult};

pub const BILLS_FILE: &str = "bills.csv";
pub const VOTES_FILE: &str = "votes.csv";
pub const VOTE_RESULTS_FILE: &str = "vote_results.csv";
pub const LEGISLATORS_FILE: &str = "legislators.csv";

/// All four tables, fully materialized.
#[derive(Debug, Clone, Default)]
pub struct InputTables {
    pub bills: BillTable,
    pub votes: Vec<Vote>,
    pub vote_results: Vec<VoteResult>,
    pub legislators: Vec<Legislator>,
}

impl InputTables {
    /// Loads every table from the configured models directory.
    #[tracing::instrument(skip_all, fields(models_dir = %config.models_dir.display()))]
    pub fn load(config: &InsightsConfig) -> Result<Self> {
        Ok(Self {
            bills: load_bills(&config.bills_path())?,
            votes: load_votes(&config.votes_path())?,
            vote_results: load_vote_results(&config.vote_results_path())?,
            legislators: load_legislators(&config.legislators_path())?,
        })
    }
}

pub fn load_legislators(path: &Path) -> Result<Vec<Legislator>> {
    load_records(path, "legislators", &["id", "name"])
}

pub fn load_votes(path: &Path) -> Result<Vec<Vote>> {
    load_records(path, "votes", &["id", "bill_id"])
}

pub fn load_vote_results(path: &Path) -> Result<Vec<VoteResult>> {
    load_records(path, "vote_results", &["legislator_id", "vote_id", "vote_type"])
}

/// Join keys pulled out of a raw bill row.
#[derive(Deserialize)]
struct BillKeys {
    id: i64,
    sponsor_id: Option<i64>,
}

/// Loads the bills table, keeping every column for the report.
pub fn load_bills(path: &Path) -> Result<BillTable> {
    let mut rdr = open(path)?;
    let headers = read_headers(&mut rdr, path, "bills", &["id", BillTable::SPONSOR_COLUMN])?;

    let mut bills = Vec::new();
    for result in rdr.records() {
        let values = result.map_err(|source| parse_error(path, source))?;
        let keys: BillKeys = values
            .deserialize(Some(&headers))
            .map_err(|source| parse_error(path, source))?;
        bills.push(Bill {
            id: keys.id,
            sponsor_id: keys.sponsor_id,
            values,
        });
    }

    debug!(path = %path.display(), rows = bills.len(), "Loaded bills");
    Ok(BillTable { headers, bills })
}

fn load_records<T: DeserializeOwned>(path: &Path, table: &str, required: &[&str]) -> Result<Vec<T>> {
    let mut rdr = open(path)?;
    read_headers(&mut rdr, path, table, required)?;

    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        let record: T = result.map_err(|source| parse_error(path, source))?;
        rows.push(record);
    }

    debug!(path = %path.display(), table, rows = rows.len(), "Loaded table");
    Ok(rows)
}

fn open(path: &Path) -> Result<Reader<File>> {
    let file = File::open(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => InsightsError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => InsightsError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    Ok(Reader::from_reader(file))
}

fn read_headers(
    rdr: &mut Reader<File>,
    path: &Path,
    table: &str,
    required: &[&str],
) -> Result<StringRecord> {
    let headers = rdr
        .headers()
        .map_err(|source| parse_error(path, source))?
        .clone();

    if let Some(missing) = required.iter().find(|col| !headers.iter().any(|h| h == **col)) {
        return Err(InsightsError::schema(table, missing));
    }

    Ok(headers)
}

fn parse_error(path: &Path, source: csv::Error) -> InsightsError {
    InsightsError::Parse {
        path: PathBuf::from(path),
        source,
    }
}
