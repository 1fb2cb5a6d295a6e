//! Run configuration: where tables are read from and reports written to.
//!
//! Each setting is taken from the CLI when given, otherwise from the
//! environment (a `.env` file is honoured), otherwise from the default.

use std::env;
use std::path::PathBuf;

use crate::loader::{BILLS_FILE, LEGISLATORS_FILE, VOTE_RESULTS_FILE, VOTES_FILE};
use crate::output::{BILLS_REPORT_FILE, LEGISLATORS_REPORT_FILE};

pub const MODELS_DIR_ENV: &str = "BILLS_INSIGHTS_MODELS_DIR";
pub const RESULTS_DIR_ENV: &str = "BILLS_INSIGHTS_RESULTS_DIR";
pub const EMPTY_MISSING_COUNTS_ENV: &str = "BILLS_INSIGHTS_EMPTY_MISSING_COUNTS";

pub const DEFAULT_MODELS_DIR: &str = "models";
pub const DEFAULT_RESULTS_DIR: &str = "results";

/// How a bill count with no joined rows is written to `bills.csv`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingCounts {
    /// Write `0`, matching the legislator report.
    #[default]
    Zero,
    /// Leave the cell empty.
    Empty,
}

impl MissingCounts {
    pub fn render(self, count: Option<u32>) -> String {
        match (count, self) {
            (Some(n), _) => n.to_string(),
            (None, MissingCounts::Zero) => "0".to_string(),
            (None, MissingCounts::Empty) => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightsConfig {
    pub models_dir: PathBuf,
    pub results_dir: PathBuf,
    pub missing_counts: MissingCounts,
}

impl Default for InsightsConfig {
    fn default() -> Self {
        Self {
            models_dir: PathBuf::from(DEFAULT_MODELS_DIR),
            results_dir: PathBuf::from(DEFAULT_RESULTS_DIR),
            missing_counts: MissingCounts::default(),
        }
    }
}

impl InsightsConfig {
    /// Resolves the configuration from CLI overrides and the process
    /// environment, after loading any `.env` file.
    pub fn load(
        models_dir: Option<PathBuf>,
        results_dir: Option<PathBuf>,
        missing_counts: Option<MissingCounts>,
    ) -> Self {
        dotenvy::dotenv().ok();
        Self::resolve(models_dir, results_dir, missing_counts, |key| {
            env::var(key).ok()
        })
    }

    /// Resolves each setting as CLI value, then `lookup(ENV_NAME)`, then default.
    pub fn resolve(
        models_dir: Option<PathBuf>,
        results_dir: Option<PathBuf>,
        missing_counts: Option<MissingCounts>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let models_dir = models_dir
            .or_else(|| lookup(MODELS_DIR_ENV).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MODELS_DIR));
        let results_dir = results_dir
            .or_else(|| lookup(RESULTS_DIR_ENV).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RESULTS_DIR));

        let missing_counts = missing_counts
            .or_else(|| {
                lookup(EMPTY_MISSING_COUNTS_ENV).map(|value| {
                    if parse_bool(&value) {
                        MissingCounts::Empty
                    } else {
                        MissingCounts::Zero
                    }
                })
            })
            .unwrap_or_default();

        Self {
            models_dir,
            results_dir,
            missing_counts,
        }
    }

    pub fn bills_path(&self) -> PathBuf {
        self.models_dir.join(BILLS_FILE)
    }

    pub fn votes_path(&self) -> PathBuf {
        self.models_dir.join(VOTES_FILE)
    }

    pub fn vote_results_path(&self) -> PathBuf {
        self.models_dir.join(VOTE_RESULTS_FILE)
    }

    pub fn legislators_path(&self) -> PathBuf {
        self.models_dir.join(LEGISLATORS_FILE)
    }

    pub fn legislators_report_path(&self) -> PathBuf {
        self.results_dir.join(LEGISLATORS_REPORT_FILE)
    }

    pub fn bills_report_path(&self) -> PathBuf {
        self.results_dir.join(BILLS_REPORT_FILE)
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(value, "true" | "1" | "TRUE" | "True")
}
