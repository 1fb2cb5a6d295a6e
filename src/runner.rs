//! Ties loading, summarizing and writing together for one run.

use chrono::Utc;
use tracing::info;

use crate::config::InsightsConfig;
use crate::error::Result;
use crate::loader::{InputTables, load_legislators, load_vote_results};
use crate::models::{Legislator, VoteResult};
use crate::output::{ReportEntry, RunReport, write_bill_summaries, write_legislator_summaries};
use crate::summarizers::{summarize_bills, summarize_legislators};

/// Which reports a run produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Report {
    #[default]
    All,
    Legislators,
    Bills,
}

/// Loads every table the requested reports need, then writes them.
///
/// Nothing is written unless all inputs load successfully.
#[tracing::instrument(skip(config), fields(models_dir = %config.models_dir.display(), results_dir = %config.results_dir.display()))]
pub fn run(config: &InsightsConfig, report: Report) -> Result<RunReport> {
    let reports = match report {
        Report::All => {
            let tables = InputTables::load(config)?;
            vec![
                legislators_report(config, &tables.vote_results, &tables.legislators)?,
                bills_report(config, &tables)?,
            ]
        }
        Report::Legislators => {
            let vote_results = load_vote_results(&config.vote_results_path())?;
            let legislators = load_legislators(&config.legislators_path())?;
            vec![legislators_report(config, &vote_results, &legislators)?]
        }
        Report::Bills => {
            let tables = InputTables::load(config)?;
            vec![bills_report(config, &tables)?]
        }
    };

    info!(reports = reports.len(), "Run complete");
    Ok(RunReport {
        generated_at: Utc::now(),
        reports,
    })
}

fn legislators_report(
    config: &InsightsConfig,
    vote_results: &[VoteResult],
    legislators: &[Legislator],
) -> Result<ReportEntry> {
    let rows = summarize_legislators(vote_results, legislators);
    let path = config.legislators_report_path();
    write_legislator_summaries(&path, &rows)?;
    Ok(ReportEntry {
        path,
        rows: rows.len(),
    })
}

fn bills_report(config: &InsightsConfig, tables: &InputTables) -> Result<ReportEntry> {
    let rows = summarize_bills(
        &tables.bills,
        &tables.votes,
        &tables.vote_results,
        &tables.legislators,
    );
    let path = config.bills_report_path();
    write_bill_summaries(
        &path,
        &tables.bills.output_headers(),
        &rows,
        config.missing_counts,
    )?;
    Ok(ReportEntry {
        path,
        rows: rows.len(),
    })
}
