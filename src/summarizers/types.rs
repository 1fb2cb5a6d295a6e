//! Output rows produced by the summarizers.

use serde::Serialize;

/// One row of `legislators-support-oppose-count.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegislatorSummary {
    pub id: i64,
    pub name: String,
    pub num_supported_bills: u32,
    pub num_opposed_bills: u32,
}

/// One row of `bills.csv`.
///
/// `fields` are the bill's own cells minus `sponsor_id`. A count is `None`
/// when no vote result of that kind reached the bill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillSummary {
    pub id: i64,
    pub fields: Vec<String>,
    pub supporter_count: Option<u32>,
    pub opposer_count: Option<u32>,
    pub name: String,
}
