use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::models::{BillTable, Legislator, Vote, VoteResult, VoteType};
use crate::summarizers::types::BillSummary;
use crate::summarizers::utility::count_by_key;

/// Sponsor name used when a bill has no sponsor or the sponsor is not a
/// known legislator.
pub const UNKNOWN_SPONSOR: &str = "Unknown";

/// Counts supporters and opposers for every bill and attaches the sponsor name.
///
/// Bills are inner-joined to votes and then to vote results to find the
/// counts, and the original bills table is left-joined to those counts, so
/// every bill yields one row in input order. A count that no joined row
/// contributed to stays `None`.
pub fn summarize_bills(
    bills: &BillTable,
    votes: &[Vote],
    vote_results: &[VoteResult],
    legislators: &[Legislator],
) -> Vec<BillSummary> {
    let bill_ids: HashSet<i64> = bills.bills.iter().map(|b| b.id).collect();

    // bills x votes
    let mut vote_bills: HashMap<i64, Vec<i64>> = HashMap::new();
    for vote in votes.iter().filter(|v| bill_ids.contains(&v.bill_id)) {
        vote_bills.entry(vote.id).or_default().push(vote.bill_id);
    }

    // ... x vote_results
    let joined = vote_results.iter().flat_map(|r| {
        vote_bills
            .get(&r.vote_id)
            .into_iter()
            .flatten()
            .map(move |bill_id| (*bill_id, r))
    });
    let counts = count_by_key(joined, |(bill_id, r)| r.kind().map(|kind| (bill_id, kind)));

    let mut sponsors: HashMap<i64, &str> = HashMap::new();
    for l in legislators {
        sponsors.entry(l.id).or_insert(l.name.as_str());
    }

    debug!(
        bills = bills.len(),
        votes = votes.len(),
        vote_results = vote_results.len(),
        groups = counts.len(),
        "Summarized bill votes"
    );

    bills
        .bills
        .iter()
        .map(|bill| {
            let name = bill
                .sponsor_id
                .and_then(|id| sponsors.get(&id).copied())
                .filter(|name| !name.is_empty())
                .unwrap_or(UNKNOWN_SPONSOR);

            BillSummary {
                id: bill.id,
                fields: bills.output_values(bill),
                supporter_count: counts.get(&(bill.id, VoteType::Support)).copied(),
                opposer_count: counts.get(&(bill.id, VoteType::Oppose)).copied(),
                name: name.to_string(),
            }
        })
        .collect()
}
