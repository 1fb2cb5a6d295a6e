use std::collections::HashSet;
use tracing::debug;

use crate::models::{Legislator, VoteResult, VoteType};
use crate::summarizers::types::LegislatorSummary;
use crate::summarizers::utility::count_by_key;

/// Counts supported and opposed bills for every legislator.
///
/// Vote results are inner-joined to `legislators` on `legislator_id`, so a
/// result naming an unknown legislator contributes nothing. Every input
/// legislator gets exactly one row, in input order, with missing counts as 0.
pub fn summarize_legislators(
    vote_results: &[VoteResult],
    legislators: &[Legislator],
) -> Vec<LegislatorSummary> {
    let known: HashSet<i64> = legislators.iter().map(|l| l.id).collect();

    let joined = vote_results
        .iter()
        .filter(|r| known.contains(&r.legislator_id));
    let counts = count_by_key(joined, |r| r.kind().map(|kind| (r.legislator_id, kind)));

    debug!(
        legislators = legislators.len(),
        vote_results = vote_results.len(),
        groups = counts.len(),
        "Summarized legislator votes"
    );

    let count = |id: i64, kind: VoteType| counts.get(&(id, kind)).copied().unwrap_or(0);

    legislators
        .iter()
        .map(|l| LegislatorSummary {
            id: l.id,
            name: l.name.clone(),
            num_supported_bills: count(l.id, VoteType::Support),
            num_opposed_bills: count(l.id, VoteType::Oppose),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legislator(id: i64, name: &str) -> Legislator {
        Legislator {
            id,
            name: name.to_string(),
        }
    }

    fn result(legislator_id: i64, vote_type: i64) -> VoteResult {
        VoteResult {
            legislator_id,
            vote_id: 1,
            vote_type: Some(vote_type),
        }
    }

    fn row(id: i64, name: &str, supported: u32, opposed: u32) -> LegislatorSummary {
        LegislatorSummary {
            id,
            name: name.to_string(),
            num_supported_bills: supported,
            num_opposed_bills: opposed,
        }
    }

    #[test]
    fn test_support_and_oppose_counts() {
        let legislators = vec![legislator(1, "Alice"), legislator(2, "Bob")];
        let results = vec![result(1, 1), result(1, 2), result(2, 1)];

        let summary = summarize_legislators(&results, &legislators);

        assert_eq!(summary, vec![row(1, "Alice", 1, 1), row(2, "Bob", 1, 0)]);
    }

    #[test]
    fn test_legislator_without_votes_gets_zeroes() {
        let legislators = vec![legislator(1, "Alice"), legislator(3, "Carol")];
        let results = vec![result(1, 1)];

        let summary = summarize_legislators(&results, &legislators);

        assert_eq!(summary[1], row(3, "Carol", 0, 0));
    }

    #[test]
    fn test_unknown_legislator_is_dropped() {
        let legislators = vec![legislator(1, "Alice")];
        let results = vec![result(1, 2), result(42, 1), result(42, 2)];

        let summary = summarize_legislators(&results, &legislators);

        assert_eq!(summary, vec![row(1, "Alice", 0, 1)]);
    }

    #[test]
    fn test_other_vote_types_are_ignored() {
        let legislators = vec![legislator(1, "Alice")];
        let results = vec![result(1, 1), result(1, 0), result(1, 3), result(1, 7)];

        let summary = summarize_legislators(&results, &legislators);

        assert_eq!(summary, vec![row(1, "Alice", 1, 0)]);
    }

    #[test]
    fn test_blank_vote_types_are_ignored() {
        let legislators = vec![legislator(1, "Alice")];
        let mut results = vec![result(1, 2), result(1, 1)];
        results[1].vote_type = None;

        let summary = summarize_legislators(&results, &legislators);

        assert_eq!(summary, vec![row(1, "Alice", 0, 1)]);
    }

    #[test]
    fn test_preserves_input_order() {
        let legislators = vec![
            legislator(30, "Zed"),
            legislator(10, "Amy"),
            legislator(20, "Max"),
        ];
        let results = vec![result(10, 1), result(20, 2), result(30, 1)];

        let ids: Vec<i64> = summarize_legislators(&results, &legislators)
            .iter()
            .map(|s| s.id)
            .collect();

        assert_eq!(ids, vec![30, 10, 20]);
    }

    #[test]
    fn test_counts_never_exceed_votes_cast() {
        let legislators = vec![legislator(1, "Alice"), legislator(2, "Bob")];
        let results = vec![
            result(1, 1),
            result(1, 1),
            result(1, 2),
            result(1, 5),
            result(2, 2),
            result(2, 2),
        ];

        for s in summarize_legislators(&results, &legislators) {
            let cast = results.iter().filter(|r| r.legislator_id == s.id).count() as u32;
            let counted = s.num_supported_bills + s.num_opposed_bills;
            assert!(counted <= cast);
            if s.id == 2 {
                assert_eq!(counted, cast);
            }
        }
    }

    #[test]
    fn test_no_vote_results() {
        let legislators = vec![legislator(1, "Alice")];
        let summary = summarize_legislators(&[], &legislators);
        assert_eq!(summary, vec![row(1, "Alice", 0, 0)]);
    }
}
