//! In-memory records for the four input tables.

use csv::StringRecord;
use serde::Deserialize;

/// How a legislator voted on a single vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoteType {
    Support,
    Oppose,
}

impl VoteType {
    /// Maps the numeric code stored in `vote_results.csv`.
    ///
    /// Returns `None` for any code other than 1 (support) or 2 (oppose).
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(VoteType::Support),
            2 => Some(VoteType::Oppose),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Legislator {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Vote {
    pub id: i64,
    pub bill_id: i64,
}

/// `vote_type` is `None` when the cell is blank or not an integer; such
/// rows load fine and are skipped by the summarizers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct VoteResult {
    pub legislator_id: i64,
    pub vote_id: i64,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub vote_type: Option<i64>,
}

impl VoteResult {
    pub fn kind(&self) -> Option<VoteType> {
        self.vote_type.and_then(VoteType::from_code)
    }
}

/// A bill row. `values` holds every raw cell in header order so the
/// descriptive columns can be written back out untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Bill {
    pub id: i64,
    pub sponsor_id: Option<i64>,
    pub values: StringRecord,
}

/// The bills table with its header row.
#[derive(Debug, Clone, Default)]
pub struct BillTable {
    pub headers: StringRecord,
    pub bills: Vec<Bill>,
}

impl BillTable {
    pub const SPONSOR_COLUMN: &'static str = "sponsor_id";

    /// Position of `sponsor_id` in the header row, if present.
    pub fn sponsor_index(&self) -> Option<usize> {
        self.headers.iter().position(|h| h == Self::SPONSOR_COLUMN)
    }

    /// Bill columns carried into the report: everything but `sponsor_id`.
    pub fn output_headers(&self) -> Vec<String> {
        self.headers
            .iter()
            .filter(|h| *h != Self::SPONSOR_COLUMN)
            .map(str::to_string)
            .collect()
    }

    /// Cells of `bill` that line up with [`BillTable::output_headers`].
    pub fn output_values(&self, bill: &Bill) -> Vec<String> {
        let skip = self.sponsor_index();
        bill.values
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != skip)
            .map(|(_, v)| v.to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.bills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bills.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> BillTable {
        let headers = StringRecord::from(vec!["id", "title", "sponsor_id"]);
        let bills = vec![Bill {
            id: 7,
            sponsor_id: Some(3),
            values: StringRecord::from(vec!["7", "Clean Water Act", "3"]),
        }];
        BillTable { headers, bills }
    }

    #[test]
    fn test_vote_type_from_code() {
        assert_eq!(VoteType::from_code(1), Some(VoteType::Support));
        assert_eq!(VoteType::from_code(2), Some(VoteType::Oppose));
        assert_eq!(VoteType::from_code(0), None);
        assert_eq!(VoteType::from_code(3), None);
        assert_eq!(VoteType::from_code(-1), None);
    }

    #[test]
    fn test_vote_result_kind_without_code() {
        let blank = VoteResult {
            legislator_id: 1,
            vote_id: 1,
            vote_type: None,
        };
        assert_eq!(blank.kind(), None);
    }

    #[test]
    fn test_vote_result_kind_ignores_unknown_codes() {
        let abstain = VoteResult {
            legislator_id: 1,
            vote_id: 1,
            vote_type: Some(9),
        };
        assert_eq!(abstain.kind(), None);
    }

    #[test]
    fn test_output_headers_drop_sponsor() {
        assert_eq!(table().output_headers(), vec!["id", "title"]);
    }

    #[test]
    fn test_output_values_drop_sponsor() {
        let t = table();
        assert_eq!(t.output_values(&t.bills[0]), vec!["7", "Clean Water Act"]);
    }

    #[test]
    fn test_output_without_sponsor_column_keeps_everything() {
        let t = BillTable {
            headers: StringRecord::from(vec!["id", "title"]),
            bills: vec![Bill {
                id: 1,
                sponsor_id: None,
                values: StringRecord::from(vec!["1", "Budget"]),
            }],
        };
        assert_eq!(t.sponsor_index(), None);
        assert_eq!(t.output_headers(), vec!["id", "title"]);
        assert_eq!(t.output_values(&t.bills[0]), vec!["1", "Budget"]);
    }
}
