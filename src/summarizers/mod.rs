//! Join and aggregation logic behind the two reports.
//!
//! Both summarizers are pure functions over fully loaded tables. They
//! preserve the row order of their primary input and never fail: join
//! gaps are dropped or filled, unknown vote codes are skipped.

pub mod bills;
pub mod legislators;
pub mod types;
pub mod utility;

pub use bills::summarize_bills;
pub use legislators::summarize_legislators;
pub use types::{BillSummary, LegislatorSummary};
