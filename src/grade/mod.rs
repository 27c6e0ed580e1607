#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Fixed-shape result documents and terminal display.
pub mod report;
/// Aggregation and score normalization types.
pub mod results;
/// Structural assertions evaluated against parsed layouts.
pub mod rules;

pub use report::{Report, ReportSummary, ResultDocument, TestRecord, show_result};
pub use results::{AssertionResult, ScoreSummary, Totals, round2};
pub use rules::{
    Assertion, Check, Target, evaluate, extract_digits, from_json, hi_android, load_rules,
};
