#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    borrow::Cow,
    time::{SystemTime, UNIX_EPOCH},
};

use serde::{Deserialize, Serialize};
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Panel, Style, Width, object::Rows},
};
use typed_builder::TypedBuilder;

use super::results::{AssertionResult, ScoreSummary, Totals};
use crate::error::GradeError;

/// Reported outcome of a single assertion inside the result document.
#[derive(Serialize, Deserialize, Debug, TypedBuilder)]
#[builder(field_defaults(default, setter(into)))]
pub struct TestRecord {
    /// Assertion name.
    pub name:    String,
    /// `passed` or `failed`.
    pub outcome: String,
    /// Failure explanation; omitted on a pass.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Tabled for TestRecord {
    const LENGTH: usize = 3;

    fn fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::from(self.name.as_str()),
            Cow::from(self.outcome.as_str()),
            Cow::from(self.message.as_deref().unwrap_or("")),
        ]
    }

    fn headers() -> Vec<Cow<'static, str>> {
        vec![
            Cow::from("Requirement"),
            Cow::from("Outcome"),
            Cow::from("Reason"),
        ]
    }
}

/// Counts block mirrored from the platform's historical report format.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default)]
pub struct ReportSummary {
    /// Assertions evaluated.
    pub total:     usize,
    /// Assertions that held.
    pub passed:    usize,
    /// Assertions that failed.
    pub failed:    usize,
    /// Assertions collected for the run; equal to `total` since every
    /// collected assertion is evaluated exactly once.
    pub collected: usize,
}

/// The success-path result document body.
#[derive(Serialize, Deserialize, Debug, TypedBuilder)]
#[builder(field_defaults(default, setter(into)))]
pub struct Report {
    /// Unix timestamp at which the run completed.
    pub created:  u64,
    /// Wall-clock duration of the run in seconds.
    pub duration: f64,
    /// Raw counts block.
    pub summary:  ReportSummary,
    /// Per-assertion outcomes in evaluation order.
    pub tests:    Vec<TestRecord>,
    /// Normalized score consumed by the platform.
    pub stats:    ScoreSummary,
}

impl Report {
    /// Assembles the success document from evaluation output.
    pub fn render(results: &[AssertionResult], totals: Totals, duration: f64) -> ResultDocument {
        let tests: Vec<TestRecord> = results
            .iter()
            .map(|r| {
                TestRecord::builder()
                    .name(r.name.clone())
                    .outcome(r.outcome())
                    .message(r.message.clone())
                    .build()
            })
            .collect();

        let summary = ReportSummary {
            total:     totals.total,
            passed:    totals.passed,
            failed:    totals.failed,
            collected: totals.total,
        };

        ResultDocument::Success(
            Report::builder()
                .created(unix_now())
                .duration(duration)
                .summary(summary)
                .tests(tests)
                .stats(ScoreSummary::normalize(totals))
                .build(),
        )
    }
}

/// The single structured document emitted per grading run: either the full
/// report or the zero-score error shape. Always serializes to well-formed
/// JSON regardless of which stage failed.
#[derive(Serialize, Deserialize, Debug)]
#[serde(untagged)]
pub enum ResultDocument {
    /// Every stage completed; counts and score are meaningful.
    Success(Report),
    /// Some stage failed; the failure is data, the score is zero.
    Error {
        /// Display string of the classified failure.
        error: String,
        /// Fixed zero-score stats block.
        stats: ScoreSummary,
    },
}

impl ResultDocument {
    /// Collapses a classified failure into the fixed zero-score document.
    pub fn from_error(err: &GradeError) -> Self {
        Self::Error {
            error: err.to_string(),
            stats: ScoreSummary::zero_with_failure(),
        }
    }

    /// The stats block, present in both variants.
    pub fn stats(&self) -> &ScoreSummary {
        match self {
            Self::Success(report) => &report.stats,
            Self::Error { stats, .. } => stats,
        }
    }

    /// Serializes the document. The document holds only primitive values,
    /// so serialization cannot refuse it; if it ever did, the fallback
    /// assembles a minimal error object by hand rather than propagating.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| {
            format!(
                concat!(
                    "{{\n",
                    "  \"error\": \"Report serialization failed: {}\",\n",
                    "  \"stats\": {{\n",
                    "    \"total_tests\": 0,\n",
                    "    \"passed\": 0,\n",
                    "    \"failed\": 1,\n",
                    "    \"marks\": 0.0,\n",
                    "    \"percentage\": 0.0\n",
                    "  }}\n",
                    "}}"
                ),
                e.to_string().replace('"', "'")
            )
        })
    }
}

/// Prints the grading overview table to stderr, keeping stdout reserved
/// for the machine-readable document.
pub fn show_result(report: &Report) {
    eprintln!(
        "{}",
        Table::new(&report.tests)
            .with(Panel::header("Grading Overview"))
            .with(Panel::footer(format!(
                "Score: {:.2}/1.00 ({:.2}%)",
                report.stats.marks, report.stats.percentage
            )))
            .with(Modify::new(Rows::new(1..)).with(Width::wrap(48).keep_words(true)))
            .with(
                Modify::new(Rows::first())
                    .with(Alignment::center())
                    .with(Alignment::center_vertical()),
            )
            .with(
                Modify::new(Rows::last())
                    .with(Alignment::center())
                    .with(Alignment::center_vertical()),
            )
            .with(Style::modern())
    );
}

/// Seconds since the Unix epoch, or zero if the system clock reads before
/// it.
fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}
