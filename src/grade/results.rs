#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use serde::{Deserialize, Serialize};

/// Outcome of a single assertion. Immutable once produced; aggregated but
/// never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssertionResult {
    /// Name of the assertion that produced this outcome.
    pub name:    String,
    /// Whether the assertion held.
    pub passed:  bool,
    /// Explanation of the failure; absent on a pass.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AssertionResult {
    /// Records a passing assertion.
    pub fn pass(name: &str) -> Self {
        Self {
            name:    name.to_string(),
            passed:  true,
            message: None,
        }
    }

    /// Records a failing assertion with its explanation.
    pub fn fail(name: &str, message: String) -> Self {
        Self {
            name:    name.to_string(),
            passed:  false,
            message: Some(message),
        }
    }

    /// Outcome keyword reported for this result.
    pub fn outcome(&self) -> &'static str {
        if self.passed { "passed" } else { "failed" }
    }
}

/// Raw pass/fail counts reduced from a sequence of assertion outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    /// Number of assertions evaluated.
    pub total:  usize,
    /// Number that held.
    pub passed: usize,
    /// Number that failed.
    pub failed: usize,
}

impl Totals {
    /// Pure reduction over assertion outcomes. An empty slice yields all
    /// zeros; `passed + failed == total` holds for every input.
    pub fn aggregate(results: &[AssertionResult]) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed).count();

        Self {
            total,
            passed,
            failed: total - passed,
        }
    }
}

/// Normalized score consumed by the grading platform. This is the terminal
/// artifact of a run and is never mutated after emission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreSummary {
    /// Number of assertions the score is based on.
    pub total_tests: usize,
    /// Assertions that held.
    pub passed:      usize,
    /// Assertions that failed.
    pub failed:      usize,
    /// Normalized score in [0, 1], rounded to two decimals.
    pub marks:       f64,
    /// Score percentage in [0, 100], rounded to two decimals.
    pub percentage:  f64,
}

impl ScoreSummary {
    /// Converts raw counts into the bounded score the platform consumes.
    /// With no assertions evaluated both marks and percentage are zero.
    pub fn normalize(totals: Totals) -> Self {
        let marks = if totals.total > 0 {
            round2(totals.passed as f64 / totals.total as f64)
        } else {
            0.0
        };

        Self {
            total_tests: totals.total,
            passed: totals.passed,
            failed: totals.failed,
            marks,
            percentage: round2(marks * 100.0),
        }
    }

    /// The fixed zero-score shape reported when a run fails before any
    /// assertion could be evaluated. The single counted failure is the run
    /// itself.
    pub fn zero_with_failure() -> Self {
        Self {
            total_tests: 0,
            passed:      0,
            failed:      1,
            marks:       0.0,
            percentage:  0.0,
        }
    }
}

/// Rounds to two decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
