//! Run outcomes and failure reporting.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use tracing::info;

use crate::BASELINE_MARKER;

/// Outcome of comparing a rendered image to a baseline.
#[derive(Clone, Copy, Debug)]
pub struct ComparisonResult {
    /// Similarity score; zero means identical, lower is more similar.
    pub score: f64,
    /// Threshold the score is gated against.
    pub threshold: f64,
}

impl ComparisonResult {
    /// Whether the score is at or below the threshold.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.score <= self.threshold
    }
}

/// Terminal state of one harness run.
#[derive(Clone, Debug)]
pub enum TestOutcome {
    /// The run completed; render tests carry the similarity score.
    Passed {
        /// Similarity score, absent for basic tests.
        score: Option<f64>,
    },
    /// The image comparison exceeded the threshold.
    Failed {
        /// Similarity score of the failed comparison.
        score: f64,
    },
    /// A stage rejected; the run was aborted at the outer boundary.
    Error(String),
}

/// Report handed back to the caller after a run terminates.
#[derive(Clone, Debug)]
pub struct TestReport {
    /// Terminal state of the run.
    pub outcome: TestOutcome,
}

impl TestReport {
    pub(crate) const fn passed_basic() -> Self {
        Self {
            outcome: TestOutcome::Passed { score: None },
        }
    }

    pub(crate) fn from_comparison(comparison: ComparisonResult) -> Self {
        let outcome = if comparison.passed() {
            TestOutcome::Passed {
                score: Some(comparison.score),
            }
        } else {
            TestOutcome::Failed {
                score: comparison.score,
            }
        };
        Self { outcome }
    }

    pub(crate) fn from_error(message: String) -> Self {
        Self {
            outcome: TestOutcome::Error(message),
        }
    }

    /// Whether the run passed. Logged assertion failures do not affect
    /// this; only the comparison branch and aborted runs do.
    #[must_use]
    pub const fn passed(&self) -> bool {
        matches!(self.outcome, TestOutcome::Passed { .. })
    }
}

impl fmt::Display for TestReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            TestOutcome::Passed { score: None } => write!(f, "passed"),
            TestOutcome::Passed { score: Some(score) } => {
                write!(f, "passed (score {score:.4})")
            }
            TestOutcome::Failed { score } => write!(f, "failed (score {score:.4})"),
            TestOutcome::Error(message) => write!(f, "error: {message}"),
        }
    }
}

/// Emit the rendered PNG as a base64 data URI so a human can promote it
/// to the new baseline. Never written back to the baseline path.
pub(crate) fn emit_regenerated_baseline(png: &[u8]) {
    let encoded = STANDARD.encode(png);
    info!("{BASELINE_MARKER}\n\n\ndata:image/png;base64,{encoded}\n\n\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_inclusive() {
        let at = ComparisonResult {
            score: 0.05,
            threshold: 0.05,
        };
        assert!(at.passed());

        let above = ComparisonResult {
            score: 0.0501,
            threshold: 0.05,
        };
        assert!(!above.passed());

        let identical = ComparisonResult {
            score: 0.0,
            threshold: 0.05,
        };
        assert!(identical.passed());
    }

    #[test]
    fn report_display() {
        insta::assert_snapshot!(
            TestReport::from_comparison(ComparisonResult {
                score: 0.0,
                threshold: 0.05
            })
            .to_string(),
            @"passed (score 0.0000)"
        );
        insta::assert_snapshot!(
            TestReport::from_comparison(ComparisonResult {
                score: 0.5,
                threshold: 0.05
            })
            .to_string(),
            @"failed (score 0.5000)"
        );
        insta::assert_snapshot!(TestReport::passed_basic().to_string(), @"passed");
        insta::assert_snapshot!(
            TestReport::from_error("boom".to_string()).to_string(),
            @"error: boom"
        );
    }
}
