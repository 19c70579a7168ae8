//! Visual-regression test harness driver.
//!
//! Executes one declarative test case against a loaded viewer module:
//! stages input and baseline files into the module's virtual filesystem,
//! drives a render, compares the output against the baseline by similarity
//! score, and reports pass/fail. On mismatch the freshly rendered image is
//! emitted as a base64 PNG data URI so a human can promote it to the new
//! baseline.
//!
//! Failures are logged with the fixed [`ERROR_PREFIX`]; a CI step scanning
//! the log stream for that prefix converts assertion failures into a build
//! failure. The driver itself only folds the image-comparison branch into
//! its report.

mod driver;
mod report;
mod settings;

pub use driver::{assert_that, run_basic_test, run_render_test};
pub use report::{ComparisonResult, TestOutcome, TestReport};
pub use settings::{
    BasicHook, HarnessConfig, RenderArgs, RenderHook, RenderHookContext, TestSettings,
};

pub use prism_core::{num_array_equals, num_array_equals_default, RenderSurface};
pub use prism_vfs::VirtualFs;

use thiserror::Error;

/// Fixed prefix marking every harness error line in the log stream.
pub const ERROR_PREFIX: &str = "PRISM_ERROR";

/// Marker preceding a regenerated-baseline data URI in the log stream.
pub const BASELINE_MARKER: &str = "New baseline png file:";

/// Similarity-score threshold: at or below passes, lower is more similar.
pub const DEFAULT_THRESHOLD: f64 = 0.05;

/// Path the baseline image is staged at inside the virtual filesystem.
pub const BASELINE_VFS_PATH: &str = "/baseline.png";

/// Path the rendered image is saved at on comparison failure.
pub const RESULT_VFS_PATH: &str = "/result.png";

/// Errors aborting a harness run.
#[derive(Error, Debug)]
pub enum HarnessError {
    /// Engine-boundary failure.
    #[error(transparent)]
    Engine(#[from] prism_engine::EngineError),

    /// Core utility failure.
    #[error(transparent)]
    Core(#[from] prism_core::CoreError),

    /// Local asset could not be read.
    #[error("Failed to read asset {path}: {source}")]
    Asset {
        /// Path of the asset on the local filesystem.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failure reported by a user-supplied hook.
    #[error("Hook failed: {0}")]
    Hook(String),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, HarnessError>;
