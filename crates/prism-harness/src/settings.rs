//! Declarative description of one test case.

use std::path::PathBuf;

use prism_core::RenderSurface;
use prism_engine::{EngineInstance, EngineModule};

use crate::{Result, DEFAULT_THRESHOLD};

/// Hook invoked by a basic test with the loaded module handle.
pub type BasicHook = Box<dyn FnMut(&mut dyn EngineModule) -> Result<()>>;

/// Hook invoked by a render test before or after content is loaded.
pub type RenderHook = Box<dyn FnMut(RenderHookContext<'_>) -> Result<()>>;

/// Handles a render-test hook may act on.
///
/// `run_before` hooks typically mutate options prior to loading content;
/// `run_after` hooks perform post-load assertions and camera manipulation.
pub struct RenderHookContext<'a> {
    /// The loaded module.
    pub module: &'a mut dyn EngineModule,
    /// The single engine instance of this run.
    pub engine: &'a mut dyn EngineInstance,
}

/// Settings for one test case. Constructed by the test script, consumed
/// once by the driver.
#[derive(Default)]
pub struct TestSettings {
    /// The render surface the module is loaded against.
    pub surface: RenderSurface,
    /// Hook for basic tests.
    pub run: Option<BasicHook>,
    /// Render-test hook invoked before content is added to the scene.
    pub run_before: Option<RenderHook>,
    /// Render-test hook invoked after content is added to the scene.
    pub run_after: Option<RenderHook>,
}

impl TestSettings {
    /// Settings with the given surface and no hooks.
    #[must_use]
    pub fn new(surface: RenderSurface) -> Self {
        Self {
            surface,
            ..Self::default()
        }
    }

    /// Set the basic-test hook.
    #[must_use]
    pub fn with_run(
        mut self,
        hook: impl FnMut(&mut dyn EngineModule) -> Result<()> + 'static,
    ) -> Self {
        self.run = Some(Box::new(hook));
        self
    }

    /// Set the pre-load hook.
    #[must_use]
    pub fn with_run_before(
        mut self,
        hook: impl FnMut(RenderHookContext<'_>) -> Result<()> + 'static,
    ) -> Self {
        self.run_before = Some(Box::new(hook));
        self
    }

    /// Set the post-load hook.
    #[must_use]
    pub fn with_run_after(
        mut self,
        hook: impl FnMut(RenderHookContext<'_>) -> Result<()> + 'static,
    ) -> Self {
        self.run_after = Some(Box::new(hook));
        self
    }
}

/// Input files of a render test, relative to the configured asset roots.
#[derive(Clone, Debug)]
pub struct RenderArgs {
    /// Data file under the testing-data root.
    pub data: String,
    /// Baseline image under the testing-baselines root.
    pub baseline: String,
}

impl RenderArgs {
    /// Create render-test arguments.
    pub fn new(data: impl Into<String>, baseline: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            baseline: baseline.into(),
        }
    }
}

/// Harness configuration: asset roots and the similarity threshold.
#[derive(Clone, Debug)]
pub struct HarnessConfig {
    /// Local root holding data files.
    pub data_dir: PathBuf,
    /// Local root holding baseline images.
    pub baseline_dir: PathBuf,
    /// Similarity-score threshold; at or below passes.
    pub threshold: f64,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("testing/data"),
            baseline_dir: PathBuf::from("testing/baselines"),
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl HarnessConfig {
    /// Default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the data-file root.
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Set the baseline-image root.
    #[must_use]
    pub fn with_baseline_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.baseline_dir = dir.into();
        self
    }

    /// Set the similarity threshold.
    #[must_use]
    pub const fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }
}
