//! TOML test manifest.
//!
//! A manifest describes a render surface, the asset roots, and a list of
//! test cases to run against them.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;

use prism_core::RenderSurface;
use prism_harness::HarnessConfig;

/// Top-level manifest document.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Render surface every case is loaded against.
    #[serde(default)]
    pub surface: SurfaceSpec,
    /// Asset roots.
    #[serde(default)]
    pub paths: PathsSpec,
    /// Test cases, in execution order.
    #[serde(default, rename = "test")]
    pub tests: Vec<TestSpec>,
}

impl Manifest {
    /// Parse a manifest from TOML text.
    pub fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// The render surface the manifest describes.
    #[must_use]
    pub fn surface(&self) -> RenderSurface {
        RenderSurface::new(self.surface.logical_width, self.surface.logical_height)
            .with_scale_factor(self.surface.scale_factor)
    }

    /// Harness configuration from the manifest's asset roots.
    #[must_use]
    pub fn harness_config(&self) -> HarnessConfig {
        HarnessConfig::new()
            .with_data_dir(self.paths.data_dir.clone())
            .with_baseline_dir(self.paths.baseline_dir.clone())
    }
}

/// Render-surface section.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SurfaceSpec {
    /// Logical canvas width.
    pub logical_width: u32,
    /// Logical canvas height.
    pub logical_height: u32,
    /// Device pixel ratio.
    #[serde(default = "default_scale_factor")]
    pub scale_factor: f64,
}

impl Default for SurfaceSpec {
    fn default() -> Self {
        Self {
            logical_width: 300,
            logical_height: 300,
            scale_factor: 1.0,
        }
    }
}

const fn default_scale_factor() -> f64 {
    1.0
}

/// Asset-root section.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathsSpec {
    /// Local root holding data files.
    pub data_dir: PathBuf,
    /// Local root holding baseline images.
    pub baseline_dir: PathBuf,
}

impl Default for PathsSpec {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("testing/data"),
            baseline_dir: PathBuf::from("testing/baselines"),
        }
    }
}

/// Test case kind.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TestKind {
    /// Load the module and run hooks only.
    Basic,
    /// Full render-and-compare run.
    #[default]
    Render,
}

/// One test case.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TestSpec {
    /// Case name, used in the summary.
    pub name: String,
    /// Case kind; defaults to a render test.
    #[serde(default)]
    pub kind: TestKind,
    /// Data file, relative to the data root. Required for render tests.
    pub data: Option<String>,
    /// Baseline image, relative to the baseline root. Required for render
    /// tests.
    pub baseline: Option<String>,
    /// Options applied before content is loaded.
    #[serde(default)]
    pub options: BTreeMap<String, String>,
    /// Per-case similarity threshold override.
    pub threshold: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_manifest() {
        let manifest = Manifest::parse(
            r##"
            [surface]
            logical_width = 640
            logical_height = 480
            scale_factor = 2.0

            [paths]
            data_dir = "assets/data"
            baseline_dir = "assets/baselines"

            [[test]]
            name = "glb-defaults"
            data = "f3d.glb"
            baseline = "TestRender.png"

            [[test]]
            name = "vtp-options"
            kind = "render"
            data = "f3d.vtp"
            baseline = "TestOptions.png"
            threshold = 0.1

            [test.options]
            "render.background.color" = "#000000"
            "ui.axis" = "true"

            [[test]]
            name = "module-smoke"
            kind = "basic"
            "##,
        )
        .unwrap();

        assert_eq!(manifest.surface().physical_size(), (1280, 960));
        assert_eq!(
            manifest.harness_config().data_dir,
            PathBuf::from("assets/data")
        );
        assert_eq!(manifest.tests.len(), 3);
        assert_eq!(manifest.tests[0].kind, TestKind::Render);
        assert_eq!(manifest.tests[1].threshold, Some(0.1));
        assert_eq!(
            manifest.tests[1].options.get("ui.axis").map(String::as_str),
            Some("true")
        );
        assert_eq!(manifest.tests[2].kind, TestKind::Basic);
        assert!(manifest.tests[2].data.is_none());
    }

    #[test]
    fn empty_manifest_uses_defaults() {
        let manifest = Manifest::parse("").unwrap();
        assert_eq!(manifest.surface().physical_size(), (300, 300));
        assert!(manifest.tests.is_empty());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(Manifest::parse("[[test]]\nname = \"x\"\nfoo = 1\n").is_err());
    }
}
