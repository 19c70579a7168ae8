//! The test-harness driver.
//!
//! One run is strictly sequential: module load, filesystem staging, scene
//! preparation, render, comparison, then termination. Any failing stage
//! aborts the whole run through the single outer error boundary; there is
//! no retry, no timeout and no partial recovery.

use std::fs;
use std::path::Path;

use tracing::{error, info};

use prism_engine::{
    EngineImage, EngineInstance, EngineModule, InteractorHandle, ModuleLoader, SceneHandle,
    WindowHandle,
};

use crate::report::emit_regenerated_baseline;
use crate::settings::RenderHookContext;
use crate::{
    ComparisonResult, HarnessConfig, HarnessError, RenderArgs, Result, TestReport, TestSettings,
    VirtualFs, BASELINE_VFS_PATH, ERROR_PREFIX, RESULT_VFS_PATH,
};

/// Log a fixed-prefix error line when `condition` is false.
///
/// Never panics and never halts the run: multiple assertion failures in
/// one run are all reported, and the run is judged failed by a log-scanning
/// step rather than by the harness itself.
pub fn assert_that(condition: bool, description: &str) {
    if !condition {
        error!("{ERROR_PREFIX}: {description}");
    }
}

/// Run a basic test: load the module, invoke the `run` hook, terminate.
///
/// No rendering or comparison occurs. A load rejection or hook failure is
/// caught here, logged with the fixed error prefix, and ends the run.
pub fn run_basic_test(loader: &dyn ModuleLoader, mut settings: TestSettings) -> TestReport {
    match basic_test(loader, &mut settings) {
        Ok(()) => TestReport::passed_basic(),
        Err(e) => {
            error!("{ERROR_PREFIX}: exception thrown \"{e}\"");
            TestReport::from_error(e.to_string())
        }
    }
}

fn basic_test(loader: &dyn ModuleLoader, settings: &mut TestSettings) -> Result<()> {
    let mut module = loader.load(&settings.surface)?;
    if let Some(run) = settings.run.as_mut() {
        run(module.as_mut())?;
    }
    Ok(())
}

/// Run a render test: stage the data and baseline files, render once, and
/// gate the similarity score against the configured threshold.
///
/// On a score above the threshold the rendered image is saved into the
/// virtual filesystem and emitted as a base64 PNG data URI for manual
/// baseline promotion. Any rejecting stage aborts the run through the
/// single outer boundary.
pub fn run_render_test(
    loader: &dyn ModuleLoader,
    mut settings: TestSettings,
    args: &RenderArgs,
    config: &HarnessConfig,
) -> TestReport {
    match render_test(loader, &mut settings, args, config) {
        Ok(comparison) => TestReport::from_comparison(comparison),
        Err(e) => {
            error!("{ERROR_PREFIX}: exception thrown \"{e}\"");
            TestReport::from_error(e.to_string())
        }
    }
}

fn render_test(
    loader: &dyn ModuleLoader,
    settings: &mut TestSettings,
    args: &RenderArgs,
    config: &HarnessConfig,
) -> Result<ComparisonResult> {
    let mut module = loader.load(&settings.surface)?;

    // Stage input bytes before the engine instance exists.
    stage_asset(
        module.fs(),
        &config.data_dir.join(&args.data),
        args.data.clone(),
    )?;
    stage_asset(
        module.fs(),
        &config.baseline_dir.join(&args.baseline),
        BASELINE_VFS_PATH,
    )?;

    module.autoload_readers();
    let mut engine = module.create_engine()?;

    let (width, height) = settings.surface.physical_size();
    engine.window().set_size(width, height);
    assert_that(
        engine.window().size() == (width, height),
        "window size does not match the render surface",
    );

    assert_that(
        engine.scene().supports(&args.data),
        "data file format is not supported",
    );

    if let Some(hook) = settings.run_before.as_mut() {
        hook(RenderHookContext {
            module: module.as_mut(),
            engine: engine.as_mut(),
        })?;
    }

    engine.scene().add(&args.data)?;

    if let Some(hook) = settings.run_after.as_mut() {
        hook(RenderHookContext {
            module: module.as_mut(),
            engine: engine.as_mut(),
        })?;
    }

    // First render, then start the interaction loop.
    engine.window().render();
    engine.interactor().start();

    let result = engine.window().render_to_image(true)?;
    let baseline = module.load_image(BASELINE_VFS_PATH)?;
    let score = result.compare(baseline.as_ref())?;

    let comparison = ComparisonResult {
        score,
        threshold: config.threshold,
    };
    if comparison.passed() {
        info!("Passed with similarity score {score}");
    } else {
        error!("{ERROR_PREFIX}: comparison failed with similarity score {score}");
        result.save(module.fs(), RESULT_VFS_PATH)?;
        let png = module.fs().read_file(RESULT_VFS_PATH)?;
        emit_regenerated_baseline(&png);
    }
    Ok(comparison)
}

/// Copy one on-disk asset into the module's virtual filesystem.
fn stage_asset(fs: &VirtualFs, disk_path: &Path, vfs_path: impl Into<String>) -> Result<()> {
    let bytes = read_asset(disk_path)?;
    fs.write_file(vfs_path, bytes);
    Ok(())
}

fn read_asset(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| HarnessError::Asset {
        path: path.display().to_string(),
        source,
    })
}
