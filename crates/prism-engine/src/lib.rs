//! Capability boundary for the external viewer engine.
//!
//! The viewer's rendering core lives outside this repository and is consumed
//! as an opaque compiled artifact. This crate defines the narrow trait facade
//! the harness talks to: module, engine instance, scene, window, interactor,
//! options, camera and image handles. Harness code never depends on the
//! concrete binding shape.
//!
//! The [`stub`] module provides a deterministic headless implementation of
//! the whole boundary, used by the harness's own tests and by the
//! testrunner's self-test mode.

pub mod stub;
mod traits;

pub use traits::{
    CameraHandle, CommandCallback, EngineImage, EngineInstance, EngineModule, InteractorHandle,
    ModuleLoader, OptionsHandle, SceneHandle, WindowHandle,
};

use thiserror::Error;

/// Errors crossing the engine boundary.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Module instantiation failed.
    #[error("Failed to load module: {0}")]
    Load(String),

    /// A file format no registered reader handles.
    #[error("Unsupported file format: {0}")]
    Unsupported(String),

    /// Image construction, encoding or comparison failed.
    #[error("Image error: {0}")]
    Image(String),

    /// An option key does not hold a value of the expected kind.
    #[error("Option error: {0}")]
    Option(String),

    /// Interactor command registration or dispatch failed.
    #[error("Command error: {0}")]
    Command(String),

    /// Error from the core utility layer.
    #[error(transparent)]
    Core(#[from] prism_core::CoreError),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Playback direction of the scene animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnimationDirection {
    /// Play frames in their authored order.
    #[default]
    Forward,
    /// Play frames in reverse order.
    Backward,
}

/// Logging verbosity of the loaded module.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// No output at all.
    Quiet,
    /// Errors only.
    Error,
    /// Errors and warnings.
    Warning,
    /// Informational output.
    #[default]
    Info,
    /// Full debug output.
    Debug,
}
