//! Core types and utilities for the Prism test harness.
//!
//! This crate provides the foundational pieces shared by the harness stack:
//! - Error types
//! - Numeric comparison helpers used by test assertions
//! - The render-surface abstraction that replaces ambient window state

pub mod error;
pub mod math;
pub mod surface;

pub use error::{CoreError, Result};
pub use math::{num_array_equals, num_array_equals_default};
pub use surface::RenderSurface;
