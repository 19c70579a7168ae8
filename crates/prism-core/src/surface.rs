//! Render-surface abstraction.
//!
//! The harness never reads ambient window state. A [`RenderSurface`] is
//! constructed once per test run from the logical canvas size and the
//! device scale factor, then passed explicitly to the module loader.

/// The pixel target the external engine draws into.
///
/// Logical size times scale factor gives the physical size the engine
/// window must report after resizing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderSurface {
    /// Logical width in CSS-pixel-like units.
    pub logical_width: u32,
    /// Logical height in CSS-pixel-like units.
    pub logical_height: u32,
    /// Device pixel ratio (1.0 on standard displays, 2.0 on HiDPI).
    pub scale_factor: f64,
}

impl RenderSurface {
    /// Create a surface with the given logical size and a scale factor of 1.
    #[must_use]
    pub const fn new(logical_width: u32, logical_height: u32) -> Self {
        Self {
            logical_width,
            logical_height,
            scale_factor: 1.0,
        }
    }

    /// Set the device pixel ratio.
    #[must_use]
    pub const fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Physical pixel size: logical size scaled by the device pixel ratio,
    /// rounded to the nearest whole pixel.
    #[must_use]
    pub fn physical_size(&self) -> (u32, u32) {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let scale = |v: u32| (f64::from(v) * self.scale_factor).round() as u32;
        (scale(self.logical_width), scale(self.logical_height))
    }
}

impl Default for RenderSurface {
    fn default() -> Self {
        Self::new(300, 300)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn physical_size_at_unit_scale() {
        let surface = RenderSurface::new(640, 480);
        assert_eq!(surface.physical_size(), (640, 480));
    }

    #[test]
    fn physical_size_scales_and_rounds() {
        let surface = RenderSurface::new(300, 200).with_scale_factor(2.0);
        assert_eq!(surface.physical_size(), (600, 400));

        let surface = RenderSurface::new(301, 201).with_scale_factor(1.5);
        assert_eq!(surface.physical_size(), (452, 302));
    }
}
