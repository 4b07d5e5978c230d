// Copyright 2025 the Formlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use formlay_view::DEFAULT_WHEEL_DIVISOR;

/// Startup parameters of a [`crate::Surface`].
///
/// ```
/// use formlay_surface::SurfaceConfig;
///
/// // A 1920px wide screen scales backgrounds to 1152px.
/// let config = SurfaceConfig::for_screen_width(1920.0).with_debug(true);
/// assert_eq!(config.fixed_width, 1152.0);
/// assert_eq!(config.wheel_divisor, 3.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceConfig {
    /// Width the background image is scaled to, in pixels.
    pub fixed_width: f64,
    /// Divisor applied to wheel angle deltas.
    pub wheel_divisor: f64,
    /// Width of the scroll indicator strip along the right edge.
    pub indicator_width: f64,
    /// Whether the debug overlay starts enabled.
    pub debug: bool,
}

impl SurfaceConfig {
    /// Default background width.
    pub const DEFAULT_FIXED_WIDTH: f64 = 800.0;
    /// Default scroll indicator width.
    pub const DEFAULT_INDICATOR_WIDTH: f64 = 18.0;

    /// Configuration that scales backgrounds to three fifths of
    /// `screen_width`, rounded down.
    #[must_use]
    pub fn for_screen_width(screen_width: f64) -> Self {
        Self::default().with_fixed_width((screen_width * 3.0 / 5.0).floor())
    }

    /// Sets the background width.
    #[must_use]
    pub fn with_fixed_width(mut self, fixed_width: f64) -> Self {
        self.fixed_width = fixed_width;
        self
    }

    /// Sets the wheel divisor.
    #[must_use]
    pub fn with_wheel_divisor(mut self, wheel_divisor: f64) -> Self {
        self.wheel_divisor = wheel_divisor;
        self
    }

    /// Sets the scroll indicator width.
    #[must_use]
    pub fn with_indicator_width(mut self, indicator_width: f64) -> Self {
        self.indicator_width = indicator_width;
        self
    }

    /// Sets whether the debug overlay starts enabled.
    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            fixed_width: Self::DEFAULT_FIXED_WIDTH,
            wheel_divisor: DEFAULT_WHEEL_DIVISOR,
            indicator_width: Self::DEFAULT_INDICATOR_WIDTH,
            debug: false,
        }
    }
}
