//! Infinite marquee loop

use super::reveal::Easing;

/// Constant-velocity horizontal loop over a duplicated strip
///
/// The strip holds its content twice, so translating by half of its scroll
/// width brings the second copy exactly where the first started.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarqueeLoopSpec {
    pub distance_px: f64,
    pub period_ms: f64,
}

impl MarqueeLoopSpec {
    /// Build from the measured scroll width of the duplicated strip
    ///
    /// Returns `None` when nothing measurable is rendered.
    pub fn from_measured_width(scroll_width: f64, period_ms: f64) -> Option<Self> {
        if !scroll_width.is_finite() || scroll_width <= 0.0 || period_ms <= 0.0 {
            return None;
        }
        Some(Self {
            distance_px: scroll_width / 2.0,
            period_ms,
        })
    }

    /// Translation reached at the end of every loop
    pub fn target_offset(&self) -> f64 {
        -self.distance_px
    }

    pub fn velocity_px_per_ms(&self) -> f64 {
        self.distance_px / self.period_ms
    }

    /// Horizontal offset `elapsed_ms` after the loop started
    pub fn offset_at(&self, elapsed_ms: f64) -> f64 {
        let phase = elapsed_ms.max(0.0).rem_euclid(self.period_ms) / self.period_ms;
        -self.distance_px * Easing::Linear.apply(phase)
    }
}
