//! One-shot scroll threshold detection

/// Fires once when a region's top edge first reaches the trigger line
///
/// The trigger line sits `threshold * viewport_height` pixels below the top of
/// the viewport. A region already above the line when first checked fires on
/// that first check; after firing, further crossings are ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTrigger {
    threshold: f64,
    fired: bool,
}

impl ScrollTrigger {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            fired: false,
        }
    }

    /// Y coordinate of the trigger line within the viewport
    pub fn trigger_line(&self, viewport_height: f64) -> f64 {
        viewport_height * self.threshold
    }

    /// Observer root margin that shrinks the viewport to end at the trigger
    /// line, e.g. `0px 0px -20% 0px` for a threshold of 0.8
    pub fn root_margin(&self) -> String {
        let cut = ((1.0 - self.threshold.clamp(0.0, 1.0)) * 100.0).round();
        format!("0px 0px -{cut}% 0px")
    }

    /// Feed the region's current top edge (viewport coordinates)
    ///
    /// Returns `true` exactly once, on the first call where the top edge is at
    /// or above the trigger line.
    pub fn check(&mut self, region_top: f64, viewport_height: f64) -> bool {
        if self.fired {
            return false;
        }
        if region_top <= self.trigger_line(viewport_height) {
            self.fired = true;
            return true;
        }
        false
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}
