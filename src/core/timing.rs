//! Build-time timing constants for the preloader and the reveal choreography

/// Total wall-clock time of the preloader progress bar
pub const PRELOAD_DURATION_MS: u32 = 3000;

/// Interval between two progress ticks
pub const TICK_INTERVAL_MS: u32 = 30;

/// Hold time between reaching 100% and hiding the preloader
pub const SETTLE_DELAY_MS: u32 = 200;

/// Fraction of the viewport height (from the top) a region's top edge must cross
pub const SCROLL_THRESHOLD: f64 = 0.8;

/// One full marquee loop
pub const MARQUEE_PERIOD_MS: f64 = 20_000.0;

/// Timing parameters shared by the preloader and the choreographer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChoreographyConfig {
    pub preload_duration_ms: u32,
    pub tick_interval_ms: u32,
    pub settle_delay_ms: u32,
    pub scroll_threshold: f64,
    pub marquee_period_ms: f64,
}

impl Default for ChoreographyConfig {
    fn default() -> Self {
        Self {
            preload_duration_ms: PRELOAD_DURATION_MS,
            tick_interval_ms: TICK_INTERVAL_MS,
            settle_delay_ms: SETTLE_DELAY_MS,
            scroll_threshold: SCROLL_THRESHOLD,
            marquee_period_ms: MARQUEE_PERIOD_MS,
        }
    }
}

impl ChoreographyConfig {
    /// Set the preload duration
    pub fn preload_duration(mut self, ms: u32) -> Self {
        self.preload_duration_ms = ms;
        self
    }

    /// Set the tick interval
    pub fn tick_interval(mut self, ms: u32) -> Self {
        self.tick_interval_ms = ms;
        self
    }

    /// Set the settle delay
    pub fn settle_delay(mut self, ms: u32) -> Self {
        self.settle_delay_ms = ms;
        self
    }

    /// Number of ticks the preload is spread over (`duration / interval`)
    pub fn steps(&self) -> f64 {
        f64::from(self.preload_duration_ms) / f64::from(self.tick_interval_ms.max(1))
    }

    /// Progress added by one tick
    pub fn increment(&self) -> f64 {
        let steps = self.steps();
        if steps <= 0.0 { 100.0 } else { 100.0 / steps }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_gives_hundred_steps() {
        let config = ChoreographyConfig::default();
        assert_eq!(config.steps(), 100.0);
        assert_eq!(config.increment(), 1.0);
    }

    #[test]
    fn test_zero_duration_completes_in_one_tick() {
        let config = ChoreographyConfig::default().preload_duration(0);
        assert_eq!(config.increment(), 100.0);
    }

    #[test]
    fn test_uneven_interval() {
        let config = ChoreographyConfig::default().tick_interval(40);
        assert_eq!(config.steps(), 75.0);
        assert!((config.increment() - 100.0 / 75.0).abs() < f64::EPSILON);
    }
}
