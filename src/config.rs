//! Timing configuration for the cosmetic effects.
//!
//! Every delay is in milliseconds. The defaults match the CSS transition
//! and animation durations in the page's stylesheet.

const DEFAULT_MAX_INCREMENT: f64 = 15.0;

fn usable_increment(max: f64) -> bool {
    max.is_finite() && max > 0.0
}

/// Delays and limits used by the animation, modal and progress machines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timings {
    /// Lifetime of the `pop-animation` class on the JS box.
    pub pop_ms: u32,
    /// Lifetime of the `color-cycle` class on the JS box.
    pub color_cycle_ms: u32,
    /// Lifetime of the scale-up transform on a clicked animated box.
    pub press_ms: u32,
    /// Lifetime of the pulse animation on the secondary button.
    pub pulse_ms: u32,
    /// Gap between setting `display: flex` and adding `show`.
    pub modal_show_ms: u32,
    /// Gap between removing `show` and setting `display: none`.
    pub modal_hide_ms: u32,
    /// Gap between resetting the progress bar and the first tick timer.
    pub progress_start_ms: u32,
    /// Interval of the repeating progress timer.
    pub progress_tick_ms: u32,
    /// Time the completed bar stays visible before resetting.
    pub progress_reset_ms: u32,
    /// Upper bound (exclusive) of a single progress increment, in percent.
    pub progress_max_increment: f64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            pop_ms: 800,
            color_cycle_ms: 2000,
            press_ms: 200,
            pulse_ms: 600,
            modal_show_ms: 10,
            modal_hide_ms: 300,
            progress_start_ms: 100,
            progress_tick_ms: 200,
            progress_reset_ms: 2000,
            progress_max_increment: DEFAULT_MAX_INCREMENT,
        }
    }
}

impl Timings {
    pub fn with_progress_tick(mut self, tick_ms: u32) -> Self {
        self.progress_tick_ms = tick_ms.max(1);
        self
    }

    pub fn with_max_increment(mut self, max: f64) -> Self {
        if usable_increment(max) {
            self.progress_max_increment = max;
        } else {
            tracing::warn!(max, "ignoring non-positive progress increment");
        }
        self
    }

    /// Increment bound the progress machine actually uses. A zero,
    /// negative or non-finite `progress_max_increment` falls back to the
    /// default so a run always finishes.
    pub fn max_increment(&self) -> f64 {
        if usable_increment(self.progress_max_increment) {
            self.progress_max_increment
        } else {
            DEFAULT_MAX_INCREMENT
        }
    }
}
