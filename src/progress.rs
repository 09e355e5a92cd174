//! Simulated loading progress.
//!
//! A run goes `Idle -> Starting -> Running -> Complete -> Idle`:
//!
//! - [`Progress::start`] resets the bar and asks for a short delay
//! - [`Progress::begin`] turns on the fill animation; the caller then
//!   starts a repeating timer that calls [`Progress::tick`]
//! - a tick that reaches 100 completes the run, stops the repeating
//!   timer and asks for one more delay before [`Progress::reset`]
//!
//! Every run carries a generation. Restarting mid-run bumps it, and any
//! timer still holding the old generation gets [`Tick::Stale`] back so
//! it can cancel itself.

use rand::Rng;

use crate::config::Timings;

pub const COMPLETE: f64 = 100.0;

pub const READY_LABEL: &str = "Ready to load...";
pub const LOADING_LABEL: &str = "Loading...";
pub const COMPLETE_LABEL: &str = "Complete! 🎉";

/// Class that runs the fill's CSS animation.
pub const ANIMATE_CLASS: &str = "animate";

/// Source of random progress increments.
pub trait IncrementSource {
    /// A value in `[0, max)`.
    fn next_increment(&mut self, max: f64) -> f64;
}

/// Increments drawn from a `rand` generator. An empty or unbounded range
/// yields 0.
pub struct RandIncrements<R>(pub R);

impl<R: Rng> IncrementSource for RandIncrements<R> {
    fn next_increment(&mut self, max: f64) -> f64 {
        if max.is_finite() && max > 0.0 {
            self.0.gen_range(0.0..max)
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressPhase {
    Idle,
    Starting,
    Running,
    Complete,
}

/// A delay the caller must wait before calling back with `generation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressTimer {
    pub generation: u64,
    pub delay_ms: u32,
}

/// Result of one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tick {
    /// Still loading; keep the repeating timer.
    Advanced(f64),
    /// Reached 100; stop the repeating timer and schedule the reset.
    Completed(ProgressTimer),
    /// The tick belongs to an abandoned run; stop that timer.
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    phase: ProgressPhase,
    value: f64,
    ticks: u32,
    generation: u64,
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress {
    pub fn new() -> Self {
        Self {
            phase: ProgressPhase::Idle,
            value: 0.0,
            ticks: 0,
            generation: 0,
        }
    }

    pub fn phase(&self) -> ProgressPhase {
        self.phase
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the fill carries the `animate` class.
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, ProgressPhase::Running | ProgressPhase::Complete)
    }

    /// Text for the label next to the bar.
    pub fn label(&self) -> String {
        match self.phase {
            ProgressPhase::Idle => READY_LABEL.to_string(),
            ProgressPhase::Starting => LOADING_LABEL.to_string(),
            ProgressPhase::Running if self.ticks == 0 => LOADING_LABEL.to_string(),
            ProgressPhase::Running => format!("{} {}%", LOADING_LABEL, self.value.round()),
            ProgressPhase::Complete => COMPLETE_LABEL.to_string(),
        }
    }

    /// Reset the bar and start a new run, abandoning any run in flight.
    pub fn start(&mut self, timings: &Timings) -> ProgressTimer {
        if self.phase != ProgressPhase::Idle {
            tracing::debug!(phase = ?self.phase, "restarting progress run");
        }
        self.generation += 1;
        self.phase = ProgressPhase::Starting;
        self.value = 0.0;
        self.ticks = 0;
        ProgressTimer {
            generation: self.generation,
            delay_ms: timings.progress_start_ms,
        }
    }

    /// Start delay elapsed. Returns the repeating tick timer, or `None`
    /// if the run was abandoned.
    pub fn begin(&mut self, generation: u64, timings: &Timings) -> Option<ProgressTimer> {
        if generation != self.generation || self.phase != ProgressPhase::Starting {
            return None;
        }
        self.phase = ProgressPhase::Running;
        Some(ProgressTimer {
            generation,
            delay_ms: timings.progress_tick_ms,
        })
    }

    pub fn tick(
        &mut self,
        generation: u64,
        source: &mut impl IncrementSource,
        timings: &Timings,
    ) -> Tick {
        if generation != self.generation || self.phase != ProgressPhase::Running {
            return Tick::Stale;
        }
        let max = timings.max_increment();
        let increment = source.next_increment(max).clamp(0.0, max);
        self.ticks += 1;
        self.value = (self.value + increment).min(COMPLETE);

        if self.value >= COMPLETE {
            self.phase = ProgressPhase::Complete;
            tracing::info!(ticks = self.ticks, "progress complete");
            Tick::Completed(ProgressTimer {
                generation,
                delay_ms: timings.progress_reset_ms,
            })
        } else {
            Tick::Advanced(self.value)
        }
    }

    /// Reset delay after completion elapsed.
    pub fn reset(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.phase != ProgressPhase::Complete {
            return false;
        }
        self.phase = ProgressPhase::Idle;
        self.value = 0.0;
        self.ticks = 0;
        true
    }
}

/// One observable moment of a simulated run.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub at_ms: u64,
    pub value: f64,
    pub label: String,
    pub animating: bool,
}

fn snapshot(progress: &Progress, at_ms: u64) -> Frame {
    Frame {
        at_ms,
        value: progress.value(),
        label: progress.label(),
        animating: progress.is_animating(),
    }
}

/// Run a whole simulation on a virtual clock.
///
/// Returns every frame from the initial reset through the final reset, or
/// stops after `max_ticks` ticks if the run has not completed by then.
pub fn simulate(
    source: &mut impl IncrementSource,
    timings: &Timings,
    max_ticks: u32,
) -> Vec<Frame> {
    let mut progress = Progress::new();
    let mut now: u64 = 0;
    let mut frames = Vec::new();

    let start = progress.start(timings);
    frames.push(snapshot(&progress, now));

    now += u64::from(start.delay_ms);
    let Some(repeat) = progress.begin(start.generation, timings) else {
        return frames;
    };
    frames.push(snapshot(&progress, now));

    for _ in 0..max_ticks {
        now += u64::from(repeat.delay_ms);
        match progress.tick(repeat.generation, source, timings) {
            Tick::Advanced(_) => frames.push(snapshot(&progress, now)),
            Tick::Completed(reset) => {
                frames.push(snapshot(&progress, now));
                now += u64::from(reset.delay_ms);
                progress.reset(reset.generation);
                frames.push(snapshot(&progress, now));
                break;
            }
            Tick::Stale => break,
        }
    }
    frames
}
