//! Preloader sequencing
//!
//! [`PreloaderSequencer`] is the pure progress arithmetic; [`PreloadRun`]
//! drives it from a [`Scheduler`]: a fixed-interval tick until 100%, then a
//! short settle delay, then a single completion callback.
//!
//! ```text
//! Loading --(progress hits 100)--> Settling --(settle delay)--> Done
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use super::handle::CancelHandle;
use super::scheduler::Scheduler;
use super::timing::ChoreographyConfig;

/// Upper bound of the progress value
pub const PROGRESS_MAX: f64 = 100.0;

/// Slack for float accumulation when the last tick lands just under 100
const COMPLETION_EPSILON: f64 = 1e-9;

/// Where the preloader currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreloadPhase {
    /// Ticking towards 100%
    Loading,
    /// At 100%, waiting for the settle delay
    Settling,
    /// Loading flag has been cleared
    Done,
}

/// Result of one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Progress moved to the given value (below 100)
    Progressed(f64),
    /// Progress reached exactly 100; the tick timer must stop
    Completed,
    /// Tick arrived after completion and was ignored
    Ignored,
}

/// Progress state machine for the preloader
#[derive(Debug, Clone)]
pub struct PreloaderSequencer {
    increment: f64,
    ticks: u32,
    progress: f64,
    phase: PreloadPhase,
}

impl PreloaderSequencer {
    pub fn new(config: &ChoreographyConfig) -> Self {
        Self {
            increment: config.increment(),
            ticks: 0,
            progress: 0.0,
            phase: PreloadPhase::Loading,
        }
    }

    /// Apply one tick
    ///
    /// The value after `n` ticks is `min(100, n * increment)`; an overshooting
    /// final tick is clamped to exactly 100.
    pub fn advance(&mut self) -> TickOutcome {
        if self.phase != PreloadPhase::Loading {
            return TickOutcome::Ignored;
        }

        self.ticks += 1;
        let raw = f64::from(self.ticks) * self.increment;

        if raw >= PROGRESS_MAX - COMPLETION_EPSILON {
            self.progress = PROGRESS_MAX;
            self.phase = PreloadPhase::Settling;
            TickOutcome::Completed
        } else {
            self.progress = raw;
            TickOutcome::Progressed(raw)
        }
    }

    /// Leave the settling phase; returns `true` only the first time
    pub fn finish(&mut self) -> bool {
        if self.phase == PreloadPhase::Settling {
            self.phase = PreloadPhase::Done;
            true
        } else {
            false
        }
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn phase(&self) -> PreloadPhase {
        self.phase
    }

    /// Value of the loading flag
    pub fn is_loading(&self) -> bool {
        self.phase != PreloadPhase::Done
    }
}

/// Progress label shown under the bar, rounded to a whole percent
pub fn percent_label(progress: f64) -> u8 {
    progress.clamp(0.0, PROGRESS_MAX).round() as u8
}

struct RunState {
    sequencer: PreloaderSequencer,
    tick: Option<CancelHandle>,
    settle: Option<CancelHandle>,
}

/// A running preloader bound to a scheduler
///
/// Dropping the run (or calling [`PreloadRun::cancel`]) cancels the tick timer
/// and any pending settle timer; an interrupted preload is not resumed.
pub struct PreloadRun {
    state: Rc<RefCell<RunState>>,
}

impl PreloadRun {
    /// Start ticking
    ///
    /// `on_progress` receives every new progress value (the last one is exactly
    /// 100); `on_complete` runs once, `settle_delay_ms` after 100 is reached.
    pub fn start(
        scheduler: Rc<dyn Scheduler>,
        config: ChoreographyConfig,
        mut on_progress: impl FnMut(f64) + 'static,
        on_complete: impl FnOnce() + 'static,
    ) -> Self {
        let state = Rc::new(RefCell::new(RunState {
            sequencer: PreloaderSequencer::new(&config),
            tick: None,
            settle: None,
        }));

        let weak = Rc::downgrade(&state);
        let settle_scheduler = scheduler.clone();
        let mut on_complete = Some(on_complete);

        let tick = move || {
            let Some(state) = weak.upgrade() else {
                return;
            };

            let outcome = state.borrow_mut().sequencer.advance();
            match outcome {
                TickOutcome::Progressed(value) => on_progress(value),
                TickOutcome::Completed => {
                    on_progress(PROGRESS_MAX);

                    // Stop ticking before anything else can observe the state
                    let tick_handle = state.borrow_mut().tick.take();
                    drop(tick_handle);

                    let Some(on_complete) = on_complete.take() else {
                        return;
                    };
                    let weak_settle = Rc::downgrade(&state);
                    let settle = settle_scheduler.timeout(
                        config.settle_delay_ms,
                        Box::new(move || {
                            let Some(state) = weak_settle.upgrade() else {
                                return;
                            };
                            let finished = state.borrow_mut().sequencer.finish();
                            if finished {
                                on_complete();
                            }
                        }),
                    );
                    state.borrow_mut().settle = Some(settle);
                }
                TickOutcome::Ignored => {}
            }
        };

        let handle = scheduler.interval(config.tick_interval_ms, Box::new(tick));
        state.borrow_mut().tick = Some(handle);

        Self { state }
    }

    pub fn progress(&self) -> f64 {
        self.state.borrow().sequencer.progress()
    }

    pub fn phase(&self) -> PreloadPhase {
        self.state.borrow().sequencer.phase()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().sequencer.is_loading()
    }

    /// Cancel both timers; progress stays where it is
    pub fn cancel(&self) {
        let (tick, settle) = {
            let mut state = self.state.borrow_mut();
            (state.tick.take(), state.settle.take())
        };
        drop(tick);
        drop(settle);
    }
}

impl Drop for PreloadRun {
    fn drop(&mut self) {
        self.cancel();
    }
}
