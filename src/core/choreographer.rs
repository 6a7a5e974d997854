//! Reveal choreography
//!
//! A [`Choreographer`] owns exactly one [`AnimationContext`] while active.
//! Every observer, track and frame loop it registers lives in that context,
//! and tearing the context down is the single point of release.
//!
//! ```text
//! Idle --activate()--> Active --deactivate()/drop--> TornDown
//! ```
//!
//! Scroll observers only hold a weak reference to the context, so a callback
//! that outlives the teardown has nothing left to act on.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use leptos::logging::{debug_warn, log};

use super::handle::CancelHandle;
use super::marquee::MarqueeLoopSpec;
use super::reveal::{
    Region, RevealAnimationSpec, TargetGroup, Trigger, VisualState, reveal_catalogue,
    scroll_regions,
};
use super::scheduler::Scheduler;
use super::stage::Stage;
use super::timing::ChoreographyConfig;

/// Lifecycle misuse of a choreographer
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ChoreographyError {
    #[error("choreography is already active")]
    AlreadyActive,

    #[error("choreography was torn down; a fresh instance is required")]
    TornDown,
}

/// Lifecycle state of a choreographer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoreographyState {
    Idle,
    Active,
    TornDown,
}

/// What a successful activation registered
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ActivationReport {
    /// Specs playing right away
    pub immediate: usize,
    /// Specs waiting for their region to scroll into place
    pub scroll_bound: usize,
    /// Region observers registered
    pub observers: usize,
    /// Whether the marquee loop is running
    pub marquee: bool,
    /// Groups left out because nothing was rendered for them
    pub skipped: Vec<TargetGroup>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum TrackPhase {
    /// Waiting for its region's scroll trigger
    Armed,
    /// Triggered, starts on the next frame
    Pending,
    Playing { started_at: f64 },
    Finished,
}

#[derive(Debug)]
struct Track {
    spec: RevealAnimationSpec,
    elements: usize,
    phase: TrackPhase,
}

#[derive(Debug)]
struct MarqueeTrack {
    spec: MarqueeLoopSpec,
    started_at: Option<f64>,
}

/// Everything one activation registered
#[derive(Debug, Default)]
pub struct AnimationContext {
    tracks: Vec<Track>,
    marquee: Option<MarqueeTrack>,
    observers: Vec<(Region, CancelHandle)>,
    frames: Option<CancelHandle>,
    released: bool,
}

impl AnimationContext {
    /// Move every armed track of `region` to pending and drop its observer
    fn release_region(&mut self, region: Region) {
        if self.released {
            return;
        }
        for track in &mut self.tracks {
            if track.phase == TrackPhase::Armed && track.spec.scroll_region() == Some(region) {
                track.phase = TrackPhase::Pending;
            }
        }
        self.observers.retain(|(observed, _)| *observed != region);
    }

    /// Whether any track of `region` has been triggered already
    fn region_triggered(&self, region: Region) -> bool {
        self.tracks.iter().any(|track| {
            track.spec.scroll_region() == Some(region) && track.phase != TrackPhase::Armed
        })
    }

    /// Advance every live track to `now_ms` and write the result to the stage
    fn frame(&mut self, now_ms: f64, stage: &dyn Stage) {
        if self.released {
            return;
        }

        for track in &mut self.tracks {
            let elapsed = match track.phase {
                TrackPhase::Armed | TrackPhase::Finished => continue,
                TrackPhase::Pending => {
                    track.phase = TrackPhase::Playing { started_at: now_ms };
                    0.0
                }
                TrackPhase::Playing { started_at } => now_ms - started_at,
            };

            for index in 0..track.elements {
                stage.apply(track.spec.target, index, &track.spec.sample(index, elapsed));
            }

            if elapsed >= track.spec.total_ms(track.elements) {
                track.phase = TrackPhase::Finished;
            }
        }

        if let Some(marquee) = &mut self.marquee {
            let started_at = *marquee.started_at.get_or_insert(now_ms);
            let offset = marquee.spec.offset_at(now_ms - started_at);
            stage.apply(
                TargetGroup::MarqueeContent,
                0,
                &VisualState::REST.with_x(offset),
            );
        }
    }

    fn running_animations(&self) -> usize {
        let reveals = self
            .tracks
            .iter()
            .filter(|track| track.phase != TrackPhase::Finished)
            .count();
        reveals + usize::from(self.marquee.is_some())
    }

    /// Cancel every registration; nothing runs afterwards
    fn release(&mut self) {
        self.released = true;
        self.observers.clear();
        self.frames = None;
        self.tracks.clear();
        self.marquee = None;
    }
}

/// Registers and owns the page's reveal animations
pub struct Choreographer {
    stage: Rc<dyn Stage>,
    scheduler: Rc<dyn Scheduler>,
    config: ChoreographyConfig,
    state: ChoreographyState,
    context: Option<Rc<RefCell<AnimationContext>>>,
}

impl Choreographer {
    pub fn new(
        stage: Rc<dyn Stage>,
        scheduler: Rc<dyn Scheduler>,
        config: ChoreographyConfig,
    ) -> Self {
        Self {
            stage,
            scheduler,
            config,
            state: ChoreographyState::Idle,
            context: None,
        }
    }

    pub fn state(&self) -> ChoreographyState {
        self.state
    }

    /// Register the whole reveal batch, the marquee loop and the frame driver
    ///
    /// Only an idle choreographer can activate; any other state is refused and
    /// registers nothing.
    pub fn activate(&mut self) -> Result<ActivationReport, ChoreographyError> {
        match self.state {
            ChoreographyState::Idle => {}
            ChoreographyState::Active => return Err(ChoreographyError::AlreadyActive),
            ChoreographyState::TornDown => return Err(ChoreographyError::TornDown),
        }

        let context = Rc::new(RefCell::new(AnimationContext::default()));
        let mut report = ActivationReport::default();

        // Marquee
        let marquee = self
            .stage
            .measure_scroll_width(TargetGroup::MarqueeContent)
            .and_then(|width| MarqueeLoopSpec::from_measured_width(width, self.config.marquee_period_ms));
        match marquee {
            Some(spec) => {
                context.borrow_mut().marquee = Some(MarqueeTrack {
                    spec,
                    started_at: None,
                });
                report.marquee = true;
            }
            None => {
                debug_warn!("marquee strip not measurable, loop skipped");
                report.skipped.push(TargetGroup::MarqueeContent);
            }
        }

        // Reveal tracks, skipping groups with nothing rendered
        let specs = reveal_catalogue(&self.config);
        for spec in &specs {
            let elements = self.stage.element_count(spec.target);
            if elements == 0 {
                debug_warn!("reveal target {:?} not rendered, skipped", spec.target);
                report.skipped.push(spec.target);
                continue;
            }
            let phase = match spec.trigger {
                Trigger::Immediate => TrackPhase::Pending,
                Trigger::Scroll { .. } => TrackPhase::Armed,
            };
            context.borrow_mut().tracks.push(Track {
                spec: *spec,
                elements,
                phase,
            });
        }

        // One observer per region that still has armed tracks. The context is
        // not borrowed across `observe_region`, which may fire synchronously.
        for region in scroll_regions(&specs) {
            let has_tracks = context
                .borrow()
                .tracks
                .iter()
                .any(|track| track.spec.scroll_region() == Some(region));
            if !has_tracks {
                continue;
            }

            let weak: Weak<RefCell<AnimationContext>> = Rc::downgrade(&context);
            let on_enter = Box::new(move || {
                if let Some(context) = weak.upgrade() {
                    context.borrow_mut().release_region(region);
                }
            });

            match self
                .stage
                .observe_region(region, self.config.scroll_threshold, on_enter)
            {
                Some(handle) => {
                    let mut context = context.borrow_mut();
                    if !context.region_triggered(region) {
                        context.observers.push((region, handle));
                    }
                    report.observers += 1;
                }
                None => {
                    debug_warn!("region {:?} not observable, its reveals skipped", region);
                    let mut context = context.borrow_mut();
                    context.tracks.retain(|track| {
                        if track.spec.scroll_region() == Some(region) {
                            report.skipped.push(track.spec.target);
                            false
                        } else {
                            true
                        }
                    });
                }
            }
        }

        // Hold every remaining target at its starting offset until it plays
        {
            let context = context.borrow();
            for track in &context.tracks {
                for index in 0..track.elements {
                    self.stage.apply(track.spec.target, index, &track.spec.from);
                }
                match track.spec.trigger {
                    Trigger::Immediate => report.immediate += 1,
                    Trigger::Scroll { .. } => report.scroll_bound += 1,
                }
            }
        }

        let weak = Rc::downgrade(&context);
        let stage = self.stage.clone();
        let frames = self.scheduler.frames(Box::new(move |now_ms: f64| {
            if let Some(context) = weak.upgrade() {
                context.borrow_mut().frame(now_ms, stage.as_ref());
            }
        }));
        context.borrow_mut().frames = Some(frames);

        log!(
            "reveal choreography active: {} immediate, {} scroll-bound, {} observers, marquee={}",
            report.immediate,
            report.scroll_bound,
            report.observers,
            report.marquee
        );

        self.context = Some(context);
        self.state = ChoreographyState::Active;
        Ok(report)
    }

    /// Cancel every observer, animation and frame callback
    ///
    /// Safe to call in any state; the choreographer ends up torn down.
    pub fn deactivate(&mut self) {
        if let Some(context) = self.context.take() {
            // Take the registrations out first so their cancel hooks run
            // without the context borrowed
            let released = std::mem::take(&mut *context.borrow_mut());
            drop(released);
            context.borrow_mut().release();
        }
        self.state = ChoreographyState::TornDown;
    }

    /// Scroll observers still registered
    pub fn active_observers(&self) -> usize {
        self.context
            .as_ref()
            .map(|context| context.borrow().observers.len())
            .unwrap_or(0)
    }

    /// Reveal tracks not yet finished, plus the marquee loop
    pub fn running_animations(&self) -> usize {
        self.context
            .as_ref()
            .map(|context| context.borrow().running_animations())
            .unwrap_or(0)
    }

    /// Whether a frame driver is registered
    pub fn is_driving_frames(&self) -> bool {
        self.context
            .as_ref()
            .is_some_and(|context| context.borrow().frames.is_some())
    }

    /// Targets whose reveal has been triggered (pending, playing or finished)
    pub fn triggered_targets(&self) -> Vec<TargetGroup> {
        self.context
            .as_ref()
            .map(|context| {
                context
                    .borrow()
                    .tracks
                    .iter()
                    .filter(|track| track.phase != TrackPhase::Armed)
                    .map(|track| track.spec.target)
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl Drop for Choreographer {
    fn drop(&mut self) {
        self.deactivate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::{FRAME_MS, RecordingStage, VirtualScheduler};

    fn setup() -> (Rc<RecordingStage>, VirtualScheduler, Choreographer) {
        let stage = Rc::new(RecordingStage::landing_page());
        let scheduler = VirtualScheduler::new();
        let choreographer = Choreographer::new(
            stage.clone(),
            Rc::new(scheduler.clone()),
            ChoreographyConfig::default(),
        );
        (stage, scheduler, choreographer)
    }

    #[test]
    fn test_activation_registers_one_observer_per_scroll_region() {
        let (stage, _scheduler, mut choreographer) = setup();

        let report = choreographer.activate().expect("first activation");

        assert_eq!(report.observers, 7);
        assert_eq!(report.immediate, 2);
        assert_eq!(report.scroll_bound, 12);
        assert!(report.marquee);
        assert!(report.skipped.is_empty());
        assert_eq!(choreographer.active_observers(), 7);
        assert_eq!(stage.active_watches(), 7);
        assert_eq!(choreographer.state(), ChoreographyState::Active);
    }

    #[test]
    fn test_hero_plays_without_scrolling() {
        let (stage, scheduler, mut choreographer) = setup();
        choreographer.activate().expect("activation");

        assert_eq!(
            choreographer.triggered_targets(),
            vec![TargetGroup::HeroContent, TargetGroup::HeroImage]
        );

        scheduler.advance_to(FRAME_MS + 2000.0);
        assert_eq!(
            stage.state_of(TargetGroup::HeroImage, 0),
            Some(VisualState::REST)
        );
        // Benefits still held at its starting offset
        let held = stage.state_of(TargetGroup::BenefitCards, 2).expect("held state");
        assert_eq!(held.opacity, 0.0);
        assert_eq!(held.y, 40.0);
    }

    #[test]
    fn test_double_activation_registers_nothing() {
        let (stage, _scheduler, mut choreographer) = setup();
        choreographer.activate().expect("activation");

        assert_eq!(choreographer.activate(), Err(ChoreographyError::AlreadyActive));
        assert_eq!(stage.registrations(), 7);
        assert_eq!(choreographer.active_observers(), 7);
    }

    #[test]
    fn test_activation_after_teardown_is_refused() {
        let (stage, _scheduler, mut choreographer) = setup();
        choreographer.activate().expect("activation");
        choreographer.deactivate();

        assert_eq!(choreographer.activate(), Err(ChoreographyError::TornDown));
        assert_eq!(stage.active_watches(), 0);
    }

    #[test]
    fn test_missing_targets_are_skipped() {
        let (stage, _scheduler, mut choreographer) = setup();
        stage.set_count(TargetGroup::PricingCards, 0);
        stage.set_marquee_width(None);

        let report = choreographer.activate().expect("activation");

        assert!(!report.marquee);
        assert_eq!(
            report.skipped,
            vec![TargetGroup::MarqueeContent, TargetGroup::PricingCards]
        );
        // Pricing has no other spec, so nothing observes it
        assert_eq!(report.observers, 6);
        assert_eq!(stage.state_of(TargetGroup::PricingCards, 0), None);
    }

    #[test]
    fn test_unobservable_region_drops_its_specs() {
        let (stage, _scheduler, mut choreographer) = setup();
        stage.remove_region(Region::Why);

        let report = choreographer.activate().expect("activation");

        assert_eq!(report.observers, 6);
        assert!(report.skipped.contains(&TargetGroup::WhyContent));
        assert!(report.skipped.contains(&TargetGroup::WhyImage));
        assert_eq!(stage.state_of(TargetGroup::WhyImage, 0), None);
    }

    #[test]
    fn test_region_already_in_view_fires_during_activation() {
        let (stage, _scheduler, mut choreographer) = setup();
        stage.check_on_register(true);
        stage.set_region_top(Region::Benefits, 500.0);

        let report = choreographer.activate().expect("activation");

        assert_eq!(report.observers, 7);
        assert_eq!(choreographer.active_observers(), 6);
        assert!(
            choreographer
                .triggered_targets()
                .contains(&TargetGroup::BenefitCards)
        );
    }

    #[test]
    fn test_stagger_runs_in_declaration_order() {
        let (stage, scheduler, mut choreographer) = setup();
        choreographer.activate().expect("activation");

        // Benefits top: 1000 -> 780
        stage.scroll_by(220.0);
        // First frame after the trigger starts the track
        scheduler.advance_to(FRAME_MS);
        scheduler.advance_to(FRAME_MS + 100.0);

        let first = stage.state_of(TargetGroup::BenefitCards, 0).expect("card 0");
        let second = stage.state_of(TargetGroup::BenefitCards, 1).expect("card 1");
        let third = stage.state_of(TargetGroup::BenefitCards, 2).expect("card 2");
        assert!(first.opacity > 0.0);
        assert_eq!(second.opacity, 0.0);
        assert_eq!(third.opacity, 0.0);

        scheduler.advance_to(FRAME_MS + 2000.0);
        for index in 0..3 {
            assert_eq!(
                stage.state_of(TargetGroup::BenefitCards, index),
                Some(VisualState::REST)
            );
        }
    }

    #[test]
    fn test_teardown_leaves_nothing_running() {
        let (stage, scheduler, mut choreographer) = setup();
        choreographer.activate().expect("activation");
        scheduler.advance_to(100.0);

        assert!(choreographer.is_driving_frames());
        assert!(choreographer.running_animations() > 0);

        choreographer.deactivate();

        assert_eq!(choreographer.active_observers(), 0);
        assert_eq!(choreographer.running_animations(), 0);
        assert!(!choreographer.is_driving_frames());
        assert_eq!(stage.active_watches(), 0);
        assert_eq!(scheduler.frame_loops(), 0);
        assert_eq!(scheduler.pending_timers(), 0);
        assert_eq!(choreographer.state(), ChoreographyState::TornDown);
    }

    #[test]
    fn test_callbacks_surviving_teardown_do_nothing() {
        let (stage, scheduler, mut choreographer) = setup();
        stage.ignore_cancel(true);
        choreographer.activate().expect("activation");
        scheduler.advance_to(100.0);
        choreographer.deactivate();

        let applies = stage.applies();
        assert_eq!(stage.active_watches(), 7);

        stage.fire_all();
        scheduler.advance_to(10_000.0);

        assert_eq!(stage.applies(), applies);
        assert_eq!(scheduler.frame_loops(), 0);
        assert_eq!(scheduler.pending_timers(), 0);
        assert_eq!(choreographer.state(), ChoreographyState::TornDown);
    }

    /// Scheduler whose frame loops ignore cancellation
    #[derive(Default)]
    struct StickyFrames {
        loops: RefCell<Vec<Box<dyn FnMut(f64)>>>,
    }

    impl StickyFrames {
        fn tick(&self, now: f64) {
            let mut loops = std::mem::take(&mut *self.loops.borrow_mut());
            for frame in loops.iter_mut() {
                frame(now);
            }
            self.loops.borrow_mut().extend(loops);
        }
    }

    impl Scheduler for StickyFrames {
        fn interval(&self, _period_ms: u32, _tick: Box<dyn FnMut()>) -> CancelHandle {
            CancelHandle::noop()
        }

        fn timeout(&self, _delay_ms: u32, _fire: Box<dyn FnOnce()>) -> CancelHandle {
            CancelHandle::noop()
        }

        fn frames(&self, frame: Box<dyn FnMut(f64)>) -> CancelHandle {
            self.loops.borrow_mut().push(frame);
            CancelHandle::noop()
        }
    }

    #[test]
    fn test_frame_callback_surviving_teardown_does_nothing() {
        let stage = Rc::new(RecordingStage::landing_page());
        let frames = Rc::new(StickyFrames::default());
        let mut choreographer =
            Choreographer::new(stage.clone(), frames.clone(), ChoreographyConfig::default());
        choreographer.activate().expect("activation");
        frames.tick(0.0);
        frames.tick(FRAME_MS);
        choreographer.deactivate();

        let applies = stage.applies();
        frames.tick(2.0 * FRAME_MS);
        frames.tick(5000.0);

        assert_eq!(stage.applies(), applies);
    }

    #[test]
    fn test_drop_tears_down() {
        let (stage, scheduler, mut choreographer) = setup();
        choreographer.activate().expect("activation");
        drop(choreographer);

        assert_eq!(stage.active_watches(), 0);
        assert_eq!(scheduler.frame_loops(), 0);
    }
}
