//! Test doubles: a virtual-clock scheduler and a recording stage

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use super::handle::CancelHandle;
use super::reveal::{Region, TargetGroup, VisualState};
use super::scheduler::Scheduler;
use super::scroll::ScrollTrigger;
use super::stage::Stage;

/// Virtual frame length used for `frames` callbacks
pub const FRAME_MS: f64 = 16.0;

enum Job {
    Repeat(Box<dyn FnMut()>),
    Once(Box<dyn FnOnce()>),
    Frame(Box<dyn FnMut(f64)>),
}

struct Task {
    id: u64,
    due: f64,
    period: f64,
    job: Option<Job>,
}

#[derive(Default)]
struct Clock {
    now: f64,
    next_id: u64,
    tasks: Vec<Task>,
}

/// Deterministic scheduler driven by [`VirtualScheduler::advance_to`]
#[derive(Clone, Default)]
pub struct VirtualScheduler {
    clock: Rc<RefCell<Clock>>,
}

impl VirtualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> f64 {
        self.clock.borrow().now
    }

    /// Interval and timeout registrations still pending
    pub fn pending_timers(&self) -> usize {
        self.clock
            .borrow()
            .tasks
            .iter()
            .filter(|task| task.period != FRAME_SENTINEL)
            .count()
    }

    /// Frame loops still registered
    pub fn frame_loops(&self) -> usize {
        self.clock
            .borrow()
            .tasks
            .iter()
            .filter(|task| task.period == FRAME_SENTINEL)
            .count()
    }

    /// Run every callback due at or before `until`, in due order
    pub fn advance_to(&self, until: f64) {
        loop {
            let next = {
                let mut clock = self.clock.borrow_mut();
                let Some(index) = clock
                    .tasks
                    .iter()
                    .enumerate()
                    .filter(|(_, task)| task.job.is_some() && task.due <= until)
                    .min_by(|(_, a), (_, b)| a.due.total_cmp(&b.due).then(a.id.cmp(&b.id)))
                    .map(|(index, _)| index)
                else {
                    break;
                };

                let due = clock.tasks[index].due;
                clock.now = due;
                let id = clock.tasks[index].id;
                let job = if matches!(clock.tasks[index].job, Some(Job::Once(_))) {
                    clock.tasks.remove(index).job
                } else {
                    clock.tasks[index].job.take()
                };
                (id, due, job)
            };

            let (id, due, job) = next;
            match job {
                Some(Job::Once(fire)) => fire(),
                Some(Job::Repeat(mut tick)) => {
                    tick();
                    self.restore(id, Job::Repeat(tick));
                }
                Some(Job::Frame(mut frame)) => {
                    frame(due);
                    self.restore(id, Job::Frame(frame));
                }
                None => {}
            }
        }

        self.clock.borrow_mut().now = until;
    }

    fn restore(&self, id: u64, job: Job) {
        let mut clock = self.clock.borrow_mut();
        // A task cancelled while running is gone; its job drops after the borrow
        if let Some(task) = clock.tasks.iter_mut().find(|task| task.id == id) {
            let step = if task.period == FRAME_SENTINEL {
                FRAME_MS
            } else {
                task.period
            };
            task.due += step;
            task.job = Some(job);
        }
    }

    fn register(&self, due_in: f64, period: f64, job: Job) -> CancelHandle {
        let id = {
            let mut clock = self.clock.borrow_mut();
            let id = clock.next_id;
            clock.next_id += 1;
            let due = clock.now + due_in;
            clock.tasks.push(Task {
                id,
                due,
                period,
                job: Some(job),
            });
            id
        };

        let clock: Weak<RefCell<Clock>> = Rc::downgrade(&self.clock);
        CancelHandle::new(move || {
            let Some(clock) = clock.upgrade() else {
                return;
            };
            let removed: Vec<Task> = {
                let mut clock = clock.borrow_mut();
                let (removed, kept) = std::mem::take(&mut clock.tasks)
                    .into_iter()
                    .partition(|task| task.id == id);
                clock.tasks = kept;
                removed
            };
            drop(removed);
        })
    }
}

/// Marks frame-loop tasks in the task list
const FRAME_SENTINEL: f64 = -1.0;

impl Scheduler for VirtualScheduler {
    fn interval(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> CancelHandle {
        let period = f64::from(period_ms.max(1));
        self.register(period, period, Job::Repeat(tick))
    }

    fn timeout(&self, delay_ms: u32, fire: Box<dyn FnOnce()>) -> CancelHandle {
        self.register(f64::from(delay_ms), 0.0, Job::Once(fire))
    }

    fn frames(&self, frame: Box<dyn FnMut(f64)>) -> CancelHandle {
        self.register(FRAME_MS, FRAME_SENTINEL, Job::Frame(frame))
    }
}

struct Watch {
    id: u64,
    region: Region,
    trigger: ScrollTrigger,
    on_enter: Option<Box<dyn FnOnce()>>,
}

/// Stage that records applied visual states and simulates scrolling
pub struct RecordingStage {
    counts: RefCell<HashMap<TargetGroup, usize>>,
    marquee_width: Cell<Option<f64>>,
    missing_regions: RefCell<Vec<Region>>,
    region_tops: RefCell<HashMap<Region, f64>>,
    viewport_height: Cell<f64>,
    applied: RefCell<HashMap<(TargetGroup, usize), VisualState>>,
    watches: Rc<RefCell<Vec<Watch>>>,
    next_watch: Cell<u64>,
    registrations: Cell<usize>,
    check_on_register: Cell<bool>,
    ignore_cancel: Cell<bool>,
    applies: Cell<usize>,
}

impl RecordingStage {
    /// Stage shaped like the rendered landing page, scrolled to the top
    pub fn landing_page() -> Self {
        let counts = TargetGroup::ALL
            .iter()
            .map(|target| {
                let count = match target {
                    TargetGroup::BenefitCards | TargetGroup::DesireImages => 3,
                    TargetGroup::PricingCards => 4,
                    _ => 1,
                };
                (*target, count)
            })
            .collect();

        let region_tops = Region::ALL
            .iter()
            .enumerate()
            .map(|(index, region)| (*region, 1000.0 * index as f64))
            .collect();

        Self {
            counts: RefCell::new(counts),
            marquee_width: Cell::new(Some(1200.0)),
            missing_regions: RefCell::new(Vec::new()),
            region_tops: RefCell::new(region_tops),
            viewport_height: Cell::new(1000.0),
            applied: RefCell::new(HashMap::new()),
            watches: Rc::new(RefCell::new(Vec::new())),
            next_watch: Cell::new(0),
            registrations: Cell::new(0),
            check_on_register: Cell::new(false),
            ignore_cancel: Cell::new(false),
            applies: Cell::new(0),
        }
    }

    pub fn set_count(&self, target: TargetGroup, count: usize) {
        self.counts.borrow_mut().insert(target, count);
    }

    pub fn set_marquee_width(&self, width: Option<f64>) {
        self.marquee_width.set(width);
    }

    pub fn remove_region(&self, region: Region) {
        self.missing_regions.borrow_mut().push(region);
    }

    /// Evaluate a new watch immediately, like a browser observer does
    pub fn check_on_register(&self, enabled: bool) {
        self.check_on_register.set(enabled);
    }

    /// Hand out handles that do nothing, so watches outlive their owner
    /// the way a leaky observer implementation would
    pub fn ignore_cancel(&self, enabled: bool) {
        self.ignore_cancel.set(enabled);
    }

    pub fn set_region_top(&self, region: Region, top: f64) {
        self.region_tops.borrow_mut().insert(region, top);
    }

    /// Move every region up by `delta` pixels and notify the watches
    pub fn scroll_by(&self, delta: f64) {
        for top in self.region_tops.borrow_mut().values_mut() {
            *top -= delta;
        }
        self.notify();
    }

    /// Re-evaluate every watch against current region positions
    pub fn notify(&self) {
        let viewport = self.viewport_height.get();
        let fired: Vec<Box<dyn FnOnce()>> = {
            let tops = self.region_tops.borrow();
            let mut watches = self.watches.borrow_mut();
            let mut fired = Vec::new();
            for watch in watches.iter_mut() {
                let top = tops.get(&watch.region).copied().unwrap_or(f64::INFINITY);
                if watch.trigger.check(top, viewport) {
                    if let Some(on_enter) = watch.on_enter.take() {
                        fired.push(on_enter);
                    }
                }
            }
            watches.retain(|watch| watch.on_enter.is_some());
            fired
        };

        for on_enter in fired {
            on_enter();
        }
    }

    /// Invoke every pending `on_enter`, wherever its region is
    pub fn fire_all(&self) {
        let fired: Vec<Box<dyn FnOnce()>> = self
            .watches
            .borrow_mut()
            .drain(..)
            .filter_map(|mut watch| watch.on_enter.take())
            .collect();
        for on_enter in fired {
            on_enter();
        }
    }

    pub fn active_watches(&self) -> usize {
        self.watches.borrow().len()
    }

    /// Total `observe_region` registrations ever made
    pub fn registrations(&self) -> usize {
        self.registrations.get()
    }

    /// Total `apply` calls ever made
    pub fn applies(&self) -> usize {
        self.applies.get()
    }

    pub fn state_of(&self, target: TargetGroup, index: usize) -> Option<VisualState> {
        self.applied.borrow().get(&(target, index)).copied()
    }
}

impl Stage for RecordingStage {
    fn element_count(&self, target: TargetGroup) -> usize {
        if let Some(region) = target.region() {
            if self.missing_regions.borrow().contains(&region) {
                return 0;
            }
        }
        self.counts.borrow().get(&target).copied().unwrap_or(0)
    }

    fn measure_scroll_width(&self, target: TargetGroup) -> Option<f64> {
        match target {
            TargetGroup::MarqueeContent => self.marquee_width.get(),
            _ => None,
        }
    }

    fn apply(&self, target: TargetGroup, index: usize, state: &VisualState) {
        self.applies.set(self.applies.get() + 1);
        self.applied.borrow_mut().insert((target, index), *state);
    }

    fn observe_region(
        &self,
        region: Region,
        threshold: f64,
        on_enter: Box<dyn FnOnce()>,
    ) -> Option<CancelHandle> {
        if self.missing_regions.borrow().contains(&region) {
            return None;
        }

        let id = self.next_watch.get();
        self.next_watch.set(id + 1);
        self.registrations.set(self.registrations.get() + 1);
        self.watches.borrow_mut().push(Watch {
            id,
            region,
            trigger: ScrollTrigger::new(threshold),
            on_enter: Some(on_enter),
        });

        if self.check_on_register.get() {
            self.notify();
        }

        if self.ignore_cancel.get() {
            return Some(CancelHandle::noop());
        }

        let watches = Rc::downgrade(&self.watches);
        Some(CancelHandle::new(move || {
            if let Some(watches) = watches.upgrade() {
                let removed: Vec<Watch> = {
                    let mut watches = watches.borrow_mut();
                    let (removed, kept) = std::mem::take(&mut *watches)
                        .into_iter()
                        .partition(|watch| watch.id == id);
                    *watches = kept;
                    removed
                };
                drop(removed);
            }
        }))
    }
}
