//! Browser implementations of the choreography capabilities
//!
//! [`WebScheduler`] drives timers with `gloo-timers` and frames with
//! `requestAnimationFrame`. [`WebStage`] resolves target groups with CSS
//! selectors, writes inline styles and watches regions with an
//! `IntersectionObserver` whose root ends at the trigger line.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use gloo_timers::callback::{Interval, Timeout};
use leptos::logging::debug_warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

use crate::core::{CancelHandle, Region, Scheduler, ScrollTrigger, Stage, TargetGroup, VisualState};

/// Drop a JS closure on a later task
///
/// A closure cancelled from inside its own invocation must outlive that call.
fn defer_drop<T: 'static>(value: T) {
    wasm_bindgen_futures::spawn_local(async move { drop(value) });
}

/// Timers on the browser event loop
#[derive(Debug, Clone, Copy, Default)]
pub struct WebScheduler;

impl Scheduler for WebScheduler {
    fn interval(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> CancelHandle {
        let interval = Interval::new(period_ms, tick);
        CancelHandle::new(move || defer_drop(interval.cancel()))
    }

    fn timeout(&self, delay_ms: u32, fire: Box<dyn FnOnce()>) -> CancelHandle {
        let timeout = Timeout::new(delay_ms, fire);
        CancelHandle::new(move || defer_drop(timeout.cancel()))
    }

    fn frames(&self, mut frame: Box<dyn FnMut(f64)>) -> CancelHandle {
        let Some(window) = web_sys::window() else {
            return CancelHandle::noop();
        };

        let slot: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

        let next: Weak<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::downgrade(&slot);
        let pending_in_frame = pending.clone();
        let frame_window = window.clone();
        let animate = move |now_ms: f64| {
            pending_in_frame.set(None);
            frame(now_ms);

            // Request next frame unless the loop was cancelled meanwhile
            let Some(slot) = next.upgrade() else {
                return;
            };
            let closure = slot.borrow();
            if let Some(closure) = closure.as_ref() {
                if let Ok(id) = frame_window.request_animation_frame(closure.as_ref().unchecked_ref()) {
                    pending_in_frame.set(Some(id));
                }
            }
        };

        let closure = Closure::new(animate);
        if let Ok(id) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            pending.set(Some(id));
        }
        *slot.borrow_mut() = Some(closure);

        CancelHandle::new(move || {
            if let Some(id) = pending.take() {
                let _ = window.cancel_animation_frame(id);
            }
            let closure = slot.borrow_mut().take();
            defer_drop(closure);
        })
    }
}

struct RegionWatch {
    trigger: ScrollTrigger,
    on_enter: Option<Box<dyn FnOnce()>>,
}

impl RegionWatch {
    /// Check an observer entry against the viewport; hands back `on_enter`
    /// the first time the trigger line is crossed
    fn poll(
        &mut self,
        entry: &IntersectionObserverEntry,
        window: &Window,
    ) -> Option<Box<dyn FnOnce()>> {
        let viewport_height = window.inner_height().ok()?.as_f64()?;
        let top = entry.bounding_client_rect().top();
        if self.trigger.check(top, viewport_height) {
            self.on_enter.take()
        } else {
            None
        }
    }
}

/// The rendered landing page
pub struct WebStage {
    window: Window,
    document: Document,
    elements: RefCell<HashMap<TargetGroup, Vec<HtmlElement>>>,
}

impl WebStage {
    /// Stage over the current document; `None` outside a browser
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self {
            window,
            document,
            elements: RefCell::new(HashMap::new()),
        })
    }

    /// Run `f` over the elements of `target`, resolving them on first use
    fn with_elements<R>(&self, target: TargetGroup, f: impl FnOnce(&[HtmlElement]) -> R) -> R {
        if let Some(found) = self.elements.borrow().get(&target) {
            return f(found);
        }

        let found = self.query(target);
        let result = f(&found);
        // Only cache non-empty lookups; a group may render later
        if !found.is_empty() {
            self.elements.borrow_mut().insert(target, found);
        }
        result
    }

    fn query(&self, target: TargetGroup) -> Vec<HtmlElement> {
        let Ok(list) = self.document.query_selector_all(&target.selector()) else {
            debug_warn!("invalid selector for {:?}", target);
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|index| list.item(index))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect()
    }
}

impl Stage for WebStage {
    fn element_count(&self, target: TargetGroup) -> usize {
        self.with_elements(target, <[HtmlElement]>::len)
    }

    fn measure_scroll_width(&self, target: TargetGroup) -> Option<f64> {
        self.with_elements(target, |elements| {
            elements.first().map(|element| f64::from(element.scroll_width()))
        })
    }

    fn apply(&self, target: TargetGroup, index: usize, state: &VisualState) {
        self.with_elements(target, |elements| {
            let Some(element) = elements.get(index) else {
                return;
            };
            let style = element.style();
            let _ = style.set_property("opacity", &state.opacity.to_string());
            let _ = style.set_property("transform", &state.transform());
        });
    }

    fn observe_region(
        &self,
        region: Region,
        threshold: f64,
        on_enter: Box<dyn FnOnce()>,
    ) -> Option<CancelHandle> {
        let section = self.document.get_element_by_id(region.anchor_id())?;

        let trigger = ScrollTrigger::new(threshold);
        let options = IntersectionObserverInit::new();
        options.set_root_margin(&trigger.root_margin());

        let mut watch = RegionWatch {
            trigger,
            on_enter: Some(on_enter),
        };

        // The first notification arrives for every observed target, so a
        // region already past the line fires without waiting for a scroll
        let window = self.window.clone();
        let callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)> =
            Closure::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let fired = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .find_map(|entry| watch.poll(&entry, &window));
                if let Some(on_enter) = fired {
                    on_enter();
                }
            });

        let observer = match IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(observer) => observer,
            Err(_) => {
                debug_warn!("IntersectionObserver unavailable for {:?}", region);
                return None;
            }
        };
        observer.observe(&section);

        Some(CancelHandle::new(move || {
            observer.disconnect();
            defer_drop(callback);
        }))
    }
}
