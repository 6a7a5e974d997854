//! Timer capability used by the preloader and the frame driver
//!
//! The choreography never talks to a concrete event loop. Browser builds plug
//! in a `gloo-timers` / `requestAnimationFrame` implementation, tests plug in
//! a virtual clock.

use super::handle::CancelHandle;

/// Source of scheduled callbacks on a single-threaded event loop
pub trait Scheduler {
    /// Call `tick` every `period_ms` until the handle is cancelled
    fn interval(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> CancelHandle;

    /// Call `fire` once after `delay_ms` unless the handle is cancelled first
    fn timeout(&self, delay_ms: u32, fire: Box<dyn FnOnce()>) -> CancelHandle;

    /// Call `frame` once per display frame with a millisecond timestamp
    fn frames(&self, frame: Box<dyn FnMut(f64)>) -> CancelHandle;
}
