//! Cancellation handles for timers and observers
//!
//! Every registration made through [`Scheduler`](super::Scheduler) or
//! [`Stage`](super::Stage) hands back a [`CancelHandle`]. Cancelling is
//! idempotent and dropping the handle cancels it, so releasing the owner of a
//! handle is always enough to stop the callback behind it.

use std::fmt;

/// Owned cancellation token for one registered callback
pub struct CancelHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl CancelHandle {
    /// Wrap the function that releases the registration
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Handle for a registration that holds nothing
    pub fn noop() -> Self {
        Self { cancel: None }
    }

    /// Release the registration now
    pub fn cancel(mut self) {
        self.release();
    }

    /// Whether the registration has not been released yet
    pub fn is_active(&self) -> bool {
        self.cancel.is_some()
    }

    fn release(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for CancelHandle {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for CancelHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CancelHandle")
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_cancel_runs_once() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let handle = CancelHandle::new(move || counter.set(counter.get() + 1));

        assert!(handle.is_active());
        handle.cancel();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_drop_cancels() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        {
            let _handle = CancelHandle::new(move || counter.set(counter.get() + 1));
        }
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_noop_handle_is_inactive() {
        let handle = CancelHandle::noop();
        assert!(!handle.is_active());
        handle.cancel();
    }
}
