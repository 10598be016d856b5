//! Timer Slot
//!
//! Holds at most one pending timeout. Dropping a `gloo_timers` `Timeout`
//! cancels it, so replacing or clearing the slot cancels the old one.

use gloo_timers::callback::Timeout;

pub struct TimerSlot<T = Timeout> {
    /// Owned only so that dropping it cancels the timeout
    _pending: Option<T>,
}

impl<T> Default for TimerSlot<T> {
    fn default() -> Self {
        Self { _pending: None }
    }
}

impl<T> TimerSlot<T> {
    /// Install `handle`, dropping whatever was pending
    pub fn replace(&mut self, handle: T) {
        self._pending = Some(handle);
    }

    pub fn cancel(&mut self) {
        self._pending = None;
    }
}

impl TimerSlot<Timeout> {
    pub fn schedule(&mut self, millis: u32, callback: impl FnOnce() + 'static) {
        self.replace(Timeout::new(millis, callback));
    }
}
