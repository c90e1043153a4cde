//! Countdown owned by a quiz session. Each tick is a one-shot scheduled task;
//! the view arms the next one after the previous has fired. Whatever ends the
//! session (finish, timeout, unmount) cancels the pending tick, and the
//! handle is taken on cancel so that happens at most once.

/// A scheduled tick that has not fired yet.
pub trait TickHandle {
    /// Prevents the tick from firing.
    fn cancel(self);
}

#[cfg(target_arch = "wasm32")]
impl TickHandle for gloo_timers::callback::Timeout {
    fn cancel(self) {
        // Dropping the returned closure releases the callback.
        let _ = gloo_timers::callback::Timeout::cancel(self);
    }
}

pub struct Countdown<H: TickHandle> {
    seconds_remaining: u32,
    pending: Option<H>,
}

impl<H: TickHandle> Countdown<H> {
    pub fn new(seconds: u32) -> Self {
        Self {
            seconds_remaining: seconds,
            pending: None,
        }
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_expired(&self) -> bool {
        self.seconds_remaining == 0
    }

    /// Stores the next scheduled tick, cancelling a stray earlier one.
    pub fn arm(&mut self, handle: H) {
        if let Some(previous) = self.pending.replace(handle) {
            tracing::warn!("countdown re-armed while a tick was pending");
            previous.cancel();
        }
    }

    /// Records that the pending tick fired and returns the seconds left.
    /// The spent handle is dropped, not cancelled.
    pub fn fired(&mut self) -> u32 {
        drop(self.pending.take());
        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
        self.seconds_remaining
    }

    /// Cancels the pending tick, if any.
    pub fn stop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.cancel();
        }
    }
}

impl<H: TickHandle> Drop for Countdown<H> {
    fn drop(&mut self) {
        self.stop();
    }
}
