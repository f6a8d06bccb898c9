use std::time::{Duration, Instant};

/// Trailing-edge deferred task: scheduling replaces any pending, unexecuted
/// payload and pushes the deadline out to `now + quiet`.
#[derive(Debug)]
pub struct DeferredTask<T> {
    quiet: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> DeferredTask<T> {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet
    }

    pub fn schedule(&mut self, payload: T, now: Instant) {
        self.pending = Some((now + self.quiet, payload));
    }

    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(_, payload)| payload)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Hands out the payload once its deadline has passed; afterwards the task is idle.
    pub fn take_due(&mut self, now: Instant) -> Option<T> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|(deadline, _)| now >= *deadline);
        if due { self.cancel() } else { None }
    }

    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|(deadline, _)| deadline.saturating_duration_since(now))
    }
}
