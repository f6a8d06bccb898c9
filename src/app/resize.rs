use std::time::{Duration, Instant};

use crate::debounce::DeferredTask;
use crate::layout::Viewport;

/// Collapses bursts of viewport changes into one re-render. The pending task
/// carries how many signals the burst contained.
#[derive(Debug)]
pub(in crate::app) struct ResizeCoordinator {
    task: DeferredTask<u32>,
    observed: Option<Viewport>,
}

impl ResizeCoordinator {
    pub(in crate::app) fn new(quiet: Duration) -> Self {
        Self {
            task: DeferredTask::new(quiet),
            observed: None,
        }
    }

    /// Records the viewport of a render that happened outside the debounce.
    pub(in crate::app) fn settle(&mut self, viewport: Viewport) {
        self.observed = Some(viewport);
        self.task.cancel();
    }

    /// Returns true when `viewport` differs from the last one seen and a
    /// deferred re-render was (re)scheduled.
    pub(in crate::app) fn observe(&mut self, viewport: Viewport, now: Instant) -> bool {
        if self.observed == Some(viewport) {
            return false;
        }

        self.observed = Some(viewport);
        let signals = self.task.cancel().unwrap_or(0) + 1;
        self.task.schedule(signals, now);
        log::trace!(
            "viewport changed to {}x{}; re-render deferred by {:?}",
            viewport.width,
            viewport.height,
            self.task.quiet_period()
        );
        true
    }

    pub(in crate::app) fn take_due(&mut self, now: Instant) -> bool {
        match self.task.take_due(now) {
            Some(signals) => {
                log::debug!("resize burst of {signals} signal(s) settled");
                true
            }
            None => false,
        }
    }

    pub(in crate::app) fn is_pending(&self) -> bool {
        self.task.is_pending()
    }

    pub(in crate::app) fn repaint_after(&self, now: Instant) -> Option<Duration> {
        self.task.time_until_due(now)
    }
}
