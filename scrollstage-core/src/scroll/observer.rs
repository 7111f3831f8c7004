use crate::foundation::core::Progress;
use crate::scroll::region::ScrollMetrics;

/// Latest-wins scroll observation between host frame ticks.
///
/// Scroll events can arrive faster than the host's animation-frame cadence;
/// only the newest offset matters, so intermediate values are dropped rather
/// than queued. `take` drains at most one progress value per tick.
#[derive(Clone, Debug)]
pub struct ScrollObserver {
    metrics: ScrollMetrics,
    pending: Option<f64>,
    attached: bool,
}

impl ScrollObserver {
    /// Attach an observer to a scroll region.
    pub fn new(metrics: ScrollMetrics) -> Self {
        Self {
            metrics,
            pending: None,
            attached: true,
        }
    }

    /// Record a raw scroll offset; overwrites any offset not yet taken.
    /// No-op once detached.
    pub fn observe(&mut self, offset: f64) {
        if !self.attached {
            return;
        }
        self.pending = Some(offset);
    }

    /// Drain the newest observed offset as normalized progress, if any.
    pub fn take(&mut self) -> Option<Progress> {
        if !self.attached {
            return None;
        }
        self.pending
            .take()
            .map(|offset| self.metrics.progress_at(offset))
    }

    /// Stop observing; pending and future observations are discarded so a
    /// stale target can never be acted on.
    pub fn detach(&mut self) {
        self.pending = None;
        self.attached = false;
    }

    /// Whether the observer is still attached to its region.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Geometry this observer maps offsets through.
    pub fn metrics(&self) -> ScrollMetrics {
        self.metrics
    }
}
