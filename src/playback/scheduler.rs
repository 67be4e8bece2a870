use std::collections::BTreeSet;

/// Identifies one requested refresh callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScheduleHandle(pub u64);

/// Host primitive that invokes a callback once per display refresh.
///
/// Contract: after `schedule` returns a handle, the host delivers that handle back to
/// [`crate::PlaybackClock::refresh`] at most once, at the next refresh. `cancel` withdraws a
/// pending request; a host that cannot withdraw may still deliver it, and the clock ignores it.
pub trait FrameScheduler {
    /// Request one refresh callback.
    fn schedule(&mut self) -> ScheduleHandle;
    /// Withdraw a pending request. Unknown handles are ignored.
    fn cancel(&mut self, handle: ScheduleHandle);
}

/// Deterministic scheduler for headless playback and tests.
///
/// Requests queue up until the driver takes them with [`RefreshQueue::take_due`].
#[derive(Debug, Default)]
pub struct RefreshQueue {
    next: u64,
    pending: BTreeSet<ScheduleHandle>,
    cancelled: u64,
}

impl RefreshQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain every pending request, oldest first.
    pub fn take_due(&mut self) -> Vec<ScheduleHandle> {
        std::mem::take(&mut self.pending).into_iter().collect()
    }

    /// Number of outstanding requests.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Number of requests withdrawn so far.
    pub fn cancelled(&self) -> u64 {
        self.cancelled
    }
}

impl FrameScheduler for RefreshQueue {
    fn schedule(&mut self) -> ScheduleHandle {
        self.next += 1;
        let handle = ScheduleHandle(self.next);
        self.pending.insert(handle);
        handle
    }

    fn cancel(&mut self, handle: ScheduleHandle) {
        if self.pending.remove(&handle) {
            self.cancelled += 1;
        }
    }
}
