use std::time::{Duration, Instant};

use crate::playback::clock::PlaybackClock;
use crate::playback::scheduler::RefreshQueue;

/// Summary of one [`run_realtime`] session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RealtimeRun {
    /// Refresh callbacks delivered to the clock.
    pub refreshes: u64,
    /// Refreshes that moved the clock to another frame.
    pub advances: u64,
    /// Wall-clock duration of the session.
    pub elapsed: Duration,
}

/// Drive `clock` against the wall clock, delivering pending refreshes every `refresh`.
///
/// Returns once the clock has nothing scheduled or `limit` has elapsed; in the latter case the
/// clock is stopped on its current frame. `on_refresh` runs after every refresh round.
pub fn run_realtime(
    clock: &mut PlaybackClock<RefreshQueue>,
    refresh: Duration,
    limit: Option<Duration>,
    mut on_refresh: impl FnMut(&PlaybackClock<RefreshQueue>),
) -> RealtimeRun {
    let refresh = refresh.max(Duration::from_millis(1));
    let start = Instant::now();
    let mut run = RealtimeRun {
        refreshes: 0,
        advances: 0,
        elapsed: Duration::ZERO,
    };
    let mut deadline = start;

    loop {
        let due = clock.scheduler_mut().take_due();
        if due.is_empty() {
            break;
        }
        let now = start.elapsed();
        if limit.is_some_and(|l| now >= l) {
            clock.stop();
            break;
        }
        for handle in due {
            run.refreshes += 1;
            if clock.refresh(handle, now).is_some() {
                run.advances += 1;
            }
        }
        on_refresh(clock);

        deadline += refresh;
        if let Some(wait) = deadline.checked_duration_since(Instant::now()) {
            std::thread::sleep(wait);
        }
    }

    run.elapsed = start.elapsed();
    tracing::debug!(
        refreshes = run.refreshes,
        advances = run.advances,
        elapsed_ms = run.elapsed.as_millis() as u64,
        "realtime playback finished"
    );
    run
}
