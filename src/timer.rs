//! Timer primitives used by demo widgets.
//!
//! Widgets never own a thread or a clock. They ask a [`Scheduler`] for interval and
//! one-shot timers and get back a [`TimerHandle`]. When a timer comes due, the host
//! hands the handle back to the widget (see `DemoSelector::on_timer`).
//!
//! [`TimerQueue`] is the scheduler shipped with this crate. The host drives it by
//! calling [`TimerQueue::advance`] with the elapsed time, which makes it usable both
//! from a frame loop and as a deterministic clock in tests.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::time::Duration;

/// Opaque identifier for a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Fixed-delay timer primitives.
///
/// Methods take `&self` so several widgets can share one scheduler behind an `Rc`.
pub trait Scheduler {
    /// Schedules a repeating timer that fires every `period`.
    fn set_interval(&self, period: Duration) -> TimerHandle;

    /// Schedules a timer that fires once after `delay`.
    fn set_timeout(&self, delay: Duration) -> TimerHandle;

    /// Cancels a timer. Clearing an unknown or already-fired handle is a no-op.
    fn clear(&self, handle: TimerHandle);
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    due: Duration,
    period: Option<Duration>,
}

#[derive(Debug, Default)]
struct QueueState {
    now: Duration,
    next_id: u64,
    timers: BTreeMap<TimerHandle, Entry>,
}

/// A host-driven timer queue.
#[derive(Debug, Default)]
pub struct TimerQueue {
    state: RefCell<QueueState>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the queue was created, as seen by its timers.
    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    /// Number of timers that are still armed.
    pub fn pending(&self) -> usize {
        self.state.borrow().timers.len()
    }

    /// Returns true if `handle` is still armed.
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.state.borrow().timers.contains_key(&handle)
    }

    /// Moves the clock forward by `elapsed` and returns every timer that came due, in
    /// the order they fired.
    ///
    /// Intervals keep their own fixed schedule: an interval armed at `t0` with period
    /// `p` fires at `t0 + p`, `t0 + 2p`, ... regardless of when `advance` is called.
    /// One-shot timers are disarmed after firing.
    pub fn advance(&self, elapsed: Duration) -> Vec<TimerHandle> {
        let mut state = self.state.borrow_mut();
        let target = state.now.saturating_add(elapsed);
        let mut fired = Vec::new();

        loop {
            let next = state
                .timers
                .iter()
                .filter(|(_, entry)| entry.due <= target)
                .min_by_key(|(handle, entry)| (entry.due, **handle))
                .map(|(handle, entry)| (*handle, *entry));

            let Some((handle, entry)) = next else {
                break;
            };

            state.now = entry.due;
            fired.push(handle);
            match entry.period {
                Some(period) => {
                    if let Some(armed) = state.timers.get_mut(&handle) {
                        armed.due = entry.due.saturating_add(period);
                    }
                }
                None => {
                    state.timers.remove(&handle);
                }
            }
        }

        state.now = target;
        fired
    }

    fn schedule(&self, delay: Duration, period: Option<Duration>) -> TimerHandle {
        let mut state = self.state.borrow_mut();
        let handle = TimerHandle(state.next_id);
        state.next_id = state.next_id.wrapping_add(1);
        let due = state.now.saturating_add(delay);
        state.timers.insert(handle, Entry { due, period });
        handle
    }
}

impl Scheduler for TimerQueue {
    fn set_interval(&self, period: Duration) -> TimerHandle {
        // A zero period would fire forever within a single `advance`.
        let period = period.max(Duration::from_millis(1));
        self.schedule(period, Some(period))
    }

    fn set_timeout(&self, delay: Duration) -> TimerHandle {
        self.schedule(delay, None)
    }

    fn clear(&self, handle: TimerHandle) {
        self.state.borrow_mut().timers.remove(&handle);
    }
}
