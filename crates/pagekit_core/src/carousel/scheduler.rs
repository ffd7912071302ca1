//! Repeating timer collaborators for carousel autoplay.
//!
//! # Responsibility
//! - Start and cancel repeating timers identified by `TimerId`.
//! - Deliver ticks to the controller's owner, never to the controller
//!   directly; the owner forwards them through `CarouselController::on_tick`.
//!
//! # Invariants
//! - `TimerId`s are never reused within one scheduler.
//! - After `cancel(id)` returns, the scheduler produces no new tick for `id`.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;
use std::time::Duration;

const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Opaque handle of one repeating timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

impl TimerId {
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// Source of repeating timers.
pub trait Scheduler {
    /// Starts a timer that ticks every `period` until cancelled.
    fn start_repeating(&self, period: Duration) -> TimerId;
    /// Cancels a timer; unknown or already cancelled ids are ignored.
    fn cancel(&self, timer: TimerId);
}

impl<T: Scheduler + ?Sized> Scheduler for &T {
    fn start_repeating(&self, period: Duration) -> TimerId {
        (**self).start_repeating(period)
    }

    fn cancel(&self, timer: TimerId) {
        (**self).cancel(timer)
    }
}

/// Deterministic scheduler driven by an explicit virtual clock.
///
/// Nothing fires on its own: [`VirtualScheduler::advance`] moves the clock
/// and returns the ticks that became due, in firing order.
#[derive(Debug, Default)]
pub struct VirtualScheduler {
    state: RefCell<VirtualState>,
}

#[derive(Debug, Default)]
struct VirtualState {
    now: Duration,
    next_id: u64,
    timers: BTreeMap<TimerId, VirtualTimer>,
}

#[derive(Debug, Clone, Copy)]
struct VirtualTimer {
    period: Duration,
    next_due: Duration,
}

impl VirtualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since construction.
    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    /// Number of live (started, not cancelled) timers.
    pub fn active_timers(&self) -> usize {
        self.state.borrow().timers.len()
    }

    pub fn is_active(&self, timer: TimerId) -> bool {
        self.state.borrow().timers.contains_key(&timer)
    }

    /// Moves the clock forward by `by` and returns every tick due on the way.
    ///
    /// Ticks are computed against the timers live at call time. A caller
    /// whose tick handling reschedules timers should advance one period at a
    /// time and dispatch each batch before advancing again.
    pub fn advance(&self, by: Duration) -> Vec<TimerId> {
        let mut state = self.state.borrow_mut();
        let target = state.now + by;
        let mut fired = Vec::new();

        loop {
            let due = state
                .timers
                .iter()
                .filter(|(_, timer)| timer.next_due <= target)
                .min_by_key(|(id, timer)| (timer.next_due, **id))
                .map(|(id, timer)| (*id, timer.next_due));

            let Some((id, due_at)) = due else {
                break;
            };
            state.now = due_at;
            if let Some(timer) = state.timers.get_mut(&id) {
                timer.next_due += timer.period;
            }
            fired.push(id);
        }

        state.now = target;
        fired
    }
}

impl Scheduler for VirtualScheduler {
    fn start_repeating(&self, period: Duration) -> TimerId {
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        let id = TimerId(state.next_id);
        let period = period.max(MIN_PERIOD);
        let next_due = state.now + period;
        state.timers.insert(id, VirtualTimer { period, next_due });
        id
    }

    fn cancel(&self, timer: TimerId) {
        self.state.borrow_mut().timers.remove(&timer);
    }
}

/// Wall-clock scheduler backed by one sleeper thread per timer.
///
/// Ticks are sent over the channel returned by [`ThreadScheduler::new`]; the
/// receiving side owns the controller and forwards them to `on_tick`. A tick
/// already queued when its timer is cancelled is still delivered, and the
/// controller discards it as stale.
#[derive(Debug)]
pub struct ThreadScheduler {
    sender: Sender<TimerId>,
    next_id: AtomicU64,
    timers: Mutex<HashMap<TimerId, Arc<AtomicBool>>>,
}

impl ThreadScheduler {
    pub fn new() -> (Self, Receiver<TimerId>) {
        let (sender, receiver) = mpsc::channel();
        let scheduler = Self {
            sender,
            next_id: AtomicU64::new(1),
            timers: Mutex::new(HashMap::new()),
        };
        (scheduler, receiver)
    }

    pub fn active_timers(&self) -> usize {
        self.timers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Scheduler for ThreadScheduler {
    fn start_repeating(&self, period: Duration) -> TimerId {
        let id = TimerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let period = period.max(MIN_PERIOD);
        let cancelled = Arc::new(AtomicBool::new(false));
        self.timers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, Arc::clone(&cancelled));

        let sender = self.sender.clone();
        thread::spawn(move || loop {
            thread::sleep(period);
            if cancelled.load(Ordering::Acquire) || sender.send(id).is_err() {
                break;
            }
        });
        id
    }

    fn cancel(&self, timer: TimerId) {
        let flag = self
            .timers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&timer);
        if let Some(flag) = flag {
            flag.store(true, Ordering::Release);
        }
    }
}

impl Drop for ThreadScheduler {
    fn drop(&mut self) {
        let timers = self.timers.get_mut().unwrap_or_else(PoisonError::into_inner);
        for flag in timers.values() {
            flag.store(true, Ordering::Release);
        }
        timers.clear();
    }
}
