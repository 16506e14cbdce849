//! Deferred checks for the UI thread
//!
//! Nothing runs on its own: the host polls [`TimerQueue::take_due`] from its
//! frame loop. Every scheduled check gets a fresh generation, so a handle that
//! was cancelled or replaced can never be mistaken for the current one.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use super::stage::Stage;

/// Source of the current time
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to; clones share the same time
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

/// Identifies one scheduled check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle {
    pub stage: Stage,
    generation: u64,
}

#[derive(Debug)]
struct Pending {
    handle: TimerHandle,
    due: Instant,
}

/// Cancelable one-shot checks keyed by generation
#[derive(Debug, Default)]
pub struct TimerQueue {
    next_generation: u64,
    pending: Vec<Pending>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, stage: Stage, due: Instant) -> TimerHandle {
        self.next_generation += 1;
        let handle = TimerHandle {
            stage,
            generation: self.next_generation,
        };
        self.pending.push(Pending { handle, due });
        handle
    }

    /// Drop a check; unknown or already-fired handles are ignored
    pub fn cancel(&mut self, handle: TimerHandle) {
        self.pending.retain(|p| p.handle != handle);
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    /// Remove and return every check due at `now`, earliest first
    pub fn take_due(&mut self, now: Instant) -> Vec<TimerHandle> {
        let mut due: Vec<Pending> = Vec::new();
        self.pending.retain(|p| {
            if p.due <= now {
                due.push(Pending {
                    handle: p.handle,
                    due: p.due,
                });
                false
            } else {
                true
            }
        });
        due.sort_by_key(|p| (p.due, p.handle.generation));
        due.into_iter().map(|p| p.handle).collect()
    }

    /// When the earliest pending check becomes due
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.iter().map(|p| p.due).min()
    }

    pub(crate) fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_due_checks_fire_once_in_order() {
        let clock = ManualClock::new();
        let mut queue = TimerQueue::new();
        let t0 = clock.now();

        let late = queue.schedule(Stage::Chapter, t0 + Duration::from_millis(300));
        let early = queue.schedule(Stage::Book, t0 + Duration::from_millis(100));

        assert!(queue.take_due(t0).is_empty());
        assert_eq!(queue.next_due(), Some(t0 + Duration::from_millis(100)));

        clock.advance(Duration::from_millis(500));
        assert_eq!(queue.take_due(clock.now()), vec![early, late]);
        assert!(queue.take_due(clock.now()).is_empty());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_cancelled_handle_never_fires() {
        let t0 = Instant::now();
        let mut queue = TimerQueue::new();

        let first = queue.schedule(Stage::Book, t0);
        queue.cancel(first);
        let second = queue.schedule(Stage::Book, t0);

        assert_ne!(first, second);
        assert_eq!(queue.take_due(t0), vec![second]);

        // cancelling twice is harmless
        queue.cancel(first);
        queue.cancel(second);
        assert_eq!(queue.len(), 0);
    }
}
