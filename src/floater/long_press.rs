//! Long-press detection for one stage

use std::time::{Duration, Instant};

use super::stage::Stage;
use super::timer::{TimerHandle, TimerQueue};

/// Delay after which holding a cell commits it
pub const LONG_PRESS_DELAY_MILLIS: u64 = 650;

/// Watches the hovered cell of one stage and owns at most one pending check
#[derive(Debug)]
pub struct LongPressTracker {
    stage: Stage,
    watched: Option<usize>,
    previous: Option<usize>,
    pending: Option<TimerHandle>,
}

impl LongPressTracker {
    pub fn new(stage: Stage) -> Self {
        Self {
            stage,
            watched: None,
            previous: None,
            pending: None,
        }
    }

    /// Feed the hovered cell after a pointer move.
    ///
    /// A new cell (or leaving all cells) cancels the pending check; a new
    /// valid cell schedules a fresh one `delay` from `now`.
    pub fn observe(
        &mut self,
        hovered: Option<usize>,
        now: Instant,
        delay: Duration,
        queue: &mut TimerQueue,
    ) {
        if hovered != self.previous || hovered.is_none() {
            self.cancel(queue);

            if let Some(index) = hovered {
                self.watched = Some(index);
                self.pending = Some(queue.schedule(self.stage, now + delay));
            }
        }

        self.previous = hovered;
    }

    /// Consume a fired check. Returns true when it is this tracker's live
    /// check and the pointer is still on the watched cell.
    pub fn fire(&mut self, handle: TimerHandle, hovered: Option<usize>) -> bool {
        if self.pending != Some(handle) {
            return false;
        }
        self.pending = None;
        hovered.is_some() && hovered == self.watched
    }

    pub fn cancel(&mut self, queue: &mut TimerQueue) {
        if let Some(handle) = self.pending.take() {
            queue.cancel(handle);
        }
    }

    /// Forget everything, including the last observed cell
    pub fn reset(&mut self, queue: &mut TimerQueue) {
        self.cancel(queue);
        self.watched = None;
        self.previous = None;
    }

    #[cfg(test)]
    fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
