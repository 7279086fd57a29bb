// Copyright (C) 2026  Stacks Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Debounce and frame-coalescing primitives.
//!
//! Scroll input can arrive far faster than the display refreshes, and filter
//! keystrokes faster than a recompute is worth. Both are tamed here with
//! plain values driven by timestamps the caller passes in, so tests run them
//! against a simulated clock instead of the wall.

use std::time::{Duration, Instant};

/// Delay between the last filter keystroke and the pipeline recompute.
pub(crate) const FILTER_DEBOUNCE: Duration = Duration::from_millis(120);

/// Restartable single-shot timer. Each [`schedule`](Debouncer::schedule)
/// call replaces any pending deadline, so only the state present when the
/// timer finally elapses takes effect: last write wins, never stacked.
#[derive(Debug)]
pub(crate) struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub(crate) fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Start or restart the timer from `now`.
    pub(crate) fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Discard any pending deadline without firing.
    pub(crate) fn cancel(&mut self) {
        self.deadline = None;
    }

    pub(crate) fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// True exactly once after the deadline has elapsed.
    pub(crate) fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Collapses high-frequency input to one value per frame. Intermediate
/// values are overwritten and dropped with no effect; the consumer drains
/// the latest at the frame boundary.
#[derive(Debug)]
pub(crate) struct FrameCoalescer<T> {
    pending: Option<T>,
}

impl<T> Default for FrameCoalescer<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> FrameCoalescer<T> {
    pub(crate) fn push(&mut self, value: T) {
        self.pending = Some(value);
    }

    pub(crate) fn take(&mut self) -> Option<T> {
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debouncer_fires_once_after_delay() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(FILTER_DEBOUNCE);

        debouncer.schedule(start);
        assert!(!debouncer.fire(start + Duration::from_millis(119)));
        assert!(debouncer.fire(start + Duration::from_millis(120)));
        // Consumed; does not fire again.
        assert!(!debouncer.fire(start + Duration::from_millis(500)));
    }

    #[test]
    fn rapid_edits_produce_a_single_late_fire() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(FILTER_DEBOUNCE);

        // Five keystrokes within the debounce interval.
        for ms in [0u64, 30, 60, 90, 110] {
            debouncer.schedule(start + Duration::from_millis(ms));
        }

        // The earlier deadlines were all replaced by the last keystroke's.
        assert!(!debouncer.fire(start + Duration::from_millis(200)));
        assert!(debouncer.fire(start + Duration::from_millis(230)));
    }

    #[test]
    fn cancel_discards_the_pending_deadline() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(FILTER_DEBOUNCE);

        debouncer.schedule(start);
        assert!(debouncer.is_pending());
        debouncer.cancel();
        assert!(!debouncer.is_pending());
        assert!(!debouncer.fire(start + Duration::from_secs(1)));
    }

    #[test]
    fn coalescer_keeps_only_the_most_recent_value() {
        let mut scroll: FrameCoalescer<u64> = FrameCoalescer::default();

        scroll.push(100);
        scroll.push(250);
        scroll.push(170);

        assert_eq!(scroll.take(), Some(170));
        // Drained; the next frame sees nothing.
        assert_eq!(scroll.take(), None);
    }
}
