// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A deterministic deadline queue for long-press timers.
//!
//! ## Usage
//!
//! Hosts without their own scheduler keep a [`TimerQueue`] next to their
//! [`SelectionState`](crate::state::SelectionState), delegate
//! [`SelectionHost::schedule_press_timer`](crate::host::SelectionHost::schedule_press_timer)
//! and [`SelectionHost::cancel_press_timer`](crate::host::SelectionHost::cancel_press_timer)
//! to it, and drive it from their frame or event loop with
//! [`TimerQueue::advance_to`]. Each returned token is then forwarded to
//! [`SelectionEngine::handle_press_timeout`](crate::engine::SelectionEngine::handle_press_timeout).
//!
//! Time only moves when the caller says so, which keeps tests exact.
//!
//! ```
//! use core::time::Duration;
//! use std::time::Instant;
//! use understory_multiselect::timer::TimerQueue;
//!
//! let start = Instant::now();
//! let mut timers = TimerQueue::new(start);
//! let t = timers.schedule(Duration::from_millis(250));
//! assert!(timers.advance(Duration::from_millis(100)).is_empty());
//! assert_eq!(timers.advance(Duration::from_millis(150)), vec![t]);
//! ```

use core::time::Duration;
use std::time::Instant;

use crate::types::PressTimer;

/// Pending timers ordered by deadline, with a caller-driven clock.
#[derive(Clone, Debug)]
pub struct TimerQueue {
    now: Instant,
    next_token: u64,
    pending: Vec<(PressTimer, Instant)>,
}

impl TimerQueue {
    /// Create an empty queue whose clock reads `now`.
    pub fn new(now: Instant) -> Self {
        Self {
            now,
            next_token: 1,
            pending: Vec::new(),
        }
    }

    /// Current clock reading.
    pub fn now(&self) -> Instant {
        self.now
    }

    /// Schedule a timer to fire `delay` after the current clock reading.
    pub fn schedule(&mut self, delay: Duration) -> PressTimer {
        let token = PressTimer::from_raw(self.next_token);
        self.next_token += 1;
        self.pending.push((token, self.now + delay));
        token
    }

    /// Cancel `timer`. Returns `false` if it already fired or was never scheduled.
    pub fn cancel(&mut self, timer: PressTimer) -> bool {
        let before = self.pending.len();
        self.pending.retain(|(t, _)| *t != timer);
        self.pending.len() != before
    }

    /// Returns `true` if `timer` is still waiting to fire.
    pub fn is_pending(&self, timer: PressTimer) -> bool {
        self.pending.iter().any(|(t, _)| *t == timer)
    }

    /// Number of timers waiting to fire.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` if no timer is waiting.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Move the clock forward by `by` and return the timers that fired.
    pub fn advance(&mut self, by: Duration) -> Vec<PressTimer> {
        let now = self.now + by;
        self.advance_to(now)
    }

    /// Move the clock to `now` and return the timers that fired, earliest first.
    ///
    /// The clock never moves backwards; an earlier `now` only collects timers
    /// that are already due.
    pub fn advance_to(&mut self, now: Instant) -> Vec<PressTimer> {
        if now > self.now {
            self.now = now;
        }
        let now = self.now;
        let mut due: Vec<(PressTimer, Instant)> = Vec::new();
        self.pending.retain(|&(timer, deadline)| {
            if deadline <= now {
                due.push((timer, deadline));
                false
            } else {
                true
            }
        });
        due.sort_by_key(|&(timer, deadline)| (deadline, timer));
        due.into_iter().map(|(timer, _)| timer).collect()
    }
}
