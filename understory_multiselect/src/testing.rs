// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted grid host shared by the unit tests.

use alloc::borrow::Cow;
use core::time::Duration;
use std::collections::HashMap;
use std::time::Instant;

use crate::config::DEFAULT_LONG_PRESS_DELAY;
use crate::engine::SelectionEngine;
use crate::host::SelectionHost;
use crate::state::SelectionState;
use crate::timer::TimerQueue;
use crate::types::{GroupKey, ItemId, PressTimer};

pub(crate) const LONG_PRESS: Duration = DEFAULT_LONG_PRESS_DELAY;

pub(crate) fn ids<const N: usize>(items: [&str; N]) -> Vec<ItemId> {
    items.into_iter().map(ItemId::from).collect()
}

pub(crate) struct GridHost {
    pub(crate) orders: HashMap<Option<GroupKey>, Vec<ItemId>>,
    pub(crate) flashed: Vec<ItemId>,
    pub(crate) timers: TimerQueue,
}

impl GridHost {
    pub(crate) fn new(order: Vec<ItemId>) -> Self {
        let mut orders = HashMap::new();
        orders.insert(None, order);
        Self {
            orders,
            flashed: Vec::new(),
            timers: TimerQueue::new(Instant::now()),
        }
    }

    pub(crate) fn with_group(mut self, group: &str, order: Vec<ItemId>) -> Self {
        self.orders.insert(Some(GroupKey::from(group)), order);
        self
    }

    pub(crate) fn set_order(&mut self, order: Vec<ItemId>) {
        self.orders.insert(None, order);
    }

    /// Advance the clock and deliver every timer that fired.
    pub(crate) fn elapse(
        &mut self,
        engine: &mut SelectionEngine,
        state: &mut SelectionState,
        by: Duration,
    ) {
        for timer in self.timers.advance(by) {
            engine.handle_press_timeout(state, self, timer);
        }
    }
}

impl SelectionHost for GridHost {
    fn order(&self, group: Option<&GroupKey>) -> Cow<'_, [ItemId]> {
        match self.orders.get(&group.cloned()) {
            Some(order) => Cow::Borrowed(order.as_slice()),
            None => Cow::Owned(Vec::new()),
        }
    }

    fn flash_selection(&mut self, id: &ItemId) {
        self.flashed.push(id.clone());
    }

    fn schedule_press_timer(&mut self, delay: Duration) -> PressTimer {
        self.timers.schedule(delay)
    }

    fn cancel_press_timer(&mut self, timer: PressTimer) {
        self.timers.cancel(timer);
    }
}
