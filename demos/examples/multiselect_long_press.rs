// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Long-press then drag across a grid.
//!
//! Press and hold an item until the long-press timer fires, hover across
//! a few neighbours, and release. Set `RUST_LOG=trace` to watch the engine.
//!
//! Run:
//! - `cargo run -p understory_demos --example multiselect_long_press`

use std::borrow::Cow;
use std::time::{Duration, Instant};

use kurbo::Point;
use understory_multiselect::{
    GroupKey, ItemId, PointerEvent, PressTimer, SelectionEngine, SelectionHost, SelectionState,
    TimerQueue,
};

struct PhotoGrid {
    photos: Vec<ItemId>,
    timers: TimerQueue,
}

impl SelectionHost for PhotoGrid {
    fn order(&self, _group: Option<&GroupKey>) -> Cow<'_, [ItemId]> {
        Cow::Borrowed(self.photos.as_slice())
    }

    fn flash_selection(&mut self, id: &ItemId) {
        println!("  flash {id}");
    }

    fn schedule_press_timer(&mut self, delay: Duration) -> PressTimer {
        self.timers.schedule(delay)
    }

    fn cancel_press_timer(&mut self, timer: PressTimer) {
        self.timers.cancel(timer);
    }
}

impl PhotoGrid {
    fn tick(&mut self, engine: &mut SelectionEngine, state: &mut SelectionState, by: Duration) {
        for timer in self.timers.advance(by) {
            engine.handle_press_timeout(state, self, timer);
        }
    }
}

fn print_selection(label: &str, state: &SelectionState) {
    let ids: Vec<&str> = state.selection.iter().map(ItemId::as_str).collect();
    println!("== {label} ==\n  {ids:?}");
}

fn main() {
    env_logger::init();

    let mut grid = PhotoGrid {
        photos: ["IMG_001", "IMG_002", "IMG_003", "IMG_004", "IMG_005", "IMG_006"]
            .into_iter()
            .map(ItemId::from)
            .collect(),
        timers: TimerQueue::new(Instant::now()),
    };
    let mut state = SelectionState::new();
    let mut engine = SelectionEngine::default();

    // A quick tap never escalates.
    let tap = PointerEvent::primary(Point::new(10.0, 10.0));
    engine.handle_pointer_down(&mut state, &mut grid, &tap, 0, "IMG_001", None);
    grid.tick(&mut engine, &mut state, Duration::from_millis(120));
    engine.end_gesture(&mut state, &mut grid);
    print_selection("Tap", &state);
    assert!(state.selection.is_empty());
    assert!(!state.take_suppress_click());

    // Hold IMG_002, then sweep right and back.
    let hold = PointerEvent::primary(Point::new(110.0, 10.0));
    engine.handle_pointer_down(&mut state, &mut grid, &hold, 1, "IMG_002", None);
    grid.tick(&mut engine, &mut state, Duration::from_millis(300));
    print_selection("Long press", &state);

    for index in [2, 3, 4, 3] {
        engine.handle_select_hover(&mut state, &mut grid, index, None);
    }
    engine.end_gesture(&mut state, &mut grid);
    print_selection("Drag and release", &state);

    let selected: Vec<&str> = state.selection.iter().map(ItemId::as_str).collect();
    assert_eq!(selected, ["IMG_002", "IMG_003", "IMG_004"]);
    // The click that follows the release must be swallowed by the host.
    assert!(state.take_suppress_click());
    assert!(!state.take_suppress_click());
    log::info!("anchor after gesture: {:?}", engine.anchor());
}
