// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grouped sub-grids and two grids sharing a window.
//!
//! One component renders photos grouped by day. A drag that starts in one day
//! ignores hovers from the others. A second component on the same
//! [`GestureBoard`] cannot start a gesture while the first one is live.
//!
//! Run:
//! - `cargo run -p understory_demos --example multiselect_grouped`

use std::borrow::Cow;
use std::collections::HashMap;
use std::time::{Duration, Instant};

use understory_multiselect::{
    GestureBoard, GroupKey, ItemId, PointerEvent, PressTimer, SelectionConfig, SelectionEngine,
    SelectionHost, SelectionState, TimerQueue,
};

struct DayGrid {
    days: HashMap<GroupKey, Vec<ItemId>>,
    timers: TimerQueue,
}

impl DayGrid {
    fn new(days: &[(&str, &[&str])]) -> Self {
        Self {
            days: days
                .iter()
                .map(|(day, photos)| {
                    let photos = photos.iter().copied().map(ItemId::from).collect();
                    (GroupKey::from(*day), photos)
                })
                .collect(),
            timers: TimerQueue::new(Instant::now()),
        }
    }

    fn tick(&mut self, engine: &mut SelectionEngine, state: &mut SelectionState) {
        for timer in self.timers.advance(Duration::from_millis(300)) {
            engine.handle_press_timeout(state, self, timer);
        }
    }
}

impl SelectionHost for DayGrid {
    fn order(&self, group: Option<&GroupKey>) -> Cow<'_, [ItemId]> {
        match group.and_then(|day| self.days.get(day)) {
            Some(photos) => Cow::Borrowed(photos.as_slice()),
            None => Cow::Owned(Vec::new()),
        }
    }

    fn flash_selection(&mut self, id: &ItemId) {
        log::info!("flash {id}");
    }

    fn schedule_press_timer(&mut self, delay: Duration) -> PressTimer {
        self.timers.schedule(delay)
    }

    fn cancel_press_timer(&mut self, timer: PressTimer) {
        self.timers.cancel(timer);
    }
}

fn names(state: &SelectionState) -> Vec<&str> {
    state.selection.iter().map(ItemId::as_str).collect()
}

fn main() {
    env_logger::init();

    let board = GestureBoard::new();
    let monday: &[&str] = &["mon-1", "mon-2", "mon-3"];
    let tuesday: &[&str] = &["tue-1", "tue-2"];
    let mut photos = DayGrid::new(&[("monday", monday), ("tuesday", tuesday)]);
    let everything: &[&str] = &["album-1", "album-2"];
    let mut albums = DayGrid::new(&[("all", everything)]);

    let mut photo_state = SelectionState::new();
    let mut album_state = SelectionState::new();
    let mut photo_engine = SelectionEngine::mounted(SelectionConfig::default(), &board);
    let mut album_engine = SelectionEngine::mounted(SelectionConfig::default(), &board);

    let monday_key = GroupKey::from("monday");
    let tuesday_key = GroupKey::from("tuesday");
    let press = PointerEvent::primary((0.0, 0.0));

    photo_engine.handle_pointer_down(
        &mut photo_state,
        &mut photos,
        &press,
        0,
        "mon-1",
        Some(monday_key.clone()),
    );
    photos.tick(&mut photo_engine, &mut photo_state);

    // Drifting into Tuesday's sub-grid does not mix indices.
    photo_engine.handle_select_hover(&mut photo_state, &mut photos, 1, Some(&tuesday_key));
    println!("== After hovering tuesday ==\n  {:?}", names(&photo_state));
    assert_eq!(names(&photo_state), ["mon-1"]);

    photo_engine.handle_select_hover(&mut photo_state, &mut photos, 2, Some(&monday_key));
    println!("== After hovering monday ==\n  {:?}", names(&photo_state));
    assert_eq!(names(&photo_state), ["mon-1", "mon-2", "mon-3"]);

    // The album grid shares the window; its presses wait for the live gesture.
    let all = GroupKey::from("all");
    album_engine.handle_pointer_down(
        &mut album_state,
        &mut albums,
        &press,
        0,
        "album-1",
        Some(all.clone()),
    );
    albums.tick(&mut album_engine, &mut album_state);
    assert!(album_state.selection.is_empty());

    // Window-level pointer-up goes to whichever grid holds the gesture.
    if board.active() == photo_engine.grid_id() {
        photo_engine.end_gesture(&mut photo_state, &mut photos);
    }
    let again = Some(all);
    album_engine.handle_pointer_down(&mut album_state, &mut albums, &press, 1, "album-2", again);
    albums.tick(&mut album_engine, &mut album_state);
    println!("== Albums ==\n  {:?}", names(&album_state));
    assert_eq!(names(&album_state), ["album-2"]);
    assert_eq!(names(&photo_state), ["mon-1", "mon-2", "mon-3"]);
}
