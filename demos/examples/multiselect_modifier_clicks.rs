// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Desktop-style modifier clicks.
//!
//! Ctrl/cmd toggles single items, shift replaces the selection with a range
//! from the anchor, and ctrl/cmd+shift adds a range to what is already there.
//!
//! Run:
//! - `cargo run -p understory_demos --example multiselect_modifier_clicks`

use std::borrow::Cow;
use std::time::Duration;

use understory_multiselect::{
    ClickEvent, ClickTarget, GroupKey, ItemId, Modifiers, PressTimer, SelectionEngine,
    SelectionHost, SelectionState,
};

/// Modifier clicks never schedule timers, so this host has none.
struct FileList {
    files: Vec<ItemId>,
    next_timer: u64,
}

impl SelectionHost for FileList {
    fn order(&self, _group: Option<&GroupKey>) -> Cow<'_, [ItemId]> {
        Cow::Borrowed(self.files.as_slice())
    }

    fn flash_selection(&mut self, _id: &ItemId) {}

    fn schedule_press_timer(&mut self, _delay: Duration) -> PressTimer {
        self.next_timer += 1;
        PressTimer::from_raw(self.next_timer)
    }

    fn cancel_press_timer(&mut self, _timer: PressTimer) {}
}

fn click(
    engine: &mut SelectionEngine,
    state: &mut SelectionState,
    list: &mut FileList,
    modifiers: Modifiers,
    name: &str,
) -> Vec<String> {
    let mut event = ClickEvent::new(modifiers);
    let outcome =
        engine.handle_click_selection(state, list, &mut event, ClickTarget::new(name));
    assert!(outcome.handled);
    assert!(event.default_prevented);
    let names: Vec<String> = outcome.selection.iter().map(ToString::to_string).collect();
    println!("{modifiers:?} click {name:<10} -> {names:?} (changed: {})", outcome.changed);
    names
}

fn main() {
    env_logger::init();

    let mut list = FileList {
        files: ["a.rs", "b.rs", "c.rs", "d.rs", "e.rs", "f.rs"]
            .into_iter()
            .map(ItemId::from)
            .collect(),
        next_timer: 0,
    };
    let mut state = SelectionState::new();
    let mut engine = SelectionEngine::default();

    click(&mut engine, &mut state, &mut list, Modifiers::CTRL, "b.rs");
    click(&mut engine, &mut state, &mut list, Modifiers::META, "d.rs");
    let names = click(&mut engine, &mut state, &mut list, Modifiers::SHIFT, "f.rs");
    assert_eq!(names, ["d.rs", "e.rs", "f.rs"]);

    click(&mut engine, &mut state, &mut list, Modifiers::CTRL, "a.rs");
    let both = Modifiers::CTRL | Modifiers::SHIFT;
    let names = click(&mut engine, &mut state, &mut list, both, "b.rs");
    assert_eq!(names, ["d.rs", "e.rs", "f.rs", "a.rs", "b.rs"]);

    // A plain click is left to the host.
    let mut event = ClickEvent::new(Modifiers::empty());
    let outcome = engine.handle_click_selection(
        &mut state,
        &mut list,
        &mut event,
        ClickTarget::new("c.rs"),
    );
    assert!(!outcome.handled);
    assert!(!event.default_prevented);
}
