// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::borrow::Cow;
use std::time::{Duration, Instant};

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_multiselect::{
    ClickEvent, ClickTarget, GroupKey, ItemId, Modifiers, PointerEvent, PressTimer,
    SelectionEngine, SelectionHost, SelectionState, TimerQueue,
};

struct BenchGrid {
    order: Vec<ItemId>,
    timers: TimerQueue,
}

impl BenchGrid {
    fn new(n: usize) -> Self {
        Self {
            order: (0..n).map(ItemId::from).collect(),
            timers: TimerQueue::new(Instant::now()),
        }
    }
}

impl SelectionHost for BenchGrid {
    fn order(&self, _group: Option<&GroupKey>) -> Cow<'_, [ItemId]> {
        Cow::Borrowed(self.order.as_slice())
    }

    fn flash_selection(&mut self, _id: &ItemId) {}

    fn schedule_press_timer(&mut self, delay: Duration) -> PressTimer {
        self.timers.schedule(delay)
    }

    fn cancel_press_timer(&mut self, timer: PressTimer) {
        self.timers.cancel(timer);
    }
}

/// Returns a grid with a live gesture started at index 0.
fn live_gesture(n: usize) -> (SelectionEngine, SelectionState, BenchGrid) {
    let mut grid = BenchGrid::new(n);
    let mut state = SelectionState::new();
    let mut engine = SelectionEngine::default();
    let down = PointerEvent::primary((0.0, 0.0));
    engine.handle_pointer_down(&mut state, &mut grid, &down, 0, 0_usize, None);
    for timer in grid.timers.advance(Duration::from_millis(300)) {
        engine.handle_press_timeout(&mut state, &mut grid, timer);
    }
    (engine, state, grid)
}

fn bench_pointer_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("press");
    group.bench_function("pointer_move_within_threshold", |b| {
        let mut grid = BenchGrid::new(64);
        let mut state = SelectionState::new();
        let mut engine = SelectionEngine::default();
        let down = PointerEvent::primary((100.0, 100.0));
        engine.handle_pointer_down(&mut state, &mut grid, &down, 3, 3_usize, None);
        let jitter = PointerEvent::primary((102.0, 101.0));
        b.iter(|| {
            engine.handle_pointer_move(&mut state, &mut grid, black_box(&jitter));
        });
    });
    group.bench_function("arm_and_cancel", |b| {
        let mut grid = BenchGrid::new(64);
        let mut state = SelectionState::new();
        let mut engine = SelectionEngine::default();
        let down = PointerEvent::primary((0.0, 0.0));
        let far = PointerEvent::primary((0.0, 50.0));
        b.iter(|| {
            engine.handle_pointer_down(&mut state, &mut grid, &down, 7, 7_usize, None);
            engine.handle_pointer_move(&mut state, &mut grid, black_box(&far));
        });
    });
    group.finish();
}

fn bench_hover_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("hover");
    for &n in &[100_usize, 1_000, 10_000] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("sweep_to_end_n{}", n), |b| {
            b.iter_batched(
                || live_gesture(n),
                |(mut engine, mut state, mut grid)| {
                    for index in (0..n).step_by((n / 32).max(1)) {
                        engine.handle_select_hover(&mut state, &mut grid, index, None);
                    }
                    black_box(state.selection.len());
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_clicks(c: &mut Criterion) {
    let mut group = c.benchmark_group("click");
    let n = 5_000_usize;
    group.bench_function("ctrl_toggle", |b| {
        let mut grid = BenchGrid::new(n);
        let mut state = SelectionState::new();
        let mut engine = SelectionEngine::default();
        let mut i = 0_usize;
        b.iter(|| {
            let mut event = ClickEvent::new(Modifiers::CTRL);
            let target = ClickTarget::new(i % n);
            i = i.wrapping_add(7);
            black_box(engine.handle_click_selection(&mut state, &mut grid, &mut event, target));
        });
    });
    group.bench_function(format!("shift_range_n{}", n), |b| {
        let mut grid = BenchGrid::new(n);
        let mut state = SelectionState::new();
        let mut engine = SelectionEngine::default();
        let mut flip = false;
        b.iter(|| {
            let mut event = ClickEvent::new(Modifiers::SHIFT);
            let id = if flip { 0 } else { n - 1 };
            flip = !flip;
            let target = ClickTarget::new(id);
            black_box(engine.handle_click_selection(&mut state, &mut grid, &mut event, target));
        });
    });
    group.finish();
}

criterion_group!(benches, bench_pointer_move, bench_hover_sweep, bench_clicks);
criterion_main!(benches);
