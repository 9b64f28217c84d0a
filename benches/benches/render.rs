// Copyright 2026 the Sash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use sash_compositor::headless::{ManualClock, MemoryDisplay};
use sash_compositor::{FlatTheme, ManagerConfig, Plain, Style, WindowHandle, WindowId, WindowManager};
use sash_rect::{Point, Rect};

type Wm = WindowManager<MemoryDisplay, ManualClock>;

/// A desktop with `n` overlapping top-levels cascading down the display,
/// each holding four children, already rendered once.
fn cascade(n: u16) -> (Wm, Vec<WindowHandle>) {
    let mut wm = WindowManager::new(
        MemoryDisplay::new(480, 320),
        ManualClock::default(),
        FlatTheme,
        ManagerConfig::default(),
    )
    .expect("memory display always starts");
    let mut tops = Vec::new();
    for i in 0..n {
        let o = i32::from(i) * 12;
        let h = wm
            .create_window(
                None,
                WindowId(i + 1),
                Style::VISIBLE | Style::FRAME,
                Rect::new(o, o, o + 200, o + 140),
                "",
                Plain,
            )
            .expect("distinct ids");
        for c in 0..4_u16 {
            let x = o + 10 + i32::from(c) * 45;
            wm.create_window(
                Some(h),
                WindowId(c + 1),
                Style::VISIBLE | Style::FRAME,
                Rect::new(x, o + 20, x + 40, o + 60),
                "",
                Plain,
            )
            .expect("distinct ids");
        }
        tops.push(h);
    }
    wm.render();
    (wm, tops)
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("sash_compositor");
    group.sample_size(50);

    for &n in &[4_u16, 16] {
        group.bench_function(format!("idle_render(tops={n})"), |b| {
            let (mut wm, _) = cascade(n);
            b.iter(|| black_box(wm.render()));
        });

        group.bench_function(format!("foreground_bottom(tops={n})"), |b| {
            b.iter_batched(
                || cascade(n),
                |(mut wm, tops)| {
                    wm.set_foreground_window(tops[0]);
                    black_box(wm.render())
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("hit_test_topmost(tops={n})"), |b| {
            let (mut wm, _) = cascade(n);
            let o = i32::from(n - 1) * 12;
            let at = Point::new(o + 20, o + 30);
            b.iter(|| {
                wm.clock().advance(1_000);
                let hit = wm.hit_test(black_box(at));
                wm.process_queues();
                black_box(hit)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
