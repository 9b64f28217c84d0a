// Copyright 2026 the Sash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A settings panel driven by a scripted touch controller.
//!
//! Run with `cargo run -p sash_demos --example touch_panel`. Set `RUST_LOG=trace`
//! to see every blit.

use sash_compositor::headless::ScriptedTouch;
use sash_compositor::{ManagerConfig, Style, WindowId};
use sash_demos::{ascii_frame, headless, init_logging};
use sash_rect::{Point, Rect};
use sash_widgets::{Button, CheckBox, Label, create_progress_bar, set_progress};

fn main() {
    init_logging();
    let mut wm = headless(160, 96, ManagerConfig::default());

    let panel = wm
        .create_window(
            None,
            WindowId(1),
            Style::VISIBLE | Style::FULL_SCREEN,
            Rect::EMPTY,
            "",
            Label::default(),
        )
        .expect("panel");
    wm.create_window(
        Some(panel),
        WindowId(1),
        Style::VISIBLE,
        Rect::new(4, 4, 156, 20),
        "SETTINGS",
        Label::default(),
    )
    .expect("title");
    let wifi = wm
        .create_window(
            Some(panel),
            WindowId(2),
            Style::VISIBLE,
            Rect::new(4, 24, 100, 44),
            "WIFI",
            CheckBox,
        )
        .expect("check box");
    wm.create_window(
        Some(panel),
        WindowId(3),
        Style::VISIBLE | Style::AUTO_SIZE,
        Rect::new(96, 64, 97, 65),
        "APPLY",
        Button::new(),
    )
    .expect("button");
    let bar = create_progress_bar(&mut wm, Some(panel), WindowId(4), Rect::new(4, 48, 156, 48), "", 0)
        .expect("progress bar");

    let mut touch = ScriptedTouch::new([None, Some(Point::new(10, 34)), None, Some(Point::new(110, 70))]);
    let mut tick = 0_u8;
    while !touch.is_done() || tick < 6 {
        wm.clock().advance(200);
        wm.poll_touch(&mut touch);
        set_progress(&mut wm, bar, tick.saturating_mul(20));
        let stats = wm.update();
        tracing::info!(tick, ?stats, "frame");
        tick += 1;
    }

    println!("{}", ascii_frame(wm.display(), 4));
    println!(
        "wifi checked: {}, blits: {}, presents: {}",
        wm.window(wifi).is_some_and(|w| w.is_checked()),
        wm.display().blits.len(),
        wm.display().presents
    );
}
