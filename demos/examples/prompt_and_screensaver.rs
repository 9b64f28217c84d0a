// Copyright 2026 the Sash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A modal prompt answered from an interrupt-style touch inbox, followed by
//! the screensaver kicking in and being dismissed.
//!
//! Run with `cargo run -p sash_demos --example prompt_and_screensaver`.

use sash_compositor::{ConcurrencyMode, ManagerConfig, Plain, Style, WindowId};
use sash_demos::{ascii_frame, headless, init_logging};
use sash_rect::{Point, Rect};
use sash_widgets::{Prompt, create_prompt, prompt_choice};

fn main() {
    init_logging();
    let config = ManagerConfig::default().with_concurrency(ConcurrencyMode::Guarded);
    let mut wm = headless(200, 120, config);
    let inbox = wm.touch_inbox().expect("guarded mode has an inbox");

    wm.create_window(
        None,
        WindowId(1),
        Style::VISIBLE | Style::FULL_SCREEN,
        Rect::EMPTY,
        "",
        Plain,
    )
    .expect("desktop");
    let prompt = create_prompt(
        &mut wm,
        WindowId(2),
        Rect::new(20, 20, 180, 100),
        "OVERWRITE?",
        &[(WindowId(1), "NO"), (WindowId(2), "YES")],
        Prompt::with_callback(|id| tracing::info!(%id, "answered")),
    )
    .expect("prompt");
    wm.update();
    println!("{}", ascii_frame(wm.display(), 4));

    let yes = wm.find(Some(prompt), WindowId(2)).expect("yes button");
    let at = wm.window(yes).expect("yes button").rect();
    inbox.push(Point::new(at.left + 4, at.top + 4));
    wm.clock().advance(500);
    wm.update();
    println!("choice: {:?}", prompt_choice(&wm, prompt));

    wm.enable_screensaver(5_000);
    for _ in 0..4 {
        wm.clock().advance(2_000);
        let stats = wm.update();
        tracing::info!(?stats, active = wm.is_screensaver_active(), "tick");
    }
    inbox.push(Point::new(1, 1));
    wm.update();
    println!("{}", ascii_frame(wm.display(), 4));
}
