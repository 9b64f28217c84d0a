// Copyright 2026 the Sash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Helpers shared by the headless demos.
//!
//! The demos drive a [`WindowManager`] against an in-memory display and
//! print what reached the panel as coarse ASCII art.

use sash_compositor::headless::{ManualClock, MemoryDisplay};
use sash_compositor::{Color, FlatTheme, ManagerConfig, WindowManager};
use tracing_subscriber::EnvFilter;

/// The manager type every demo uses.
pub type DemoManager = WindowManager<MemoryDisplay, ManualClock, FlatTheme>;

/// Installs a `fmt` subscriber honoring `RUST_LOG`, defaulting to debug for Sash crates.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("sash_compositor=debug,sash_widgets=debug,info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// A headless manager over a `width` x `height` memory display.
pub fn headless(width: i32, height: i32, config: ManagerConfig) -> DemoManager {
    match WindowManager::new(
        MemoryDisplay::new(width, height),
        ManualClock::default(),
        FlatTheme,
        config,
    ) {
        Ok(wm) => wm,
        Err(err) => {
            tracing::error!(%err, "display failed to start");
            panic!("display failed to start: {err}");
        }
    }
}

/// Renders the display as text, one character per `cell` x `cell` block,
/// sampling the block's top-left pixel.
pub fn ascii_frame(display: &MemoryDisplay, cell: i32) -> String {
    let bounds = sash_compositor::Display::bounds(display);
    let step = usize::try_from(cell.max(1)).unwrap_or(1);
    let mut out = String::new();
    for y in (bounds.top..bounds.bottom).step_by(step) {
        for x in (bounds.left..bounds.right).step_by(step) {
            out.push(shade(display.pixel(x, y).unwrap_or_default()));
        }
        out.push('\n');
    }
    out
}

fn shade(c: Color) -> char {
    let r = (c.0 >> 11) & 0x1F;
    let g = (c.0 >> 5) & 0x3F;
    let b = c.0 & 0x1F;
    let luma = (r * 2 + g + b * 2) / 4;
    match luma {
        0..=3 => ' ',
        4..=11 => '.',
        12..=19 => ':',
        20..=27 => '+',
        28..=35 => '*',
        _ => '#',
    }
}
