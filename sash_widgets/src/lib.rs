// Copyright 2026 the Sash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sash Widgets: standard window behaviors for the Sash compositor.
//!
//! Each widget is a [`WindowBehavior`](sash_compositor::WindowBehavior)
//! strategy plugged into an ordinary window; the compositor keeps owning
//! geometry, state and chrome.
//!
//! - [`Button`]: raises `ChildTapped` on its parent; optionally latching.
//! - [`Label`]: static, aligned text.
//! - [`CheckBox`]: toggles its checked state and raises `ChildToggled`.
//! - [`ProgressBar`]: a percentage bar; see [`create_progress_bar`] and [`set_progress`].
//! - [`Prompt`]: a framed top-level window with a message and buttons, built by
//!   [`create_prompt`].
//!
//! ```rust
//! use sash_compositor::headless::{ManualClock, MemoryDisplay};
//! use sash_compositor::{FlatTheme, ManagerConfig, WindowId, WindowManager};
//! use sash_rect::{Point, Rect};
//! use sash_widgets::{Prompt, create_prompt, prompt_choice};
//!
//! let mut wm = WindowManager::new(
//!     MemoryDisplay::new(320, 240),
//!     ManualClock::default(),
//!     FlatTheme,
//!     ManagerConfig::default(),
//! )
//! .unwrap();
//! let ok = WindowId(1);
//! let prompt = create_prompt(
//!     &mut wm,
//!     WindowId(10),
//!     Rect::new(40, 40, 280, 200),
//!     "Save changes?",
//!     &[(WindowId(2), "No"), (ok, "Yes")],
//!     Prompt::new(),
//! )
//! .unwrap();
//! wm.render();
//!
//! let yes = wm.find(Some(prompt), ok).unwrap();
//! let at = wm.window(yes).unwrap().rect().origin();
//! wm.hit_test(Point::new(at.x + 1, at.y + 1));
//! wm.render();
//! assert_eq!(prompt_choice(&wm, prompt), Some(ok));
//! assert!(!wm.is_drawable(prompt));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod button;
mod checkbox;
mod label;
mod progress;
mod prompt;

pub use button::Button;
pub use checkbox::CheckBox;
pub use label::Label;
pub use progress::{ProgressBar, create_progress_bar, progress, set_progress};
pub use prompt::{PROMPT_LABEL_ID, Prompt, create_prompt, prompt_choice};
