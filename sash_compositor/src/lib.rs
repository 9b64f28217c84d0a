// Copyright 2026 the Sash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sash Compositor: a retained-mode window compositor for small touch displays.
//!
//! Applications build a tree of rectangular windows, mutate it through a
//! [`WindowManager`], and call [`WindowManager::update`] once per loop
//! iteration. Each top-level window owns an off-screen [`PixelBuffer`] its
//! descendants paint into; the compositor copies only dirty, unobscured
//! sub-rectangles of those buffers to the display.
//!
//! ## Model
//!
//! - Windows live in an arena owned by the manager and are addressed by
//!   generational [`WindowHandle`]s. Parent and child links are handles too.
//! - What differs between widget kinds is a [`WindowBehavior`] strategy object.
//!   Hooks receive a [`WindowCx`] giving access to the rest of the tree.
//! - Top-level windows are stacked by insertion order; z-order is the position
//!   in [`WindowTree::top_level`] and is always exactly `0..N`.
//!   [`WindowManager::set_foreground_window`] moves a window to the top.
//! - A window is *drawable* when it and all its ancestors are visible and
//!   alive and its rect touches the display.
//!
//! ## Dispatch
//!
//! Lifecycle and paint messages are routed immediately. Touch input is
//! two-phase: [`WindowManager::hit_test`] only queues a tap on the claiming
//! window, and the queue is drained at the start of the next
//! [`WindowManager::render`] until no window has pending messages.
//!
//! ## Example
//!
//! ```rust
//! use sash_compositor::headless::{ManualClock, MemoryDisplay};
//! use sash_compositor::{FlatTheme, ManagerConfig, Plain, Style, WindowId, WindowManager};
//! use sash_rect::{Point, Rect};
//!
//! let mut wm = WindowManager::new(
//!     MemoryDisplay::new(320, 240),
//!     ManualClock::default(),
//!     FlatTheme,
//!     ManagerConfig::default(),
//! )
//! .unwrap();
//! let a = wm
//!     .create_window(None, WindowId(1), Style::VISIBLE, Rect::new(0, 0, 100, 100), "", Plain)
//!     .unwrap();
//! let b = wm
//!     .create_window(None, WindowId(2), Style::VISIBLE, Rect::new(50, 50, 150, 150), "", Plain)
//!     .unwrap();
//!
//! let stats = wm.render();
//! assert!(stats.presented);
//!
//! // Both windows contain the point; only the one on top claims it.
//! assert_eq!(wm.hit_test(Point::new(75, 75)), Some(b));
//! assert_eq!(wm.window(a).unwrap().pending_messages(), 0);
//! ```
//!
//! ## Errors
//!
//! Configuration mistakes are reported as [`CreateError`]. Peripheral
//! start-up failures surface as [`DisplayError`] from [`WindowManager::new`].
//! Corrupted geometry, such as a dirty rect that does not map into its
//! window's buffer, is logged through `tracing` and panics.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod buffer;
mod config;
mod container;
mod dispatch;
mod driver;
mod error;
mod hit;
mod manager;
mod message;
mod render;
mod screensaver;
mod theme;
mod tree;
mod types;
mod window;

pub mod headless;

pub use buffer::{Canvas, Color, PixelBuffer};
pub use config::{ConcurrencyMode, ManagerConfig, TouchInbox};
pub use container::WindowContainer;
pub use driver::{Clock, Display, Rotation, TouchInput, blit_rows};
pub use error::{ContainerError, CreateError, DisplayError};
pub use manager::WindowManager;
pub use message::{Event, EventKind, InputKind, MessageKind, PackagedMessage, Param};
pub use render::RenderStats;
pub use theme::{Align, Chrome, ColorId, FlatTheme, Metric, MetricId, Theme};
pub use tree::WindowTree;
pub use types::{State, Style, WindowHandle, WindowId};
pub use window::{Plain, Window, WindowBehavior, WindowCx};
