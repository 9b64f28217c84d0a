// Copyright 2026 the Sash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory collaborators for tests, benchmarks and demos.

use alloc::collections::VecDeque;
use alloc::rc::Rc;
use alloc::vec;
use alloc::vec::Vec;
use core::cell::Cell;

use sash_rect::{Point, Rect};

use crate::buffer::{Color, PixelBuffer};
use crate::driver::{Clock, Display, Rotation, TouchInput, blit_rows};
use crate::error::DisplayError;

/// A framebuffer in memory that records what was written to it.
#[derive(Clone, Debug)]
pub struct MemoryDisplay {
    width: i32,
    height: i32,
    rotation: Rotation,
    frame: Vec<Color>,
    /// Display rects written by [`Display::write_region`], in order.
    pub blits: Vec<Rect>,
    /// Rects passed to [`Display::fill_rect`], in order.
    pub fills: Vec<Rect>,
    /// Number of [`Display::present`] calls.
    pub presents: usize,
    /// Make [`Display::begin`] fail.
    pub fail_begin: bool,
}

impl MemoryDisplay {
    /// A black display of the given size.
    pub fn new(width: i32, height: i32) -> Self {
        let (width, height) = (width.max(0), height.max(0));
        let len = usize::try_from(width).unwrap_or(0) * usize::try_from(height).unwrap_or(0);
        Self {
            width,
            height,
            rotation: Rotation::Deg0,
            frame: vec![Color::BLACK; len],
            blits: Vec::new(),
            fills: Vec::new(),
            presents: 0,
            fail_begin: false,
        }
    }

    /// Pixel at display position `(x, y)`.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if !self.bounds().contains_point(x, y) {
            return None;
        }
        let i = usize::try_from(y * self.width + x).ok()?;
        self.frame.get(i).copied()
    }

    /// Current orientation.
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Forgets recorded blits, fills and presents.
    pub fn clear_log(&mut self) {
        self.blits.clear();
        self.fills.clear();
        self.presents = 0;
    }
}

impl Display for MemoryDisplay {
    fn begin(&mut self) -> Result<(), DisplayError> {
        if self.fail_begin {
            Err(DisplayError::NoDisplay)
        } else {
            Ok(())
        }
    }

    /// Quarter turns swap width and height; the frame is cleared to black.
    fn set_rotation(&mut self, rotation: Rotation) {
        let quarter = |r: Rotation| matches!(r, Rotation::Deg90 | Rotation::Deg270);
        if quarter(rotation) != quarter(self.rotation) {
            core::mem::swap(&mut self.width, &mut self.height);
        }
        self.rotation = rotation;
        self.frame.fill(Color::BLACK);
    }

    fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    fn write_pixels(&mut self, offset: usize, pixels: &[Color]) {
        if let Some(dst) = self.frame.get_mut(offset..offset + pixels.len()) {
            dst.copy_from_slice(pixels);
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.fills.push(rect);
        let r = rect.intersection(&self.bounds());
        for y in r.top..r.bottom {
            let (Ok(start), Ok(len)) = (
                usize::try_from(y * self.width + r.left),
                usize::try_from(r.width()),
            ) else {
                continue;
            };
            if let Some(row) = self.frame.get_mut(start..start + len) {
                row.fill(color);
            }
        }
    }

    fn present(&mut self) {
        self.presents += 1;
    }

    fn write_region(&mut self, dst: Point, buffer: &PixelBuffer, src: Rect) {
        self.blits
            .push(Rect::from_origin_size(dst.x, dst.y, src.width(), src.height()));
        blit_rows(self, dst, buffer, src);
    }
}

/// A clock that only moves when told to. Clones share the same time.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    /// Sets the current time.
    pub fn set(&self, ms: u64) {
        self.now.set(ms);
    }

    /// Moves time forward.
    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get().saturating_add(ms));
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

/// A touch controller replaying a fixed script; `None` entries are idle polls.
#[derive(Clone, Debug, Default)]
pub struct ScriptedTouch {
    script: VecDeque<Option<Point>>,
}

impl ScriptedTouch {
    /// Replays `script` in order, then reports no touch.
    pub fn new(script: impl IntoIterator<Item = Option<Point>>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// Returns `true` once the script is exhausted.
    pub fn is_done(&self) -> bool {
        self.script.is_empty()
    }
}

impl TouchInput for ScriptedTouch {
    fn read_touch(&mut self) -> Option<Point> {
        self.script.pop_front().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_write_leaves_rest_of_frame() {
        let mut d = MemoryDisplay::new(4, 4);
        let buf = PixelBuffer::new(2, 2, Color::WHITE);
        d.write_region(Point::new(1, 1), &buf, Rect::new(0, 0, 2, 2));
        assert_eq!(d.pixel(0, 0), Some(Color::BLACK));
        assert_eq!(d.pixel(1, 1), Some(Color::WHITE));
        assert_eq!(d.pixel(2, 2), Some(Color::WHITE));
        assert_eq!(d.pixel(3, 3), Some(Color::BLACK));
        assert_eq!(d.blits, [Rect::new(1, 1, 3, 3)]);
    }

    #[test]
    fn shared_clock() {
        let a = ManualClock::default();
        let b = a.clone();
        a.set(10);
        b.advance(5);
        assert_eq!(a.now_ms(), 15);
    }

    #[test]
    fn script_replays_then_idles() {
        let mut t = ScriptedTouch::new([Some(Point::new(1, 2)), None]);
        assert_eq!(t.read_touch(), Some(Point::new(1, 2)));
        assert_eq!(t.read_touch(), None);
        assert!(t.is_done());
        assert_eq!(t.read_touch(), None);
    }
}
