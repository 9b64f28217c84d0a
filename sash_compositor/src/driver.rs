// Copyright 2026 the Sash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interfaces the compositor consumes from the platform.
//!
//! The compositor never talks to hardware directly. Applications provide a
//! [`Display`] (panel writes), a [`TouchInput`] (one point per poll) and a
//! [`Clock`] (milliseconds since boot) when building the
//! [`WindowManager`](crate::WindowManager).

use sash_rect::{Point, Rect};

use crate::buffer::{Color, PixelBuffer};
use crate::error::DisplayError;

/// Panel orientation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// Native orientation.
    #[default]
    Deg0,
    /// Rotated a quarter turn clockwise.
    Deg90,
    /// Upside down.
    Deg180,
    /// Rotated a quarter turn counter-clockwise.
    Deg270,
}

/// The physical display.
///
/// The only required write primitive is [`Display::write_pixels`], an
/// addressed partial write: `pixels` land at consecutive display positions
/// starting at the row-major `offset`, without touching the rest of the
/// frame. [`Display::write_region`] builds rectangular blits out of it.
pub trait Display {
    /// Brings the panel up.
    fn begin(&mut self) -> Result<(), DisplayError>;

    /// Changes the panel orientation. [`Display::bounds`] reflects the change.
    fn set_rotation(&mut self, rotation: Rotation) {
        let _ = rotation;
    }

    /// Visible display area; the origin is always `(0, 0)`.
    fn bounds(&self) -> Rect;

    /// Writes `pixels` starting at row-major display `offset`.
    fn write_pixels(&mut self, offset: usize, pixels: &[Color]);

    /// Fills a display rect with a solid color, bypassing window buffers.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Presents everything written since the last call.
    fn present(&mut self);

    /// Copies the local rect `src` of `buffer` to the display with its
    /// top-left corner at `dst`.
    ///
    /// The default writes one row at a time through [`Display::write_pixels`].
    fn write_region(&mut self, dst: Point, buffer: &PixelBuffer, src: Rect) {
        blit_rows(self, dst, buffer, src);
    }
}

/// Row-by-row rectangular blit built on [`Display::write_pixels`].
///
/// Rows that fall outside the display or the buffer are skipped. Drivers that
/// override [`Display::write_region`] can still delegate here.
pub fn blit_rows<D: Display + ?Sized>(display: &mut D, dst: Point, buffer: &PixelBuffer, src: Rect) {
    let bounds = display.bounds();
    let Ok(stride) = usize::try_from(bounds.width()) else {
        return;
    };
    if dst.x < bounds.left || dst.x + src.width() > bounds.right {
        return;
    }
    let Ok(x_off) = usize::try_from(dst.x) else {
        return;
    };
    for row in 0..src.height() {
        let y = dst.y + row;
        if y < bounds.top || y >= bounds.bottom {
            continue;
        }
        let (Some(span), Ok(y_off)) = (
            buffer.span(src.top + row, src.left, src.right),
            usize::try_from(y),
        ) else {
            continue;
        };
        display.write_pixels(y_off * stride + x_off, span);
    }
}

/// A touch controller.
pub trait TouchInput {
    /// Brings the controller up.
    fn begin(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }

    /// Reads one touch point in display coordinates, or `None` when untouched.
    fn read_touch(&mut self) -> Option<Point>;
}

/// Monotonic millisecond time source.
pub trait Clock {
    /// Milliseconds since an arbitrary fixed epoch.
    fn now_ms(&self) -> u64;
}
