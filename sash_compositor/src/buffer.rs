// Copyright 2026 the Sash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Off-screen pixel buffers and the clipped canvas windows paint through.
//!
//! Every top-level window owns one [`PixelBuffer`] sized to its rect. Child
//! windows never own pixels: while painting they receive a [`Canvas`] over the
//! nearest top-level ancestor's buffer, which accepts display-global
//! coordinates, translates them by the buffer's origin, and clips them to the
//! child's visible area.

use alloc::vec;
use alloc::vec::Vec;

use sash_rect::{Point, Rect};

/// An RGB565 pixel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(pub u16);

impl Color {
    /// Black.
    pub const BLACK: Self = Self(0x0000);
    /// White.
    pub const WHITE: Self = Self(0xFFFF);

    /// Packs 8-bit channels into RGB565.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self((((r as u16) & 0xF8) << 8) | (((g as u16) & 0xFC) << 3) | ((b as u16) >> 3))
    }
}

/// A row-major pixel buffer with its origin at `(0, 0)`.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: i32,
    height: i32,
    pixels: Vec<Color>,
}

impl core::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

fn pixel_count(width: i32, height: i32) -> usize {
    usize::try_from(width.max(0)).unwrap_or(0) * usize::try_from(height.max(0)).unwrap_or(0)
}

impl PixelBuffer {
    /// Allocates a buffer filled with `fill`. Negative sizes become zero.
    pub fn new(width: i32, height: i32, fill: Color) -> Self {
        let (width, height) = (width.max(0), height.max(0));
        Self {
            width,
            height,
            pixels: vec![fill; pixel_count(width, height)],
        }
    }

    /// Buffer width in pixels.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Buffer height in pixels.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The buffer's own extent, `(0, 0, width, height)`.
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    /// Reallocates to a new size, discarding contents.
    pub fn resize(&mut self, width: i32, height: i32, fill: Color) {
        *self = Self::new(width, height, fill);
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.bounds().contains_point(x, y) {
            return None;
        }
        usize::try_from(y * self.width + x).ok()
    }

    /// Pixel at local `(x, y)`.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// The pixels of row `y` between local columns `left..right`.
    ///
    /// Returns `None` when the span leaves the buffer.
    pub fn span(&self, y: i32, left: i32, right: i32) -> Option<&[Color]> {
        if left > right || left < 0 || right > self.width || y < 0 || y >= self.height {
            return None;
        }
        let start = usize::try_from(y * self.width + left).ok()?;
        let len = usize::try_from(right - left).ok()?;
        self.pixels.get(start..start + len)
    }

    /// Fills a local rect, clipped to the buffer.
    pub fn fill(&mut self, rect: Rect, color: Color) {
        let r = rect.intersection(&self.bounds());
        for y in r.top..r.bottom {
            let (Some(start), Some(end)) = (self.index(r.left, y), self.index(r.right - 1, y))
            else {
                continue;
            };
            self.pixels[start..=end].fill(color);
        }
    }

    /// Raw pixel storage, row-major.
    pub fn as_slice(&self) -> &[Color] {
        &self.pixels
    }
}

/// A painting surface over a pixel buffer in display-global coordinates.
///
/// `origin` is the global position of the buffer's `(0, 0)`; every primitive
/// is clipped to `clip` (global) before touching pixels.
#[derive(Debug)]
pub struct Canvas<'a> {
    buffer: &'a mut PixelBuffer,
    origin: Point,
    clip: Rect,
}

impl<'a> Canvas<'a> {
    /// A canvas over `buffer` placed at `origin`, clipped to the buffer's extent.
    pub fn new(buffer: &'a mut PixelBuffer, origin: Point) -> Self {
        let clip = buffer.bounds().offset(origin.x, origin.y);
        Self {
            buffer,
            origin,
            clip,
        }
    }

    /// Current global clip.
    pub fn clip(&self) -> Rect {
        self.clip
    }

    /// Global position of the buffer's origin.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Narrows the clip for the lifetime of the returned canvas.
    pub fn clipped(&mut self, clip: Rect) -> Canvas<'_> {
        Canvas {
            buffer: &mut *self.buffer,
            origin: self.origin,
            clip: self.clip.intersection(&clip),
        }
    }

    /// Sets one pixel.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if self.clip.contains_point(x, y) {
            self.buffer.fill(
                Rect::new(x, y, x + 1, y + 1).relative_to(self.origin),
                color,
            );
        }
    }

    /// Fills a rect.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let r = rect.intersection(&self.clip);
        if !r.is_empty() {
            self.buffer.fill(r.relative_to(self.origin), color);
        }
    }

    /// Draws a one-pixel outline just inside `rect`.
    pub fn stroke_rect(&mut self, rect: Rect, color: Color) {
        if rect.is_empty() {
            return;
        }
        let Rect {
            left,
            top,
            right,
            bottom,
        } = rect;
        self.fill_rect(Rect::new(left, top, right, top + 1), color);
        self.fill_rect(Rect::new(left, bottom - 1, right, bottom), color);
        self.fill_rect(Rect::new(left, top, left + 1, bottom), color);
        self.fill_rect(Rect::new(right - 1, top, right, bottom), color);
    }

    /// Fills a rect with rounded corners.
    pub fn fill_round_rect(&mut self, rect: Rect, radius: i32, color: Color) {
        if rect.is_empty() {
            return;
        }
        let radius = radius.clamp(0, rect.width().min(rect.height()) / 2);
        for y in rect.top..rect.bottom {
            let inset = corner_inset(radius, y - rect.top, rect.bottom - 1 - y);
            self.fill_rect(Rect::new(rect.left + inset, y, rect.right - inset, y + 1), color);
        }
    }

    /// Outlines a rect with rounded corners.
    pub fn stroke_round_rect(&mut self, rect: Rect, radius: i32, color: Color) {
        if rect.is_empty() {
            return;
        }
        let radius = radius.clamp(0, rect.width().min(rect.height()) / 2);
        let mut prev = corner_inset(radius, 0, rect.height() - 1);
        for y in rect.top..rect.bottom {
            let inset = corner_inset(radius, y - rect.top, rect.bottom - 1 - y);
            let edge_row = y == rect.top || y == rect.bottom - 1;
            if edge_row {
                self.fill_rect(Rect::new(rect.left + inset, y, rect.right - inset, y + 1), color);
            } else {
                // Span the gap to the previous row's inset so steep arcs stay connected.
                let reach = (prev.max(inset) - inset).max(1);
                let l = rect.left + inset;
                let r = rect.right - inset;
                self.fill_rect(Rect::new(l, y, l + reach, y + 1), color);
                self.fill_rect(Rect::new(r - reach, y, r, y + 1), color);
            }
            prev = inset;
        }
    }

    /// Draws a line between two points (inclusive) with Bresenham's algorithm.
    pub fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        let dx = (to.x - from.x).abs();
        let dy = -(to.y - from.y).abs();
        let sx = if from.x < to.x { 1 } else { -1 };
        let sy = if from.y < to.y { 1 } else { -1 };
        let (mut x, mut y) = (from.x, from.y);
        let mut err = dx + dy;
        loop {
            self.set_pixel(x, y, color);
            if x == to.x && y == to.y {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Draws a 1-bit glyph bitmap with its top-left corner at `at`.
    ///
    /// `bits` is row-major, most significant bit first, rows padded to whole bytes.
    pub fn draw_glyph(&mut self, at: Point, width: i32, height: i32, bits: &[u8], color: Color) {
        let stride = (width + 7) / 8;
        for row in 0..height {
            for col in 0..width {
                let Ok(byte) = usize::try_from(row * stride + col / 8) else {
                    continue;
                };
                let set = bits.get(byte).is_some_and(|b| b & (0x80 >> (col % 8)) != 0);
                if set {
                    self.set_pixel(at.x + col, at.y + row, color);
                }
            }
        }
    }
}

/// Horizontal inset of a rounded-rect row `from_top` rows below the top and
/// `from_bottom` rows above the bottom.
fn corner_inset(radius: i32, from_top: i32, from_bottom: i32) -> i32 {
    let d = from_top.min(from_bottom);
    if d >= radius {
        return 0;
    }
    // Distance from the corner circle's center row.
    let dy = radius - d;
    let mut dx = 0;
    while (dx + 1) * (dx + 1) + dy * dy <= radius * radius {
        dx += 1;
    }
    radius - dx
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(255, 0, 0);

    #[test]
    fn rgb565_packing() {
        assert_eq!(Color::rgb(255, 255, 255), Color::WHITE);
        assert_eq!(Color::rgb(0, 0, 0), Color::BLACK);
        assert_eq!(RED.0, 0xF800);
    }

    #[test]
    fn canvas_translates_global_to_local() {
        let mut buf = PixelBuffer::new(10, 10, Color::BLACK);
        let mut canvas = Canvas::new(&mut buf, Point::new(100, 50));
        canvas.fill_rect(Rect::new(102, 52, 104, 53), RED);
        assert_eq!(buf.pixel(2, 2), Some(RED));
        assert_eq!(buf.pixel(3, 2), Some(RED));
        assert_eq!(buf.pixel(4, 2), Some(Color::BLACK));
        assert_eq!(buf.pixel(2, 3), Some(Color::BLACK));
    }

    #[test]
    fn canvas_clips() {
        let mut buf = PixelBuffer::new(10, 10, Color::BLACK);
        let mut canvas = Canvas::new(&mut buf, Point::ZERO);
        let mut inner = canvas.clipped(Rect::new(0, 0, 5, 5));
        inner.fill_rect(Rect::new(-10, -10, 100, 100), RED);
        assert_eq!(buf.pixel(4, 4), Some(RED));
        assert_eq!(buf.pixel(5, 5), Some(Color::BLACK));
    }

    #[test]
    fn stroke_rect_leaves_interior() {
        let mut buf = PixelBuffer::new(5, 5, Color::BLACK);
        Canvas::new(&mut buf, Point::ZERO).stroke_rect(Rect::new(0, 0, 5, 5), RED);
        assert_eq!(buf.pixel(0, 0), Some(RED));
        assert_eq!(buf.pixel(4, 4), Some(RED));
        assert_eq!(buf.pixel(2, 2), Some(Color::BLACK));
    }

    #[test]
    fn round_rect_trims_corners() {
        let mut buf = PixelBuffer::new(20, 20, Color::BLACK);
        Canvas::new(&mut buf, Point::ZERO).fill_round_rect(Rect::new(0, 0, 20, 20), 6, RED);
        assert_eq!(buf.pixel(0, 0), Some(Color::BLACK));
        assert_eq!(buf.pixel(10, 0), Some(RED));
        assert_eq!(buf.pixel(10, 10), Some(RED));
    }

    #[test]
    fn line_hits_both_endpoints() {
        let mut buf = PixelBuffer::new(10, 10, Color::BLACK);
        Canvas::new(&mut buf, Point::ZERO).draw_line(Point::new(0, 0), Point::new(9, 4), RED);
        assert_eq!(buf.pixel(0, 0), Some(RED));
        assert_eq!(buf.pixel(9, 4), Some(RED));
    }

    #[test]
    fn glyph_bits() {
        let mut buf = PixelBuffer::new(8, 2, Color::BLACK);
        Canvas::new(&mut buf, Point::ZERO).draw_glyph(Point::ZERO, 8, 2, &[0b1000_0001, 0x00], RED);
        assert_eq!(buf.pixel(0, 0), Some(RED));
        assert_eq!(buf.pixel(7, 0), Some(RED));
        assert_eq!(buf.pixel(3, 0), Some(Color::BLACK));
        assert_eq!(buf.pixel(0, 1), Some(Color::BLACK));
    }

    #[test]
    fn span_bounds() {
        let buf = PixelBuffer::new(4, 4, Color::WHITE);
        assert_eq!(buf.span(1, 1, 3).map(<[Color]>::len), Some(2));
        assert_eq!(buf.span(1, 2, 5), None);
        assert_eq!(buf.span(4, 0, 1), None);
    }
}
