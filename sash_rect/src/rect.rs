// Copyright 2026 the Sash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Rect`] value type and its algebra.

use smallvec::SmallVec;

/// Result of [`Rect::subtract`]: at most four disjoint rectangles, stored inline.
pub type Region = SmallVec<[Rect; 4]>;

/// A point in signed pixel coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self::new(0, 0);

    /// Creates a point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle with half-open right and bottom edges.
///
/// Fields are public so rects can be built and destructured freely; the
/// invariant `right >= left && bottom >= top` is checked when the rect is
/// measured.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Left edge (inclusive).
    pub left: i32,
    /// Top edge (inclusive).
    pub top: i32,
    /// Right edge (exclusive).
    pub right: i32,
    /// Bottom edge (exclusive).
    pub bottom: i32,
}

#[cold]
#[track_caller]
fn inverted(rect: &Rect) -> ! {
    tracing::error!(?rect, "inverted rect: right < left or bottom < top");
    panic!("corrupted geometry: inverted rect {rect:?}");
}

impl Rect {
    /// The canonical empty rect at the origin.
    pub const EMPTY: Self = Self::new(0, 0, 0, 0);

    /// Creates a rect from its four edges.
    #[inline]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Creates a rect from an origin and a size.
    ///
    /// Negative sizes are clamped to zero.
    #[inline]
    pub const fn from_origin_size(x: i32, y: i32, width: i32, height: i32) -> Self {
        let width = if width < 0 { 0 } else { width };
        let height = if height < 0 { 0 } else { height };
        Self::new(x, y, x + width, y + height)
    }

    /// Returns `true` when the rect satisfies `right >= left && bottom >= top`.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.right >= self.left && self.bottom >= self.top
    }

    /// Width of the rect.
    ///
    /// # Panics
    ///
    /// Panics (after logging) when `right < left`.
    #[inline]
    #[track_caller]
    pub fn width(&self) -> i32 {
        if self.right < self.left {
            inverted(self);
        }
        self.right - self.left
    }

    /// Height of the rect.
    ///
    /// # Panics
    ///
    /// Panics (after logging) when `bottom < top`.
    #[inline]
    #[track_caller]
    pub fn height(&self) -> i32 {
        if self.bottom < self.top {
            inverted(self);
        }
        self.bottom - self.top
    }

    /// Number of pixels covered.
    #[inline]
    #[track_caller]
    pub fn area(&self) -> i64 {
        i64::from(self.width()) * i64::from(self.height())
    }

    /// Returns `true` when the rect covers no pixels.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.right <= self.left || self.bottom <= self.top
    }

    /// Top-left corner.
    #[inline]
    pub const fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Returns `true` if the pixel at `(x, y)` lies inside the rect.
    #[inline]
    pub const fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    /// Returns `true` if the two rects share at least one pixel.
    #[inline]
    pub const fn intersects(&self, other: &Self) -> bool {
        self.left < other.right
            && other.left < self.right
            && self.top < other.bottom
            && other.top < self.bottom
            && !self.is_empty()
            && !other.is_empty()
    }

    /// Returns `true` if `other` lies fully within `self`.
    ///
    /// An empty `other` is contained when its edges fall inside `self`'s edges.
    #[inline]
    pub const fn contains(&self, other: &Self) -> bool {
        other.left >= self.left
            && other.right <= self.right
            && other.top >= self.top
            && other.bottom <= self.bottom
    }

    /// Returns `true` if none of `self`'s corner pixels lies within `other`.
    ///
    /// This is a corner test, not a disjointness test: a thin rect crossing
    /// `other` without any corner inside it is still `outside`.
    pub const fn outside(&self, other: &Self) -> bool {
        if self.is_empty() {
            return true;
        }
        let (l, t, r, b) = (self.left, self.top, self.right - 1, self.bottom - 1);
        !(other.contains_point(l, t)
            || other.contains_point(r, t)
            || other.contains_point(l, b)
            || other.contains_point(r, b))
    }

    /// Smallest rect containing both operands.
    ///
    /// Empty rects are ignored, so the result of merging into an empty
    /// accumulator is the other operand.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        if other.is_empty() {
            return *self;
        }
        if self.is_empty() {
            return *other;
        }
        Self::new(
            self.left.min(other.left),
            self.top.min(other.top),
            self.right.max(other.right),
            self.bottom.max(other.bottom),
        )
    }

    /// In-place form of [`union`](Self::union).
    #[inline]
    pub fn merge(&mut self, other: &Self) {
        *self = self.union(other);
    }

    /// Bounding union of every rect yielded by `rects`, or [`Rect::EMPTY`].
    pub fn union_all<'a>(rects: impl IntoIterator<Item = &'a Self>) -> Self {
        rects
            .into_iter()
            .fold(Self::EMPTY, |acc, r| acc.union(r))
    }

    /// Largest rect contained in both operands, or [`Rect::EMPTY`] if they are disjoint.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        if !self.intersects(other) {
            return Self::EMPTY;
        }
        Self::new(
            self.left.max(other.left),
            self.top.max(other.top),
            self.right.min(other.right),
            self.bottom.min(other.bottom),
        )
    }

    /// Disjoint decomposition of `self \ other`.
    ///
    /// - An `other` that contains `self` yields `[]`.
    /// - Otherwise disjoint operands yield `[self]`, even when `self` is empty.
    /// - Otherwise the exposed strips are emitted side by side: a full-width
    ///   strip above and below the overlap, then left and right strips
    ///   spanning only the overlap's rows. A side where `other` reaches or
    ///   overhangs `self`'s edge contributes nothing, so edge-aligned
    ///   overlaps produce one to three rects and diagonal overlaps two to four.
    ///
    /// Apart from an empty `self` returned unchanged, the rects are non-empty
    /// and pairwise disjoint, and together with `self.intersection(other)`
    /// they tile `self` exactly.
    pub fn subtract(&self, other: &Self) -> Region {
        let mut out = Region::new();
        if other.contains(self) {
            return out;
        }
        if !self.intersects(other) {
            out.push(*self);
            return out;
        }
        let clip = self.intersection(other);
        let strips = [
            // Above the overlap, full width.
            Self::new(self.left, self.top, self.right, clip.top),
            // Below the overlap, full width.
            Self::new(self.left, clip.bottom, self.right, self.bottom),
            // Left of the overlap, overlap rows only.
            Self::new(self.left, clip.top, clip.left, clip.bottom),
            // Right of the overlap, overlap rows only.
            Self::new(clip.right, clip.top, self.right, clip.bottom),
        ];
        out.extend(strips.into_iter().filter(|r| !r.is_empty()));
        out
    }

    /// Returns the rect moved by `(dx, dy)`.
    #[inline]
    #[must_use]
    pub const fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.left + dx, self.top + dy, self.right + dx, self.bottom + dy)
    }

    /// Returns the rect re-expressed relative to `origin`.
    #[inline]
    #[must_use]
    pub const fn relative_to(&self, origin: Point) -> Self {
        self.offset(-origin.x, -origin.y)
    }

    /// Returns the rect shrunk by `inset` on every side, collapsing to an
    /// empty rect at the center when it would invert.
    #[must_use]
    pub fn inset(&self, inset: i32) -> Self {
        let l = self.left + inset;
        let t = self.top + inset;
        let r = (self.right - inset).max(l);
        let b = (self.bottom - inset).max(t);
        Self::new(l, t, r, b)
    }
}

#[cfg(feature = "kurbo")]
mod kurbo_interop {
    use super::{Point, Rect};

    fn floor(v: f64) -> i32 {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "pixel coordinates fit in i32 by construction"
        )]
        let t = v as i32;
        if f64::from(t) > v { t - 1 } else { t }
    }

    fn ceil(v: f64) -> i32 {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "pixel coordinates fit in i32 by construction"
        )]
        let t = v as i32;
        if f64::from(t) < v { t + 1 } else { t }
    }

    impl From<Rect> for kurbo::Rect {
        fn from(r: Rect) -> Self {
            Self::new(
                f64::from(r.left),
                f64::from(r.top),
                f64::from(r.right),
                f64::from(r.bottom),
            )
        }
    }

    impl From<Point> for kurbo::Point {
        fn from(p: Point) -> Self {
            Self::new(f64::from(p.x), f64::from(p.y))
        }
    }

    impl Rect {
        /// Smallest pixel rect covering a Kurbo rect.
        pub fn from_kurbo_outer(r: kurbo::Rect) -> Self {
            let r = r.abs();
            Self::new(floor(r.x0), floor(r.y0), ceil(r.x1), ceil(r.y1))
        }
    }

    impl Point {
        /// Pixel containing a Kurbo point.
        pub fn from_kurbo(p: kurbo::Point) -> Self {
            Self::new(floor(p.x), floor(p.y))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(l: i32, t: i32, rr: i32, b: i32) -> Rect {
        Rect::new(l, t, rr, b)
    }

    #[test]
    fn measures() {
        let a = r(10, 20, 110, 70);
        assert_eq!(a.width(), 100);
        assert_eq!(a.height(), 50);
        assert_eq!(a.area(), 5000);
        assert!(!a.is_empty());
        assert!(r(5, 5, 5, 9).is_empty());
    }

    #[test]
    #[should_panic(expected = "inverted rect")]
    fn inverted_width_is_fatal() {
        let _ = r(10, 0, 5, 10).width();
    }

    #[test]
    fn point_membership_is_half_open() {
        let a = r(0, 0, 10, 10);
        assert!(a.contains_point(0, 0));
        assert!(a.contains_point(9, 9));
        assert!(!a.contains_point(10, 5));
        assert!(!a.contains_point(5, 10));
        assert!(!a.contains_point(-1, 0));
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = r(0, 0, 10, 10);
        assert!(!a.intersects(&r(10, 0, 20, 10)));
        assert!(a.intersects(&r(9, 9, 20, 20)));
        assert!(!a.intersects(&Rect::EMPTY));
    }

    #[test]
    fn containment() {
        let outer = r(0, 0, 100, 100);
        assert!(outer.contains(&r(0, 0, 100, 100)));
        assert!(outer.contains(&r(10, 10, 20, 20)));
        assert!(!outer.contains(&r(90, 90, 110, 100)));
    }

    #[test]
    fn outside_checks_corners_only() {
        let a = r(0, 0, 10, 10);
        assert!(a.outside(&r(20, 20, 30, 30)));
        assert!(!a.outside(&r(5, 5, 30, 30)));
        // A bar crossing `a` has no corner inside it.
        let bar = r(-5, 4, 15, 6);
        assert!(bar.outside(&a));
        assert!(bar.intersects(&a));
    }

    #[test]
    fn union_is_commutative_and_ignores_empty() {
        let a = r(0, 0, 10, 10);
        let b = r(20, 5, 30, 40);
        assert_eq!(a.union(&b), b.union(&a));
        assert_eq!(a.union(&b), r(0, 0, 30, 40));
        assert_eq!(a.union(&Rect::EMPTY), a);
        assert_eq!(Rect::EMPTY.union(&b), b);
        assert_eq!(a.union(&a), a);

        let c = r(-5, 50, 0, 60);
        assert_eq!(a.union(&b).union(&c), a.union(&b.union(&c)));
    }

    #[test]
    fn union_all_folds() {
        let rects = [r(0, 0, 1, 1), Rect::EMPTY, r(4, 4, 8, 9)];
        assert_eq!(Rect::union_all(&rects), r(0, 0, 8, 9));
        assert_eq!(Rect::union_all(&[]), Rect::EMPTY);
    }

    #[test]
    fn intersection_or_empty() {
        let a = r(0, 0, 100, 100);
        assert_eq!(a.intersection(&r(50, 50, 150, 150)), r(50, 50, 100, 100));
        assert!(a.intersection(&r(200, 0, 300, 10)).is_empty());
    }

    #[test]
    fn subtract_disjoint_returns_self() {
        let a = r(0, 0, 10, 10);
        assert_eq!(a.subtract(&r(10, 10, 20, 20)).as_slice(), &[a]);
    }

    #[test]
    fn subtract_contained_returns_nothing() {
        let a = r(10, 10, 20, 20);
        assert!(a.subtract(&r(0, 0, 100, 100)).is_empty());
        assert!(a.subtract(&a).is_empty());
    }

    #[test]
    fn subtract_edge_aligned_strip() {
        // `other` covers the right half exactly: only the left half remains.
        let a = r(0, 0, 100, 100);
        let out = a.subtract(&r(50, 0, 100, 100));
        assert_eq!(out.as_slice(), &[r(0, 0, 50, 100)]);
    }

    #[test]
    fn subtract_hole_yields_four() {
        let a = r(0, 0, 100, 100);
        let out = a.subtract(&r(40, 40, 60, 60));
        assert_eq!(out.len(), 4);
        let total: i64 = out.iter().map(Rect::area).sum();
        assert_eq!(total, 10_000 - 400);
    }

    #[test]
    fn offset_and_relative() {
        let a = r(10, 10, 20, 30);
        assert_eq!(a.offset(5, -5), r(15, 5, 25, 25));
        assert_eq!(a.relative_to(Point::new(10, 10)), r(0, 0, 10, 20));
    }

    #[test]
    fn inset_collapses() {
        assert_eq!(r(0, 0, 10, 10).inset(2), r(2, 2, 8, 8));
        assert!(r(0, 0, 4, 4).inset(3).is_empty());
    }
}
