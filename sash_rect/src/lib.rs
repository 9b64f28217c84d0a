// Copyright 2026 the Sash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sash Rect: integer rectangle algebra for damage tracking.
//!
//! This crate is the geometric leaf of the Sash compositor. It provides a small,
//! copyable [`Rect`] in signed pixel coordinates together with the operations
//! a retained-mode compositor needs to reason about damage and occlusion:
//!
//! - Predicates: [`Rect::intersects`], [`Rect::contains`], [`Rect::outside`],
//!   [`Rect::contains_point`].
//! - Combinators: [`Rect::union`] (bounding merge) and [`Rect::intersection`].
//! - Region subtraction: [`Rect::subtract`] yields a [`Region`] of mutually
//!   disjoint rectangles covering `self \ other`.
//!
//! ## Coordinate conventions
//!
//! Rectangles are half-open: a pixel at `(x, y)` lies inside a rect when
//! `left <= x < right` and `top <= y < bottom`. A rect whose width or height is
//! zero is *empty*; empty rects are valid values and act as the identity for
//! [`Rect::union`].
//!
//! All operations are coordinate-space agnostic. Callers are responsible for
//! expressing both operands in the same space (display-global or window-local).
//!
//! ## Inverted rects
//!
//! A rect with `right < left` or `bottom < top` violates the type's invariant.
//! Measuring one ([`Rect::width`], [`Rect::height`]) is treated as corrupted
//! geometry: the failure is logged through `tracing` and the call panics.
//!
//! ## Example
//!
//! ```rust
//! use sash_rect::Rect;
//!
//! let a = Rect::new(0, 0, 100, 100);
//! let b = Rect::new(50, 50, 150, 150);
//!
//! // The part of `a` not covered by `b` is an "L" made of two strips.
//! let exposed = a.subtract(&b);
//! assert_eq!(exposed.len(), 2);
//! let covered: i64 = exposed.iter().map(Rect::area).sum();
//! assert_eq!(covered + a.intersection(&b).area(), a.area());
//! ```
//!
//! ## Features
//!
//! - `kurbo`: conversions to and from [`kurbo::Rect`] and [`kurbo::Point`].
//!
//! This crate is `no_std`.

#![no_std]

mod rect;

pub use rect::{Point, Rect, Region};
