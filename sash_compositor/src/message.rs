// Copyright 2026 the Sash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Packaged window messages.
//!
//! A [`PackagedMessage`] is a message kind plus two 32-bit [`Param`]s. Each
//! parameter may carry two 16-bit halves, which is how taps smuggle their
//! coordinates and events smuggle a `(kind, value)` pair through a queue
//! entry without allocating.

use sash_rect::Point;

use crate::types::WindowId;

/// Kind of a window message.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MessageKind {
    /// Window is being created; the behavior may veto it.
    Create,
    /// Window is being destroyed.
    Destroy,
    /// Paint the window into its pixel buffer.
    Draw,
    /// Sent right after a successful [`MessageKind::Draw`].
    PostDraw,
    /// Touch input (queued, applied on the next processing pass).
    Input,
    /// Notification from a child to its parent.
    Event,
    /// The window's rect changed.
    Resize,
}

/// A 32-bit message parameter, optionally split into two 16-bit halves.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Param(pub u32);

impl Param {
    /// Packs two halves; `hi` lands in the upper 16 bits.
    #[inline]
    pub const fn pack(hi: u16, lo: u16) -> Self {
        Self(((hi as u32) << 16) | lo as u32)
    }

    /// Upper 16 bits.
    #[inline]
    #[expect(clippy::cast_possible_truncation, reason = "shifted value fits in 16 bits")]
    pub const fn hi(self) -> u16 {
        (self.0 >> 16) as u16
    }

    /// Lower 16 bits.
    #[inline]
    #[expect(clippy::cast_possible_truncation, reason = "masked value fits in 16 bits")]
    pub const fn lo(self) -> u16 {
        (self.0 & 0xFFFF) as u16
    }

    /// Packs a point as two signed 16-bit halves (`x` high, `y` low).
    ///
    /// Coordinates outside the `i16` range saturate.
    pub fn from_point(p: Point) -> Self {
        Self::pack(saturate_i16(p.x).cast_unsigned(), saturate_i16(p.y).cast_unsigned())
    }

    /// Unpacks a point stored by [`Param::from_point`].
    pub fn to_point(self) -> Point {
        Point::new(
            i32::from(self.hi().cast_signed()),
            i32::from(self.lo().cast_signed()),
        )
    }
}

fn saturate_i16(v: i32) -> i16 {
    i16::try_from(v).unwrap_or(if v < 0 { i16::MIN } else { i16::MAX })
}

/// Input categories carried by [`MessageKind::Input`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum InputKind {
    /// A single touch at a point.
    Tap = 1,
}

/// Notifications carried by [`MessageKind::Event`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum EventKind {
    /// A child was tapped.
    ChildTapped = 1,
    /// A child toggled its checked state; the value is `1` when now checked.
    ChildToggled = 2,
    /// Application-defined notification.
    User = 0x8000,
}

impl EventKind {
    fn from_raw(raw: u16) -> Self {
        match raw {
            1 => Self::ChildTapped,
            2 => Self::ChildToggled,
            _ => Self::User,
        }
    }
}

/// A decoded [`MessageKind::Event`] payload.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Event {
    /// What happened.
    pub kind: EventKind,
    /// ID of the window that raised the event.
    pub source: WindowId,
    /// Kind-specific value.
    pub value: u16,
}

/// A message with its two packed parameters.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PackagedMessage {
    /// Message kind.
    pub kind: MessageKind,
    /// First parameter.
    pub p1: Param,
    /// Second parameter.
    pub p2: Param,
}

impl PackagedMessage {
    /// A message with zeroed parameters.
    pub const fn new(kind: MessageKind) -> Self {
        Self {
            kind,
            p1: Param(0),
            p2: Param(0),
        }
    }

    /// A message with explicit parameters.
    pub const fn with_params(kind: MessageKind, p1: Param, p2: Param) -> Self {
        Self { kind, p1, p2 }
    }

    /// A tap at a display-global point.
    pub fn tap(at: Point) -> Self {
        Self::with_params(
            MessageKind::Input,
            Param::pack(InputKind::Tap as u16, 0),
            Param::from_point(at),
        )
    }

    /// An event raised by `source`.
    pub const fn event(kind: EventKind, source: WindowId, value: u16) -> Self {
        Self::with_params(
            MessageKind::Event,
            Param::pack(kind as u16, source.0),
            Param(value as u32),
        )
    }

    /// The tap point, if this is a tap input message.
    pub fn as_tap(&self) -> Option<Point> {
        (self.kind == MessageKind::Input && self.p1.hi() == InputKind::Tap as u16)
            .then(|| self.p2.to_point())
    }

    /// The decoded event, if this is an event message.
    pub fn as_event(&self) -> Option<Event> {
        (self.kind == MessageKind::Event).then(|| Event {
            kind: EventKind::from_raw(self.p1.hi()),
            source: WindowId(self.p1.lo()),
            value: self.p2.lo(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halves_round_trip() {
        let p = Param::pack(0xBEEF, 0x1234);
        assert_eq!(p.0, 0xBEEF_1234);
        assert_eq!(p.hi(), 0xBEEF);
        assert_eq!(p.lo(), 0x1234);
    }

    #[test]
    fn negative_points_survive_packing() {
        let p = Param::from_point(Point::new(-3, 240));
        assert_eq!(p.to_point(), Point::new(-3, 240));
    }

    #[test]
    fn out_of_range_points_saturate() {
        let p = Param::from_point(Point::new(100_000, -100_000));
        assert_eq!(p.to_point(), Point::new(i32::from(i16::MAX), i32::from(i16::MIN)));
    }

    #[test]
    fn tap_decodes() {
        let m = PackagedMessage::tap(Point::new(75, 80));
        assert_eq!(m.kind, MessageKind::Input);
        assert_eq!(m.as_tap(), Some(Point::new(75, 80)));
        assert_eq!(m.as_event(), None);
    }

    #[test]
    fn event_decodes() {
        let m = PackagedMessage::event(EventKind::ChildTapped, WindowId(7), 7);
        let ev = m.as_event().unwrap();
        assert_eq!(ev.kind, EventKind::ChildTapped);
        assert_eq!(ev.source, WindowId(7));
        assert_eq!(ev.value, 7);
        assert_eq!(m.as_tap(), None);
    }
}
