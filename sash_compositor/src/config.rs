// Copyright 2026 the Sash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time configuration and the guarded touch inbox.

use alloc::collections::VecDeque;
use alloc::sync::Arc;

use sash_rect::Point;
use spin::Mutex;

use crate::buffer::Color;

/// How the manager expects to be driven.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ConcurrencyMode {
    /// One loop calls hit testing and rendering; no locks are taken.
    #[default]
    SingleThreaded,
    /// An interrupt-driven touch callback may run alongside the loop.
    ///
    /// The manager creates a [`TouchInbox`] the callback pushes into. The
    /// loop drains it in [`WindowManager::update`](crate::WindowManager::update),
    /// locking once per point.
    Guarded,
}

/// Settings fixed when a [`WindowManager`](crate::WindowManager) is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManagerConfig {
    /// Locking mode.
    pub concurrency: ConcurrencyMode,
    /// Minimum interval between two accepted hit tests.
    pub hit_test_debounce_ms: u64,
    /// Display fill where no top-level window covers it.
    pub background_color: Color,
    /// Upper bound on queue draining passes per tick.
    pub max_queue_passes: usize,
    /// Capacity of the touch inbox in [`ConcurrencyMode::Guarded`] mode.
    pub inbox_capacity: usize,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            concurrency: ConcurrencyMode::SingleThreaded,
            hit_test_debounce_ms: 150,
            background_color: Color::BLACK,
            max_queue_passes: 32,
            inbox_capacity: 16,
        }
    }
}

impl ManagerConfig {
    /// Same settings with a different concurrency mode.
    #[must_use]
    pub fn with_concurrency(mut self, mode: ConcurrencyMode) -> Self {
        self.concurrency = mode;
        self
    }

    /// Same settings with a different debounce interval.
    #[must_use]
    pub fn with_debounce(mut self, ms: u64) -> Self {
        self.hit_test_debounce_ms = ms;
        self
    }
}

/// Shared queue of raw touch points.
///
/// Clones refer to the same queue. Each operation holds the lock only for a
/// single push or pop. When full, the oldest point is dropped.
///
/// [`TouchInbox::push`] never spins: an interrupt handler that fires while
/// the loop holds the lock in [`TouchInbox::pop`] cannot wait for it to be
/// released, so the point is dropped instead.
#[derive(Clone, Debug)]
pub struct TouchInbox {
    points: Arc<Mutex<VecDeque<Point>>>,
    capacity: usize,
}

impl TouchInbox {
    /// An empty inbox holding at most `capacity` points (at least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            points: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    /// Records a touch. Returns `false` if the queue was locked and the point
    /// was dropped.
    ///
    /// Safe to call from interrupt context.
    pub fn push(&self, point: Point) -> bool {
        let Some(mut points) = self.points.try_lock() else {
            tracing::trace!(x = point.x, y = point.y, "touch inbox busy, point dropped");
            return false;
        };
        if points.len() == self.capacity {
            points.pop_front();
        }
        points.push_back(point);
        true
    }

    /// Takes the oldest touch.
    pub fn pop(&self) -> Option<Point> {
        self.points.lock().pop_front()
    }

    /// Number of points waiting.
    pub fn len(&self) -> usize {
        self.points.lock().len()
    }

    /// Returns `true` if nothing is waiting.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inbox_is_shared_and_bounded() {
        let inbox = TouchInbox::new(2);
        let isr = inbox.clone();
        assert!(isr.push(Point::new(1, 1)));
        assert!(isr.push(Point::new(2, 2)));
        assert!(isr.push(Point::new(3, 3)));
        assert_eq!(inbox.len(), 2);
        assert_eq!(inbox.pop(), Some(Point::new(2, 2)));
        assert_eq!(inbox.pop(), Some(Point::new(3, 3)));
        assert!(inbox.is_empty());
    }

    #[test]
    fn push_while_locked_drops_instead_of_spinning() {
        let inbox = TouchInbox::new(4);
        let isr = inbox.clone();
        {
            let _held = inbox.points.lock();
            assert!(!isr.push(Point::new(1, 1)));
        }
        assert!(inbox.is_empty());
        assert!(isr.push(Point::new(2, 2)));
        assert_eq!(inbox.pop(), Some(Point::new(2, 2)));
    }

    #[test]
    fn defaults() {
        let c = ManagerConfig::default();
        assert_eq!(c.hit_test_debounce_ms, 150);
        assert_eq!(c.max_queue_passes, 32);
        assert_eq!(c.concurrency, ConcurrencyMode::SingleThreaded);
    }
}
