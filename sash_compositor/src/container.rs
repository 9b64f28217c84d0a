// Copyright 2026 the Sash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered sibling collection used for the top-level registry and child lists.

use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::error::ContainerError;
use crate::types::{WindowHandle, WindowId};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Entry {
    id: WindowId,
    handle: WindowHandle,
}

/// An insertion-ordered list of sibling windows.
///
/// Position is stacking order: index `0` is the back, the last entry is the
/// front. For the top-level registry the index *is* the z-order, so after any
/// mutation the positions are exactly `0..len()` with no gaps or duplicates.
/// IDs are unique within a container.
#[derive(Clone, Debug, Default)]
pub struct WindowContainer {
    /// Most windows have a handful of children; those stay inline.
    entries: SmallVec<[Entry; 4]>,
}

impl WindowContainer {
    /// Creates an empty container.
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
        }
    }

    /// Number of member windows.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no members.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends a window at the front (top) of the stack and returns its position.
    ///
    /// Fails without mutating the container if `id` is already used.
    pub fn add(&mut self, id: WindowId, handle: WindowHandle) -> Result<usize, ContainerError> {
        if self.find(id).is_some() {
            return Err(ContainerError::DuplicateId(id));
        }
        self.entries.push(Entry { id, handle });
        Ok(self.entries.len() - 1)
    }

    /// Removes a window, compacting the positions above it.
    ///
    /// Returns the position it held.
    pub fn remove(&mut self, handle: WindowHandle) -> Option<usize> {
        let pos = self.position(handle)?;
        self.entries.remove(pos);
        Some(pos)
    }

    /// Moves a member to the front, preserving the relative order of the rest.
    ///
    /// Returns `false` if `handle` is not a member.
    pub fn bring_to_front(&mut self, handle: WindowHandle) -> bool {
        let Some(pos) = self.position(handle) else {
            return false;
        };
        let entry = self.entries.remove(pos);
        self.entries.push(entry);
        true
    }

    /// Looks a member up by ID.
    pub fn find(&self, id: WindowId) -> Option<WindowHandle> {
        self.entries.iter().find(|e| e.id == id).map(|e| e.handle)
    }

    /// Stacking position of a member.
    pub fn position(&self, handle: WindowHandle) -> Option<usize> {
        self.entries.iter().position(|e| e.handle == handle)
    }

    /// Returns `true` if `handle` is a member.
    pub fn contains(&self, handle: WindowHandle) -> bool {
        self.position(handle).is_some()
    }

    /// Member at a stacking position.
    pub fn get(&self, pos: usize) -> Option<WindowHandle> {
        self.entries.get(pos).map(|e| e.handle)
    }

    /// Members from back to front.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = WindowHandle> + ExactSizeIterator + '_ {
        self.entries.iter().map(|e| e.handle)
    }

    /// Snapshot of the members from back to front.
    ///
    /// Traversals that dispatch messages take a snapshot so handlers may add
    /// or remove siblings without invalidating the walk.
    pub fn to_vec(&self) -> Vec<WindowHandle> {
        self.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn h(i: u32) -> WindowHandle {
        WindowHandle::new(i, 1)
    }

    #[test]
    fn add_assigns_sequential_positions() {
        let mut c = WindowContainer::new();
        assert_eq!(c.add(WindowId(1), h(0)), Ok(0));
        assert_eq!(c.add(WindowId(2), h(1)), Ok(1));
        assert_eq!(c.add(WindowId(3), h(2)), Ok(2));
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn duplicate_id_leaves_container_untouched() {
        let mut c = WindowContainer::new();
        c.add(WindowId(1), h(0)).unwrap();
        assert_eq!(
            c.add(WindowId(1), h(5)),
            Err(ContainerError::DuplicateId(WindowId(1)))
        );
        assert_eq!(c.to_vec(), vec![h(0)]);
    }

    #[test]
    fn remove_compacts() {
        let mut c = WindowContainer::new();
        for i in 0..4_u16 {
            c.add(WindowId(i + 1), h(u32::from(i))).unwrap();
        }
        assert_eq!(c.remove(h(1)), Some(1));
        assert_eq!(c.to_vec(), vec![h(0), h(2), h(3)]);
        assert_eq!(c.position(h(3)), Some(2));
        assert_eq!(c.remove(h(1)), None);
    }

    #[test]
    fn bring_to_front_keeps_relative_order() {
        let mut c = WindowContainer::new();
        for i in 0..4_u16 {
            c.add(WindowId(i + 1), h(u32::from(i))).unwrap();
        }
        assert!(c.bring_to_front(h(1)));
        assert_eq!(c.to_vec(), vec![h(0), h(2), h(3), h(1)]);
        assert!(!c.bring_to_front(h(9)));
    }

    #[test]
    fn order_survives_spilling_to_the_heap() {
        let mut c = WindowContainer::new();
        for i in 0..10_u16 {
            assert_eq!(c.add(WindowId(i + 1), h(u32::from(i))), Ok(usize::from(i)));
        }
        assert!(c.bring_to_front(h(2)));
        assert_eq!(c.remove(h(7)), Some(6));
        assert_eq!(
            c.to_vec(),
            vec![h(0), h(1), h(3), h(4), h(5), h(6), h(8), h(9), h(2)]
        );
    }

    #[test]
    fn find_by_id() {
        let mut c = WindowContainer::new();
        c.add(WindowId(10), h(0)).unwrap();
        c.add(WindowId(20), h(1)).unwrap();
        assert_eq!(c.find(WindowId(20)), Some(h(1)));
        assert_eq!(c.find(WindowId(30)), None);
    }
}
