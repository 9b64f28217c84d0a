// Copyright 2026 the Sash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for z-order bookkeeping and the drawable predicate.

use sash_compositor::headless::{ManualClock, MemoryDisplay};
use sash_compositor::{
    ContainerError, CreateError, FlatTheme, ManagerConfig, Plain, Style, WindowHandle, WindowId,
    WindowManager,
};
use sash_rect::Rect;

type Wm = WindowManager<MemoryDisplay, ManualClock>;

fn wm() -> Wm {
    WindowManager::new(
        MemoryDisplay::new(100, 100),
        ManualClock::default(),
        FlatTheme,
        ManagerConfig::default(),
    )
    .unwrap()
}

fn top(wm: &mut Wm, id: u16) -> WindowHandle {
    wm.create_window(None, WindowId(id), Style::VISIBLE, Rect::new(0, 0, 10, 10), "", Plain)
        .unwrap()
}

fn ids_back_to_front(wm: &Wm) -> Vec<u16> {
    wm.tree()
        .top_level()
        .iter()
        .map(|h| wm.window(h).unwrap().id().0)
        .collect()
}

/// Checks that z-orders are exactly `0..N` and agree with registry positions.
fn assert_z_total(wm: &Wm) {
    let tops = wm.tree().top_level();
    for (pos, h) in tops.iter().enumerate() {
        assert_eq!(wm.window(h).unwrap().z_order(), pos);
        assert_eq!(wm.z_order(h), Some(pos));
    }
}

/// Small deterministic generator for operation sequences.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: u64) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (self.0 >> 33) % bound
    }
}

#[test]
fn insertion_order_is_z_order() {
    let mut wm = wm();
    let h1 = top(&mut wm, 1);
    let h2 = top(&mut wm, 2);
    let h3 = top(&mut wm, 3);
    assert_eq!(wm.z_order(h1), Some(0));
    assert_eq!(wm.z_order(h2), Some(1));
    assert_eq!(wm.z_order(h3), Some(2));

    assert!(wm.set_foreground_window(h1));
    assert_eq!(wm.window(h2).unwrap().z_order(), 0);
    assert_eq!(wm.window(h3).unwrap().z_order(), 1);
    assert_eq!(wm.window(h1).unwrap().z_order(), 2);
}

#[test]
fn foreground_preserves_relative_order() {
    let mut wm = wm();
    let handles: Vec<_> = (1..=5).map(|id| top(&mut wm, id)).collect();
    wm.set_foreground_window(handles[1]);
    assert_eq!(ids_back_to_front(&wm), [1, 3, 4, 5, 2]);
    wm.set_foreground_window(handles[1]);
    assert_eq!(ids_back_to_front(&wm), [1, 3, 4, 5, 2]);
    wm.set_foreground_window(handles[0]);
    assert_eq!(ids_back_to_front(&wm), [3, 4, 5, 2, 1]);
    assert_z_total(&wm);
}

#[test]
fn z_order_stays_total_under_random_operations() {
    let mut wm = wm();
    let mut live: Vec<(u16, WindowHandle)> = Vec::new();
    let mut rng = Lcg(7);
    let mut next_id = 1_u16;
    for _ in 0..500 {
        match rng.next(3) {
            0 => {
                live.push((next_id, top(&mut wm, next_id)));
                next_id += 1;
            }
            1 if !live.is_empty() => {
                let i = usize::try_from(rng.next(live.len() as u64)).unwrap();
                let (_, h) = live.remove(i);
                assert!(wm.destroy(h));
            }
            2 if !live.is_empty() => {
                let i = usize::try_from(rng.next(live.len() as u64)).unwrap();
                assert!(wm.set_foreground_window(live[i].1));
                assert_eq!(wm.z_order(live[i].1), Some(live.len() - 1));
            }
            _ => {}
        }
        assert_eq!(wm.tree().top_level().len(), live.len());
        assert_z_total(&wm);
    }
}

#[test]
fn duplicate_sibling_id_leaves_container_untouched() {
    let mut wm = wm();
    let parent = top(&mut wm, 1);
    let child = wm
        .create_window(Some(parent), WindowId(5), Style::VISIBLE, Rect::new(0, 0, 5, 5), "", Plain)
        .unwrap();
    let before = wm.window(parent).unwrap().children().to_vec();
    let count = wm.tree().len();

    assert_eq!(
        wm.create_window(Some(parent), WindowId(5), Style::VISIBLE, Rect::new(0, 0, 5, 5), "", Plain),
        Err(CreateError::DuplicateId(ContainerError::DuplicateId(WindowId(5))))
    );
    assert_eq!(wm.window(parent).unwrap().children().to_vec(), before);
    assert_eq!(before, [child]);
    assert_eq!(wm.tree().len(), count);

    // Same ID under another parent, or at top level, is fine.
    let five = top(&mut wm, 5);
    assert_eq!(wm.find(None, WindowId(5)), Some(five));
    assert_eq!(
        wm.create_window(None, WindowId(1), Style::VISIBLE, Rect::new(0, 0, 5, 5), "", Plain),
        Err(CreateError::DuplicateId(ContainerError::DuplicateId(WindowId(1))))
    );
}

#[test]
fn child_is_drawable_only_if_parent_is() {
    let mut wm = wm();
    let mut all = Vec::new();
    let a = top(&mut wm, 1);
    all.push(a);
    for id in 1..=3 {
        let c = wm
            .create_window(Some(a), WindowId(id), Style::VISIBLE, Rect::new(0, 0, 5, 5), "", Plain)
            .unwrap();
        all.push(c);
        for gid in 1..=2 {
            let g = wm
                .create_window(Some(c), WindowId(gid), Style::VISIBLE, Rect::new(1, 1, 4, 4), "", Plain)
                .unwrap();
            all.push(g);
        }
    }

    let mut rng = Lcg(42);
    for _ in 0..300 {
        let len = all.len() as u64;
        let h = all[usize::try_from(rng.next(len)).unwrap()];
        if rng.next(2) == 0 {
            wm.hide(h);
        } else {
            wm.show(h);
        }
        for &w in &all {
            if let Some(parent) = wm.window(w).unwrap().parent() {
                assert!(
                    !wm.is_drawable(w) || wm.is_drawable(parent),
                    "child drawable under a non-drawable parent"
                );
            }
        }
    }
}

#[test]
fn moving_parent_off_screen_makes_children_undrawable() {
    let mut wm = wm();
    let a = top(&mut wm, 1);
    let c = wm
        .create_window(Some(a), WindowId(1), Style::VISIBLE, Rect::new(2, 2, 6, 6), "", Plain)
        .unwrap();
    assert!(wm.is_drawable(c));
    wm.set_rect(a, Rect::new(500, 500, 510, 510));
    assert!(!wm.is_drawable(a));
    assert!(!wm.is_drawable(c));
}
