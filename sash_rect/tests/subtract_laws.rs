// Copyright 2026 the Sash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Exhaustive checks of the subtraction laws over a small coordinate grid.
//!
//! Every pair of rects with edges in `0..=GRID` is enumerated, including
//! empty and edge-aligned ones, and each law is checked pixel by pixel.

use sash_rect::Rect;

const GRID: i32 = 4;

fn all_rects() -> Vec<Rect> {
    let mut out = Vec::new();
    for left in 0..=GRID {
        for right in left..=GRID {
            for top in 0..=GRID {
                for bottom in top..=GRID {
                    out.push(Rect::new(left, top, right, bottom));
                }
            }
        }
    }
    out
}

#[test]
fn pieces_and_overlap_tile_the_minuend_exactly() {
    let rects = all_rects();
    for a in &rects {
        for b in &rects {
            let pieces = a.subtract(b);
            let overlap = a.intersection(b);
            for y in -1..=GRID {
                for x in -1..=GRID {
                    let hits = pieces.iter().filter(|p| p.contains_point(x, y)).count()
                        + usize::from(overlap.contains_point(x, y));
                    let expected = usize::from(a.contains_point(x, y));
                    assert_eq!(
                        hits, expected,
                        "pixel ({x}, {y}) covered {hits} times for {a:?} - {b:?} = {pieces:?}"
                    );
                }
            }
        }
    }
}

#[test]
fn pieces_are_pairwise_disjoint_and_non_empty() {
    let rects = all_rects();
    for a in &rects {
        for b in &rects {
            let pieces = a.subtract(b);
            assert!(pieces.len() <= 4, "{a:?} - {b:?} produced {pieces:?}");
            for (i, p) in pieces.iter().enumerate() {
                assert!(
                    !p.is_empty() || pieces.as_slice() == [*a],
                    "empty piece in {a:?} - {b:?}"
                );
                assert!(a.contains(p), "piece {p:?} escapes {a:?}");
                assert!(!p.intersects(b), "piece {p:?} overlaps subtrahend {b:?}");
                for q in &pieces[i + 1..] {
                    assert!(!p.intersects(q), "{p:?} and {q:?} overlap in {a:?} - {b:?}");
                }
            }
        }
    }
}

#[test]
fn empty_result_iff_fully_covered() {
    let rects = all_rects();
    for a in &rects {
        for b in &rects {
            assert_eq!(
                a.subtract(b).is_empty(),
                b.contains(a),
                "{a:?} - {b:?}"
            );
        }
    }
}

#[test]
fn identity_result_iff_disjoint() {
    let everything = all_rects();
    for a in &everything {
        for b in everything.iter().filter(|b| !b.contains(a)) {
            let pieces = a.subtract(b);
            let unchanged = pieces.as_slice() == [*a];
            assert_eq!(unchanged, !a.intersects(b), "{a:?} - {b:?} = {pieces:?}");
        }
    }
}

#[test]
fn edge_aligned_overlap_emits_only_exposed_sides() {
    let a = Rect::new(0, 0, 4, 4);
    // Covers the full height on the right: a single left strip remains.
    assert_eq!(a.subtract(&Rect::new(2, 0, 4, 4)).len(), 1);
    // Overhangs top and right: left strip plus bottom strip.
    assert_eq!(a.subtract(&Rect::new(2, -1, 6, 2)).len(), 2);
    // Notch in the middle of the top edge.
    assert_eq!(a.subtract(&Rect::new(1, 0, 3, 2)).len(), 3);
}

#[test]
fn l_shape_from_diagonal_overlap() {
    let a = Rect::new(0, 0, 100, 100);
    let b = Rect::new(50, 50, 150, 150);
    let pieces = a.subtract(&b);
    assert_eq!(pieces.len(), 2);
    let exposed: i64 = pieces.iter().map(Rect::area).sum();
    assert_eq!(exposed, a.area() - a.intersection(&b).area());
    assert!(!pieces[0].intersects(&pieces[1]));
}

#[test]
fn empty_minuend_outside_subtrahend_comes_back_unchanged() {
    let a = Rect::new(5, 5, 5, 5);
    assert_eq!(a.subtract(&Rect::new(0, 0, 1, 1)).as_slice(), &[a]);
    assert!(a.subtract(&Rect::new(0, 0, 8, 8)).is_empty());
}
