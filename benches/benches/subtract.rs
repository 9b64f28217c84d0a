// Copyright 2026 the Sash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use sash_rect::{Rect, Region};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    fn coord(&mut self, upper: i32) -> i32 {
        (self.next_u32() % upper as u32) as i32
    }

    fn rect(&mut self, extent: i32) -> Rect {
        let x0 = self.coord(extent);
        let y0 = self.coord(extent);
        let x1 = self.coord(extent);
        let y1 = self.coord(extent);
        Rect::new(x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1))
    }
}

fn pairs(n: usize, seed: u64) -> Vec<(Rect, Rect)> {
    let mut rng = Lcg::new(seed);
    (0..n).map(|_| (rng.rect(480), rng.rect(480))).collect()
}

/// Subtracts every cover from `target` in turn, the way compositing carves a
/// window's damage by the windows above it.
fn carve(target: Rect, covers: &[Rect]) -> Region {
    let mut pieces = Region::new();
    pieces.push(target);
    for cover in covers {
        let mut next = Region::new();
        for piece in &pieces {
            next.extend(piece.subtract(cover));
        }
        pieces = next;
    }
    pieces
}

fn bench_subtract(c: &mut Criterion) {
    let mut group = c.benchmark_group("sash_rect");

    let random = pairs(1_024, 0x5A5E_0000_0000_0001);
    group.bench_function("subtract_random_pairs(1024)", |b| {
        b.iter(|| {
            let mut total = 0_usize;
            for (a, o) in &random {
                total += black_box(a).subtract(black_box(o)).len();
            }
            black_box(total)
        });
    });

    let target = Rect::new(0, 0, 480, 320);
    let hole = Rect::new(100, 80, 200, 160);
    group.bench_function("subtract_hole", |b| {
        b.iter(|| black_box(black_box(target).subtract(black_box(&hole))));
    });

    for &n in &[2_usize, 8, 32] {
        let mut rng = Lcg::new(0x5A5E_0000_0000_0002);
        let covers: Vec<Rect> = (0..n).map(|_| rng.rect(480)).collect();
        group.bench_function(format!("carve(covers={n})"), |b| {
            b.iter(|| black_box(carve(black_box(target), black_box(&covers))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_subtract);
criterion_main!(benches);
