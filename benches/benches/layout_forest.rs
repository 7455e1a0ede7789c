// Copyright 2026 the Kintree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use glam::vec3;
use kintree_graph::{FamilyGraph, TreeNode};
use kintree_layout::{LayoutParams, layout_forest};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f32(&mut self) -> f32 {
        let v = self.next_u64() >> 40;
        (v as f32) / ((1u64 << 24) as f32)
    }
}

/// A forest of `families` family groups on a grid, each with 1..=4 children.
/// Roughly a third of the children stay aligned under the branch point so
/// both routing paths get exercised.
fn gen_forest(families: usize, seed: u64) -> FamilyGraph {
    let mut rng = Rng::new(seed);
    let mut g = FamilyGraph::new();
    for i in 0..families {
        let cx = (i % 64) as f32 * 8.0;
        let cz = (i / 64) as f32 * 8.0;
        let p1 = g.insert(TreeNode::at(vec3(cx - 1.0, 0.0, cz)));
        let p2 = g.insert(TreeNode::at(vec3(cx + 1.0, 0.0, cz)));
        let count = 1 + (rng.next_u64() % 4) as usize;
        let children = (0..count)
            .map(|_| {
                let aligned = rng.next_f32() < 0.33;
                let dx = if aligned {
                    0.0
                } else {
                    rng.next_f32() * 6.0 - 3.0
                };
                let dy = -2.0 - rng.next_f32();
                g.insert(TreeNode::at(vec3(cx + dx, dy, cz)))
            })
            .collect();
        g.add_family((p1, p2), children).unwrap();
    }
    g
}

fn bench_layout_forest(c: &mut Criterion) {
    let params = LayoutParams::default();
    let mut group = c.benchmark_group("layout_forest");
    for &n in &[16usize, 256, 1024] {
        let graph = gen_forest(n, 0x1535_CAFE);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("families_{n}"), |b| {
            b.iter(|| {
                let forest = layout_forest(black_box(graph.families()), &graph, &params);
                black_box(forest.segments().count())
            });
        });
    }
    group.finish();
}

fn bench_drag_frame(c: &mut Criterion) {
    // One dragged node per frame followed by a full relayout: the
    // recompute-on-input-changed cost an interactive embedder pays.
    let params = LayoutParams::default();
    let graph = gen_forest(256, 0xBEEF);
    let dragged = graph.iter().map(|(id, _)| id).nth(7).unwrap();

    c.bench_function("drag_frame_256_families", |b| {
        b.iter_batched(
            || graph.clone(),
            |mut g| {
                g.set_position(dragged, vec3(1.5, -2.25, 0.0));
                let forest = layout_forest(g.families(), &g, &params);
                black_box(forest.elbows().count())
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_layout_forest, bench_drag_frame);
criterion_main!(benches);
