// Copyright 2025 the Plumbline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use plumbline_content_tree::{ContentTree, NodeId};
use plumbline_index::{IndexConfig, PositionIndex};

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
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

const WIDTH: f64 = 640.0;

/// A tall article: paragraphs with jittered heights, an occasional inline
/// emphasis, and an occasional vertical gap between paragraphs.
fn gen_article(paragraphs: usize, seed: u64) -> (ContentTree, NodeId, f64) {
    let mut rng = Rng::new(seed);
    let mut tree = ContentTree::new();
    let root = tree.insert_element(None, "article", Rect::ZERO);
    let mut y = 0.0;
    for i in 0..paragraphs {
        if rng.next_f64() < 0.1 {
            y += 200.0; // a blank stretch the fallback search has to cross
        }
        let h = 18.0 + rng.next_f64() * 60.0;
        let p = tree.insert_element(Some(root), "p", Rect::new(0.0, y, WIDTH, y + h));
        tree.insert_text(p, "paragraph");
        if i % 7 == 0 {
            let em = tree.insert_element(
                Some(p),
                "em",
                Rect::new(40.0, y + 2.0, 200.0, y + h / 2.0),
            );
            tree.insert_text(em, "emphasis");
        }
        y += h + 4.0;
    }
    // Trailing void: offsets near the bottom force a long fallback walk.
    y += 300.0;
    tree.set_bounds(root, Rect::new(0.0, 0.0, WIDTH, y));
    (tree, root, y)
}

fn config(resolution: f64) -> IndexConfig {
    IndexConfig {
        allow_elements: vec!["em".to_string()],
        resolution,
        ..Default::default()
    }
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for paragraphs in [100_usize, 1000] {
        let (tree, root, _) = gen_article(paragraphs, 42);
        group.throughput(Throughput::Elements(paragraphs as u64));
        for resolution in [1.0, 4.0, 16.0] {
            group.bench_function(format!("p{paragraphs}_r{resolution}"), |b| {
                b.iter(|| {
                    PositionIndex::build(&tree, root, config(resolution)).unwrap()
                });
            });
        }
    }
    group.finish();
}

fn bench_locate(c: &mut Criterion) {
    let mut group = c.benchmark_group("locate");
    let (tree, root, height) = gen_article(1000, 42);
    let index = PositionIndex::build(&tree, root, config(1.0)).unwrap();

    // Sweep of offsets across the whole container, hitting content and gaps
    // alike.
    let mut rng = Rng::new(7);
    let offsets: Vec<f64> = (0..1024).map(|_| rng.next_f64() * height).collect();

    group.throughput(Throughput::Elements(offsets.len() as u64));
    group.bench_function("sweep", |b| {
        b.iter(|| {
            let mut found = 0_usize;
            for &offset in &offsets {
                if index.locate(black_box(offset)).is_some() {
                    found += 1;
                }
            }
            found
        });
    });

    // Worst case: an offset deep in a gap, forcing the radius walk.
    group.bench_function("gap_fallback", |b| {
        b.iter(|| index.locate_within(black_box(height - 1.0), 1000));
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_locate);
criterion_main!(benches);
