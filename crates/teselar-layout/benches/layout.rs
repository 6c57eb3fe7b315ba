//! Layout benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use teselar_core::{DatasetNode, HierarchyNode};
use teselar_layout::TreemapLayout;

/// Deterministic pseudo-random values, no external dependency needed.
fn synthetic_values(seed: u64, count: usize) -> Vec<f64> {
    let mut state = seed;
    (0..count)
        .map(|_| {
            state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
            ((state >> 33) % 10_000) as f64 + 1.0
        })
        .collect()
}

fn synthetic_root(groups: usize, per_group: usize) -> HierarchyNode {
    let children = (0..groups)
        .map(|g| {
            let leaves = synthetic_values(g as u64 + 1, per_group)
                .into_iter()
                .enumerate()
                .map(|(i, v)| DatasetNode::leaf(format!("item{g}-{i}"), format!("group{g}"), v))
                .collect();
            DatasetNode::branch(format!("group{g}"), leaves)
        })
        .collect();
    HierarchyNode::build(&DatasetNode::branch("bench", children)).expect("synthetic tree is valid")
}

fn bench_hierarchy(c: &mut Criterion) {
    let data = DatasetNode::branch(
        "bench",
        synthetic_values(7, 480)
            .into_iter()
            .enumerate()
            .map(|(i, v)| DatasetNode::leaf(format!("item{i}"), "flat", v))
            .collect(),
    );
    c.bench_function("hierarchy_build_480", |b| {
        b.iter(|| HierarchyNode::build(black_box(&data)).expect("valid"));
    });
}

fn bench_layout(c: &mut Criterion) {
    let small = synthetic_root(12, 40);
    let large = synthetic_root(40, 120);
    let layout = TreemapLayout::default();
    c.bench_function("treemap_layout_480", |b| {
        b.iter(|| layout.layout(black_box(&small)));
    });
    c.bench_function("treemap_layout_4800", |b| {
        b.iter(|| layout.layout(black_box(&large)));
    });
}

criterion_group!(benches, bench_hierarchy, bench_layout);
criterion_main!(benches);
