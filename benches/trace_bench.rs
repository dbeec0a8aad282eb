//! Step-trace generation throughput for each executor.

use std::hint::black_box;

use algotrace::algorithms::{bellman_ford, dijkstra, floyd_warshall, knapsack, prim};
use algotrace::samples::{SAMPLE_CAPACITY, sample_graph, sample_items};
use algotrace::{AlgorithmRun, Edge, Graph, Node, PlaybackController};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

/// Ring of `n` nodes plus chords every third node.
fn ring(n: usize) -> Graph {
  let nodes = (0..n).map(|i| Node::unlabeled(format!("N{i}"))).collect();
  let mut edges = Vec::new();
  for i in 0..n {
    edges.push(Edge::new(
      format!("N{i}"),
      format!("N{}", (i + 1) % n),
      (i % 7 + 1) as f64,
    ));
    if i % 3 == 0 {
      edges.push(Edge::new(
        format!("N{i}"),
        format!("N{}", (i + n / 2) % n),
        (i % 11 + 2) as f64,
      ));
    }
  }
  Graph { nodes, edges }
}

fn bench_sample(c: &mut Criterion) {
  let graph = sample_graph();
  let items = sample_items();
  let mut group = c.benchmark_group("sample");
  group.bench_function("dijkstra", |b| {
    b.iter(|| dijkstra::run(black_box(&graph), "A"))
  });
  group.bench_function("bellman_ford", |b| {
    b.iter(|| bellman_ford::run(black_box(&graph), "A"))
  });
  group.bench_function("floyd_warshall", |b| {
    b.iter(|| floyd_warshall::run(black_box(&graph)))
  });
  group.bench_function("prim", |b| b.iter(|| prim::run(black_box(&graph), "A")));
  group.bench_function("knapsack", |b| {
    b.iter(|| knapsack::run(black_box(&items), SAMPLE_CAPACITY))
  });
  group.finish();
}

fn bench_scaling(c: &mut Criterion) {
  let mut group = c.benchmark_group("scaling");
  for n in [8usize, 16, 32] {
    let graph = ring(n);
    group.bench_with_input(BenchmarkId::new("dijkstra", n), &graph, |b, g| {
      b.iter(|| dijkstra::run(g, "N0"))
    });
    group.bench_with_input(BenchmarkId::new("floyd_warshall", n), &graph, |b, g| {
      b.iter(|| floyd_warshall::run(g))
    });
  }
  group.finish();
}

fn bench_playback(c: &mut Criterion) {
  let controller = PlaybackController::new(AlgorithmRun::FloydWarshall { graph: ring(16) });
  c.bench_function("playback_seek_sweep", |b| {
    b.iter(|| {
      let mut ctl = controller.clone();
      for i in (0..ctl.len()).step_by(7) {
        ctl.seek(black_box(i));
      }
      ctl.index()
    })
  });
}

criterion_group!(benches, bench_sample, bench_scaling, bench_playback);
criterion_main!(benches);
