use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gmodels::{DiGraph, Edge, GraphSearcher, Node, UndirectedGraph};

fn node_id(i: usize) -> String {
    format!("v{i:05}")
}

/// Ring of `size` nodes with a chord every 7 nodes.
fn ring_edges(size: usize) -> Vec<(usize, usize)> {
    let mut pairs: Vec<(usize, usize)> = (0..size).map(|i| (i, (i + 1) % size)).collect();
    pairs.extend((0..size).step_by(7).map(|i| (i, (i + size / 2) % size)));
    pairs
}

fn undirected(size: usize) -> UndirectedGraph {
    let nodes: Vec<Node> = (0..size).map(|i| Node::bare(node_id(i))).collect();
    let edges: Vec<Edge> = ring_edges(size)
        .into_iter()
        .enumerate()
        .map(|(k, (s, t))| Edge::undirected(format!("e{k:05}"), nodes[s].clone(), nodes[t].clone(), ()))
        .collect();
    UndirectedGraph::new("bench", (), nodes, edges).unwrap()
}

fn directed(size: usize) -> DiGraph {
    let nodes: Vec<Node> = (0..size).map(|i| Node::bare(node_id(i))).collect();
    // forward chain only, so the graph stays acyclic
    let edges: Vec<Edge> = (0..size - 1)
        .map(|i| Edge::directed(format!("e{i:05}"), nodes[i].clone(), nodes[i + 1].clone(), ()))
        .collect();
    DiGraph::new("bench", (), nodes, edges).unwrap()
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");
    for size in [100, 1000] {
        group.bench_with_input(BenchmarkId::new("undirected", size), &size, |b, &size| {
            b.iter(|| black_box(undirected(size)));
        });
    }
    group.bench_with_input(BenchmarkId::new("digraph_index", 200), &200, |b, &size| {
        b.iter(|| black_box(directed(size)));
    });
    group.finish();
}

fn bench_traversals(c: &mut Criterion) {
    let size = 1000;
    let g = undirected(size);
    let start = Node::bare(node_id(0));
    let goal = Node::bare(node_id(size / 3));

    c.bench_function("bfs_1000", |b| {
        b.iter(|| black_box(GraphSearcher::new(&g).breadth_first_search(&start).unwrap()));
    });

    c.bench_function("dfs_forest_1000", |b| {
        b.iter(|| black_box(GraphSearcher::new(&g).depth_first_forest(true)));
    });

    c.bench_function("ucs_1000", |b| {
        b.iter(|| black_box(g.find_shortest_path(&start, &goal).unwrap()));
    });
}

fn bench_algorithms(c: &mut Criterion) {
    let g = undirected(1000);
    c.bench_function("connected_components_1000", |b| {
        b.iter(|| black_box(g.find_connected_components()));
    });

    let small = undirected(200);
    c.bench_function("prim_200", |b| {
        b.iter(|| black_box(small.minimum_spanning_tree().unwrap()));
    });

    let dg = directed(200);
    c.bench_function("transitive_closure_200", |b| {
        b.iter(|| black_box(dg.transitive_closure_matrix()));
    });
}

criterion_group!(benches, bench_construction, bench_traversals, bench_algorithms);
criterion_main!(benches);
