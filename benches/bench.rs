use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use redblack::Tree;

/// Helper to bench a function on a tree.
/// It creates a group for the given name and closure and runs it against
/// trees of various sizes, each built by inserting items one at a time.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&Tree<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3, 7, 11, 15] {
        let num_nodes = 2i32.pow(num_levels) - 1;
        let tree = (0..num_nodes).fold(Tree::new(), |tree, x| tree.insert(x));
        let largest = *tree.maximum().map_or(&0, |n| n.item());

        group.bench_with_input(BenchmarkId::from_parameter(largest), &tree, |b, tree| {
            b.iter(|| f(tree, black_box(largest)))
        });
    }

    group.finish();
}

/// Compares building a tree from sorted items against inserting them.
fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for num_levels in [3, 7, 11, 15] {
        let items: Vec<i32> = (0..2i32.pow(num_levels) - 1).collect();

        group.bench_with_input(
            BenchmarkId::new("from_sorted", items.len()),
            &items,
            |b, items| b.iter(|| Tree::from_sorted(items.iter().copied())),
        );
        group.bench_with_input(
            BenchmarkId::new("incremental", items.len()),
            &items,
            |b, items| b.iter(|| items.iter().fold(Tree::new(), |tree, x| tree.insert(*x))),
        );
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "contains", |tree, i| {
        black_box(tree.contains(&i));
    });
    bench_helper(c, "contains-miss", |tree, i| {
        black_box(tree.contains(&(i + 1)));
    });

    bench_helper(c, "insert", |tree, i| {
        black_box(tree.insert(i + 1));
    });
    bench_helper(c, "delete", |tree, i| {
        black_box(tree.delete(&i));
    });
    bench_helper(c, "delete-miss", |tree, i| {
        black_box(tree.delete(&(i + 1)));
    });

    bench_helper(c, "successor", |tree, i| {
        black_box(tree.successor(&(i / 2)));
    });

    bench_build(c);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
