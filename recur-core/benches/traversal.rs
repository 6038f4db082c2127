use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use recur_core::{count_recursive, flatten, Item, Nested};
use recur_test_utils::{deep_chain, wide_tree};

fn bench_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatten");

    for (fanout, levels) in [(10, 3), (4, 6), (2, 12)] {
        let tree = wide_tree(fanout, levels);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}fan_{}lvl", fanout, levels)),
            &tree,
            |b, tree| {
                b.iter(|| black_box(flatten(tree).unwrap().count()));
            },
        );
    }

    let chain = deep_chain(256, Item::Int(0));
    group.bench_function("chain_256", |b| {
        b.iter(|| black_box(flatten(&chain).unwrap().count()));
    });

    group.finish();
}

fn bench_membership(c: &mut Criterion) {
    let mut group = c.benchmark_group("membership");
    let tree = wide_tree(4, 6);
    let nest = Nested::new(&tree).unwrap();

    group.bench_function("contains_first", |b| {
        b.iter(|| black_box(nest.contains(&Item::Int(0))));
    });
    group.bench_function("contains_missing", |b| {
        b.iter(|| black_box(nest.contains(&Item::Int(-1))));
    });
    group.bench_function("count_recursive", |b| {
        b.iter(|| black_box(count_recursive(&tree, &Item::Int(7)).unwrap()));
    });

    group.finish();
}

criterion_group!(benches, bench_flatten, bench_membership);
criterion_main!(benches);
