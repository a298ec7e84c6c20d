use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use pgblock::{Block, Column, Comparable, IntoSql, and_, block, join, p, raw};

/// SELECT col0 , col1 , ... FROM t WHERE ( col0 = $1 ) AND ( col1 = $2 ) ...
fn build_select(n: usize) -> Block {
    let columns: Vec<Column> = (0..n)
        .map(|i| Column::new(format!("col{i}")).unwrap())
        .collect();
    let conditions = columns.iter().enumerate().map(|(i, col)| col.eq(p(i as i64)).into_sql());

    block![
        raw("SELECT"),
        join(raw(","), columns.iter().map(IntoSql::into_sql), false),
        raw("FROM t WHERE"),
        and_(conditions),
    ]
}

/// Left-deep `( ( ( x = $1 ) = $2 ) ... )`, the worst case for nesting.
fn build_nested(depth: usize) -> Block {
    let mut expr = raw("x").eq(p(0_i64));
    for i in 1..depth {
        expr = expr.eq(p(i as i64));
    }
    expr
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("block/render");

    for n in [1, 5, 10, 50, 100] {
        let q = build_select(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &q, |b, q| {
            b.iter(|| black_box(q.render()));
        });
    }

    group.finish();
}

fn bench_build_and_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("block/build_and_render");

    for n in [1, 5, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(build_select(n).render()));
        });
    }

    group.finish();
}

fn bench_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("block/nested");

    for depth in [10, 100, 500] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| black_box(build_nested(depth).render()));
        });
    }

    group.finish();
}

fn bench_in_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("block/in_list");

    for n in [5, 20, 100, 500] {
        let values: Vec<i64> = (0..n).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, values| {
            b.iter(|| {
                let list = join(raw(","), values.iter().map(|v| p(*v).into_sql()), true);
                let q = block![raw("SELECT * FROM t WHERE id IN"), list];
                black_box(q.render());
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_render,
    bench_build_and_render,
    bench_nested,
    bench_in_list
);
criterion_main!(benches);
