use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use mytpl::{Entry, Value, build_query, format_array};

/// Template with `n` typed placeholders:
/// SELECT * FROM t WHERE col0 = ?d AND col1 = ?d ...
fn placeholder_template(n: usize) -> (String, Vec<Value>) {
    let mut template = String::from("SELECT * FROM t WHERE ");
    let mut args = Vec::with_capacity(n);
    for i in 0..n {
        if i > 0 {
            template.push_str(" AND ");
        }
        template.push_str(&format!("col{i} = ?d"));
        args.push(Value::from(i as i64));
    }
    (template, args)
}

fn bench_build_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_query/placeholders");

    for n in [1, 5, 10, 50, 100] {
        let (template, args) = placeholder_template(n);
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(template, args),
            |b, (template, args)| {
                b.iter(|| black_box(build_query(template, args).unwrap()));
            },
        );
    }

    group.finish();
}

fn bench_conditional_blocks(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_query/blocks");

    let template = "SELECT * FROM t {WHERE a = ?d AND b = ? AND c = ?f}";
    let rendered = vec![Value::from(1i64), Value::from("x"), Value::from(2.5f64)];
    let skipped = vec![mytpl::skip()];

    group.bench_function("rendered", |b| {
        b.iter(|| black_box(build_query(template, &rendered).unwrap()));
    });
    group.bench_function("skipped", |b| {
        b.iter(|| black_box(build_query(template, &skipped).unwrap()));
    });

    group.finish();
}

fn bench_format_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_array/fields");

    for n in [5, 20, 100, 500] {
        let entries: Vec<Entry> = (0..n)
            .map(|i| Entry::field(format!("col{i}"), i as i64))
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &entries, |b, entries| {
            b.iter(|| black_box(format_array(entries).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_build_query,
    bench_conditional_blocks,
    bench_format_array
);
criterion_main!(benches);
