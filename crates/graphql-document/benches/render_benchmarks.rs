
use criterion::Criterion;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use graphql_document::OperationOptions;
use graphql_document::query;

fn operation_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("operation_render");

    group.bench_function("simple", |b| {
        let selections = fixtures::simple_selections();
        b.iter(|| {
            black_box(query(
                selections.clone(),
                OperationOptions::default(),
            ))
        })
    });

    group.bench_function("complex", |b| {
        let selections = fixtures::complex_selections();
        let options = fixtures::complex_options();
        b.iter(|| {
            black_box(query(selections.clone(), options.clone()))
        })
    });

    group.finish();
}

criterion_group!(benches, operation_render);
criterion_main!(benches);
