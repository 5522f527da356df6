use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};

use chrono::{Days, NaiveDate};
use stockroom_allocation::{allocate, Batch, OrderLine, Product};
use stockroom_core::{BatchReference, OrderReference};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 1, 1).unwrap()
}

/// Shipments in reverse arrival order, with warehouse stock last, so the
/// ranking has to do real work before the winner is found.
fn setup_batches(count: usize, product: &Product) -> Vec<Batch> {
    let mut batches: Vec<Batch> = (0..count.saturating_sub(1))
        .rev()
        .map(|i| {
            Batch::new(
                BatchReference::new(format!("shipment-{i}")).unwrap(),
                product.clone(),
                1_000_000,
                base_date().checked_add_days(Days::new(i as u64)),
            )
            .unwrap()
        })
        .collect();
    batches.push(
        Batch::new(
            BatchReference::new("warehouse").unwrap(),
            product.clone(),
            1_000_000,
            None,
        )
        .unwrap(),
    );
    batches
}

fn bench_allocate_by_batch_count(c: &mut Criterion) {
    let product = Product::try_from("RED-CHAIR").unwrap();
    let mut group = c.benchmark_group("allocate_by_batch_count");

    for count in [1usize, 10, 100, 1_000] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let batches = setup_batches(count, &product);
            let line = OrderLine::new(
                OrderReference::new("order-1").unwrap(),
                product.clone(),
                1,
            )
            .unwrap();
            b.iter_batched(
                || batches.clone(),
                |mut batches| black_box(allocate(&line, &mut batches).unwrap()),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_out_of_stock(c: &mut Criterion) {
    let product = Product::try_from("RED-CHAIR").unwrap();
    let mut batches = setup_batches(100, &product);
    let line = OrderLine::new(
        OrderReference::new("order-too-big").unwrap(),
        product.clone(),
        10_000_000,
    )
    .unwrap();

    c.bench_function("allocate_out_of_stock_100_batches", |b| {
        b.iter(|| black_box(allocate(&line, &mut batches).is_err()));
    });
}

criterion_group!(benches, bench_allocate_by_batch_count, bench_out_of_stock);
criterion_main!(benches);
