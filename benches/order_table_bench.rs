use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use order_table::{Order, OrderTable};
use std::time::Duration;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn order(n: u64) -> Order {
    Order::new((n >> 1) as i64, "widget", (n % 100) as u32)
}

fn filled_table(buckets: usize, count: usize) -> OrderTable {
    let mut table = OrderTable::with_buckets(buckets);
    table.fill(lcg(7).take(count).map(order));
    table
}

fn bench_insert(c: &mut Criterion) {
    c.bench_function("order_table_insert_10k", |b| {
        b.iter_batched(
            || OrderTable::with_buckets(4093),
            |mut table| {
                for x in lcg(1).take(10_000) {
                    let _ = table.insert(order(x));
                }
                black_box(table)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_find_hit(c: &mut Criterion) {
    c.bench_function("order_table_find_hit", |b| {
        let table = filled_table(4093, 10_000);
        let ids: Vec<i64> = table.iter().map(|o| o.id).collect();
        let mut it = ids.iter().cycle();
        b.iter(|| {
            let id = *it.next().unwrap();
            black_box(table.find(id));
        })
    });
}

fn bench_find_miss(c: &mut Criterion) {
    c.bench_function("order_table_find_miss", |b| {
        let table = filled_table(4093, 10_000);
        // Stored ids are non-negative, so negative probes always miss.
        let mut miss = lcg(0xdead_beef);
        b.iter(|| {
            let id = -((miss.next().unwrap() >> 1) as i64) - 1;
            black_box(table.find(id));
        })
    });
}

fn bench_rehash(c: &mut Criterion) {
    c.bench_function("order_table_rehash_10k", |b| {
        let table = filled_table(23, 10_000);
        b.iter_batched(
            || table.clone(),
            |mut table| {
                table.rehash(4093);
                black_box(table)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(8))
        .warm_up_time(Duration::from_secs(2))
}

criterion_group! {
    name = benches;
    config = bench_config();
    targets = bench_insert, bench_find_hit, bench_find_miss, bench_rehash
}
criterion_main!(benches);
