use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use criterion::{criterion_group, criterion_main, Criterion};
use decisions::{RuleTable, RuleTableBuilder};

fn build_shared_table() -> Arc<RuleTable<u64, &'static str>> {
    let table = RuleTableBuilder::new()
        .rule(|x: &u64| x % 15 == 0, "fizzbuzz")
        .rule(|x: &u64| x % 5 == 0, "buzz")
        .rule(|x: &u64| x % 3 == 0, "fizz")
        .finalize_with_default("number");
    Arc::new(table)
}

fn bench_throughput(c: &mut Criterion) {
    let thread_counts = [1, 2, 4, 8];

    let mut group = c.benchmark_group("throughput");
    group.measurement_time(Duration::from_secs(5));

    for &threads in &thread_counts {
        let table = build_shared_table();

        group.bench_function(&format!("{threads}_threads"), |b| {
            b.iter_custom(|iters| {
                let per_thread = iters / threads as u64;
                let handles: Vec<_> = (0..threads)
                    .map(|_| {
                        let t = Arc::clone(&table);
                        thread::spawn(move || {
                            let start = Instant::now();
                            for i in 0..per_thread {
                                let _ = t.apply(&i);
                            }
                            start.elapsed()
                        })
                    })
                    .collect();

                let mut max_elapsed = Duration::ZERO;
                for h in handles {
                    let elapsed = h.join().unwrap();
                    if elapsed > max_elapsed {
                        max_elapsed = elapsed;
                    }
                }
                max_elapsed
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_throughput);
criterion_main!(benches);
