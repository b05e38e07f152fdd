use std::sync::Arc;
use std::thread;

use decisions::RuleTableBuilder;

fn main() {
    let classify = Arc::new(
        RuleTableBuilder::new()
            .rule(|n: &i64| *n < 0, "negative")
            .rule(|n: &i64| *n % 2 == 0, "even")
            .finalize_with_default("odd"),
    );

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let table = Arc::clone(&classify);
            thread::spawn(move || {
                let n = i64::from(i) - 1;
                println!("Thread {i}: {n} is {}", table.apply(&n));
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }
}
