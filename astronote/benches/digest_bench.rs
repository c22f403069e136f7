use criterion::{criterion_group, criterion_main, Criterion};

fn digest_benchmark(c: &mut Criterion) {
    let date = chrono::NaiveDate::from_ymd_opt(2017, 1, 1).expect("valid date");
    let observer = astronote::Observer::new(0.0, 0.0).expect("valid observer");

    c.bench_function("daily_digest_equator", |b| {
        b.iter(|| astronote::daily_digest(date, &observer))
    });
}

criterion_group!(benches, digest_benchmark);
criterion_main!(benches);
