use criterion::{criterion_group, criterion_main, Criterion};
use padfuzz::config::Config;
use padfuzz::cover::Coverage;
use padfuzz::generator::Generator;
use padfuzz::seq::enumerate_all;

pub fn bench_enumerate(c: &mut Criterion) {
    c.bench_function("Enumerate", |b| b.iter(|| enumerate_all(8, 2)));
}

pub fn bench_feedback_cycle(c: &mut Criterion) {
    let gen = Generator::new(Config {
        buttons: 8,
        initial_len: 2,
    })
    .unwrap();
    let mut n = 0u64;
    c.bench_function("FeedbackCycle", |b| {
        b.iter(|| {
            if let Some(seq) = gen.generate() {
                n += 1;
                let cover = Coverage::from_hits(256, vec![n % 256]);
                gen.record(&seq, cover, &n.to_le_bytes());
            }
        })
    });
}

criterion_group!(benches, bench_enumerate, bench_feedback_cycle);
criterion_main!(benches);
