use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use megaprimes::sieve::sieve_scan;
use megaprimes::{scan, DigitShape, PrimeTest, ScanStrategy, StrategySelection};

fn bench_prime_tests(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_prime(0..10_000)");
    for test in PrimeTest::ALL {
        group.bench_function(test.name(), |b| {
            b.iter(|| (0..10_000u32).filter(|&n| test.is_prime(black_box(n))).count());
        });
    }
    group.finish();
}

fn bench_prime_tests_large(c: &mut Criterion) {
    // Largest prime below 2^32: worst case for every trial-division variant
    let prime = 4_294_967_291u32;
    let mut group = c.benchmark_group("is_prime(4294967291)");
    for test in PrimeTest::ALL {
        group.bench_function(test.name(), |b| {
            b.iter(|| test.is_prime(black_box(prime)));
        });
    }
    group.finish();
}

fn bench_digit_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("digit_shape(0..100_000)");
    for shape in [DigitShape::Numerical, DigitShape::Textual] {
        group.bench_function(shape.name(), |b| {
            b.iter(|| (0..100_000u32).filter(|&n| shape.matches(black_box(n))).count());
        });
    }
    group.finish();
}

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan(1_000_000)");
    group.sample_size(10);
    for strategy in [
        ScanStrategy::Sequential,
        ScanStrategy::Parallel,
        ScanStrategy::Sieve,
    ] {
        let selection = StrategySelection::default().with_strategy(strategy);
        group.bench_with_input(
            BenchmarkId::from_parameter(strategy.name()),
            &selection,
            |b, selection| {
                b.iter(|| scan(black_box(1_000_000), selection));
            },
        );
    }
    group.finish();
}

fn bench_sieve_plain_primes(c: &mut Criterion) {
    c.bench_function("sieve_scan(10_000_000, any)", |b| {
        b.iter(|| sieve_scan(black_box(10_000_000), DigitShape::AnyPrime));
    });
}

criterion_group!(
    benches,
    bench_prime_tests,
    bench_prime_tests_large,
    bench_digit_shapes,
    bench_strategies,
    bench_sieve_plain_primes,
);
criterion_main!(benches);
