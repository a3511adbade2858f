use convive::solver::problem::Problem;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Builds a banquet with two fixed couples and a sprinkling of sit-apart
/// rules. Seeded, so every run benchmarks the same instances.
fn banquet_setup(guest_count: usize, table_count: u32) -> Problem {
    let mut rng = ChaCha8Rng::seed_from_u64(0xC0FFEE);
    let mut problem = Problem::new(table_count);
    for i in 0..guest_count {
        let _ = problem.add_guest(format!("guest-{i}"));
    }
    problem.max_per_table(guest_count.div_ceil(table_count as usize));

    problem.sit_together("guest-0", "guest-1").unwrap();
    problem.sit_together("guest-2", "guest-3").unwrap();

    let mut added = 0;
    while added < guest_count / 3 {
        let a = rng.gen_range(0..guest_count);
        let b = rng.gen_range(0..guest_count);
        // Keep the couples uncontradicted so the instances stay satisfiable.
        if a == b || (a < 4 && b < 4) {
            continue;
        }
        problem
            .sit_apart(&format!("guest-{a}"), &format!("guest-{b}"))
            .unwrap();
        added += 1;
    }
    problem
}

fn bench_enumeration(c: &mut Criterion) {
    let mut group = c.benchmark_group("first_ten_plans");
    for &guest_count in &[8usize, 12, 16] {
        let problem = banquet_setup(guest_count, 4);
        group.bench_with_input(
            BenchmarkId::from_parameter(guest_count),
            &problem,
            |b, problem| {
                b.iter(|| black_box(problem.solutions().take(10).count()));
            },
        );
    }
    group.finish();
}

fn bench_exhaustion(c: &mut Criterion) {
    let mut group = c.benchmark_group("exhaust_small_banquet");
    let problem = banquet_setup(8, 4);
    group.bench_function("8_guests_4_tables", |b| {
        b.iter(|| black_box(problem.solutions().count()));
    });
    group.finish();
}

criterion_group!(benches, bench_enumeration, bench_exhaustion);
criterion_main!(benches);
