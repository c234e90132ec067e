use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use posada::operations::reconcile_units;
use posada::stats::{compute_metrics, compute_occupancy};
use posada::{Reservation, ReservationStatus, RoomUnit};

const COLLECTION_SIZES: &[usize] = &[10, 100, 1000];

fn build_units(count: usize) -> Vec<RoomUnit> {
    (0..count)
        .map(|i| {
            let mut unit = RoomUnit::fresh(1, 2);
            unit.id = Some(i as i64 + 1);
            unit.occupied = (i % 3) as u32;
            unit
        })
        .collect()
}

fn build_reservations(count: usize) -> Vec<Reservation> {
    (0..count)
        .map(|i| {
            let status = match i % 3 {
                0 => ReservationStatus::Confirmed,
                1 => ReservationStatus::Pending,
                _ => ReservationStatus::Cancelled,
            };
            let mut builder = Reservation::builder(
                format!("Customer {i}"),
                format!("customer{i}@example.com"),
                1,
            )
            .status(status)
            .total(100.0 + i as f64)
            .payment_plan(i % 2 == 0);
            if i % 4 == 0 {
                builder = builder.group(5);
            }
            builder.build().expect("failed to build benchmark fixture")
        })
        .collect()
}

fn bench_compute_occupancy(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_occupancy");
    for &size in COLLECTION_SIZES {
        let units = build_units(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &units, |b, units| {
            b.iter(|| compute_occupancy(black_box(units), size as u32, 2));
        });
    }
    group.finish();
}

fn bench_compute_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_metrics");
    for &size in COLLECTION_SIZES {
        let reservations = build_reservations(size);
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &reservations,
            |b, reservations| {
                b.iter(|| compute_metrics(black_box(reservations)));
            },
        );
    }
    group.finish();
}

fn bench_reconcile_units(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconcile_units");
    for &size in COLLECTION_SIZES {
        let units = build_units(size);
        // Shrink to half, the more expensive path (sort + truncate).
        let desired = (size / 2) as u32;
        group.bench_with_input(BenchmarkId::from_parameter(size), &units, |b, units| {
            b.iter(|| reconcile_units(black_box(units), 1, desired, 2));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_compute_occupancy,
    bench_compute_metrics,
    bench_reconcile_units
);
criterion_main!(benches);
