//! # CustodyChain Registry Benchmarks
//!
//! Performance validation for the hot paths:
//!
//! | Path | Claim | Target |
//! |------|-------|--------|
//! | register_product | O(1) id insert + first custody step | < 1ms |
//! | update_status | O(1) owner gate + trail append | < 1ms |
//! | product reads | O(1) id lookup | < 1ms |
//! | bus publish | bounded broadcast fan-out | < 1ms |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use std::time::Duration;

use custody_bus::{EventFilter, EventPublisher, InMemoryEventBus, ProvenanceEvent};
use custody_registry::ports::inbound::ProvenanceApi;
use custody_registry::ports::outbound::NoopNotifier;
use custody_registry::service::{create_test_service, ProvenanceService};
use custody_types::{Principal, ProductId};

const MAKER: Principal = Principal::new([1u8; 20]);

/// Build a service holding `count` registered products, one custody step each.
fn populate_service(count: u64) -> ProvenanceService<NoopNotifier> {
    let service = create_test_service();
    for id in 1..=count {
        service
            .register_product(
                ProductId::new(id),
                "Serum N7",
                "Helix Labs",
                "Plant 3",
                MAKER,
                id,
            )
            .unwrap();
    }
    service
}

// ============================================================================
// Registration: id insert plus first custody step
// ============================================================================

fn bench_registration(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry-registration");
    group.measurement_time(Duration::from_secs(10));

    let batch_sizes = [100u64, 1000, 5000];
    for size in batch_sizes {
        group.throughput(Throughput::Elements(size));
        group.bench_with_input(
            BenchmarkId::new("register_batch", size),
            &size,
            |b, &size| {
                b.iter(|| {
                    let service = create_test_service();
                    for id in 1..=size {
                        service
                            .register_product(
                                ProductId::new(id),
                                "Serum N7",
                                "Helix Labs",
                                "Plant 3",
                                MAKER,
                                id,
                            )
                            .unwrap();
                    }
                    black_box(service.product_count().unwrap())
                })
            },
        );
    }

    group.finish();
}

// ============================================================================
// Status updates: owner gate plus trail append
// ============================================================================

fn bench_status_updates(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry-status-updates");
    group.measurement_time(Duration::from_secs(10));

    let trail_lengths = [10u64, 100, 1000];
    for len in trail_lengths {
        group.throughput(Throughput::Elements(len));
        group.bench_with_input(
            BenchmarkId::new("update_status_trail", len),
            &len,
            |b, &len| {
                b.iter(|| {
                    let service = create_test_service();
                    service
                        .register_product(
                            ProductId::new(1),
                            "Serum N7",
                            "Helix Labs",
                            "Plant 3",
                            MAKER,
                            0,
                        )
                        .unwrap();
                    for step in 0..len {
                        service
                            .update_status(ProductId::new(1), "Shipped", "Rotterdam", MAKER, step)
                            .unwrap();
                    }
                    black_box(service.product_history(ProductId::new(1)).unwrap().len())
                })
            },
        );
    }

    group.finish();
}

// ============================================================================
// Reads: details, history, and authentication lookups
// ============================================================================

fn bench_reads(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry-reads");
    group.measurement_time(Duration::from_secs(10));

    // Random product lookups at increasing registry sizes
    let product_counts = [100u64, 1000, 10000];
    for count in product_counts {
        let service = populate_service(count);
        let mut rng = rand::thread_rng();

        group.bench_with_input(
            BenchmarkId::new("product_details", count),
            &service,
            |b, s| {
                b.iter(|| {
                    let id = ProductId::new(rng.gen_range(1..=count));
                    black_box(s.product_details(id).unwrap())
                })
            },
        );
    }

    // Trail reads clone the whole history out of the lock
    let trail_lengths = [10u64, 100, 1000];
    for len in trail_lengths {
        let service = create_test_service();
        service
            .register_product(
                ProductId::new(1),
                "Serum N7",
                "Helix Labs",
                "Plant 3",
                MAKER,
                0,
            )
            .unwrap();
        for step in 0..len {
            service
                .update_status(ProductId::new(1), "Shipped", "Rotterdam", MAKER, step)
                .unwrap();
        }

        group.throughput(Throughput::Elements(len));
        group.bench_with_input(
            BenchmarkId::new("product_history", len),
            &service,
            |b, s| b.iter(|| black_box(s.product_history(ProductId::new(1)).unwrap())),
        );
    }

    // Company authentication is a byte-exact claim comparison
    let service = populate_service(1000);
    group.bench_function("authenticate_company", |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| {
            let id = ProductId::new(rng.gen_range(1..=1000));
            black_box(service.authenticate_company_product(id, "Helix Labs").unwrap())
        })
    });

    group.finish();
}

// ============================================================================
// Bus: broadcast fan-out to passive subscribers
// ============================================================================

fn bench_event_publishing(c: &mut Criterion) {
    let mut group = c.benchmark_group("custody-bus");
    group.measurement_time(Duration::from_secs(10));

    fn sample_event() -> ProvenanceEvent {
        ProvenanceEvent::ProductStatusUpdated {
            id: ProductId::new(1),
            status: "Shipped".to_string(),
            location: "Rotterdam".to_string(),
            updated_by: MAKER,
        }
    }

    for subscribers in [1usize, 10, 100] {
        let bus = InMemoryEventBus::new();
        let _subs: Vec<_> = (0..subscribers)
            .map(|_| bus.subscribe(EventFilter::all()))
            .collect();

        group.throughput(Throughput::Elements(subscribers as u64));
        group.bench_with_input(
            BenchmarkId::new("publish_fanout", subscribers),
            &bus,
            |b, bus| b.iter(|| black_box(bus.publish(sample_event()))),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_registration,
    bench_status_updates,
    bench_reads,
    bench_event_publishing,
);

criterion_main!(benches);
