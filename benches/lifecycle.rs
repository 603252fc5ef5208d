// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the notification lifecycle.
//!
//! Measures the performance of:
//! - Pushing notifications past the concurrency cap
//! - Driving a full queue through entry, timeout, exit, and promotion
//! - Sampling per-frame opacities while effects run

use criterion::{criterion_group, criterion_main, Criterion};
use iced_toasts::{Config, Effect, Manager, Notification};
use std::hint::black_box;
use std::time::{Duration, Instant};

fn fade_config() -> Config {
    Config {
        entry_effect: Some(Effect::Fade),
        entry_duration_ms: Some(250),
        exit_effect: Some(Effect::Fade),
        exit_duration_ms: Some(500),
        ..Config::default()
    }
}

/// Benchmark pushing a burst of notifications.
///
/// Most land in the pending queue; measures allocation and queue overhead.
fn bench_push_burst(c: &mut Criterion) {
    let mut group = c.benchmark_group("lifecycle");

    group.bench_function("push_burst_of_16", |b| {
        b.iter(|| {
            let mut manager = Manager::with_config(fade_config());
            let now = Instant::now();
            for i in 0..16 {
                manager.push(Notification::info(format!("toast-{i}")), now);
            }
            black_box(&manager);
        });
    });

    group.finish();
}

/// Benchmark a complete drain of the queue.
///
/// Eight notifications against the default cap of three, ticked at an
/// animation-rate 16 ms until every record has entered, timed out, faded
/// out, and been replaced from the queue.
fn bench_drain_queue(c: &mut Criterion) {
    let mut group = c.benchmark_group("lifecycle");

    group.bench_function("drain_queue_of_8", |b| {
        b.iter(|| {
            let mut manager = Manager::with_config(fade_config());
            let t0 = Instant::now();
            for i in 0..8 {
                manager.push(
                    Notification::success(format!("toast-{i}"))
                        .timeout(Duration::from_millis(300)),
                    t0,
                );
            }

            let mut now = t0;
            while manager.has_notifications() {
                now += Duration::from_millis(16);
                manager.tick(now);
            }
            black_box(&manager);
        });
    });

    group.finish();
}

/// Benchmark the per-frame render path.
///
/// Sampling opacities is done once per visible toast on every animation
/// tick, so it has to stay cheap.
fn bench_opacity_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("lifecycle");

    let mut manager = Manager::with_config(fade_config());
    let t0 = Instant::now();
    for i in 0..3 {
        manager.push(Notification::info(format!("toast-{i}")).sticky(), t0);
    }
    let mid_entry = t0 + Duration::from_millis(125);

    group.bench_function("sample_opacities", |b| {
        b.iter(|| {
            for record in manager.active() {
                black_box(manager.opacity(record, mid_entry));
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_push_burst,
    bench_drain_queue,
    bench_opacity_sampling
);
criterion_main!(benches);
