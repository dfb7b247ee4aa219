use criterion::{black_box, criterion_group, criterion_main, Criterion};
use deloc::containers::demux_log_stream;
use deloc::metrics::{MetricsStore, SystemSample};

/// Docker multiplexed log body: 8-byte header per frame
fn multiplexed(lines: usize) -> Vec<u8> {
    let mut body = Vec::new();
    for i in 0..lines {
        let payload = format!("[2024-05-01 10:00:00] INFO: Processed {} tasks\n", i);
        body.push(if i % 10 == 0 { 2 } else { 1 });
        body.extend_from_slice(&[0, 0, 0]);
        body.extend_from_slice(&(payload.len() as u32).to_be_bytes());
        body.extend_from_slice(payload.as_bytes());
    }
    body
}

fn benchmark_log_demux(c: &mut Criterion) {
    let mut group = c.benchmark_group("Log Demux");

    for lines in [10, 200, 1_000] {
        let body = multiplexed(lines);
        group.bench_function(format!("multiplexed_{}", lines), |b| {
            b.iter(|| demux_log_stream(black_box(&body)))
        });
    }

    let tty = "INFO: Service started successfully\n".repeat(200);
    group.bench_function("tty_200", |b| {
        b.iter(|| demux_log_stream(black_box(tty.as_bytes())))
    });

    group.finish();
}

fn benchmark_metrics_store(c: &mut Criterion) {
    let mut group = c.benchmark_group("Metrics Store");

    group.bench_function("record_system_full_ring", |b| {
        let mut store = MetricsStore::new();
        b.iter(|| store.record_system(black_box(SystemSample::initial())))
    });

    group.bench_function("snapshot_24", |b| {
        let mut store = MetricsStore::new();
        for _ in 0..100 {
            store.record_system(SystemSample::initial());
        }
        b.iter(|| store.snapshot(black_box(24)))
    });

    group.finish();
}

criterion_group!(benches, benchmark_log_demux, benchmark_metrics_store);
criterion_main!(benches);
