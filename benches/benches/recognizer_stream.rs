// Copyright 2026 the Pincer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use pincer_recognizer::fling::ZeroVelocity;
use pincer_recognizer::recognizer::ScaleRecognizer;
use pincer_recognizer::types::{DeviceKind, NoArena, PointerEvent, PointerId};

/// A scripted two-finger session: downs, `n` interleaved pinch-and-twist
/// moves, ups.
fn gen_session(n: usize) -> Vec<PointerEvent> {
    let mut out = Vec::with_capacity(n + 4);
    for (id, x) in [(1_u64, 0.0), (2, 100.0)] {
        out.push(PointerEvent::Down {
            id: PointerId(id),
            position: Point::new(x, 0.0),
            kind: DeviceKind::Touch,
            timestamp: Duration::ZERO,
        });
    }
    for i in 0..n {
        let t = i as f64 / n as f64;
        let theta = t * core::f64::consts::PI;
        let radius = 50.0 + 100.0 * t;
        let (id, position) = if i % 2 == 0 {
            (1, Point::new(50.0 - radius * theta.cos(), -radius * theta.sin()))
        } else {
            (2, Point::new(50.0 + radius * theta.cos(), radius * theta.sin()))
        };
        out.push(PointerEvent::Move {
            id: PointerId(id),
            position,
            timestamp: Duration::from_millis(i as u64 * 8),
            synthetic: false,
        });
    }
    out.push(PointerEvent::Up { id: PointerId(2) });
    out.push(PointerEvent::Up { id: PointerId(1) });
    out
}

fn bench_event_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("recognizer_stream");
    for n in [100_usize, 1_000, 10_000] {
        let session = gen_session(n);
        group.throughput(Throughput::Elements(session.len() as u64));
        group.bench_function(format!("pinch_twist_{n}"), |b| {
            b.iter(|| {
                let mut recognizer = ScaleRecognizer::new(ZeroVelocity, NoArena);
                let mut emitted = 0_usize;
                for event in &session {
                    emitted += recognizer.handle_event(black_box(*event)).len();
                }
                black_box(emitted)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_event_stream);
criterion_main!(benches);
