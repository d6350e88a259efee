// Copyright 2026 the Pincer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fling extraction with the real velocity tracker.
//!
//! A fast outward swipe is sampled every 8 ms through the `tracker_adapter`
//! seam; the release velocity exceeds the configured maximum and comes back
//! clamped, direction preserved.
//!
//! Run:
//! - `cargo run -p pincer_demos --example fling_release`

use core::time::Duration;

use kurbo::Point;
use pincer_recognizer::adapters::velocity::TrackerProvider;
use pincer_recognizer::recognizer::ScaleRecognizer;
use pincer_recognizer::types::{
    DeviceKind, GestureEvent, NoArena, PointerEvent, PointerId, ScaleConfig,
};

fn main() {
    let config = ScaleConfig {
        max_fling_speed: 4_000.0,
        ..ScaleConfig::default()
    };
    let mut recognizer = ScaleRecognizer::with_config(config, TrackerProvider, NoArena);

    let down = |id, x, y| PointerEvent::Down {
        id: PointerId(id),
        position: Point::new(x, y),
        kind: DeviceKind::Touch,
        timestamp: Duration::ZERO,
    };
    let _ = recognizer.handle_event(down(1, 0.0, 0.0));
    let _ = recognizer.handle_event(down(2, 100.0, 0.0));

    // Finger 2 accelerates rightwards at ~5000 px/s: 40 px every 8 ms.
    println!("== Outward swipe, then release ==");
    for step in 1..=10_u64 {
        let events = recognizer.handle_event(PointerEvent::Move {
            id: PointerId(2),
            position: Point::new(100.0 + 40.0 * step as f64, 0.0),
            timestamp: Duration::from_millis(step * 8),
            synthetic: false,
        });
        for event in events {
            if let GestureEvent::Updated(u) = event {
                println!("scale {:5.3}", u.scale);
            }
        }
    }

    for event in recognizer.handle_event(PointerEvent::Up { id: PointerId(2) }) {
        if let GestureEvent::Ended(end) = event {
            println!(
                "released at {:7.1} px/s (clamped from ~5000)",
                end.velocity.hypot()
            );
        }
    }
}
