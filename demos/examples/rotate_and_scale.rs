// Copyright 2026 the Pincer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rotation with a focal point.
//!
//! One finger anchors at the origin while the other sweeps a quarter turn
//! from (100, 0) to (0, 100). With focal-point reporting enabled, every
//! update carries the pair midpoint alongside scale and rotation.
//!
//! Run:
//! - `cargo run -p pincer_demos --example rotate_and_scale`

use core::time::Duration;

use kurbo::Point;
use pincer_recognizer::fling::ZeroVelocity;
use pincer_recognizer::recognizer::ScaleRecognizer;
use pincer_recognizer::types::{
    DeviceKind, GestureEvent, NoArena, PointerEvent, PointerId, ScaleConfig,
};

fn main() {
    let config = ScaleConfig {
        report_focal_point: true,
        ..ScaleConfig::default()
    };
    let mut recognizer = ScaleRecognizer::with_config(config, ZeroVelocity, NoArena);

    let down = |id, x, y| PointerEvent::Down {
        id: PointerId(id),
        position: Point::new(x, y),
        kind: DeviceKind::Touch,
        timestamp: Duration::ZERO,
    };
    let _ = recognizer.handle_event(down(1, 0.0, 0.0));
    let _ = recognizer.handle_event(down(2, 100.0, 0.0));

    println!("== Quarter turn around a stationary finger ==");
    // Sweep the second finger along the quarter circle of radius 100.
    for step in 1..=6 {
        let theta = core::f64::consts::FRAC_PI_2 * f64::from(step) / 6.0;
        let position = Point::new(100.0 * theta.cos(), 100.0 * theta.sin());
        let events = recognizer.handle_event(PointerEvent::Move {
            id: PointerId(2),
            position,
            timestamp: Duration::ZERO,
            synthetic: false,
        });
        for event in events {
            match event {
                GestureEvent::Started => println!("gesture started"),
                GestureEvent::Updated(u) => println!(
                    "scale {:5.3}  rotation {:+6.1}°  focal {:?}",
                    u.scale,
                    u.rotation.to_degrees(),
                    u.focal_point,
                ),
                GestureEvent::Ended(e) => println!("gesture ended: {:?}", e.velocity),
            }
        }
    }
}
