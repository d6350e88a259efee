// Copyright 2026 the Pincer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recognizer basics.
//!
//! This minimal example scripts a two-finger spread, prints the arena traffic
//! and every emitted gesture event, then releases both fingers.
//!
//! Run:
//! - `cargo run -p pincer_demos --example recognizer_basics`

use core::time::Duration;

use kurbo::Point;
use pincer_recognizer::fling::ZeroVelocity;
use pincer_recognizer::recognizer::ScaleRecognizer;
use pincer_recognizer::types::{Arena, DeviceKind, Disposition, PointerEvent, PointerId};

/// An arena stand-in that narrates claims and resolutions.
struct PrintArena;

impl Arena for PrintArena {
    fn claim(&mut self, pointer: PointerId) {
        println!("  arena: claim {pointer:?}");
    }
    fn resolve(&mut self, disposition: Disposition) {
        println!("  arena: resolve {disposition:?}");
    }
}

fn main() {
    let mut recognizer = ScaleRecognizer::new(ZeroVelocity, PrintArena);

    let down = |id, x, y| PointerEvent::Down {
        id: PointerId(id),
        position: Point::new(x, y),
        kind: DeviceKind::Touch,
        timestamp: Duration::ZERO,
    };
    let mv = |id, x, y| PointerEvent::Move {
        id: PointerId(id),
        position: Point::new(x, y),
        timestamp: Duration::ZERO,
        synthetic: false,
    };
    let up = |id| PointerEvent::Up { id: PointerId(id) };

    let script = [
        down(1, 0.0, 0.0),
        down(2, 100.0, 0.0),
        mv(1, -30.0, 0.0), // crosses the slop: claim, start, first update
        mv(2, 150.0, 0.0), // separation 180 over a baseline of 100
        mv(2, 170.0, 0.0),
        up(2), // end of the active gesture
        up(1), // attempt resets
    ];

    println!("== Two-finger spread ==");
    for event in script {
        println!("{event:?}");
        for gesture in recognizer.handle_event(event) {
            println!("  -> {gesture:?}");
        }
    }
    println!("final phase: {:?}", recognizer.phase());
}
