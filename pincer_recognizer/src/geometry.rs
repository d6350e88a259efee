// Copyright 2026 the Pincer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small pure helpers over kurbo types. No state.

use kurbo::{Point, Vec2};

/// Angle in radians of the segment from `from` to `to`, measured with
/// `atan2` in the caller's coordinate space.
pub fn segment_angle(from: Point, to: Point) -> f64 {
    (to - from).atan2()
}

/// Displacement vector from `from` to `to`.
pub fn displacement(from: Point, to: Point) -> Vec2 {
    to - from
}

/// Rescale `v` down to magnitude `max` when it is longer, preserving
/// direction. Shorter vectors (and the zero vector) pass through unchanged.
pub fn clamp_magnitude(v: Vec2, max: f64) -> Vec2 {
    let magnitude = v.hypot();
    if magnitude <= max || magnitude == 0.0 {
        v
    } else {
        v * (max / magnitude)
    }
}
