// Copyright 2026 the Pincer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reference-line tracking between the two tracked pointers.
//!
//! ## Overview
//!
//! Two snapshots of the segment between the tracked pair: the *initial* line,
//! frozen when the pair is (re)established, and the *current* line, refreshed
//! on every update. Rotation is the angle of the current line relative to the
//! initial line; scale is the ratio of their lengths. Freezing the initial
//! line is what lets rotation be measured against the pair's original
//! orientation even as both contacts drift, while the identity check below
//! self-corrects when the pair itself changes.

use kurbo::Point;

use crate::geometry::segment_angle;
use crate::ledger::PointerEntry;
use crate::types::PointerId;

/// A snapshot of the segment between the two tracked pointers.
///
/// `a` is the first-tracked contact, `b` the second; the two ids are always
/// distinct.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LineBetween {
    /// Id of the first-tracked endpoint.
    pub a_id: PointerId,
    /// Id of the second-tracked endpoint.
    pub b_id: PointerId,
    /// Position of the first-tracked endpoint.
    pub a: Point,
    /// Position of the second-tracked endpoint.
    pub b: Point,
}

impl LineBetween {
    fn of(pair: [&PointerEntry; 2]) -> Self {
        Self {
            a_id: pair[0].id,
            b_id: pair[1].id,
            a: pair[0].current,
            b: pair[1].current,
        }
    }

    /// Angle of the segment from the first-tracked endpoint to the second.
    fn angle(&self) -> f64 {
        segment_angle(self.a, self.b)
    }

    fn length(&self) -> f64 {
        self.a.distance(self.b)
    }
}

/// The initial/current line pair for one gesture attempt.
#[derive(Clone, Debug, Default)]
pub struct ReferenceLines {
    initial: Option<LineBetween>,
    current: Option<LineBetween>,
}

impl ReferenceLines {
    /// Create an empty tracker (no lines yet).
    pub const fn new() -> Self {
        Self {
            initial: None,
            current: None,
        }
    }

    /// Refresh the lines from the tracked pair's current positions.
    ///
    /// When no initial line exists yet, or the pair's identity — the ordered
    /// `(a_id, b_id)` tuple — differs from the initial line's, both lines are
    /// re-baselined to the pair's current positions. (The ordered-tuple rule
    /// means the same two ids with swapped arrival roles also re-baseline.)
    /// Otherwise only the current line is recomputed; the initial line stays
    /// frozen.
    pub fn update(&mut self, pair: [&PointerEntry; 2]) {
        let line = LineBetween::of(pair);
        let rebaseline = match &self.initial {
            None => true,
            Some(initial) => initial.a_id != line.a_id || initial.b_id != line.b_id,
        };
        if rebaseline {
            self.initial = Some(line);
        }
        self.current = Some(line);
    }

    /// Signed rotation in radians of the current line relative to the
    /// initial line, or `0.0` when no line exists yet.
    ///
    /// The value is a raw difference of `atan2` angles: unnormalized, so no
    /// wrap-around correction is applied across a long gesture.
    pub fn rotation(&self) -> f64 {
        match (&self.initial, &self.current) {
            (Some(initial), Some(current)) => current.angle() - initial.angle(),
            _ => 0.0,
        }
    }

    /// Ratio of the current line's length to the initial line's, or `1.0`
    /// when no line exists yet.
    ///
    /// A degenerate same-point start (initial length exactly zero) also
    /// yields `1.0` — the ratio is total and never infinite or NaN.
    pub fn scale(&self) -> f64 {
        let (Some(initial), Some(current)) = (&self.initial, &self.current) else {
            return 1.0;
        };
        let baseline = initial.length();
        if baseline == 0.0 {
            1.0
        } else {
            current.length() / baseline
        }
    }

    /// The frozen baseline line, if any.
    pub fn initial(&self) -> Option<&LineBetween> {
        self.initial.as_ref()
    }

    /// Drop both lines (attempt reset).
    pub fn clear(&mut self) {
        self.initial = None;
        self.current = None;
    }
}
