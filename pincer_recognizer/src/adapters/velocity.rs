// Copyright 2026 the Pincer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter helpers for Pincer Velocity.
//!
//! ## Feature
//!
//! Enable with `tracker_adapter`.
//!
//! ## Notes
//!
//! These impls wire the sibling crate's ring-buffered tracker into the
//! recognizer's estimator seam, so a host gets real fling velocities without
//! writing an estimator of its own.

use core::time::Duration;

use kurbo::{Point, Vec2};
use pincer_velocity::VelocityTracker;

use crate::fling::{EstimatorProvider, VelocityEstimator};
use crate::types::DeviceKind;

impl VelocityEstimator for VelocityTracker {
    fn add_sample(&mut self, timestamp: Duration, position: Point) {
        // Resolves to the tracker's inherent method, which takes precedence.
        self.add_sample(timestamp, position.x, position.y);
    }

    fn estimate(&self) -> Vec2 {
        let (x, y) = self.velocity();
        Vec2::new(x, y)
    }
}

/// Constructs one [`VelocityTracker`] per contact.
///
/// The tracker's sampling window works for every device kind, so the kind is
/// not consulted.
#[derive(Copy, Clone, Debug, Default)]
pub struct TrackerProvider;

impl EstimatorProvider for TrackerProvider {
    type Estimator = VelocityTracker;

    fn estimator_for(&self, _kind: DeviceKind) -> VelocityTracker {
        VelocityTracker::new()
    }
}
