// Copyright 2026 the Pincer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Release-velocity extraction.
//!
//! ## Overview
//!
//! Velocity estimation itself is an opaque service behind
//! [`VelocityEstimator`]; this module owns one estimator per live contact,
//! feeds it real move samples, and converts a raw estimate into either a
//! clamped fling velocity or "no fling" at release time. The
//! `tracker_adapter` feature wires [`pincer_velocity`] into the seam (see
//! [`adapters`](crate::adapters)).

use alloc::vec::Vec;
use core::time::Duration;

use kurbo::{Point, Vec2};

use crate::geometry::clamp_magnitude;
use crate::types::{DeviceKind, PointerId};

/// A per-contact velocity estimation service.
///
/// One instance observes one contact. It receives every real (non-synthetic)
/// move sample and produces a velocity estimate in units/second on demand.
pub trait VelocityEstimator {
    /// Record a time-stamped position sample.
    fn add_sample(&mut self, timestamp: Duration, position: Point);
    /// The current velocity estimate in units/second.
    fn estimate(&self) -> Vec2;
}

/// Constructs estimators, one per contact, selected by device kind.
pub trait EstimatorProvider {
    /// The estimator type this provider constructs.
    type Estimator: VelocityEstimator;
    /// A fresh estimator for a contact of the given kind.
    fn estimator_for(&self, kind: DeviceKind) -> Self::Estimator;
}

/// A no-op estimator for hosts that do not care about flings (and for tests).
///
/// Always estimates zero velocity, so every release reads as "no fling."
#[derive(Copy, Clone, Debug, Default)]
pub struct ZeroVelocity;

impl VelocityEstimator for ZeroVelocity {
    #[inline]
    fn add_sample(&mut self, _timestamp: Duration, _position: Point) {}
    #[inline]
    fn estimate(&self) -> Vec2 {
        Vec2::ZERO
    }
}

impl EstimatorProvider for ZeroVelocity {
    type Estimator = Self;
    fn estimator_for(&self, _kind: DeviceKind) -> Self {
        Self
    }
}

/// Owns the per-contact estimators and performs release classification.
///
/// Estimators live exactly as long as their contact: tracked at down,
/// discarded at removal (consumed by [`extract`](Self::extract) when the
/// gesture was active), and dropped wholesale when the attempt resets or the
/// extractor itself is dropped.
#[derive(Clone, Debug)]
pub struct FlingExtractor<E> {
    estimators: Vec<(PointerId, E)>,
}

impl<E: VelocityEstimator> Default for FlingExtractor<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: VelocityEstimator> FlingExtractor<E> {
    /// Create an extractor with no tracked contacts.
    pub const fn new() -> Self {
        Self {
            estimators: Vec::new(),
        }
    }

    /// Begin tracking a contact with a freshly constructed estimator.
    pub fn track(&mut self, id: PointerId, estimator: E) {
        assert!(
            !self.estimators.iter().any(|(e, _)| *e == id),
            "estimator already tracked for {id:?}"
        );
        self.estimators.push((id, estimator));
    }

    /// Feed a real move sample to the contact's estimator.
    ///
    /// Samples for unknown contacts are dropped; callers stop feeding a
    /// pointer once it has been relinquished.
    pub fn feed(&mut self, id: PointerId, timestamp: Duration, position: Point) {
        if let Some((_, estimator)) = self.estimators.iter_mut().find(|(e, _)| *e == id) {
            estimator.add_sample(timestamp, position);
        }
    }

    /// Consume the contact's estimator and classify its release.
    ///
    /// Returns the zero vector when the estimated speed does not exceed
    /// `min_speed`; otherwise the estimate, clamped down to `max_speed`
    /// magnitude with direction preserved. Invoked exactly once per
    /// terminated gesture, for the contact lifted while the gesture was
    /// active.
    pub fn extract(&mut self, id: PointerId, min_speed: f64, max_speed: f64) -> Vec2 {
        let idx = self
            .estimators
            .iter()
            .position(|(e, _)| *e == id)
            .expect("fling extraction for an untracked pointer");
        let (_, estimator) = self.estimators.swap_remove(idx);
        let velocity = estimator.estimate();
        if velocity.hypot() > min_speed {
            clamp_magnitude(velocity, max_speed)
        } else {
            Vec2::ZERO
        }
    }

    /// Drop a contact's estimator without reading it.
    pub fn discard(&mut self, id: PointerId) {
        self.estimators.retain(|(e, _)| *e != id);
    }

    /// Drop every estimator (attempt reset / recognizer retirement).
    pub fn clear(&mut self) {
        self.estimators.clear();
    }

    /// Number of tracked contacts.
    pub fn len(&self) -> usize {
        self.estimators.len()
    }

    /// Whether no contacts are tracked.
    pub fn is_empty(&self) -> bool {
        self.estimators.is_empty()
    }
}
