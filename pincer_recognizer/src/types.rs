// Copyright 2026 the Pincer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the recognizer: pointers, events, configuration, and the arena seam.
//!
//! ## Overview
//!
//! These types describe the recognizer protocol and its inputs/outputs.
//! They are referenced by the [`recognizer`](crate::recognizer) and used by downstream hosts.

use core::time::Duration;

use kurbo::{Point, Vec2};

/// Identifier for one physical contact over its lifetime (down → move* → up/cancel).
///
/// Opaque and process-unique; assigned by the host's input source. The
/// recognizer never interprets the value beyond equality.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct PointerId(pub u64);

/// The kind of device a contact originates from.
///
/// Slop thresholds and velocity estimators are selected per kind; see
/// [`Slop::for_kind`] and
/// [`EstimatorProvider::estimator_for`](crate::fling::EstimatorProvider::estimator_for).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum DeviceKind {
    /// A finger on a touch surface.
    Touch,
    /// A stylus contact.
    Stylus,
    /// A mouse (or other precise pointer) drag.
    Mouse,
}

impl DeviceKind {
    /// The flag bit corresponding to this kind.
    pub const fn flag(self) -> DeviceKinds {
        match self {
            Self::Touch => DeviceKinds::TOUCH,
            Self::Stylus => DeviceKinds::STYLUS,
            Self::Mouse => DeviceKinds::MOUSE,
        }
    }
}

bitflags::bitflags! {
    /// The set of device kinds a recognizer instance supports.
    ///
    /// The event stream is expected to arrive pre-filtered to this set; the
    /// recognizer advertises it via
    /// [`ScaleRecognizer::supported_kinds`](crate::recognizer::ScaleRecognizer::supported_kinds)
    /// so the host's dispatch layer knows what to deliver.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct DeviceKinds: u8 {
        /// Accept touch contacts.
        const TOUCH  = 0b0000_0001;
        /// Accept stylus contacts.
        const STYLUS = 0b0000_0010;
        /// Accept mouse drags.
        const MOUSE  = 0b0000_0100;
    }
}

impl Default for DeviceKinds {
    fn default() -> Self {
        Self::TOUCH | Self::STYLUS | Self::MOUSE
    }
}

/// A raw pointer event, delivered one at a time, in arrival order.
///
/// Coordinates are in a single caller-defined space (local to the
/// recognizer's owner); no unit conversion is performed. Timestamps are
/// measured from an arbitrary epoch — only differences are consumed, by
/// velocity estimation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointerEvent {
    /// A new contact.
    Down {
        /// Contact identifier; must not collide with a live contact.
        id: PointerId,
        /// Position at first contact.
        position: Point,
        /// Originating device kind.
        kind: DeviceKind,
        /// Event time.
        timestamp: Duration,
    },
    /// A position change for a live contact.
    Move {
        /// Contact identifier; must be live.
        id: PointerId,
        /// The new position.
        position: Point,
        /// Event time.
        timestamp: Duration,
        /// True for host-synthesized moves (e.g. hover exit repositioning).
        /// Synthetic samples never feed velocity estimation.
        synthetic: bool,
    },
    /// Contact ended normally.
    Up {
        /// Contact identifier; must be live.
        id: PointerId,
    },
    /// Contact ended abnormally (e.g. palm rejection, window loss).
    Cancel {
        /// Contact identifier; must be live.
        id: PointerId,
    },
}

impl PointerEvent {
    /// The contact this event belongs to.
    pub const fn id(&self) -> PointerId {
        match *self {
            Self::Down { id, .. }
            | Self::Move { id, .. }
            | Self::Up { id }
            | Self::Cancel { id } => id,
        }
    }
}

/// Where the gesture lifecycle currently stands.
///
/// Exactly one phase exists per recognizer instance at a time; it returns to
/// [`Ready`](Self::Ready) whenever the set of tracked pointers becomes empty.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AttemptPhase {
    /// No pointers tracked.
    Ready,
    /// One or more pointers down, gesture not yet claimed in the arena.
    Possible,
    /// Arena resolved in our favor, start not yet announced.
    Accepted,
    /// The start event has fired; updates flow.
    Started,
}

/// A recognized-gesture output, in firing order.
///
/// Produced by
/// [`ScaleRecognizer::handle_event`](crate::recognizer::ScaleRecognizer::handle_event).
/// The host forwards each to its registered handler, if any; an event with no
/// handler is simply dropped.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GestureEvent {
    /// The gesture became active. Fires before the first [`Updated`](Self::Updated).
    Started,
    /// Fresh scale/rotation (and optionally focal point) values.
    Updated(ScaleUpdate),
    /// The active gesture ended; carries the release velocity.
    Ended(ScaleEnd),
}

/// Payload of [`GestureEvent::Updated`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScaleUpdate {
    /// Ratio of the tracked pair's current separation to its baseline
    /// separation. Always finite and ≥ 0; exactly `1.0` at (re)baseline.
    pub scale: f64,
    /// Signed rotation in radians relative to the pair's baseline
    /// orientation. Unnormalized: a long gesture may exceed ±π.
    pub rotation: f64,
    /// Midpoint of the tracked pair, when the recognizer is configured to
    /// report it (see [`ScaleConfig::report_focal_point`]).
    pub focal_point: Option<Point>,
}

/// Payload of [`GestureEvent::Ended`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScaleEnd {
    /// Release velocity in units/second; the zero vector when the release
    /// did not qualify as a fling.
    pub velocity: Vec2,
}

/// How the recognizer resolves its claim in the arena.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Disposition {
    /// The gesture is definitively ours.
    Accepted,
    /// We withdraw; competing recognizers may win.
    Rejected,
}

/// The seam to the host's event-dispatch arbitration.
///
/// The recognizer claims every pointer it starts tracking and resolves the
/// attempt exactly once per outcome it reaches. Implementations must treat a
/// resolution of an already-resolved attempt as a no-op (the usual arena
/// contract), and must not panic across this boundary: outcomes flow purely
/// through these calls.
pub trait Arena {
    /// Register interest in a pointer sequence. Called once per pointer down.
    fn claim(&mut self, pointer: PointerId);
    /// Report the attempt's outcome.
    fn resolve(&mut self, disposition: Disposition);
}

/// A no-op arena for hosts without arbitration (single-recognizer setups,
/// tests, demos).
#[derive(Copy, Clone, Debug, Default)]
pub struct NoArena;

impl Arena for NoArena {
    #[inline]
    fn claim(&mut self, _pointer: PointerId) {}
    #[inline]
    fn resolve(&mut self, _disposition: Disposition) {}
}

/// Which positions displacement-derived state measures from.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ReferencePoint {
    /// Measure from each pointer's first-contact position.
    InitialContact,
    /// Re-baseline to the positions held at the instant the attempt is
    /// accepted, so scale (and any later displacement math) measures from
    /// gesture start rather than first contact.
    GestureStart,
}

/// Per-device-kind disambiguation thresholds, in position units.
///
/// The threshold below which ambiguous two-finger motion is not yet claimed
/// as a scale gesture. Precise pointers travel far less before intent is
/// clear, hence the much smaller mouse value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Slop {
    /// Threshold for touch contacts.
    pub touch: f64,
    /// Threshold for stylus contacts.
    pub stylus: f64,
    /// Threshold for mouse drags.
    pub mouse: f64,
}

impl Slop {
    /// The threshold for a given device kind.
    pub const fn for_kind(&self, kind: DeviceKind) -> f64 {
        match kind {
            DeviceKind::Touch => self.touch,
            DeviceKind::Stylus => self.stylus,
            DeviceKind::Mouse => self.mouse,
        }
    }
}

impl Default for Slop {
    fn default() -> Self {
        Self {
            touch: 18.0,
            stylus: 18.0,
            mouse: 1.0,
        }
    }
}

/// Recognizer configuration, fixed for the lifetime of an instance.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScaleConfig {
    /// Device kinds this instance supports; the host filters the stream.
    pub kinds: DeviceKinds,
    /// Disambiguation thresholds.
    pub slop: Slop,
    /// Release speeds below this (units/second) are not flings; the end
    /// event then carries the zero vector.
    pub min_fling_speed: f64,
    /// Fling speeds are clamped down to this magnitude, direction preserved.
    pub max_fling_speed: f64,
    /// Baseline policy for displacement-derived state.
    pub reference: ReferencePoint,
    /// When set, every update carries the tracked pair's midpoint.
    pub report_focal_point: bool,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            kinds: DeviceKinds::default(),
            slop: Slop::default(),
            min_fling_speed: 50.0,
            max_fling_speed: 8000.0,
            reference: ReferencePoint::InitialContact,
            report_focal_point: false,
        }
    }
}
