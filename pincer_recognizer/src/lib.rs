// Copyright 2026 the Pincer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=pincer_recognizer --heading-base-level=0

//! Pincer Recognizer: a deterministic, `no_std` two-finger scale/rotate gesture recognizer.
//!
//! ## Overview
//!
//! This crate turns a raw pointer event stream — down, move, up, cancel — into a
//! continuous scale factor, a signed rotation angle, an optional focal point, and a
//! clamped release velocity for fling handoff.
//! It does not dispatch events or arbitrate between competing recognizers.
//! Instead, feed it the events your dispatch layer routes to it, and forward the
//! [`GestureEvent`](crate::types::GestureEvent)s it returns to your handlers.
//!
//! ## Inputs
//!
//! Deliver one [`PointerEvent`](crate::types::PointerEvent) at a time, in arrival order,
//! pre-filtered to the device kinds the instance supports
//! (see [`ScaleRecognizer::supported_kinds`](crate::recognizer::ScaleRecognizer::supported_kinds)).
//! Coordinates live in a single caller-defined space; timestamps only need a consistent epoch.
//!
//! ## Tracking
//!
//! The first two contacts by arrival order form the *tracked pair*; third and later
//! contacts are bookkept but never participate in the two-finger math.
//! Scale and rotation are recomputed from absolute positions on every qualifying event,
//! so repeated small moves and one large move land on identical values, and no drift
//! accumulates.
//!
//! ## Disambiguation
//!
//! While the gesture is merely *possible*, the pair's displacements from their baselines
//! are compared: travel that opposes in sign on some axis, summing beyond a
//! per-device-kind slop, claims the gesture; same-direction travel (a two-finger pan)
//! never does.
//!
//! ## Arbitration
//!
//! The [`Arena`](crate::types::Arena) trait is the seam to the host's event-dispatch
//! arbitration: every down claims its pointer, and the attempt is resolved accepted or
//! rejected exactly once per outcome reached. Hosts without arbitration use
//! [`NoArena`](crate::types::NoArena).
//!
//! ## Velocity
//!
//! Velocity estimation is an opaque per-contact service behind
//! [`VelocityEstimator`](crate::fling::VelocityEstimator); the `tracker_adapter` feature
//! wires in the sibling `pincer_velocity` crate, and
//! [`ZeroVelocity`](crate::fling::ZeroVelocity) serves hosts that ignore flings.
//!
//! ## Minimal example
//!
//! ```
//! use core::time::Duration;
//! use kurbo::Point;
//! use pincer_recognizer::fling::ZeroVelocity;
//! use pincer_recognizer::recognizer::ScaleRecognizer;
//! use pincer_recognizer::types::{DeviceKind, GestureEvent, NoArena, PointerEvent, PointerId};
//!
//! let mut recognizer = ScaleRecognizer::new(ZeroVelocity, NoArena);
//! let down = |id, x, y| PointerEvent::Down {
//!     id: PointerId(id),
//!     position: Point::new(x, y),
//!     kind: DeviceKind::Touch,
//!     timestamp: Duration::ZERO,
//! };
//! let mv = |id, x, y| PointerEvent::Move {
//!     id: PointerId(id),
//!     position: Point::new(x, y),
//!     timestamp: Duration::ZERO,
//!     synthetic: false,
//! };
//!
//! assert!(recognizer.handle_event(down(1, 0.0, 0.0)).is_empty());
//! assert!(recognizer.handle_event(down(2, 100.0, 0.0)).is_empty());
//!
//! // Spreading the fingers apart claims the gesture, announces the start,
//! // and reports the first scale sample.
//! let events = recognizer.handle_event(mv(1, -100.0, 0.0));
//! assert_eq!(events[0], GestureEvent::Started);
//! let GestureEvent::Updated(update) = events[1] else { unreachable!() };
//! assert_eq!(update.scale, 2.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod fling;
pub mod geometry;
pub mod ledger;
pub mod line;
pub mod recognizer;
pub mod types;
