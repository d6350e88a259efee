// Copyright 2026 the Pincer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=pincer_velocity --heading-base-level=0

//! Pincer Velocity: dependency-free pointer velocity estimation.
//!
//! Pincer Velocity is a reusable building block for fling and momentum handling.
//!
//! - Feed time-stamped pointer positions with [`VelocityTracker::add_sample`].
//! - Read the current estimate in units/second with [`VelocityTracker::velocity`].
//! - Reuse a tracker across gestures with [`VelocityTracker::reset`].
//!
//! The tracker keeps a short ring buffer of samples per axis and fits a
//! recency-weighted least-squares line through the samples inside a 100 ms
//! horizon. Weighting recent samples more strongly tracks the finger's speed
//! at release rather than its average speed over the whole gesture, which is
//! what fling handoff wants.
//!
//! A pointer that rests for a while before release should not fling: when the
//! buffered samples span enough time but almost no travel, the estimate is
//! exactly zero.
//!
//! Timestamps must be non-decreasing; a sample older than the previous one is
//! dropped. The epoch is arbitrary — only differences are used.
//!
//! # Example
//!
//! ```rust
//! use core::time::Duration;
//! use pincer_velocity::VelocityTracker;
//!
//! let mut tracker = VelocityTracker::new();
//! // Move right at 100 px per 10 ms = 10_000 px/s.
//! for i in 0..4u64 {
//!     tracker.add_sample(Duration::from_millis(i * 10), (i * 100) as f64, 0.0);
//! }
//! let (vx, vy) = tracker.velocity();
//! assert!((vx - 10_000.0).abs() < 1_000.0);
//! assert_eq!(vy, 0.0);
//! ```
//!
//! This crate is `no_std` and allocation-free.

#![no_std]

mod tracker;

pub use tracker::VelocityTracker;
