// Copyright 2026 the Pincer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters to integrate with other Pincer crates.
//!
//! Enabled via feature flags to keep the core small and `no_std` by default.

#[cfg(feature = "tracker_adapter")]
pub mod velocity;
