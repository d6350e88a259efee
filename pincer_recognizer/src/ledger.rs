// Copyright 2026 the Pincer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-attempt pointer bookkeeping.
//!
//! ## Overview
//!
//! One arrival-ordered table holds every live contact's first-contact and
//! current position. Keeping a single table (rather than parallel maps for
//! initial positions, current positions, and arrival order) makes their
//! consistency a structural property: an id is present everywhere or nowhere,
//! and removal is one splice.
//!
//! ## Contract
//!
//! The host's event delivery owns the pointer lifecycle. A down for a live
//! id, or a move/remove for an id that was never added, is a programmer error
//! in that delivery and fails a fatal assertion here — these are not
//! recoverable conditions.

use alloc::vec::Vec;

use kurbo::Point;

use crate::types::{DeviceKind, PointerId};

/// One live contact's bookkeeping.
#[derive(Copy, Clone, Debug)]
pub struct PointerEntry {
    /// The contact's identifier.
    pub id: PointerId,
    /// The contact's device kind, fixed at down.
    pub kind: DeviceKind,
    /// Baseline position: first contact, or the last re-baseline point.
    pub initial: Point,
    /// Most recent known position.
    pub current: Point,
}

impl PointerEntry {
    /// Displacement of the contact from its baseline.
    pub fn travel(&self) -> kurbo::Vec2 {
        self.current - self.initial
    }
}

/// Arrival-ordered bookkeeping for one gesture attempt.
#[derive(Clone, Debug, Default)]
pub struct PointerLedger {
    entries: Vec<PointerEntry>,
}

impl PointerLedger {
    /// Create an empty ledger.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record a new contact at `position`.
    pub fn on_down(&mut self, id: PointerId, kind: DeviceKind, position: Point) {
        assert!(
            !self.contains(id),
            "pointer down for an id that is already live: {id:?}"
        );
        self.entries.push(PointerEntry {
            id,
            kind,
            initial: position,
            current: position,
        });
    }

    /// Update a live contact's current position.
    pub fn on_move(&mut self, id: PointerId, position: Point) {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .expect("pointer move for an id that was never tracked");
        entry.current = position;
    }

    /// Remove a contact. Every remove must follow a prior down.
    pub fn on_remove(&mut self, id: PointerId) {
        let idx = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .expect("pointer removal for an id that was never tracked");
        self.entries.remove(idx);
    }

    /// The first two contacts by arrival order, if at least two are live.
    ///
    /// Ordering is strictly arrival, never spatial; a third or later contact
    /// never displaces the pair while both members remain live.
    pub fn tracked_pair(&self) -> Option<[&PointerEntry; 2]> {
        match self.entries.as_slice() {
            [a, b, ..] => Some([a, b]),
            _ => None,
        }
    }

    /// Whether no contacts are live. The sole signal that resets an attempt.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of live contacts.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether `id` is live.
    pub fn contains(&self, id: PointerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// The entry for `id`, if live.
    pub fn get(&self, id: PointerId) -> Option<&PointerEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Reset every contact's baseline to its current position.
    pub fn rebaseline(&mut self) {
        for entry in &mut self.entries {
            entry.initial = entry.current;
        }
    }

    /// Drop all contacts.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
