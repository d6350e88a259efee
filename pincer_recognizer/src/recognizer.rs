// Copyright 2026 the Pincer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gesture state machine.
//!
//! ## Overview
//!
//! Consumes pointer events one at a time, keeps the ledger and reference
//! lines in sync, evaluates the disambiguation threshold, and emits
//! started/updated/ended events.
//!
//! ## Lifecycle
//!
//! - `ready` → `possible` on the first down of an attempt.
//! - `possible` → `accepted` when the tracked pair's displacements oppose in
//!   sign on some axis and their magnitudes together exceed the slop; the
//!   attempt is then resolved `Accepted` in the arena. Lifting every pointer
//!   first resolves `Rejected` instead.
//! - `accepted` → `started` on the next move, or down that added a pointer,
//!   while a tracked pair exists.
//! - `started`: every such event recomputes scale and rotation from absolute
//!   positions and emits an update. Removing any pointer extracts its release
//!   velocity, emits the end event, and steps back to `accepted`; the gesture
//!   re-arms once two pointers are active again.
//! - The attempt resets to `ready` the moment the last tracked pointer is
//!   gone.
//!
//! ## Arbitration
//!
//! Every down claims its pointer through the [`Arena`] seam; the attempt is
//! resolved at most once per outcome reached. Losing the arena
//! ([`ScaleRecognizer::on_arena_rejected`]) silently stops tracking the
//! pointer — no events are emitted for it afterwards.
//!
//! ## See Also
//!
//! [`ledger`](crate::ledger) and [`line`](crate::line) for the bookkeeping
//! this machine drives, [`fling`](crate::fling) for release classification.

use alloc::vec::Vec;

use crate::fling::{EstimatorProvider, FlingExtractor};
use crate::ledger::PointerLedger;
use crate::line::ReferenceLines;
use crate::types::{
    Arena, AttemptPhase, DeviceKinds, Disposition, GestureEvent, PointerEvent, PointerId,
    ReferencePoint, ScaleConfig, ScaleEnd, ScaleUpdate,
};

/// How an event can advance the machine after bookkeeping.
#[derive(Copy, Clone, Eq, PartialEq)]
enum EventClass {
    /// A down that added a pointer.
    Down,
    /// A move (real or synthetic).
    Move,
    /// An up or cancel that removed a pointer.
    Removal,
}

/// A two-finger scale/rotate gesture recognizer.
///
/// ## Usage
///
/// - Construct with [`ScaleRecognizer::new`] for the default configuration,
///   or [`ScaleRecognizer::with_config`] to tune slop, fling thresholds, the
///   baseline policy, and focal-point reporting.
/// - Feed every pointer event for the supported device kinds to
///   [`ScaleRecognizer::handle_event`]; dispatch the returned gesture events
///   to your handlers.
/// - Forward arena losses to [`ScaleRecognizer::on_arena_rejected`].
/// - Call [`ScaleRecognizer::reset`] when retiring the instance early; all
///   per-pointer estimators are released either way when it is dropped.
///
/// One instance is exclusively owned by one input-dispatch slot and is not
/// designed for concurrent use. Processing is synchronous and never blocks;
/// because outputs are returned rather than called back, no host code runs
/// inside the recognizer and re-entry cannot occur.
pub struct ScaleRecognizer<P: EstimatorProvider, A: Arena> {
    config: ScaleConfig,
    provider: P,
    arena: A,
    phase: AttemptPhase,
    ledger: PointerLedger,
    lines: ReferenceLines,
    fling: FlingExtractor<P::Estimator>,
    // Pointers dropped on arena loss. Their already-in-flight events must be
    // ignored, not treated as contract violations; entries retire when the
    // matching up/cancel arrives.
    relinquished: Vec<PointerId>,
}

impl<P: EstimatorProvider, A: Arena> core::fmt::Debug for ScaleRecognizer<P, A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScaleRecognizer")
            .field("phase", &self.phase)
            .field("tracked", &self.ledger.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<P: EstimatorProvider, A: Arena> ScaleRecognizer<P, A> {
    /// Create a recognizer with the default configuration.
    pub fn new(provider: P, arena: A) -> Self {
        Self::with_config(ScaleConfig::default(), provider, arena)
    }

    /// Create a recognizer with an explicit configuration.
    pub fn with_config(config: ScaleConfig, provider: P, arena: A) -> Self {
        Self {
            config,
            provider,
            arena,
            phase: AttemptPhase::Ready,
            ledger: PointerLedger::new(),
            lines: ReferenceLines::new(),
            fling: FlingExtractor::new(),
            relinquished: Vec::new(),
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &ScaleConfig {
        &self.config
    }

    /// Where the gesture lifecycle currently stands.
    pub fn phase(&self) -> AttemptPhase {
        self.phase
    }

    /// The device kinds this instance supports; the host's dispatch layer
    /// filters the event stream to this set.
    pub fn supported_kinds(&self) -> DeviceKinds {
        self.config.kinds
    }

    /// The arbitration seam this recognizer drives.
    pub fn arena(&self) -> &A {
        &self.arena
    }

    /// Process one pointer event and return the gesture events it produced,
    /// in firing order.
    ///
    /// Down events implicitly claim their pointer in the arena. Up/cancel
    /// for an id that was never tracked (and was not relinquished on an
    /// arena loss) is a host contract violation and fails a fatal assertion;
    /// so is a duplicate down for a live id.
    pub fn handle_event(&mut self, event: PointerEvent) -> Vec<GestureEvent> {
        let mut out = Vec::new();
        match event {
            PointerEvent::Down {
                id,
                position,
                kind,
                ..
            } => {
                debug_assert!(
                    self.config.kinds.contains(kind.flag()),
                    "event for an unsupported device kind reached the recognizer"
                );
                self.arena.claim(id);
                if self.phase == AttemptPhase::Ready {
                    self.phase = AttemptPhase::Possible;
                }
                self.ledger.on_down(id, kind, position);
                self.fling.track(id, self.provider.estimator_for(kind));
                self.advance(EventClass::Down, &mut out);
            }
            PointerEvent::Move {
                id,
                position,
                timestamp,
                synthetic,
            } => {
                if self.relinquished.contains(&id) {
                    return out;
                }
                if !synthetic {
                    self.fling.feed(id, timestamp, position);
                }
                self.ledger.on_move(id, position);
                self.advance(EventClass::Move, &mut out);
            }
            PointerEvent::Up { id } | PointerEvent::Cancel { id } => {
                self.remove_pointer(id, &mut out);
            }
        }
        out
    }

    /// The arena awarded this pointer's sequence elsewhere: stop tracking it.
    ///
    /// No events are emitted. Later events for the pointer are ignored. When
    /// this empties the attempt, the machine resets to `ready`.
    pub fn on_arena_rejected(&mut self, id: PointerId) {
        if !self.ledger.contains(id) {
            return;
        }
        self.fling.discard(id);
        self.ledger.on_remove(id);
        self.relinquished.push(id);
        if self.ledger.is_empty() {
            self.last_pointer_gone();
        }
    }

    /// Tear down all per-attempt state, releasing every velocity estimator.
    pub fn reset(&mut self) {
        self.reset_attempt();
        self.relinquished.clear();
    }

    fn remove_pointer(&mut self, id: PointerId, out: &mut Vec<GestureEvent>) {
        if let Some(i) = self.relinquished.iter().position(|&r| r == id) {
            self.relinquished.swap_remove(i);
            return;
        }
        if self.phase == AttemptPhase::Started {
            let velocity =
                self.fling
                    .extract(id, self.config.min_fling_speed, self.config.max_fling_speed);
            out.push(GestureEvent::Ended(ScaleEnd { velocity }));
            self.phase = AttemptPhase::Accepted;
        } else {
            self.fling.discard(id);
        }
        self.ledger.on_remove(id);
        if self.ledger.is_empty() {
            self.last_pointer_gone();
        } else {
            self.advance(EventClass::Removal, out);
        }
    }

    /// Run the state machine after the ledger changed.
    fn advance(&mut self, class: EventClass, out: &mut Vec<GestureEvent>) {
        if let Some(pair) = self.ledger.tracked_pair() {
            self.lines.update(pair);
        }

        if self.phase == AttemptPhase::Possible && self.pair_diverges() {
            self.arena.resolve(Disposition::Accepted);
            self.phase = AttemptPhase::Accepted;
            if self.config.reference == ReferencePoint::GestureStart {
                // Displacement-derived state restarts from the acceptance
                // positions under this policy.
                self.ledger.rebaseline();
                self.lines.clear();
                if let Some(pair) = self.ledger.tracked_pair() {
                    self.lines.update(pair);
                }
            }
        }

        // Up/cancel never starts or updates; it only checked for gesture end
        // above. Starting additionally requires a live tracked pair, which
        // gates re-arming after an end until a second pointer returns.
        let qualifying = matches!(class, EventClass::Down | EventClass::Move);
        if qualifying && self.ledger.tracked_pair().is_some() {
            if self.phase == AttemptPhase::Accepted {
                self.phase = AttemptPhase::Started;
                out.push(GestureEvent::Started);
            }
            if self.phase == AttemptPhase::Started {
                out.push(GestureEvent::Updated(self.current_update()));
            }
        }
    }

    /// Whether the tracked pair's travel crosses the disambiguation slop.
    ///
    /// Per axis: the two displacements oppose in sign (or one side is at
    /// rest — pinching around a stationary finger counts) and their
    /// magnitudes sum beyond the slop. Same-direction travel, a two-finger
    /// pan, never claims.
    fn pair_diverges(&self) -> bool {
        let Some([a, b]) = self.ledger.tracked_pair() else {
            return false;
        };
        let slop = self
            .config
            .slop
            .for_kind(a.kind)
            .max(self.config.slop.for_kind(b.kind));
        let (da, db) = (a.travel(), b.travel());
        let opposed_beyond = |u: f64, v: f64| u * v <= 0.0 && u.abs() + v.abs() > slop;
        opposed_beyond(da.x, db.x) || opposed_beyond(da.y, db.y)
    }

    /// Fresh scale/rotation (and optional focal point), recomputed from
    /// absolute positions — never accumulated from deltas.
    fn current_update(&self) -> ScaleUpdate {
        let focal_point = if self.config.report_focal_point {
            self.ledger
                .tracked_pair()
                .map(|[a, b]| a.current.midpoint(b.current))
        } else {
            None
        };
        ScaleUpdate {
            scale: self.lines.scale(),
            rotation: self.lines.rotation(),
            focal_point,
        }
    }

    fn last_pointer_gone(&mut self) {
        assert!(
            matches!(self.phase, AttemptPhase::Possible | AttemptPhase::Accepted),
            "last pointer vanished while {:?}: the host violated the pointer-lifecycle contract",
            self.phase
        );
        if self.phase == AttemptPhase::Possible {
            self.arena.resolve(Disposition::Rejected);
        }
        self.reset_attempt();
    }

    fn reset_attempt(&mut self) {
        self.phase = AttemptPhase::Ready;
        self.ledger.clear();
        self.lines.clear();
        self.fling.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fling::{VelocityEstimator, ZeroVelocity};
    use crate::types::DeviceKind;
    use alloc::vec;
    use core::f64::consts::FRAC_PI_2;
    use core::time::Duration;
    use kurbo::{Point, Vec2};

    /// Records arena traffic for inspection.
    #[derive(Default)]
    struct RecordingArena {
        claims: Vec<PointerId>,
        resolutions: Vec<Disposition>,
    }

    impl Arena for RecordingArena {
        fn claim(&mut self, pointer: PointerId) {
            self.claims.push(pointer);
        }
        fn resolve(&mut self, disposition: Disposition) {
            self.resolutions.push(disposition);
        }
    }

    /// Estimates a fixed velocity regardless of samples.
    #[derive(Copy, Clone)]
    struct Constant(Vec2);

    impl VelocityEstimator for Constant {
        fn add_sample(&mut self, _timestamp: Duration, _position: Point) {}
        fn estimate(&self) -> Vec2 {
            self.0
        }
    }

    impl EstimatorProvider for Constant {
        type Estimator = Self;
        fn estimator_for(&self, _kind: DeviceKind) -> Self {
            *self
        }
    }

    /// Estimates 1000 units/s per sample received, along x.
    #[derive(Copy, Clone, Default)]
    struct Counting(u32);

    impl VelocityEstimator for Counting {
        fn add_sample(&mut self, _timestamp: Duration, _position: Point) {
            self.0 += 1;
        }
        fn estimate(&self) -> Vec2 {
            Vec2::new(f64::from(self.0) * 1_000.0, 0.0)
        }
    }

    impl EstimatorProvider for Counting {
        type Estimator = Self;
        fn estimator_for(&self, _kind: DeviceKind) -> Self {
            Self(0)
        }
    }

    fn down(id: u64, x: f64, y: f64) -> PointerEvent {
        PointerEvent::Down {
            id: PointerId(id),
            position: Point::new(x, y),
            kind: DeviceKind::Touch,
            timestamp: Duration::ZERO,
        }
    }

    fn mv(id: u64, x: f64, y: f64) -> PointerEvent {
        PointerEvent::Move {
            id: PointerId(id),
            position: Point::new(x, y),
            timestamp: Duration::ZERO,
            synthetic: false,
        }
    }

    fn synthetic_mv(id: u64, x: f64, y: f64) -> PointerEvent {
        PointerEvent::Move {
            id: PointerId(id),
            position: Point::new(x, y),
            timestamp: Duration::ZERO,
            synthetic: true,
        }
    }

    fn up(id: u64) -> PointerEvent {
        PointerEvent::Up { id: PointerId(id) }
    }

    fn recognizer() -> ScaleRecognizer<ZeroVelocity, RecordingArena> {
        ScaleRecognizer::new(ZeroVelocity, RecordingArena::default())
    }

    /// Two touches at (0,0) and (100,0), then a claim-crossing move of the
    /// first to (-50,0). Returns the events of that move.
    fn start_pinch<P: EstimatorProvider, A: Arena>(
        r: &mut ScaleRecognizer<P, A>,
    ) -> Vec<GestureEvent> {
        assert!(r.handle_event(down(1, 0.0, 0.0)).is_empty());
        assert!(r.handle_event(down(2, 100.0, 0.0)).is_empty());
        r.handle_event(mv(1, -50.0, 0.0))
    }

    fn updates(events: &[GestureEvent]) -> Vec<ScaleUpdate> {
        events
            .iter()
            .filter_map(|e| match e {
                GestureEvent::Updated(u) => Some(*u),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn single_finger_never_claims() {
        let mut r = recognizer();
        assert!(r.handle_event(down(1, 0.0, 0.0)).is_empty());
        assert!(r.handle_event(mv(1, 500.0, 500.0)).is_empty());
        assert_eq!(r.phase(), AttemptPhase::Possible);
        assert!(r.arena().resolutions.is_empty());
    }

    #[test]
    fn single_pointer_down_up_rejects() {
        let mut r = recognizer();
        assert!(r.handle_event(down(1, 0.0, 0.0)).is_empty());
        assert!(r.handle_event(up(1)).is_empty());
        assert_eq!(r.phase(), AttemptPhase::Ready);
        assert_eq!(r.arena().claims, vec![PointerId(1)]);
        assert_eq!(r.arena().resolutions, vec![Disposition::Rejected]);
    }

    #[test]
    fn two_finger_pan_stays_possible() {
        let mut r = recognizer();
        let _ = r.handle_event(down(1, 0.0, 0.0));
        let _ = r.handle_event(down(2, 100.0, 0.0));
        // Both fingers travel the same direction, far beyond the slop once
        // underway. Only the leading edge of the pan is slop-limited, as in
        // a real interleaved stream.
        let _ = r.handle_event(mv(1, 15.0, 0.0));
        let _ = r.handle_event(mv(2, 115.0, 0.0));
        let _ = r.handle_event(mv(1, 200.0, 0.0));
        let _ = r.handle_event(mv(2, 300.0, 0.0));
        assert_eq!(r.phase(), AttemptPhase::Possible);
        assert!(r.arena().resolutions.is_empty());
    }

    #[test]
    fn pinch_claims_starts_then_updates() {
        let mut r = recognizer();
        let events = start_pinch(&mut r);
        // Start is announced before the first update of the same event.
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], GestureEvent::Started);
        let first = updates(&events)[0];
        assert_eq!(first.scale, 1.5);
        assert_eq!(first.rotation, 0.0);
        assert_eq!(first.focal_point, None);
        assert_eq!(r.arena().resolutions, vec![Disposition::Accepted]);

        // Collinear stretch to separation 200 over a baseline of 100.
        let events = r.handle_event(mv(2, 150.0, 0.0));
        let u = updates(&events)[0];
        assert_eq!(u.scale, 2.0);
        assert_eq!(u.rotation, 0.0);
        assert_eq!(r.phase(), AttemptPhase::Started);
    }

    #[test]
    fn quarter_turn_reports_half_pi() {
        let mut r = recognizer();
        let _ = r.handle_event(down(1, 0.0, 0.0));
        let _ = r.handle_event(down(2, 100.0, 0.0));
        let events = r.handle_event(mv(2, 0.0, 100.0));
        let u = updates(&events)[0];
        assert!((u.rotation - FRAC_PI_2).abs() < 1e-12, "rotation {}", u.rotation);
        assert!((u.scale - 1.0).abs() < 1e-12, "scale {}", u.scale);
    }

    #[test]
    fn one_big_move_equals_many_small_moves() {
        let mut big = recognizer();
        let mut small = recognizer();
        let _ = start_pinch(&mut big);
        let _ = start_pinch(&mut small);

        let coarse = updates(&big.handle_event(mv(2, 150.0, 40.0)));
        let mut fine = Vec::new();
        for (x, y) in [(120.0, 10.0), (133.0, 31.0), (150.0, 40.0)] {
            fine = updates(&small.handle_event(mv(2, x, y)));
        }
        assert_eq!(coarse[0].scale, fine[0].scale);
        assert_eq!(coarse[0].rotation, fine[0].rotation);
    }

    #[test]
    fn focal_point_is_pair_midpoint_when_configured() {
        let config = ScaleConfig {
            report_focal_point: true,
            ..ScaleConfig::default()
        };
        let mut r = ScaleRecognizer::with_config(config, ZeroVelocity, RecordingArena::default());
        let events = start_pinch(&mut r);
        let u = updates(&events)[0];
        assert_eq!(u.focal_point, Some(Point::new(25.0, 0.0)));
    }

    #[test]
    fn overspeed_release_is_clamped() {
        let mut r = ScaleRecognizer::new(
            Constant(Vec2::new(5_000.0, 0.0)),
            RecordingArena::default(),
        );
        let _ = start_pinch(&mut r);
        let events = r.handle_event(up(2));
        assert_eq!(
            events,
            vec![GestureEvent::Ended(ScaleEnd {
                velocity: Vec2::new(4_000.0, 0.0)
            })]
        );
        assert_eq!(r.phase(), AttemptPhase::Accepted);
    }

    #[test]
    fn slow_release_reports_zero_velocity() {
        let mut r = ScaleRecognizer::new(
            Constant(Vec2::new(10.0, 10.0)),
            RecordingArena::default(),
        );
        let _ = start_pinch(&mut r);
        let events = r.handle_event(up(1));
        assert_eq!(
            events,
            vec![GestureEvent::Ended(ScaleEnd {
                velocity: Vec2::ZERO
            })]
        );
    }

    #[test]
    fn synthetic_moves_never_feed_velocity() {
        let mut r = ScaleRecognizer::new(Counting::default(), RecordingArena::default());
        let _ = start_pinch(&mut r); // one real sample for pointer 1
        let _ = r.handle_event(mv(1, -60.0, 0.0)); // second real sample
        let _ = r.handle_event(synthetic_mv(1, -70.0, 0.0)); // must not count
        let events = r.handle_event(up(1));
        assert_eq!(
            events,
            vec![GestureEvent::Ended(ScaleEnd {
                velocity: Vec2::new(2_000.0, 0.0)
            })]
        );
    }

    #[test]
    fn full_release_after_end_resets_silently() {
        let mut r = recognizer();
        let _ = start_pinch(&mut r);
        let _ = r.handle_event(up(2));
        let events = r.handle_event(up(1));
        // End already fired when the gesture left `started`.
        assert!(events.is_empty());
        assert_eq!(r.phase(), AttemptPhase::Ready);
        assert_eq!(r.arena().resolutions, vec![Disposition::Accepted]);
    }

    #[test]
    fn rearm_requires_second_pointer_and_rebaselines() {
        let mut r = recognizer();
        let _ = start_pinch(&mut r);
        let _ = r.handle_event(up(2));
        assert_eq!(r.phase(), AttemptPhase::Accepted);

        // A lone survivor moving does not restart the gesture.
        assert!(r.handle_event(mv(1, 10.0, 10.0)).is_empty());
        assert_eq!(r.phase(), AttemptPhase::Accepted);

        // A returning second pointer re-arms on its own down, with a fresh
        // baseline: identity transform again.
        let events = r.handle_event(down(3, 80.0, 10.0));
        assert_eq!(events[0], GestureEvent::Started);
        let u = updates(&events)[0];
        assert_eq!(u.scale, 1.0);
        assert_eq!(u.rotation, 0.0);
    }

    #[test]
    fn third_pointer_is_a_bystander() {
        let mut r = recognizer();
        let _ = start_pinch(&mut r);
        let baseline = updates(&r.handle_event(mv(2, 150.0, 0.0)))[0];
        assert_eq!(baseline.scale, 2.0);

        // A third contact joins and roams; the pair's values are untouched.
        let joined = updates(&r.handle_event(down(3, 500.0, 500.0)));
        assert_eq!(joined[0].scale, 2.0);
        let roamed = updates(&r.handle_event(mv(3, -500.0, 0.0)));
        assert_eq!(roamed[0].scale, 2.0);
        assert_eq!(roamed[0].rotation, 0.0);

        // Its departure ends the active phase but leaves the pair's baseline
        // alone: the next qualifying event resumes with identical values.
        let _ = r.handle_event(up(3));
        let resumed = r.handle_event(mv(1, -50.0, 0.0));
        assert_eq!(resumed[0], GestureEvent::Started);
        let u = updates(&resumed)[0];
        assert_eq!(u.scale, 2.0);
        assert_eq!(u.rotation, 0.0);
    }

    #[test]
    fn gesture_start_reference_rebaselines_at_acceptance() {
        let config = ScaleConfig {
            reference: ReferencePoint::GestureStart,
            ..ScaleConfig::default()
        };
        let mut r = ScaleRecognizer::with_config(config, ZeroVelocity, RecordingArena::default());
        let events = start_pinch(&mut r);
        // Under this policy the claim-crossing move itself reads as identity.
        let u = updates(&events)[0];
        assert_eq!(u.scale, 1.0);
        assert_eq!(u.rotation, 0.0);

        // Subsequent motion measures from the acceptance positions:
        // separation 150 at acceptance, 300 now.
        let u = updates(&r.handle_event(mv(2, 250.0, 0.0)))[0];
        assert_eq!(u.scale, 2.0);
    }

    #[test]
    fn every_down_claims_in_the_arena() {
        let mut r = recognizer();
        let _ = r.handle_event(down(1, 0.0, 0.0));
        let _ = r.handle_event(down(2, 100.0, 0.0));
        let _ = r.handle_event(down(3, 50.0, 50.0));
        assert_eq!(
            r.arena().claims,
            vec![PointerId(1), PointerId(2), PointerId(3)]
        );
    }

    #[test]
    fn arena_loss_stops_tracking_silently() {
        let mut r = recognizer();
        let _ = r.handle_event(down(1, 0.0, 0.0));
        let _ = r.handle_event(down(2, 100.0, 0.0));
        r.on_arena_rejected(PointerId(1));

        // In-flight events for the relinquished pointer are ignored, and its
        // eventual up is not a contract violation.
        assert!(r.handle_event(mv(1, -400.0, 0.0)).is_empty());
        assert!(r.handle_event(up(1)).is_empty());
        assert_eq!(r.phase(), AttemptPhase::Possible);

        // The survivor lifting rejects and resets the attempt.
        assert!(r.handle_event(up(2)).is_empty());
        assert_eq!(r.phase(), AttemptPhase::Ready);
        assert_eq!(r.arena().resolutions, vec![Disposition::Rejected]);
    }

    #[test]
    fn arena_loss_of_every_pointer_resets() {
        let mut r = recognizer();
        let _ = r.handle_event(down(1, 0.0, 0.0));
        r.on_arena_rejected(PointerId(1));
        assert_eq!(r.phase(), AttemptPhase::Ready);
        // Unknown ids are a no-op.
        r.on_arena_rejected(PointerId(42));
        assert_eq!(r.phase(), AttemptPhase::Ready);
    }

    #[test]
    fn removal_in_possible_keeps_remaining_pair() {
        let mut r = recognizer();
        let _ = r.handle_event(down(1, 0.0, 0.0));
        let _ = r.handle_event(down(2, 100.0, 0.0));
        let _ = r.handle_event(down(3, 0.0, 100.0));
        assert!(r.handle_event(up(1)).is_empty());
        assert_eq!(r.phase(), AttemptPhase::Possible);
        // The promoted pair disambiguates from its own baselines.
        let events = r.handle_event(mv(2, 140.0, 0.0));
        assert_eq!(events[0], GestureEvent::Started);
    }

    #[test]
    fn recognizer_cycles_across_attempts() {
        let mut r = recognizer();
        let _ = start_pinch(&mut r);
        let _ = r.handle_event(up(2));
        let _ = r.handle_event(up(1));
        assert_eq!(r.phase(), AttemptPhase::Ready);

        // A fresh attempt on the same instance works from scratch.
        let events = start_pinch(&mut r);
        assert_eq!(events[0], GestureEvent::Started);
        assert_eq!(
            r.arena().resolutions,
            vec![Disposition::Accepted, Disposition::Accepted]
        );
    }

    #[test]
    #[should_panic(expected = "never tracked")]
    fn up_of_unknown_pointer_is_fatal() {
        let mut r = recognizer();
        let _ = r.handle_event(down(1, 0.0, 0.0));
        let _ = r.handle_event(up(2));
    }

    #[test]
    #[should_panic(expected = "already live")]
    fn duplicate_down_is_fatal() {
        let mut r = recognizer();
        let _ = r.handle_event(down(1, 0.0, 0.0));
        let _ = r.handle_event(down(1, 5.0, 5.0));
    }
}
