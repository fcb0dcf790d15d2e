// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! The swipe engine.
//!
//! This module owns the interaction core: the card stack, the gesture
//! tracker, and the scheduled exit transitions. All state transitions happen
//! synchronously inside the handler that received the input event or the
//! tick; the 500 ms exit transition is the only deferred step, modeled as a
//! removal task keyed by card identifier and drained by [`SwipeEngine::tick`].
//!
//! Every operation treats a failed precondition (no card, no session) as an
//! ordinary no-op, never an error.
//!
//! # Organization
//!
//! * [`gesture`]: the zero-or-one in-progress drag session.
//! * [`classify`]: offset thresholds and the pure decision function.
//! * [`feedback`]: directional indicator intensities.

pub(crate) mod classify;
pub(crate) mod feedback;
pub(crate) mod gesture;

use std::time::{Duration, Instant};

use crate::{
    model::{
        Decision, Offset, Point, Profile,
        deck::{CardPhase, Deck},
    },
    swipe::{classify::classify, gesture::GestureTracker},
};

/// Length of the exit transition between commit and removal.
pub(crate) const EXIT_DURATION: Duration = Duration::from_millis(500);

/// A scheduled `committing → removed` transition.
///
/// Keyed by card identifier so that a card invalidated before the task fires
/// makes the task a no-op.
struct PendingRemoval {
    card_id: String,
    due: Instant,
}

/// Orchestrates the card stack, the gesture tracker, and exit transitions.
pub(crate) struct SwipeEngine {
    deck: Deck,
    tracker: GestureTracker,
    removals: Vec<PendingRemoval>,
    exhausted: bool,
}

impl SwipeEngine {
    pub(crate) fn new() -> Self {
        Self {
            deck: Deck::new(),
            tracker: GestureTracker::new(),
            removals: Vec::new(),
            exhausted: false,
        }
    }

    pub(crate) fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Whether the empty-stack signal is currently raised.
    pub(crate) fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Rebuilds the stack from a fresh batch of profiles.
    ///
    /// Tears down the previous stack entirely: any open gesture session and
    /// any scheduled removals are discarded, and the empty-stack signal is
    /// withdrawn.
    pub(crate) fn replenish(&mut self, profiles: Vec<Profile>) {
        self.tracker.cancel();
        self.removals.clear();
        self.deck.populate(profiles);
        self.exhausted = false;
    }

    /// Begins a gesture against the topmost interactable card.
    ///
    /// No-op if a session is already active or no card is eligible.
    pub(crate) fn pointer_down(&mut self, point: Point) {
        if self.tracker.is_active() {
            return;
        }
        let Some(card) = self.deck.topmost_interactable() else {
            return;
        };
        let card_id = card.id().to_string();
        if self.tracker.begin(point, &card_id)
            && let Some(card) = self.deck.card_mut(&card_id)
        {
            card.phase = CardPhase::Dragging;
            card.offset = Offset::default();
        }
    }

    /// Advances the active gesture, updating the dragged card's offset.
    ///
    /// No-op if no session is active.
    pub(crate) fn pointer_move(&mut self, point: Point) {
        let Some(offset) = self.tracker.update(point) else {
            return;
        };
        let Some(card_id) = self.tracker.target().map(str::to_string) else {
            return;
        };
        if let Some(card) = self.deck.card_mut(&card_id)
            && card.phase == CardPhase::Dragging
        {
            card.offset = offset;
        }
    }

    /// Ends the active gesture and applies the classified decision.
    ///
    /// The session is cleared unconditionally, even when the target card has
    /// been invalidated in the meantime. Returns the decision together with
    /// the profile name, or `None` when no session was active or the card is
    /// gone.
    pub(crate) fn pointer_up(&mut self, point: Point, now: Instant) -> Option<(Decision, String)> {
        let (card_id, offset) = self.tracker.end(point)?;
        let decision = classify(offset);

        let card = self.deck.card_mut(&card_id)?;
        if card.phase != CardPhase::Dragging {
            return None;
        }

        match decision {
            Decision::Cancel => {
                card.offset = Offset::default();
                card.phase = CardPhase::Interactable;
                Some((decision, card.profile.name.clone()))
            }
            _ => self
                .commit(&card_id, decision, now)
                .map(|name| (decision, name)),
        }
    }

    /// Applies a direct (non-drag) decision to the topmost interactable card.
    ///
    /// Skips the gesture tracker entirely. No-op for [`Decision::Cancel`],
    /// when the deck is empty, or while the top card is mid-drag.
    pub(crate) fn trigger(&mut self, decision: Decision, now: Instant) -> Option<(Decision, String)> {
        if decision == Decision::Cancel {
            return None;
        }
        let card_id = self.deck.topmost_interactable()?.id().to_string();
        self.commit(&card_id, decision, now)
            .map(|name| (decision, name))
    }

    /// Drains removal tasks that have come due.
    ///
    /// Each due task excises its card; removing the last card raises the
    /// empty-stack signal. Tasks whose card no longer exists are dropped
    /// silently.
    pub(crate) fn tick(&mut self, now: Instant) {
        if self.removals.is_empty() {
            return;
        }

        let mut due = Vec::new();
        self.removals.retain(|removal| {
            if removal.due <= now {
                due.push(removal.card_id.clone());
                false
            } else {
                true
            }
        });

        for card_id in due {
            if self.deck.remove(&card_id).is_some() && self.deck.is_exhausted() {
                self.exhausted = true;
            }
        }
    }

    fn commit(&mut self, card_id: &str, decision: Decision, now: Instant) -> Option<String> {
        let card = self.deck.card_mut(card_id)?;
        card.phase = CardPhase::Committing {
            decision,
            since: now,
        };
        self.removals.push(PendingRemoval {
            card_id: card_id.to_string(),
            due: now + EXIT_DURATION,
        });
        Some(card.profile.name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swipe::feedback::{IndicatorKind, indicator};

    fn profile(n: usize) -> Profile {
        Profile {
            id: format!("p_{}", n),
            name: format!("Profile {}", n),
            age: 25,
            city: "Astoria".to_string(),
            title: "Barista".to_string(),
            bio: "Will beat you at Mario Kart.".to_string(),
            tags: vec!["Coffee".to_string(), "Movies".to_string()],
            img: String::new(),
        }
    }

    fn engine_of(n: usize) -> SwipeEngine {
        let mut engine = SwipeEngine::new();
        engine.replenish((0..n).map(profile).collect());
        engine
    }

    fn top_offset(engine: &SwipeEngine) -> Offset {
        engine.deck().topmost().unwrap().offset
    }

    fn after_exit(now: Instant) -> Instant {
        now + EXIT_DURATION + Duration::from_millis(100)
    }

    #[test]
    fn drag_past_swipe_threshold_commits_like() {
        let mut engine = engine_of(3);
        let now = Instant::now();

        engine.pointer_down(Point::new(0.0, 0.0));
        engine.pointer_move(Point::new(150.0, 0.0));

        // The like indicator saturates during the drag.
        let like = indicator(IndicatorKind::Like, top_offset(&engine));
        assert_eq!(like.opacity, 1.0);

        let (decision, name) = engine.pointer_up(Point::new(150.0, 0.0), now).unwrap();
        assert_eq!(decision, Decision::Like);
        assert_eq!(name, "Profile 2");

        let card = engine.deck().cards().last().unwrap();
        assert!(card.is_committing());

        engine.tick(after_exit(now));
        assert_eq!(engine.deck().remaining(), 2);
        assert_eq!(engine.deck().topmost().unwrap().id(), "p_1");
    }

    #[test]
    fn upward_drag_commits_super_like() {
        let mut engine = engine_of(1);
        let now = Instant::now();

        engine.pointer_down(Point::new(40.0, 200.0));
        engine.pointer_move(Point::new(40.0, 50.0));
        let (decision, _) = engine.pointer_up(Point::new(40.0, 50.0), now).unwrap();
        assert_eq!(decision, Decision::SuperLike);
    }

    #[test]
    fn diagonal_drag_with_excess_drift_cancels() {
        let mut engine = engine_of(1);
        let now = Instant::now();

        engine.pointer_down(Point::new(0.0, 200.0));
        engine.pointer_move(Point::new(90.0, 50.0));
        let (decision, _) = engine.pointer_up(Point::new(90.0, 50.0), now).unwrap();
        assert_eq!(decision, Decision::Cancel);
    }

    #[test]
    fn sub_threshold_drag_snaps_back() {
        let mut engine = engine_of(2);
        let now = Instant::now();

        engine.pointer_down(Point::new(0.0, 0.0));
        engine.pointer_move(Point::new(50.0, 0.0));
        let (decision, _) = engine.pointer_up(Point::new(50.0, 0.0), now).unwrap();
        assert_eq!(decision, Decision::Cancel);

        let card = engine.deck().topmost().unwrap();
        assert_eq!(card.phase, CardPhase::Interactable);
        assert_eq!(card.offset, Offset::default());

        engine.tick(after_exit(now));
        assert_eq!(engine.deck().remaining(), 2);
    }

    #[test]
    fn pointer_up_without_session_is_noop() {
        let mut engine = engine_of(2);
        let now = Instant::now();

        engine.pointer_down(Point::new(0.0, 0.0));
        engine.pointer_move(Point::new(150.0, 0.0));
        assert!(engine.pointer_up(Point::new(150.0, 0.0), now).is_some());

        // A second release without an intervening press changes nothing.
        assert!(engine.pointer_up(Point::new(150.0, 0.0), now).is_none());
        engine.tick(after_exit(now));
        assert_eq!(engine.deck().remaining(), 1);
    }

    #[test]
    fn pointer_down_while_session_active_is_ignored() {
        let mut engine = engine_of(2);

        engine.pointer_down(Point::new(0.0, 0.0));
        engine.pointer_down(Point::new(500.0, 500.0));
        engine.pointer_move(Point::new(30.0, 0.0));

        // Offset is still measured from the first press.
        assert_eq!(top_offset(&engine), Offset::new(30.0, 0.0));
        let dragging = engine
            .deck()
            .cards()
            .iter()
            .filter(|c| c.phase == CardPhase::Dragging)
            .count();
        assert_eq!(dragging, 1);
    }

    #[test]
    fn pointer_down_on_empty_deck_is_noop() {
        let mut engine = SwipeEngine::new();
        engine.pointer_down(Point::new(0.0, 0.0));
        engine.pointer_move(Point::new(150.0, 0.0));
        assert!(engine.pointer_up(Point::new(150.0, 0.0), Instant::now()).is_none());
    }

    #[test]
    fn direct_nope_on_last_card_exhausts_deck() {
        let mut engine = engine_of(1);
        let now = Instant::now();

        let (decision, name) = engine.trigger(Decision::Nope, now).unwrap();
        assert_eq!(decision, Decision::Nope);
        assert_eq!(name, "Profile 0");
        assert!(!engine.is_exhausted());

        engine.tick(after_exit(now));
        assert!(engine.deck().is_exhausted());
        assert!(engine.is_exhausted());
    }

    #[test]
    fn replenish_clears_exhaustion_signal() {
        let mut engine = engine_of(1);
        let now = Instant::now();
        assert!(engine.trigger(Decision::Like, now).is_some());
        engine.tick(after_exit(now));
        assert!(engine.is_exhausted());

        engine.replenish((0..12).map(profile).collect());
        assert!(!engine.is_exhausted());
        assert_eq!(engine.deck().remaining(), 12);
        assert!(
            engine
                .deck()
                .cards()
                .iter()
                .all(|c| c.phase == CardPhase::Interactable)
        );
    }

    #[test]
    fn trigger_on_empty_deck_is_noop() {
        let mut engine = SwipeEngine::new();
        assert!(engine.trigger(Decision::Like, Instant::now()).is_none());
    }

    #[test]
    fn trigger_of_cancel_is_noop() {
        let mut engine = engine_of(1);
        assert!(engine.trigger(Decision::Cancel, Instant::now()).is_none());
        assert_eq!(engine.deck().remaining(), 1);
    }

    #[test]
    fn trigger_while_top_card_dragging_is_noop() {
        let mut engine = engine_of(2);
        engine.pointer_down(Point::new(0.0, 0.0));
        assert!(engine.trigger(Decision::Like, Instant::now()).is_none());

        // The drag itself still classifies normally afterwards.
        engine.pointer_move(Point::new(150.0, 0.0));
        let (decision, _) = engine
            .pointer_up(Point::new(150.0, 0.0), Instant::now())
            .unwrap();
        assert_eq!(decision, Decision::Like);
    }

    #[test]
    fn newly_exposed_card_is_draggable_before_removal_fires() {
        let mut engine = engine_of(2);
        let now = Instant::now();
        assert!(engine.trigger(Decision::Like, now).is_some());

        // The committing card is skipped; the next card takes the gesture.
        engine.pointer_down(Point::new(0.0, 0.0));
        let dragging: Vec<&str> = engine
            .deck()
            .cards()
            .iter()
            .filter(|c| c.phase == CardPhase::Dragging)
            .map(|c| c.id())
            .collect();
        assert_eq!(dragging, ["p_0"]);

        engine.tick(after_exit(now));
        assert_eq!(engine.deck().remaining(), 1);
        assert_eq!(engine.deck().topmost().unwrap().phase, CardPhase::Dragging);
    }

    #[test]
    fn removal_fires_only_after_exit_duration() {
        let mut engine = engine_of(1);
        let now = Instant::now();
        assert!(engine.trigger(Decision::SuperLike, now).is_some());

        engine.tick(now + Duration::from_millis(400));
        assert_eq!(engine.deck().remaining(), 1);
        assert!(!engine.is_exhausted());

        engine.tick(now + EXIT_DURATION);
        assert_eq!(engine.deck().remaining(), 0);
        assert!(engine.is_exhausted());
    }

    #[test]
    fn stale_removal_task_noops_after_replenish() {
        let mut engine = engine_of(1);
        let now = Instant::now();
        assert!(engine.trigger(Decision::Like, now).is_some());

        engine.replenish((10..12).map(profile).collect());
        engine.tick(after_exit(now));

        assert_eq!(engine.deck().remaining(), 2);
        assert!(!engine.is_exhausted());
    }

    #[test]
    fn replenish_during_drag_discards_session() {
        let mut engine = engine_of(1);
        engine.pointer_down(Point::new(0.0, 0.0));
        engine.replenish((5..8).map(profile).collect());

        // The old session is gone; releasing does nothing to the new stack.
        assert!(engine.pointer_up(Point::new(150.0, 0.0), Instant::now()).is_none());
        assert_eq!(engine.deck().remaining(), 3);
    }
}
