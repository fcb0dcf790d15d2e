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

//! Card and deck state management.
//!
//! This module provides the ordered card stack. Cards are held back-to-front;
//! the last non-removed card is the top of the deck and the only card
//! eligible to receive gesture input. Ordering is fixed at population time,
//! cards only ever leave the stack by removal.

use std::time::Instant;

use crate::model::{Decision, Offset, Profile};

/// Interaction lifecycle phase of a single card.
///
/// Transitions are monotonic: `Idle → Interactable → Dragging →
/// {Committing | Interactable}`, and `Committing → Removed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum CardPhase {
    Idle,
    Interactable,
    Dragging,
    Committing { decision: Decision, since: Instant },
    Removed,
}

/// One swipeable card: a profile plus its interaction state.
#[derive(Debug, Clone)]
pub(crate) struct Card {
    pub(crate) profile: Profile,
    pub(crate) offset: Offset,
    pub(crate) phase: CardPhase,
}

impl Card {
    fn new(profile: Profile) -> Self {
        Self {
            profile,
            offset: Offset::default(),
            phase: CardPhase::Idle,
        }
    }

    pub(crate) fn id(&self) -> &str {
        &self.profile.id
    }

    pub(crate) fn is_committing(&self) -> bool {
        matches!(self.phase, CardPhase::Committing { .. })
    }
}

/// The ordered card stack.
pub(crate) struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub(crate) fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Replaces the deck contents with a fresh batch of profiles.
    ///
    /// All cards enter the stack in the `Interactable` phase.
    pub(crate) fn populate(&mut self, profiles: Vec<Profile>) {
        self.cards = profiles
            .into_iter()
            .map(|profile| {
                let mut card = Card::new(profile);
                card.phase = CardPhase::Interactable;
                card
            })
            .collect();
    }

    pub(crate) fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The topmost card still in play, skipping cards mid exit transition.
    ///
    /// Returns the card regardless of whether it is currently being dragged;
    /// use [`Deck::topmost_interactable`] to target new interactions.
    pub(crate) fn topmost(&self) -> Option<&Card> {
        self.cards.iter().rev().find(|card| {
            !matches!(card.phase, CardPhase::Committing { .. } | CardPhase::Removed)
        })
    }

    /// The single valid target for a new gesture or direct action.
    ///
    /// `None` if the deck is empty, every card is mid exit transition, or the
    /// top card is already being dragged.
    pub(crate) fn topmost_interactable(&self) -> Option<&Card> {
        self.topmost()
            .filter(|card| card.phase == CardPhase::Interactable)
    }

    pub(crate) fn card_mut(&mut self, card_id: &str) -> Option<&mut Card> {
        self.cards.iter_mut().find(|card| card.id() == card_id)
    }

    /// Excises a card from the stack.
    ///
    /// Returns the removed card with its phase set to `Removed`, or `None`
    /// when no card with that identifier remains. Relative order of the
    /// surviving cards is unchanged.
    pub(crate) fn remove(&mut self, card_id: &str) -> Option<Card> {
        let index = self.cards.iter().position(|card| card.id() == card_id)?;
        let mut card = self.cards.remove(index);
        card.phase = CardPhase::Removed;
        Some(card)
    }

    pub(crate) fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub(crate) fn is_exhausted(&self) -> bool {
        self.cards.is_empty()
    }
}
