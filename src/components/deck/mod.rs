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

//! Deck view component state and hit-testing.
//!
//! The deck view owns the screen geometry needed to interpret mouse input:
//! the deck area where drags begin and the action-bar button rects. Both are
//! recorded during rendering and consulted by the event router.

mod event;
mod render;

use ratatui::layout::{Position, Rect};

use crate::model::Point;

// Terminal cells are roughly twice as tall as they are wide. Pointer
// coordinates are scaled into an approximate pixel space before gesture
// tracking so the drag thresholds behave the same on both axes.
pub(crate) const CELL_PX_X: f32 = 10.0;
pub(crate) const CELL_PX_Y: f32 = 20.0;

/// The action-bar buttons beneath the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ActionButton {
    Nope,
    SuperLike,
    Like,
    Shuffle,
}

/// Persistent state of the deck view.
pub(crate) struct DeckView {
    pub(crate) deck_area: Rect,
    buttons: Vec<(ActionButton, Rect)>,
}

impl DeckView {
    pub(crate) fn new() -> Self {
        Self {
            deck_area: Rect::default(),
            buttons: Vec::new(),
        }
    }

    /// Scales a terminal cell position into gesture pixel space.
    pub(crate) fn to_px(column: u16, row: u16) -> Point {
        Point::new(column as f32 * CELL_PX_X, row as f32 * CELL_PX_Y)
    }

    pub(crate) fn button_at(&self, column: u16, row: u16) -> Option<ActionButton> {
        let position = Position::new(column, row);
        self.buttons
            .iter()
            .find(|(_, rect)| rect.contains(position))
            .map(|(action, _)| *action)
    }

    pub(crate) fn deck_contains(&self, column: u16, row: u16) -> bool {
        self.deck_area.contains(Position::new(column, row))
    }
}
