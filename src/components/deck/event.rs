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

//! Event routing for the deck view.
//!
//! Translates raw mouse events into semantic pointer and action events. A
//! press on an action-bar button becomes a direct decision; a press inside
//! the deck area begins a gesture. Drag and release are always forwarded,
//! the engine ignores them when no session is open.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, MouseButton, MouseEventKind};

use crate::{
    actions::events::{AppEvent, AppEventProcessor},
    components::deck::{ActionButton, DeckView},
    model::Decision,
};

impl AppEventProcessor for DeckView {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<()> {
        let Event::Mouse(mouse) = event else {
            return Ok(());
        };

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(action) = self.button_at(mouse.column, mouse.row) {
                    let event = match action {
                        ActionButton::Like => AppEvent::TriggerDecision(Decision::Like),
                        ActionButton::Nope => AppEvent::TriggerDecision(Decision::Nope),
                        ActionButton::SuperLike => {
                            AppEvent::TriggerDecision(Decision::SuperLike)
                        }
                        ActionButton::Shuffle => AppEvent::Replenish,
                    };
                    event_tx.send(event)?;
                } else if self.deck_contains(mouse.column, mouse.row) {
                    event_tx.send(AppEvent::PointerDown(DeckView::to_px(
                        mouse.column,
                        mouse.row,
                    )))?;
                }
            }

            MouseEventKind::Drag(MouseButton::Left) => {
                event_tx.send(AppEvent::PointerMove(DeckView::to_px(
                    mouse.column,
                    mouse.row,
                )))?;
            }

            MouseEventKind::Up(MouseButton::Left) => {
                event_tx.send(AppEvent::PointerUp(DeckView::to_px(
                    mouse.column,
                    mouse.row,
                )))?;
            }

            _ => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{KeyModifiers, MouseEvent};
    use ratatui::layout::Rect;

    use super::*;
    use crate::model::Point;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn view() -> DeckView {
        let mut view = DeckView::new();
        view.deck_area = Rect::new(0, 0, 60, 20);
        view
    }

    #[test]
    fn press_inside_deck_begins_gesture() {
        let (tx, rx) = mpsc::channel();
        let mut view = view();

        view.process_event(
            mouse(MouseEventKind::Down(MouseButton::Left), 10, 5),
            &tx,
        )
        .unwrap();

        match rx.try_recv().unwrap() {
            AppEvent::PointerDown(point) => assert_eq!(point, Point::new(100.0, 100.0)),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn press_outside_deck_is_ignored() {
        let (tx, rx) = mpsc::channel();
        let mut view = view();

        view.process_event(
            mouse(MouseEventKind::Down(MouseButton::Left), 70, 25),
            &tx,
        )
        .unwrap();
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn drag_and_release_are_always_forwarded() {
        let (tx, rx) = mpsc::channel();
        let mut view = view();

        view.process_event(mouse(MouseEventKind::Drag(MouseButton::Left), 12, 5), &tx)
            .unwrap();
        view.process_event(mouse(MouseEventKind::Up(MouseButton::Left), 12, 5), &tx)
            .unwrap();

        assert!(matches!(rx.try_recv().unwrap(), AppEvent::PointerMove(_)));
        assert!(matches!(rx.try_recv().unwrap(), AppEvent::PointerUp(_)));
    }

    #[test]
    fn scroll_events_are_ignored() {
        let (tx, rx) = mpsc::channel();
        let mut view = view();

        view.process_event(mouse(MouseEventKind::ScrollDown, 10, 5), &tx)
            .unwrap();
        assert!(rx.try_recv().is_err());
    }
}
