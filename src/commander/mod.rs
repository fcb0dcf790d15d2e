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

//! Command-line input logic and state management.
//!
//! This module implements the logic for a command-line processing component,
//! handling a text input component, and dispatching a corresponding
//! application event when typing is finished and a command is submitted.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{actions::events::AppEvent, model::Decision};

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {

    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    pub(crate) fn handle_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> bool {
        if self.active {
            match event {
                Event::Key(key_event) => {
                    match key_event.code {
                        KeyCode::Esc => {
                            self.active = false;
                            self.input.reset();
                            true
                        }

                        KeyCode::Enter => {
                            let buffer = self.input.value().trim().to_string();
                            if !buffer.is_empty() {
                                let _ = self.run_command(&buffer, event_tx);
                            }
                            self.input.reset();
                            self.active = false;

                            true
                        }

                        _ => {
                            // Delegate all key events to the managed input component.
                            if let Event::Key(_) = event {
                                self.input.handle_event(&event);
                            }

                            true
                        }
                    }
                }

                _ => false,
            }
        } else {
            match event {
                Event::Key(key_event) => {
                    match key_event.code {
                        KeyCode::Char(':') => {
                            self.active = true;
                            true
                        }

                        _ => false
                    }
                }

                _ => false
            }
        }
    }

    fn run_command(&self, buffer: &str, event_tx: &Sender<AppEvent>) -> Result<()> {
        let parts: Vec<&str> = buffer.split_whitespace().collect();

        match parts.as_slice() {
            ["q"] => event_tx.send(AppEvent::ExitApplication)?,

            ["like"] | ["l"] => event_tx.send(AppEvent::TriggerDecision(Decision::Like))?,
            ["nope"] | ["n"] => event_tx.send(AppEvent::TriggerDecision(Decision::Nope))?,
            ["super"] | ["sl"] => {
                event_tx.send(AppEvent::TriggerDecision(Decision::SuperLike))?
            }

            ["shuffle"] | ["new"] => event_tx.send(AppEvent::Replenish)?,

            ["deck", size] => {
                if let Ok(size) = size.parse::<usize>() {
                    if size > 0 {
                        event_tx.send(AppEvent::SetDeckSize(size))?
                    }
                } else {
                    // error
                }
            }

            [] => {},            // empty (no command)

            [_cmd, ..] => {},    // unknown command (and params)
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_command(commander: &mut Commander, text: &str, tx: &Sender<AppEvent>) {
        commander.handle_event(key(KeyCode::Char(':')), tx);
        for c in text.chars() {
            commander.handle_event(key(KeyCode::Char(c)), tx);
        }
        commander.handle_event(key(KeyCode::Enter), tx);
    }

    #[test]
    fn colon_activates_command_mode() {
        let (tx, _rx) = mpsc::channel();
        let mut commander = Commander::new();
        assert!(!commander.active());
        assert!(commander.handle_event(key(KeyCode::Char(':')), &tx));
        assert!(commander.active());
    }

    #[test]
    fn inactive_commander_ignores_other_keys() {
        let (tx, _rx) = mpsc::channel();
        let mut commander = Commander::new();
        assert!(!commander.handle_event(key(KeyCode::Char('x')), &tx));
    }

    #[test]
    fn like_command_dispatches_decision() {
        let (tx, rx) = mpsc::channel();
        let mut commander = Commander::new();
        type_command(&mut commander, "like", &tx);
        assert!(matches!(
            rx.try_recv().unwrap(),
            AppEvent::TriggerDecision(Decision::Like)
        ));
        assert!(!commander.active());
    }

    #[test]
    fn deck_command_parses_size() {
        let (tx, rx) = mpsc::channel();
        let mut commander = Commander::new();
        type_command(&mut commander, "deck 20", &tx);
        assert!(matches!(rx.try_recv().unwrap(), AppEvent::SetDeckSize(20)));
    }

    #[test]
    fn malformed_and_unknown_commands_are_ignored() {
        let (tx, rx) = mpsc::channel();
        let mut commander = Commander::new();
        type_command(&mut commander, "deck zero", &tx);
        type_command(&mut commander, "deck 0", &tx);
        type_command(&mut commander, "frobnicate", &tx);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn escape_leaves_command_mode() {
        let (tx, _rx) = mpsc::channel();
        let mut commander = Commander::new();
        commander.handle_event(key(KeyCode::Char(':')), &tx);
        commander.handle_event(key(KeyCode::Esc), &tx);
        assert!(!commander.active());
        assert!(commander.input.value().is_empty());
    }
}
