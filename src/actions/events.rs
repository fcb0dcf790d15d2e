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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging the gap between user input (keyboard and mouse), the swipe
//! engine, and the UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through an
//!    asynchronous channel.
//! 2. **Process**: The [`process_events`] function updates the [`App`] state
//!    and drives the swipe engine synchronously.
//! 3. **Render**: After each event is processed, the UI is re-drawn using
//!    the `ratatui` terminal.

use std::{io::Stdout, sync::mpsc::Sender, time::Instant};

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, MouseEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App, config,
    generator::generate_profiles,
    model::{Decision, Point},
    render::draw,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),

    PointerDown(Point),
    PointerMove(Point),
    PointerUp(Point),

    TriggerDecision(Decision),
    Replenish,
    SetDeckSize(usize),

    Tick,

    ExitApplication,

    Error(String),
}

pub(crate) trait AppEventProcessor {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<()>;
}

/// Runs the main application loop, handling events and rendering the UI in
/// the terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        match event {
            AppEvent::Key(key) => process_key_event(app, key)?,

            AppEvent::Mouse(mouse) => {
                app.deck_view.process_event(Event::Mouse(mouse), &app.event_tx)?;
            }

            AppEvent::PointerDown(point) => app.engine.pointer_down(point),
            AppEvent::PointerMove(point) => app.engine.pointer_move(point),
            AppEvent::PointerUp(point) => {
                if let Some((decision, name)) = app.engine.pointer_up(point, Instant::now()) {
                    record_decision(app, decision, &name);
                }
            }

            AppEvent::TriggerDecision(decision) => {
                if let Some((decision, name)) = app.engine.trigger(decision, Instant::now()) {
                    record_decision(app, decision, &name);
                }
            }

            AppEvent::Replenish => {
                let profiles = generate_profiles(app.config.deck_size);
                app.engine.replenish(profiles);
            }

            AppEvent::SetDeckSize(size) => {
                app.config.deck_size = size;
                if let Err(e) = config::save_config(&app.config) {
                    app.event_tx.send(AppEvent::Error(e.to_string()))?;
                }
            }

            AppEvent::Tick => app.engine.tick(Instant::now()),

            AppEvent::Error(message) => app.last_action = Some(message),

            _ => {}
        }

        // Render after every event processed
        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Maps keyboard input to application actions.
///
/// The command-line component gets the first look at every key; anything it
/// does not consume falls through to the global bindings.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let event = Event::Key(key);
    let handled = app.commander.handle_event(event, &app.event_tx);
    if handled {
        return Ok(());
    }

    process_global_key_event(app, key)
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => {
            app.event_tx.send(AppEvent::ExitApplication)?;
        }

        KeyCode::Right => {
            app.event_tx.send(AppEvent::TriggerDecision(Decision::Like))?;
        }
        KeyCode::Left => {
            app.event_tx.send(AppEvent::TriggerDecision(Decision::Nope))?;
        }
        KeyCode::Up => {
            app.event_tx
                .send(AppEvent::TriggerDecision(Decision::SuperLike))?;
        }

        KeyCode::Char('r') => {
            app.event_tx.send(AppEvent::Replenish)?;
        }

        _ => {}
    }

    Ok(())
}

fn record_decision(app: &mut App, decision: Decision, name: &str) {
    if decision != Decision::Cancel {
        app.last_action = Some(format!("{} on {}", decision.label(), name));
    }
}
