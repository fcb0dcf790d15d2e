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

//! # Swipe Deck TUI.
//!
//! A terminal-based swipeable profile deck.
//!
//! This application renders a stack of synthetic profile cards and turns
//! mouse drags into Like, Nope, or Super Like decisions, with proportional
//! visual feedback while the drag is in flight.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle, the swipe engine,
//!   and UI rendering.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state; the tick also advances exit transitions on committed cards.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the input threads and the main loop is handled via
//! `std::sync::mpsc` channels.

mod actions;
mod commander;
mod components;
mod config;
mod generator;
mod model;
mod render;
mod swipe;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};

use crate::{
    actions::events::{AppEvent, process_events},
    commander::Commander,
    components::DeckView,
    config::AppConfig,
    swipe::SwipeEngine,
    theme::Theme,
};

// Tick interval, effectively the minimum "frame rate" of the TUI. Short
// enough that the 500 ms exit transition animates smoothly.
const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub engine: SwipeEngine,

    pub deck_view: DeckView,
    pub commander: Commander,

    pub last_action: Option<String>,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        Self {
            config,
            theme: Theme::default(),
            event_tx,
            event_rx,
            engine: SwipeEngine::new(),
            deck_view: DeckView::new(),
            commander: Commander::new(),
            last_action: None,
        }
    }
}

/// The entry point of the application.
///
/// Loads the configuration, builds the application state, and runs the
/// event loop inside the managed terminal lifecycle.
fn main() -> Result<()> {
    let config = config::load_config();

    let mut app = App::new(config);

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// Side effects: sets the emulator background colour from the theme, enables
/// raw mode, switches to the alternate screen buffer, and enables mouse
/// capture (pointer input is the primary interaction).
///
/// # Errors
///
/// Returns an error if raw mode or the alternate screen cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    util::term::set_terminal_bg(&Theme::to_hex(app.theme.background_colour));

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Reverses everything [`setup_terminal`] did: raw mode, alternate screen,
/// mouse capture, background colour, and cursor visibility.
///
/// Best-effort by design, it runs during cleanup or panic handling, so it
/// swallows failures rather than returning them.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture).ok();
    util::term::reset_terminal_bg();
    terminal.show_cursor().ok();
}

/// Starts the application's background threads and enters the main event
/// loop.
///
/// Two long-running threads feed the event channel: one translating raw
/// keyboard and mouse events, one emitting the periodic tick that advances
/// exit transitions. The initial deck is dealt before handing control to
/// [`process_events`].
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Spawn a thread to translate raw input events to application events.
    let tx_input = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event::Event::Key(key)) => {
                    tx_input.send(AppEvent::Key(key)).ok();
                }
                Ok(event::Event::Mouse(mouse)) => {
                    tx_input.send(AppEvent::Mouse(mouse)).ok();
                }
                _ => {}
            }
        }
    });

    // Spawn a thread to send a periodic tick application event.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let _ = tx_tick.send(AppEvent::Tick);
            thread::sleep(TICK_INTERVAL);
        }
    });

    // Initial trigger to deal the first deck of profiles.
    app.event_tx.send(AppEvent::Replenish)?;

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
