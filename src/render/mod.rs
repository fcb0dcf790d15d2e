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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event to provide a reactive user interface.

mod commander;
pub(crate) mod icons;

use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{App, render::commander::draw_commander};

/// Renders the user interface to the terminal frame.
///
/// Partitions the screen into a header, the deck area, a status line, and
/// the command line, then delegates the deck area to the deck view
/// component.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    // Outer layout: header, deck, status, commander
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    draw_header(f, outer[0], app);

    app.deck_view
        .draw(f, outer[1], &app.engine, &app.theme, Instant::now());

    draw_status(f, outer[2], app);

    draw_commander(f, outer[3], app);
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(app.theme.border_colour))
        .padding(Padding::horizontal(1));

    let title = Line::from(vec![
        Span::styled("swipedeck", Style::default().add_modifier(Modifier::BOLD))
            .fg(app.theme.accent_colour),
    ]);
    f.render_widget(Paragraph::new(title).block(block), area);
}

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(24)])
        .horizontal_margin(1)
        .split(area);

    let action = app.last_action.as_deref().unwrap_or("");
    f.render_widget(
        Paragraph::new(action).style(Style::default().fg(app.theme.status_fg)),
        chunks[0],
    );

    let remaining = app.engine.deck().remaining();
    let count_line = Line::from(vec![
        Span::styled(
            format!("{} profiles left", remaining),
            Style::default().fg(app.theme.status_fg),
        ),
    ]);
    f.render_widget(
        Paragraph::new(count_line).alignment(Alignment::Right),
        chunks[1],
    );
}
