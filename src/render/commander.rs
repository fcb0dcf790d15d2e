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

//! Render the command-line bar.
//!
//! While the commander is active this shows a `:` prompt, the typed text,
//! and positions the terminal cursor; otherwise it shows a dim hint.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::App;

const PROMPT: &str = ":";

pub(crate) fn draw_commander(f: &mut Frame, area: Rect, app: &App) {
    let commander = &app.commander;
    let bar = area.inner(ratatui::layout::Margin::new(1, 0));

    if !commander.active() {
        let hint = Line::from(Span::styled(
            "type : for commands",
            Style::default().fg(app.theme.status_fg),
        ));
        f.render_widget(Paragraph::new(hint), bar);
        return;
    }

    let line = Line::from(vec![
        Span::raw(PROMPT),
        Span::raw(commander.input.value()),
    ]);
    f.render_widget(
        Paragraph::new(line).style(
            Style::default()
                .fg(app.theme.commander_colour)
                .bg(app.theme.commander_bg_colour),
        ),
        bar,
    );

    let cursor_x = bar.x + PROMPT.len() as u16 + commander.input.cursor() as u16;
    f.set_cursor_position((cursor_x.min(bar.right().saturating_sub(1)), bar.y));
}
