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

//! UI rendering logic for the deck view.
//!
//! Draws the card stack: silhouettes of the cards waiting underneath, the
//! top card shifted by its live drag offset, any cards sliding out after a
//! committed decision, the directional indicators, and the action bar. Also
//! records the geometry the event router hit-tests against.

use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::{
    components::deck::{ActionButton, CELL_PX_X, CELL_PX_Y, DeckView},
    model::{
        Decision, Offset,
        deck::{Card, CardPhase},
    },
    render::icons::{ICON_EMPTY_DECK, ICON_LIKE, ICON_NOPE, ICON_SHUFFLE, ICON_SUPER_LIKE},
    swipe::{
        EXIT_DURATION, SwipeEngine,
        feedback::{Indicator, IndicatorKind, indicators},
        gesture::rotation_for,
    },
    theme::Theme,
    util::format::{format_meta, format_tags, format_tilt},
};

const CARD_WIDTH: u16 = 38;
const CARD_HEIGHT: u16 = 14;

// How many waiting cards peek out from underneath the top card.
const SILHOUETTE_DEPTH: usize = 2;

// Distance (px) a committing card travels over the exit transition.
const EXIT_DISTANCE: f32 = 400.0;

const BUTTON_WIDTH: u16 = 7;
const BUTTON_GAP: u16 = 2;

impl DeckView {
    pub(crate) fn draw(
        &mut self,
        f: &mut Frame,
        area: Rect,
        engine: &SwipeEngine,
        theme: &Theme,
        now: Instant,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(area);

        self.deck_area = chunks[0];

        if engine.is_exhausted() {
            draw_empty_deck(f, chunks[0], theme);
        } else {
            draw_cards(f, chunks[0], engine, theme, now);
        }

        self.draw_action_bar(f, chunks[1], theme);
    }

    fn draw_action_bar(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let buttons = [
            (ActionButton::Nope, ICON_NOPE, theme.nope_colour),
            (ActionButton::SuperLike, ICON_SUPER_LIKE, theme.super_like_colour),
            (ActionButton::Like, ICON_LIKE, theme.like_colour),
            (ActionButton::Shuffle, ICON_SHUFFLE, theme.accent_colour),
        ];

        let total = buttons.len() as u16 * BUTTON_WIDTH + (buttons.len() as u16 - 1) * BUTTON_GAP;
        let mut x = area.x + area.width.saturating_sub(total) / 2;

        self.buttons.clear();
        for (action, icon, colour) in buttons {
            let rect = Rect::new(x, area.y, BUTTON_WIDTH, area.height.min(3)).intersection(area);
            if rect.is_empty() {
                break;
            }
            self.buttons.push((action, rect));

            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colour));
            let inner = block.inner(rect);
            f.render_widget(block, rect);
            f.render_widget(
                Paragraph::new(icon)
                    .style(Style::default().fg(colour))
                    .alignment(Alignment::Center),
                inner,
            );

            x += BUTTON_WIDTH + BUTTON_GAP;
        }
    }
}

fn draw_cards(f: &mut Frame, area: Rect, engine: &SwipeEngine, theme: &Theme, now: Instant) {
    let base = base_card_rect(area);
    let cards = engine.deck().cards();

    let top_index = cards.iter().rposition(|card| !card.is_committing());

    // Silhouettes of the cards waiting beneath the top card.
    if let Some(top) = top_index {
        for depth in (1..=SILHOUETTE_DEPTH.min(top)).rev() {
            let peek = depth as i32;
            if let Some(rect) = shifted_rect(base, peek, peek, area) {
                f.render_widget(Clear, rect);
                f.render_widget(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(theme.stack_fg)),
                    rect,
                );
            }
        }
    }

    if let Some(top) = top_index {
        let card = &cards[top];
        let offset = card.offset;
        if let Some(rect) = shifted_rect(
            base,
            cells_x(offset.dx),
            cells_y(offset.dy),
            area,
        ) {
            draw_card(f, rect, card, theme);
            if card.phase == CardPhase::Dragging {
                draw_indicators(f, rect, offset, theme);
            }
        }
    }

    // Cards sliding out are drawn above everything else.
    for card in cards.iter().filter(|card| card.is_committing()) {
        let CardPhase::Committing { decision, since } = card.phase else {
            continue;
        };
        let progress =
            (now.duration_since(since).as_secs_f32() / EXIT_DURATION.as_secs_f32()).min(1.0);
        let (ex, ey) = exit_vector(decision);
        let offset = Offset::new(
            card.offset.dx + ex * EXIT_DISTANCE * progress,
            card.offset.dy + ey * EXIT_DISTANCE * progress,
        );
        if let Some(rect) = shifted_rect(base, cells_x(offset.dx), cells_y(offset.dy), area) {
            draw_card(f, rect, card, theme);
        }
    }
}

fn draw_card(f: &mut Frame, rect: Rect, card: &Card, theme: &Theme) {
    let profile = &card.profile;

    let title = Line::from(vec![
        Span::styled(
            format!(" {} ", profile.name),
            Style::default().add_modifier(Modifier::BOLD),
        )
        .fg(theme.card_title_fg),
        Span::styled(format!("{} ", profile.age), Style::default().fg(theme.card_meta_fg)),
    ]);

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.card_border_colour))
        .style(Style::default().bg(theme.background_colour))
        .padding(Padding::horizontal(1))
        .title(title);

    let tilt = format_tilt(rotation_for(card.offset));
    if !tilt.is_empty() {
        block = block.title_bottom(
            Line::from(Span::styled(tilt, Style::default().fg(theme.card_meta_fg)))
                .right_aligned(),
        );
    }

    let inner = block.inner(rect);
    f.render_widget(Clear, rect);
    f.render_widget(block, rect);

    if inner.height < 4 || inner.width < 10 {
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(format_meta(&profile.title, &profile.city))
            .style(Style::default().fg(theme.card_meta_fg)),
        rows[0],
    );
    f.render_widget(
        Paragraph::new(profile.bio.as_str())
            .style(Style::default().fg(theme.card_bio_fg))
            .wrap(Wrap { trim: true }),
        rows[2],
    );
    f.render_widget(
        Paragraph::new(format_tags(&profile.tags)).style(Style::default().fg(theme.chip_fg)),
        rows[3],
    );
}

fn draw_indicators(f: &mut Frame, rect: Rect, offset: Offset, theme: &Theme) {
    if rect.width < 14 || rect.height < 5 {
        return;
    }

    for indicator in indicators(offset) {
        if !indicator.visible() {
            continue;
        }
        let label = indicator.kind.label();
        let width = label.len() as u16;
        let anchor = match indicator.kind {
            IndicatorKind::Like => Rect::new(rect.x + 2, rect.y + 1, width, 1),
            IndicatorKind::Nope => {
                Rect::new(rect.right().saturating_sub(width + 2), rect.y + 1, width, 1)
            }
            IndicatorKind::SuperLike => Rect::new(
                rect.x + (rect.width.saturating_sub(width)) / 2,
                rect.bottom().saturating_sub(2),
                width,
                1,
            ),
        };
        f.render_widget(
            Paragraph::new(label).style(indicator_style(&indicator, theme)),
            anchor,
        );
    }
}

fn indicator_style(indicator: &Indicator, theme: &Theme) -> Style {
    let colour = match indicator.kind {
        IndicatorKind::Like => theme.like_colour,
        IndicatorKind::Nope => theme.nope_colour,
        IndicatorKind::SuperLike => theme.super_like_colour,
    };
    let mut style = Style::default().fg(theme.fade(colour, indicator.opacity));
    // The scale channel snaps the label bold as it approaches full size.
    if indicator.scale > 0.95 {
        style = style.add_modifier(Modifier::BOLD);
    }
    style
}

fn draw_empty_deck(f: &mut Frame, area: Rect, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(ICON_EMPTY_DECK)
            .style(Style::default().fg(theme.accent_colour))
            .alignment(Alignment::Center),
        rows[1],
    );
    f.render_widget(
        Paragraph::new("No more profiles!")
            .style(Style::default().fg(theme.empty_fg).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center),
        rows[2],
    );
    f.render_widget(
        Paragraph::new(format!("Press {} or r to see new people", ICON_SHUFFLE))
            .style(Style::default().fg(theme.empty_fg))
            .alignment(Alignment::Center),
        rows[3],
    );
}

fn base_card_rect(area: Rect) -> Rect {
    let width = CARD_WIDTH.min(area.width);
    let height = CARD_HEIGHT.min(area.height);
    Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    )
}

fn cells_x(dx: f32) -> i32 {
    (dx / CELL_PX_X).round() as i32
}

fn cells_y(dy: f32) -> i32 {
    (dy / CELL_PX_Y).round() as i32
}

fn exit_vector(decision: Decision) -> (f32, f32) {
    match decision {
        Decision::Like => (1.0, 0.0),
        Decision::Nope => (-1.0, 0.0),
        Decision::SuperLike => (0.0, -1.0),
        Decision::Cancel => (0.0, 0.0),
    }
}

/// Shifts `base` by whole cells and clips the result to `bounds`.
///
/// Returns `None` once the shifted rect has left the bounds entirely.
fn shifted_rect(base: Rect, dx: i32, dy: i32, bounds: Rect) -> Option<Rect> {
    let left = (base.x as i32 + dx).max(bounds.x as i32);
    let top = (base.y as i32 + dy).max(bounds.y as i32);
    let right = (base.x as i32 + dx + base.width as i32).min(bounds.right() as i32);
    let bottom = (base.y as i32 + dy + base.height as i32).min(bounds.bottom() as i32);

    if right <= left || bottom <= top {
        return None;
    }
    Some(Rect::new(
        left as u16,
        top as u16,
        (right - left) as u16,
        (bottom - top) as u16,
    ))
}
