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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette and provides utilities
//! for converting colors between Ratatui's internal representation and
//! external formats (such as hexadecimal strings) used for terminal emulator
//! styling. Indicator opacity is emulated by blending toward the background
//! color, see [`Theme::fade`].

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,

    pub(crate) card_border_colour: Color,
    pub(crate) card_title_fg: Color,
    pub(crate) card_meta_fg: Color,
    pub(crate) card_bio_fg: Color,
    pub(crate) chip_fg: Color,
    pub(crate) stack_fg: Color,

    pub(crate) like_colour: Color,
    pub(crate) nope_colour: Color,
    pub(crate) super_like_colour: Color,

    pub(crate) empty_fg: Color,
    pub(crate) status_fg: Color,
    pub(crate) commander_colour: Color,
    pub(crate) commander_bg_colour: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(24, 16, 28),
            accent_colour: Color::Rgb(253, 90, 120),
            border_colour: Color::Rgb(102, 102, 102),

            card_border_colour: Color::Rgb(150, 130, 160),
            card_title_fg: Color::Rgb(255, 255, 255),
            card_meta_fg: Color::Rgb(179, 157, 219),
            card_bio_fg: Color::Rgb(200, 195, 205),
            chip_fg: Color::Rgb(255, 215, 0),
            stack_fg: Color::Rgb(70, 55, 80),

            like_colour: Color::Rgb(76, 217, 100),
            nope_colour: Color::Rgb(255, 59, 48),
            super_like_colour: Color::Rgb(90, 200, 250),

            empty_fg: Color::Rgb(162, 161, 166),
            status_fg: Color::Rgb(162, 161, 166),
            commander_colour: Color::Rgb(255, 255, 255),
            commander_bg_colour: Color::Rgb(40, 28, 46),
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string.
    ///
    /// This is primarily used to set the terminal emulator's background color
    /// via escape sequences.
    ///
    /// # Panics
    ///
    /// Panics if the provided color is not a [`Color::Rgb`] variant.
    pub(crate) fn to_hex(colour: Color) -> String {
        match colour {
            Color::Rgb(r, g, b) => format!("#{:02x}{:02x}{:02x}", r, g, b),
            _ => panic!("Unexpected non-RGB colour"),
        }
    }

    /// Blends `colour` toward the theme background.
    ///
    /// `intensity` 0.0 yields the background itself, 1.0 the unmodified
    /// colour. Non-RGB colours pass through untouched.
    pub(crate) fn fade(&self, colour: Color, intensity: f32) -> Color {
        let t = intensity.clamp(0.0, 1.0);
        match (colour, self.background_colour) {
            (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) => Color::Rgb(
                lerp(br, r, t),
                lerp(bg, g, t),
                lerp(bb, b, t),
            ),
            _ => colour,
        }
    }
}

fn lerp(from: u8, to: u8, t: f32) -> u8 {
    (from as f32 + (to as f32 - from as f32) * t).round() as u8
}
