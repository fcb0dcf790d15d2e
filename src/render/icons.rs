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

//! Unicode symbols for the TUI.
//!
//! This module contains standardized icons used across the interface to
//! represent the swipe actions and deck state. These are selected for
//! compatibility with most modern terminal emulators and fonts.

// Action bar buttons (Unicode).
pub(crate) const ICON_LIKE: &str = "\u{2665}";
pub(crate) const ICON_NOPE: &str = "\u{2717}";
pub(crate) const ICON_SUPER_LIKE: &str = "\u{2605}";
pub(crate) const ICON_SHUFFLE: &str = "\u{27F3}";

// Text-style variant (using Variation Selector-15 [\u{FE0E}]), this forces
// terminals to render the icon as monochrome text rather than a colorful
// emoji, ensuring it respects the TUI's color styling.
pub(crate) const ICON_EMPTY_DECK: &str = "\u{1F525}\u{FE0E}";
