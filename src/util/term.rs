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

//! Terminal emulator styling helpers.
//!
//! Background colour control via OSC (Operating System Command) escape
//! sequences. Requires an emulator that understands OSC 11/111; the common
//! modern ones (XTerm, iTerm2, Alacritty, Kitty) all do.

use std::io::{self, Write};

// Writes one OSC sequence and flushes immediately so the emulator applies
// it before the next frame.
fn emit_osc(sequence: &str) {
    print!("\x1b]{}\x07", sequence);
    io::stdout().flush().unwrap();
}

/// Paints the whole terminal window background (OSC 11).
///
/// Takes a CSS-style hex colour such as `"#18101c"`. Without this the deck
/// would sit on a black outline wherever the alternate screen does not
/// cover.
pub(crate) fn set_terminal_bg(hex_color: &str) {
    emit_osc(&format!("11;{}", hex_color));
}

/// Hands the background colour back to the emulator's own configuration
/// (OSC 111). Part of teardown.
pub(crate) fn reset_terminal_bg() {
    emit_osc("111");
}
