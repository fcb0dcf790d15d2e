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

/// Formats the job/city line shown beneath a card title.
pub(crate) fn format_meta(title: &str, city: &str) -> String {
    format!("{} \u{2022} {}", title, city)
}

/// Joins a profile's tags into a single chips line.
pub(crate) fn format_tags(tags: &[String]) -> String {
    tags.join(" \u{00B7} ")
}

/// Formats the live card tilt as a readout like `⟳ 3.2°`.
///
/// Tilts below a tenth of a degree render as an empty string.
pub(crate) fn format_tilt(degrees: f32) -> String {
    if degrees.abs() < 0.1 {
        return String::new();
    }
    let arrow = if degrees > 0.0 { "\u{27F3}" } else { "\u{27F2}" };
    format!("{} {:.1}\u{00B0}", arrow, degrees.abs())
}
