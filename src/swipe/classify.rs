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

//! Swipe decision classification.
//!
//! Maps the final offset of a completed drag to a [`Decision`]. Pure and
//! stateless; the thresholds below are the single source of truth for both
//! classification and the feedback progress ratios.

use crate::model::{Decision, Offset};

/// Minimum horizontal magnitude (px) for a Like or Nope.
pub(crate) const SWIPE_THRESHOLD: f32 = 100.0;

/// Minimum upward magnitude (px) for a Super Like.
pub(crate) const SUPER_LIKE_THRESHOLD: f32 = 120.0;

/// Maximum horizontal drift (px) still counted as a Super Like.
pub(crate) const SUPER_LIKE_HORIZONTAL_LIMIT: f32 = 80.0;

/// Classifies a final drag offset into a decision.
///
/// The upward check runs first: a mostly vertical gesture is a Super Like
/// even when it also crosses a horizontal threshold. Sub-threshold offsets
/// cancel the interaction.
pub(crate) fn classify(offset: Offset) -> Decision {
    if offset.dy < -SUPER_LIKE_THRESHOLD && offset.dx.abs() < SUPER_LIKE_HORIZONTAL_LIMIT {
        Decision::SuperLike
    } else if offset.dx > SWIPE_THRESHOLD {
        Decision::Like
    } else if offset.dx < -SWIPE_THRESHOLD {
        Decision::Nope
    } else {
        Decision::Cancel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_xy(dx: f32, dy: f32) -> Decision {
        classify(Offset::new(dx, dy))
    }

    #[test]
    fn upward_drag_is_super_like_regardless_of_drift_sign() {
        assert_eq!(classify_xy(0.0, -150.0), Decision::SuperLike);
        assert_eq!(classify_xy(79.0, -121.0), Decision::SuperLike);
        assert_eq!(classify_xy(-79.0, -121.0), Decision::SuperLike);
    }

    #[test]
    fn rightward_drag_past_threshold_is_like() {
        assert_eq!(classify_xy(150.0, 0.0), Decision::Like);
        assert_eq!(classify_xy(101.0, 50.0), Decision::Like);
    }

    #[test]
    fn leftward_drag_past_threshold_is_nope() {
        assert_eq!(classify_xy(-150.0, 0.0), Decision::Nope);
        assert_eq!(classify_xy(-101.0, -50.0), Decision::Nope);
    }

    #[test]
    fn vertical_priority_beats_horizontal_thresholds() {
        // Crosses both the upward and the horizontal threshold; the upward
        // check wins as long as the drift bound holds.
        assert_eq!(classify_xy(101.0, -121.0), Decision::Like);
        assert_eq!(classify_xy(-101.0, -121.0), Decision::Nope);
        assert_eq!(classify_xy(79.0, -200.0), Decision::SuperLike);
    }

    #[test]
    fn excessive_drift_falls_through_to_horizontal_checks() {
        // Drift of 90 disqualifies the super like, and 90 is still below the
        // horizontal threshold, so the whole gesture cancels.
        assert_eq!(classify_xy(90.0, -150.0), Decision::Cancel);
    }

    #[test]
    fn sub_threshold_offsets_cancel() {
        assert_eq!(classify_xy(0.0, 0.0), Decision::Cancel);
        assert_eq!(classify_xy(50.0, 0.0), Decision::Cancel);
        assert_eq!(classify_xy(-99.0, 30.0), Decision::Cancel);
        assert_eq!(classify_xy(0.0, 150.0), Decision::Cancel);
    }

    #[test]
    fn thresholds_are_strict() {
        assert_eq!(classify_xy(100.0, 0.0), Decision::Cancel);
        assert_eq!(classify_xy(-100.0, 0.0), Decision::Cancel);
        assert_eq!(classify_xy(0.0, -120.0), Decision::Cancel);
        assert_eq!(classify_xy(80.0, -121.0), Decision::Cancel);
    }
}
