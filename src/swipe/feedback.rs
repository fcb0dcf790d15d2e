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

//! Directional feedback intensities.
//!
//! Maps a live drag offset to the three directional indicators on the active
//! card. Each direction is an independent clamped channel; an ambiguous
//! diagonal drag may light both a horizontal indicator and the super-like
//! indicator at once. The final decision is only computed at release, so the
//! overlap is left visible rather than suppressed.

use crate::model::Offset;
use crate::swipe::classify::{
    SUPER_LIKE_HORIZONTAL_LIMIT, SUPER_LIKE_THRESHOLD, SWIPE_THRESHOLD,
};

const MIN_SCALE: f32 = 0.8;
const SCALE_RANGE: f32 = 0.2;

/// The three directional indicators on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IndicatorKind {
    Like,
    Nope,
    SuperLike,
}

impl IndicatorKind {
    pub(crate) const ALL: [IndicatorKind; 3] = [
        IndicatorKind::Like,
        IndicatorKind::Nope,
        IndicatorKind::SuperLike,
    ];

    pub(crate) fn label(&self) -> &'static str {
        match self {
            IndicatorKind::Like => "LIKE",
            IndicatorKind::Nope => "NOPE",
            IndicatorKind::SuperLike => "SUPER LIKE",
        }
    }
}

/// Computed intensity of one directional indicator.
///
/// `opacity` is the clamped progress ratio toward the direction's threshold;
/// `scale` grows from 0.8 to 1.0 with that ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Indicator {
    pub(crate) kind: IndicatorKind,
    pub(crate) opacity: f32,
    pub(crate) scale: f32,
}

impl Indicator {
    fn hidden(kind: IndicatorKind) -> Self {
        Self {
            kind,
            opacity: 0.0,
            scale: MIN_SCALE,
        }
    }

    fn at_progress(kind: IndicatorKind, progress: f32) -> Self {
        Self {
            kind,
            opacity: progress,
            scale: MIN_SCALE + progress * SCALE_RANGE,
        }
    }

    pub(crate) fn visible(&self) -> bool {
        self.opacity > 0.0
    }
}

fn x_progress(offset: Offset) -> f32 {
    (offset.dx.abs() / SWIPE_THRESHOLD).min(1.0)
}

fn y_progress(offset: Offset) -> f32 {
    (offset.dy.abs() / SUPER_LIKE_THRESHOLD).min(1.0)
}

/// Intensity of a single indicator for a live offset.
pub(crate) fn indicator(kind: IndicatorKind, offset: Offset) -> Indicator {
    let visible = match kind {
        IndicatorKind::Like => offset.dx > 0.0,
        IndicatorKind::Nope => offset.dx < 0.0,
        IndicatorKind::SuperLike => {
            offset.dy < 0.0 && offset.dx.abs() < SUPER_LIKE_HORIZONTAL_LIMIT
        }
    };
    if !visible {
        return Indicator::hidden(kind);
    }

    let progress = match kind {
        IndicatorKind::Like | IndicatorKind::Nope => x_progress(offset),
        IndicatorKind::SuperLike => y_progress(offset),
    };
    Indicator::at_progress(kind, progress)
}

/// Intensities of all three indicators for a live offset.
pub(crate) fn indicators(offset: Offset) -> [Indicator; 3] {
    IndicatorKind::ALL.map(|kind| indicator(kind, offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indicator_xy(kind: IndicatorKind, dx: f32, dy: f32) -> Indicator {
        indicator(kind, Offset::new(dx, dy))
    }

    #[test]
    fn neutral_offset_hides_all_indicators() {
        for ind in indicators(Offset::default()) {
            assert!(!ind.visible());
            assert_eq!(ind.scale, 0.8);
        }
    }

    #[test]
    fn like_progress_follows_rightward_offset() {
        let ind = indicator_xy(IndicatorKind::Like, 50.0, 0.0);
        assert_eq!(ind.opacity, 0.5);
        assert!((ind.scale - 0.9).abs() < f32::EPSILON);
        assert!(!indicator_xy(IndicatorKind::Nope, 50.0, 0.0).visible());
    }

    #[test]
    fn nope_progress_follows_leftward_offset() {
        let ind = indicator_xy(IndicatorKind::Nope, -75.0, 0.0);
        assert_eq!(ind.opacity, 0.75);
        assert!(!indicator_xy(IndicatorKind::Like, -75.0, 0.0).visible());
    }

    #[test]
    fn progress_clamps_at_full_intensity() {
        let ind = indicator_xy(IndicatorKind::Like, 250.0, 0.0);
        assert_eq!(ind.opacity, 1.0);
        assert_eq!(ind.scale, 1.0);
        let ind = indicator_xy(IndicatorKind::SuperLike, 0.0, -300.0);
        assert_eq!(ind.opacity, 1.0);
    }

    #[test]
    fn super_like_requires_upward_offset_within_drift_bound() {
        assert!(indicator_xy(IndicatorKind::SuperLike, 0.0, -60.0).visible());
        assert!(!indicator_xy(IndicatorKind::SuperLike, 0.0, 60.0).visible());
        assert!(!indicator_xy(IndicatorKind::SuperLike, 90.0, -60.0).visible());
        let ind = indicator_xy(IndicatorKind::SuperLike, 0.0, -60.0);
        assert!((ind.opacity - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn ambiguous_diagonal_lights_two_channels() {
        // Within the drift bound and moving both right and up: the like and
        // super-like channels are both partially lit, by design.
        let offset = Offset::new(60.0, -100.0);
        let [like, nope, super_like] = indicators(offset);
        assert!(like.visible());
        assert!(!nope.visible());
        assert!(super_like.visible());
        assert_eq!(like.opacity, 0.6);
        assert!((super_like.opacity - 100.0 / 120.0).abs() < f32::EPSILON);
    }
}
