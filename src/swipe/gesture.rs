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

//! Pointer gesture tracking.
//!
//! At most one gesture session exists at any time. A session records the
//! origin of the drag and the card it targets; it holds the card's
//! identifier only, never the card itself, so a card invalidated mid-drag
//! simply fails the lookup when the session ends.

use crate::model::{Offset, Point};

/// Card tilt in degrees per pixel of horizontal displacement.
pub(crate) const K_ROT: f32 = 0.05;

/// Rotation component of a card's visual transform for a live offset.
pub(crate) fn rotation_for(offset: Offset) -> f32 {
    offset.dx * K_ROT
}

/// The transient record of one in-progress drag.
#[derive(Debug, Clone)]
pub(crate) struct GestureSession {
    card_id: String,
    origin: Point,
    current: Point,
}

impl GestureSession {
    fn new(card_id: &str, origin: Point) -> Self {
        Self {
            card_id: card_id.to_string(),
            origin,
            current: origin,
        }
    }

    pub(crate) fn offset(&self) -> Offset {
        Offset::between(self.origin, self.current)
    }
}

/// Owns the zero-or-one active [`GestureSession`].
pub(crate) struct GestureTracker {
    session: Option<GestureSession>,
}

impl GestureTracker {
    pub(crate) fn new() -> Self {
        Self { session: None }
    }

    pub(crate) fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Identifier of the card targeted by the active session, if any.
    pub(crate) fn target(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.card_id.as_str())
    }

    /// Opens a session against `card_id` with offset (0, 0).
    ///
    /// A no-op returning `false` while another session is active.
    pub(crate) fn begin(&mut self, point: Point, card_id: &str) -> bool {
        if self.session.is_some() {
            return false;
        }
        self.session = Some(GestureSession::new(card_id, point));
        true
    }

    /// Advances the active session to a new pointer position.
    ///
    /// Returns the recomputed offset, or `None` when no session is active.
    pub(crate) fn update(&mut self, point: Point) -> Option<Offset> {
        let session = self.session.as_mut()?;
        session.current = point;
        Some(session.offset())
    }

    /// Finalizes and discards the active session.
    ///
    /// Returns the target card identifier and the final offset. The session
    /// is cleared unconditionally, even if the target card no longer exists.
    pub(crate) fn end(&mut self, point: Point) -> Option<(String, Offset)> {
        let mut session = self.session.take()?;
        session.current = point;
        let offset = session.offset();
        Some((session.card_id, offset))
    }

    /// Discards the active session without classification.
    pub(crate) fn cancel(&mut self) {
        self.session = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_opens_session_with_zero_offset() {
        let mut tracker = GestureTracker::new();
        assert!(tracker.begin(Point::new(10.0, 20.0), "p_0"));
        assert!(tracker.is_active());
        assert_eq!(tracker.target(), Some("p_0"));
        let offset = tracker.update(Point::new(10.0, 20.0)).unwrap();
        assert_eq!(offset, Offset::default());
    }

    #[test]
    fn begin_is_noop_while_session_active() {
        let mut tracker = GestureTracker::new();
        assert!(tracker.begin(Point::new(0.0, 0.0), "p_0"));
        assert!(!tracker.begin(Point::new(5.0, 5.0), "p_1"));
        assert_eq!(tracker.target(), Some("p_0"));
    }

    #[test]
    fn update_tracks_offset_relative_to_origin() {
        let mut tracker = GestureTracker::new();
        tracker.begin(Point::new(100.0, 200.0), "p_0");
        let offset = tracker.update(Point::new(130.0, 180.0)).unwrap();
        assert_eq!(offset, Offset::new(30.0, -20.0));
    }

    #[test]
    fn update_without_session_is_noop() {
        let mut tracker = GestureTracker::new();
        assert!(tracker.update(Point::new(1.0, 1.0)).is_none());
    }

    #[test]
    fn end_returns_final_offset_and_clears_session() {
        let mut tracker = GestureTracker::new();
        tracker.begin(Point::new(0.0, 0.0), "p_0");
        let (card_id, offset) = tracker.end(Point::new(150.0, 0.0)).unwrap();
        assert_eq!(card_id, "p_0");
        assert_eq!(offset, Offset::new(150.0, 0.0));
        assert!(!tracker.is_active());
    }

    #[test]
    fn end_without_session_is_noop() {
        let mut tracker = GestureTracker::new();
        assert!(tracker.end(Point::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn rotation_is_proportional_to_horizontal_offset() {
        assert_eq!(rotation_for(Offset::new(100.0, 0.0)), 5.0);
        assert_eq!(rotation_for(Offset::new(-60.0, 40.0)), -3.0);
        assert_eq!(rotation_for(Offset::default()), 0.0);
    }
}
