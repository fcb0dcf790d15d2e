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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application—Profiles,
//! Cards, the Deck, pointer geometry, and swipe Decisions—shared between the
//! gesture engine and the UI layers.

pub(crate) mod deck;

/// A pointer position in the scaled pixel space used by the gesture engine.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct Point {
    pub(crate) x: f32,
    pub(crate) y: f32,
}

impl Point {
    pub(crate) fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Displacement of the pointer relative to the origin of a gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct Offset {
    pub(crate) dx: f32,
    pub(crate) dy: f32,
}

impl Offset {
    pub(crate) fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    /// The displacement from `origin` to `current`.
    pub(crate) fn between(origin: Point, current: Point) -> Self {
        Self {
            dx: current.x - origin.x,
            dy: current.y - origin.y,
        }
    }
}

/// The classified outcome of a completed swipe interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Decision {
    Like,
    Nope,
    SuperLike,
    Cancel,
}

impl Decision {
    /// Human-readable label for the status line.
    pub(crate) fn label(&self) -> &'static str {
        match self {
            Decision::Like => "Like",
            Decision::Nope => "Nope",
            Decision::SuperLike => "Super Like",
            Decision::Cancel => "Cancel",
        }
    }
}

/// One synthetic profile record.
///
/// Every field except `id` is opaque display payload as far as the gesture
/// engine is concerned.
#[derive(Debug, Clone)]
pub(crate) struct Profile {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) age: u32,
    pub(crate) city: String,
    pub(crate) title: String,
    pub(crate) bio: String,
    pub(crate) tags: Vec<String>,
    pub(crate) img: String,
}
