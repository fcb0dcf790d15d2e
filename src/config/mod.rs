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

//! Application configuration.
//!
//! This module manages the application configuration file. Only UI
//! preferences are persisted; swipe decisions never are.

use serde::{Deserialize, Serialize};
use thiserror::Error;

const CONFIG_NAME: &str = "swipedeck";

const DEFAULT_DECK_SIZE: usize = 12;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub version: u32,
    /// Number of profiles dealt on each replenish.
    pub deck_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            deck_size: DEFAULT_DECK_SIZE,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to store configuration: {0}")]
    Store(#[from] confy::ConfyError),
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

pub fn save_config(cfg: &AppConfig) -> Result<(), ConfigError> {
    confy::store(CONFIG_NAME, None, cfg)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_deals_a_dozen_cards() {
        let config = AppConfig::default();
        assert_eq!(config.version, 1);
        assert_eq!(config.deck_size, 12);
    }
}
