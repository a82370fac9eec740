use alloc::string::String;

use crate::common::{ConfigError, Marble};

/// A registered player: unique name, color, and the neutral marbles it has
/// pushed off the board.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    name: String,
    color: Marble,
    captured: u32,
}

impl Player {
    /// Validate a single `(name, color)` pair. Uniqueness across players is
    /// checked by the session.
    pub fn new(name: &str, color: Marble) -> Result<Self, ConfigError> {
        if name.is_empty() {
            return Err(ConfigError::EmptyName);
        }
        if !color.is_player_color() {
            return Err(ConfigError::InvalidColor(color));
        }
        Ok(Self {
            name: String::from(name),
            color,
            captured: 0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Marble {
        self.color
    }

    /// Neutral marbles captured so far.
    pub fn captured(&self) -> u32 {
        self.captured
    }

    pub(crate) fn add_captures(&mut self, n: u32) {
        self.captured += n;
    }
}
