//! Players and roster parsing

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::board::{Category, SpaceId};
use crate::error::ConfigurationError;

/// Separator between name and color in a roster token
pub const ROSTER_DELIMITER: char = '_';

/// A requested player, before normalization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSpec {
    pub name: String,
    pub color: String,
}

impl PlayerSpec {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }

    /// Parse a single `name_color` token
    pub fn parse(token: &str) -> Result<Self, ConfigurationError> {
        let mut parts = token.split(ROSTER_DELIMITER);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(name), Some(color), None) => Ok(Self::new(name, color)),
            _ => Err(ConfigurationError::MalformedToken {
                token: token.to_string(),
                delimiter: ROSTER_DELIMITER,
            }),
        }
    }
}

/// Parse an ordered list of `name_color` tokens
///
/// Any malformed token rejects the whole roster.
pub fn parse_roster<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<PlayerSpec>, ConfigurationError> {
    if tokens.is_empty() {
        return Err(ConfigurationError::EmptyRoster);
    }
    tokens.iter().map(|t| PlayerSpec::parse(t.as_ref())).collect()
}

/// A player in the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Upper-cased, length-limited display name
    pub name: String,
    pub color: String,
    /// Space the token currently sits on
    pub token: SpaceId,
    /// Wedges collected so far
    pub collected: BTreeSet<Category>,
}

impl Player {
    /// Normalize a spec into a player standing on `start`
    pub fn from_spec(
        index: usize,
        spec: &PlayerSpec,
        max_name_len: usize,
        start: SpaceId,
    ) -> Result<Self, ConfigurationError> {
        let name = spec.name.trim();
        let color = spec.color.trim();
        if name.is_empty() || color.is_empty() {
            return Err(ConfigurationError::BlankField { index });
        }
        Ok(Self {
            name: name.chars().take(max_name_len).collect::<String>().to_uppercase(),
            color: color.to_string(),
            token: start,
            collected: BTreeSet::new(),
        })
    }
}
