use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Unique numeric identifier for a card
///
/// Card IDs are drawn from a single sequence across the whole board, so two
/// cards on different lists never share an ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(u64);

impl CardId {
    /// Creates a new CardId from a counter value
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the numeric value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl FromStr for CardId {
    type Err = crate::error::FudaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| crate::error::FudaError::InvalidCardId(s.to_string()))
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A labeled unit of content belonging to exactly one list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub text: String,
}

impl Card {
    /// Creates a new card with the given ID and label
    pub fn new(id: CardId, text: String) -> Self {
        Self { id, text }
    }

    /// Replaces the card label
    pub fn set_text(&mut self, text: String) {
        self.text = text;
    }
}
