use crate::domain::card::{Card, CardId};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Unique numeric identifier for a list
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListId(u64);

impl ListId {
    /// Creates a new ListId from a counter value
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the numeric value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl FromStr for ListId {
    type Err = crate::error::FudaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| crate::error::FudaError::InvalidListId(s.to_string()))
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named, ordered container of cards
///
/// Cards belong to exactly one list; `cards` keeps insertion order, which is
/// the display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub id: ListId,
    pub name: String,
    pub cards: Vec<Card>,
}

impl List {
    /// Creates a new empty list with the given ID and name
    pub fn new(id: ListId, name: String) -> Self {
        Self {
            id,
            name,
            cards: Vec::new(),
        }
    }

    /// Replaces the list name
    pub fn rename(&mut self, name: String) {
        self.name = name;
    }

    /// Appends a card at the end of the list
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Looks up a card by ID
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Looks up a card by ID for mutation
    pub fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|card| card.id == id)
    }

    /// Removes a card by ID, returning it
    pub fn remove_card(&mut self, id: CardId) -> Result<Card, crate::error::FudaError> {
        match self.cards.iter().position(|card| card.id == id) {
            Some(pos) => Ok(self.cards.remove(pos)),
            None => Err(crate::error::FudaError::CardNotFound(id.to_string())),
        }
    }
}
