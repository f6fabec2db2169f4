//! Card definitions - static card data.
//!
//! `Card` holds the immutable properties of a catalog entry. For example,
//! "Flame Drake" costs 3 energy and at most 2 copies may be included in a
//! deck - these are part of the definition.
//!
//! Per-deck data (how many copies are currently included) is stored
//! separately in `DeckState`.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card definition.
///
/// Identifies the "type" of card (e.g., "Flame Drake"), not a copy in a
/// deck. Ids appear verbatim in deck codes, so `Display` is the bare
/// decimal value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u64);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Variant data for the two card families.
///
/// The variant is fixed when the card is constructed and never changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardKind {
    /// Monster cards carry combat stats.
    Monster {
        hp: i64,
        attack: i64,
        defense: i64,
    },
    /// Spell cards carry no extra data.
    Spell,
}

/// Static card definition.
///
/// Contains the unchanging data about a catalog entry. `color` is a
/// display tag only; validation never reads it.
///
/// ## Example
///
/// ```
/// use deckforge::cards::{Card, CardId};
///
/// let drake = Card::monster(CardId::new(1), "Flame Drake", 2, "red", 3, 5, 4, 3)
///     .with_effect("Deals 2 damage when summoned.");
///
/// assert!(drake.is_monster());
/// assert_eq!(drake.max_same_cards, 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier for this card.
    pub id: CardId,

    /// Card name (for display/debugging).
    pub name: String,

    /// Upper bound on copies of this card in one deck.
    pub max_same_cards: u32,

    /// Display color tag. Irrelevant to validation.
    pub color: String,

    /// Energy cost to play the card.
    pub energy_cost: u32,

    /// Rules text, one entry per effect.
    pub effect_descriptions: Vec<String>,

    /// Monster or spell variant data.
    pub kind: CardKind,
}

impl Card {
    /// Create a monster card.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn monster(
        id: CardId,
        name: impl Into<String>,
        max_same_cards: u32,
        color: impl Into<String>,
        energy_cost: u32,
        hp: i64,
        attack: i64,
        defense: i64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            max_same_cards,
            color: color.into(),
            energy_cost,
            effect_descriptions: Vec::new(),
            kind: CardKind::Monster { hp, attack, defense },
        }
    }

    /// Create a spell card.
    #[must_use]
    pub fn spell(
        id: CardId,
        name: impl Into<String>,
        max_same_cards: u32,
        color: impl Into<String>,
        energy_cost: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            max_same_cards,
            color: color.into(),
            energy_cost,
            effect_descriptions: Vec::new(),
            kind: CardKind::Spell,
        }
    }

    /// Append an effect description (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, text: impl Into<String>) -> Self {
        self.effect_descriptions.push(text.into());
        self
    }

    /// Is this a monster card?
    #[must_use]
    pub fn is_monster(&self) -> bool {
        matches!(self.kind, CardKind::Monster { .. })
    }

    /// Is this a spell card?
    #[must_use]
    pub fn is_spell(&self) -> bool {
        matches!(self.kind, CardKind::Spell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "42");
    }

    #[test]
    fn test_monster_builder() {
        let card = Card::monster(CardId::new(1), "Flame Drake", 2, "red", 3, 5, 4, 3)
            .with_effect("Deals 2 damage when summoned.");

        assert_eq!(card.name, "Flame Drake");
        assert_eq!(card.id, CardId::new(1));
        assert!(card.is_monster());
        assert!(!card.is_spell());
        assert_eq!(card.kind, CardKind::Monster { hp: 5, attack: 4, defense: 3 });
        assert_eq!(card.effect_descriptions.len(), 1);
    }

    #[test]
    fn test_spell_builder() {
        let card = Card::spell(CardId::new(7), "Mind Surge", 4, "blue", 2);

        assert!(card.is_spell());
        assert!(!card.is_monster());
        assert_eq!(card.energy_cost, 2);
        assert!(card.effect_descriptions.is_empty());
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::spell(CardId::new(3), "Mend", 4, "green", 1)
            .with_effect("Restore 3 hp.");

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();

        assert_eq!(card, deserialized);
    }
}
