//! Card catalog for a deck-building session.
//!
//! The `CardCatalog` stores every card legal in the session and fixes the
//! canonical order: all monster cards in provider order, then all spell
//! cards in provider order. Deck codes are emitted in this order, so the
//! order is an external contract and is never recomputed here.

use rustc_hash::{FxHashMap, FxHashSet};

use super::definition::{Card, CardId};

/// Ordered, immutable collection of card definitions.
///
/// Built once from the provider's two lists and read-only afterwards.
///
/// ## Example
///
/// ```
/// use deckforge::cards::{Card, CardCatalog, CardId};
///
/// let catalog = CardCatalog::from_lists(
///     vec![Card::monster(CardId::new(1), "Flame Drake", 2, "red", 3, 5, 4, 3)],
///     vec![Card::spell(CardId::new(2), "Mend", 4, "green", 1)],
/// );
///
/// let found = catalog.get(CardId::new(2)).unwrap();
/// assert_eq!(found.name, "Mend");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    /// Cards in canonical order: monsters first, then spells.
    cards: Vec<Card>,
    /// Index into `cards` by id.
    by_id: FxHashMap<CardId, usize>,
    /// Number of leading monster entries in `cards`.
    monster_count: usize,
}

impl CardCatalog {
    /// Create an empty catalog.
    ///
    /// Codec and validator calls against an empty catalog are well-defined:
    /// decoding any non-empty code fails on its first card id, and
    /// validation reports a deck size of 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from the provider's two ordered lists.
    ///
    /// Panics if any card id appears twice across the two lists.
    #[must_use]
    pub fn from_lists(monsters: Vec<Card>, spells: Vec<Card>) -> Self {
        let monster_count = monsters.len();
        let mut catalog = Self {
            cards: Vec::with_capacity(monster_count + spells.len()),
            by_id: FxHashMap::default(),
            monster_count,
        };

        for card in monsters.into_iter().chain(spells) {
            if catalog.by_id.contains_key(&card.id) {
                panic!("Card with ID {} already in catalog", card.id);
            }
            catalog.by_id.insert(card.id, catalog.cards.len());
            catalog.cards.push(card);
        }

        catalog
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.by_id.get(&id).map(|&i| &self.cards[i])
    }

    /// Check if a card ID exists in the catalog.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// The set of all valid card ids.
    #[must_use]
    pub fn ids(&self) -> FxHashSet<CardId> {
        self.by_id.keys().copied().collect()
    }

    /// Get the number of cards in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Iterate over the monster cards in provider order.
    pub fn monsters(&self) -> impl Iterator<Item = &Card> {
        self.cards[..self.monster_count].iter()
    }

    /// Iterate over the spell cards in provider order.
    pub fn spells(&self) -> impl Iterator<Item = &Card> {
        self.cards[self.monster_count..].iter()
    }
}
