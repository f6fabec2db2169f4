//! Catalog provider interface.
//!
//! The catalog is fetched by an external collaborator as two JSON lists,
//! monster cards and spell cards. This module owns the wire shape of those
//! lists and the conversion into a `CardCatalog`. Retrieval itself (HTTP,
//! retries, latency) stays behind the `CatalogProvider` trait; the core
//! only ever sees two already-fetched lists, supplied atomically.
//!
//! Records may carry a per-card `inDeck` count - the copies of the card
//! already selected when the session was saved server-side. Those counts
//! seed the session's initial `DeckState`.

use serde::{Deserialize, Serialize};

use super::catalog::CardCatalog;
use super::definition::{Card, CardId};
use crate::deck::DeckState;

/// Wire record for one monster card.
///
/// Field names follow the provider's JSON (camelCase).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonsterCardRecord {
    pub id: u64,
    pub name: String,
    pub max_same_cards: u32,
    pub color: String,
    pub energy_cost: u32,
    #[serde(default)]
    pub effect_descriptions: Vec<String>,
    /// Copies already in the deck when the session was loaded.
    #[serde(default)]
    pub in_deck: u64,
    pub hp: i64,
    pub attack: i64,
    pub defense: i64,
}

/// Wire record for one spell card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellCardRecord {
    pub id: u64,
    pub name: String,
    pub max_same_cards: u32,
    pub color: String,
    pub energy_cost: u32,
    #[serde(default)]
    pub effect_descriptions: Vec<String>,
    /// Copies already in the deck when the session was loaded.
    #[serde(default)]
    pub in_deck: u64,
}

impl From<MonsterCardRecord> for Card {
    fn from(r: MonsterCardRecord) -> Self {
        Self {
            id: CardId::new(r.id),
            name: r.name,
            max_same_cards: r.max_same_cards,
            color: r.color,
            energy_cost: r.energy_cost,
            effect_descriptions: r.effect_descriptions,
            kind: super::definition::CardKind::Monster {
                hp: r.hp,
                attack: r.attack,
                defense: r.defense,
            },
        }
    }
}

impl From<SpellCardRecord> for Card {
    fn from(r: SpellCardRecord) -> Self {
        Self {
            id: CardId::new(r.id),
            name: r.name,
            max_same_cards: r.max_same_cards,
            color: r.color,
            energy_cost: r.energy_cost,
            effect_descriptions: r.effect_descriptions,
            kind: super::definition::CardKind::Spell,
        }
    }
}

/// Parse the provider's monster-card list payload.
pub fn monsters_from_json(payload: &str) -> serde_json::Result<Vec<MonsterCardRecord>> {
    serde_json::from_str(payload)
}

/// Parse the provider's spell-card list payload.
pub fn spells_from_json(payload: &str) -> serde_json::Result<Vec<SpellCardRecord>> {
    serde_json::from_str(payload)
}

/// Source of the session's two card lists.
///
/// Implementations own transport and failure handling. The two lists must
/// be delivered in the provider's order - that order becomes the
/// catalog's canonical order for the whole session.
pub trait CatalogProvider {
    type Error;

    fn fetch_monster_cards(&self) -> Result<Vec<MonsterCardRecord>, Self::Error>;

    fn fetch_spell_cards(&self) -> Result<Vec<SpellCardRecord>, Self::Error>;
}

impl CardCatalog {
    /// Build a catalog and its seeded deck state from provider records.
    ///
    /// Nonzero `in_deck` counts become explicit `DeckState` entries; zero
    /// counts leave no entry.
    ///
    /// Panics if any card id appears twice across the two lists.
    #[must_use]
    pub fn from_records(
        monsters: Vec<MonsterCardRecord>,
        spells: Vec<SpellCardRecord>,
    ) -> (Self, DeckState) {
        let mut deck = DeckState::new();
        for r in &monsters {
            deck.set_count(CardId::new(r.id), r.in_deck);
        }
        for r in &spells {
            deck.set_count(CardId::new(r.id), r.in_deck);
        }

        let catalog = Self::from_lists(
            monsters.into_iter().map(Card::from).collect(),
            spells.into_iter().map(Card::from).collect(),
        );

        (catalog, deck)
    }

    /// Fetch both lists from a provider and build the session catalog.
    pub fn from_provider<P: CatalogProvider>(
        provider: &P,
    ) -> Result<(Self, DeckState), P::Error> {
        let monsters = provider.fetch_monster_cards()?;
        let spells = provider.fetch_spell_cards()?;
        Ok(Self::from_records(monsters, spells))
    }
}
