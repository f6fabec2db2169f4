//! # deckforge
//!
//! Deck construction core for a trading-card game: assemble a deck against
//! a fixed card catalog, exchange it as a compact text deck code, and
//! check it against construction rules.
//!
//! ## Design Principles
//!
//! 1. **Catalog Order Is A Contract**: The catalog fixes canonical order
//!    (monsters in provider order, then spells) and never recomputes it.
//!    Deck codes are emitted in exactly this order.
//!
//! 2. **Pure Codec And Validator**: `encode`, `decode`, and `validate`
//!    read their inputs and return fresh values. A successful decode
//!    produces a new `DeckState` the caller swaps in; nothing mutates
//!    shared state, so concurrent reads of a snapshot are safe.
//!
//! 3. **One Error Or All Violations**: `decode` fails fast with a single
//!    `DecodeError`; `validate` accumulates every `Violation` and never
//!    fails. The asymmetry is deliberate and part of the contract.
//!
//! ## Modules
//!
//! - `cards`: Card definitions, the session catalog, provider records
//! - `deck`: Deck state, the deck-code codec, legality validation

pub mod cards;
pub mod deck;

// Re-export commonly used types
pub use crate::cards::{
    Card, CardCatalog, CardId, CardKind, CatalogProvider, MonsterCardRecord, SpellCardRecord,
};

pub use crate::deck::{
    decode, encode, validate, validate_with, DeckRules, DeckState, DecodeError, Violation,
    MAX_DECK_TOTAL, MAX_SAFE_INT, MIN_DECK_TOTAL,
};
