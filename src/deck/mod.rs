//! Deck building: state, codec, and validation.
//!
//! ## Key Types
//!
//! - `DeckState`: Per-card inclusion counts for one session
//! - `encode` / `decode`: The deck-code text format
//! - `validate` / `Violation`: Construction-rule checking
//!
//! ## Failure Semantics
//!
//! `decode` is fail-fast and reports exactly one `DecodeError` per call.
//! `validate` never fails - it accumulates every violation and returns
//! them in catalog order. The asymmetry is part of the contract.

pub mod codec;
pub mod state;
pub mod validate;

pub use codec::{decode, encode, DecodeError, MAX_SAFE_INT};
pub use state::DeckState;
pub use validate::{
    validate, validate_with, DeckRules, Violation, MAX_DECK_TOTAL, MIN_DECK_TOTAL,
};
