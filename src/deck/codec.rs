//! Deck-code codec.
//!
//! A deck code is the canonical text form of a deck:
//!
//! ```text
//! code  := "" | pair ("." pair)*
//! pair  := count "." id
//! count := [+]?[1-9][0-9]*
//! id    := [+]?[1-9][0-9]*
//! ```
//!
//! `encode` walks the catalog in canonical order and emits a
//! `"<count>.<id>"` segment for every card with a nonzero count; the empty
//! deck encodes to `""`. `decode` is fail-fast: the first violated rule
//! (token parity, then token syntax left to right, then pair semantics
//! left to right) produces exactly one error. Validation against
//! construction rules is separate - decode happily returns counts above a
//! card's per-deck maximum.

use thiserror::Error;

use super::state::DeckState;
use crate::cards::{CardCatalog, CardId};

/// Largest integer a deck-code literal may carry: 2^53 - 1.
///
/// Deck codes are exchanged with JavaScript clients, so both counts and
/// ids are bounded by the largest integer an IEEE-754 double represents
/// exactly.
pub const MAX_SAFE_INT: u64 = (1 << 53) - 1;

/// A rejected deck code. Exactly one is reported per decode call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The code split into an odd number of tokens.
    #[error("deck code has an odd number of tokens")]
    MalformedFormat,

    /// A token is not a positive integer literal within bounds.
    #[error("token `{0}` is not a positive integer")]
    InvalidToken(String),

    /// A pair referenced an id outside the catalog.
    #[error("card id {0} is not in the catalog")]
    UnknownCardId(CardId),

    /// A pair re-assigned an id already assigned in the same code.
    #[error("card id {0} appears more than once")]
    DuplicateCardId(CardId),
}

/// Encode a deck as its canonical code.
///
/// Catalog order, zero counts skipped. Never fails; the empty deck
/// returns `""`.
///
/// ## Example
///
/// ```
/// use deckforge::cards::{Card, CardCatalog, CardId};
/// use deckforge::deck::{encode, DeckState};
///
/// let catalog = CardCatalog::from_lists(
///     vec![Card::monster(CardId::new(1), "Flame Drake", 2, "red", 3, 5, 4, 3)],
///     vec![Card::spell(CardId::new(2), "Mend", 4, "green", 1)],
/// );
///
/// let mut deck = DeckState::new();
/// deck.set_count(CardId::new(2), 3);
/// deck.set_count(CardId::new(1), 2);
///
/// assert_eq!(encode(&deck, &catalog), "2.1.3.2");
/// ```
#[must_use]
pub fn encode(state: &DeckState, catalog: &CardCatalog) -> String {
    let segments: Vec<String> = catalog
        .iter()
        .filter_map(|card| {
            let count = state.count_of(card.id);
            (count > 0).then(|| format!("{}.{}", count, card.id))
        })
        .collect();
    segments.join(".")
}

/// Decode a deck code against a catalog.
///
/// On success the returned state's explicit entries are exactly the
/// decoded pairs; every other catalog id is implicitly at 0. Any existing
/// state the caller holds is untouched on failure - the caller swaps in
/// the new state only after a successful decode.
pub fn decode(code: &str, catalog: &CardCatalog) -> Result<DeckState, DecodeError> {
    // "" splits to one empty token in Rust, but the grammar reads it as
    // zero tokens: the all-zero deck.
    if code.is_empty() {
        return Ok(DeckState::new());
    }

    let tokens: Vec<&str> = code.split('.').collect();
    if tokens.len() % 2 != 0 {
        return Err(DecodeError::MalformedFormat);
    }

    // Whole-token syntax pass before any pair-level check.
    let mut values = Vec::with_capacity(tokens.len());
    for token in &tokens {
        let value = parse_literal(token)
            .ok_or_else(|| DecodeError::InvalidToken((*token).to_string()))?;
        values.push(value);
    }

    let mut state = DeckState::new();
    for pair in values.chunks_exact(2) {
        let (count, id) = (pair[0], CardId::new(pair[1]));
        if !catalog.contains(id) {
            return Err(DecodeError::UnknownCardId(id));
        }
        // Counts are at least 1, so a nonzero entry marks an earlier pair.
        if state.count_of(id) != 0 {
            return Err(DecodeError::DuplicateCardId(id));
        }
        state.set_count(id, count);
    }

    Ok(state)
}

/// Parse one token of the positive-integer grammar.
///
/// Optional leading `+`, a nonzero leading digit, decimal digits only, and
/// a value within [`MAX_SAFE_INT`]. Anything else is `None`.
fn parse_literal(token: &str) -> Option<u64> {
    let digits = token.strip_prefix('+').unwrap_or(token);

    let mut bytes = digits.bytes();
    if !matches!(bytes.next(), Some(b'1'..=b'9')) {
        return None;
    }
    if !bytes.all(|b| b.is_ascii_digit()) {
        return None;
    }

    // Literals too large for u64 are out of bounds a fortiori.
    let value: u64 = digits.parse().ok()?;
    (value <= MAX_SAFE_INT).then_some(value)
}
