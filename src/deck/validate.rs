//! Deck legality validation.
//!
//! `validate` checks a deck against construction rules and returns every
//! violation it finds, in catalog order, as display-ready values. Unlike
//! the codec it never short-circuits across cards: each card is checked
//! independently and the results accumulate. The aggregate deck-size rule
//! is consulted only when every per-card check passed.

use serde::{Deserialize, Serialize};

use super::codec::MAX_SAFE_INT;
use super::state::DeckState;
use crate::cards::{CardCatalog, CardId};

/// Fewest cards a legal deck may contain.
pub const MIN_DECK_TOTAL: u64 = 25;

/// Most cards a legal deck may contain.
pub const MAX_DECK_TOTAL: u64 = 100;

/// Aggregate construction rules.
///
/// Per-card copy limits live on the cards themselves; the rules here are
/// deck-wide. The defaults are the game's standard bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckRules {
    /// Inclusive lower bound on total cards.
    pub min_total: u64,
    /// Inclusive upper bound on total cards.
    pub max_total: u64,
}

impl Default for DeckRules {
    fn default() -> Self {
        Self {
            min_total: MIN_DECK_TOTAL,
            max_total: MAX_DECK_TOTAL,
        }
    }
}

/// One construction-rule violation.
///
/// Violations are values for the display layer, not errors; a legal deck
/// simply produces none.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Violation {
    /// A count exceeds the wire format's representable bound.
    UnrepresentableCount { id: CardId },

    /// A count exceeds the card's per-deck copy limit.
    CountOutOfRange { id: CardId, max: u32 },

    /// The deck total is outside the aggregate bounds.
    DeckSizeOutOfRange { total: u64, min: u64, max: u64 },
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::UnrepresentableCount { id } => {
                write!(f, "card {}: count is not a representable number of copies", id)
            }
            Violation::CountOutOfRange { id, max } => {
                write!(f, "card {}: at most {} copies allowed", id, max)
            }
            Violation::DeckSizeOutOfRange { total, min, max } => {
                write!(f, "deck has {} cards, must have between {} and {}", total, min, max)
            }
        }
    }
}

/// Validate a deck against the standard rules.
///
/// Returns all violations in catalog order, the aggregate deck-size
/// violation (if any) last. An empty vec means the deck is legal.
///
/// ## Example
///
/// ```
/// use deckforge::cards::{Card, CardCatalog, CardId};
/// use deckforge::deck::{validate, DeckState, Violation};
///
/// let catalog = CardCatalog::from_lists(
///     vec![Card::monster(CardId::new(1), "Flame Drake", 2, "red", 3, 5, 4, 3)],
///     vec![],
/// );
///
/// let mut deck = DeckState::new();
/// deck.set_count(CardId::new(1), 30);
///
/// assert_eq!(
///     validate(&deck, &catalog),
///     vec![Violation::CountOutOfRange { id: CardId::new(1), max: 2 }],
/// );
/// ```
#[must_use]
pub fn validate(state: &DeckState, catalog: &CardCatalog) -> Vec<Violation> {
    validate_with(state, catalog, &DeckRules::default())
}

/// Validate a deck against custom aggregate rules.
#[must_use]
pub fn validate_with(
    state: &DeckState,
    catalog: &CardCatalog,
    rules: &DeckRules,
) -> Vec<Violation> {
    let total = catalog
        .iter()
        .fold(0u64, |acc, card| acc.saturating_add(state.count_of(card.id)));

    let mut violations = Vec::new();
    for card in catalog.iter() {
        let count = state.count_of(card.id);
        if count > MAX_SAFE_INT {
            violations.push(Violation::UnrepresentableCount { id: card.id });
        } else if count > u64::from(card.max_same_cards) {
            violations.push(Violation::CountOutOfRange {
                id: card.id,
                max: card.max_same_cards,
            });
        }
    }

    // The aggregate bound is only meaningful once every count is sane.
    if violations.is_empty() && !(rules.min_total..=rules.max_total).contains(&total) {
        violations.push(Violation::DeckSizeOutOfRange {
            total,
            min: rules.min_total,
            max: rules.max_total,
        });
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;

    /// Catalog with copy limits roomy enough to build legal-sized decks.
    fn catalog() -> CardCatalog {
        CardCatalog::from_lists(
            vec![
                Card::monster(CardId::new(1), "Flame Drake", 40, "red", 3, 5, 4, 3),
                Card::monster(CardId::new(5), "Bog Crawler", 4, "green", 2, 4, 2, 5),
            ],
            vec![
                Card::spell(CardId::new(2), "Mend", 40, "green", 1),
                Card::spell(CardId::new(7), "Mind Surge", 40, "blue", 4),
            ],
        )
    }

    #[test]
    fn test_legal_deck_has_no_violations() {
        let mut deck = DeckState::new();
        deck.set_count(CardId::new(1), 10);
        deck.set_count(CardId::new(2), 10);
        deck.set_count(CardId::new(7), 5);

        assert!(validate(&deck, &catalog()).is_empty());
    }

    #[test]
    fn test_total_below_minimum() {
        let mut deck = DeckState::new();
        deck.set_count(CardId::new(1), 24);

        assert_eq!(
            validate(&deck, &catalog()),
            vec![Violation::DeckSizeOutOfRange { total: 24, min: 25, max: 100 }],
        );
    }

    #[test]
    fn test_total_above_maximum() {
        let mut deck = DeckState::new();
        deck.set_count(CardId::new(1), 40);
        deck.set_count(CardId::new(2), 40);
        deck.set_count(CardId::new(7), 21);

        assert_eq!(
            validate(&deck, &catalog()),
            vec![Violation::DeckSizeOutOfRange { total: 101, min: 25, max: 100 }],
        );
    }

    #[test]
    fn test_total_boundaries_are_inclusive() {
        let mut deck = DeckState::new();
        deck.set_count(CardId::new(1), 25);
        assert!(validate(&deck, &catalog()).is_empty());

        deck.set_count(CardId::new(1), 40);
        deck.set_count(CardId::new(2), 40);
        deck.set_count(CardId::new(7), 20);
        assert!(validate(&deck, &catalog()).is_empty());
    }

    #[test]
    fn test_empty_deck_fails_aggregate_only() {
        let violations = validate(&DeckState::new(), &catalog());

        assert_eq!(
            violations,
            vec![Violation::DeckSizeOutOfRange { total: 0, min: 25, max: 100 }],
        );
    }

    #[test]
    fn test_over_limit_count_suppresses_aggregate() {
        // Card 5 allows 4 copies; 10 included. Total is within bounds, and
        // the aggregate rule stays silent because a per-card rule fired.
        let mut deck = DeckState::new();
        deck.set_count(CardId::new(5), 10);
        deck.set_count(CardId::new(2), 20);

        assert_eq!(
            validate(&deck, &catalog()),
            vec![Violation::CountOutOfRange { id: CardId::new(5), max: 4 }],
        );
    }

    #[test]
    fn test_per_card_violation_suppresses_aggregate_even_when_total_bad() {
        let mut deck = DeckState::new();
        deck.set_count(CardId::new(5), 10);

        // Total 10 < 25, but only the per-card violation is reported.
        assert_eq!(
            validate(&deck, &catalog()),
            vec![Violation::CountOutOfRange { id: CardId::new(5), max: 4 }],
        );
    }

    #[test]
    fn test_violations_accumulate_in_catalog_order() {
        let mut deck = DeckState::new();
        deck.set_count(CardId::new(7), 50); // spell, later in catalog
        deck.set_count(CardId::new(5), 10); // monster, earlier

        assert_eq!(
            validate(&deck, &catalog()),
            vec![
                Violation::CountOutOfRange { id: CardId::new(5), max: 4 },
                Violation::CountOutOfRange { id: CardId::new(7), max: 40 },
            ],
        );
    }

    #[test]
    fn test_unrepresentable_count() {
        let mut deck = DeckState::new();
        deck.set_count(CardId::new(1), MAX_SAFE_INT + 1);
        deck.set_count(CardId::new(2), 30);

        assert_eq!(
            validate(&deck, &catalog()),
            vec![Violation::UnrepresentableCount { id: CardId::new(1) }],
        );
    }

    #[test]
    fn test_max_safe_count_is_representable() {
        let mut deck = DeckState::new();
        deck.set_count(CardId::new(1), MAX_SAFE_INT);

        // Over the copy limit, but representable.
        assert_eq!(
            validate(&deck, &catalog()),
            vec![Violation::CountOutOfRange { id: CardId::new(1), max: 40 }],
        );
    }

    #[test]
    fn test_ids_outside_catalog_do_not_count() {
        // Stray entries are invisible to validation: the total sums over
        // catalog ids only.
        let mut deck = DeckState::new();
        deck.set_count(CardId::new(1), 25);
        deck.set_count(CardId::new(999), 50);

        assert!(validate(&deck, &catalog()).is_empty());
    }

    #[test]
    fn test_custom_rules() {
        let rules = DeckRules { min_total: 1, max_total: 5 };
        let mut deck = DeckState::new();
        deck.set_count(CardId::new(1), 3);

        assert!(validate_with(&deck, &catalog(), &rules).is_empty());

        deck.set_count(CardId::new(1), 6);
        assert_eq!(
            validate_with(&deck, &catalog(), &rules),
            vec![Violation::DeckSizeOutOfRange { total: 6, min: 1, max: 5 }],
        );
    }

    #[test]
    fn test_empty_catalog_reports_zero_total() {
        let violations = validate(&DeckState::new(), &CardCatalog::new());

        assert_eq!(
            violations,
            vec![Violation::DeckSizeOutOfRange { total: 0, min: 25, max: 100 }],
        );
    }

    #[test]
    fn test_violation_display() {
        let v = Violation::CountOutOfRange { id: CardId::new(5), max: 4 };
        assert_eq!(v.to_string(), "card 5: at most 4 copies allowed");

        let v = Violation::DeckSizeOutOfRange { total: 24, min: 25, max: 100 };
        assert_eq!(v.to_string(), "deck has 24 cards, must have between 25 and 100");

        let v = Violation::UnrepresentableCount { id: CardId::new(1) };
        assert_eq!(v.to_string(), "card 1: count is not a representable number of copies");
    }
}
