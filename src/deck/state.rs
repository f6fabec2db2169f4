//! Deck state: per-card inclusion counts.
//!
//! `DeckState` maps card ids to the number of copies currently selected.
//! Absent ids are implicitly at count 0 - lookups return a default instead
//! of an optional. The map holds only nonzero entries; writing a 0 removes
//! the entry.
//!
//! Uses `im` persistent structures for O(1) cloning, so a successful
//! decode can hand back a fresh state that the caller swaps in atomically
//! while older snapshots stay valid.

use im::HashMap as ImHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// Mutable per-card inclusion counts for one deck-building session.
///
/// Every key is expected to reference an id in the session's catalog; the
/// codec and validator only ever consult counts for catalog ids.
///
/// ## Example
///
/// ```
/// use deckforge::cards::CardId;
/// use deckforge::deck::DeckState;
///
/// let mut deck = DeckState::new();
/// deck.set_count(CardId::new(1), 3);
///
/// assert_eq!(deck.count_of(CardId::new(1)), 3);
/// assert_eq!(deck.count_of(CardId::new(2)), 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckState {
    counts: ImHashMap<CardId, u64>,
}

impl DeckState {
    /// Create an empty deck (all counts 0).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inclusion count for a card. Absent ids are 0.
    #[must_use]
    pub fn count_of(&self, id: CardId) -> u64 {
        self.counts.get(&id).copied().unwrap_or(0)
    }

    /// Set the inclusion count for a card.
    ///
    /// A count of 0 removes the entry, keeping the map minimal.
    pub fn set_count(&mut self, id: CardId, count: u64) {
        if count == 0 {
            self.counts.remove(&id);
        } else {
            self.counts.insert(id, count);
        }
    }

    /// Total cards in the deck (sum over all entries, saturating).
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts
            .values()
            .fold(0u64, |acc, &c| acc.saturating_add(c))
    }

    /// Number of distinct cards with a nonzero count.
    #[must_use]
    pub fn card_kinds(&self) -> usize {
        self.counts.len()
    }

    /// Is every count 0?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.counts.clear();
    }

    /// Iterate over the nonzero entries (unordered).
    pub fn iter(&self) -> impl Iterator<Item = (CardId, u64)> + '_ {
        self.counts.iter().map(|(&id, &count)| (id, count))
    }
}

impl FromIterator<(CardId, u64)> for DeckState {
    /// Collect explicit entries; zero counts are dropped.
    fn from_iter<I: IntoIterator<Item = (CardId, u64)>>(iter: I) -> Self {
        let mut state = Self::new();
        for (id, count) in iter {
            state.set_count(id, count);
        }
        state
    }
}
