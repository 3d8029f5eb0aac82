//! Multi-deck shoe with an Omega II running count.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE};
use crate::error::ShoeError;

/// A dealing shoe holding several decks of cards.
///
/// The shoe keeps the Omega II running count and a history of true-count
/// samples in sync with every card it deals, and raises a reshuffle flag
/// once penetration drops below the configured threshold. The flag is
/// only cleared by [`Shoe::refill`]; callers refill between rounds, never
/// mid-round, so a correctly configured shoe can never run empty while a
/// round is in progress.
#[derive(Debug, Clone)]
pub struct Shoe {
    /// Number of decks the full shoe holds.
    decks: u8,
    /// Remaining fraction below which the reshuffle flag is raised.
    /// Zero disables reshuffling.
    penetration: f64,
    /// Undealt cards; dealing pops from the tail.
    cards: Vec<Card>,
    /// Omega II running count over all dealt cards.
    running_count: i32,
    /// True-count sample recorded after every deal, starting at 0.0.
    count_history: Vec<f64>,
    /// Raised once penetration is exceeded, cleared by `refill`.
    needs_reshuffle: bool,
    /// Random number generator used for shuffling.
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates a shuffled shoe with the given number of decks and
    /// penetration threshold.
    #[must_use]
    pub fn new(decks: u8, penetration: f64, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cards = build_and_shuffle(decks, &mut rng);

        Self {
            decks,
            penetration,
            cards,
            running_count: 0,
            count_history: vec![0.0],
            needs_reshuffle: false,
            rng,
        }
    }

    /// Creates a shoe that deals exactly `draws`, in order.
    ///
    /// Useful for replaying known deals or scripting a round in tests.
    /// The counting state behaves as in a regular shoe.
    #[must_use]
    pub fn stacked(decks: u8, penetration: f64, draws: &[Card]) -> Self {
        let mut cards: Vec<Card> = draws.to_vec();
        cards.reverse();

        Self {
            decks,
            penetration,
            cards,
            running_count: 0,
            count_history: vec![0.0],
            needs_reshuffle: false,
            rng: ChaCha8Rng::seed_from_u64(0),
        }
    }

    /// Deals one card off the shoe.
    ///
    /// Updates the running count by the card's Omega II value, appends
    /// the resulting true count to the history, and raises the reshuffle
    /// flag once the remaining fraction drops below the penetration
    /// threshold.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Empty`] if no cards remain. This is an
    /// invariant violation, not a recoverable condition: the reshuffle
    /// policy exists precisely to keep it from happening.
    pub fn deal(&mut self) -> Result<Card, ShoeError> {
        let card = self.cards.pop().ok_or(ShoeError::Empty)?;

        self.running_count += card.count_value();
        self.count_history.push(self.true_count());

        if self.penetration > 0.0 && self.remaining_fraction() < self.penetration {
            self.needs_reshuffle = true;
        }

        Ok(card)
    }

    /// Refills and reshuffles the shoe in place.
    ///
    /// The running count resets to zero, a fresh `0.0` sample is appended
    /// to the history, and the reshuffle flag is cleared.
    pub fn refill(&mut self) {
        self.cards = build_and_shuffle(self.decks, &mut self.rng);
        self.running_count = 0;
        self.count_history.push(0.0);
        self.needs_reshuffle = false;
    }

    /// Omega II true count: the running count divided by the number of
    /// decks remaining in the shoe.
    ///
    /// Returns 0.0 for an empty shoe; with any cards left the divisor is
    /// strictly positive.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "card counts are far below f64 integer precision"
    )]
    pub fn true_count(&self) -> f64 {
        if self.cards.is_empty() {
            return 0.0;
        }
        let decks_remaining = self.cards.len() as f64 / DECK_SIZE as f64;
        f64::from(self.running_count) / decks_remaining
    }

    /// Fraction of the original shoe still undealt.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "card counts are far below f64 integer precision"
    )]
    pub fn remaining_fraction(&self) -> f64 {
        self.cards.len() as f64 / (DECK_SIZE as f64 * f64::from(self.decks))
    }

    /// Returns whether penetration has been exceeded and the shoe should
    /// be refilled before the next round.
    #[must_use]
    pub const fn needs_reshuffle(&self) -> bool {
        self.needs_reshuffle
    }

    /// Number of cards left in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.cards.len()
    }

    /// Omega II running count over all cards dealt since the last refill.
    #[must_use]
    pub const fn running_count(&self) -> i32 {
        self.running_count
    }

    /// True-count samples recorded after every deal, starting at 0.0 for
    /// a fresh or refilled shoe.
    #[must_use]
    pub fn count_history(&self) -> &[f64] {
        &self.count_history
    }

    /// Number of decks the full shoe holds.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }
}

/// Builds decks × 52 cards (four of each rank per deck) and shuffles.
fn build_and_shuffle(decks: u8, rng: &mut ChaCha8Rng) -> Vec<Card> {
    let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);

    for _ in 0..decks {
        for rank in Card::ALL {
            for _ in 0..4 {
                cards.push(rank);
            }
        }
    }

    cards.shuffle(rng);
    cards
}
