//! Player and dealer hand representation.

use crate::card::Card;
use crate::error::HandError;

/// Computes the best value of a set of cards together with the number of
/// aces still counted as 11.
///
/// Aces start at 11 and are demoted to 1 one at a time while the total
/// exceeds 21. Valuation is a pure function of the ranks; nothing is
/// stored, so cards moved between hands by a split can never carry a
/// stale ace value with them.
fn evaluate(cards: &[Card]) -> (u8, u8) {
    let mut value: u8 = 0;
    let mut soft_aces: u8 = 0;

    for card in cards {
        if *card == Card::Ace {
            soft_aces += 1;
        }
        value = value.saturating_add(card.value());
    }

    while value > 21 && soft_aces > 0 {
        value -= 10;
        soft_aces -= 1;
    }

    (value, soft_aces)
}

/// A hand of cards belonging to one party.
///
/// Total value, softness, blackjack, bust and splitability are all
/// derived from the cards on every query; the only stored state besides
/// the cards are the split/surrender/double flags set by the round
/// engine.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    /// Cards in the hand, in deal order.
    cards: Vec<Card>,
    /// Whether this hand was produced by (or has undergone) a split.
    from_split: bool,
    /// Whether the hand was surrendered.
    surrendered: bool,
    /// Whether the hand was doubled down.
    doubled: bool,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            from_split: false,
            surrendered: false,
            doubled: false,
        }
    }

    /// Creates a hand holding the given cards.
    #[must_use]
    pub const fn with_cards(cards: Vec<Card>) -> Self {
        Self {
            cards,
            from_split: false,
            surrendered: false,
            doubled: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Best non-busting value of the hand, or the minimal busting value
    /// once no ace demotion can save it.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate(&self.cards).0
    }

    /// Returns whether the hand is soft (an ace still counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate(&self.cards).1 > 0
    }

    /// Returns whether the hand is busted.
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.value() > 21
    }

    /// Returns whether the hand is a blackjack.
    ///
    /// A split hand never counts. Besides the usual two-card 21, a hand
    /// consisting entirely of sevens that totals 21 (7-7-7) also counts,
    /// matching the table rules this simulator reproduces.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        if self.from_split || self.value() != 21 {
            return false;
        }
        self.cards.len() == 2 || self.cards.iter().all(|c| *c == Card::Seven)
    }

    /// Returns whether the hand is exactly two cards of the same rank.
    ///
    /// Rank identity is what counts: a King and a Queen are both worth
    /// ten but cannot be split.
    #[must_use]
    pub fn is_splitable(&self) -> bool {
        self.cards.len() == 2 && self.cards[0] == self.cards[1]
    }

    /// Splits the hand, moving one card into a new sibling hand.
    ///
    /// Both hands are marked as split hands, which disqualifies them from
    /// blackjack.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::NotSplitable`] if the hand is not a two-card
    /// pair.
    pub fn split(&mut self) -> Result<Self, HandError> {
        if !self.is_splitable() {
            return Err(HandError::NotSplitable);
        }

        self.from_split = true;
        let card = self
            .cards
            .pop()
            .expect("is_splitable() guarantees two cards");

        Ok(Self {
            cards: vec![card],
            from_split: true,
            surrendered: false,
            doubled: false,
        })
    }

    /// Returns whether this hand came out of a split.
    #[must_use]
    pub const fn is_from_split(&self) -> bool {
        self.from_split
    }

    /// Returns whether the hand was surrendered.
    #[must_use]
    pub const fn is_surrendered(&self) -> bool {
        self.surrendered
    }

    /// Returns whether the hand was doubled down.
    #[must_use]
    pub const fn is_doubled(&self) -> bool {
        self.doubled
    }

    /// Marks the hand as surrendered.
    pub const fn mark_surrendered(&mut self) {
        self.surrendered = true;
    }

    /// Marks the hand as doubled down.
    pub const fn mark_doubled(&mut self) {
        self.doubled = true;
    }
}
