//! Card ranks and per-rank value tables.

use core::fmt;

/// A playing card, identified by rank alone.
///
/// Suit never matters in blackjack, so it is not represented. Rank
/// identity does matter beyond the blackjack value: a King and a Queen
/// are both worth ten but do not form a splitable pair.
///
/// The discriminants fix the strategy-chart column order (`Two` through
/// `King`, then `Ace`), see [`Card::chart_index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Card {
    /// Two.
    Two = 0,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

impl Card {
    /// All thirteen ranks in chart-column order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Blackjack value of the rank. Aces count as 11 here; demotion to 1
    /// happens during hand valuation, never on the card itself.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten | Self::Jack | Self::Queen | Self::King => 10,
            Self::Ace => 11,
        }
    }

    /// Omega II point value of the rank, added to a shoe's running count
    /// when the card is dealt.
    #[must_use]
    pub const fn count_value(self) -> i32 {
        match self {
            Self::Two | Self::Three | Self::Seven => 1,
            Self::Four | Self::Five | Self::Six => 2,
            Self::Eight | Self::Ace => 0,
            Self::Nine => -1,
            Self::Ten | Self::Jack | Self::Queen | Self::King => -2,
        }
    }

    /// Column index of this rank in a strategy-chart row.
    #[must_use]
    pub const fn chart_index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
            Self::Ace => "Ace",
        };
        f.write_str(name)
    }
}
