//! Round outcome types.

/// How a single player hand fared against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player wins even money.
    Won,
    /// Player wins with a blackjack, paid 3:2.
    WonBlackjack,
    /// Player loses the stake.
    Lost,
    /// Tie; no money moves.
    Push,
    /// Player surrendered and forfeits half the stake.
    Surrendered,
}

impl HandOutcome {
    /// Base payout multiplier per unit stake, before the double-down and
    /// bet-size multipliers are applied.
    #[must_use]
    pub const fn base_payout(self) -> f64 {
        match self {
            Self::Won => 1.0,
            Self::WonBlackjack => 1.5,
            Self::Lost => -1.0,
            Self::Push => 0.0,
            Self::Surrendered => -0.5,
        }
    }
}

/// Result of one terminal player hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandResult {
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// Payout for this hand in units of the base stake, with the
    /// double-down and bet-size multipliers applied.
    pub payout: f64,
    /// The hand's final value.
    pub value: u8,
    /// Whether the hand was doubled down.
    pub doubled: bool,
    /// Whether the hand was surrendered.
    pub surrendered: bool,
    /// Whether the hand came out of a split.
    pub from_split: bool,
}

/// Result of one complete round.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundResult {
    /// Results for each player hand, in play order (splits append).
    pub hands: Vec<HandResult>,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_busted: bool,
    /// Whether the dealer had blackjack.
    pub dealer_blackjack: bool,
    /// Bet-size multiplier the round was played at.
    pub bet_multiplier: f64,
    /// Total payout for the round: the sum of all hand payouts.
    pub payout: f64,
}
