//! The game-round state machine: player decision loop, dealer play, and
//! round resolution.

use crate::card::Card;
use crate::error::RoundError;
use crate::hand::Hand;
use crate::result::{HandOutcome, HandResult, RoundResult};
use crate::shoe::Shoe;
use crate::strategy::{Action, StrategyTable};

/// Plays a single round against a shared shoe and a fixed strategy.
///
/// The bet multiplier is fixed at round start (typically from the shoe's
/// true count, see [`SimOptions::bet_multiplier`]) and scales every hand
/// payout of the round.
///
/// [`SimOptions::bet_multiplier`]: crate::SimOptions::bet_multiplier
///
/// # Example
///
/// ```
/// use bjsim::{Action, Card, Round, Shoe, StrategyTable};
///
/// let mut table = StrategyTable::new();
/// table.set_hard(19, [Action::Stand; 13]);
///
/// // Player Ten+Nine stands on 19; dealer Ten draws a King for 20.
/// let mut shoe = Shoe::stacked(1, 0.0, &[Card::Ten, Card::Nine, Card::Ten, Card::King]);
/// let result = Round::new(&mut shoe, &table, 1.0).play()?;
/// assert_eq!(result.payout, -1.0);
/// # Ok::<(), bjsim::RoundError>(())
/// ```
#[derive(Debug)]
pub struct Round<'a> {
    shoe: &'a mut Shoe,
    table: &'a StrategyTable,
    bet_multiplier: f64,
}

impl<'a> Round<'a> {
    /// Creates a round over the given shoe, strategy table and bet-size
    /// multiplier.
    #[must_use]
    pub const fn new(shoe: &'a mut Shoe, table: &'a StrategyTable, bet_multiplier: f64) -> Self {
        Self {
            shoe,
            table,
            bet_multiplier,
        }
    }

    /// Runs the round to completion and resolves all payouts.
    ///
    /// Deals two cards to the player and an up-card to the dealer, plays
    /// every player hand to a terminal state (splits append sibling hands,
    /// processed FIFO), lets the dealer draw to 17, and settles each hand.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError`] if the shoe runs empty, the strategy table
    /// is missing a reachable entry, or the table directs an illegal
    /// split. All are fatal faults; no partial result is produced.
    pub fn play(mut self) -> Result<RoundResult, RoundError> {
        let mut player = Hand::new();
        player.add_card(self.shoe.deal()?);
        player.add_card(self.shoe.deal()?);

        let mut dealer = Hand::new();
        dealer.add_card(self.shoe.deal()?);
        let up_card = dealer.cards()[0];

        let mut hands = vec![player];
        let mut index = 0;
        while index < hands.len() {
            self.play_hand(&mut hands, index, up_card)?;
            index += 1;
        }

        // Dealer draws out regardless of the player hands, keeping the
        // count history faithful to table play.
        while dealer.value() < 17 {
            let card = self.shoe.deal()?;
            dealer.add_card(card);
        }

        Ok(self.settle(&hands, &dealer))
    }

    /// Plays one player hand to a terminal state.
    ///
    /// A split hand arrives with a single card and receives its second
    /// one here before the action loop; splitting recurses into the same
    /// procedure for the original hand while the sibling waits its turn
    /// in the FIFO list.
    fn play_hand(
        &mut self,
        hands: &mut Vec<Hand>,
        index: usize,
        up_card: Card,
    ) -> Result<(), RoundError> {
        if hands[index].len() < 2 {
            let card = self.shoe.deal()?;
            hands[index].add_card(card);
        }

        loop {
            if hands[index].is_busted() || hands[index].is_blackjack() {
                return Ok(());
            }

            match self.table.decide(&hands[index], up_card)? {
                Action::Stand => return Ok(()),
                Action::Hit => {
                    let card = self.shoe.deal()?;
                    hands[index].add_card(card);
                }
                Action::Double => {
                    hands[index].mark_doubled();
                    let card = self.shoe.deal()?;
                    hands[index].add_card(card);
                    return Ok(());
                }
                Action::Surrender => {
                    hands[index].mark_surrendered();
                    return Ok(());
                }
                Action::Split => {
                    let sibling = hands[index].split()?;
                    hands.push(sibling);
                    return self.play_hand(hands, index, up_card);
                }
            }
        }
    }

    /// Settles every hand against the dealer and sums the round payout.
    fn settle(&self, hands: &[Hand], dealer: &Hand) -> RoundResult {
        let mut results = Vec::with_capacity(hands.len());
        let mut payout = 0.0;

        for hand in hands {
            let outcome = resolve(hand, dealer);

            let mut hand_payout = outcome.base_payout();
            if hand.is_doubled() {
                hand_payout *= 2.0;
            }
            hand_payout *= self.bet_multiplier;
            payout += hand_payout;

            results.push(HandResult {
                outcome,
                payout: hand_payout,
                value: hand.value(),
                doubled: hand.is_doubled(),
                surrendered: hand.is_surrendered(),
                from_split: hand.is_from_split(),
            });
        }

        RoundResult {
            hands: results,
            dealer_value: dealer.value(),
            dealer_busted: dealer.is_busted(),
            dealer_blackjack: dealer.is_blackjack(),
            bet_multiplier: self.bet_multiplier,
            payout,
        }
    }
}

/// Resolves one player hand against the dealer.
///
/// Precedence is exact: surrender settles first and ignores the dealer
/// entirely; then player bust, player blackjack (push only against a
/// dealer blackjack), dealer bust, and finally the total comparison. A
/// tied 21 where only the dealer holds blackjack is a loss.
fn resolve(hand: &Hand, dealer: &Hand) -> HandOutcome {
    if hand.is_surrendered() {
        return HandOutcome::Surrendered;
    }
    if hand.is_busted() {
        return HandOutcome::Lost;
    }
    if hand.is_blackjack() {
        return if dealer.is_blackjack() {
            HandOutcome::Push
        } else {
            HandOutcome::WonBlackjack
        };
    }
    if dealer.is_busted() {
        return HandOutcome::Won;
    }

    let player_value = hand.value();
    let dealer_value = dealer.value();
    if player_value > dealer_value {
        HandOutcome::Won
    } else if player_value < dealer_value {
        HandOutcome::Lost
    } else if dealer.is_blackjack() {
        // Non-blackjack 21 loses the tie against a dealer blackjack.
        HandOutcome::Lost
    } else {
        HandOutcome::Push
    }
}
