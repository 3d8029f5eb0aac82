//! Simulator integration tests.

#![allow(clippy::float_cmp)]

use bjsim::{
    Action, Card, ChartRow, Hand, HandError, HandOutcome, Round, RoundError, Shoe, ShoeError,
    SimOptions, StrategyError, StrategyTable, TableKind, simulate,
};
use bjsim::{DECK_SIZE, Game};

fn row(tokens: &str) -> ChartRow {
    let actions: Vec<Action> = tokens
        .split_whitespace()
        .map(|t| t.parse().expect("valid action token"))
        .collect();
    actions.try_into().expect("13 columns per chart row")
}

/// The classic S17 basic-strategy chart, columns 2 3 4 5 6 7 8 9 T J Q K A.
fn basic_table() -> StrategyTable {
    let mut table = StrategyTable::new();

    for total in 17..=21 {
        table.set_hard(total, [Action::Stand; 13]);
    }
    table.set_hard(16, row("S S S S S H H Sr Sr Sr Sr Sr Sr"));
    table.set_hard(15, row("S S S S S H H H Sr Sr Sr Sr H"));
    table.set_hard(14, row("S S S S S H H H H H H H H"));
    table.set_hard(13, row("S S S S S H H H H H H H H"));
    table.set_hard(12, row("H H S S S H H H H H H H H"));
    table.set_hard(11, row("D D D D D D D D D D D D H"));
    table.set_hard(10, row("D D D D D D D D H H H H H"));
    table.set_hard(9, row("H D D D D H H H H H H H H"));
    for total in 5..=8 {
        table.set_hard(total, [Action::Hit; 13]);
    }

    for total in 19..=21 {
        table.set_soft(total, [Action::Stand; 13]);
    }
    table.set_soft(18, row("S D D D D S S H H H H H H"));
    table.set_soft(17, row("H D D D D H H H H H H H H"));
    table.set_soft(16, row("H H D D D H H H H H H H H"));
    table.set_soft(15, row("H H D D D H H H H H H H H"));
    table.set_soft(14, row("H H H D D H H H H H H H H"));
    table.set_soft(13, row("H H H D D H H H H H H H H"));
    table.set_soft(12, [Action::Split; 13]);

    table.set_pair(20, [Action::Stand; 13]);
    table.set_pair(18, row("P P P P P S P P S S S S S"));
    table.set_pair(16, [Action::Split; 13]);
    table.set_pair(14, row("P P P P P P H H H H H H H"));
    table.set_pair(12, row("P P P P P H H H H H H H H"));
    table.set_pair(10, row("D D D D D D D D H H H H H"));
    table.set_pair(8, row("H H H P P H H H H H H H H"));
    table.set_pair(6, row("P P P P P P H H H H H H H"));
    table.set_pair(4, row("P P P P P P H H H H H H H"));

    table
}

fn hand(cards: &[Card]) -> Hand {
    Hand::with_cards(cards.to_vec())
}

fn play(table: &StrategyTable, bet_multiplier: f64, draws: &[Card]) -> bjsim::RoundResult {
    let mut shoe = Shoe::stacked(1, 0.0, draws);
    Round::new(&mut shoe, table, bet_multiplier)
        .play()
        .expect("scripted round plays cleanly")
}

#[test]
fn hand_value_resolves_aces_one_at_a_time() {
    assert_eq!(hand(&[Card::Ace, Card::King]).value(), 21);
    assert!(hand(&[Card::Ace, Card::King]).is_soft());

    assert_eq!(hand(&[Card::Ace, Card::Ace]).value(), 12);
    assert!(hand(&[Card::Ace, Card::Ace]).is_soft());

    assert_eq!(hand(&[Card::Ace, Card::Ace, Card::Nine]).value(), 21);
    assert!(hand(&[Card::Ace, Card::Ace, Card::Nine]).is_soft());

    // All five aces but one stay demoted.
    let aces = hand(&[Card::Ace; 5]);
    assert_eq!(aces.value(), 15);
    assert!(aces.is_soft());

    let stiff = hand(&[Card::Ace, Card::Six, Card::Ten]);
    assert_eq!(stiff.value(), 17);
    assert!(!stiff.is_soft());

    let busted = hand(&[Card::Ten, Card::Nine, Card::Five]);
    assert_eq!(busted.value(), 24);
    assert!(busted.is_busted());
    assert!(!busted.is_soft());
}

#[test]
fn blackjack_detection_including_three_sevens() {
    assert!(hand(&[Card::Ace, Card::King]).is_blackjack());
    assert!(hand(&[Card::Ace, Card::Ten]).is_blackjack());
    assert!(hand(&[Card::Seven, Card::Seven, Card::Seven]).is_blackjack());

    // Any other three-card 21 is not a blackjack.
    assert!(!hand(&[Card::Ten, Card::Five, Card::Six]).is_blackjack());
    assert!(!hand(&[Card::Ace, Card::Ace, Card::Nine]).is_blackjack());

    // A split hand never has blackjack.
    let mut pair = hand(&[Card::Ace, Card::Ace]);
    let mut sibling = pair.split().unwrap();
    pair.add_card(Card::King);
    sibling.add_card(Card::Queen);
    assert_eq!(pair.value(), 21);
    assert!(!pair.is_blackjack());
    assert!(!sibling.is_blackjack());
}

#[test]
fn split_moves_one_card_and_flags_both_hands() {
    let mut pair = hand(&[Card::Eight, Card::Eight]);
    assert!(pair.is_splitable());

    let sibling = pair.split().unwrap();
    assert_eq!(pair.len(), 1);
    assert_eq!(sibling.len(), 1);
    assert!(pair.is_from_split());
    assert!(sibling.is_from_split());
    assert_eq!(pair.cards()[0], Card::Eight);
    assert_eq!(sibling.cards()[0], Card::Eight);
}

#[test]
fn split_rejects_non_pairs() {
    // Equal value is not enough; rank identity is what counts.
    let mut ten_value = hand(&[Card::King, Card::Queen]);
    assert!(!ten_value.is_splitable());
    assert_eq!(ten_value.split().unwrap_err(), HandError::NotSplitable);

    let mut three_cards = hand(&[Card::Eight, Card::Eight, Card::Two]);
    assert_eq!(three_cards.split().unwrap_err(), HandError::NotSplitable);
}

#[test]
fn shoe_deals_every_card_exactly_once() {
    let mut shoe = Shoe::new(2, 0.0, 42);
    assert_eq!(shoe.cards_remaining(), 2 * DECK_SIZE);

    let mut counts = std::collections::HashMap::new();
    while shoe.cards_remaining() > 0 {
        let card = shoe.deal().unwrap();
        *counts.entry(card).or_insert(0u32) += 1;
    }

    for rank in Card::ALL {
        assert_eq!(counts[&rank], 8, "eight of each rank in two decks");
    }

    assert_eq!(shoe.deal().unwrap_err(), ShoeError::Empty);
}

#[test]
fn omega_ii_point_values() {
    assert_eq!(Card::Ace.count_value(), 0);
    assert_eq!(Card::Two.count_value(), 1);
    assert_eq!(Card::Three.count_value(), 1);
    assert_eq!(Card::Four.count_value(), 2);
    assert_eq!(Card::Five.count_value(), 2);
    assert_eq!(Card::Six.count_value(), 2);
    assert_eq!(Card::Seven.count_value(), 1);
    assert_eq!(Card::Eight.count_value(), 0);
    assert_eq!(Card::Nine.count_value(), -1);
    for ten_value in [Card::Ten, Card::Jack, Card::Queen, Card::King] {
        assert_eq!(ten_value.count_value(), -2);
    }
}

#[test]
fn true_count_tracks_dealt_cards() {
    let fresh = Shoe::new(8, 0.2, 7);
    assert_eq!(fresh.true_count(), 0.0);
    assert_eq!(fresh.running_count(), 0);
    assert_eq!(fresh.count_history().len(), 1);
    assert_eq!(fresh.count_history()[0], 0.0);

    let mut shoe = Shoe::stacked(1, 0.0, &[Card::Ten, Card::Two]);
    shoe.deal().unwrap();
    assert_eq!(shoe.running_count(), -2);
    assert!(shoe.true_count() < 0.0);
    assert_eq!(shoe.count_history().len(), 2);
}

#[test]
fn reshuffle_flag_raised_by_penetration_and_cleared_by_refill() {
    let mut shoe = Shoe::new(1, 0.2, 3);

    // 11 cards remaining is still above one-fifth of the deck.
    for _ in 0..41 {
        shoe.deal().unwrap();
    }
    assert!(!shoe.needs_reshuffle());

    shoe.deal().unwrap();
    assert!(shoe.needs_reshuffle());

    shoe.refill();
    assert!(!shoe.needs_reshuffle());
    assert_eq!(shoe.cards_remaining(), DECK_SIZE);
    assert_eq!(shoe.running_count(), 0);
    assert_eq!(shoe.count_history().last(), Some(&0.0));
}

#[test]
fn blackjack_pays_three_to_two() {
    let table = basic_table();
    let result = play(&table, 1.0, &[Card::Ace, Card::King, Card::Ten, Card::Seven]);

    assert_eq!(result.hands.len(), 1);
    assert_eq!(result.hands[0].outcome, HandOutcome::WonBlackjack);
    assert_eq!(result.hands[0].value, 21);
    assert_eq!(result.dealer_value, 17);
    assert_eq!(result.payout, 1.5);
}

#[test]
fn nineteen_loses_to_dealer_twenty() {
    let table = basic_table();
    let result = play(&table, 1.0, &[Card::Ten, Card::Nine, Card::Ten, Card::King]);

    assert_eq!(result.hands[0].outcome, HandOutcome::Lost);
    assert_eq!(result.dealer_value, 20);
    assert_eq!(result.payout, -1.0);
}

#[test]
fn twenty_pushes_dealer_twenty() {
    let table = basic_table();
    let result = play(&table, 1.0, &[Card::Ten, Card::Ten, Card::Ten, Card::King]);

    assert_eq!(result.hands[0].outcome, HandOutcome::Push);
    assert_eq!(result.payout, 0.0);
}

#[test]
fn surrender_pays_half_loss_regardless_of_dealer() {
    let table = basic_table();
    // Dealer draws out to a blackjack; the surrendered hand ignores it.
    let result = play(&table, 1.0, &[Card::Ten, Card::Six, Card::Ace, Card::Ten]);

    assert_eq!(result.hands[0].outcome, HandOutcome::Surrendered);
    assert!(result.hands[0].surrendered);
    assert!(result.dealer_blackjack);
    assert_eq!(result.payout, -0.5);
}

#[test]
fn doubled_win_pays_twice_the_bet_multiplier() {
    let table = basic_table();
    // Player doubles 11 into a three-card 21; dealer busts.
    let result = play(
        &table,
        20.0,
        &[
            Card::Five,
            Card::Six,
            Card::Six,
            Card::Ten,
            Card::Ten,
            Card::Ten,
        ],
    );

    assert_eq!(result.hands[0].outcome, HandOutcome::Won);
    assert!(result.hands[0].doubled);
    assert_eq!(result.hands[0].value, 21);
    assert!(result.dealer_busted);
    assert_eq!(result.payout, 40.0);
}

#[test]
fn non_blackjack_21_loses_tie_against_dealer_blackjack() {
    let table = basic_table();
    let result = play(
        &table,
        1.0,
        &[Card::Ten, Card::Five, Card::Ace, Card::Six, Card::Ten],
    );

    assert_eq!(result.hands[0].value, 21);
    assert!(result.dealer_blackjack);
    assert_eq!(result.dealer_value, 21);
    assert_eq!(result.hands[0].outcome, HandOutcome::Lost);
    assert_eq!(result.payout, -1.0);
}

#[test]
fn three_sevens_beats_dealer_as_blackjack() {
    let table = basic_table();
    let result = play(
        &table,
        1.0,
        &[Card::Seven, Card::Seven, Card::Eight, Card::Seven, Card::Ten],
    );

    assert_eq!(result.hands[0].outcome, HandOutcome::WonBlackjack);
    assert_eq!(result.dealer_value, 18);
    assert_eq!(result.payout, 1.5);
}

#[test]
fn split_hands_play_fifo_against_the_same_up_card() {
    let table = basic_table();
    let result = play(
        &table,
        1.0,
        &[
            Card::Eight,
            Card::Eight,
            Card::Seven,
            Card::Ten,
            Card::Ten,
            Card::Ten,
        ],
    );

    assert_eq!(result.hands.len(), 2);
    for hand_result in &result.hands {
        assert_eq!(hand_result.outcome, HandOutcome::Won);
        assert_eq!(hand_result.value, 18);
        assert!(hand_result.from_split);
    }
    assert_eq!(result.dealer_value, 17);
    assert_eq!(result.payout, 2.0);
}

#[test]
fn split_aces_route_through_the_soft_table() {
    let table = basic_table();
    let result = play(
        &table,
        1.0,
        &[
            Card::Ace,
            Card::Ace,
            Card::Six,
            Card::Ten,
            Card::Ten,
            Card::Ten,
            Card::Ten,
        ],
    );

    // Each ace draws a ten; a post-split 21 is not a blackjack.
    assert_eq!(result.hands.len(), 2);
    for hand_result in &result.hands {
        assert_eq!(hand_result.value, 21);
        assert_eq!(hand_result.outcome, HandOutcome::Won);
    }
    assert!(result.dealer_busted);
    assert_eq!(result.payout, 2.0);
}

#[test]
fn double_downgrades_to_hit_after_two_cards() {
    let table = basic_table();
    // 3+3 against a Ten hits to 11, where the chart says double; with
    // three cards it must hit instead and win undoubled.
    let result = play(
        &table,
        1.0,
        &[
            Card::Three,
            Card::Three,
            Card::Ten,
            Card::Five,
            Card::Ten,
            Card::Seven,
        ],
    );

    assert_eq!(result.hands[0].value, 21);
    assert!(!result.hands[0].doubled);
    assert_eq!(result.dealer_value, 17);
    assert_eq!(result.payout, 1.0);
}

#[test]
fn surrender_downgrades_to_hit_after_two_cards() {
    let table = basic_table();
    // A three-card 16 against a Nine would surrender by the chart, but
    // must hit instead.
    let result = play(
        &table,
        1.0,
        &[
            Card::Ten,
            Card::Two,
            Card::Nine,
            Card::Four,
            Card::Five,
            Card::Ten,
        ],
    );

    assert!(!result.hands[0].surrendered);
    assert_eq!(result.hands[0].value, 21);
    assert_eq!(result.dealer_value, 19);
    assert_eq!(result.payout, 1.0);
}

#[test]
fn missing_strategy_entry_aborts_the_round() {
    let table = StrategyTable::new();
    let mut shoe = Shoe::stacked(1, 0.0, &[Card::Ten, Card::Five, Card::Six]);

    let err = Round::new(&mut shoe, &table, 1.0).play().unwrap_err();
    assert_eq!(
        err,
        RoundError::Strategy(StrategyError::MissingEntry {
            table: TableKind::Hard,
            total: 15,
            up_card: Card::Six,
        })
    );
}

#[test]
fn exhausted_shoe_aborts_the_round() {
    let table = basic_table();
    let mut shoe = Shoe::stacked(1, 0.0, &[Card::Ten, Card::Five]);

    let err = Round::new(&mut shoe, &table, 1.0).play().unwrap_err();
    assert_eq!(err, RoundError::Shoe(ShoeError::Empty));
}

#[test]
fn options_builder_sets_fields() {
    let options = SimOptions::default()
        .with_decks(6)
        .with_penetration(0.05)
        .with_bet_spread(10.0)
        .with_count_threshold(4.0)
        .with_rounds(500)
        .with_games(20);

    assert_eq!(options.decks, 6);
    assert_eq!(options.penetration, 0.05);
    assert_eq!(options.bet_spread, 10.0);
    assert_eq!(options.count_threshold, 4.0);
    assert_eq!(options.rounds, 500);
    assert_eq!(options.games, 20);

    assert_eq!(options.bet_multiplier(3.9), 1.0);
    assert_eq!(options.bet_multiplier(4.1), 10.0);
}

#[test]
fn game_refills_the_shoe_between_rounds() {
    let table = basic_table();
    let options = SimOptions::default()
        .with_decks(2)
        .with_penetration(0.5)
        .with_rounds(50);

    // 50 rounds burn far more than two decks, so the game must refill.
    let mut game = Game::new(options, &table, 9);
    let net = game.play().unwrap();
    assert!(net.is_finite());
    assert!(game.shoe().cards_remaining() > 0);
}

#[test]
fn simulation_is_deterministic_per_seed() {
    let table = basic_table();
    let options = SimOptions::default()
        .with_games(3)
        .with_rounds(200)
        .with_bet_spread(20.0);

    let first = simulate(options, &table, 1234).unwrap();
    let second = simulate(options, &table, 1234).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.game_nets.len(), 3);
    assert_eq!(first.total, first.game_nets.iter().sum::<f64>());
    assert!(first.expectation().is_finite());
}
