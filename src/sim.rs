//! Multi-round simulation driver.

use crate::error::RoundError;
use crate::options::SimOptions;
use crate::result::RoundResult;
use crate::round::Round;
use crate::shoe::Shoe;
use crate::strategy::StrategyTable;

/// A sequence of rounds sharing one shoe.
///
/// The game refills the shoe between rounds once penetration is
/// exceeded, fixes each round's bet multiplier from the true count at
/// round start, and accumulates the bankroll across rounds.
#[derive(Debug)]
pub struct Game<'a> {
    options: SimOptions,
    table: &'a StrategyTable,
    shoe: Shoe,
    bankroll: f64,
}

impl<'a> Game<'a> {
    /// Creates a game with a freshly shuffled shoe.
    #[must_use]
    pub fn new(options: SimOptions, table: &'a StrategyTable, seed: u64) -> Self {
        let shoe = Shoe::new(options.decks, options.penetration, seed);
        Self {
            options,
            table,
            shoe,
            bankroll: 0.0,
        }
    }

    /// Plays one round, refilling the shoe first if it is flagged.
    ///
    /// # Errors
    ///
    /// Propagates any [`RoundError`]; the bankroll is unchanged on error.
    pub fn play_round(&mut self) -> Result<RoundResult, RoundError> {
        if self.shoe.needs_reshuffle() {
            self.shoe.refill();
        }

        let bet_multiplier = self.options.bet_multiplier(self.shoe.true_count());
        let result = Round::new(&mut self.shoe, self.table, bet_multiplier).play()?;
        self.bankroll += result.payout;

        Ok(result)
    }

    /// Plays the configured number of rounds and returns the net result.
    ///
    /// # Errors
    ///
    /// Aborts on the first [`RoundError`].
    pub fn play(&mut self) -> Result<f64, RoundError> {
        for _ in 0..self.options.rounds {
            self.play_round()?;
        }
        Ok(self.bankroll)
    }

    /// Net winnings so far, in units of the base stake.
    #[must_use]
    pub const fn bankroll(&self) -> f64 {
        self.bankroll
    }

    /// The shoe this game is playing from.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }
}

/// Aggregate outcome of a simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationReport {
    /// Net result of each game, in units of the base stake.
    pub game_nets: Vec<f64>,
    /// Rounds played per game.
    pub rounds_per_game: u32,
    /// Sum of all game nets.
    pub total: f64,
}

impl SimulationReport {
    /// Average payout per round, in units of the base stake.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "round counts are far below f64 integer precision"
    )]
    pub fn expectation(&self) -> f64 {
        let rounds = self.game_nets.len() as f64 * f64::from(self.rounds_per_game);
        if rounds == 0.0 { 0.0 } else { self.total / rounds }
    }
}

/// Runs the configured number of independent games.
///
/// Each game gets its own shoe seeded from `seed` and the game index, so
/// a fixed seed reproduces the whole simulation and games never share
/// state.
///
/// # Errors
///
/// Aborts on the first [`RoundError`] raised by any game.
pub fn simulate(
    options: SimOptions,
    table: &StrategyTable,
    seed: u64,
) -> Result<SimulationReport, RoundError> {
    let mut game_nets = Vec::with_capacity(options.games as usize);
    let mut total = 0.0;

    for index in 0..options.games {
        let mut game = Game::new(options, table, seed.wrapping_add(u64::from(index)));
        let net = game.play()?;
        game_nets.push(net);
        total += net;
    }

    Ok(SimulationReport {
        game_nets,
        rounds_per_game: options.rounds,
        total,
    })
}
