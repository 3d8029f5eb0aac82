//! A Monte Carlo blackjack simulator with card counting.
//!
//! The crate evaluates the expected return of a fixed playing strategy
//! (a basic-strategy table) combined with a counting-based bet-sizing
//! scheme. A [`Shoe`] deals cards and keeps an Omega II running count, a
//! [`Round`] plays one hand pair to completion against a
//! [`StrategyTable`], and [`simulate`] aggregates many games into a
//! [`SimulationReport`].
//!
//! The table rules are fixed: the dealer stands on all 17s, doubling and
//! surrender are available only on the first two cards, blackjack pays
//! 3:2, and surrender forfeits half the stake.
//!
//! # Example
//!
//! ```no_run
//! use bjsim::{SimOptions, StrategyTable, simulate};
//!
//! let table = StrategyTable::new(); // fill from your strategy charts
//! let options = SimOptions::default().with_games(10).with_rounds(1000);
//! let report = simulate(options, &table, 42)?;
//! println!("expectation per round: {:.4}", report.expectation());
//! # Ok::<(), bjsim::RoundError>(())
//! ```

pub mod card;
pub mod error;
pub mod hand;
pub mod options;
pub mod result;
pub mod round;
pub mod shoe;
pub mod sim;
pub mod strategy;

// Re-export main types
pub use card::{Card, DECK_SIZE};
pub use error::{HandError, RoundError, ShoeError, StrategyError};
pub use hand::Hand;
pub use options::SimOptions;
pub use result::{HandOutcome, HandResult, RoundResult};
pub use round::Round;
pub use shoe::Shoe;
pub use sim::{Game, SimulationReport, simulate};
pub use strategy::{Action, ChartRow, StrategyTable, TableKind};
