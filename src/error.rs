//! Error types for simulation operations.
//!
//! Every error in this crate signals a configuration fault or an
//! invariant violation; nothing here is retryable. A round surfaces them
//! through [`RoundError`] and aborts immediately.

use thiserror::Error;

use crate::card::Card;
use crate::strategy::TableKind;

/// Errors that can occur when dealing from a shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// No cards left in the shoe. Must not happen under a correct
    /// penetration policy; indicates a caller bug.
    #[error("no cards left in the shoe")]
    Empty,
}

/// Errors that can occur when manipulating a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// Split requested on a hand that is not a two-card pair.
    #[error("hand is not a splitable pair")]
    NotSplitable,
}

/// Errors that can occur when consulting a strategy table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrategyError {
    /// The table has no row for a reachable (total, up-card) combination.
    /// Fatal: a gap in the table is never silently defaulted.
    #[error("no {table} strategy entry for total {total} against dealer {up_card}")]
    MissingEntry {
        /// Which of the three tables was consulted.
        table: TableKind,
        /// Player hand total (or pair total) used as the row key.
        total: u8,
        /// Dealer up-card rank used as the column key.
        up_card: Card,
    },
    /// An action token that is not one of `S`, `H`, `D`, `P`, `Sr`.
    #[error("unknown action token `{0}`")]
    UnknownAction(String),
}

/// Errors that can abort a round.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The shoe ran out of cards mid-round.
    #[error(transparent)]
    Shoe(#[from] ShoeError),
    /// The strategy table is missing a reachable entry.
    #[error(transparent)]
    Strategy(#[from] StrategyError),
    /// The table directed an illegal hand operation.
    #[error(transparent)]
    Hand(#[from] HandError),
}
