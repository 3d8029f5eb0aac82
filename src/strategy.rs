//! Strategy table lookup and action selection.

use core::fmt;
use core::str::FromStr;
use std::collections::HashMap;

use crate::card::Card;
use crate::error::StrategyError;
use crate::hand::Hand;

/// A playing action prescribed by a strategy table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop taking cards.
    Stand,
    /// Take one more card.
    Hit,
    /// Double the stake, take exactly one card, then stop.
    Double,
    /// Split the pair into two hands.
    Split,
    /// Forfeit the hand for half the stake.
    Surrender,
}

impl Action {
    /// Short token used in row-oriented strategy tables.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Stand => "S",
            Self::Hit => "H",
            Self::Double => "D",
            Self::Split => "P",
            Self::Surrender => "Sr",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Action {
    type Err = StrategyError;

    /// Parses one of the short action tokens `S`, `H`, `D`, `P`, `Sr`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::Action;
    ///
    /// assert_eq!("Sr".parse::<Action>().unwrap(), Action::Surrender);
    /// assert!("X".parse::<Action>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "S" => Ok(Self::Stand),
            "H" => Ok(Self::Hit),
            "D" => Ok(Self::Double),
            "P" => Ok(Self::Split),
            "Sr" => Ok(Self::Surrender),
            other => Err(StrategyError::UnknownAction(other.to_string())),
        }
    }
}

/// Which of the three strategy tables a lookup went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    /// Hard totals (no ace counted as 11).
    Hard,
    /// Soft totals (an ace counted as 11).
    Soft,
    /// Two-card pairs, keyed by pair total.
    Pairs,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hard => "hard",
            Self::Soft => "soft",
            Self::Pairs => "pair",
        };
        f.write_str(name)
    }
}

/// One row of a strategy chart: an action per dealer up-card rank, in
/// [`Card::ALL`] column order.
pub type ChartRow = [Action; 13];

/// A fixed playing strategy: three charts keyed by hand-total bucket.
///
/// Hard totals cover 5–21, soft totals 21 down to 12, and pairs run by
/// pair total from 20 down to 4 in steps of two. A pair of aces never
/// reaches the pair chart — the soft check has priority, so it resolves
/// through the soft-12 row (which the canonical chart fills with `P`).
///
/// The table is built once, then shared read-only across all rounds.
/// Parsing table files is a collaborator's job; this type only consumes
/// finished rows.
#[derive(Debug, Clone, Default)]
pub struct StrategyTable {
    hard: HashMap<u8, ChartRow>,
    soft: HashMap<u8, ChartRow>,
    pairs: HashMap<u8, ChartRow>,
}

impl StrategyTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the row for a hard total.
    pub fn set_hard(&mut self, total: u8, row: ChartRow) {
        self.hard.insert(total, row);
    }

    /// Sets the row for a soft total.
    pub fn set_soft(&mut self, total: u8, row: ChartRow) {
        self.soft.insert(total, row);
    }

    /// Sets the row for a pair, keyed by the pair's total.
    pub fn set_pair(&mut self, total: u8, row: ChartRow) {
        self.pairs.insert(total, row);
    }

    /// Selects the action for a hand against a dealer up-card.
    ///
    /// Dispatch order is fixed: the soft chart if the hand is soft, else
    /// the pair chart if the hand is a splitable pair, else the hard
    /// chart, keyed by the hand's total. `Double` and `Surrender` are
    /// only legal on the first two cards and downgrade to `Hit`
    /// otherwise, so callers can apply the returned action directly.
    ///
    /// # Errors
    ///
    /// Returns [`StrategyError::MissingEntry`] if the selected chart has
    /// no row for the hand's total. A gap for a reachable combination is
    /// a configuration fault and is never defaulted.
    pub fn decide(&self, hand: &Hand, up_card: Card) -> Result<Action, StrategyError> {
        let total = hand.value();

        let (table, chart) = if hand.is_soft() {
            (TableKind::Soft, &self.soft)
        } else if hand.is_splitable() {
            (TableKind::Pairs, &self.pairs)
        } else {
            (TableKind::Hard, &self.hard)
        };

        let action = chart
            .get(&total)
            .map(|row| row[up_card.chart_index()])
            .ok_or(StrategyError::MissingEntry {
                table,
                total,
                up_card,
            })?;

        Ok(match action {
            Action::Double | Action::Surrender if hand.len() != 2 => Action::Hit,
            other => other,
        })
    }
}
