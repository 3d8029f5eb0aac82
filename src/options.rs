//! Simulation configuration options.

/// Configuration for a simulation run.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjsim::SimOptions;
///
/// let options = SimOptions::default()
///     .with_decks(6)
///     .with_penetration(0.05)
///     .with_bet_spread(10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Remaining fraction of the shoe below which it is reshuffled
    /// between rounds. 0 disables reshuffling.
    pub penetration: f64,
    /// Bet-size multiplier applied when the true count is favorable.
    pub bet_spread: f64,
    /// True count above which the bet spread kicks in.
    pub count_threshold: f64,
    /// Rounds played per game (one game shares one shoe).
    pub rounds: u32,
    /// Number of independent games per simulation.
    pub games: u32,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            decks: 8,
            penetration: 0.2,
            bet_spread: 20.0,
            count_threshold: 6.0,
            rounds: 100,
            games: 100,
        }
    }
}

impl SimOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::SimOptions;
    ///
    /// let options = SimOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the penetration threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::SimOptions;
    ///
    /// let options = SimOptions::default().with_penetration(0.05);
    /// assert_eq!(options.penetration, 0.05);
    /// ```
    #[must_use]
    pub const fn with_penetration(mut self, penetration: f64) -> Self {
        self.penetration = penetration;
        self
    }

    /// Sets the bet-spread multiplier.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::SimOptions;
    ///
    /// let options = SimOptions::default().with_bet_spread(10.0);
    /// assert_eq!(options.bet_spread, 10.0);
    /// ```
    #[must_use]
    pub const fn with_bet_spread(mut self, bet_spread: f64) -> Self {
        self.bet_spread = bet_spread;
        self
    }

    /// Sets the true count above which the bet spread applies.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::SimOptions;
    ///
    /// let options = SimOptions::default().with_count_threshold(4.0);
    /// assert_eq!(options.count_threshold, 4.0);
    /// ```
    #[must_use]
    pub const fn with_count_threshold(mut self, count_threshold: f64) -> Self {
        self.count_threshold = count_threshold;
        self
    }

    /// Sets the number of rounds per game.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::SimOptions;
    ///
    /// let options = SimOptions::default().with_rounds(1000);
    /// assert_eq!(options.rounds, 1000);
    /// ```
    #[must_use]
    pub const fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    /// Sets the number of independent games.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::SimOptions;
    ///
    /// let options = SimOptions::default().with_games(10);
    /// assert_eq!(options.games, 10);
    /// ```
    #[must_use]
    pub const fn with_games(mut self, games: u32) -> Self {
        self.games = games;
        self
    }

    /// Bet-size multiplier for a round starting at the given true count:
    /// the configured spread above the threshold, a flat 1 otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::SimOptions;
    ///
    /// let options = SimOptions::default();
    /// assert_eq!(options.bet_multiplier(2.0), 1.0);
    /// assert_eq!(options.bet_multiplier(7.0), 20.0);
    /// ```
    #[must_use]
    pub fn bet_multiplier(&self, true_count: f64) -> f64 {
        if true_count > self.count_threshold {
            self.bet_spread
        } else {
            1.0
        }
    }
}
