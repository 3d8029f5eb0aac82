//! Runs a counting simulation over the classic S17 basic-strategy chart
//! and prints the per-game results.
//!
//! ```sh
//! cargo run --example simulate
//! ```

use std::error::Error;

use bjsim::{Action, ChartRow, SimOptions, StrategyTable, simulate};

fn row(tokens: &str) -> Result<ChartRow, Box<dyn Error>> {
    let actions: Vec<Action> = tokens
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<_, _>>()?;
    actions
        .try_into()
        .map_err(|_| "chart rows need 13 columns".into())
}

/// Basic strategy for an eight-deck, stand-on-17 table.
/// Columns: 2 3 4 5 6 7 8 9 T J Q K A.
fn basic_table() -> Result<StrategyTable, Box<dyn Error>> {
    let mut table = StrategyTable::new();

    for total in 17..=21 {
        table.set_hard(total, [Action::Stand; 13]);
    }
    table.set_hard(16, row("S S S S S H H Sr Sr Sr Sr Sr Sr")?);
    table.set_hard(15, row("S S S S S H H H Sr Sr Sr Sr H")?);
    table.set_hard(14, row("S S S S S H H H H H H H H")?);
    table.set_hard(13, row("S S S S S H H H H H H H H")?);
    table.set_hard(12, row("H H S S S H H H H H H H H")?);
    table.set_hard(11, row("D D D D D D D D D D D D H")?);
    table.set_hard(10, row("D D D D D D D D H H H H H")?);
    table.set_hard(9, row("H D D D D H H H H H H H H")?);
    for total in 5..=8 {
        table.set_hard(total, [Action::Hit; 13]);
    }

    for total in 19..=21 {
        table.set_soft(total, [Action::Stand; 13]);
    }
    table.set_soft(18, row("S D D D D S S H H H H H H")?);
    table.set_soft(17, row("H D D D D H H H H H H H H")?);
    table.set_soft(16, row("H H D D D H H H H H H H H")?);
    table.set_soft(15, row("H H D D D H H H H H H H H")?);
    table.set_soft(14, row("H H H D D H H H H H H H H")?);
    table.set_soft(13, row("H H H D D H H H H H H H H")?);
    table.set_soft(12, [Action::Split; 13]);

    table.set_pair(20, [Action::Stand; 13]);
    table.set_pair(18, row("P P P P P S P P S S S S S")?);
    table.set_pair(16, [Action::Split; 13]);
    table.set_pair(14, row("P P P P P P H H H H H H H")?);
    table.set_pair(12, row("P P P P P H H H H H H H H")?);
    table.set_pair(10, row("D D D D D D D D H H H H H")?);
    table.set_pair(8, row("H H H P P H H H H H H H H")?);
    table.set_pair(6, row("P P P P P P H H H H H H H")?);
    table.set_pair(4, row("P P P P P P H H H H H H H")?);

    Ok(table)
}

fn main() -> Result<(), Box<dyn Error>> {
    let table = basic_table()?;
    let options = SimOptions::default()
        .with_games(100)
        .with_rounds(500)
        .with_bet_spread(20.0)
        .with_count_threshold(6.0);

    let report = simulate(options, &table, 42)?;

    for (index, net) in report.game_nets.iter().enumerate() {
        println!("game {:>3}: net {:>8.1}", index + 1, net);
    }
    println!();
    println!("total winnings:        {:>10.1}", report.total);
    println!("expectation per round: {:>10.4}", report.expectation());

    Ok(())
}
