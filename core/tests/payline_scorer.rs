//! Payline scorer: full-row matches only, payout × bet per line.

use reeldesk_core::{
    payline::check_winnings,
    rng::RngBank,
    spin::{generate_spin, Grid},
    symbol::{Symbol::*, SymbolTable},
};

fn grid(columns: Vec<Vec<reeldesk_core::symbol::Symbol>>) -> Grid {
    Grid::from_columns(columns).expect("rectangular grid")
}

#[test]
fn worked_example_pays_only_the_top_line() {
    let g = grid(vec![vec![A, B, C], vec![A, D, C], vec![A, B, D]]);
    let wins = check_winnings(&g, 3, 10, &SymbolTable::classic());

    assert_eq!(wins.winnings, 50);
    assert_eq!(wins.winning_lines, vec![1]);
}

#[test]
fn every_matching_row_pays_its_symbol() {
    let g = grid(vec![vec![A, B, D], vec![A, B, D], vec![A, B, D]]);
    let wins = check_winnings(&g, 3, 2, &SymbolTable::classic());

    // A:5×2 + B:4×2 + D:2×2
    assert_eq!(wins.winnings, 10 + 8 + 4);
    assert_eq!(wins.winning_lines, vec![1, 2, 3]);
}

#[test]
fn lines_beyond_the_wager_are_not_scored() {
    let g = grid(vec![vec![A, B, D], vec![C, B, D], vec![A, B, D]]);
    let table = SymbolTable::classic();

    let one = check_winnings(&g, 1, 10, &table);
    assert_eq!(one.winnings, 0);
    assert!(one.winning_lines.is_empty());

    let two = check_winnings(&g, 2, 10, &table);
    assert_eq!(two.winnings, 40);
    assert_eq!(two.winning_lines, vec![2]);
}

#[test]
fn a_single_differing_column_voids_the_line() {
    // Last column differs on every row.
    let g = grid(vec![vec![A, B, C], vec![A, B, C], vec![B, C, D]]);
    let wins = check_winnings(&g, 3, 100, &SymbolTable::classic());
    assert_eq!(wins.winnings, 0);
    assert!(!wins.is_win());
}

#[test]
fn line_count_above_grid_height_is_clamped() {
    let g = grid(vec![vec![C, D], vec![C, D], vec![C, D]]);
    let wins = check_winnings(&g, 5, 1, &SymbolTable::classic());
    assert_eq!(wins.winning_lines, vec![1, 2]);
    assert_eq!(wins.winnings, 3 + 2);
}

#[test]
fn winning_lines_stay_within_wagered_lines() {
    let table = SymbolTable::classic();
    let bank = RngBank::new(0xFACE);

    for round in 1..=1_000 {
        let mut rng = bank.for_round(round);
        let g = generate_spin(3, 3, &table, &mut rng);
        for lines in 1..=3 {
            let wins = check_winnings(&g, lines, 7, &table);
            assert!(wins.winning_lines.iter().all(|&l| (1..=lines).contains(&l)));

            let expected: u64 = wins
                .winning_lines
                .iter()
                .map(|&l| table.payout(g.symbol_at(0, l - 1)) * 7)
                .sum();
            assert_eq!(wins.winnings, expected);
        }
    }
}
