//! Spin generator — fills a column-major grid from the weighted pool.
//!
//! Each column samples from its own fresh pool, so a symbol never repeats
//! inside a column but may show up in any number of columns.

use crate::{
    error::{SlotError, SlotResult},
    pool::WeightedPool,
    rng::ReelRng,
    symbol::{Symbol, SymbolTable},
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Column-major grid of symbols: `columns[col][row]`.
///
/// Serialized as a bare array of columns; deserializing goes through
/// `from_columns`, so a ragged or empty payload is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Symbol>>", into = "Vec<Vec<Symbol>>")]
pub struct Grid {
    columns: Vec<Vec<Symbol>>,
}

impl Grid {
    /// Build a grid from explicit columns. Every column must have the same
    /// non-zero height.
    pub fn from_columns(columns: Vec<Vec<Symbol>>) -> SlotResult<Self> {
        let rows = columns.first().map(Vec::len).unwrap_or(0);
        if rows == 0 {
            return Err(SlotError::InvalidConfig("grid needs at least one row".into()));
        }
        if columns.iter().any(|c| c.len() != rows) {
            return Err(SlotError::InvalidConfig("grid columns differ in height".into()));
        }
        Ok(Self { columns })
    }

    pub fn rows(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    pub fn cols(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Vec<Symbol>] {
        &self.columns
    }

    pub fn symbol_at(&self, col: usize, row: usize) -> Symbol {
        self.columns[col][row]
    }

    /// Symbols along one row, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = Symbol> + '_ {
        self.columns.iter().map(move |c| c[row])
    }
}

impl TryFrom<Vec<Vec<Symbol>>> for Grid {
    type Error = SlotError;

    fn try_from(columns: Vec<Vec<Symbol>>) -> SlotResult<Self> {
        Self::from_columns(columns)
    }
}

impl From<Grid> for Vec<Vec<Symbol>> {
    fn from(grid: Grid) -> Self {
        grid.columns
    }
}

impl fmt::Display for Grid {
    /// One line per row, symbols separated by " | ".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows() {
            if row > 0 {
                writeln!(f)?;
            }
            let cells: Vec<&str> = self.row(row).map(|s| s.as_str()).collect();
            write!(f, "{}", cells.join(" | "))?;
        }
        Ok(())
    }
}

/// Generate `cols` columns of `rows` symbols.
///
/// The table must hold at least `rows` drawable symbols; `MachineConfig`
/// checks this before a session starts.
pub fn generate_spin(rows: usize, cols: usize, table: &SymbolTable, rng: &mut ReelRng) -> Grid {
    debug_assert!(
        table.drawable_symbols() >= rows,
        "{rows} rows need {rows} distinct symbols, table has {}",
        table.drawable_symbols()
    );
    let pool = WeightedPool::from_table(table);
    let columns = (0..cols)
        .map(|_| {
            let mut column_pool = pool.clone();
            (0..rows).filter_map(|_| column_pool.draw(rng)).collect()
        })
        .collect();
    Grid { columns }
}
