//! Reel symbols and the fixed abundance/payout tables.
//!
//! RULE: The symbol table is an immutable value. It is built once and
//! passed explicitly to the spin generator and the payline scorer.

use crate::types::Credits;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Symbol {
    A,
    B,
    C,
    D,
}

impl Symbol {
    /// Every symbol, in table order.
    pub const ALL: [Symbol; 4] = [Symbol::A, Symbol::B, Symbol::C, Symbol::D];

    fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
            Self::D => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two fixed mappings: how often a symbol lands and what it pays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    abundance: [u32; 4],
    payout:    [Credits; 4],
}

impl SymbolTable {
    /// A:2/5, B:4/4, C:6/3, D:8/2 (abundance/payout).
    pub fn classic() -> Self {
        Self {
            abundance: [2, 4, 6, 8],
            payout:    [5, 4, 3, 2],
        }
    }

    /// Relative draw weight of `symbol`.
    pub fn abundance(&self, symbol: Symbol) -> u32 {
        self.abundance[symbol.index()]
    }

    /// Multiplier applied to the per-line bet when `symbol` wins a line.
    pub fn payout(&self, symbol: Symbol) -> Credits {
        self.payout[symbol.index()]
    }

    /// Highest payout multiplier in the table.
    pub fn max_payout(&self) -> Credits {
        self.payout.iter().copied().max().unwrap_or(0)
    }

    /// Sum of all abundance weights (size of a fresh pool).
    pub fn total_abundance(&self) -> u32 {
        self.abundance.iter().sum()
    }

    /// Number of symbols with a non-zero weight.
    pub fn drawable_symbols(&self) -> usize {
        self.abundance.iter().filter(|&&w| w > 0).count()
    }
}

impl Default for SymbolTable {
    fn default() -> Self { Self::classic() }
}
