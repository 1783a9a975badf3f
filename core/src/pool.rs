//! Weighted pool for sampling symbols without replacement.
//!
//! The pool repeats each symbol `abundance` times. A draw picks one entry
//! uniformly and then removes every remaining copy of that symbol, so the
//! first draw is abundance-weighted and a symbol never comes out twice.

use crate::{rng::ReelRng, symbol::{Symbol, SymbolTable}};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedPool {
    entries: Vec<Symbol>,
}

impl WeightedPool {
    pub fn from_table(table: &SymbolTable) -> Self {
        let mut entries = Vec::with_capacity(table.total_abundance() as usize);
        for symbol in Symbol::ALL {
            for _ in 0..table.abundance(symbol) {
                entries.push(symbol);
            }
        }
        Self { entries }
    }

    /// Remove and return one symbol. `None` once the pool is exhausted.
    pub fn draw(&mut self, rng: &mut ReelRng) -> Option<Symbol> {
        if self.entries.is_empty() {
            return None;
        }
        let picked = self.entries[rng.next_index(self.entries.len())];
        self.entries.retain(|&s| s != picked);
        Some(picked)
    }

    /// Entries left, counting weight copies.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, symbol: Symbol) -> bool {
        self.entries.contains(&symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::RngBank;

    #[test]
    fn pool_repeats_each_symbol_by_abundance() {
        let pool = WeightedPool::from_table(&SymbolTable::classic());
        assert_eq!(pool.len(), 20);
        assert!(Symbol::ALL.iter().all(|&s| pool.contains(s)));
    }

    #[test]
    fn draw_removes_every_copy_of_the_symbol() {
        let mut rng = RngBank::new(9).for_round(1);
        let mut pool = WeightedPool::from_table(&SymbolTable::classic());
        let first = pool.draw(&mut rng).unwrap();
        assert!(!pool.contains(first));
        assert_eq!(
            pool.len(),
            20 - SymbolTable::classic().abundance(first) as usize
        );
    }

    #[test]
    fn pool_exhausts_after_every_symbol_is_drawn() {
        let mut rng = RngBank::new(3).for_round(1);
        let mut pool = WeightedPool::from_table(&SymbolTable::classic());
        let mut drawn = Vec::new();
        while let Some(s) = pool.draw(&mut rng) {
            drawn.push(s);
        }
        drawn.sort();
        assert_eq!(drawn, Symbol::ALL.to_vec());
        assert!(pool.is_empty());
        assert_eq!(pool.draw(&mut rng), None);
    }
}
