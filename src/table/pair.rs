//! Single-namespace `original → renamed` table (the csrg model).

use crate::base::Symbol;

use super::SymbolMap;

/// A plain rename table from original symbols to renamed symbols.
///
/// There is no namespace concept: every key has exactly one renamed form.
/// Entries keep insertion order so that saving is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PairTable {
    entries: SymbolMap,
}

impl PairTable {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the renamed form of `from`. Last write wins.
    pub fn add(&mut self, from: Symbol, to: Symbol) {
        self.entries.insert(from, to);
    }

    /// Renamed form of an original symbol.
    pub fn get_renamed(&self, from: &Symbol) -> Option<&Symbol> {
        self.entries.get(from)
    }

    /// Original symbol of a renamed one.
    ///
    /// Linear scan; when several originals share a renamed form, the first
    /// inserted one is returned.
    pub fn get_original(&self, to: &Symbol) -> Option<&Symbol> {
        self.entries
            .iter()
            .find(|(_, renamed)| *renamed == to)
            .map(|(original, _)| original)
    }

    /// All original symbols in insertion order.
    pub fn original_symbols(&self) -> impl Iterator<Item = &Symbol> + '_ {
        self.entries.keys()
    }

    /// All renamed symbols in insertion order.
    pub fn renamed_symbols(&self) -> impl Iterator<Item = &Symbol> + '_ {
        self.entries.values()
    }

    /// Iterate over `(original, renamed)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, &Symbol)> + '_ {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a PairTable {
    type Item = (&'a Symbol, &'a Symbol);
    type IntoIter = indexmap::map::Iter<'a, Symbol, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<(Symbol, Symbol)> for PairTable {
    fn from_iter<T: IntoIterator<Item = (Symbol, Symbol)>>(iter: T) -> Self {
        let mut table = PairTable::new();
        for (from, to) in iter {
            table.add(from, to);
        }
        table
    }
}
