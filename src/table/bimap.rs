//! Insertion-ordered symbol map with a reverse index.

use rustc_hash::FxHashMap;

use crate::base::Symbol;

use super::SymbolMap;

/// A `Symbol → Symbol` map that can also be queried from the value side.
///
/// The forward direction keeps insertion order. Several keys may map to the
/// same value (unmapped symbols falling back to their own name do this); the
/// reverse index then answers with the first such key in forward order.
#[derive(Clone, Debug, Default)]
pub(crate) struct BiMap {
    forward: SymbolMap,
    reverse: FxHashMap<Symbol, Symbol>,
}

impl BiMap {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the value for `from`.
    pub(crate) fn insert(&mut self, from: Symbol, to: Symbol) {
        match self.forward.insert(from.clone(), to.clone()) {
            Some(old) if old == to => return,
            Some(old) => self.unlink(&from, &old),
            None => {}
        }
        self.reverse.entry(to).or_insert(from);
    }

    /// Drop the reverse entry `old → key`, falling back to the next key that
    /// still maps to `old`.
    fn unlink(&mut self, key: &Symbol, old: &Symbol) {
        if self.reverse.get(old) != Some(key) {
            return;
        }
        self.reverse.remove(old);
        if let Some((other, _)) = self.forward.iter().find(|(_, value)| *value == old) {
            self.reverse.insert(old.clone(), other.clone());
        }
    }

    pub(crate) fn get(&self, from: &Symbol) -> Option<&Symbol> {
        self.forward.get(from)
    }

    pub(crate) fn get_by_value(&self, to: &Symbol) -> Option<&Symbol> {
        self.reverse.get(to)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&Symbol, &Symbol)> + '_ {
        self.forward.iter()
    }

    pub(crate) fn values(&self) -> impl Iterator<Item = &Symbol> + '_ {
        self.forward.values()
    }

    pub(crate) fn len(&self) -> usize {
        self.forward.len()
    }

    /// Copy of the forward direction.
    pub(crate) fn to_map(&self) -> SymbolMap {
        self.forward.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_and_reverse() {
        let mut map = BiMap::new();
        map.insert(Symbol::class("a"), Symbol::class("Apple"));

        assert_eq!(map.get(&Symbol::class("a")), Some(&Symbol::class("Apple")));
        assert_eq!(
            map.get_by_value(&Symbol::class("Apple")),
            Some(&Symbol::class("a"))
        );
        assert_eq!(map.get_by_value(&Symbol::class("a")), None);
    }

    #[test]
    fn test_overwrite_updates_reverse() {
        let mut map = BiMap::new();
        map.insert(Symbol::class("a"), Symbol::class("Apple"));
        map.insert(Symbol::class("a"), Symbol::class("Apricot"));

        assert_eq!(map.len(), 1);
        assert_eq!(map.get_by_value(&Symbol::class("Apple")), None);
        assert_eq!(
            map.get_by_value(&Symbol::class("Apricot")),
            Some(&Symbol::class("a"))
        );
    }

    #[test]
    fn test_shared_value_first_key_wins() {
        let mut map = BiMap::new();
        map.insert(Symbol::class("a"), Symbol::class("Same"));
        map.insert(Symbol::class("b"), Symbol::class("Same"));
        assert_eq!(
            map.get_by_value(&Symbol::class("Same")),
            Some(&Symbol::class("a"))
        );

        // moving the first key away hands the reverse entry to the second
        map.insert(Symbol::class("a"), Symbol::class("Other"));
        assert_eq!(
            map.get_by_value(&Symbol::class("Same")),
            Some(&Symbol::class("b"))
        );
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut map = BiMap::new();
        for name in ["c", "a", "b"] {
            map.insert(Symbol::class(name), Symbol::class(name));
        }
        map.insert(Symbol::class("c"), Symbol::class("Cat"));

        let keys: Vec<_> = map.iter().map(|(k, _)| k.name().to_string()).collect();
        assert_eq!(keys, vec!["c", "a", "b"]);
    }
}
