//! Descriptor scanning and owner rewriting.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::base::{Symbol, SymbolKind};

/// Class-to-class renames, keyed by the old internal class name.
///
/// Built from any `(from, to)` symbol pairs; pairs that are not class to
/// class are ignored.
#[derive(Clone, Debug, Default)]
pub struct ClassRenames {
    classes: FxHashMap<SmolStr, SmolStr>,
}

impl ClassRenames {
    /// Create an empty rename set (rewriting is then the identity).
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the class pairs out of a symbol rename map.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a Symbol, &'a Symbol)>,
    {
        pairs
            .into_iter()
            .filter(|(from, to)| {
                from.kind() == SymbolKind::Class && to.kind() == SymbolKind::Class
            })
            .map(|(from, to)| (SmolStr::new(from.name()), SmolStr::new(to.name())))
            .collect()
    }

    /// Add a single class rename.
    pub fn insert(&mut self, from: impl Into<SmolStr>, to: impl Into<SmolStr>) {
        self.classes.insert(from.into(), to.into());
    }

    /// Look up the new name of a class.
    pub fn get(&self, class: &str) -> Option<&str> {
        self.classes.get(class).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Rewrite every `L<class>;` reference in a descriptor.
    ///
    /// Everything outside the references (primitive letters, array markers,
    /// parentheses) is copied verbatim. An `L` with no terminating `;` after
    /// it ends the scan and the rest of the input is copied unchanged.
    pub fn remap_descriptor(&self, descriptor: &str) -> SmolStr {
        if self.classes.is_empty() || !descriptor.contains('L') {
            return SmolStr::new(descriptor);
        }

        // 'L' and ';' are ASCII, so every index below is a char boundary.
        let bytes = descriptor.as_bytes();
        let mut out = String::with_capacity(descriptor.len());
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] == b'L' {
                let Some(len) = descriptor[i + 1..].find(';') else {
                    out.push_str(&descriptor[i..]);
                    break;
                };
                let end = i + 1 + len;
                let class = &descriptor[i + 1..end];
                out.push('L');
                out.push_str(self.get(class).unwrap_or(class));
                out.push(';');
                i = end + 1;
                continue;
            }

            let next = descriptor[i..].find('L').map_or(bytes.len(), |n| i + n);
            out.push_str(&descriptor[i..next]);
            i = next;
        }
        SmolStr::from(out)
    }

    /// Rewrite a member's owner by direct class lookup.
    pub fn remap_owner(&self, symbol: &Symbol) -> Symbol {
        let owner = symbol
            .owner()
            .map(|owner| SmolStr::new(self.get(owner).unwrap_or(owner)));
        let descriptor = symbol.descriptor().map(SmolStr::new);
        symbol.with_references(owner, descriptor)
    }

    /// Rewrite both the owner and the descriptor of a symbol.
    ///
    /// The symbol's own name is never touched, even for classes.
    pub fn remap_references(&self, symbol: &Symbol) -> Symbol {
        if self.classes.is_empty() {
            return symbol.clone();
        }
        let moved = self.remap_owner(symbol);
        let owner = moved.owner().map(SmolStr::new);
        let descriptor = moved.descriptor().map(|desc| self.remap_descriptor(desc));
        moved.with_references(owner, descriptor)
    }
}

impl FromIterator<(SmolStr, SmolStr)> for ClassRenames {
    fn from_iter<T: IntoIterator<Item = (SmolStr, SmolStr)>>(iter: T) -> Self {
        Self {
            classes: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn foo_renames() -> ClassRenames {
        let mut renames = ClassRenames::new();
        renames.insert("foo/Bar", "x/Bar");
        renames.insert("foo/Baz", "x/Baz");
        renames
    }

    #[test]
    fn test_remap_descriptor_multiple_references() {
        let renames = foo_renames();
        assert_eq!(
            renames.remap_descriptor("(Lfoo/Bar;I)Lfoo/Baz;"),
            "(Lx/Bar;I)Lx/Baz;"
        );
    }

    #[test]
    fn test_remap_descriptor_without_references() {
        let renames = foo_renames();
        assert_eq!(renames.remap_descriptor("(II)V"), "(II)V");
        assert_eq!(renames.remap_descriptor(""), "");
    }

    #[test]
    fn test_remap_descriptor_unknown_class_kept() {
        let renames = foo_renames();
        assert_eq!(
            renames.remap_descriptor("([Ljava/lang/String;Lfoo/Bar;)[[Lfoo/Qux;"),
            "([Ljava/lang/String;Lx/Bar;)[[Lfoo/Qux;"
        );
    }

    #[test]
    fn test_remap_descriptor_unterminated_reference() {
        let renames = foo_renames();
        assert_eq!(
            renames.remap_descriptor("(Lfoo/Bar;Lfoo/Baz"),
            "(Lx/Bar;Lfoo/Baz"
        );
    }

    #[test]
    fn test_remap_descriptor_field_type() {
        let renames = foo_renames();
        assert_eq!(renames.remap_descriptor("Lfoo/Bar;"), "Lx/Bar;");
    }

    #[test]
    fn test_from_pairs_ignores_members() {
        let pairs = vec![
            (Symbol::class("a"), Symbol::class("Apple")),
            (Symbol::field("a", "b"), Symbol::field("a", "count")),
        ];
        let renames = ClassRenames::from_pairs(pairs.iter().map(|(f, t)| (f, t)));
        assert_eq!(renames.len(), 1);
        assert_eq!(renames.get("a"), Some("Apple"));
        assert_eq!(renames.get("b"), None);
    }

    #[test]
    fn test_remap_owner_only() {
        let renames = foo_renames();
        let method = Symbol::method("foo/Bar", "run", "(Lfoo/Baz;)V");
        let remapped = renames.remap_owner(&method);
        assert_eq!(remapped, Symbol::method("x/Bar", "run", "(Lfoo/Baz;)V"));
    }

    #[test]
    fn test_remap_references() {
        let renames = foo_renames();
        let method = Symbol::method("foo/Bar", "run", "(Lfoo/Baz;)V");
        assert_eq!(
            renames.remap_references(&method),
            Symbol::method("x/Bar", "run", "(Lx/Baz;)V")
        );

        // class names themselves are not references
        assert_eq!(
            renames.remap_references(&Symbol::class("foo/Bar")),
            Symbol::class("foo/Bar")
        );
    }
}
