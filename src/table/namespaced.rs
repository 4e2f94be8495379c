//! Multi-namespace table (the tiny model).
//!
//! A table has one implicit *root* namespace whose symbols are the keys of
//! every other namespace. The root is never stored as a map: asking for a
//! symbol in the root namespace is the identity.

use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use crate::base::{MappingError, Result, Symbol};

use super::bimap::BiMap;
use super::{SymbolMap, SymbolSet};

/// Deep copy of a table's namespaces, as returned by
/// [`NamespaceTable::all_namespaces`].
pub type NamespaceMaps = IndexMap<Arc<str>, SymbolMap, FxBuildHasher>;

/// A set of simultaneous renamings of one root symbol set.
///
/// Every non-root namespace is expected to hold exactly one entry per root
/// symbol. The table does not enforce this while it is being built; saving
/// checks it (see [`SaveOptions`](crate::io::SaveOptions)).
#[derive(Clone, Debug, Default)]
pub struct NamespaceTable {
    root_namespace: Arc<str>,
    roots: SymbolSet,
    namespaces: IndexMap<Arc<str>, BiMap, FxBuildHasher>,
}

impl NamespaceTable {
    /// Create an empty table whose root namespace is `root`.
    pub fn new(root: impl Into<Arc<str>>) -> Self {
        Self {
            root_namespace: root.into(),
            ..Self::default()
        }
    }

    // ========================================================================
    // NAMESPACES
    // ========================================================================

    /// Name of the implicit root namespace.
    pub fn root_namespace_name(&self) -> &str {
        &self.root_namespace
    }

    /// Rename the root namespace. Stored symbols are left as they are.
    pub fn set_root_namespace_name(&mut self, name: impl Into<Arc<str>>) {
        self.root_namespace = name.into();
    }

    /// Create an empty namespace after the existing ones.
    pub fn add_namespace(&mut self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(MappingError::InvalidArgument(
                "namespace name is empty".into(),
            ));
        }
        if name == &*self.root_namespace {
            return Err(MappingError::InvalidArgument(format!(
                "'{}' is the root namespace",
                name
            )));
        }
        if self.namespaces.contains_key(name) {
            return Err(MappingError::InvalidArgument(format!(
                "namespace '{}' already exists",
                name
            )));
        }
        self.namespaces.insert(Arc::from(name), BiMap::new());
        Ok(())
    }

    /// Delete a namespace and all its entries.
    pub fn remove_namespace(&mut self, name: &str) -> Result<()> {
        self.namespaces
            .shift_remove(name)
            .map(|_| ())
            .ok_or_else(|| MappingError::unknown_namespace(name))
    }

    /// Whether `name` is a stored (non-root) namespace.
    pub fn has_namespace(&self, name: &str) -> bool {
        self.namespaces.contains_key(name)
    }

    /// Names of the stored namespaces in column order, root excluded.
    pub fn namespace_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.namespaces.keys().map(|name| name.as_ref())
    }

    /// Deep copy of every namespace's `root → renamed` map.
    ///
    /// Mutating the copy never affects the table.
    pub fn all_namespaces(&self) -> NamespaceMaps {
        self.namespaces
            .iter()
            .map(|(name, map)| (name.clone(), map.to_map()))
            .collect()
    }

    fn namespace(&self, name: &str) -> Result<&BiMap> {
        self.namespaces
            .get(name)
            .ok_or_else(|| MappingError::unknown_namespace(name))
    }

    fn namespace_mut(&mut self, name: &str) -> Result<&mut BiMap> {
        if name == &*self.root_namespace {
            return Err(MappingError::InvalidArgument(format!(
                "cannot add mappings to the root namespace '{}'",
                name
            )));
        }
        self.namespaces
            .get_mut(name)
            .ok_or_else(|| MappingError::unknown_namespace(name))
    }

    // ========================================================================
    // LOOKUPS
    // ========================================================================

    /// Name of a root symbol in `namespace`.
    pub fn get_renamed(&self, namespace: &str, symbol: &Symbol) -> Result<Option<Symbol>> {
        if namespace == &*self.root_namespace {
            return Ok(Some(symbol.clone()));
        }
        Ok(self.namespace(namespace)?.get(symbol).cloned())
    }

    /// Root symbol of a symbol expressed in `namespace`.
    pub fn get_original(&self, namespace: &str, symbol: &Symbol) -> Result<Option<Symbol>> {
        if namespace == &*self.root_namespace {
            return Ok(Some(symbol.clone()));
        }
        Ok(self.namespace(namespace)?.get_by_value(symbol).cloned())
    }

    /// Translate a symbol from one namespace to another through the root.
    pub fn get_original_to_target(
        &self,
        from_namespace: &str,
        to_namespace: &str,
        symbol: &Symbol,
    ) -> Result<Option<Symbol>> {
        if from_namespace == to_namespace {
            // still reject unknown names
            if from_namespace != &*self.root_namespace {
                self.namespace(from_namespace)?;
            }
            return Ok(Some(symbol.clone()));
        }
        match self.get_original(from_namespace, symbol)? {
            Some(original) => self.get_renamed(to_namespace, &original),
            None => {
                // validate the target even when the source has no entry
                if to_namespace != &*self.root_namespace {
                    self.namespace(to_namespace)?;
                }
                Ok(None)
            }
        }
    }

    // ========================================================================
    // MUTATION
    // ========================================================================

    /// Insert or replace the name of root symbol `from` in `namespace`.
    ///
    /// `from` becomes a root symbol if it was not one already.
    pub fn add_mapping(&mut self, namespace: &str, from: Symbol, to: Symbol) -> Result<()> {
        let map = self.namespace_mut(namespace)?;
        map.insert(from.clone(), to);
        self.roots.insert(from);
        Ok(())
    }

    /// Register a root symbol without giving it a name in any namespace.
    pub fn add_root_symbol(&mut self, symbol: Symbol) {
        self.roots.insert(symbol);
    }

    // ========================================================================
    // ENUMERATION
    // ========================================================================

    /// All root symbols in insertion order.
    pub fn root_symbols(&self) -> impl ExactSizeIterator<Item = &Symbol> + '_ {
        self.roots.iter()
    }

    /// Symbols as they are named in `namespace`, in root order.
    pub fn symbols_in(&self, namespace: &str) -> Result<Vec<Symbol>> {
        if namespace == &*self.root_namespace {
            return Ok(self.roots.iter().cloned().collect());
        }
        Ok(self.namespace(namespace)?.values().cloned().collect())
    }

    /// `(root, renamed)` entries of a stored namespace.
    pub fn entries<'a>(
        &'a self,
        namespace: &str,
    ) -> Result<impl Iterator<Item = (&'a Symbol, &'a Symbol)> + use<'a>> {
        if namespace == &*self.root_namespace {
            return Err(MappingError::InvalidArgument(format!(
                "the root namespace '{}' has no stored entries",
                namespace
            )));
        }
        Ok(self.namespace(namespace)?.iter())
    }

    /// Number of entries stored for `namespace`.
    pub fn namespace_len(&self, namespace: &str) -> Result<usize> {
        if namespace == &*self.root_namespace {
            return Ok(self.roots.len());
        }
        Ok(self.namespace(namespace)?.len())
    }

    /// Number of root symbols.
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Replace the root symbol set. Used when the root namespace changes.
    pub(crate) fn reset_roots(&mut self, roots: SymbolSet) {
        self.roots = roots;
    }
}
