//! Changing which namespace is the root.
//!
//! The root namespace is only present as the keys of the other namespaces,
//! so promoting a namespace means rekeying every map. Keys also embed class
//! names in their owner and descriptor; those are rewritten through the same
//! translation so that members keep pointing at their (renamed) classes.

use std::sync::Arc;

use rayon::prelude::*;
use tracing::info;

use crate::base::{MappingError, Result, Symbol};
use crate::remap::ClassRenames;
use crate::table::{NamespaceTable, SymbolMap, SymbolSet};

use super::{Rebuilt, insert_namespace, map_entries, names_in};

/// Promote `replaced_by` to be the root namespace, named `new_root`.
///
/// Every namespace except `replaced_by` is rekeyed from old root symbols to
/// their `replaced_by` names, with class references inside owners and
/// descriptors rewritten to match. Values are kept as they were.
///
/// The former root survives as an ordinary namespace in the first column,
/// unless it is `replaced_by` itself or `new_root` reuses its name.
pub fn replace_root_namespace(
    tiny: &mut NamespaceTable,
    replaced_by: &str,
    new_root: &str,
) -> Result<()> {
    let old_root: Arc<str> = Arc::from(tiny.root_namespace_name());
    let promotes_root = replaced_by == &*old_root;
    if !promotes_root && !tiny.has_namespace(replaced_by) {
        return Err(MappingError::unknown_namespace(replaced_by));
    }
    if new_root.is_empty() {
        return Err(MappingError::InvalidArgument(
            "root namespace name is empty".into(),
        ));
    }
    if new_root != replaced_by && tiny.has_namespace(new_root) {
        return Err(MappingError::InvalidArgument(format!(
            "new root '{}' collides with an existing namespace",
            new_root
        )));
    }

    // old root symbol -> its replaced_by form
    let target: SymbolMap = names_in(tiny, replaced_by)?.into_iter().collect();
    let classes = ClassRenames::from_pairs(&target);
    let rekey = |original: &Symbol| {
        classes.remap_references(target.get(original).unwrap_or(original))
    };

    let snapshot = tiny.all_namespaces();
    let rebuilt: Vec<Rebuilt> = snapshot
        .iter()
        .filter(|&(name, _)| &**name != replaced_by)
        .map(|(name, entries)| {
            let entries = map_entries(entries, |original, renamed| {
                (rekey(original), renamed.clone())
            });
            (name.clone(), entries)
        })
        .collect();

    let keeps_old_root = !promotes_root && new_root != &*old_root;
    let former_root: Option<Vec<(Symbol, Symbol)>> = keeps_old_root.then(|| {
        target
            .par_keys()
            .map(|original| {
                let key = rekey(original);
                let value = key.renamed(original.name());
                (key, value)
            })
            .collect()
    });
    let roots: SymbolSet = target.keys().map(rekey).collect();

    for name in snapshot.keys() {
        tiny.remove_namespace(name)?;
    }
    tiny.set_root_namespace_name(new_root);
    tiny.reset_roots(roots);
    if let Some(entries) = former_root {
        insert_namespace(tiny, &old_root, entries)?;
    }
    for (name, entries) in rebuilt {
        insert_namespace(tiny, &name, entries)?;
    }

    info!(
        old_root = &*old_root,
        new_root,
        replaced_by,
        symbols = tiny.len(),
        rewritten_classes = classes.len(),
        "replaced root namespace"
    );
    Ok(())
}

/// [`replace_root_namespace`] keeping `replaced_by`'s name for the new root.
pub fn replace_root_namespace_default(
    tiny: &mut NamespaceTable,
    replaced_by: &str,
) -> Result<()> {
    replace_root_namespace(tiny, replaced_by, replaced_by)
}
