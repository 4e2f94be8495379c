//! Merging a csrg table into a tiny table as a new namespace.

use rayon::prelude::*;
use tracing::info;

use crate::base::{MappingError, Result, Symbol, SymbolKind};
use crate::table::{NamespaceTable, PairTable};

use super::insert_namespace;

/// Add `namespace` to `tiny`, naming every root symbol as `pairs` does.
///
/// Both tables must share the same root naming. Fields are looked up with
/// their descriptor first and then without it, since csrg fields have none;
/// a field found that way keeps the root field's owner and descriptor.
/// Root symbols that `pairs` does not rename keep their root name.
pub fn merge_with_pair_table(
    tiny: &mut NamespaceTable,
    pairs: &PairTable,
    namespace: &str,
) -> Result<()> {
    if tiny.has_namespace(namespace) || namespace == tiny.root_namespace_name() {
        return Err(MappingError::InvalidArgument(format!(
            "namespace '{}' already exists",
            namespace
        )));
    }

    let roots: Vec<&Symbol> = tiny.root_symbols().collect();
    let merged: Vec<(Symbol, Symbol)> = roots
        .par_iter()
        .map(|&root| {
            let renamed = lookup(pairs, root).unwrap_or_else(|| root.clone());
            (root.clone(), renamed)
        })
        .collect();

    let renamed = merged.iter().filter(|(from, to)| from != to).count();
    insert_namespace(tiny, namespace, merged)?;

    info!(
        namespace,
        symbols = tiny.len(),
        renamed,
        "merged pair table"
    );
    Ok(())
}

fn lookup(pairs: &PairTable, symbol: &Symbol) -> Option<Symbol> {
    if let Some(renamed) = pairs.get_renamed(symbol) {
        return Some(renamed.clone());
    }
    if symbol.kind() == SymbolKind::Field && symbol.descriptor().is_some() {
        return pairs
            .get_renamed(&symbol.without_descriptor())
            .map(|renamed| symbol.renamed(renamed.name()));
    }
    None
}
