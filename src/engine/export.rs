//! Exporting a pair of namespaces as a csrg table.

use rayon::prelude::*;
use tracing::info;

use crate::base::{MappingError, Result, Symbol};
use crate::remap::ClassRenames;
use crate::table::{NamespaceTable, PairTable};

/// Build a csrg table translating `source` names into `target` names.
///
/// Owners and descriptors on both sides are expressed in `source` naming,
/// so the result can be applied to artifacts named after `source`. Symbols
/// with no `target` name map to themselves.
pub fn create_pair_table_from_namespace(
    tiny: &NamespaceTable,
    source: &str,
    target: &str,
) -> Result<PairTable> {
    let root = tiny.root_namespace_name();
    if target != root && !tiny.has_namespace(target) {
        return Err(MappingError::unknown_namespace(target));
    }

    let symbols = tiny.symbols_in(source)?;
    let classes = if source == root {
        ClassRenames::new()
    } else {
        ClassRenames::from_pairs(tiny.entries(source)?)
    };

    let pairs = symbols
        .par_iter()
        .map(|symbol| {
            let remapped = tiny
                .get_original_to_target(source, target, symbol)?
                .unwrap_or_else(|| symbol.clone());
            Ok((
                classes.remap_references(symbol),
                classes.remap_references(&remapped),
            ))
        })
        .collect::<Result<Vec<(Symbol, Symbol)>>>()?;

    let table: PairTable = pairs.into_iter().collect();
    info!(source, target, entries = table.len(), "created pair table");
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::WriteTable;

    fn sample() -> NamespaceTable {
        NamespaceTable::parse(
            "v1\tofficial\tspigot\tnamed\n\
             CLASS\ta\tBlock\tnet/Block\n\
             CLASS\tb\tb\tnet/Item\n\
             METHOD\ta\t(Lb;)V\tc\tc\tuse\n",
        )
        .unwrap()
    }

    #[test]
    fn test_export_expresses_references_in_source_naming() {
        let tiny = sample();
        let pairs = create_pair_table_from_namespace(&tiny, "spigot", "named").unwrap();

        assert_eq!(
            pairs.get_renamed(&Symbol::class("Block")),
            Some(&Symbol::class("net/Block"))
        );
        assert_eq!(
            pairs.get_renamed(&Symbol::method("Block", "c", "(Lb;)V")),
            Some(&Symbol::method("Block", "use", "(Lb;)V"))
        );
        assert_eq!(
            pairs.save().unwrap(),
            "Block net/Block\nb net/Item\nBlock c (Lb;)V use\n"
        );
    }

    #[test]
    fn test_export_from_root() {
        let tiny = sample();
        let pairs = create_pair_table_from_namespace(&tiny, "official", "named").unwrap();
        assert_eq!(
            pairs.get_renamed(&Symbol::class("a")),
            Some(&Symbol::class("net/Block"))
        );
        assert_eq!(pairs.len(), 3);
    }

    #[test]
    fn test_export_same_namespace_is_identity() {
        let tiny = sample();
        let pairs = create_pair_table_from_namespace(&tiny, "named", "named").unwrap();
        assert!(pairs.iter().all(|(from, to)| from == to));
    }

    #[test]
    fn test_export_unknown_namespace() {
        let tiny = sample();
        assert!(
            create_pair_table_from_namespace(&tiny, "mojang", "named").is_err()
        );
        assert!(
            create_pair_table_from_namespace(&tiny, "named", "mojang").is_err()
        );
    }
}
