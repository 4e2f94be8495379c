//! Table transformations.
//!
//! Every operation follows the same shape:
//!
//! 1. **Validate** namespace arguments, so a failing call leaves the table as it was
//! 2. **Map** each symbol or entry through a pure function, in parallel with rayon
//! 3. **Insert** the results into the destination table, sequentially
//!
//! | Operation | Effect |
//! |-----------|--------|
//! | [`merge_with_pair_table`] | adds a namespace from a csrg table |
//! | [`replace_namespace`] | overwrites one namespace with another's names |
//! | [`replace_root_namespace`] | makes a namespace the new root |
//! | [`create_pair_table_from_namespace`] | exports two namespaces as a csrg table |
//! | [`apply_package_mapping`] | moves member owners between packages |

mod export;
mod merge;
mod namespace;
mod package;
mod root;

use std::sync::Arc;

use rayon::prelude::*;

use crate::base::{Result, Symbol};
use crate::table::{NamespaceTable, SymbolMap};

pub use export::create_pair_table_from_namespace;
pub use merge::merge_with_pair_table;
pub use namespace::replace_namespace;
pub use package::{PACKAGELESS, apply_package_mapping};
pub use root::{replace_root_namespace, replace_root_namespace_default};

/// Entries of one namespace, ready to be inserted.
type Rebuilt = (Arc<str>, Vec<(Symbol, Symbol)>);

/// Root symbols paired with their names in `namespace`, defaulting to the
/// root symbol itself where the namespace has no entry.
fn names_in(tiny: &NamespaceTable, namespace: &str) -> Result<Vec<(Symbol, Symbol)>> {
    let roots: Vec<&Symbol> = tiny.root_symbols().collect();
    roots
        .par_iter()
        .map(|&root| {
            let renamed = tiny
                .get_renamed(namespace, root)?
                .unwrap_or_else(|| root.clone());
            Ok((root.clone(), renamed))
        })
        .collect()
}

/// Map every entry of a namespace snapshot in parallel, keeping order.
fn map_entries<F>(entries: &SymbolMap, f: F) -> Vec<(Symbol, Symbol)>
where
    F: Fn(&Symbol, &Symbol) -> (Symbol, Symbol) + Sync,
{
    entries.par_iter().map(|(from, to)| f(from, to)).collect()
}

/// Create `namespace` and fill it. The namespace must not exist yet.
fn insert_namespace(
    tiny: &mut NamespaceTable,
    namespace: &str,
    entries: Vec<(Symbol, Symbol)>,
) -> Result<()> {
    tiny.add_namespace(namespace)?;
    for (from, to) in entries {
        tiny.add_mapping(namespace, from, to)?;
    }
    Ok(())
}
