//! Overwriting one namespace with the names of another.

use tracing::info;

use crate::base::{MappingError, Result};
use crate::table::NamespaceTable;

use super::{insert_namespace, names_in};

/// Make `to_replace` hold the names of `replaced_by` for every root symbol.
///
/// Root symbols without an entry in `replaced_by` are named as in the root.
/// `replaced_by` may be the root namespace, which resets `to_replace` to
/// the identity. Recreating `to_replace` moves it to the last column.
pub fn replace_namespace(
    tiny: &mut NamespaceTable,
    to_replace: &str,
    replaced_by: &str,
) -> Result<()> {
    if to_replace == replaced_by {
        return Ok(());
    }
    if to_replace == tiny.root_namespace_name() {
        return Err(MappingError::InvalidArgument(format!(
            "cannot overwrite the root namespace '{}'",
            to_replace
        )));
    }
    if !tiny.has_namespace(to_replace) {
        return Err(MappingError::unknown_namespace(to_replace));
    }

    let entries = names_in(tiny, replaced_by)?;

    tiny.remove_namespace(to_replace)?;
    insert_namespace(tiny, to_replace, entries)?;

    info!(
        to_replace,
        replaced_by,
        symbols = tiny.len(),
        "replaced namespace"
    );
    Ok(())
}
