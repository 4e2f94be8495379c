//! Symbol tables.
//!
//! - [`PairTable`] - one `original → renamed` map (csrg)
//! - [`NamespaceTable`] - an implicit root plus any number of named
//!   renamings of it (tiny v1)
//!
//! Both tables own their maps exclusively; transformations go through their
//! methods so the invariants hold after every call.

mod bimap;
mod namespaced;
mod pair;

use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxBuildHasher;

use crate::base::Symbol;

pub use namespaced::{NamespaceMaps, NamespaceTable};
pub use pair::PairTable;

/// Insertion-ordered `Symbol → Symbol` map.
pub type SymbolMap = IndexMap<Symbol, Symbol, FxBuildHasher>;

/// Insertion-ordered set of symbols.
pub type SymbolSet = IndexSet<Symbol, FxBuildHasher>;
