//! # mapmerge-base
//!
//! Core library for merging and converting JVM symbol mapping tables.
//!
//! A mapping table renames classes, fields and methods of compiled artifacts
//! from one naming scheme to another. This crate loads csrg (single rename)
//! and tiny v1 (multi-namespace) tables, combines them, changes which
//! namespace is the root, and writes them back.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! engine  → merge, namespace replace, root replace, csrg export, package moves
//!   ↓
//! io      → csrg / tiny v1 text formats, reader/writer/file helpers
//!   ↓
//! table   → PairTable, NamespaceTable
//!   ↓
//! remap   → Class reference rewriting in owners and descriptors
//!   ↓
//! base    → Primitives (Symbol, SymbolKind, MappingError)
//! ```
//!
//! ## Usage
//!
//! ```
//! use mapmerge::{NamespaceTable, PairTable, Symbol};
//! use mapmerge::engine::merge_with_pair_table;
//! use mapmerge::io::WriteTable;
//!
//! let mut tiny = NamespaceTable::parse("v1\tofficial\tnamed\nCLASS\ta\tnet/Block\n").unwrap();
//! let spigot = PairTable::parse("a Block\n").unwrap();
//!
//! merge_with_pair_table(&mut tiny, &spigot, "spigot").unwrap();
//!
//! assert_eq!(
//!     tiny.get_renamed("spigot", &Symbol::class("a")).unwrap(),
//!     Some(Symbol::class("Block")),
//! );
//! assert_eq!(
//!     tiny.save().unwrap(),
//!     "v1\tofficial\tnamed\tspigot\nCLASS\ta\tnet/Block\tBlock\n",
//! );
//! ```

/// Foundation types: Symbol, SymbolKind, MappingError
pub mod base;

/// Class reference rewriting for owners and descriptors
pub mod remap;

/// Pair and namespace tables
pub mod table;

/// Text formats and file plumbing
pub mod io;

/// Table transformations
pub mod engine;

pub use base::{MappingError, Result, Symbol, SymbolKind};
pub use io::{MissingEntryPolicy, ReadTable, SaveOptions, WriteTable};
pub use remap::ClassRenames;
pub use table::{NamespaceTable, PairTable};
