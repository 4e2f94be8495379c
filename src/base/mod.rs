//! Foundation types for the mapping toolchain.
//!
//! This module provides the fundamental types used throughout the crate:
//! - [`Symbol`], [`SymbolKind`] - Identities of mapped classes, fields and methods
//! - [`MappingError`], [`Result`] - The shared error type
//!
//! This module has NO dependencies on other mapmerge modules.

mod error;
mod symbol;

pub use error::{MappingError, Result};
pub use symbol::{Symbol, SymbolKind};
