//! Class reference rewriting.
//!
//! Renaming a class also renames every reference to it that is embedded in
//! other symbols: the owner of its fields and methods, and the `L<name>;`
//! segments of descriptors that mention it. [`ClassRenames`] holds the
//! class-only view of a rename map and applies it to those references.

mod descriptor;

pub use descriptor::ClassRenames;
