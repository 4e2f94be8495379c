//! Symbol identities for mapped classes, fields and methods.

use smol_str::SmolStr;
use std::fmt;

/// The kind of entity a [`Symbol`] names.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SymbolKind {
    Class,
    Field,
    Method,
}

impl SymbolKind {
    /// The tag used for this kind in the tiny v1 format.
    pub const fn tag(self) -> &'static str {
        match self {
            SymbolKind::Class => "CLASS",
            SymbolKind::Field => "FIELD",
            SymbolKind::Method => "METHOD",
        }
    }

    /// Parse a tiny v1 entry tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "CLASS" => Some(SymbolKind::Class),
            "FIELD" => Some(SymbolKind::Field),
            "METHOD" => Some(SymbolKind::Method),
            _ => None,
        }
    }

    /// Whether this kind is a class member (field or method).
    pub const fn is_member(self) -> bool {
        matches!(self, SymbolKind::Field | SymbolKind::Method)
    }
}

/// The identity of a mapped entity.
///
/// A `Symbol` is an immutable value: two symbols name the same entity iff
/// kind, name, owner and descriptor are all equal. Strings are stored as
/// [`SmolStr`] so that the many copies made while rebuilding tables stay cheap.
///
/// - Classes carry neither owner nor descriptor.
/// - Methods always carry an owner and a descriptor.
/// - Fields carry an owner, and a descriptor only when they come from a
///   tiny table (the csrg format has no field descriptors).
#[derive(Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Symbol {
    kind: SymbolKind,
    name: SmolStr,
    owner: Option<SmolStr>,
    descriptor: Option<SmolStr>,
}

impl Symbol {
    /// Create a symbol from all four parts.
    pub fn new(
        kind: SymbolKind,
        name: impl Into<SmolStr>,
        owner: Option<SmolStr>,
        descriptor: Option<SmolStr>,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            owner,
            descriptor,
        }
    }

    /// A class symbol named by its internal (slash separated) name.
    pub fn class(name: impl Into<SmolStr>) -> Self {
        Self::new(SymbolKind::Class, name, None, None)
    }

    /// A field symbol without a descriptor.
    pub fn field(owner: impl Into<SmolStr>, name: impl Into<SmolStr>) -> Self {
        Self::new(SymbolKind::Field, name, Some(owner.into()), None)
    }

    /// A field symbol with its type descriptor.
    pub fn typed_field(
        owner: impl Into<SmolStr>,
        name: impl Into<SmolStr>,
        descriptor: impl Into<SmolStr>,
    ) -> Self {
        Self::new(
            SymbolKind::Field,
            name,
            Some(owner.into()),
            Some(descriptor.into()),
        )
    }

    /// A method symbol.
    pub fn method(
        owner: impl Into<SmolStr>,
        name: impl Into<SmolStr>,
        descriptor: impl Into<SmolStr>,
    ) -> Self {
        Self::new(
            SymbolKind::Method,
            name,
            Some(owner.into()),
            Some(descriptor.into()),
        )
    }

    #[inline]
    pub fn kind(&self) -> SymbolKind {
        self.kind
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Internal name of the declaring class, if this is a member.
    #[inline]
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    #[inline]
    pub fn descriptor(&self) -> Option<&str> {
        self.descriptor.as_deref()
    }

    /// Same symbol with its descriptor removed.
    ///
    /// Used to look up tiny fields in csrg tables, which never record one.
    pub fn without_descriptor(&self) -> Self {
        Self {
            descriptor: None,
            ..self.clone()
        }
    }

    /// Same symbol under a different name, keeping owner and descriptor.
    pub fn renamed(&self, name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    /// Same symbol with a replaced owner and descriptor.
    pub fn with_references(&self, owner: Option<SmolStr>, descriptor: Option<SmolStr>) -> Self {
        Self {
            kind: self.kind,
            name: self.name.clone(),
            owner,
            descriptor,
        }
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Symbol")
            .field("kind", &self.kind)
            .field("name", &self.name)
            .field("owner", &self.owner)
            .field("descriptor", &self.descriptor)
            .finish()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.owner, &self.descriptor) {
            (Some(owner), Some(desc)) => {
                write!(f, "{} {}.{}{}", self.kind.tag(), owner, self.name, desc)
            }
            (Some(owner), None) => write!(f, "{} {}.{}", self.kind.tag(), owner, self.name),
            (None, Some(desc)) => write!(f, "{} {}{}", self.kind.tag(), self.name, desc),
            (None, None) => write!(f, "{} {}", self.kind.tag(), self.name),
        }
    }
}
