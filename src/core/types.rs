//! Structured type codes for parsed C++ signatures.
//!
//! The external header parser describes every return value and argument as a
//! `{base type, indirection, qualifiers}` triple. [`TypeCode`] is that triple
//! as a structured record, together with the small set of queries the
//! synthesis core performs on it. The core never looks further into a type
//! than these queries allow.

use serde::{Deserialize, Serialize};

/// Base C++ type of a parsed value, stripped of indirection and qualifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseType {
    Void,
    Bool,
    Char,
    UnsignedChar,
    Short,
    UnsignedShort,
    Int,
    UnsignedInt,
    Long,
    UnsignedLong,
    /// The toolkit-wide index typedef (`idtype`), distinct from `Int` so the
    /// two never silently unify.
    IdType,
    Float,
    Double,
    /// An instance of an externally defined class. The class name itself
    /// travels alongside the type code in the signature records.
    Object,
    /// A function pointer.
    Function,
    /// A type the parser recognized but could not place in any bucket above.
    Unknown,
}

/// Indirection of a parsed type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Indirection {
    #[default]
    None,
    /// `T&`
    Ref,
    /// `T*`
    Pointer,
    /// `const T*`
    ConstPointer,
    /// `T**`
    PointerPointer,
    /// `T*&`
    PointerRef,
    /// `const T*&`
    ConstPointerRef,
}

/// One parsed type: base, indirection, and qualifier flags.
///
/// `is_const` is the outer `const` qualifier on the declaration itself; the
/// const-ness of a pointee is part of [`Indirection`]. `is_static` only ever
/// appears on method return types, where the parser records the method's
/// storage class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeCode {
    pub base: BaseType,
    #[serde(default)]
    pub indirection: Indirection,
    #[serde(default)]
    pub is_const: bool,
    #[serde(default)]
    pub is_static: bool,
}

impl TypeCode {
    /// A plain, unqualified, non-indirect type.
    pub const fn plain(base: BaseType) -> Self {
        TypeCode {
            base,
            indirection: Indirection::None,
            is_const: false,
            is_static: false,
        }
    }

    /// `T*`
    pub const fn pointer(base: BaseType) -> Self {
        TypeCode {
            base,
            indirection: Indirection::Pointer,
            is_const: false,
            is_static: false,
        }
    }

    /// `const T*`
    pub const fn const_pointer(base: BaseType) -> Self {
        TypeCode {
            base,
            indirection: Indirection::ConstPointer,
            is_const: false,
            is_static: false,
        }
    }

    /// `T&`
    pub const fn reference(base: BaseType) -> Self {
        TypeCode {
            base,
            indirection: Indirection::Ref,
            is_const: false,
            is_static: false,
        }
    }

    pub const fn with_indirection(mut self, indirection: Indirection) -> Self {
        self.indirection = indirection;
        self
    }

    pub const fn with_const(mut self) -> Self {
        self.is_const = true;
        self
    }

    pub const fn with_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// The base type, ignoring indirection and qualifiers.
    pub fn base_type(&self) -> BaseType {
        self.base
    }

    /// The indirection kind.
    pub fn indirection(&self) -> Indirection {
        self.indirection
    }

    /// Whether any qualifier (`const`/`static`) is set.
    pub fn has_qualifier(&self) -> bool {
        self.is_const || self.is_static
    }

    /// The same type with all qualifiers cleared.
    pub fn strip_qualifier(mut self) -> Self {
        self.is_const = false;
        self.is_static = false;
        self
    }

    /// Whether the type has any indirection at all.
    pub fn is_indirect(&self) -> bool {
        self.indirection != Indirection::None
    }

    /// Whether the type is a single-level pointer (`T*` or `const T*`).
    pub fn is_pointer(&self) -> bool {
        matches!(
            self.indirection,
            Indirection::Pointer | Indirection::ConstPointer
        )
    }

    /// Whether the `const` qualifier is set.
    pub fn is_const(&self) -> bool {
        self.is_const
    }

    /// Whether the base type matches and the type carries no indirection.
    /// Qualifiers are not considered.
    pub fn is_plain_base(&self, base: BaseType) -> bool {
        self.base == base && !self.is_indirect()
    }
}
