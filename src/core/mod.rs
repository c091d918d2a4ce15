//! Core data model: the parsed class description consumed by the analysis
//! and the property model it produces.
//!
//! The input side ([`ParsedClass`], [`ParsedMethod`], [`ParsedArg`]) mirrors
//! what an external C++ header parser emits, serialized as JSON. The output
//! side ([`ClassProperties`], [`Property`], [`MethodRole`], [`RoleSet`]) is
//! the synthesized property model. A `ClassProperties` is built once from a
//! frozen class description and owns every allocation it holds; dropping it
//! releases everything.

pub mod types;

use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize, Serializer};

pub use types::{BaseType, Indirection, TypeCode};

/// C++ access level of a method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Access {
    #[default]
    Public,
    Protected,
    Private,
}

/// One parsed method argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedArg {
    pub type_code: TypeCode,
    /// Class name, when the base type is [`BaseType::Object`].
    #[serde(default)]
    pub class_name: Option<String>,
    /// Declared array extent, 0 for scalars.
    #[serde(default)]
    pub count: u32,
}

impl ParsedArg {
    pub fn new(type_code: TypeCode) -> Self {
        ParsedArg {
            type_code,
            class_name: None,
            count: 0,
        }
    }
}

/// One parsed member function, as produced by the external header parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedMethod {
    pub name: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub access: Access,
    /// The method is an overloaded operator.
    #[serde(default)]
    pub is_operator: bool,
    /// The method is marked as legacy/deprecated.
    #[serde(default)]
    pub is_legacy: bool,
    /// The parser could not fully decode an array signature.
    #[serde(default)]
    pub array_failure: bool,
    pub return_type: TypeCode,
    /// Class name of the return value, when its base type is `Object`.
    #[serde(default)]
    pub return_class: Option<String>,
    /// Externally attached element count for a pointer return value that the
    /// signature itself could not reveal.
    #[serde(default)]
    pub hint_size: Option<u32>,
    #[serde(default)]
    pub args: Vec<ParsedArg>,
}

/// A fully parsed class: name plus every member function of its API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedClass {
    pub name: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub methods: Vec<ParsedMethod>,
}

/// The part a single method plays with respect to its property.
///
/// Each classified method contributes exactly one role to exactly one
/// access-level role set of its property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MethodRole {
    /// `type GetValue()`
    BasicGet,
    /// `void SetValue(type)`
    BasicSet,
    /// `void GetValue(type&, type&, ...)`
    MultiGet,
    /// `void SetValue(type, type, ...)`
    MultiSet,
    /// `type GetValue(int i)`
    IndexGet,
    /// `void SetValue(int i, type)`
    IndexSet,
    /// `type GetNthValue(int i)`
    NthGet,
    /// `void SetNthValue(int i, type)`
    NthSet,
    /// `void GetValue(type*)` filling a caller-provided array
    RhsGet,
    /// `void GetValue(int i, type*)`
    IndexRhsGet,
    /// `void GetNthValue(int i, type*)`
    NthRhsGet,
    /// `const char* GetValueAsString()`
    StringGet,
    /// `void SetValueToState()`
    EnumSet,
    /// `void ValueOn()`
    BoolOn,
    /// `void ValueOff()`
    BoolOff,
    /// `type GetValueMinValue()`
    MinGet,
    /// `type GetValueMaxValue()`
    MaxGet,
    /// `int GetNumberOfValues()`
    GetNum,
    /// `void SetNumberOfValues(int)`
    SetNum,
    /// `void AddValue(Object*)`
    BasicAdd,
    /// `void AddValue(type, type, ...)`
    MultiAdd,
    /// `void AddValue(int i, Object*)`
    IndexAdd,
    /// `void RemoveValue(Object*)`
    BasicRem,
    /// `void RemoveValue(int i, Object*)`
    IndexRem,
    /// `void RemoveAllValues()`
    RemoveAll,
}

impl MethodRole {
    /// Every role, in declaration order.
    pub const ALL: [MethodRole; 25] = [
        MethodRole::BasicGet,
        MethodRole::BasicSet,
        MethodRole::MultiGet,
        MethodRole::MultiSet,
        MethodRole::IndexGet,
        MethodRole::IndexSet,
        MethodRole::NthGet,
        MethodRole::NthSet,
        MethodRole::RhsGet,
        MethodRole::IndexRhsGet,
        MethodRole::NthRhsGet,
        MethodRole::StringGet,
        MethodRole::EnumSet,
        MethodRole::BoolOn,
        MethodRole::BoolOff,
        MethodRole::MinGet,
        MethodRole::MaxGet,
        MethodRole::GetNum,
        MethodRole::SetNum,
        MethodRole::BasicAdd,
        MethodRole::MultiAdd,
        MethodRole::IndexAdd,
        MethodRole::BasicRem,
        MethodRole::IndexRem,
        MethodRole::RemoveAll,
    ];

    /// The stable canonical token for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            MethodRole::BasicGet => "BASIC_GET",
            MethodRole::BasicSet => "BASIC_SET",
            MethodRole::MultiGet => "MULTI_GET",
            MethodRole::MultiSet => "MULTI_SET",
            MethodRole::IndexGet => "INDEX_GET",
            MethodRole::IndexSet => "INDEX_SET",
            MethodRole::NthGet => "NTH_GET",
            MethodRole::NthSet => "NTH_SET",
            MethodRole::RhsGet => "RHS_GET",
            MethodRole::IndexRhsGet => "INDEX_RHS_GET",
            MethodRole::NthRhsGet => "NTH_RHS_GET",
            MethodRole::StringGet => "STRING_GET",
            MethodRole::EnumSet => "ENUM_SET",
            MethodRole::BoolOn => "BOOL_ON",
            MethodRole::BoolOff => "BOOL_OFF",
            MethodRole::MinGet => "MIN_GET",
            MethodRole::MaxGet => "MAX_GET",
            MethodRole::GetNum => "GET_NUM",
            MethodRole::SetNum => "SET_NUM",
            MethodRole::BasicAdd => "BASIC_ADD",
            MethodRole::MultiAdd => "MULTI_ADD",
            MethodRole::IndexAdd => "INDEX_ADD",
            MethodRole::BasicRem => "BASIC_REM",
            MethodRole::IndexRem => "INDEX_REM",
            MethodRole::RemoveAll => "REMOVEALL",
        }
    }

    fn bit(self) -> u32 {
        1u32 << (self as u32)
    }
}

impl Serialize for MethodRole {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Compact set of [`MethodRole`]s.
///
/// Roles are semantically one-of-N per method; the set form exists because a
/// property accumulates the roles of all its contributing methods.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoleSet(u32);

impl RoleSet {
    pub const EMPTY: RoleSet = RoleSet(0);

    pub fn insert(&mut self, role: MethodRole) {
        self.0 |= role.bit();
    }

    pub fn contains(&self, role: MethodRole) -> bool {
        self.0 & role.bit() != 0
    }

    /// Whether any of the given roles is present.
    pub fn contains_any(&self, roles: &[MethodRole]) -> bool {
        roles.iter().any(|r| self.contains(*r))
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn union(self, other: RoleSet) -> RoleSet {
        RoleSet(self.0 | other.0)
    }

    /// Roles in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = MethodRole> + '_ {
        MethodRole::ALL.iter().copied().filter(|r| self.contains(*r))
    }
}

impl FromIterator<MethodRole> for RoleSet {
    fn from_iter<I: IntoIterator<Item = MethodRole>>(iter: I) -> Self {
        let mut set = RoleSet::EMPTY;
        for role in iter {
            set.insert(role);
        }
        set
    }
}

impl std::ops::BitOr for RoleSet {
    type Output = RoleSet;

    fn bitor(self, rhs: RoleSet) -> RoleSet {
        self.union(rhs)
    }
}

impl Serialize for RoleSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(None)?;
        for role in self.iter() {
            seq.serialize_element(role.as_str())?;
        }
        seq.end()
    }
}

/// One synthesized property of a class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    /// Method name with the recognized prefix stripped.
    pub name: String,
    /// Element type of the property.
    pub type_code: TypeCode,
    /// Array element count, 0 for scalars.
    pub count: u32,
    /// Class name, when the element type is `Object`.
    pub class_name: Option<String>,
    /// True when any contributing method is static.
    pub is_static: bool,
    pub public_roles: RoleSet,
    pub protected_roles: RoleSet,
    pub private_roles: RoleSet,
    /// Roles that were contributed by legacy methods.
    pub legacy_roles: RoleSet,
    /// State names harvested from `Set<Name>To<State>` methods, in the order
    /// the methods were matched. Empty when no enumerated setter contributed.
    pub enum_constant_names: Vec<String>,
    /// Documentation inherited from the method that seeded the property.
    pub comment: Option<String>,
}

impl Property {
    /// The role set for one access level.
    pub fn roles_for(&self, access: Access) -> RoleSet {
        match access {
            Access::Public => self.public_roles,
            Access::Protected => self.protected_roles,
            Access::Private => self.private_roles,
        }
    }

    pub(crate) fn roles_for_mut(&mut self, access: Access) -> &mut RoleSet {
        match access {
            Access::Public => &mut self.public_roles,
            Access::Protected => &mut self.protected_roles,
            Access::Private => &mut self.private_roles,
        }
    }

    /// Union of the role sets across all access levels.
    pub fn all_roles(&self) -> RoleSet {
        self.public_roles | self.protected_roles | self.private_roles
    }
}

/// The complete property model of one class.
///
/// `method_roles` and `method_properties` run parallel to the input class's
/// method list: for each method, the role it was assigned and the index of
/// the property that owns it, or `None` when the method's signature could
/// not be interpreted as a property access.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassProperties {
    pub class_name: String,
    pub properties: Vec<Property>,
    pub method_roles: Vec<Option<MethodRole>>,
    pub method_properties: Vec<Option<usize>>,
}
