//! Property/method matching.
//!
//! Decides whether one classified method belongs to a tentative property:
//! the method name must carry the property name plus a valid suffix, and
//! the method's value type must equal the property type once references are
//! folded away, multi-value tuples are promoted to pointers, and
//! boolean/enumerated/`AsString` shapes are widened to the property's
//! integral type.

use crate::analysis::attributes::MethodAttributes;
use crate::analysis::naming;
use crate::core::types::{BaseType, Indirection, TypeCode};
use crate::core::{MethodRole, Property};

/// A successful match.
///
/// `long_match` is set when a `GetNumberOf`/`SetNumberOf`/`GetMinValue`/
/// `GetMaxValue`/`GetAsString` name matched a property whose own name
/// already embeds the trailing keyword; role classification then uses the
/// basic role instead of the specialized one. The flag belongs to this one
/// method, not to the property.
#[derive(Debug, Clone, Copy)]
pub struct Match {
    pub long_match: bool,
}

fn starts_with_number_of(name: &str) -> bool {
    let b = name.as_bytes();
    name.starts_with("NumberOf") && b.len() > 8 && b[8].is_ascii_uppercase()
}

/// Fold references out of a type: a reference to a value reads as the value
/// itself at the property level.
fn fold_reference(mut code: TypeCode) -> TypeCode {
    code.indirection = match code.indirection {
        Indirection::Ref => Indirection::None,
        Indirection::PointerRef => Indirection::Pointer,
        Indirection::ConstPointerRef => Indirection::ConstPointer,
        other => other,
    };
    code
}

/// Check whether `meth` accesses `property`.
pub fn matches_property(property: &Property, meth: &MethodAttributes) -> Option<Match> {
    // roles already found for this property at the method's access level
    let role_set = property.roles_for(meth.access);

    let property_name = property.name.as_str();
    if property_name.is_empty() || meth.name.is_empty() {
        return None;
    }

    let mut name = naming::strip_prefix(&meth.name);
    let mut long_match = false;

    if naming::is_get_number_of(&meth.name) || naming::is_set_number_of(&meth.name) {
        if starts_with_number_of(property_name) {
            long_match = true;
        } else {
            // skip the whole GetNumberOf/SetNumberOf keyword
            name = &meth.name[11..];
        }
    } else if naming::is_get_min_value(&meth.name) {
        long_match = property_name.ends_with("MinValue");
    } else if naming::is_get_max_value(&meth.name) {
        long_match = property_name.ends_with("MaxValue");
    } else if naming::is_as_string(&meth.name) {
        long_match = property_name.ends_with("AsString");
    }

    // the method name must contain the property name, and whatever is left
    // over must be a recognized suffix
    if !name.starts_with(property_name) {
        return None;
    }
    let suffix = &name[property_name.len()..];
    if !naming::is_valid_suffix(&meth.name, property_name, suffix) {
        return None;
    }

    let mut meth_type = meth.type_code.strip_qualifier();

    // RemoveAll matches a property that already collected an Add
    if naming::is_remove_all(&meth.name)
        && meth_type == TypeCode::plain(BaseType::Void)
        && role_set.contains_any(&[MethodRole::BasicAdd, MethodRole::MultiAdd])
    {
        return Some(Match { long_match });
    }

    // GetNumberOf/SetNumberOf match indexed properties
    if naming::is_get_number_of(&meth.name)
        && (meth_type == TypeCode::plain(BaseType::Int)
            || meth_type == TypeCode::plain(BaseType::IdType))
        && role_set.contains_any(&[MethodRole::IndexGet, MethodRole::NthGet])
    {
        return Some(Match { long_match });
    }
    if naming::is_set_number_of(&meth.name)
        && (meth_type == TypeCode::plain(BaseType::Int)
            || meth_type == TypeCode::plain(BaseType::IdType))
        && role_set.contains_any(&[MethodRole::IndexSet, MethodRole::NthSet])
    {
        return Some(Match { long_match });
    }

    meth_type = fold_reference(meth_type);

    // a multi-value method, e.g. SetColor(r, g, b), references a pointer
    // property
    if meth.is_multi_value {
        meth_type.indirection = match meth_type.indirection {
            Indirection::Pointer => Indirection::PointerPointer,
            Indirection::None => Indirection::Pointer,
            _ => return None,
        };
    }

    // widen boolean/enumerated/AsString methods to the property's integral
    // type; GetAsString must really be a char pointer first
    if meth.is_boolean
        || meth.is_enumerated
        || (naming::is_as_string(&meth.name)
            && meth_type.base == BaseType::Char
            && meth_type.indirection == Indirection::Pointer)
    {
        let property_type = property.type_code;
        if property_type == TypeCode::plain(BaseType::Int)
            || property_type == TypeCode::plain(BaseType::UnsignedInt)
            || property_type == TypeCode::plain(BaseType::UnsignedChar)
            || (meth.is_boolean && property_type == TypeCode::plain(BaseType::Bool))
        {
            meth_type = property_type;
        }
    }

    if meth_type != property.type_code || meth.count != property.count {
        return None;
    }

    // object-valued properties must agree on the class as well
    if meth_type.base == BaseType::Object {
        if meth.is_multi_value
            || !meth_type.is_pointer()
            || meth.count != 0
            || meth.class_name.is_none()
            || property.class_name.is_none()
            || meth.class_name != property.class_name
        {
            return None;
        }
    }

    Some(Match { long_match })
}
