//! Role classification.
//!
//! Maps one [`MethodAttributes`] record to the single [`MethodRole`] it
//! plays for its property. With `short_form` set, trailing keywords such as
//! `On`, `AsString`, `MinValue` and the `NumberOf` prefix select their
//! specialized roles; without it the method is classified in its basic
//! form, which is what happens when the property name itself embeds the
//! keyword.

use crate::analysis::attributes::MethodAttributes;
use crate::analysis::naming;
use crate::core::MethodRole;

/// The role a method plays, or `None` when its name matches no accessor
/// family at all.
pub fn classify(meth: &MethodAttributes, short_form: bool) -> Option<MethodRole> {
    let name = meth.name.as_str();

    if naming::is_set(name) {
        return Some(if meth.is_enumerated {
            MethodRole::EnumSet
        } else if meth.is_indexed {
            if naming::is_set_nth(name) {
                MethodRole::NthSet
            } else {
                MethodRole::IndexSet
            }
        } else if meth.is_multi_value {
            MethodRole::MultiSet
        } else if short_form && naming::is_set_number_of(name) {
            MethodRole::SetNum
        } else {
            MethodRole::BasicSet
        });
    }

    if meth.is_boolean {
        return Some(if name.ends_with('n') {
            MethodRole::BoolOn
        } else {
            MethodRole::BoolOff
        });
    }

    if naming::is_get(name) {
        return Some(if short_form && naming::is_get_min_value(name) {
            MethodRole::MinGet
        } else if short_form && naming::is_get_max_value(name) {
            MethodRole::MaxGet
        } else if short_form && naming::is_as_string(name) {
            MethodRole::StringGet
        } else if meth.is_indexed && meth.count > 0 && !meth.is_hinted {
            if naming::is_get_nth(name) {
                MethodRole::NthRhsGet
            } else {
                MethodRole::IndexRhsGet
            }
        } else if meth.is_indexed {
            if naming::is_get_nth(name) {
                MethodRole::NthGet
            } else {
                MethodRole::IndexGet
            }
        } else if meth.is_multi_value {
            MethodRole::MultiGet
        } else if meth.count > 0 && !meth.is_hinted {
            MethodRole::RhsGet
        } else if short_form && naming::is_get_number_of(name) {
            MethodRole::GetNum
        } else {
            MethodRole::BasicGet
        });
    }

    if naming::is_remove(name) {
        return Some(if naming::is_remove_all(name) {
            MethodRole::RemoveAll
        } else if meth.is_indexed {
            MethodRole::IndexRem
        } else {
            MethodRole::BasicRem
        });
    }

    if naming::is_add(name) {
        return Some(if meth.is_indexed {
            MethodRole::IndexAdd
        } else if meth.is_multi_value {
            MethodRole::MultiAdd
        } else {
            MethodRole::BasicAdd
        });
    }

    None
}

/// The stable canonical token for a role assignment; the empty string for
/// an unassigned method.
pub fn role_name(role: Option<MethodRole>) -> &'static str {
    role.map(|r| r.as_str()).unwrap_or("")
}
