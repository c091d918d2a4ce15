//! Repeat detection.
//!
//! Classes routinely declare the same accessor several times with minor
//! variations: a `float` overload next to a `double` one, a shorter array
//! next to a longer one, a legacy variant next to its replacement. Only one
//! of each pair should define property facts; the other is marked as a
//! repeat and simply mirrors the dominant overload's role and property
//! assignment.

use crate::analysis::attributes::MethodAttributes;
use crate::core::types::BaseType;
use crate::core::MethodRole;

/// Role/property assignment slots shared with the synthesis pass; repeats
/// inherit their dominant twin's entries.
pub struct Assignments<'a> {
    pub roles: &'a mut [Option<MethodRole>],
    pub properties: &'a mut [Option<usize>],
}

/// Scan for methods that are repeated variants of `attrs[j]`.
///
/// A structural twin shares the name, access level, indirection, and every
/// shape flag. When a twin is found, the preference rules pick a dominant
/// side: `double` over `float`, a higher element count over a lower one,
/// non-legacy over legacy. The dominated side gets `is_repeat` and, when
/// `assignments` is given, a copy of the dominant side's role and property
/// index. Returns whether the method was unique (no repeat relation found).
pub fn search_repeats(
    attrs: &mut [MethodAttributes],
    j: usize,
    mut assignments: Option<Assignments<'_>>,
) -> bool {
    for i in 0..attrs.len() {
        if i == j {
            continue;
        }

        let twin = {
            let a = &attrs[j];
            let m = &attrs[i];
            !m.name.is_empty()
                && a.name == m.name
                && a.type_code.indirection == m.type_code.indirection
                && a.access == m.access
                && a.is_hinted == m.is_hinted
                && a.is_multi_value == m.is_multi_value
                && a.is_indexed == m.is_indexed
                && a.is_enumerated == m.is_enumerated
                && a.is_boolean == m.is_boolean
        };
        if !twin {
            continue;
        }

        let (a_base, m_base) = (attrs[j].type_code.base, attrs[i].type_code.base);

        let j_dominated = (a_base == BaseType::Float && m_base == BaseType::Double)
            || (a_base == m_base && attrs[j].count < attrs[i].count)
            || (attrs[j].is_legacy && !attrs[i].is_legacy);
        if j_dominated {
            attrs[j].is_repeat = true;
            if let Some(slots) = assignments.as_mut() {
                slots.roles[j] = slots.roles[i];
                slots.properties[j] = slots.properties[i];
            }
            return false;
        }

        let i_dominated = (a_base == BaseType::Double && m_base == BaseType::Float)
            || (a_base == m_base && attrs[j].count > attrs[i].count)
            || (!attrs[j].is_legacy && attrs[i].is_legacy);
        if i_dominated {
            attrs[i].is_repeat = true;
            if let Some(slots) = assignments.as_mut() {
                slots.roles[i] = slots.roles[j];
                slots.properties[i] = slots.properties[j];
            }
            return false;
        }
    }

    true
}
