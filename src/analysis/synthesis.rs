//! Property synthesis driver.
//!
//! Sweeps the class's methods in a fixed priority order, seeds a property
//! from the first unconsumed accessor of each phase, then pulls in every
//! further method the matcher accepts until a pass admits nothing new.
//! Setters define properties ahead of getters so that the property type is
//! taken from the settable side whenever both exist.

use rayon::prelude::*;
use tracing::debug;

use crate::analysis::attributes::{self, MethodAttributes};
use crate::analysis::{matching, naming, repeats, roles};
use crate::core::types::{BaseType, Indirection, TypeCode};
use crate::core::{ClassProperties, MethodRole, ParsedClass, Property, RoleSet};

/// Synthesize the property model of one class.
///
/// Every method either ends up assigned to exactly one property with
/// exactly one role, or is silently dropped as unrecognizable. The returned
/// value owns all of its allocations; dropping it releases everything.
pub fn build_properties(class: &ParsedClass) -> ClassProperties {
    let n = class.methods.len();

    let mut attrs: Vec<MethodAttributes> = Vec::with_capacity(n);
    for (i, method) in class.methods.iter().enumerate() {
        attrs.push(attributes::extract(method));
        if attrs[i].has_property {
            // e.g. SetPoint(float*) next to SetPoint(double*)
            repeats::search_repeats(&mut attrs, i, None);
        }
    }

    let mut result = ClassProperties {
        class_name: class.name.clone(),
        properties: Vec::new(),
        method_roles: vec![None; n],
        method_properties: vec![None; n],
    };

    // methods removed from consideration; non-accessors and repeats are
    // never seeding candidates
    let mut matched: Vec<bool> = attrs
        .iter()
        .map(|a| !a.has_property || a.is_repeat)
        .collect();

    // setters, except enumerated and SetNumberOf forms
    for i in 0..n {
        if !matched[i]
            && naming::is_set(&attrs[i].name)
            && !attrs[i].is_enumerated
            && !naming::is_set_number_of(&attrs[i].name)
        {
            add_property(&mut result, &mut attrs, i, &mut matched);
        }
    }

    // SetNumberOf methods whose indexed Set partner was not found above
    for i in 0..n {
        if !matched[i] && naming::is_set_number_of(&attrs[i].name) {
            add_property(&mut result, &mut attrs, i, &mut matched);
        }
    }

    // getters that had no matching setter, except AsString and GetNumberOf
    for i in 0..n {
        if !matched[i]
            && naming::is_get(&attrs[i].name)
            && !naming::is_as_string(&attrs[i].name)
            && !naming::is_get_number_of(&attrs[i].name)
        {
            add_property(&mut result, &mut attrs, i, &mut matched);
        }
    }

    // GetNumberOf methods whose indexed Get partner was not found above
    for i in 0..n {
        if !matched[i] && naming::is_get_number_of(&attrs[i].name) {
            add_property(&mut result, &mut attrs, i, &mut matched);
        }
    }

    // finally the add methods
    for i in 0..n {
        if !matched[i] && naming::is_add(&attrs[i].name) {
            add_property(&mut result, &mut attrs, i, &mut matched);
        }
    }

    debug!(
        class = %result.class_name,
        methods = n,
        properties = result.properties.len(),
        "synthesized property model"
    );

    result
}

/// Synthesize all classes of a translation unit. Per-class synthesis is
/// independent, so the classes fan out across the thread pool.
pub fn build_all(classes: &[ParsedClass]) -> Vec<ClassProperties> {
    classes.par_iter().map(build_properties).collect()
}

/// Seed a new property from method `i` and absorb everything that matches.
fn add_property(
    result: &mut ClassProperties,
    attrs: &mut [MethodAttributes],
    i: usize,
    matched: &mut [bool],
) {
    matched[i] = true;

    // the seed is always classified in its basic/long form
    let role = roles::classify(&attrs[i], false);
    let property_id = result.properties.len();
    result.method_roles[i] = role;
    result.method_properties[i] = Some(property_id);

    // dominated twins mirror the seed's assignment
    repeats::search_repeats(
        attrs,
        i,
        Some(repeats::Assignments {
            roles: &mut result.method_roles,
            properties: &mut result.method_properties,
        }),
    );

    let mut property = init_property(&attrs[i], role);
    collect_matches(
        &mut property,
        property_id,
        attrs,
        matched,
        &mut result.method_roles,
        &mut result.method_properties,
    );

    result.properties.push(property);
}

/// Initialize a property from its seed method, which carries no suffixes
/// such as On/Off, AsString, or ToSomething.
fn init_property(meth: &MethodAttributes, role: Option<MethodRole>) -> Property {
    let mut code = meth.type_code;

    // boolean/enumerated seeds have no value type of their own
    if meth.is_boolean || meth.is_enumerated {
        code = TypeCode::plain(BaseType::Int);
    }

    // references are invisible at the property level, and a multi-value
    // method's property is a pointer to its tuple
    let indirection = code.indirection;
    let multi = meth.is_multi_value;
    let promoted = if (!multi
        && matches!(indirection, Indirection::Pointer | Indirection::PointerRef))
        || (multi && matches!(indirection, Indirection::None | Indirection::Ref))
    {
        Indirection::Pointer
    } else if !multi
        && matches!(
            indirection,
            Indirection::ConstPointer | Indirection::ConstPointerRef
        )
    {
        Indirection::ConstPointer
    } else if indirection == Indirection::PointerPointer
        || (indirection == Indirection::Pointer && multi)
    {
        Indirection::PointerPointer
    } else {
        Indirection::None
    };

    let mut property = Property {
        name: naming::strip_prefix(&meth.name).to_string(),
        type_code: TypeCode::plain(code.base).with_indirection(promoted),
        count: meth.count,
        class_name: meth.class_name.clone(),
        is_static: meth.is_static,
        public_roles: RoleSet::EMPTY,
        protected_roles: RoleSet::EMPTY,
        private_roles: RoleSet::EMPTY,
        legacy_roles: RoleSet::EMPTY,
        enum_constant_names: Vec::new(),
        comment: meth.comment.clone(),
    };

    if let Some(role) = role {
        property.roles_for_mut(meth.access).insert(role);
        if meth.is_legacy {
            property.legacy_roles.insert(role);
        }
    }

    property
}

/// Admit every unconsumed method the matcher accepts, repeating until a
/// full pass over the list admits none.
fn collect_matches(
    property: &mut Property,
    property_id: usize,
    attrs: &[MethodAttributes],
    matched: &mut [bool],
    method_roles: &mut [Option<MethodRole>],
    method_properties: &mut [Option<usize>],
) {
    loop {
        let mut admitted = false;

        for i in 0..attrs.len() {
            if matched[i] {
                continue;
            }
            let meth = &attrs[i];
            let Some(found) = matching::matches_property(property, meth) else {
                continue;
            };

            matched[i] = true;
            admitted = true;

            // any static method makes the property static
            if meth.is_static {
                property.is_static = true;
            }

            let role = roles::classify(meth, !found.long_match);
            method_roles[i] = role;
            method_properties[i] = Some(property_id);

            if let Some(role) = role {
                property.roles_for_mut(meth.access).insert(role);
                if meth.is_legacy {
                    property.legacy_roles.insert(role);
                }
            }

            if meth.is_enumerated {
                harvest_enum_constant(property, meth);
            }
        }

        if !admitted {
            break;
        }
    }
}

/// Record the state name of a `Set<Name>To<State>` method.
fn harvest_enum_constant(property: &mut Property, meth: &MethodAttributes) {
    let m = property.name.len();
    let bytes = meth.name.as_bytes();

    if bytes.len() > 5 + m
        && bytes[3 + m] == b'T'
        && bytes[4 + m] == b'o'
        && (bytes[5 + m].is_ascii_uppercase() || bytes[5 + m].is_ascii_digit())
    {
        let constant = &meth.name[5 + m..];
        if !property.enum_constant_names.iter().any(|c| c == constant) {
            property
                .enum_constant_names
                .push(constant.to_string());
        }
    }
}
