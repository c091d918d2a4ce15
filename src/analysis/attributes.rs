//! Signature-to-attribute translation.
//!
//! [`extract`] condenses one [`ParsedMethod`] into a [`MethodAttributes`]
//! record laid out so that methods acting on the same property are easy to
//! match up. Only accessor-shaped methods fit the record; everything else
//! comes back with `has_property == false`.

use crate::analysis::naming;
use crate::core::types::{BaseType, Indirection, TypeCode};
use crate::core::{Access, ParsedMethod};

/// Flattened view of one method, as used by the matching and synthesis
/// passes.
#[derive(Debug, Clone)]
pub struct MethodAttributes {
    pub name: String,
    pub comment: Option<String>,
    /// The signature fits one of the recognized accessor shapes.
    pub has_property: bool,
    /// Element type of the gettable/settable value.
    pub type_code: TypeCode,
    /// Element count of the gettable/settable value.
    pub count: u32,
    /// Class name, when the element type is `Object`.
    pub class_name: Option<String>,
    pub access: Access,
    pub is_legacy: bool,
    pub is_static: bool,
    /// Dominated by another overload of the same method.
    pub is_repeat: bool,
    /// The parser attached an external element-count hint.
    pub is_hinted: bool,
    /// e.g. `SetColor(r, g, b)`
    pub is_multi_value: bool,
    /// e.g. `SetValue(i, value)`
    pub is_indexed: bool,
    /// e.g. `SetValueToSomething()`
    pub is_enumerated: bool,
    /// `ValueOn()` or `ValueOff()`
    pub is_boolean: bool,
}

/// Translate one parsed method into a [`MethodAttributes`] record.
///
/// A record is produced even when the method is not an accessor, because
/// the repeat scan compares every candidate against every earlier method,
/// eligible or not. Only records with `has_property == true` can seed
/// or join a property.
pub fn extract(method: &ParsedMethod) -> MethodAttributes {
    let mut attrs = MethodAttributes {
        name: method.name.clone(),
        comment: method.comment.clone(),
        has_property: false,
        type_code: TypeCode::plain(BaseType::Unknown),
        count: 0,
        class_name: None,
        access: method.access,
        is_legacy: method.is_legacy,
        is_static: false,
        is_repeat: false,
        is_hinted: false,
        is_multi_value: false,
        is_indexed: false,
        is_enumerated: false,
        is_boolean: false,
    };

    // the static storage class rides on the return type; function-pointer
    // returns encode overlapping bits and never count
    if method.return_type.is_static && method.return_type.base != BaseType::Function {
        attrs.is_static = true;
    }

    if method.name.is_empty() || method.array_failure || method.is_operator {
        return attrs;
    }

    let name = method.name.as_str();
    let ret_plain_void = method.return_type.is_plain_base(BaseType::Void);

    // indexed methods: the first argument is a plain integer index
    let mut indexed = false;
    if let Some(first) = method.args.first() {
        if matches!(first.type_code.base, BaseType::Int | BaseType::IdType)
            && !first.type_code.is_indirect()
        {
            // "void SetValue(int i, type value)"
            if ret_plain_void && method.args.len() == 2 {
                indexed = true;
                if !naming::is_set_number_of(name) {
                    // make sure this isn't a multi-value int method
                    let all_same = method
                        .args
                        .iter()
                        .all(|a| a.type_code == first.type_code);
                    indexed = !all_same;
                }
            }
            // "type GetValue(int i)"
            if !ret_plain_void && method.args.len() == 1 {
                indexed = true;
            }
            attrs.is_indexed = indexed;
        }
    }
    let idx = indexed as usize;

    // "type GetValue()" or "type GetValue(int i)"
    if !ret_plain_void && method.args.len() == idx && naming::is_get(name) {
        attrs.has_property = true;
        attrs.type_code = method.return_type;
        attrs.count = method.hint_size.unwrap_or(0);
        attrs.is_hinted = method.hint_size.is_some();
        attrs.class_name = method.return_class.clone();
        return attrs;
    }

    if ret_plain_void && method.args.len() == 1 + idx {
        let value = &method.args[idx];

        // "void SetValue(type)" or "void SetValue(int i, type)"
        if naming::is_set(name) {
            attrs.has_property = true;
            attrs.type_code = value.type_code;
            attrs.count = value.count;
            attrs.class_name = value.class_name.clone();
            return attrs;
        }
        // "void GetValue(type*)" or "void GetValue(int i, type*)"
        if naming::is_get(name)
            && value.count > 0
            && value.type_code.is_indirect()
            && !value.type_code.is_const()
        {
            attrs.has_property = true;
            attrs.type_code = value.type_code;
            attrs.count = value.count;
            attrs.class_name = value.class_name.clone();
            return attrs;
        }
        // "void AddValue(Object*)" or "void RemoveValue(Object*)"
        if (naming::is_add(name) || naming::is_remove(name))
            && value.type_code.base == BaseType::Object
            && value.type_code.indirection == Indirection::Pointer
        {
            attrs.has_property = true;
            attrs.type_code = value.type_code;
            attrs.count = value.count;
            attrs.class_name = value.class_name.clone();
            return attrs;
        }
    }

    // multiple arguments that all share one type
    if method.args.len() > 1 && !indexed {
        let shared = method.args[0].type_code;
        let all_same = method.args.iter().all(|a| a.type_code == shared);

        if all_same {
            // "void SetValue(type x, type y, type z)"
            if naming::is_set(name) && !shared.is_indirect() && ret_plain_void {
                attrs.has_property = true;
                attrs.type_code = shared;
                attrs.count = method.args.len() as u32;
                attrs.is_multi_value = true;
                return attrs;
            }
            // "void GetValue(type& x, type& y, type& z)"
            if naming::is_get(name)
                && shared.indirection == Indirection::Ref
                && !shared.is_const()
                && ret_plain_void
            {
                attrs.has_property = true;
                attrs.type_code = shared;
                attrs.count = method.args.len() as u32;
                attrs.is_multi_value = true;
                return attrs;
            }
            // "void AddValue(type x, type y, type z)"; int and id-type
            // returns are accepted here, unlike the single-object add form
            if naming::is_add(name)
                && !shared.is_indirect()
                && matches!(
                    method.return_type.base,
                    BaseType::Void | BaseType::Int | BaseType::IdType
                )
                && !method.return_type.is_indirect()
            {
                attrs.has_property = true;
                attrs.type_code = shared;
                attrs.count = method.args.len() as u32;
                attrs.is_multi_value = true;
                return attrs;
            }
        }
    }

    // no-argument void methods
    if ret_plain_void && method.args.is_empty() {
        attrs.type_code = TypeCode::plain(BaseType::Void);

        // "void ValueOn()" / "void ValueOff()"
        if naming::is_boolean(name) {
            attrs.has_property = true;
            attrs.is_boolean = true;
            return attrs;
        }
        // "void SetValueToState()"
        if naming::is_enumerated(name) {
            attrs.has_property = true;
            attrs.is_enumerated = true;
            return attrs;
        }
        // "void RemoveAllValues()"
        if naming::is_remove_all(name) {
            attrs.has_property = true;
            return attrs;
        }
    }

    attrs
}
