//! End-to-end synthesis scenarios over hand-written class descriptions.

mod common;

use common::{arg, class, counted_arg, method, object_arg};
use pretty_assertions::assert_eq;
use propmap::analysis::build_properties;
use propmap::core::types::{BaseType, TypeCode};
use propmap::core::{MethodRole, RoleSet};

fn roles(list: &[MethodRole]) -> RoleSet {
    list.iter().copied().collect()
}

#[test]
fn basic_scalar_property() {
    let model = build_properties(&class(
        "Sphere",
        vec![
            method(
                "SetRadius",
                TypeCode::plain(BaseType::Void),
                vec![arg(TypeCode::plain(BaseType::Double))],
            ),
            method("GetRadius", TypeCode::plain(BaseType::Double), vec![]),
        ],
    ));

    assert_eq!(model.properties.len(), 1);
    let prop = &model.properties[0];
    assert_eq!(prop.name, "Radius");
    assert_eq!(prop.type_code, TypeCode::plain(BaseType::Double));
    assert_eq!(prop.count, 0);
    assert_eq!(
        prop.public_roles,
        roles(&[MethodRole::BasicSet, MethodRole::BasicGet])
    );
    assert!(prop.protected_roles.is_empty());
    assert!(prop.private_roles.is_empty());
}

#[test]
fn indexed_property_with_number_of() {
    let model = build_properties(&class(
        "Polygon",
        vec![
            method(
                "SetPoint",
                TypeCode::plain(BaseType::Void),
                vec![
                    arg(TypeCode::plain(BaseType::Int)),
                    arg(TypeCode::plain(BaseType::Double)),
                ],
            ),
            method(
                "GetPoint",
                TypeCode::plain(BaseType::Double),
                vec![arg(TypeCode::plain(BaseType::Int))],
            ),
            method("GetNumberOfPoints", TypeCode::plain(BaseType::Int), vec![]),
            method(
                "SetNumberOfPoints",
                TypeCode::plain(BaseType::Void),
                vec![arg(TypeCode::plain(BaseType::Int))],
            ),
        ],
    ));

    assert_eq!(model.properties.len(), 1);
    let prop = &model.properties[0];
    assert_eq!(prop.name, "Point");
    assert_eq!(prop.type_code, TypeCode::plain(BaseType::Double));
    assert_eq!(prop.count, 0);
    assert_eq!(
        prop.public_roles,
        roles(&[
            MethodRole::IndexSet,
            MethodRole::IndexGet,
            MethodRole::GetNum,
            MethodRole::SetNum,
        ])
    );
    assert_eq!(model.method_properties, vec![Some(0); 4]);
}

#[test]
fn multi_value_property_with_float_repeat() {
    let float_arg = arg(TypeCode::plain(BaseType::Float));
    let double_arg = arg(TypeCode::plain(BaseType::Double));
    let ref_arg = arg(TypeCode::reference(BaseType::Double));

    let model = build_properties(&class(
        "Actor",
        vec![
            method(
                "SetColor",
                TypeCode::plain(BaseType::Void),
                vec![float_arg.clone(), float_arg.clone(), float_arg],
            ),
            method(
                "SetColor",
                TypeCode::plain(BaseType::Void),
                vec![double_arg.clone(), double_arg.clone(), double_arg],
            ),
            method(
                "GetColor",
                TypeCode::plain(BaseType::Void),
                vec![ref_arg.clone(), ref_arg.clone(), ref_arg],
            ),
        ],
    ));

    assert_eq!(model.properties.len(), 1);
    let prop = &model.properties[0];
    assert_eq!(prop.name, "Color");
    assert_eq!(prop.count, 3);
    assert_eq!(prop.type_code, TypeCode::pointer(BaseType::Double));
    assert_eq!(
        prop.public_roles,
        roles(&[MethodRole::MultiSet, MethodRole::MultiGet])
    );

    // the float overload mirrors the double overload's assignment without
    // contributing any bits of its own
    assert_eq!(model.method_roles[0], Some(MethodRole::MultiSet));
    assert_eq!(model.method_properties[0], Some(0));
}

#[test]
fn enumerated_property_with_as_string() {
    let model = build_properties(&class(
        "Mapper",
        vec![
            method("SetModeToRed", TypeCode::plain(BaseType::Void), vec![]),
            method("SetModeToBlue", TypeCode::plain(BaseType::Void), vec![]),
            method(
                "GetModeAsString",
                TypeCode::pointer(BaseType::Char).with_const(),
                vec![],
            ),
            method("GetMode", TypeCode::plain(BaseType::Int), vec![]),
            method(
                "SetMode",
                TypeCode::plain(BaseType::Void),
                vec![arg(TypeCode::plain(BaseType::Int))],
            ),
        ],
    ));

    assert_eq!(model.properties.len(), 1);
    let prop = &model.properties[0];
    assert_eq!(prop.name, "Mode");
    assert_eq!(prop.type_code, TypeCode::plain(BaseType::Int));
    assert_eq!(
        prop.public_roles,
        roles(&[
            MethodRole::BasicSet,
            MethodRole::BasicGet,
            MethodRole::EnumSet,
            MethodRole::StringGet,
        ])
    );
    assert_eq!(prop.enum_constant_names, vec!["Red", "Blue"]);
}

#[test]
fn boolean_toggle_property() {
    let model = build_properties(&class(
        "Object",
        vec![
            method("DebugOn", TypeCode::plain(BaseType::Void), vec![]),
            method("DebugOff", TypeCode::plain(BaseType::Void), vec![]),
            method(
                "SetDebug",
                TypeCode::plain(BaseType::Void),
                vec![arg(TypeCode::plain(BaseType::Int))],
            ),
            method("GetDebug", TypeCode::plain(BaseType::Int), vec![]),
        ],
    ));

    assert_eq!(model.properties.len(), 1);
    let prop = &model.properties[0];
    assert_eq!(prop.name, "Debug");
    assert_eq!(prop.type_code, TypeCode::plain(BaseType::Int));
    assert_eq!(
        prop.public_roles,
        roles(&[
            MethodRole::BasicSet,
            MethodRole::BasicGet,
            MethodRole::BoolOn,
            MethodRole::BoolOff,
        ])
    );
}

#[test]
fn add_remove_collection_property() {
    let obj = object_arg("Object", TypeCode::pointer(BaseType::Object));
    let model = build_properties(&class(
        "Pipeline",
        vec![
            method("AddInput", TypeCode::plain(BaseType::Void), vec![obj.clone()]),
            method("RemoveInput", TypeCode::plain(BaseType::Void), vec![obj]),
            method("RemoveAllInputs", TypeCode::plain(BaseType::Void), vec![]),
        ],
    ));

    assert_eq!(model.properties.len(), 1);
    let prop = &model.properties[0];
    assert_eq!(prop.name, "Input");
    assert_eq!(prop.type_code, TypeCode::pointer(BaseType::Object));
    assert_eq!(prop.class_name.as_deref(), Some("Object"));
    assert_eq!(
        prop.public_roles,
        roles(&[
            MethodRole::BasicAdd,
            MethodRole::BasicRem,
            MethodRole::RemoveAll,
        ])
    );
}

#[test]
fn operator_overloads_are_always_dropped() {
    let mut op = method(
        "SetRadius",
        TypeCode::plain(BaseType::Void),
        vec![arg(TypeCode::plain(BaseType::Double))],
    );
    op.name = "operator=".to_string();
    op.is_operator = true;

    let model = build_properties(&class("Sphere", vec![op]));
    assert!(model.properties.is_empty());
    assert_eq!(model.method_roles, vec![None]);
    assert_eq!(model.method_properties, vec![None]);
}

#[test]
fn unrecognized_prefix_with_index_arg_is_dropped() {
    let model = build_properties(&class(
        "Grid",
        vec![method(
            "Resize",
            TypeCode::plain(BaseType::Void),
            vec![
                arg(TypeCode::plain(BaseType::Int)),
                arg(TypeCode::plain(BaseType::Double)),
            ],
        )],
    ));
    assert!(model.properties.is_empty());
    assert_eq!(model.method_properties, vec![None]);
}

#[test]
fn mixed_argument_setter_is_dropped() {
    let model = build_properties(&class(
        "Camera",
        vec![method(
            "SetOrientation",
            TypeCode::plain(BaseType::Void),
            vec![
                arg(TypeCode::plain(BaseType::Double)),
                arg(TypeCode::plain(BaseType::Float)),
                arg(TypeCode::plain(BaseType::Double)),
            ],
        )],
    ));
    assert!(model.properties.is_empty());
}

#[test]
fn min_value_getter_short_form() {
    let model = build_properties(&class(
        "Slider",
        vec![
            method(
                "SetFoo",
                TypeCode::plain(BaseType::Void),
                vec![arg(TypeCode::plain(BaseType::Double))],
            ),
            method("GetFooMinValue", TypeCode::plain(BaseType::Double), vec![]),
            method("GetFooMaxValue", TypeCode::plain(BaseType::Double), vec![]),
        ],
    ));

    assert_eq!(model.properties.len(), 1);
    assert_eq!(model.properties[0].name, "Foo");
    assert_eq!(
        model.properties[0].public_roles,
        roles(&[MethodRole::BasicSet, MethodRole::MinGet, MethodRole::MaxGet])
    );
}

#[test]
fn min_value_getter_long_form() {
    let model = build_properties(&class(
        "Slider",
        vec![
            method(
                "SetFooMinValue",
                TypeCode::plain(BaseType::Void),
                vec![arg(TypeCode::plain(BaseType::Double))],
            ),
            method("GetFooMinValue", TypeCode::plain(BaseType::Double), vec![]),
        ],
    ));

    assert_eq!(model.properties.len(), 1);
    let prop = &model.properties[0];
    assert_eq!(prop.name, "FooMinValue");
    assert_eq!(
        prop.public_roles,
        roles(&[MethodRole::BasicSet, MethodRole::BasicGet])
    );
}

#[test]
fn rhs_getter_with_counted_pointer() {
    let model = build_properties(&class(
        "Actor",
        vec![
            method(
                "SetBounds",
                TypeCode::plain(BaseType::Void),
                vec![counted_arg(TypeCode::pointer(BaseType::Double), 6)],
            ),
            method(
                "GetBounds",
                TypeCode::plain(BaseType::Void),
                vec![counted_arg(TypeCode::pointer(BaseType::Double), 6)],
            ),
        ],
    ));

    assert_eq!(model.properties.len(), 1);
    let prop = &model.properties[0];
    assert_eq!(prop.count, 6);
    assert_eq!(prop.type_code, TypeCode::pointer(BaseType::Double));
    assert_eq!(
        prop.public_roles,
        roles(&[MethodRole::BasicSet, MethodRole::RhsGet])
    );
}

#[test]
fn hinted_getter_is_basic_not_rhs() {
    let mut get = method("GetOrigin", TypeCode::pointer(BaseType::Double), vec![]);
    get.hint_size = Some(3);
    let model = build_properties(&class(
        "Volume",
        vec![
            method(
                "SetOrigin",
                TypeCode::plain(BaseType::Void),
                vec![counted_arg(TypeCode::pointer(BaseType::Double), 3)],
            ),
            get,
        ],
    ));

    assert_eq!(model.properties.len(), 1);
    assert_eq!(
        model.properties[0].public_roles,
        roles(&[MethodRole::BasicSet, MethodRole::BasicGet])
    );
}

#[test]
fn access_levels_are_tracked_separately() {
    let mut protected_set = method(
        "SetRadius",
        TypeCode::plain(BaseType::Void),
        vec![arg(TypeCode::plain(BaseType::Double))],
    );
    protected_set.access = propmap::core::Access::Protected;
    let mut private_get = method("GetRadius", TypeCode::plain(BaseType::Double), vec![]);
    private_get.access = propmap::core::Access::Private;

    let model = build_properties(&class("Sphere", vec![protected_set, private_get]));

    assert_eq!(model.properties.len(), 1);
    let prop = &model.properties[0];
    assert_eq!(prop.protected_roles, roles(&[MethodRole::BasicSet]));
    assert_eq!(prop.private_roles, roles(&[MethodRole::BasicGet]));
    assert!(prop.public_roles.is_empty());
}

#[test]
fn legacy_roles_are_recorded() {
    let mut legacy_get = method("GetRadius", TypeCode::plain(BaseType::Double), vec![]);
    legacy_get.is_legacy = true;
    let model = build_properties(&class(
        "Sphere",
        vec![
            method(
                "SetRadius",
                TypeCode::plain(BaseType::Void),
                vec![arg(TypeCode::plain(BaseType::Double))],
            ),
            legacy_get,
        ],
    ));

    let prop = &model.properties[0];
    assert_eq!(prop.legacy_roles, roles(&[MethodRole::BasicGet]));
    assert_eq!(
        prop.public_roles,
        roles(&[MethodRole::BasicSet, MethodRole::BasicGet])
    );
}

#[test]
fn nth_methods_get_nth_roles() {
    let model = build_properties(&class(
        "List",
        vec![
            method(
                "SetNthItem",
                TypeCode::plain(BaseType::Void),
                vec![
                    arg(TypeCode::plain(BaseType::Int)),
                    arg(TypeCode::plain(BaseType::Double)),
                ],
            ),
            method(
                "GetNthItem",
                TypeCode::plain(BaseType::Double),
                vec![arg(TypeCode::plain(BaseType::Int))],
            ),
        ],
    ));

    assert_eq!(model.properties.len(), 1);
    assert_eq!(model.properties[0].name, "Item");
    assert_eq!(
        model.properties[0].public_roles,
        roles(&[MethodRole::NthSet, MethodRole::NthGet])
    );
}

#[test]
fn set_number_of_without_indexed_partner_seeds_its_own_property() {
    let model = build_properties(&class(
        "Buffer",
        vec![method(
            "SetNumberOfTuples",
            TypeCode::plain(BaseType::Void),
            vec![arg(TypeCode::plain(BaseType::Int))],
        )],
    ));

    assert_eq!(model.properties.len(), 1);
    let prop = &model.properties[0];
    assert_eq!(prop.name, "NumberOfTuples");
    assert_eq!(prop.public_roles, roles(&[MethodRole::BasicSet]));
}

#[test]
fn indexed_object_getter_keeps_class() {
    let mut get = method(
        "GetInput",
        TypeCode::pointer(BaseType::Object),
        vec![arg(TypeCode::plain(BaseType::Int))],
    );
    get.return_class = Some("Widget".to_string());
    let model = build_properties(&class("Filter", vec![get]));

    assert_eq!(model.properties.len(), 1);
    let prop = &model.properties[0];
    assert_eq!(prop.class_name.as_deref(), Some("Widget"));
    assert_eq!(prop.public_roles, roles(&[MethodRole::IndexGet]));
}
