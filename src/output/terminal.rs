//! Human-readable terminal rendering of the property model.

use std::fmt::Write;

use colored::Colorize;

use crate::core::types::{BaseType, Indirection, TypeCode};
use crate::core::{ClassProperties, Property, RoleSet};

fn type_label(code: &TypeCode, class_name: Option<&str>) -> String {
    let base = match code.base {
        BaseType::Void => "void",
        BaseType::Bool => "bool",
        BaseType::Char => "char",
        BaseType::UnsignedChar => "unsigned char",
        BaseType::Short => "short",
        BaseType::UnsignedShort => "unsigned short",
        BaseType::Int => "int",
        BaseType::UnsignedInt => "unsigned int",
        BaseType::Long => "long",
        BaseType::UnsignedLong => "unsigned long",
        BaseType::IdType => "idtype",
        BaseType::Float => "float",
        BaseType::Double => "double",
        BaseType::Object => class_name.unwrap_or("object"),
        BaseType::Function => "function",
        BaseType::Unknown => "?",
    };
    let suffix = match code.indirection {
        Indirection::None => "",
        Indirection::Ref => "&",
        Indirection::Pointer => "*",
        Indirection::ConstPointer => " const*",
        Indirection::PointerPointer => "**",
        Indirection::PointerRef => "*&",
        Indirection::ConstPointerRef => " const*&",
    };
    format!("{base}{suffix}")
}

fn role_list(roles: RoleSet) -> String {
    roles
        .iter()
        .map(|r| r.as_str())
        .collect::<Vec<_>>()
        .join(" | ")
}

fn render_property(out: &mut String, property: &Property) {
    let type_label = type_label(&property.type_code, property.class_name.as_deref());
    let mut header = format!("  {}: {}", property.name.bold(), type_label.cyan());
    if property.count > 0 {
        header.push_str(&format!("[{}]", property.count));
    }
    if property.is_static {
        header.push_str(&format!(" {}", "static".dimmed()));
    }
    let _ = writeln!(out, "{header}");

    for (label, roles) in [
        ("public", property.public_roles),
        ("protected", property.protected_roles),
        ("private", property.private_roles),
    ] {
        if !roles.is_empty() {
            let _ = writeln!(out, "    {:<10} {}", label.green(), role_list(roles));
        }
    }
    if !property.legacy_roles.is_empty() {
        let _ = writeln!(
            out,
            "    {:<10} {}",
            "legacy".yellow(),
            role_list(property.legacy_roles)
        );
    }
    if !property.enum_constant_names.is_empty() {
        let _ = writeln!(
            out,
            "    {:<10} {}",
            "states".magenta(),
            property.enum_constant_names.join(", ")
        );
    }
}

/// Render all synthesized class models for the terminal.
pub fn render(models: &[ClassProperties]) -> String {
    let mut out = String::new();
    for model in models {
        let _ = writeln!(
            out,
            "{}: {} propert{}",
            model.class_name.bold().underline(),
            model.properties.len(),
            if model.properties.len() == 1 { "y" } else { "ies" }
        );
        for property in &model.properties {
            render_property(&mut out, property);
        }

        let unassigned = model
            .method_properties
            .iter()
            .filter(|p| p.is_none())
            .count();
        if unassigned > 0 {
            let _ = writeln!(
                out,
                "  {}",
                format!("({unassigned} methods not property-related)").dimmed()
            );
        }
        let _ = writeln!(out);
    }
    out
}
