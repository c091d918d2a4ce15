#![allow(dead_code)]

//! Builders for parsed-class fixtures.

use propmap::core::types::TypeCode;
use propmap::core::{Access, ParsedArg, ParsedClass, ParsedMethod};

pub fn class(name: &str, methods: Vec<ParsedMethod>) -> ParsedClass {
    ParsedClass {
        name: name.to_string(),
        comment: None,
        methods,
    }
}

pub fn method(name: &str, return_type: TypeCode, args: Vec<ParsedArg>) -> ParsedMethod {
    ParsedMethod {
        name: name.to_string(),
        comment: None,
        access: Access::Public,
        is_operator: false,
        is_legacy: false,
        array_failure: false,
        return_type,
        return_class: None,
        hint_size: None,
        args,
    }
}

pub fn arg(type_code: TypeCode) -> ParsedArg {
    ParsedArg::new(type_code)
}

pub fn object_arg(class_name: &str, type_code: TypeCode) -> ParsedArg {
    ParsedArg {
        type_code,
        class_name: Some(class_name.to_string()),
        count: 0,
    }
}

pub fn counted_arg(type_code: TypeCode, count: u32) -> ParsedArg {
    ParsedArg {
        type_code,
        class_name: None,
        count,
    }
}
