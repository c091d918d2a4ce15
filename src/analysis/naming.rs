//! Method-name predicates.
//!
//! Pure string predicates recognizing the canonical accessor-name shapes
//! (`Set*`, `Get*`, `SetNth*`, `GetNumberOf*s`, `*On`/`*Off`, `*AsString`,
//! `Set*ToState`, `GetMinValue`/`GetMaxValue`, `Remove*`, `RemoveAll*s`,
//! `Add*`). Keyword prefixes are strict: the character following the keyword
//! must be upper-case (digits are allowed only where noted below). All scans
//! are byte-wise over ASCII method names.

fn upper(b: u8) -> bool {
    b.is_ascii_uppercase()
}

fn upper_or_digit(b: u8) -> bool {
    b.is_ascii_uppercase() || b.is_ascii_digit()
}

/// `Set` followed by an upper-case character.
pub fn is_set(name: &str) -> bool {
    let b = name.as_bytes();
    b.len() > 3 && b.starts_with(b"Set") && upper(b[3])
}

/// `SetNth` followed by an upper-case character.
pub fn is_set_nth(name: &str) -> bool {
    let b = name.as_bytes();
    is_set(name) && b.len() > 6 && &b[3..6] == b"Nth" && upper(b[6])
}

/// `SetNumberOf` followed by an upper-case character, with a trailing `s`.
pub fn is_set_number_of(name: &str) -> bool {
    let b = name.as_bytes();
    is_set(name)
        && b.len() > 11
        && &b[3..11] == b"NumberOf"
        && upper(b[11])
        && b[b.len() - 1] == b's'
}

/// `Get` followed by an upper-case character.
pub fn is_get(name: &str) -> bool {
    let b = name.as_bytes();
    b.len() > 3 && b.starts_with(b"Get") && upper(b[3])
}

/// `GetNth` followed by an upper-case character.
pub fn is_get_nth(name: &str) -> bool {
    let b = name.as_bytes();
    is_get(name) && b.len() > 6 && &b[3..6] == b"Nth" && upper(b[6])
}

/// `GetNumberOf` followed by an upper-case character, with a trailing `s`.
pub fn is_get_number_of(name: &str) -> bool {
    let b = name.as_bytes();
    is_get(name)
        && b.len() > 11
        && &b[3..11] == b"NumberOf"
        && upper(b[11])
        && b[b.len() - 1] == b's'
}

/// `Add` followed by an upper-case character.
pub fn is_add(name: &str) -> bool {
    let b = name.as_bytes();
    b.len() > 3 && b.starts_with(b"Add") && upper(b[3])
}

/// `Remove` followed by an upper-case character.
pub fn is_remove(name: &str) -> bool {
    let b = name.as_bytes();
    b.len() > 6 && b.starts_with(b"Remove") && upper(b[6])
}

/// `RemoveAll` followed by an upper-case character, with a trailing `s`.
pub fn is_remove_all(name: &str) -> bool {
    let b = name.as_bytes();
    is_remove(name) && b.len() > 9 && &b[6..9] == b"All" && upper(b[9]) && b[b.len() - 1] == b's'
}

/// Name ends in `On` or `Off`.
///
/// The character before the trailing keyword is not required to be
/// upper-case, so a name like `Button` also registers as boolean.
pub fn is_boolean(name: &str) -> bool {
    let b = name.as_bytes();
    let n = b.len();
    (n > 2 && &b[n - 2..] == b"On") || (n > 3 && &b[n - 3..] == b"Off")
}

/// A `Set*` name containing the infix `To` immediately followed by an
/// upper-case character or digit, anywhere at byte position >= 3.
///
/// The scan window stops three bytes short of the end, so the state name
/// after `To` is always at least two characters long.
pub fn is_enumerated(name: &str) -> bool {
    if !is_set(name) {
        return false;
    }
    let b = name.as_bytes();
    (3..b.len().saturating_sub(3))
        .any(|i| b[i] == b'T' && b[i + 1] == b'o' && upper_or_digit(b[i + 2]))
}

/// A `Get*` name longer than 11 characters ending in `AsString`.
pub fn is_as_string(name: &str) -> bool {
    is_get(name) && name.len() > 11 && name.ends_with("AsString")
}

/// A `Get*` name longer than 11 characters ending in `MinValue`.
pub fn is_get_min_value(name: &str) -> bool {
    is_get(name) && name.len() > 11 && name.ends_with("MinValue")
}

/// A `Get*` name longer than 11 characters ending in `MaxValue`.
pub fn is_get_max_value(name: &str) -> bool {
    is_get(name) && name.len() > 11 && name.ends_with("MaxValue")
}

/// The candidate property name: the method name past its recognized prefix.
///
/// Strips `SetNth`/`GetNth` and `Remove` (6 characters), `RemoveAll`
/// (9 characters), or `Set`/`Get`/`Add` (3 characters); names with no
/// recognized prefix are returned unchanged.
pub fn strip_prefix(name: &str) -> &str {
    if is_get_nth(name) || is_set_nth(name) {
        &name[6..]
    } else if is_get(name) || is_set(name) || is_add(name) {
        &name[3..]
    } else if is_remove_all(name) {
        &name[9..]
    } else if is_remove(name) {
        &name[6..]
    } else {
        name
    }
}

/// Validates the fragment of a method name left over after the property
/// name: `On`/`Off`, `To<State>` for setters, `As*`/`MinValue`/`MaxValue`
/// for getters, the plural `s` of collection methods, or nothing at all.
pub fn is_valid_suffix(meth_name: &str, property_name: &str, suffix: &str) -> bool {
    let s = suffix.as_bytes();

    if suffix == "On" || suffix == "Off" {
        return true;
    }

    if is_set(meth_name) && s.len() > 2 && &s[..2] == b"To" && upper_or_digit(s[2]) {
        return true;
    }

    if is_get(meth_name)
        && ((s.len() > 2 && &s[..2] == b"As" && upper_or_digit(s[2]))
            || suffix == "MinValue"
            || suffix == "MaxValue")
    {
        return true;
    }

    if is_remove_all(meth_name) {
        return suffix == "s";
    }

    if is_get_number_of(meth_name) || is_set_number_of(meth_name) {
        return if property_name.starts_with("NumberOf") {
            suffix.is_empty()
        } else {
            suffix == "s"
        };
    }

    suffix.is_empty()
}
