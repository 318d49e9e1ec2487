// src/attribute.rs

//! Attribute name mapping for the `data-` remap
//!
//! Names follow the identifier class `[A-Za-z_][A-Za-z0-9_-]*`. Escapes and
//! non-ASCII identifiers are not recognized and are left alone by callers.

use std::borrow::Cow;

/// Prefix reserved for custom, non-semantic attributes
pub const DATA_PREFIX: &str = "data-";

/// Map an attribute name to its `data-` form unless it is excluded
pub fn map_attribute_name<S: AsRef<str>>(name: &str, exclude: &[S]) -> String {
    if is_excluded(name, exclude) {
        name.to_string()
    } else {
        format!("{DATA_PREFIX}{name}")
    }
}

/// Whether `name` appears in the exclusion list
pub fn is_excluded<S: AsRef<str>>(name: &str, exclude: &[S]) -> bool {
    exclude.iter().any(|excluded| excluded.as_ref() == name)
}

/// Remap a name found in a selector, leaving final names untouched
///
/// A name is final when it already carries the `data-` prefix or is
/// excluded. Applying this twice is the same as applying it once.
pub fn remap_attribute_name<'a, S: AsRef<str>>(name: &'a str, exclude: &[S]) -> Cow<'a, str> {
    if name.starts_with(DATA_PREFIX) || is_excluded(name, exclude) {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(format!("{DATA_PREFIX}{name}"))
    }
}

/// Check that `name` is in the supported identifier class
pub fn is_attribute_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: &[&str] = &[];

    #[test]
    fn test_map_attribute_name() {
        assert_eq!(map_attribute_name("id", NONE), "data-id");
        assert_eq!(map_attribute_name("part", &["part"]), "part");
        assert_eq!(map_attribute_name("size", &["part", "class"]), "data-size");
    }

    #[test]
    fn test_remap_skips_final_names() {
        assert_eq!(remap_attribute_name("data-id", NONE), "data-id");
        assert_eq!(remap_attribute_name("part", &["part"]), "part");
        assert_eq!(remap_attribute_name("open", NONE), "data-open");
    }

    #[test]
    fn test_remap_is_idempotent() {
        let once = remap_attribute_name("active", NONE).into_owned();
        let twice = remap_attribute_name(&once, NONE).into_owned();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_bare_data_is_not_final() {
        // Only the full "data-" prefix marks a name as already mapped
        assert_eq!(remap_attribute_name("data", NONE), "data-data");
    }

    #[test]
    fn test_is_attribute_name() {
        assert!(is_attribute_name("id"));
        assert!(is_attribute_name("_private"));
        assert!(is_attribute_name("aria-label"));
        assert!(is_attribute_name("x1"));
        assert!(!is_attribute_name(""));
        assert!(!is_attribute_name("1abc"));
        assert!(!is_attribute_name("-dash"));
        assert!(!is_attribute_name("caf\u{e9}"));
    }
}
