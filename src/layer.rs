// src/layer.rs

//! Cascade layer wrapping

/// Wrap `css` in `@layer <name> { ... }`, or return it unchanged
///
/// The body is placed between exactly one leading and one trailing newline.
/// The input's own surrounding whitespace is kept as is.
pub fn to_layer(css: &str, layer: Option<&str>) -> String {
    match layer {
        Some(name) if !name.is_empty() => format!("@layer {name} {{\n{css}\n}}"),
        _ => css.to_string(),
    }
}
