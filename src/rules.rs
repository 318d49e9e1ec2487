// src/rules.rs

//! The `:host` rewrite rules
//!
//! The rule set is defined once here and driven by two adapters: the text
//! transformer (`crate::text`) and the tree transformer (`crate::tree`).
//!
//! Rules, in precedence order:
//!
//! 1. `:host { ... }` is unwrapped: its contents move into the enclosing scope.
//! 2. `:host(<expr>)` becomes `<host_tag><expr>`; with data attributes
//!    enabled every `[name` inside `<expr>` is remapped.
//! 3. `:host [name...]` becomes `<host_tag> [name...]`, remapping `name`.
//! 4. Any other `:host` usage is left alone (apart from rule 5).
//! 5. With data attributes enabled, every remaining `[name` that is neither
//!    `data-` prefixed nor excluded becomes `[data-name`.
//!
//! Text mode runs rule 5 over the whole output. Tree mode runs it per
//! selector, and skips selectors already rewritten by rule 2 or 3.
//!
//! The patterns do not understand strings, comments or nesting. A `[` inside
//! a quoted attribute value or a declaration value (for example grid line
//! names) is treated like any other attribute selector in text mode.

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;
use tracing::trace;

use crate::attribute::remap_attribute_name;
use crate::options::TransformOptions;

/// The selector that refers to the component itself
pub const HOST: &str = ":host";

/// Pre-compiled rule patterns
struct Patterns {
    /// `:host { ... }` without nested braces; group 1 is the block body
    host_block: Regex,
    /// `:host(...)`; group 1 is the argument
    host_function: Regex,
    /// `:host [...]`; group 1 is the bracket content
    host_descendant: Regex,
    /// `[name`; group 1 is the attribute name
    bracketed_name: Regex,
    /// First identifier inside a bracket body
    name: Regex,
    /// Leading whitespace on every line
    leading_whitespace: Regex,
}

static PATTERNS: LazyLock<Patterns> = LazyLock::new(|| Patterns {
    host_block: Regex::new(r":host\s*\{([^}]*)\}").unwrap(),
    host_function: Regex::new(r":host\(([^)]*)\)").unwrap(),
    host_descendant: Regex::new(r":host\s+\[([^\]]*)\]").unwrap(),
    bracketed_name: Regex::new(r"\[([A-Za-z_][A-Za-z0-9_-]*)").unwrap(),
    name: Regex::new(r"[A-Za-z_][A-Za-z0-9_-]*").unwrap(),
    leading_whitespace: Regex::new(r"(?m)^\s+").unwrap(),
});

/// Whether a selector is exactly `:host` (rule 1)
pub fn is_host_only(selector: &str) -> bool {
    selector.trim() == HOST
}

/// Whether a selector mentions `:host` anywhere
pub fn mentions_host(selector: &str) -> bool {
    selector.contains(HOST)
}

/// Rule 1 over raw text: replace each `:host { ... }` block by its body
///
/// The body is trimmed and every line loses its leading whitespace so the
/// declarations sit flush in the enclosing scope.
pub fn unwrap_host_blocks(css: &str) -> Cow<'_, str> {
    PATTERNS.host_block.replace_all(css, |caps: &Captures| {
        trace!("Unwrapping :host block");
        PATTERNS
            .leading_whitespace
            .replace_all(caps[1].trim(), "")
            .into_owned()
    })
}

/// Rules 2 and 3 over a selector or raw text
pub fn rewrite_host_selectors<'a>(input: &'a str, options: &TransformOptions) -> Cow<'a, str> {
    let host_tag = options.host_tag.as_str();

    let rewritten = PATTERNS.host_function.replace_all(input, |caps: &Captures| {
        let argument = if options.data_attributes {
            // Names already carrying `data-` are kept so a second pass is a no-op
            remap_bracketed_names(&caps[1], options.excluded())
        } else {
            Cow::Borrowed(&caps[1])
        };
        trace!("Rewriting {} -> {}{}", &caps[0], host_tag, argument);
        format!("{host_tag}{argument}")
    });

    match rewritten {
        Cow::Borrowed(_) => rewrite_host_descendants(input, options),
        Cow::Owned(text) => Cow::Owned(rewrite_host_descendants(&text, options).into_owned()),
    }
}

fn rewrite_host_descendants<'a>(input: &'a str, options: &TransformOptions) -> Cow<'a, str> {
    let host_tag = options.host_tag.as_str();

    PATTERNS.host_descendant.replace_all(input, |caps: &Captures| {
        let content = &caps[1];
        let content = if options.data_attributes {
            // Same `data-` skip as rule 2, for idempotence
            PATTERNS.name.replacen(content, 1, |name: &Captures| {
                remap_attribute_name(&name[0], options.excluded()).into_owned()
            })
        } else {
            Cow::Borrowed(content)
        };
        format!("{host_tag} [{content}]")
    })
}

/// Rule 5: remap every bracketed attribute name that is not yet final
///
/// Does nothing unless data attributes are enabled. Idempotent.
pub fn remap_attributes<'a>(input: &'a str, options: &TransformOptions) -> Cow<'a, str> {
    if !options.data_attributes {
        return Cow::Borrowed(input);
    }
    remap_bracketed_names(input, options.excluded())
}

/// Rules 2 to 4 applied to a single selector that mentions `:host`
///
/// A selector matched by rule 2 or 3 is final. Only a `:host` usage neither
/// rule recognizes (rule 4) falls through to the rule 5 remap.
pub fn rewrite_selector<'a>(selector: &'a str, options: &TransformOptions) -> Cow<'a, str> {
    match rewrite_host_selectors(selector, options) {
        Cow::Borrowed(_) => remap_attributes(selector, options),
        rewritten => rewritten,
    }
}

/// Rename every `[name` to `[data-name`, with no exclusions
///
/// Names that already start with `data-` are left as they are.
pub fn map_attributes_to_data(input: &str) -> Cow<'_, str> {
    remap_bracketed_names::<&str>(input, &[])
}

fn remap_bracketed_names<'a, S: AsRef<str>>(input: &'a str, exclude: &[S]) -> Cow<'a, str> {
    PATTERNS.bracketed_name.replace_all(input, |caps: &Captures| {
        format!("[{}", remap_attribute_name(&caps[1], exclude))
    })
}
