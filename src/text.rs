// src/text.rs

//! Text-mode transformer
//!
//! Applies the `:host` rules to raw CSS with pattern substitution. This is
//! the lightweight path: no parsing, and no understanding of nested blocks
//! or comments. A `:host { ... }` block containing nested braces is not
//! unwrapped, and a `:host` inside a comment is rewritten like any other.

use tracing::debug;

use crate::layer::to_layer;
use crate::options::TransformOptions;
use crate::rules;

/// Rewrite `:host` selectors in raw CSS text
///
/// Unwraps `:host` blocks, rewrites `:host(...)` and `:host [attr]`
/// selectors, remaps remaining attribute selectors when enabled, and wraps
/// the result in the configured layer. Never fails: text that matches no
/// rule passes through unchanged.
pub fn transform_host_selectors(input: &str, options: &TransformOptions) -> String {
    let unwrapped = rules::unwrap_host_blocks(input);
    let rewritten = rules::rewrite_host_selectors(&unwrapped, options);
    let remapped = rules::remap_attributes(&rewritten, options);

    debug!(
        "Text transform: {} -> {} bytes (data attributes: {})",
        input.len(),
        remapped.len(),
        options.data_attributes
    );

    to_layer(&remapped, options.layer())
}
