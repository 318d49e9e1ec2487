// src/lib.rs

//! hostcss
//!
//! Rewrites web-component stylesheets written against `:host` into plain CSS
//! that can be nested under any selector, for inline embedding or CSS-in-JS.
//!
//! # Overview
//!
//! - `:host { ... }` blocks are unwrapped into the enclosing scope
//! - `:host(<expr>)` becomes `<host_tag><expr>` (default tag `&`)
//! - `:host [attr]` becomes `<host_tag> [attr]`
//! - Optionally, `[attr]` selectors are renamed to `[data-attr]`
//! - Optionally, the output is wrapped in a cascade layer
//!
//! Two transformers share one rule set: [`transform_host_selectors`] works on
//! raw text, [`transform_stylesheet_str`] parses a lossless rule tree first.
//! [`bundle_css`] adds a content name for CSS-in-JS use sites.
//!
//! ```
//! use hostcss::{bundle_css, transform_host_selectors, TransformOptions};
//!
//! let css = ":host { color: red; } :host([id]) { cursor: pointer; }";
//! let out = transform_host_selectors(css, &TransformOptions::default());
//! assert_eq!(out, "color: red; &[id] { cursor: pointer; }");
//!
//! let bundle = bundle_css(css, &TransformOptions::new().with_layer("defaults"));
//! assert_eq!(bundle.name.len(), 8);
//! ```

pub mod attribute;
pub mod config;
mod error;
pub mod hash;
pub mod layer;
pub mod options;
pub mod pipeline;
pub mod rules;
pub mod stylesheet;
pub mod text;
pub mod tree;

pub use attribute::map_attribute_name;
pub use config::{Config, ConfigError, Mode};
pub use error::{Error, Result};
pub use hash::hash_name;
pub use layer::to_layer;
pub use options::{TransformOptions, BUNDLE_EXCLUDE_FROM_DATA, DEFAULT_HOST_TAG};
pub use pipeline::{bundle_css, StyleBundle};
pub use rules::map_attributes_to_data;
pub use stylesheet::{parse, ParseError, Stylesheet};
pub use text::transform_host_selectors;
pub use tree::{transform_stylesheet, transform_stylesheet_str, HostTransformer};

/// Transform CSS text with the selected transformer
pub fn transform(css: &str, mode: Mode, options: &TransformOptions) -> Result<String> {
    match mode {
        Mode::Text => Ok(transform_host_selectors(css, options)),
        Mode::Tree => transform_stylesheet_str(css, options),
    }
}
