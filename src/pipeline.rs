// src/pipeline.rs

//! CSS-in-JS bundle pipeline
//!
//! Text transform, then layer wrap, then content name. The pipeline's
//! `exclude_from_data` default is `["part"]`, unlike the bare transforms
//! whose default is an empty list; an explicitly empty list stays empty.

use serde::Serialize;
use tracing::debug;

use crate::hash::hash_name;
use crate::layer::to_layer;
use crate::options::TransformOptions;
use crate::text::transform_host_selectors;

/// A transformed style block ready for CSS-in-JS use
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleBundle {
    /// 8 lowercase hex characters derived from `css`
    pub name: String,
    /// Final CSS text, wrapped in the layer if one was requested
    pub css: String,
}

/// Transform `input` and name the result by its content
pub fn bundle_css(input: &str, options: &TransformOptions) -> StyleBundle {
    let options = options.with_bundle_defaults();

    let transformed = transform_host_selectors(
        input,
        &TransformOptions {
            layer: None,
            ..options.clone()
        },
    );
    let css = to_layer(&transformed, options.layer());
    let name = hash_name(&css);

    debug!("Bundled style block {} ({} bytes)", name, css.len());
    StyleBundle { name, css }
}
