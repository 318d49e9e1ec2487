// src/options.rs

//! Transform options shared by the text and tree transformers
//!
//! Every field is independently optional. The defaults here are the ones
//! used by the bare transforms; the bundle pipeline substitutes its own
//! exclusion default (see [`BUNDLE_EXCLUDE_FROM_DATA`]).

use serde::{Deserialize, Serialize};

/// Marker substituted for `:host` when no other tag is configured
pub const DEFAULT_HOST_TAG: &str = "&";

/// Attribute names the bundle pipeline exempts from the `data-` remap
/// when the caller does not provide an exclusion list
pub const BUNDLE_EXCLUDE_FROM_DATA: &[&str] = &["part"];

/// Options controlling how `:host` stylesheets are rewritten
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransformOptions {
    /// Text substituted for `:host` in rewritten selectors
    pub host_tag: String,

    /// Cascade layer to wrap the output in (None or empty = no wrapping)
    pub layer: Option<String>,

    /// Rename plain attribute selectors to `data-*` attribute selectors
    pub data_attributes: bool,

    /// Attribute names left untouched by the `data-` remap
    ///
    /// `None` means "not configured", which the bundle pipeline treats
    /// differently from an explicit empty list.
    pub exclude_from_data: Option<Vec<String>>,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            host_tag: DEFAULT_HOST_TAG.to_string(),
            layer: None,
            data_attributes: false,
            exclude_from_data: None,
        }
    }
}

impl TransformOptions {
    /// Create options with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_host_tag(mut self, host_tag: impl Into<String>) -> Self {
        self.host_tag = host_tag.into();
        self
    }

    pub fn with_layer(mut self, layer: impl Into<String>) -> Self {
        self.layer = Some(layer.into());
        self
    }

    pub fn with_data_attributes(mut self, enabled: bool) -> Self {
        self.data_attributes = enabled;
        self
    }

    pub fn with_exclude_from_data<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_from_data = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// The layer name, if wrapping is requested
    pub fn layer(&self) -> Option<&str> {
        self.layer.as_deref().filter(|name| !name.is_empty())
    }

    /// Attribute names exempt from the `data-` remap (empty when unset)
    pub fn excluded(&self) -> &[String] {
        self.exclude_from_data.as_deref().unwrap_or(&[])
    }

    /// Fill in the bundle pipeline's exclusion default if none was given
    pub(crate) fn with_bundle_defaults(&self) -> Self {
        let mut options = self.clone();
        if options.exclude_from_data.is_none() {
            options.exclude_from_data = Some(
                BUNDLE_EXCLUDE_FROM_DATA
                    .iter()
                    .map(|name| name.to_string())
                    .collect(),
            );
        }
        options
    }
}
