// src/tree.rs

//! Tree-mode transformer
//!
//! Applies the `:host` rules to a parsed [`Stylesheet`] by mutating the rule
//! tree, so comments and formatting outside the rewritten parts survive.
//!
//! - A rule whose selector is exactly `:host` is replaced by its children,
//!   which are cloned into the parent container at the rule's position.
//! - Any other selector mentioning `:host` is rewritten in place. One that
//!   `:host(...)` or `:host [attr]` matched gets no further `data-` remap.
//! - Other selectors containing `[` get the `data-` remap when enabled,
//!   unless they already mention `data-`.
//! - Finally, whitespace before a declaration that holds a blank line is
//!   replaced by a single line break.

use tracing::debug;

use crate::error::Result;
use crate::layer::to_layer;
use crate::options::TransformOptions;
use crate::rules;
use crate::stylesheet::{self, Node, Rule, Stylesheet};

/// Rewrites `:host` rules in a stylesheet tree
pub struct HostTransformer<'a> {
    options: &'a TransformOptions,
}

impl<'a> HostTransformer<'a> {
    pub fn new(options: &'a TransformOptions) -> Self {
        Self { options }
    }

    /// Transform a whole stylesheet in place
    pub fn transform(&self, sheet: &mut Stylesheet) {
        self.transform_nodes(&mut sheet.nodes, &mut sheet.raws.semicolon);
        collapse_blank_lines(sheet);
    }

    /// Transform a rule that is not attached to any container
    ///
    /// A detached `:host` rule has nowhere to splice its contents into, so
    /// it is left exactly as it is.
    pub fn transform_rule(&self, rule: &mut Rule) {
        if rules::is_host_only(&rule.selector) {
            debug!("Detached :host rule left untouched");
            return;
        }
        self.rewrite_selector(rule);
        self.transform_nodes(&mut rule.nodes, &mut rule.raws.semicolon);
    }

    fn transform_nodes(&self, nodes: &mut Vec<Node>, semicolon: &mut bool) {
        let mut i = 0;
        while i < nodes.len() {
            let host_only = matches!(&nodes[i], Node::Rule(rule) if rules::is_host_only(&rule.selector));

            if host_only {
                let Node::Rule(host) = nodes.remove(i) else {
                    continue;
                };
                let is_last = nodes[i..].iter().all(Node::is_comment);
                if is_last && host.nodes.iter().any(|node| !node.is_comment()) {
                    *semicolon = host.raws.semicolon;
                }

                let hoisted = hoist_children(host);
                debug!("Unwrapped :host rule into {} node(s)", hoisted.len());
                // Hoisted nodes are revisited: nested rules still need rewriting
                nodes.splice(i..i, hoisted);
                continue;
            }

            match &mut nodes[i] {
                Node::Rule(rule) => {
                    self.rewrite_selector(rule);
                    self.transform_nodes(&mut rule.nodes, &mut rule.raws.semicolon);
                }
                Node::AtRule(at_rule) => {
                    if let Some(children) = at_rule.nodes.as_mut() {
                        self.transform_nodes(children, &mut at_rule.raws.semicolon);
                    }
                }
                Node::Declaration(_) | Node::Comment(_) => {}
            }
            i += 1;
        }
    }

    fn rewrite_selector(&self, rule: &mut Rule) {
        let selector = rule.selector.as_str();

        let rewritten = if rules::mentions_host(selector) {
            rules::rewrite_selector(selector, self.options)
        } else if self.options.data_attributes
            && selector.contains('[')
            && !selector.contains(crate::attribute::DATA_PREFIX)
        {
            rules::remap_attributes(selector, self.options)
        } else {
            return;
        };

        if rewritten != selector {
            debug!("Rewrote selector {:?} -> {:?}", selector, rewritten);
            rule.selector = rewritten.into_owned();
        }
    }
}

/// Clone a `:host` rule's children for insertion at the rule's position
///
/// The first child takes over the whitespace that preceded the rule. Later
/// children that started on their own line keep doing so, indented like
/// the rule itself was.
fn hoist_children(host: Rule) -> Vec<Node> {
    let indent = match host.raws.before.rfind('\n') {
        Some(newline) => host.raws.before[newline + 1..].to_string(),
        None => String::new(),
    };

    host.nodes
        .iter()
        .enumerate()
        .map(|(i, child)| {
            let mut clone = child.clone();
            if i == 0 {
                clone.set_before(host.raws.before.clone());
            } else if child.before().contains('\n') {
                clone.set_before(format!("\n{indent}"));
            }
            clone
        })
        .collect()
}

/// Replace whitespace holding a blank line before any declaration by `\n`
fn collapse_blank_lines(sheet: &mut Stylesheet) {
    sheet.walk_declarations_mut(|decl| {
        if decl.raws.before.contains("\n\n") {
            decl.raws.before = "\n".to_string();
        }
    });
}

/// Transform a parsed stylesheet in place
pub fn transform_stylesheet(sheet: &mut Stylesheet, options: &TransformOptions) {
    HostTransformer::new(options).transform(sheet);
}

/// Parse CSS, transform it as a tree, and print it back
///
/// The output is wrapped in the configured layer, like the text transform.
pub fn transform_stylesheet_str(css: &str, options: &TransformOptions) -> Result<String> {
    let mut sheet = stylesheet::parse(css)?;
    transform_stylesheet(&mut sheet, options);
    Ok(to_layer(&sheet.to_css(), options.layer()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(css: &str, options: &TransformOptions) -> String {
        transform_stylesheet_str(css, options).unwrap()
    }

    #[test]
    fn test_host_rule_spliced_into_root() {
        let css = "\n:host {\n  color: red;\n}\n\n:host([id]) {\n  cursor: pointer;\n}\n";
        let out = run(css, &TransformOptions::default());
        assert_eq!(out, "\ncolor: red;\n\n&[id] {\n  cursor: pointer;\n}\n");
    }

    #[test]
    fn test_spliced_declarations_keep_order() {
        let css = ":host {\n  a: 1;\n  b: 2;\n\n  c: 3;\n}\n.x { y: z }";
        let out = run(css, &TransformOptions::default());
        assert_eq!(out, "a: 1;\nb: 2;\nc: 3;\n.x { y: z }");
    }

    #[test]
    fn test_host_rule_inside_media() {
        let css = "@media print {\n  :host {\n    display: none;\n  }\n}";
        let out = run(css, &TransformOptions::default());
        assert_eq!(out, "@media print {\n  display: none;\n}");
    }

    #[test]
    fn test_last_host_rule_carries_semicolon() {
        let css = ".a { b: c; :host { d: e; } }";
        let out = run(css, &TransformOptions::default());
        assert_eq!(out, ".a { b: c; d: e; }");

        let css = ".a { :host { d: e } }";
        let out = run(css, &TransformOptions::default());
        assert_eq!(out, ".a { d: e }");
    }

    #[test]
    fn test_nested_rules_are_hoisted_and_rewritten() {
        let css = ":host {\n  color: red;\n  [open] { color: blue; }\n}";
        let options = TransformOptions::new().with_data_attributes(true);
        let out = run(css, &options);
        assert_eq!(out, "color: red;\n[data-open] { color: blue; }");
    }

    #[test]
    fn test_empty_host_rule_is_removed() {
        let out = run("a { b: c; }\n:host {}\n", &TransformOptions::default());
        assert_eq!(out, "a { b: c; }\n");
    }

    #[test]
    fn test_existing_data_selectors_untouched() {
        let css = "[data-keep] [other] { opacity: 0.5; }";
        let options = TransformOptions::new().with_data_attributes(true);
        assert_eq!(run(css, &options), css);
    }

    #[test]
    fn test_standalone_attribute_remap() {
        let css = "[class=\"my-class\"] { color: red; }\n.icon[slot] { margin: 0; }";
        let options = TransformOptions::new()
            .with_data_attributes(true)
            .with_exclude_from_data(["class"]);
        assert_eq!(
            run(css, &options),
            "[class=\"my-class\"] { color: red; }\n.icon[data-slot] { margin: 0; }"
        );
    }

    #[test]
    fn test_declaration_values_not_remapped() {
        let css = ".grid { grid-template-columns: [full-start] 1fr [full-end]; }";
        let options = TransformOptions::new().with_data_attributes(true);
        assert_eq!(run(css, &options), css);
    }

    #[test]
    fn test_comments_preserved() {
        let css = "/* host */\n:host([id]) {\n  /* pointer */\n  cursor: pointer;\n}";
        let out = run(css, &TransformOptions::default());
        assert_eq!(out, "/* host */\n&[id] {\n  /* pointer */\n  cursor: pointer;\n}");
    }

    #[test]
    fn test_detached_host_rule_is_noop() {
        let sheet = stylesheet::parse(":host { color: red; }").unwrap();
        let Node::Rule(mut rule) = sheet.nodes[0].clone() else {
            panic!("expected a rule");
        };
        let before = rule.clone();
        HostTransformer::new(&TransformOptions::default()).transform_rule(&mut rule);
        assert_eq!(rule, before);
    }

    #[test]
    fn test_detached_rule_rewritten() {
        let mut rule = Rule::new(":host([open])");
        let options = TransformOptions::new().with_data_attributes(true);
        HostTransformer::new(&options).transform_rule(&mut rule);
        assert_eq!(rule.selector, "&[data-open]");
    }

    #[test]
    fn test_blank_line_before_declaration_becomes_single_newline() {
        let css = "a {\n  b: c;\n\n  d: e;\n}";
        let out = run(css, &TransformOptions::default());
        assert_eq!(out, "a {\n  b: c;\nd: e;\n}");
    }

    #[test]
    fn test_blank_lines_before_rules_untouched() {
        let css = "a { b: c; }\n\n\nd { e: f; }";
        assert_eq!(run(css, &TransformOptions::default()), css);
    }

    #[test]
    fn test_rewritten_host_selector_not_remapped_again() {
        let options = TransformOptions::new().with_data_attributes(true);
        assert_eq!(run(":host([a]) [b] { x: y }", &options), "&[data-a] [b] { x: y }");
        assert_eq!(run(":host .x[b] { x: y }", &options), ":host .x[data-b] { x: y }");
    }

    #[test]
    fn test_layer_wrapping() {
        let options = TransformOptions::new().with_layer("components");
        let out = run(":host([id]) { color: red }", &options);
        assert_eq!(out, "@layer components {\n&[id] { color: red }\n}");
    }

    #[test]
    fn test_parse_errors_surface() {
        assert!(transform_stylesheet_str(":host {", &TransformOptions::default()).is_err());
    }
}
