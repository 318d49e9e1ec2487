// src/stylesheet/mod.rs

//! Lossless CSS rule tree
//!
//! A small rule tree in the shape of the PostCSS node model, built from
//! `cssparser` tokens. Every node keeps the raw whitespace around it, so
//! parsing and printing an unmodified stylesheet reproduces the input byte
//! for byte. The tree transformer
//! mutates this tree and prints it back, which keeps comments and formatting
//! intact where the text transformer cannot.
//!
//! # Example
//!
//! ```
//! use hostcss::stylesheet::{parse, Node};
//!
//! let css = "a {\n  color: red;\n}\n";
//! let sheet = parse(css).unwrap();
//! assert!(matches!(sheet.nodes[0], Node::Rule(_)));
//! assert_eq!(sheet.to_css(), css);
//! ```

mod parser;
mod stringify;

pub use parser::{parse, ParseError};

/// A parsed stylesheet (the root container)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    pub nodes: Vec<Node>,
    pub raws: RootRaws,
}

/// Raw formatting of the root container
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootRaws {
    /// Whitespace after the last node
    pub after: String,
    /// Whether the last declaration was terminated by `;`
    pub semicolon: bool,
}

/// Any node that can appear in a container
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Rule(Rule),
    AtRule(AtRule),
    Declaration(Declaration),
    Comment(Comment),
}

/// A style rule: `selector { ... }`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rule {
    pub selector: String,
    pub nodes: Vec<Node>,
    pub raws: BlockRaws,
}

/// Raw formatting of a style rule
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockRaws {
    /// Whitespace before the node
    pub before: String,
    /// Whitespace between the selector and `{`
    pub between: String,
    /// Whitespace between the last child and `}`
    pub after: String,
    /// Whether the last declaration was terminated by `;`
    pub semicolon: bool,
}

/// An at-rule, with a block (`@media x { ... }`) or without (`@import x;`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AtRule {
    pub name: String,
    pub params: String,
    /// `None` for statement at-rules that end in `;`
    pub nodes: Option<Vec<Node>>,
    pub raws: AtRuleRaws,
}

/// Raw formatting of an at-rule
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AtRuleRaws {
    pub before: String,
    /// Whitespace between the name and the params
    pub after_name: String,
    /// Whitespace between the params and `{` or `;`
    pub between: String,
    pub after: String,
    pub semicolon: bool,
}

/// A property declaration: `prop: value`
///
/// `!important` and any other value modifiers stay part of `value`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declaration {
    pub prop: String,
    pub value: String,
    pub raws: DeclarationRaws,
}

/// Raw formatting of a declaration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclarationRaws {
    pub before: String,
    /// The colon with its surrounding whitespace
    pub between: String,
    /// Whitespace between the value and its terminating `;`
    pub after: String,
}

/// A comment, with its text stored verbatim between `/*` and `*/`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comment {
    pub text: String,
    pub raws: CommentRaws,
}

/// Raw formatting of a comment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentRaws {
    pub before: String,
}

impl Node {
    /// Whitespace before this node
    pub fn before(&self) -> &str {
        match self {
            Node::Rule(rule) => &rule.raws.before,
            Node::AtRule(at_rule) => &at_rule.raws.before,
            Node::Declaration(decl) => &decl.raws.before,
            Node::Comment(comment) => &comment.raws.before,
        }
    }

    /// Replace the whitespace before this node
    pub fn set_before(&mut self, before: impl Into<String>) {
        let before = before.into();
        match self {
            Node::Rule(rule) => rule.raws.before = before,
            Node::AtRule(at_rule) => at_rule.raws.before = before,
            Node::Declaration(decl) => decl.raws.before = before,
            Node::Comment(comment) => comment.raws.before = before,
        }
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, Node::Comment(_))
    }

    /// Child nodes, for containers
    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Rule(rule) => Some(&mut rule.nodes),
            Node::AtRule(at_rule) => at_rule.nodes.as_mut(),
            Node::Declaration(_) | Node::Comment(_) => None,
        }
    }
}

impl Rule {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            ..Default::default()
        }
    }
}

impl Declaration {
    pub fn new(prop: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            prop: prop.into(),
            value: value.into(),
            raws: DeclarationRaws {
                between: ": ".to_string(),
                ..Default::default()
            },
        }
    }
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Visit every style rule, depth first, parents before children
    pub fn walk_rules_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut Rule),
    {
        walk_rules_in(&mut self.nodes, &mut f);
    }

    /// Visit every declaration, depth first, in document order
    pub fn walk_declarations_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut Declaration),
    {
        walk_declarations_in(&mut self.nodes, &mut f);
    }

    /// Number of style rules at any depth
    pub fn rule_count(&self) -> usize {
        count_rules(&self.nodes)
    }
}

fn walk_rules_in<F>(nodes: &mut [Node], f: &mut F)
where
    F: FnMut(&mut Rule),
{
    for node in nodes {
        if let Node::Rule(rule) = node {
            f(rule);
        }
        if let Some(children) = node.children_mut() {
            walk_rules_in(children, f);
        }
    }
}

fn walk_declarations_in<F>(nodes: &mut [Node], f: &mut F)
where
    F: FnMut(&mut Declaration),
{
    for node in nodes {
        match node {
            Node::Declaration(decl) => f(decl),
            other => {
                if let Some(children) = other.children_mut() {
                    walk_declarations_in(children, f);
                }
            }
        }
    }
}

fn count_rules(nodes: &[Node]) -> usize {
    nodes
        .iter()
        .map(|node| match node {
            Node::Rule(rule) => 1 + count_rules(&rule.nodes),
            Node::AtRule(at_rule) => at_rule.nodes.as_deref().map_or(0, count_rules),
            Node::Declaration(_) | Node::Comment(_) => 0,
        })
        .sum()
}
