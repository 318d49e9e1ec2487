// src/stylesheet/stringify.rs

//! Stylesheet printer
//!
//! Writes nodes back out using their raw formatting. A declaration or
//! statement at-rule gets its `;` unless it is the last non-comment node of
//! its container and the container's `semicolon` flag is unset.

use std::fmt::{self, Write};

use super::{AtRule, Comment, Declaration, Node, Rule, Stylesheet};

impl Stylesheet {
    /// Serialize the stylesheet back to CSS text
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_nodes(f, &self.nodes, self.raws.semicolon)?;
        f.write_str(&self.raws.after)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self, false)
    }
}

fn write_nodes<W: Write>(out: &mut W, nodes: &[Node], semicolon: bool) -> fmt::Result {
    let last = nodes.iter().rposition(|node| !node.is_comment());

    for (i, node) in nodes.iter().enumerate() {
        write_node(out, node, Some(i) != last || semicolon)?;
    }
    Ok(())
}

fn write_node<W: Write>(out: &mut W, node: &Node, semicolon: bool) -> fmt::Result {
    match node {
        Node::Rule(rule) => write_rule(out, rule),
        Node::AtRule(at_rule) => write_at_rule(out, at_rule, semicolon),
        Node::Declaration(decl) => write_declaration(out, decl, semicolon),
        Node::Comment(comment) => write_comment(out, comment),
    }
}

fn write_rule<W: Write>(out: &mut W, rule: &Rule) -> fmt::Result {
    write!(out, "{}{}{}{{", rule.raws.before, rule.selector, rule.raws.between)?;
    write_nodes(out, &rule.nodes, rule.raws.semicolon)?;
    write!(out, "{}}}", rule.raws.after)
}

fn write_at_rule<W: Write>(out: &mut W, at_rule: &AtRule, semicolon: bool) -> fmt::Result {
    let raws = &at_rule.raws;
    write!(
        out,
        "{}@{}{}{}{}",
        raws.before, at_rule.name, raws.after_name, at_rule.params, raws.between
    )?;

    match &at_rule.nodes {
        Some(nodes) => {
            out.write_char('{')?;
            write_nodes(out, nodes, raws.semicolon)?;
            write!(out, "{}}}", raws.after)
        }
        None if semicolon => out.write_char(';'),
        None => Ok(()),
    }
}

fn write_declaration<W: Write>(out: &mut W, decl: &Declaration, semicolon: bool) -> fmt::Result {
    let raws = &decl.raws;
    write!(
        out,
        "{}{}{}{}{}",
        raws.before, decl.prop, raws.between, decl.value, raws.after
    )?;
    if semicolon {
        out.write_char(';')?;
    }
    Ok(())
}

fn write_comment<W: Write>(out: &mut W, comment: &Comment) -> fmt::Result {
    write!(out, "{}/*{}*/", comment.raws.before, comment.text)
}

#[cfg(test)]
mod tests {
    use super::super::parse;
    use super::*;

    #[test]
    fn test_last_declaration_semicolon_follows_flag() {
        let with = parse("a { b: c; }").unwrap();
        assert_eq!(with.to_css(), "a { b: c; }");

        let without = parse("a { b: c }").unwrap();
        assert_eq!(without.to_css(), "a { b: c }");
    }

    #[test]
    fn test_trailing_comment_does_not_count_as_last() {
        let sheet = parse("a { b: c; /* note */ }").unwrap();
        assert_eq!(sheet.to_css(), "a { b: c; /* note */ }");
    }

    #[test]
    fn test_declaration_gets_semicolon_when_followed() {
        let mut sheet = parse("a { b: c }").unwrap();
        if let Node::Rule(rule) = &mut sheet.nodes[0] {
            let mut extra = Declaration::new("d", "e");
            extra.raws.before = " ".to_string();
            rule.nodes.push(Node::Declaration(extra));
        }
        assert_eq!(sheet.to_css(), "a { b: c; d: e }");
    }

    #[test]
    fn test_node_display() {
        let node = Node::Declaration(Declaration::new("color", "red"));
        assert_eq!(node.to_string(), "color: red");
    }
}
