// tests/stylesheet.rs

//! Integration tests for the lossless stylesheet parser

mod common;

use common::load_fixture;
use hostcss::stylesheet::Node;
use hostcss::{parse, ParseError};

#[test]
fn test_fixtures_print_back_unchanged() {
    for name in ["full-transformation", "tree-mode", "nested-host"] {
        let (input, output) = load_fixture(name);
        assert_eq!(parse(&input).unwrap().to_css(), input, "{name}/input.css");
        assert_eq!(parse(&output).unwrap().to_css(), output, "{name}/output.css");
    }
}

#[test]
fn test_fixture_structure() {
    let (input, _) = load_fixture("tree-mode");
    let sheet = parse(&input).unwrap();

    assert!(matches!(&sheet.nodes[0], Node::Comment(c) if c.text == " Button host styles "));
    assert!(matches!(&sheet.nodes[2], Node::AtRule(at) if at.name == "media"));
    // Two :host rules at the root, two inside @media, .icon[slot] and [data-state]
    assert_eq!(sheet.rule_count(), 6);
}

#[test]
fn test_error_positions() {
    assert_eq!(
        parse(".a {\n  color: red;\n").unwrap_err(),
        ParseError::UnclosedBlock { line: 1, column: 4 }
    );
    assert_eq!(
        parse(".a { b: c; }\n}").unwrap_err(),
        ParseError::UnexpectedCloseBrace { line: 2, column: 1 }
    );
    assert!(matches!(
        parse("a { content: \"open }").unwrap_err(),
        ParseError::UnclosedString { line: 1, column: 14 }
    ));
}
