// src/stylesheet/parser.rs

//! Stylesheet parser on top of the `cssparser` tokenizer
//!
//! Statements end at top-level `;` and `{...}` tokens. Strings, comments,
//! escapes and bracketed blocks come whole from the tokenizer, so `url(a;b)`
//! or `[title="{"]` never end a statement. Selectors, values and the
//! whitespace between nodes are sliced straight out of the input, which is
//! what keeps the tree lossless.

use cssparser::{ParseErrorKind, Parser, ParserInput, ParserState, SourceLocation, SourcePosition, Token};
use thiserror::Error;

use super::{
    AtRule, AtRuleRaws, BlockRaws, Comment, CommentRaws, Declaration, DeclarationRaws, Node,
    RootRaws, Rule, Stylesheet,
};

/// Stylesheet parse errors, with 1-based line and column
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unclosed block at {line}:{column}")]
    UnclosedBlock { line: usize, column: usize },

    #[error("Unclosed string at {line}:{column}")]
    UnclosedString { line: usize, column: usize },

    #[error("Unclosed comment at {line}:{column}")]
    UnclosedComment { line: usize, column: usize },

    #[error("Unexpected }} at {line}:{column}")]
    UnexpectedCloseBrace { line: usize, column: usize },

    #[error("Missing selector before {{ at {line}:{column}")]
    MissingSelector { line: usize, column: usize },

    #[error("Unknown word {word:?} at {line}:{column}")]
    UnknownWord {
        word: String,
        line: usize,
        column: usize,
    },

    #[error("Invalid CSS at {line}:{column}")]
    Invalid { line: usize, column: usize },
}

type CssResult<'i, T> = Result<T, cssparser::ParseError<'i, ParseError>>;

/// Parse a stylesheet
pub fn parse(css: &str) -> Result<Stylesheet, ParseError> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let body = parse_body(&mut parser).map_err(into_parse_error)?;
    Ok(Stylesheet {
        nodes: body.nodes,
        raws: RootRaws {
            after: body.after,
            semicolon: body.semicolon,
        },
    })
}

fn into_parse_error(error: cssparser::ParseError<'_, ParseError>) -> ParseError {
    let location = error.location;
    match error.kind {
        ParseErrorKind::Custom(error) => error,
        ParseErrorKind::Basic(_) => {
            let (line, column) = line_column(location);
            ParseError::Invalid { line, column }
        }
    }
}

fn line_column(location: SourceLocation) -> (usize, usize) {
    (location.line as usize + 1, location.column as usize)
}

fn fail<'i, T>(
    location: SourceLocation,
    error: impl FnOnce(usize, usize) -> ParseError,
) -> CssResult<'i, T> {
    let (line, column) = line_column(location);
    Err(location.new_custom_error(error(line, column)))
}

/// Contents of a container, up to (not including) its closing brace
struct Body {
    nodes: Vec<Node>,
    after: String,
    semicolon: bool,
}

/// Offsets collected while scanning one statement
struct Statement {
    start: SourcePosition,
    location: SourceLocation,
    /// End of the last non-whitespace token
    content_end: SourcePosition,
    /// End of the `@name` token, for at-rules
    at_name_end: Option<SourcePosition>,
    /// Start of the first token after the at-rule name
    params_start: Option<SourcePosition>,
    /// Start and end of the first top-level `:`
    colon: Option<(SourcePosition, SourcePosition)>,
}

/// Parse nodes until the end of the input or of the enclosing block
fn parse_body<'i>(input: &mut Parser<'i, '_>) -> CssResult<'i, Body> {
    let mut nodes = Vec::new();
    let mut semicolon = false;
    let mut before = String::new();

    loop {
        let state = input.state();
        let token = match input.next_including_whitespace_and_comments() {
            Ok(token) => token.clone(),
            Err(_) => {
                return Ok(Body {
                    nodes,
                    after: before,
                    semicolon,
                });
            }
        };

        match token {
            Token::WhiteSpace(space) => before.push_str(space),
            // Stray semicolon: keep it verbatim in the next node's raws
            Token::Semicolon => before.push(';'),
            Token::Comment(text) => {
                check_comment(input, &state)?;
                nodes.push(Node::Comment(Comment {
                    text: text.to_string(),
                    raws: CommentRaws {
                        before: std::mem::take(&mut before),
                    },
                }));
            }
            Token::CloseCurlyBracket => {
                return fail(state.source_location(), |line, column| {
                    ParseError::UnexpectedCloseBrace { line, column }
                });
            }
            _ => {
                input.reset(&state);
                let node = parse_statement(input, std::mem::take(&mut before), &mut semicolon)?;
                nodes.push(node);
            }
        }
    }
}

fn parse_statement<'i>(
    input: &mut Parser<'i, '_>,
    before: String,
    semicolon: &mut bool,
) -> CssResult<'i, Node> {
    let mut statement = Statement {
        start: input.position(),
        location: input.current_source_location(),
        content_end: input.position(),
        at_name_end: None,
        params_start: None,
        colon: None,
    };
    let mut content_state = input.state();
    let mut first = true;

    loop {
        let state = input.state();
        let token = match input.next_including_whitespace_and_comments() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };

        match token {
            Token::WhiteSpace(_) => continue,
            Token::Semicolon => {
                *semicolon = true;
                let trailing = input.slice(statement.content_end..state.position());
                return statement_node(input, &statement, before, trailing);
            }
            Token::CurlyBracketBlock => {
                return block_node(input, &statement, before, &state, semicolon);
            }
            // Only reachable at the root; the body reports it
            Token::CloseCurlyBracket => break,
            Token::AtKeyword(_) if first => statement.at_name_end = Some(input.position()),
            Token::Colon if statement.colon.is_none() => {
                statement.colon = Some((state.position(), input.position()));
            }
            Token::QuotedString(_) | Token::BadString(_) => check_string(input, &state)?,
            Token::Comment(_) => check_comment(input, &state)?,
            Token::Function(_) | Token::ParenthesisBlock | Token::SquareBracketBlock => {
                skip_block(input)?;
            }
            _ => {}
        }

        if !first && statement.at_name_end.is_some() && statement.params_start.is_none() {
            statement.params_start = Some(state.position());
        }
        first = false;
        statement.content_end = input.position();
        content_state = input.state();
    }

    // Unterminated: trailing whitespace belongs to the container
    input.reset(&content_state);
    *semicolon = false;
    statement_node(input, &statement, before, "")
}

/// Build a declaration or statement at-rule
fn statement_node<'i>(
    input: &Parser<'i, '_>,
    statement: &Statement,
    before: String,
    trailing: &str,
) -> CssResult<'i, Node> {
    if let Some(name_end) = statement.at_name_end {
        let (after_name, params, between) = at_rule_parts(input, statement, name_end, trailing);
        return Ok(Node::AtRule(AtRule {
            name: input.slice(statement.start..name_end)[1..].to_string(),
            params,
            nodes: None,
            raws: AtRuleRaws {
                before,
                after_name,
                between,
                ..Default::default()
            },
        }));
    }

    let Some((colon, after_colon)) = statement.colon else {
        let word = input.slice(statement.start..statement.content_end).to_string();
        return fail(statement.location, |line, column| ParseError::UnknownWord {
            word,
            line,
            column,
        });
    };

    let (prop, prop_gap) = split_trailing_whitespace(input.slice(statement.start..colon));
    let rest = input.slice(after_colon..statement.content_end);
    let value = rest.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let value_gap = &rest[..rest.len() - value.len()];

    Ok(Node::Declaration(Declaration {
        prop: prop.to_string(),
        value: value.to_string(),
        raws: DeclarationRaws {
            before,
            between: format!("{prop_gap}:{value_gap}"),
            after: trailing.to_string(),
        },
    }))
}

/// Build a rule or block at-rule; `brace` is the state before the `{` token
fn block_node<'i>(
    input: &mut Parser<'i, '_>,
    statement: &Statement,
    before: String,
    brace: &ParserState,
    semicolon: &mut bool,
) -> CssResult<'i, Node> {
    let prelude = input.slice(statement.start..statement.content_end);
    if prelude.is_empty() {
        return fail(brace.source_location(), |line, column| {
            ParseError::MissingSelector { line, column }
        });
    }
    let between = input.slice(statement.content_end..brace.position());

    let mut inner_end = None;
    let body = input.parse_nested_block(|nested| {
        let body = parse_body(nested)?;
        inner_end = Some(nested.position());
        Ok(body)
    })?;
    // A closed block ends past its `}`; an unclosed one stops at the end
    if inner_end == Some(input.position()) {
        return fail(brace.source_location(), |line, column| {
            ParseError::UnclosedBlock { line, column }
        });
    }
    *semicolon = false;

    if let Some(name_end) = statement.at_name_end {
        let (after_name, params, between) = at_rule_parts(input, statement, name_end, between);
        return Ok(Node::AtRule(AtRule {
            name: input.slice(statement.start..name_end)[1..].to_string(),
            params,
            nodes: Some(body.nodes),
            raws: AtRuleRaws {
                before,
                after_name,
                between,
                after: body.after,
                semicolon: body.semicolon,
            },
        }));
    }

    Ok(Node::Rule(Rule {
        selector: prelude.to_string(),
        nodes: body.nodes,
        raws: BlockRaws {
            before,
            between: between.to_string(),
            after: body.after,
            semicolon: body.semicolon,
        },
    }))
}

/// Split an at-rule into (after_name, params, between)
fn at_rule_parts(
    input: &Parser<'_, '_>,
    statement: &Statement,
    name_end: SourcePosition,
    trailing: &str,
) -> (String, String, String) {
    match statement.params_start {
        Some(params_start) => (
            input.slice(name_end..params_start).to_string(),
            input.slice(params_start..statement.content_end).to_string(),
            trailing.to_string(),
        ),
        // `@font-face {`: all whitespace sits between the name and the block
        None => (
            String::new(),
            String::new(),
            format!("{}{}", input.slice(name_end..statement.content_end), trailing),
        ),
    }
}

/// Consume a `(`, `[` or function block without looking inside
fn skip_block<'i>(input: &mut Parser<'i, '_>) -> CssResult<'i, ()> {
    input.parse_nested_block(|nested| {
        while nested.next_including_whitespace_and_comments().is_ok() {}
        Ok(())
    })
}

/// The tokenizer closes strings at the end of input; reject those
fn check_string<'i>(input: &Parser<'i, '_>, start: &ParserState) -> CssResult<'i, ()> {
    let raw = input.slice_from(start.position());
    let closed = match raw.chars().next() {
        Some(quote) => raw.len() >= 2 && raw.ends_with(quote),
        None => false,
    };
    if closed {
        Ok(())
    } else {
        fail(start.source_location(), |line, column| {
            ParseError::UnclosedString { line, column }
        })
    }
}

/// The tokenizer closes comments at the end of input; reject those
fn check_comment<'i>(input: &Parser<'i, '_>, start: &ParserState) -> CssResult<'i, ()> {
    let raw = input.slice_from(start.position());
    if raw.len() >= 4 && raw.ends_with("*/") {
        Ok(())
    } else {
        fail(start.source_location(), |line, column| {
            ParseError::UnclosedComment { line, column }
        })
    }
}

/// Split `text` into content and its trailing whitespace
fn split_trailing_whitespace(text: &str) -> (&str, &str) {
    let content = text.trim_end_matches(|c: char| c.is_ascii_whitespace());
    (content, &text[content.len()..])
}
