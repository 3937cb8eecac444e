// ABOUTME: Grammar layer — nom combinators producing a generic tagged parse tree
//
// This module is the "external parser" boundary the core Reader is written
// against: a `ParseNode` tree whose nodes carry a tag and raw content,
// deliberately modeled on the historical `mpc`-style generic AST this
// interpreter's grammar was first specified against. The Reader (see
// `crate::reader`) is the only consumer, and never runs `nom` itself.

use crate::error::ParseError;
use nom::{
    branch::alt,
    bytes::complete::{take_while, take_while1},
    character::complete::{char, multispace0},
    combinator::recognize,
    multi::many0,
    sequence::delimited,
    IResult, Parser,
};

/// A single node of the raw parse tree: a tag naming what kind of token or
/// container this is, the raw source text it covers, and (for containers)
/// its children in order, including punctuation and comment children —
/// which the Reader is responsible for filtering, not this layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNode {
    pub tag: &'static str,
    pub content: String,
    pub children: Vec<ParseNode>,
}

impl ParseNode {
    fn leaf(tag: &'static str, content: &str) -> Self {
        ParseNode { tag, content: content.to_string(), children: Vec::new() }
    }

    fn container(tag: &'static str, children: Vec<ParseNode>) -> Self {
        ParseNode { tag, content: String::new(), children }
    }
}

fn is_atom_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "_+-*/\\=<>!&".contains(c)
}

/// A number token is a maximal atom-charset run that is entirely digits
/// with an optional leading `-`; anything else in that charset is a symbol.
/// This mirrors how a `-?[0-9]+` regex alternative only "wins" a token that
/// is wholly numeric — `123abc` is one symbol token, not a number followed
/// by a trailing symbol.
fn is_number_token(token: &str) -> bool {
    let digits = token.strip_prefix('-').unwrap_or(token);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

fn parse_number_or_symbol(input: &str) -> IResult<&str, ParseNode> {
    let (rest, token) = take_while1(is_atom_char)(input)?;
    if is_number_token(token) {
        Ok((rest, ParseNode::leaf("number", token)))
    } else {
        Ok((rest, ParseNode::leaf("symbol", token)))
    }
}

/// Captures a double-quoted string literal *with its surrounding quotes
/// included* in `content` — the Reader strips them and decodes escapes, per
/// its contract.
fn parse_string(input: &str) -> IResult<&str, ParseNode> {
    let (rest, raw) = recognize((
        char('"'),
        many0(alt((
            recognize((char('\\'), nom::character::complete::anychar)),
            recognize(nom::character::complete::none_of("\"\\")),
        ))),
        char('"'),
    ))
    .parse(input)?;
    Ok((rest, ParseNode::leaf("string", raw)))
}

fn parse_comment(input: &str) -> IResult<&str, ParseNode> {
    let (rest, _) = char(';')(input)?;
    let (rest, text) = take_while(|c| c != '\n')(rest)?;
    Ok((rest, ParseNode::leaf("comment", text)))
}

fn ws(input: &str) -> IResult<&str, &str> {
    multispace0(input)
}

fn parse_sexpr(input: &str) -> IResult<&str, ParseNode> {
    parse_delimited_expr(input, '(', ')', "sexpr")
}

fn parse_qexpr(input: &str) -> IResult<&str, ParseNode> {
    parse_delimited_expr(input, '{', '}', "qexpr")
}

fn parse_delimited_expr<'a>(
    input: &'a str,
    open: char,
    close: char,
    tag_name: &'static str,
) -> IResult<&'a str, ParseNode> {
    let open_tag: String = open.to_string();
    let close_tag: String = close.to_string();
    let (input, (_, mut children, _)) = (
        char(open),
        many0(delimited(ws, parse_expr, ws)),
        char(close),
    )
        .parse(input)?;

    children.insert(0, ParseNode::leaf("punct", &open_tag));
    children.push(ParseNode::leaf("punct", &close_tag));
    Ok((input, ParseNode::container(tag_name, children)))
}

fn parse_expr(input: &str) -> IResult<&str, ParseNode> {
    alt((parse_sexpr, parse_qexpr, parse_string, parse_comment, parse_number_or_symbol)).parse(input)
}

/// Parses a whole source string (a REPL line, or a loaded file's contents)
/// into a "root" container node whose children are the top-level `expr`
/// nodes in order — one per form the Driver will feed through the Reader,
/// Evaluator, and Printer independently.
pub fn parse_program(input: &str) -> Result<ParseNode, ParseError> {
    let (rest, children) = many0(delimited(ws, parse_expr, ws))
        .parse(input)
        .map_err(|e| ParseError::Syntax(format!("{:?}", e)))?;

    if !rest.is_empty() {
        return Err(ParseError::TrailingInput(rest.to_string()));
    }

    Ok(ParseNode::container("root", children))
}

/// Convenience used by tests and by anything wanting a single top-level
/// node rather than a whole program (e.g. documentation examples).
#[allow(dead_code)]
pub fn parse_single(input: &str) -> Result<ParseNode, ParseError> {
    let root = parse_program(input)?;
    root.children.into_iter().next().ok_or(ParseError::UnexpectedEof)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(node: &ParseNode) -> Vec<&str> {
        node.children.iter().map(|c| c.tag).collect()
    }

    #[test]
    fn test_parse_number() {
        let n = parse_single("42").unwrap();
        assert_eq!(n.tag, "number");
        assert_eq!(n.content, "42");

        let neg = parse_single("-42").unwrap();
        assert_eq!(neg.tag, "number");
        assert_eq!(neg.content, "-42");
    }

    #[test]
    fn test_parse_symbol() {
        for sym in ["foo", "foo-bar", "+", "-", "*", "/", "<=", "&", "foo_bar2"] {
            let n = parse_single(sym).unwrap();
            assert_eq!(n.tag, "symbol", "expected {sym} to parse as symbol");
            assert_eq!(n.content, sym);
        }
    }

    #[test]
    fn test_parse_string_keeps_quotes_for_reader() {
        let n = parse_single(r#""hello\nworld""#).unwrap();
        assert_eq!(n.tag, "string");
        assert_eq!(n.content, r#""hello\nworld""#);
    }

    #[test]
    fn test_parse_empty_sexpr() {
        let n = parse_single("()").unwrap();
        assert_eq!(n.tag, "sexpr");
        assert_eq!(tags(&n), vec!["punct", "punct"]);
    }

    #[test]
    fn test_parse_nested_sexpr() {
        let n = parse_single("(+ 1 (* 2 3))").unwrap();
        assert_eq!(n.tag, "sexpr");
        let inner_tags: Vec<&str> = n.children.iter().map(|c| c.tag).collect();
        assert_eq!(inner_tags, vec!["punct", "symbol", "number", "sexpr", "punct"]);
    }

    #[test]
    fn test_parse_qexpr() {
        let n = parse_single("{1 2 3}").unwrap();
        assert_eq!(n.tag, "qexpr");
        assert_eq!(n.children.len(), 5); // punct, 3 numbers, punct
    }

    #[test]
    fn test_parse_comment_inside_sexpr() {
        let n = parse_single("(1 2 ; comment\n 3)").unwrap();
        let comment_node = n.children.iter().find(|c| c.tag == "comment").unwrap();
        assert_eq!(comment_node.content, " comment");
    }

    #[test]
    fn test_parse_program_multiple_top_level_forms() {
        let root = parse_program("1 2 3").unwrap();
        assert_eq!(root.tag, "root");
        assert_eq!(root.children.len(), 3);
    }

    #[test]
    fn test_parse_unclosed_sexpr_errors() {
        assert!(parse_program("(1 2").is_err());
    }

    #[test]
    fn test_parse_unexpected_closing_errors() {
        assert!(parse_program(")").is_err());
    }
}
