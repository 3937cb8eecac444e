// ABOUTME: Reader — converts a raw ParseNode tree into Value data
//
// This is the in-scope half of "parsing": it owns number/string decoding and
// container construction, and is the only module that knows how to turn the
// grammar layer's generic tagged tree into the interpreter's own data model.

use crate::parser::ParseNode;
use crate::value::Value;

/// Reads a whole program node (tag `"root"`) into its top-level forms, one
/// `Value` per child, in source order.
pub fn read_program(node: &ParseNode) -> Vec<Value> {
    node.children.iter().filter_map(read_node).collect()
}

/// Reads a single node into a `Value`, or `None` for nodes the Reader
/// discards outright (punctuation, comments) rather than turning into data.
fn read_node(node: &ParseNode) -> Option<Value> {
    match node.tag {
        "punct" | "comment" => None,
        "number" => Some(read_number(&node.content)),
        "symbol" => Some(Value::Symbol(node.content.clone())),
        "string" => Some(read_string(&node.content)),
        "sexpr" => Some(Value::SExpr(read_children(node))),
        "qexpr" => Some(Value::QExpr(read_children(node))),
        other => panic!("reader: unrecognized node tag '{}'", other),
    }
}

fn read_children(node: &ParseNode) -> Vec<Value> {
    node.children.iter().filter_map(read_node).collect()
}

fn read_number(token: &str) -> Value {
    match token.parse::<i64>() {
        Ok(n) => Value::Number(n),
        Err(_) => Value::Error(format!("invalid number '{}'", token)),
    }
}

/// `content` always includes the surrounding quotes (the grammar layer's
/// contract); this strips them and decodes the small escape set the
/// language supports: `\\`, `\"`, `\n`, `\t`.
fn read_string(content: &str) -> Value {
    let inner = &content[1..content.len() - 1];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some('"') => out.push('"'),
                Some('\\') => out.push('\\'),
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                None => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    Value::String(out)
}
