//! Template parser: token stream to a tree of [`Node`]s.
//!
//! Uses the logos tokenizer from [`crate::css::tokenizer`]. Text between
//! structural tokens is buffered; `{` turns the buffer into a block prelude,
//! `;` and `}` turn it into a declaration.

use crate::css::model::Node;
use crate::css::tokenizer::{tokenize, LexError, Token};

/// Errors from template parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    #[error("unexpected '}}' at byte {position}")]
    UnexpectedClose { position: usize },
    #[error("block '{prelude}' is never closed")]
    UnclosedBlock { prelude: String },
    #[error("unterminated string starting at byte {position}")]
    UnterminatedString { position: usize },
    #[error("unterminated comment starting at byte {position}")]
    UnterminatedComment { position: usize },
}

/// A block under construction.
struct Frame {
    prelude: String,
    children: Vec<Node>,
}

/// Parse a style template into nodes.
pub fn parse_template(input: &str) -> Result<Vec<Node>, CompileError> {
    let lexemes = tokenize(input).map_err(|(err, position)| match err {
        LexError::UnterminatedString => CompileError::UnterminatedString { position },
        LexError::UnterminatedComment => CompileError::UnterminatedComment { position },
    })?;

    let mut root = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();
    let mut buffer = String::new();
    let mut paren_depth = 0usize;

    for lexeme in lexemes {
        match lexeme.token {
            Token::Comment => buffer.push(' '),
            Token::ParenOpen => {
                paren_depth += 1;
                buffer.push('(');
            }
            Token::ParenClose => {
                paren_depth = paren_depth.saturating_sub(1);
                buffer.push(')');
            }
            // `;` inside parens belongs to the value, e.g. data URIs.
            Token::Semicolon if paren_depth > 0 => buffer.push(';'),
            Token::Semicolon => {
                let children = match stack.last_mut() {
                    Some(frame) => &mut frame.children,
                    None => &mut root,
                };
                flush_declaration(&mut buffer, children);
            }
            Token::BraceOpen => {
                let prelude = collapse_whitespace(&buffer);
                buffer.clear();
                paren_depth = 0;
                stack.push(Frame {
                    prelude,
                    children: Vec::new(),
                });
            }
            Token::BraceClose => {
                let Some(mut frame) = stack.pop() else {
                    return Err(CompileError::UnexpectedClose {
                        position: lexeme.offset,
                    });
                };
                flush_declaration(&mut buffer, &mut frame.children);
                paren_depth = 0;
                let block = Node::block(frame.prelude, frame.children);
                match stack.last_mut() {
                    Some(parent) => parent.children.push(block),
                    None => root.push(block),
                }
            }
            Token::DoubleQuoted | Token::SingleQuoted | Token::Text | Token::Slash => {
                buffer.push_str(lexeme.text);
            }
        }
    }

    if let Some(open) = stack.pop() {
        return Err(CompileError::UnclosedBlock {
            prelude: open.prelude,
        });
    }
    flush_declaration(&mut buffer, &mut root);
    Ok(root)
}

/// Turn the buffered text into a declaration (or at-rule statement) and
/// clear the buffer. Text without a `:` is not a declaration and is dropped.
fn flush_declaration(buffer: &mut String, into: &mut Vec<Node>) {
    let text = collapse_whitespace(buffer);
    buffer.clear();
    if text.is_empty() {
        return;
    }
    if text.starts_with('@') {
        into.push(Node::Statement(text));
        return;
    }
    match text.split_once(':') {
        Some((property, value)) => {
            let property = property.trim();
            let value = tighten_commas(value.trim());
            if !property.is_empty() && !value.is_empty() {
                into.push(Node::declaration(property, value));
            }
        }
        None => tracing::trace!(text = %text, "dropping template text without a property"),
    }
}

/// Collapse whitespace runs outside quotes to a single space and trim.
pub(crate) fn collapse_whitespace(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut quote: Option<char> = None;
    let mut pending_space = false;

    for ch in input.chars() {
        match quote {
            Some(q) => {
                out.push(ch);
                if ch == q {
                    quote = None;
                }
            }
            None if ch.is_whitespace() => pending_space = true,
            None => {
                if pending_space && !out.is_empty() {
                    out.push(' ');
                }
                pending_space = false;
                if ch == '"' || ch == '\'' {
                    quote = Some(ch);
                }
                out.push(ch);
            }
        }
    }
    out
}

/// Drop the space that follows a comma outside quotes: `a, b` -> `a,b`.
fn tighten_commas(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut quote: Option<char> = None;
    let mut after_comma = false;

    for ch in input.chars() {
        if let Some(q) = quote {
            out.push(ch);
            if ch == q {
                quote = None;
            }
            continue;
        }
        if after_comma && ch == ' ' {
            continue;
        }
        after_comma = ch == ',';
        if ch == '"' || ch == '\'' {
            quote = Some(ch);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn flat_declarations() {
        let nodes = parse_template("color: red;\n  margin : 0  auto ;").unwrap();
        assert_eq!(
            nodes,
            vec![
                Node::declaration("color", "red"),
                Node::declaration("margin", "0 auto"),
            ]
        );
    }

    #[test]
    fn trailing_declaration_without_semicolon() {
        let nodes = parse_template("color: red").unwrap();
        assert_eq!(nodes, vec![Node::declaration("color", "red")]);
    }

    #[test]
    fn nested_blocks() {
        let nodes = parse_template(
            "color: red;
             &:hover { color: blue; & > span { color: green } }",
        )
        .unwrap();
        assert_eq!(
            nodes,
            vec![
                Node::declaration("color", "red"),
                Node::block(
                    "&:hover",
                    vec![
                        Node::declaration("color", "blue"),
                        Node::block("& > span", vec![Node::declaration("color", "green")]),
                    ]
                ),
            ]
        );
    }

    #[test]
    fn comments_are_ignored() {
        let nodes = parse_template("/* brand */ color: /* x */ red;").unwrap();
        assert_eq!(nodes, vec![Node::declaration("color", "red")]);
    }

    #[test]
    fn semicolon_inside_parens_stays_in_value() {
        let nodes =
            parse_template("background: url(data:image/png;base64,AAA);").unwrap();
        assert_eq!(
            nodes,
            vec![Node::declaration(
                "background",
                "url(data:image/png;base64,AAA)"
            )]
        );
    }

    #[test]
    fn multiline_values_are_tightened() {
        let nodes = parse_template(
            "transition: background-color 250ms,\n      border 250ms;",
        )
        .unwrap();
        assert_eq!(
            nodes,
            vec![Node::declaration(
                "transition",
                "background-color 250ms,border 250ms"
            )]
        );
    }

    #[test]
    fn quoted_values_keep_spacing() {
        let nodes = parse_template(r#"content: "a,  b";"#).unwrap();
        assert_eq!(nodes, vec![Node::declaration("content", r#""a,  b""#)]);
    }

    #[test]
    fn at_statement() {
        let nodes = parse_template("@import url(reset.css);").unwrap();
        assert_eq!(nodes, vec![Node::Statement("@import url(reset.css)".into())]);
    }

    #[test]
    fn text_without_colon_is_dropped() {
        let nodes = parse_template("garbage; color: red;").unwrap();
        assert_eq!(nodes, vec![Node::declaration("color", "red")]);
    }

    #[test]
    fn unexpected_close() {
        let err = parse_template("color: red; }").unwrap_err();
        assert_eq!(err, CompileError::UnexpectedClose { position: 12 });
    }

    #[test]
    fn unclosed_block() {
        let err = parse_template("&:hover { color: red;").unwrap_err();
        assert_eq!(
            err,
            CompileError::UnclosedBlock {
                prelude: "&:hover".into()
            }
        );
    }

    #[test]
    fn unterminated_string() {
        let err = parse_template("content: 'x").unwrap_err();
        assert!(matches!(err, CompileError::UnterminatedString { position: 9 }));
    }

    #[test]
    fn unterminated_comment() {
        let err = parse_template("color: red; /* note").unwrap_err();
        assert_eq!(err, CompileError::UnterminatedComment { position: 12 });
    }

    #[test]
    fn comment_hides_structure() {
        let nodes = parse_template("color: red; /* } { ; */ margin: 0;").unwrap();
        assert_eq!(
            nodes,
            vec![
                Node::declaration("color", "red"),
                Node::declaration("margin", "0"),
            ]
        );
    }

    #[test]
    fn collapse_whitespace_keeps_quotes() {
        assert_eq!(collapse_whitespace("  a \n\t b  'c   d' "), "a b 'c   d'");
    }
}
