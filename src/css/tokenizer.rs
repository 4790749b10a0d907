//! logos-based tokenizer for style templates.
//!
//! Templates are mostly free text (selectors and declaration values are
//! passed through), so the lexer only separates the characters that carry
//! structure: braces, semicolons, parentheses, comments and quoted strings.
//! Whitespace is kept inside [`Token::Text`] because values need it.

use logos::{Lexer, Logos};

/// Why the lexer stopped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LexError {
    /// A quote with no closing quote. Every other character lexes, so this
    /// is also what logos reports for unmatched input.
    #[default]
    UnterminatedString,
    /// `/*` with no closing `*/`.
    UnterminatedComment,
}

/// Structural token produced by the template lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(error = LexError)]
pub enum Token {
    /// `/* ... */` block comment.
    #[token("/*", block_comment)]
    Comment,

    /// Double-quoted string, escapes allowed.
    #[regex(r#""([^"\\]|\\.)*""#)]
    DoubleQuoted,

    /// Single-quoted string, escapes allowed.
    #[regex(r"'([^'\\]|\\.)*'")]
    SingleQuoted,

    /// `{`
    #[token("{")]
    BraceOpen,

    /// `}`
    #[token("}")]
    BraceClose,

    /// `;`
    #[token(";")]
    Semicolon,

    /// `(`
    #[token("(")]
    ParenOpen,

    /// `)`
    #[token(")")]
    ParenClose,

    /// A lone `/` that does not open a comment (e.g. `grid-area: 1 / 2`).
    #[token("/")]
    Slash,

    /// Any run of characters without structural meaning.
    #[regex(r#"[^{};()"'/]+"#)]
    Text,
}

/// Consume a block comment up to and including its `*/`.
fn block_comment(lex: &mut Lexer<Token>) -> Result<(), LexError> {
    match lex.remainder().find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            Ok(())
        }
        None => {
            lex.bump(lex.remainder().len());
            Err(LexError::UnterminatedComment)
        }
    }
}

/// A lexed token with its source slice and byte offset.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme<'a> {
    pub token: Token,
    pub text: &'a str,
    pub offset: usize,
}

/// Tokenize a template. On failure returns the error and the byte offset
/// where the offending string or comment starts.
pub fn tokenize(input: &str) -> Result<Vec<Lexeme<'_>>, (LexError, usize)> {
    let mut lexer = Token::lexer(input);
    let mut out = Vec::new();
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(token) => out.push(Lexeme {
                token,
                text: &input[span.clone()],
                offset: span.start,
            }),
            Err(err) => return Err((err, span.start)),
        }
    }
    Ok(out)
}
