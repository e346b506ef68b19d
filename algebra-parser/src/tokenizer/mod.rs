//! Lexing with `logos`.

pub mod token;

use logos::Logos;
pub use token::{Token, TokenKind};

/// Lexes the whole input up front, so that the parser can backtrack by resetting an index.
///
/// Whitespace tokens are kept; the parser skips them.
pub fn tokenize_complete(input: &str) -> Box<[Token]> {
    TokenKind::lexer(input)
        .spanned()
        .map(|(kind, span)| Token {
            kind: kind.unwrap_or(TokenKind::Symbol),
            lexeme: &input[span.clone()],
            span,
        })
        .collect()
}
