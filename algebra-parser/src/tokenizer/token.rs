use logos::Logos;
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Every kind of token the lexer recognizes.
///
/// Characters outside the language lex as [`TokenKind::Symbol`] rather than failing, so the
/// parser can point at them.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TokenKind {
    /// Spaces and tabs.
    #[regex("[ \t]+")]
    Whitespace,

    /// Line breaks.
    #[regex("[\r\n]+")]
    NewLine,

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    #[token("^")]
    Exp,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[token("[")]
    OpenSquare,

    #[token("]")]
    CloseSquare,

    /// A variable or function name.
    #[regex("[A-Za-z][A-Za-z0-9_]*")]
    Name,

    /// Digits without a point.
    #[regex("[0-9]+")]
    Int,

    /// Digits on both sides of a point.
    #[regex(r"[0-9]+\.[0-9]+")]
    Float,

    /// A point that is not part of a decimal literal, as in `2..3` or `.5`.
    #[token(".")]
    Dot,

    /// Any other character.
    #[regex(".", priority = 0)]
    Symbol,
}

impl TokenKind {
    /// Whitespace and line breaks separate tokens; the grammar never consumes them.
    pub fn is_whitespace(self) -> bool {
        matches!(self, Self::Whitespace | Self::NewLine)
    }
}

/// A lexed token and the text it covers.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    pub kind: TokenKind,

    /// Byte range of the token in the source.
    pub span: Range<usize>,

    pub lexeme: &'source str,
}

impl Token<'_> {
    /// See [`TokenKind::is_whitespace`].
    pub fn is_whitespace(&self) -> bool {
        self.kind.is_whitespace()
    }
}
