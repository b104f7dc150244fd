use std::fmt;


#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    LeftParen,
    RightParen,
    Period,
    Quote,
    Quasiquote,
    Unquote,
    UnquoteSplicing,
    Atom(String),
    StringBegin,
    /// Decoded text; one token per content run or escape.
    StringContent(String),
    StringEnd,
    Eof,
}

/// A scanned token plus the 1-based position of its first byte.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub token: TokenKind,
    pub line: usize,
    pub col: usize,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ ({}, {})", self.token, self.line, self.col)
    }
}
