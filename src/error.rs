//! Syntax error reporting for the reader.
//!
//! All reader failures carry the offending token, which in turn carries the
//! position it was scanned at. Scanner-internal impossible states are
//! defects, not errors, and panic instead.

use std::fmt;

use crate::token::Token;

use self::ReadErrorReason::*;


#[derive(Clone, Debug, PartialEq)]
pub struct ReadError {
    reason: ReadErrorReason,
    token: Token,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReadErrorReason {
    UnexpectedToken,
    UnterminatedList,
    UnterminatedString,
}

impl ReadError {
    pub fn new(reason: ReadErrorReason, token: Token) -> Self {
        Self { reason, token }
    }

    pub fn reason(&self) -> ReadErrorReason {
        self.reason
    }

    /// The offending token. For unterminated lists & strings, this is the
    /// opening token.
    pub fn token(&self) -> &Token {
        &self.token
    }

    pub fn line(&self) -> usize {
        self.token.line
    }

    pub fn col(&self) -> usize {
        self.token.col
    }
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.reason {
            UnexpectedToken => "unexpected token",
            UnterminatedList => "unterminated list",
            UnterminatedString => "unterminated string",
        };
        write!(
            f,
            "{}:{}: {} - {}",
            self.token.line, self.token.col, what, self.token
        )
    }
}

impl std::error::Error for ReadError {}
