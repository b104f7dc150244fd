//! Module for breaking risp text into tokens.

use std::collections::VecDeque;

use log::trace;

use super::token::{Token, TokenKind};
use crate::primitive::LangString;

use self::ScanState::*;


/// Essentially a Mealy machine producing Tokens from a line source.
///
/// Scans lazily: one source line is consumed per refill of the token
/// queue, and string state carries across line boundaries. Forward-only
/// and consumed once; after the source is exhausted every pull returns
/// an Eof token.
pub struct Scanner<S: Iterator<Item = String>> {
    source: S,

    // Mealy machine state.
    state: ScanState,
    line: usize,

    tokens: VecDeque<Token>,
    exhausted: bool,
}

#[derive(Clone, Copy, Debug)]
enum ScanState {
    Default,
    InString,
    // Col of the backslash.
    InStringEscaped(usize),
}


impl<S: Iterator<Item = String>> Scanner<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: ScanState::Default,
            line: 1,
            tokens: VecDeque::default(),
            exhausted: false,
        }
    }

    /// Next token in the stream; Eof forever once the source runs out.
    pub fn next_token(&mut self) -> Token {
        loop {
            if let Some(token) = self.tokens.pop_front() {
                return token;
            }
            if self.exhausted {
                return Token {
                    token: TokenKind::Eof,
                    line: self.line,
                    col: 1,
                };
            }
            match self.source.next() {
                Some(line) => {
                    self.scan_line(&line);
                    self.line += 1;
                }
                None => self.exhausted = true,
            }
        }
    }

    fn scan_line(&mut self, line: &str) {
        // Sources may deliver lines with or without terminators.
        let mut l = line;
        if let Some(stripped) = l.strip_suffix('\n') {
            l = stripped;
        }
        if let Some(stripped) = l.strip_suffix('\r') {
            l = stripped;
        }

        let mut start: usize = 0;
        let mut empty = true;
        let mut chars = l.char_indices().peekable();
        while let Some((i, c)) = chars.next() {
            match self.state {
                Default => {
                    if c.is_whitespace() {
                        if !empty {
                            self.push_atom(&l[start..i], start);
                            empty = true;
                        }
                        continue;
                    } else if c == ';' {
                        if !empty {
                            self.push_atom(&l[start..i], start);
                            empty = true;
                        }
                        // Comment to EOL; no token.
                        break;
                    }

                    match c {
                        '(' | ')' | '\'' | '`' | ',' => {
                            if !empty {
                                self.push_atom(&l[start..i], start);
                                empty = true;
                            }
                            let token = match c {
                                '(' => TokenKind::LeftParen,
                                ')' => TokenKind::RightParen,
                                '\'' => TokenKind::Quote,
                                '`' => TokenKind::Quasiquote,
                                ',' => {
                                    if let Some(&(_, '@')) = chars.peek() {
                                        chars.next();
                                        TokenKind::UnquoteSplicing
                                    } else {
                                        TokenKind::Unquote
                                    }
                                }
                                _ => panic!(),
                            };
                            self.push(token, i);
                        }
                        '.' => {
                            // A period only stands alone at the start of a
                            // token; within a run it joins the atom (12.3,
                            // a.b).
                            if empty {
                                self.push(TokenKind::Period, i);
                            }
                        }
                        '"' => {
                            if !empty {
                                self.push_atom(&l[start..i], start);
                                empty = true;
                            }
                            self.push(TokenKind::StringBegin, i);
                            self.state = InString;
                        }
                        _ => {
                            if empty {
                                empty = false;
                                start = i;
                            }
                        }
                    }
                }
                InString => match c {
                    '\\' => {
                        if !empty {
                            self.push_content(&l[start..i], start);
                            empty = true;
                        }
                        self.state = InStringEscaped(i);
                    }
                    '"' => {
                        if !empty {
                            self.push_content(&l[start..i], start);
                            empty = true;
                        }
                        self.push(TokenKind::StringEnd, i);
                        self.state = Default;
                    }
                    _ => {
                        if empty {
                            empty = false;
                            start = i;
                        }
                    }
                },
                InStringEscaped(col) => {
                    let decoded = LangString::unescape_char(c);
                    self.push(TokenKind::StringContent(decoded.to_string()), col);
                    self.state = InString;
                }
            }
        }

        // EOL handling.
        match self.state {
            Default => {
                if !empty {
                    self.push_atom(&l[start..], start);
                }
            }
            InString => {
                if !empty {
                    self.push_content(&l[start..], start);
                }
                self.push(TokenKind::StringContent("\n".to_string()), l.len());
            }
            InStringEscaped(col) => {
                // Backslash at EOL escapes the line break itself.
                self.push(TokenKind::StringContent("\n".to_string()), col);
                self.state = InString;
            }
        }
    }

    fn push(&mut self, token: TokenKind, col: usize) {
        let token = Token {
            token,
            line: self.line,
            col: col + 1,
        };
        trace!("scanned {}", token);
        self.tokens.push_back(token);
    }

    fn push_atom(&mut self, text: &str, col: usize) {
        self.push(TokenKind::Atom(text.to_string()), col);
    }

    fn push_content(&mut self, text: &str, col: usize) {
        self.push(TokenKind::StringContent(text.to_string()), col);
    }
}


#[cfg(test)]
#[path = "./scanner_test.rs"]
mod scanner_test;
