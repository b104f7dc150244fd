//! Module for parsing risp tokens into S-exps.
//!
//! Pull-based recursive descent over the Scanner's token stream, with a
//! one-token pushback buffer between the two. Symbol resolution goes
//! through the State passed in at construction.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::error::ReadError;
use crate::primitive::{LangString, Number, Primitive, Symbol};
use crate::sexp::{ConsList, Sexp};
use crate::state::State;
use crate::token::string_stream::StringStream;
use crate::token::{Scanner, Token, TokenKind};

use crate::error::ReadErrorReason::*;


pub struct Reader<'a, S: Iterator<Item = String>> {
    state: &'a mut State,
    scanner: Scanner<S>,
    pushback: Option<Token>,
}

impl<'a> Reader<'a, StringStream> {
    pub fn from_str<T: AsRef<str>>(state: &'a mut State, src: T) -> Self {
        Reader::new(state, StringStream::new(src))
    }
}

impl<'a, S: Iterator<Item = String>> Reader<'a, S> {
    pub fn new(state: &'a mut State, source: S) -> Self {
        Self {
            state,
            scanner: Scanner::new(source),
            pushback: None,
        }
    }

    /// Reads one top-level form; Ok(None) at end of input, repeatably.
    pub fn read(&mut self) -> Result<Option<Sexp>, ReadError> {
        let token = self.next_token();
        if let TokenKind::Eof = token.token {
            return Ok(None);
        }

        self.pushback(token);
        let sexp = self.read_form()?;
        debug!("read {}", sexp);
        Ok(Some(sexp))
    }

    fn read_form(&mut self) -> Result<Sexp, ReadError> {
        let token = self.next_token();
        match token.token {
            TokenKind::LeftParen => self.read_list(token),
            TokenKind::StringBegin => self.read_string(token),
            TokenKind::Atom(_) => self.parse_atom(token),
            TokenKind::Quote
            | TokenKind::Quasiquote
            | TokenKind::Unquote
            | TokenKind::UnquoteSplicing => self.read_quoted(token),
            _ => Err(ReadError::new(UnexpectedToken, token)),
        }
    }

    fn read_list(&mut self, begin: Token) -> Result<Sexp, ReadError> {
        let mut list = ConsList::new();
        loop {
            let token = self.next_token();
            match token.token {
                TokenKind::RightParen => return Ok(list.release()),
                TokenKind::Eof => return Err(ReadError::new(UnterminatedList, begin)),
                TokenKind::Period => {
                    if list.is_empty() {
                        return Err(ReadError::new(UnexpectedToken, token));
                    }
                    return self.read_improper_tail(begin, list);
                }
                _ => {
                    self.pushback(token);
                    let elem = self.read_form()?;
                    list.append(elem);
                }
            }
        }
    }

    /// Consumes `tail )` after a penultimate period.
    fn read_improper_tail(&mut self, begin: Token, list: ConsList) -> Result<Sexp, ReadError> {
        let token = self.next_token();
        match token.token {
            TokenKind::RightParen | TokenKind::Period => {
                return Err(ReadError::new(UnexpectedToken, token));
            }
            TokenKind::Eof => return Err(ReadError::new(UnterminatedList, begin)),
            _ => {}
        }
        self.pushback(token);
        let tail = self.read_form()?;

        let close = self.next_token();
        match close.token {
            TokenKind::RightParen => Ok(list.release_with_tail(tail.into())),
            TokenKind::Eof => Err(ReadError::new(UnterminatedList, begin)),
            _ => Err(ReadError::new(UnexpectedToken, close)),
        }
    }

    fn read_quoted(&mut self, token: Token) -> Result<Sexp, ReadError> {
        let name = match token.token {
            TokenKind::Quote => "quote",
            TokenKind::Quasiquote => "quasiquote",
            TokenKind::Unquote => "unquote",
            TokenKind::UnquoteSplicing => "unquote-splicing",
            _ => panic!("non-quote token: {}", token),
        };

        let next = self.next_token();
        match next.token {
            TokenKind::Eof | TokenKind::RightParen => {
                return Err(ReadError::new(UnexpectedToken, next));
            }
            _ => {}
        }
        self.pushback(next);
        let form = self.read_form()?;

        let mut list = ConsList::new();
        list.append(Symbol::new(name, self.state.current_package()));
        list.append(form);
        Ok(list.release())
    }

    fn read_string(&mut self, begin: Token) -> Result<Sexp, ReadError> {
        let mut contents = String::default();
        loop {
            let token = self.next_token();
            match token.token {
                TokenKind::StringContent(text) => contents.push_str(&text),
                TokenKind::StringEnd => return Ok(LangString::new(contents).into()),
                TokenKind::Eof => return Err(ReadError::new(UnterminatedString, begin)),
                _ => panic!("scanner emitted {} inside a string", token),
            }
        }
    }

    fn parse_atom(&mut self, token: Token) -> Result<Sexp, ReadError> {
        let text = match &token.token {
            TokenKind::Atom(s) => s.to_lowercase(),
            _ => panic!("non-atom token: {}", token),
        };

        match text.as_str() {
            "t" => Ok(Primitive::T.into()),
            "nil" => Ok(Sexp::default()),
            _ => {
                if let Ok(num) = text.parse::<Number>() {
                    Ok(num.into())
                } else {
                    Ok(self.parse_symbol(&text))
                }
            }
        }
    }

    /// Package qualification, matched in order: `:kw` keyword,
    /// `pkg::sym` internal, `pkg:sym` external, else a plain symbol in
    /// the current package. Referenced packages are created on demand.
    fn parse_symbol(&mut self, text: &str) -> Sexp {
        lazy_static! {
            static ref KEYWORD: Regex = Regex::new(r"^:(.*)$").unwrap();
            static ref INTERNAL: Regex = Regex::new(r"^([^:]+?)::(.*)$").unwrap();
            static ref EXTERNAL: Regex = Regex::new(r"^([^:]+?):(.*)$").unwrap();
        }

        let symbol = if let Some(cap) = KEYWORD.captures(text) {
            Symbol::new(&cap[1], self.state.keyword_package())
        } else if let Some(cap) = INTERNAL.captures(text) {
            let package = self.state.define_package(&cap[1]);
            Symbol::new(&cap[2], package)
        } else if let Some(cap) = EXTERNAL.captures(text) {
            let package = self.state.define_package(&cap[1]);
            Symbol::new(&cap[2], package)
        } else {
            Symbol::new(text, self.state.current_package())
        };
        symbol.into()
    }

    fn next_token(&mut self) -> Token {
        match self.pushback.take() {
            Some(token) => token,
            None => self.scanner.next_token(),
        }
    }

    fn pushback(&mut self, token: Token) {
        debug_assert!(self.pushback.is_none());
        self.pushback = Some(token);
    }
}


#[cfg(test)]
#[path = "./reader_test.rs"]
mod reader_test;
