use std::convert::TryFrom;
use std::fmt;

use super::Primitive;
use crate::sexp::Sexp;


/// Decoded risp string contents.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct LangString(String);

impl LangString {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_string())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Decoding of c in the escape pair `\c`. Unrecognized escapes map to
    /// the char itself.
    pub fn unescape_char(c: char) -> char {
        match c {
            'n' => '\n',
            't' => '\t',
            _ => c,
        }
    }
}

impl fmt::Display for LangString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.as_str())
    }
}

impl From<LangString> for Sexp {
    fn from(string: LangString) -> Self {
        Sexp::Primitive(Primitive::LangString(string))
    }
}

impl TryFrom<Sexp> for LangString {
    type Error = Sexp;

    fn try_from(value: Sexp) -> Result<Self, Self::Error> {
        if let Sexp::Primitive(Primitive::LangString(string)) = value {
            Ok(string)
        } else {
            Err(value)
        }
    }
}
