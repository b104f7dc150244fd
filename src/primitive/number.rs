//! Representation of risp numbers.

use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use self::Number::*;
use super::Primitive;
use crate::sexp::Sexp;


#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl FromStr for Number {
    type Err = ();

    /// Integer if the entire text is a signed decimal integer, else Float
    /// if it is a decimal float literal. Note that textual float spellings
    /// accepted by f64 ("inf", "NaN") are deliberately excluded; those
    /// read as symbols.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(n) = s.parse::<i64>() {
            return Ok(Integer(n));
        }
        if is_float_literal(s) {
            if let Ok(x) = s.parse::<f64>() {
                return Ok(Float(x));
            }
        }
        Err(())
    }
}

fn is_float_literal(s: &str) -> bool {
    let body = match s.as_bytes().first() {
        Some(b'+') | Some(b'-') => &s[1..],
        _ => s,
    };
    body.bytes().any(|b| b.is_ascii_digit())
        && body
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'))
}


impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Integer(n) => write!(f, "{}", n),
            Float(x) => write!(f, "{}", x),
        }
    }
}

impl From<Number> for Sexp {
    fn from(num: Number) -> Self {
        Sexp::Primitive(Primitive::Number(num))
    }
}

impl TryFrom<Sexp> for Number {
    type Error = Sexp;

    fn try_from(value: Sexp) -> Result<Self, Self::Error> {
        if let Sexp::Primitive(Primitive::Number(num)) = value {
            Ok(num)
        } else {
            Err(value)
        }
    }
}
