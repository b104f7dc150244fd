use std::convert::TryFrom;
use std::fmt;

use super::{PackageId, Primitive};
use crate::sexp::Sexp;


/// Case-normalized identifier plus the package scoping it.
///
/// Two symbols are equal iff both name and package match; the surface
/// syntax is case-insensitive, so names are stored lower-cased.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Symbol {
    name: String,
    package: PackageId,
}

impl Symbol {
    pub fn new<S: AsRef<str>>(name: S, package: PackageId) -> Symbol {
        Symbol {
            name: name.as_ref().to_lowercase(),
            package,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn package(&self) -> PackageId {
        self.package
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl From<Symbol> for Sexp {
    fn from(symbol: Symbol) -> Self {
        Sexp::Primitive(Primitive::Symbol(symbol))
    }
}

impl TryFrom<Sexp> for Symbol {
    type Error = Sexp;

    fn try_from(value: Sexp) -> Result<Self, Self::Error> {
        if let Sexp::Primitive(Primitive::Symbol(symbol)) = value {
            Ok(symbol)
        } else {
            Err(value)
        }
    }
}

impl<'a> TryFrom<&'a Sexp> for &'a Symbol {
    type Error = &'a Sexp;

    fn try_from(value: &'a Sexp) -> Result<Self, Self::Error> {
        if let Sexp::Primitive(Primitive::Symbol(symbol)) = value {
            Ok(symbol)
        } else {
            Err(value)
        }
    }
}
