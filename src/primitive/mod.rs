//! Representation of primitives.

use std::fmt;

pub mod lang_string;
pub mod number;
pub mod package;
pub mod symbol;

pub use self::lang_string::LangString;
pub use self::number::Number;
pub use self::package::{Package, PackageId};
pub use self::symbol::Symbol;

pub mod prelude {
    pub use super::{LangString, Number, Package, PackageId, Primitive, Symbol};
}


#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// The `t` truth singleton.
    T,
    Number(Number),
    Symbol(Symbol),
    LangString(LangString),
}


impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::T => write!(f, "t"),
            Primitive::Number(num) => write!(f, "{}", num),
            Primitive::Symbol(s) => write!(f, "{}", s),
            Primitive::LangString(s) => write!(f, "{}", s),
        }
    }
}
