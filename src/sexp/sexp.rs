//! Module for representing S-exps.

use std::convert::TryFrom;
use std::fmt;

use super::cons::Cons;
use crate::primitive::Primitive;


/// S-exp on the heap.
///
/// Cons cells store Option<HeapSexp>, with None as nil on either side.
pub type HeapSexp = Box<Sexp>;

#[derive(Clone, PartialEq)]
pub enum Sexp {
    Primitive(Primitive),
    Cons(Cons),
}

pub struct SexpIter<'a> {
    current: Option<&'a Sexp>,
}

impl Sexp {
    /// Whether this is nil, the empty cons.
    pub fn is_none(&self) -> bool {
        if let Sexp::Cons(c) = self {
            c.car() == None && c.cdr() == None
        } else {
            false
        }
    }

    pub fn iter(&self) -> SexpIter {
        SexpIter {
            current: Some(&self),
        }
    }
}

impl Default for Sexp {
    /// Nil.
    fn default() -> Self {
        Sexp::Cons(Cons::default())
    }
}

impl<'a> Iterator for SexpIter<'a> {
    // (Sexp, from_cons).
    //
    // If from_cons is false, the element is the non-nil tail of an
    // improper list and necessarily the last one.
    type Item = (&'a Sexp, bool);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(sexp) = self.current {
            match sexp {
                Sexp::Cons(cons) => {
                    self.current = cons.cdr();
                    cons.car().map(|s| (s, true))
                }
                _ => {
                    self.current = None;
                    Some((sexp, false))
                }
            }
        } else {
            None
        }
    }
}

impl<'a> IntoIterator for &'a Sexp {
    // (Sexp, from_cons). See the Iterator impl above for more info.
    type Item = (&'a Sexp, bool);
    type IntoIter = SexpIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Sexp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sexp::Primitive(primitive) => write!(f, "{}", primitive),
            Sexp::Cons(_) => {
                if self.is_none() {
                    return write!(f, "nil");
                }
                write!(f, "(")?;
                for (pos, (val, from_cons)) in self.iter().enumerate() {
                    if pos > 0 {
                        write!(f, "{}", if from_cons { " " } else { " . " })?;
                    }
                    write!(f, "{}", val)?;
                }
                write!(f, ")")
            }
        }
    }
}

impl fmt::Debug for Sexp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self, f)
    }
}


impl From<Primitive> for Sexp {
    fn from(primitive: Primitive) -> Self {
        Sexp::Primitive(primitive)
    }
}

impl From<Sexp> for Option<HeapSexp> {
    /// Nil becomes None, so built lists have a single representation.
    fn from(sexp: Sexp) -> Self {
        if sexp.is_none() {
            None
        } else {
            Some(HeapSexp::new(sexp))
        }
    }
}

impl From<Cons> for Sexp {
    fn from(cons: Cons) -> Self {
        Sexp::Cons(cons)
    }
}

impl<'a> TryFrom<&'a Sexp> for &'a Primitive {
    type Error = &'a Sexp;

    fn try_from(value: &'a Sexp) -> Result<Self, Self::Error> {
        if let Sexp::Primitive(primitive) = value {
            Ok(primitive)
        } else {
            Err(value)
        }
    }
}


#[cfg(test)]
#[path = "./sexp_test.rs"]
mod sexp_test;
