//! Module for constructing lists front-to-back without building in
//! reverse at each append.

use super::cons::Cons;
use super::sexp::{HeapSexp, Sexp};


/// Accumulates elements in order; `release` assembles the cons chain
/// in one backward pass.
#[derive(Debug, Default)]
pub struct ConsList {
    elems: Vec<HeapSexp>,
}

impl ConsList {
    pub fn new() -> ConsList {
        ConsList::default()
    }

    pub fn len(&self) -> usize {
        self.elems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    pub fn append<T: Into<Sexp>>(&mut self, val: T) {
        self.elems.push(HeapSexp::new(val.into()));
    }

    /// Proper list of the appended elements; nil if none were.
    pub fn release(self) -> Sexp {
        self.release_with_tail(None)
    }

    /// Like release, but with the final cdr set to tail, yielding an
    /// improper list. An empty list releases as the tail itself.
    pub fn release_with_tail(self, tail: Option<HeapSexp>) -> Sexp {
        let mut tail = tail;
        for elem in self.elems.into_iter().rev() {
            tail = Some(HeapSexp::new(Cons::new(Some(elem), tail).into()));
        }
        match tail {
            Some(sexp) => *sexp,
            None => Sexp::default(),
        }
    }
}
