//! Reader for the risp dialect of Lisp.
//!
//! Turns a line-oriented character source into S-exps: a mode-based
//! [`Scanner`](token::Scanner) produces a lazy token stream, and a
//! [`Reader`](reader::Reader) drives it with a recursive-descent grammar,
//! resolving symbols against the package registry held in a
//! [`State`](state::State).

pub mod error;
pub mod primitive;
pub mod reader;
pub mod sexp;
pub mod state;
pub mod token;

pub mod prelude {
    pub use crate::error::{ReadError, ReadErrorReason};
    pub use crate::primitive::prelude::*;
    pub use crate::reader::Reader;
    pub use crate::sexp::{Cons, ConsList, HeapSexp, Sexp};
    pub use crate::state::State;
    pub use crate::token::{Scanner, Token, TokenKind};
    // Macros.
    pub use crate::list;
}
