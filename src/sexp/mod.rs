pub mod cons;
pub mod cons_list;
pub mod sexp;

pub use cons::Cons;
pub use cons_list::ConsList;
pub use sexp::{HeapSexp, Sexp, SexpIter};


/// Returns the elements as a proper Sexp list.
///
/// Elements must implement Into<Sexp>.
#[macro_export]
macro_rules! list {
    () => {
        $crate::sexp::Sexp::default()
    };
    ($($elem:expr),+ $(,)?) => {{
        let mut list = $crate::sexp::ConsList::new();
        $(list.append($elem);)+
        list.release()
    }};
}
