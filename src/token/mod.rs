// Public exports.
pub use scanner::Scanner;
pub use token::{Token, TokenKind};

// Public mods.
pub mod string_stream;
pub mod token;

// Private mods.
mod scanner;
