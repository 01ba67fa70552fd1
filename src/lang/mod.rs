/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of the Aila language.

*/

pub type LineNumber = Option<usize>;
pub type Column = std::ops::Range<usize>;

#[macro_use]
mod error;
mod lex;
mod line;
mod parse;

pub mod ast;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use line::quote;
pub use line::Line;
pub use parse::parse;
