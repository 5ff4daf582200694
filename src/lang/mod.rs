/*!
# Rust Language Module

This Rust module provides scanning and parsing of the cradle language.
There is no token stream and no syntax tree. The parser reads one
character of lookahead and drives a [`Backend`] as it goes.

*/

#[macro_use]
mod error;
mod backend;
mod parse;
mod scanner;
mod token;

pub use backend::Backend;
pub use error::Error;
pub use error::ErrorCode;
pub use parse::parse;
pub use parse::Parser;
pub use scanner::Scanner;
pub use token::Operator;

pub type Column = std::ops::Range<usize>;
