mod ast;
mod error;
mod grammar;
mod locations;
pub mod tokenizer;

pub use ast::*;
pub use error::Error;
pub use grammar::{parse, Parser};
pub use locations::{Locatable, Location, Span};
pub use tokenizer::{tokenize_string, Token, TokenType};

#[cfg(test)]
mod test;
